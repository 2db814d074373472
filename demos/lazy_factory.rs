use proxy_registry::Registry;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};

// A service that gets a unique ID upon creation.
struct RequestTracker {
  id: usize,
}

static ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn main() {
  let registry = Registry::new().expect("guard is not raised");

  // --- Factory Registration ---
  // This factory will only be called ONCE, on first resolution.
  registry
    .register_factory(
      "app::Tracker",
      || {
        println!("Creating RequestTracker...");
        RequestTracker {
          id: ID_COUNTER.fetch_add(1, Ordering::SeqCst),
        }
      },
      "tracker",
      None,
    )
    .unwrap();

  println!("Registered. The factory has not run yet.");

  println!("\n--- Resolving ---");
  let t1 = registry.resolve_as::<RequestTracker>("app::Tracker").unwrap();
  let t2 = registry.resolve_as::<RequestTracker>("app::Tracker").unwrap();
  println!("Tracker 1 ID: {}, Tracker 2 ID: {}", t1.id, t2.id);

  assert_eq!(t1.id, 0);
  assert_eq!(t2.id, 0);
  assert!(
    Arc::ptr_eq(&t1, &t2),
    "Resolved targets should be identical"
  );
  println!("Both resolutions returned the same pointer, as expected.");
  assert_eq!(ID_COUNTER.load(Ordering::SeqCst), 1);
}
