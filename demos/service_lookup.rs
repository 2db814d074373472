use proxy_registry::{container_handle, target, Registry};
use std::sync::atomic::{AtomicUsize, Ordering};

static CONTAINER_CALLS: AtomicUsize = AtomicUsize::new(0);

// A stand-in for a real service container: hands out a fresh object per call.
fn build_container() -> proxy_registry::ContainerHandle {
  container_handle(|id: &str| {
    let call = CONTAINER_CALLS.fetch_add(1, Ordering::SeqCst);
    println!("Container asked for {:?} (call #{})", id, call + 1);
    target(format!("{}#{}", id, call))
  })
}

fn main() {
  // Bind a default container at construction time.
  let registry = Registry::with_container(build_container()).expect("guard is not raised");

  // --- Service Registration ---
  // No explicit container given: the default one is used.
  registry
    .register_service("app::Mailer", "mailer.service", "mailer", None, None)
    .unwrap();

  println!("--- Resolving Services ---");
  let m1 = registry.resolve_as::<String>("app::Mailer").unwrap();
  let m2 = registry.resolve_as::<String>("app::Mailer").unwrap();
  println!("Resolution 1: {}", m1);
  println!("Resolution 2: {}", m2);

  // Service targets are never cached by the registry: the container was
  // consulted on every resolution.
  assert_eq!(CONTAINER_CALLS.load(Ordering::SeqCst), 2);
  assert_ne!(*m1, *m2);
  println!("The container was invoked once per resolution, as expected.");
}
