use proxy_registry::{container_handle, resolve_target, target, Registry};

use std::panic::{self, AssertUnwindSafe};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use std::thread;
use std::time::Duration;

// --- Advanced Test Fixtures ---

struct ExpensiveService {
  id: usize,
}

// --- Advanced Tests ---

#[test]
fn factory_is_invoked_only_once_under_concurrent_first_resolution() {
  // This test is critical for the single-invocation guarantee: under
  // concurrent first resolution, exactly one caller runs the factory and all
  // callers observe the same resulting instance.

  static FACTORY_EXECUTION_COUNT: AtomicUsize = AtomicUsize::new(0);

  // Arrange
  let registry = Registry::new().unwrap();
  registry
    .register_factory(
      "app::Expensive",
      || {
        let id = FACTORY_EXECUTION_COUNT.fetch_add(1, Ordering::SeqCst);
        // Widen the race window.
        thread::sleep(Duration::from_millis(50));
        ExpensiveService { id }
      },
      "expensive",
      None,
    )
    .unwrap();

  // Act
  let observed: Vec<Arc<ExpensiveService>> = thread::scope(|s| {
    let handles: Vec<_> = (0..20)
      .map(|_| s.spawn(|| registry.resolve_as::<ExpensiveService>("app::Expensive").unwrap()))
      .collect();
    handles.into_iter().map(|h| h.join().unwrap()).collect()
  });

  // Assert
  assert_eq!(FACTORY_EXECUTION_COUNT.load(Ordering::SeqCst), 1);
  for service in &observed[1..] {
    assert!(Arc::ptr_eq(&observed[0], service));
    assert_eq!(service.id, 0);
  }
}

#[test]
fn concurrent_registration_and_resolution_do_not_interfere() {
  // Stress test: registering new targets while resolving others must not
  // deadlock or lose writes.

  // Arrange
  let registry = Registry::new().unwrap();
  registry
    .register_instance("app::Common", 42_i32, "common", None)
    .unwrap();

  // Act
  thread::scope(|s| {
    for i in 0..10_usize {
      let registry = &registry;
      s.spawn(move || {
        let proxy_id = format!("worker::Service_{}", i);
        registry
          .register_instance(&proxy_id, i, &format!("service-{}", i), None)
          .unwrap();

        for _ in 0..100 {
          let common = registry.resolve_as::<i32>("app::Common").unwrap();
          assert_eq!(*common, 42);
        }

        let own = registry.resolve_as::<usize>(&proxy_id).unwrap();
        assert_eq!(*own, i);
      });
    }
  });

  // Assert: a write from one of the threads is visible afterwards.
  let check = registry.resolve_as::<usize>("worker::Service_5").unwrap();
  assert_eq!(*check, 5);
}

#[test]
fn replacing_the_default_container_returns_the_previous_binding() {
  // Arrange
  let registry = Registry::new().unwrap();
  assert!(registry.default_container().is_none());

  let first = container_handle(|id: &str| target(format!("first:{}", id)));
  let second = container_handle(|id: &str| target(format!("second:{}", id)));

  // Act
  let previous = registry.set_default_container(first);
  assert!(previous.is_none());

  let displaced = registry.set_default_container(second).unwrap();

  // Assert: the displaced handle is the first one, and can be restored
  // (stack-like usage is the caller's responsibility).
  let probe = displaced("db");
  assert_eq!(*probe.downcast::<String>().unwrap(), "first:db");

  registry.set_default_container(displaced);
  registry
    .register_service("app::Db", "db", "database", None, None)
    .unwrap();
  let resolved = registry.resolve_as::<String>("app::Db").unwrap();
  assert_eq!(*resolved, "first:db");
}

#[test]
fn service_entries_keep_the_container_they_were_registered_with() {
  // The descriptor remembers *which* container to call: replacing the default
  // afterwards must not affect an already-registered service entry.

  // Arrange
  let registry = Registry::new().unwrap();
  registry.set_default_container(container_handle(|id: &str| target(format!("old:{}", id))));
  registry
    .register_service("app::Db", "db", "database", None, None)
    .unwrap();

  // Act
  registry.set_default_container(container_handle(|id: &str| target(format!("new:{}", id))));

  // Assert
  let resolved = registry.resolve_as::<String>("app::Db").unwrap();
  assert_eq!(*resolved, "old:db");
}

#[test]
fn factory_panics_propagate_to_the_resolving_caller() {
  // Downstream failures are neither retried nor wrapped.

  // Arrange
  let registry = Registry::new().unwrap();
  registry
    .register_factory::<ExpensiveService, _>(
      "app::Broken",
      || panic!("target construction failed"),
      "broken",
      None,
    )
    .unwrap();

  // Act
  let result = panic::catch_unwind(AssertUnwindSafe(|| registry.resolve("app::Broken")));

  // Assert
  assert!(result.is_err());
}

#[test]
fn container_panics_propagate_to_the_resolving_caller() {
  // Arrange
  let container = container_handle(|id: &str| panic!("container has no service {:?}", id));
  let registry = Registry::with_container(container).unwrap();
  registry
    .register_service("app::Ghost", "ghost.service", "ghost", None, None)
    .unwrap();

  // Act
  let result = panic::catch_unwind(AssertUnwindSafe(|| registry.resolve("app::Ghost")));

  // Assert
  assert!(result.is_err());
}

#[test]
fn resolve_target_macro_resolves_typed_targets() {
  // Arrange
  let registry = Registry::new().unwrap();
  registry
    .register_factory("app::Expensive", || ExpensiveService { id: 7 }, "expensive", None)
    .unwrap();

  // Act
  let service = resolve_target!(registry, ExpensiveService, "app::Expensive");

  // Assert
  assert_eq!(service.id, 7);
}

#[test]
#[should_panic(expected = "failed to resolve proxy")]
fn resolve_target_macro_panics_on_missing_targets() {
  let registry = Registry::new().unwrap();
  let _service = resolve_target!(registry, ExpensiveService, "never::Registered");
}
