use proxy_registry::{resolve_target, Registry, RegistryError};
use std::panic::{self, AssertUnwindSafe};

struct UnregisteredService;

fn main() {
  let registry = Registry::new().expect("guard is not raised");

  // --- Using the fallible `resolve` method ---
  println!("Attempting to resolve a proxy that was never registered...");

  match registry.resolve("never::Registered") {
    Ok(_) => panic!("Should not have found a target!"),
    Err(RegistryError::NotRegistered { proxy_id }) => {
      println!("Correctly failed with NotRegistered for {:?}.", proxy_id)
    }
    Err(other) => panic!("Unexpected error: {}", other),
  }

  // --- Using the panicking `resolve_target!` macro ---
  println!("\nNow, attempting the same through the panicking macro...");

  let result = panic::catch_unwind(AssertUnwindSafe(|| {
    let _service = resolve_target!(registry, UnregisteredService, "never::Registered");
  }));

  assert!(result.is_err(), "resolve_target! should have panicked.");
  println!("Successfully caught the expected panic from resolve_target!.");
}
