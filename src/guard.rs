//! The process-wide singleton guard.
//!
//! A raise-only atomic flag with an init-once lifecycle: configuration glue
//! raises it once, early, and from then on every registry construction in the
//! process fails with `SingletonViolation`. There is no reset.

use std::sync::atomic::{AtomicBool, Ordering};

static GUARD_RAISED: AtomicBool = AtomicBool::new(false);

/// Raises the guard, forbidding all further registry construction for the
/// life of the process. Idempotent.
pub fn raise() {
  GUARD_RAISED.store(true, Ordering::Release);
}

/// Returns whether the guard has been raised.
pub fn is_raised() -> bool {
  GUARD_RAISED.load(Ordering::Acquire)
}
