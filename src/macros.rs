//! Public macros for ergonomic target resolution.

/// Resolves a proxy identifier from a registry and downcasts the target.
///
/// This is panicking sugar over [`Registry::resolve_as`](crate::Registry::resolve_as),
/// for call sites where a missing or mistyped target is a configuration bug
/// that should abort. For a non-panicking version, call `resolve_as` directly.
///
/// # Panics
///
/// Panics if no target is registered under the identifier or if the target is
/// not of the requested type.
///
/// # Examples
///
/// ```
/// use proxy_registry::{resolve_target, Registry};
///
/// struct Cache;
///
/// let registry = Registry::new().unwrap();
/// registry
///   .register_factory("app::Cache", || Cache, "cache", None)
///   .unwrap();
///
/// let cache = resolve_target!(registry, Cache, "app::Cache");
/// # let _ = cache;
/// ```
#[macro_export]
macro_rules! resolve_target {
  ($registry:expr, $type:ty, $proxy_id:expr) => {
    $registry
      .resolve_as::<$type>($proxy_id)
      .unwrap_or_else(|err| {
        panic!(
          "failed to resolve proxy {:?} as {}: {}",
          $proxy_id,
          std::any::type_name::<$type>(),
          err
        )
      })
  };
}
