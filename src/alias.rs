//! The alias/namespace collaborator boundary.
//!
//! Alias bookkeeping is not part of the resolution algorithm; the registry
//! only forwards calls across this trait. Embedders that drive a dynamic
//! dispatch hook implement [`AliasManager`] themselves; [`AliasBook`] is a
//! working in-memory default, and [`NoAliases`] discards everything.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

/// Receives alias and namespace registrations from the registry.
pub trait AliasManager: Send + Sync {
  /// Registers a human-facing alias for a proxy identifier.
  fn add(&self, proxy_id: &str, alias: &str);

  /// Associates a namespace scope with an alias.
  fn add_namespace(&self, alias: &str, namespace_spec: &str);

  /// Turns the external dispatch hook on, optionally with namespace-based
  /// dynamic loading.
  fn enable(&self, use_namespacing: bool);

  /// Turns namespacing off, or the whole hook off when `only_namespacing`
  /// is false.
  fn disable(&self, only_namespacing: bool);
}

/// An alias manager that discards every call.
///
/// The default collaborator for registries that do not drive a dispatch hook.
pub struct NoAliases;

impl AliasManager for NoAliases {
  fn add(&self, _proxy_id: &str, _alias: &str) {}
  fn add_namespace(&self, _alias: &str, _namespace_spec: &str) {}
  fn enable(&self, _use_namespacing: bool) {}
  fn disable(&self, _only_namespacing: bool) {}
}

/// A thread-safe in-memory alias book.
///
/// Stores the alias-to-proxy and alias-to-namespace maps plus the hook
/// toggles, and exposes read accessors so an embedding dispatch hook (or a
/// test) can observe what the registry forwarded.
#[derive(Default)]
pub struct AliasBook {
  aliases: RwLock<HashMap<String, String>>,
  namespaces: RwLock<HashMap<String, String>>,
  enabled: AtomicBool,
  namespacing: AtomicBool,
}

impl AliasBook {
  /// Creates an empty, disabled alias book.
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns the proxy identifier registered for `alias`, if any.
  pub fn proxy_id_for(&self, alias: &str) -> Option<String> {
    self.aliases.read().get(alias).cloned()
  }

  /// Returns the namespace spec associated with `alias`, if any.
  pub fn namespace_for(&self, alias: &str) -> Option<String> {
    self.namespaces.read().get(alias).cloned()
  }

  pub fn is_enabled(&self) -> bool {
    self.enabled.load(Ordering::Acquire)
  }

  pub fn uses_namespacing(&self) -> bool {
    self.namespacing.load(Ordering::Acquire)
  }
}

impl AliasManager for AliasBook {
  fn add(&self, proxy_id: &str, alias: &str) {
    self
      .aliases
      .write()
      .insert(alias.to_owned(), proxy_id.to_owned());
  }

  fn add_namespace(&self, alias: &str, namespace_spec: &str) {
    self
      .namespaces
      .write()
      .insert(alias.to_owned(), namespace_spec.to_owned());
  }

  fn enable(&self, use_namespacing: bool) {
    self.enabled.store(true, Ordering::Release);
    self.namespacing.store(use_namespacing, Ordering::Release);
  }

  fn disable(&self, only_namespacing: bool) {
    self.namespacing.store(false, Ordering::Release);
    if !only_namespacing {
      self.enabled.store(false, Ordering::Release);
    }
  }
}
