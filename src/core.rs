//! Core data structures for the proxy registry.

use std::any::Any;
use std::sync::Arc;

use once_cell::sync::OnceCell;

/// The erased live object handed back by resolution.
///
/// Typed registration helpers wrap values in an `Arc` and coerce them to this
/// alias; [`Registry::resolve_as`](crate::Registry::resolve_as) recovers the
/// concrete type via downcast.
pub type Target = Arc<dyn Any + Send + Sync>;

/// An opaque container callable of shape `(id) -> object`.
///
/// The registry never inspects what the container does with the id; it simply
/// invokes it on every service-style resolution.
pub type ContainerHandle = Arc<dyn Fn(&str) -> Target + Send + Sync>;

pub(crate) type TargetFactory = Box<dyn Fn() -> Target + Send + Sync>;

/// Wraps a value as an erased [`Target`].
pub fn target<T: Any + Send + Sync>(value: T) -> Target {
  Arc::new(value)
}

/// Wraps a closure as a [`ContainerHandle`].
pub fn container_handle<F>(container: F) -> ContainerHandle
where
  F: Fn(&str) -> Target + Send + Sync + 'static,
{
  Arc::new(container)
}

/// One registry entry: the resolution strategy plus its associated data.
///
/// Exactly one strategy applies per entry. A `Deferred` entry consumes its
/// factory on first resolution: the cell is populated once and the factory is
/// never invoked again, after which the entry behaves as a plain instance.
pub(crate) enum TargetEntry {
  /// A pre-built, already-constructed object.
  Instance(Target),
  /// A lazily-constructed object. The factory runs at most once per entry
  /// lifetime, even under concurrent first resolution.
  Deferred {
    cell: OnceCell<Target>,
    factory: TargetFactory,
  },
  /// A container-fetched object. Re-resolved through the container on every
  /// call; the container owns any caching semantics.
  Service {
    service_id: String,
    container: ContainerHandle,
  },
}

impl TargetEntry {
  pub(crate) fn resolve(&self) -> Target {
    match self {
      TargetEntry::Instance(target) => target.clone(),
      TargetEntry::Deferred { cell, factory } => cell.get_or_init(|| factory()).clone(),
      TargetEntry::Service {
        service_id,
        container,
      } => container(service_id),
    }
  }

  pub(crate) fn kind(&self) -> &'static str {
    match self {
      TargetEntry::Instance(_) => "instance",
      TargetEntry::Deferred { cell, .. } => {
        if cell.get().is_some() {
          "materialized factory"
        } else {
          "pending factory"
        }
      }
      TargetEntry::Service { .. } => "service",
    }
  }
}
