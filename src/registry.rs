//! The `Registry` type: registration operations, resolution, and the
//! default-container binding.

use std::any::Any;
use std::sync::Arc;

use dashmap::DashMap;
use log::{debug, trace};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;

use crate::alias::{AliasManager, NoAliases};
use crate::core::{ContainerHandle, Target, TargetEntry};
use crate::error::{RegistryError, Result};
use crate::{guard, input};

/// The proxy target registry and resolution engine.
///
/// A registry maps proxy identifiers to targets resolved through one of three
/// mutually exclusive strategies: a pre-built instance, a lazy factory
/// materialized exactly once, or a container-fetched service re-resolved on
/// every call. It is thread-safe; all operations take `&self`.
pub struct Registry {
  entries: DashMap<String, TargetEntry>,
  default_container: RwLock<Option<ContainerHandle>>,
  aliases: Arc<dyn AliasManager>,
}

impl Registry {
  /// Creates a registry with no default container and no alias bookkeeping.
  ///
  /// Fails with [`RegistryError::SingletonViolation`] once the process-wide
  /// guard has been raised.
  pub fn new() -> Result<Self> {
    Self::with_collaborators(None, Arc::new(NoAliases))
  }

  /// Creates a registry with `container` bound as the default container.
  pub fn with_container(container: ContainerHandle) -> Result<Self> {
    Self::with_collaborators(Some(container), Arc::new(NoAliases))
  }

  /// Creates a registry with explicit collaborators.
  ///
  /// This is the full injection point: an embedding dispatch hook supplies
  /// its alias manager here and keeps its own `Arc<Registry>` reference.
  pub fn with_collaborators(
    container: Option<ContainerHandle>,
    aliases: Arc<dyn AliasManager>,
  ) -> Result<Self> {
    if guard::is_raised() {
      return Err(RegistryError::SingletonViolation);
    }
    Ok(Self {
      entries: DashMap::new(),
      default_container: RwLock::new(container),
      aliases,
    })
  }

  // --- Registration ---

  /// Registers a pre-built instance as the target for `proxy_id`.
  ///
  /// `alias` is forwarded to the alias collaborator; `namespace`, when given,
  /// is associated with the alias. Overwrites any previous registration for
  /// `proxy_id`.
  pub fn register_instance<T: Any + Send + Sync>(
    &self,
    proxy_id: &str,
    value: T,
    alias: &str,
    namespace: Option<&str>,
  ) -> Result<()> {
    self.insert_entry(proxy_id, alias, namespace, TargetEntry::Instance(Arc::new(value)))
  }

  /// Registers a lazy factory as the target for `proxy_id`.
  ///
  /// The factory is not invoked here. It runs on the first `resolve` call and
  /// at most once per registration, even under concurrent first resolution;
  /// every resolution thereafter returns the materialized instance.
  pub fn register_factory<T, F>(
    &self,
    proxy_id: &str,
    factory: F,
    alias: &str,
    namespace: Option<&str>,
  ) -> Result<()>
  where
    T: Any + Send + Sync,
    F: Fn() -> T + Send + Sync + 'static,
  {
    let entry = TargetEntry::Deferred {
      cell: OnceCell::new(),
      factory: Box::new(move || Arc::new(factory()) as Target),
    };
    self.insert_entry(proxy_id, alias, namespace, entry)
  }

  /// Registers a container-fetched service as the target for `proxy_id`.
  ///
  /// `service_id` must be non-empty after normalization. When `container` is
  /// absent the registry's default container is used; with neither available
  /// the registration fails with [`RegistryError::MissingContainer`] — the
  /// failure is never deferred to resolution time.
  pub fn register_service(
    &self,
    proxy_id: &str,
    service_id: &str,
    alias: &str,
    container: Option<ContainerHandle>,
    namespace: Option<&str>,
  ) -> Result<()> {
    let proxy_id = input::check_namespace(proxy_id)?;
    let service_id = input::check(service_id)?;
    let container = input::check_container_ex(container, self.default_container()).map_err(
      |_| RegistryError::MissingContainer {
        proxy_id: proxy_id.clone(),
      },
    )?;
    self.insert_entry(
      &proxy_id,
      alias,
      namespace,
      TargetEntry::Service {
        service_id,
        container,
      },
    )
  }

  fn insert_entry(
    &self,
    proxy_id: &str,
    alias: &str,
    namespace: Option<&str>,
    entry: TargetEntry,
  ) -> Result<()> {
    // All validation happens before the insert, so a rejected registration
    // leaves the registry untouched.
    let proxy_id = input::check_namespace(proxy_id)?;
    let alias = input::check(alias)?;

    debug!(
      "registering {} target under proxy {:?} (alias {:?})",
      entry.kind(),
      proxy_id,
      alias
    );
    if self.entries.insert(proxy_id.clone(), entry).is_some() {
      debug!("previous target for proxy {:?} was replaced", proxy_id);
    }

    self.aliases.add(&proxy_id, &alias);
    if let Some(spec) = namespace {
      self.aliases.add_namespace(&alias, spec);
    }
    Ok(())
  }

  // --- Resolution ---

  /// Resolves the live target registered under `proxy_id`.
  ///
  /// Service entries re-invoke their container on every call; pending
  /// factories are invoked exactly once and memoized; instances are returned
  /// as-is. Panics raised by a factory or container propagate unchanged to
  /// the caller.
  pub fn resolve(&self, proxy_id: &str) -> Result<Target> {
    let entry = self
      .entries
      .get(proxy_id)
      .ok_or_else(|| RegistryError::NotRegistered {
        proxy_id: proxy_id.to_owned(),
      })?;
    trace!("resolving proxy {:?} via {} entry", proxy_id, entry.kind());
    Ok(entry.resolve())
  }

  /// Resolves the target registered under `proxy_id` and downcasts it.
  ///
  /// Fails with [`RegistryError::WrongTargetType`] when the registered target
  /// is not a `T`.
  pub fn resolve_as<T: Any + Send + Sync>(&self, proxy_id: &str) -> Result<Arc<T>> {
    self
      .resolve(proxy_id)?
      .downcast::<T>()
      .map_err(|_| RegistryError::WrongTargetType {
        proxy_id: proxy_id.to_owned(),
        expected: std::any::type_name::<T>(),
      })
  }

  /// Returns whether a target is registered under `proxy_id`.
  pub fn is_registered(&self, proxy_id: &str) -> bool {
    self.entries.contains_key(proxy_id)
  }

  // --- Default container binding ---

  /// Binds `container` as the default container, returning the previously
  /// bound one (if any) so the caller can restore it later.
  pub fn set_default_container(&self, container: ContainerHandle) -> Option<ContainerHandle> {
    debug!("replacing default container binding");
    self.default_container.write().replace(container)
  }

  /// Returns the currently bound default container, if any.
  pub fn default_container(&self) -> Option<ContainerHandle> {
    self.default_container.read().clone()
  }
}
