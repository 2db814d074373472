//! Error taxonomy for registry construction, registration and resolution.
//!
//! Every failure is synchronous and local: validation errors leave the
//! registry unmodified, and nothing in this crate retries or degrades.

use thiserror::Error;

/// A specialized `Result` type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Debug, Error)]
pub enum RegistryError {
  /// Construction was attempted after the process-wide singleton guard was
  /// raised. Fatal to the construction call; the guard is never lowered.
  #[error("registry construction is forbidden: the singleton guard has been raised")]
  SingletonViolation,

  /// A proxy identifier failed namespace validation.
  #[error("malformed namespaced proxy identifier: {0:?}")]
  InvalidNamespace(String),

  /// A plain identifier (alias or service id) was empty after normalization.
  #[error("invalid identifier: {0:?}")]
  InvalidArgument(String),

  /// A container handle was required but absent.
  #[error("no container handle was supplied")]
  InvalidContainer,

  /// A service-style registration found neither an explicit container nor a
  /// default one. Reported at registration time, never deferred to resolution.
  #[error("no container available to register service target for proxy {proxy_id:?}")]
  MissingContainer { proxy_id: String },

  /// Resolution was requested for an identifier with no registered entry.
  /// Signals a configuration bug; never retried.
  #[error("no target registered under proxy identifier {proxy_id:?}")]
  NotRegistered { proxy_id: String },

  /// A typed resolution found a target of a different concrete type.
  #[error("target registered under proxy {proxy_id:?} is not of type {expected}")]
  WrongTargetType {
    proxy_id: String,
    expected: &'static str,
  },
}
