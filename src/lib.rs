//! # Proxy Registry
//!
//! A thread-safe proxy target registry and resolution engine for Rust.
//!
//! Calling code registers a logical proxy identifier once and, on every
//! subsequent lookup, deterministically resolves it to a live target object.
//! Declaration of a proxy is decoupled from resolution: the registered entry
//! decides between three mutually exclusive strategies.
//!
//! ## Core Concepts
//!
//! - **Registry**: maps proxy identifiers to target entries. The last
//!   registration for an identifier wins.
//! - **Instance targets**: pre-built objects returned as-is.
//! - **Factory targets**: zero-argument closures invoked lazily, at most once
//!   per registration, then memoized.
//! - **Service targets**: fetched by id from a container callable on *every*
//!   resolution; the container owns any caching semantics.
//! - **Singleton guard**: a process-wide, raise-only flag that forbids
//!   constructing further registries once configuration is done.
//!
//! ## Quick Start
//!
//! ```
//! use proxy_registry::Registry;
//! use std::sync::Arc;
//!
//! struct Database {
//!   url: String,
//! }
//!
//! let registry = Registry::new().unwrap();
//!
//! // The factory runs on first resolution, and only once.
//! registry
//!   .register_factory(
//!     "app::Db",
//!     || Database { url: "postgres://localhost/app".to_string() },
//!     "database",
//!     None,
//!   )
//!   .unwrap();
//!
//! let first = registry.resolve_as::<Database>("app::Db").unwrap();
//! let second = registry.resolve_as::<Database>("app::Db").unwrap();
//!
//! assert_eq!(first.url, "postgres://localhost/app");
//! assert!(Arc::ptr_eq(&first, &second));
//! ```

pub mod alias;
mod core;
mod error;
pub mod guard;
pub mod input;
mod macros;
mod registry;

pub use crate::core::{container_handle, target, ContainerHandle, Target};
pub use crate::error::{RegistryError, Result};
pub use crate::registry::Registry;
