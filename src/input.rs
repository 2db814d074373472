//! Pure validation and normalization of registration inputs.
//!
//! These functions are the registry's input collaborator: every registration
//! path runs its arguments through here before touching registry state, so a
//! rejected input never leaves a partial insert behind.

use crate::core::ContainerHandle;
use crate::error::{RegistryError, Result};

/// Normalizes a plain identifier (alias or service id).
///
/// Trims surrounding whitespace and rejects identifiers that are empty
/// afterwards.
pub fn check(value: &str) -> Result<String> {
  let normalized = value.trim();
  if normalized.is_empty() {
    return Err(RegistryError::InvalidArgument(value.to_owned()));
  }
  Ok(normalized.to_owned())
}

/// Normalizes a namespaced proxy identifier.
///
/// A well-formed identifier is one or more `::`-separated segments, each
/// matching `[A-Za-z_][A-Za-z0-9_]*`.
pub fn check_namespace(value: &str) -> Result<String> {
  let normalized = value.trim();
  if normalized.is_empty() || !normalized.split("::").all(is_identifier_segment) {
    return Err(RegistryError::InvalidNamespace(value.to_owned()));
  }
  Ok(normalized.to_owned())
}

/// Validates a container handle, failing when none was supplied.
///
/// Shape validity is carried by the [`ContainerHandle`] type itself, so the
/// only rejectable state is absence.
pub fn check_container(container: Option<ContainerHandle>) -> Result<ContainerHandle> {
  container.ok_or(RegistryError::InvalidContainer)
}

/// Like [`check_container`], but substitutes `fallback` when the primary
/// handle is absent.
pub fn check_container_ex(
  container: Option<ContainerHandle>,
  fallback: Option<ContainerHandle>,
) -> Result<ContainerHandle> {
  container.or(fallback).ok_or(RegistryError::InvalidContainer)
}

fn is_identifier_segment(segment: &str) -> bool {
  let mut chars = segment.chars();
  match chars.next() {
    Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
    _ => return false,
  }
  chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
