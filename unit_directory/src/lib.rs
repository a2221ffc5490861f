#![forbid(unsafe_code)]

//! Unit directory — immutable organizational forest with role-scoped
//! visibility.
//!
//! The catalog is loaded once at process start and never mutated.
//! Lookups are fail-soft: unknown ids yield empty results, never
//! errors. Data inconsistencies are surfaced by startup integrity
//! validation, not by runtime failures.

/// Canonical serialization schema version. Bump on any change to the
/// canonical unit field set.
pub const CATALOG_SCHEMA_VERSION: u32 = 1;

pub mod catalog;
pub mod domain;
pub mod fingerprint;
pub mod integrity;
pub mod resolver;
pub mod visibility;
