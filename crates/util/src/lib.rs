//! litepatch-util - shared value helpers for the litepatch crates.
//!
//! Small, dependency-light building blocks used by both the diff and
//! patch engines: structural equality and object key membership.

pub mod has_own_property;
pub mod json_equal;

// Re-exports for convenience
pub use has_own_property::has_own_property;
pub use json_equal::deep_equal;
