//! Kernel for the flag registry.
//! Keep this crate lightweight: it wires the pure domain types to configuration sources
//! and exposes the read-only [`registry::FlagRegistry`].
//!
//! ## Lookup
//! ```rust
//! use appsearch_kernel::domain::flags::Flag;
//! use appsearch_kernel::registry::FlagRegistry;
//!
//! let registry = FlagRegistry::default();
//! assert!(registry.is_enabled(Flag::EnableSafeParcelable));
//! assert!(registry.enable_grouping_type_per_schema());
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use appsearch_kernel::registry::FlagRegistry;
//!
//! // Reads `flags.toml` only.
//! let registry = FlagRegistry::load(Some("flags.toml")).unwrap();
//! // Opt in to `APPSEARCH__*` environment overrides on top of the file.
//! let registry = FlagRegistry::load_with_env(Some("flags.toml")).unwrap();
//! ```
pub mod config;
pub mod error;
pub mod registry;

pub use appsearch_domain as domain;
pub use error::{FlagError, FlagErrorExt};
