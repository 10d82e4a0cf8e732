//! Facade crate for AppSearch feature flags.
//! Re-exports domain/kernel primitives and provides a one-call bootstrap.
//! Keep this crate thin: it should compose other crates, not implement flag logic.
//!
//! ## Usage
//! - Branch on a compiled-in value with [`flags::enable_safe_parcelable`] and friends.
//! - Or build a [`FlagRegistry`] once at startup with [`init`] and pass it to
//!   the components that need it.
//!
//! ```rust
//! use appsearch_flags::{Flag, FlagRegistry};
//!
//! let registry = FlagRegistry::default();
//! assert!(registry.is_enabled(Flag::EnableListFilterHasPropertyFunction));
//! assert!(appsearch_flags::flags::enable_generic_document_copy_constructor());
//! ```

pub use appsearch_domain as domain;
pub use appsearch_domain::config::FlagConfig;
pub use appsearch_domain::flags::{Flag, FlagSet};
pub use appsearch_kernel as kernel;
pub use appsearch_kernel::error::{FlagError, FlagErrorExt};
pub use appsearch_kernel::registry::FlagRegistry;
#[cfg(feature = "logger")]
pub use appsearch_logger as logger;

use std::path::Path;

/// Compiled-in flag keys and accessors.
pub mod flags {
    pub use appsearch_domain::constants::*;
    pub use appsearch_domain::flags::{
        enable_generic_document_copy_constructor, enable_grouping_type_per_schema,
        enable_list_filter_has_property_function, enable_safe_parcelable,
    };
}

/// Builds the process-wide registry from an optional config file and the environment.
///
/// # Errors
/// Returns [`FlagError::Config`] if the configuration cannot be loaded.
pub fn init(path: Option<impl AsRef<Path>>) -> Result<FlagRegistry, FlagError> {
    let registry = FlagRegistry::load(path)?;
    tracing::info!(enabled = ?registry.enabled(), "Flag registry initialized");
    Ok(registry)
}
