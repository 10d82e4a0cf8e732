//! Read-only flag registry.

use crate::config::{load_config, load_config_with_env};
use crate::error::{FlagError, Result};
use appsearch_domain::config::FlagConfig;
use appsearch_domain::flags::{Flag, FlagSet};
use std::path::Path;
use tracing::{debug, warn};

/// Process-wide view of flag state.
///
/// The registry owns an immutable [`FlagConfig`]. Clones share the same state,
/// so it can be handed to any number of threads and read without locking.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct FlagRegistry {
    config: FlagConfig,
}

impl FlagRegistry {
    /// Wraps a configuration.
    #[must_use]
    pub fn new(config: FlagConfig) -> Self {
        for flag in Flag::ALL {
            debug!(flag = flag.key(), enabled = config.is_enabled(flag), "Flag resolved");
        }
        Self { config }
    }

    /// Builds a registry from an optional config file. Missing values keep their
    /// compiled-in defaults.
    ///
    /// # Errors
    /// Returns [`FlagError::Config`] if the file cannot be read or deserialized.
    pub fn load(path: Option<impl AsRef<Path>>) -> Result<Self> {
        let config = load_config::<FlagConfig>(path)?;
        Ok(Self::new(config))
    }

    /// Like [`FlagRegistry::load`], with `APPSEARCH__*` variables from the process
    /// environment layered on top. Only callers that ask for overrides use this.
    ///
    /// # Errors
    /// Returns [`FlagError::Config`] if the sources cannot be read or deserialized.
    pub fn load_with_env(path: Option<impl AsRef<Path>>) -> Result<Self> {
        let config = load_config_with_env::<FlagConfig>(path, None)?;
        Ok(Self::new(config))
    }

    #[must_use]
    pub const fn config(&self) -> &FlagConfig {
        &self.config
    }

    /// Fully-qualified key of `flag`.
    #[must_use]
    pub const fn key(flag: Flag) -> &'static str {
        flag.key()
    }

    /// Every known key, in table order.
    pub fn keys() -> impl Iterator<Item = &'static str> {
        Flag::ALL.into_iter().map(Flag::key)
    }

    #[must_use]
    pub fn is_enabled(&self, flag: Flag) -> bool {
        self.config.is_enabled(flag)
    }

    /// Looks a flag up by its fully-qualified key.
    ///
    /// # Errors
    /// Returns [`FlagError::UnknownFlag`] if `key` names no known flag.
    pub fn is_enabled_key(&self, key: &str) -> Result<bool> {
        let Some(flag) = Flag::from_key(key) else {
            warn!(key, "Lookup of unknown flag key");
            return Err(FlagError::UnknownFlag { key: key.to_owned(), context: None });
        };
        Ok(self.is_enabled(flag))
    }

    /// Set of enabled flags.
    #[must_use]
    pub fn enabled(&self) -> FlagSet {
        self.config.enabled()
    }

    /// `(flag, enabled)` pairs, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Flag, bool)> + '_ {
        Flag::ALL.into_iter().map(|flag| (flag, self.is_enabled(flag)))
    }

    // --- Named accessors ---

    #[must_use]
    pub fn enable_safe_parcelable(&self) -> bool {
        self.is_enabled(Flag::EnableSafeParcelable)
    }

    #[must_use]
    pub fn enable_list_filter_has_property_function(&self) -> bool {
        self.is_enabled(Flag::EnableListFilterHasPropertyFunction)
    }

    #[must_use]
    pub fn enable_grouping_type_per_schema(&self) -> bool {
        self.is_enabled(Flag::EnableGroupingTypePerSchema)
    }

    #[must_use]
    pub fn enable_generic_document_copy_constructor(&self) -> bool {
        self.is_enabled(Flag::EnableGenericDocumentCopyConstructor)
    }
}

impl From<FlagConfig> for FlagRegistry {
    fn from(config: FlagConfig) -> Self {
        Self::new(config)
    }
}
