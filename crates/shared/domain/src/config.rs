use crate::flags::{Flag, FlagSet};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Enablement state of every flag. Field names are the key suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FlagConfigInner {
    pub enable_safe_parcelable: bool,
    pub enable_list_filter_has_property_function: bool,
    pub enable_grouping_type_per_schema: bool,
    pub enable_generic_document_copy_constructor: bool,
}

/// Thin Arc-wrapped flag state for inexpensive cloning into subsystems.
///
/// Built once at startup and read-only afterwards. Tests derive alternates with
/// [`FlagConfig::with`], which copies on write and leaves other clones untouched.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlagConfig {
    #[serde(flatten, default)]
    inner: Arc<FlagConfigInner>,
}

impl FlagConfig {
    /// State of a single flag.
    #[must_use]
    pub fn is_enabled(&self, flag: Flag) -> bool {
        let inner: &FlagConfigInner = self;
        match flag {
            Flag::EnableSafeParcelable => inner.enable_safe_parcelable,
            Flag::EnableListFilterHasPropertyFunction => {
                inner.enable_list_filter_has_property_function
            },
            Flag::EnableGroupingTypePerSchema => inner.enable_grouping_type_per_schema,
            Flag::EnableGenericDocumentCopyConstructor => {
                inner.enable_generic_document_copy_constructor
            },
        }
    }

    /// Returns a copy with `flag` set to `enabled`.
    #[must_use]
    pub fn with(mut self, flag: Flag, enabled: bool) -> Self {
        let slot = match flag {
            Flag::EnableSafeParcelable => &mut self.enable_safe_parcelable,
            Flag::EnableListFilterHasPropertyFunction => {
                &mut self.enable_list_filter_has_property_function
            },
            Flag::EnableGroupingTypePerSchema => &mut self.enable_grouping_type_per_schema,
            Flag::EnableGenericDocumentCopyConstructor => {
                &mut self.enable_generic_document_copy_constructor
            },
        };
        *slot = enabled;
        self
    }

    /// Set of enabled flags.
    #[must_use]
    pub fn enabled(&self) -> FlagSet {
        Flag::ALL.into_iter().filter(|flag| self.is_enabled(*flag)).collect()
    }
}

impl From<FlagSet> for FlagConfig {
    /// Flags in `set` are enabled, all others disabled.
    fn from(set: FlagSet) -> Self {
        Flag::ALL
            .into_iter()
            .fold(Self::default(), |config, flag| config.with(flag, set.contains(flag.into())))
    }
}

impl Deref for FlagConfig {
    type Target = FlagConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for FlagConfig {
    fn deref_mut(&mut self) -> &mut FlagConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

// --- Default ---

impl Default for FlagConfigInner {
    fn default() -> Self {
        Self {
            enable_safe_parcelable: Flag::EnableSafeParcelable.default_enabled(),
            enable_list_filter_has_property_function: Flag::EnableListFilterHasPropertyFunction
                .default_enabled(),
            enable_grouping_type_per_schema: Flag::EnableGroupingTypePerSchema.default_enabled(),
            enable_generic_document_copy_constructor: Flag::EnableGenericDocumentCopyConstructor
                .default_enabled(),
        }
    }
}
