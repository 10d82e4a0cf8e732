use crate::constants::{
    FLAG_ENABLE_GENERIC_DOCUMENT_COPY_CONSTRUCTOR, FLAG_ENABLE_GROUPING_TYPE_PER_SCHEMA,
    FLAG_ENABLE_LIST_FILTER_HAS_PROPERTY_FUNCTION, FLAG_ENABLE_SAFE_PARCELABLE, FLAG_NAMESPACE,
};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Whether `SafeParcelable` is used for parcelable AppSearch types.
#[inline]
#[must_use]
pub const fn enable_safe_parcelable() -> bool {
    true
}

/// Whether the `hasProperty` function is available in list filter queries.
#[inline]
#[must_use]
pub const fn enable_list_filter_has_property_function() -> bool {
    true
}

/// Whether result grouping can be configured per schema type.
#[inline]
#[must_use]
pub const fn enable_grouping_type_per_schema() -> bool {
    true
}

/// Whether `GenericDocument` exposes a copy constructor.
#[inline]
#[must_use]
pub const fn enable_generic_document_copy_constructor() -> bool {
    true
}

/// Closed set of known flag identifiers.
///
/// Strings produced or accepted by `Display`, `FromStr` and serde are the key
/// suffixes (e.g. `enable_safe_parcelable`); [`Flag::key`] returns the
/// fully-qualified key.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Flag {
    EnableSafeParcelable,
    EnableListFilterHasPropertyFunction,
    EnableGroupingTypePerSchema,
    EnableGenericDocumentCopyConstructor,
}

impl Flag {
    /// Every flag, in table order.
    pub const ALL: [Self; 4] = [
        Self::EnableSafeParcelable,
        Self::EnableListFilterHasPropertyFunction,
        Self::EnableGroupingTypePerSchema,
        Self::EnableGenericDocumentCopyConstructor,
    ];

    /// Fully-qualified key, `FLAG_NAMESPACE` + suffix.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::EnableSafeParcelable => FLAG_ENABLE_SAFE_PARCELABLE,
            Self::EnableListFilterHasPropertyFunction => {
                FLAG_ENABLE_LIST_FILTER_HAS_PROPERTY_FUNCTION
            },
            Self::EnableGroupingTypePerSchema => FLAG_ENABLE_GROUPING_TYPE_PER_SCHEMA,
            Self::EnableGenericDocumentCopyConstructor => {
                FLAG_ENABLE_GENERIC_DOCUMENT_COPY_CONSTRUCTOR
            },
        }
    }

    /// Key without the namespace.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        self.into()
    }

    /// Value compiled into this build.
    #[must_use]
    pub const fn default_enabled(self) -> bool {
        match self {
            Self::EnableSafeParcelable => enable_safe_parcelable(),
            Self::EnableListFilterHasPropertyFunction => enable_list_filter_has_property_function(),
            Self::EnableGroupingTypePerSchema => enable_grouping_type_per_schema(),
            Self::EnableGenericDocumentCopyConstructor => {
                enable_generic_document_copy_constructor()
            },
        }
    }

    /// Resolves a fully-qualified key. Bare suffixes are not accepted here.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.key() == key)
    }
}

bitflags! {
    /// A set of flags, one bit per [`Flag`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FlagSet: u32 {
        const ENABLE_SAFE_PARCELABLE = 1 << 0;
        const ENABLE_LIST_FILTER_HAS_PROPERTY_FUNCTION = 1 << 1;
        const ENABLE_GROUPING_TYPE_PER_SCHEMA = 1 << 2;
        const ENABLE_GENERIC_DOCUMENT_COPY_CONSTRUCTOR = 1 << 3;

        const ALL = Self::ENABLE_SAFE_PARCELABLE.bits()
            | Self::ENABLE_LIST_FILTER_HAS_PROPERTY_FUNCTION.bits()
            | Self::ENABLE_GROUPING_TYPE_PER_SCHEMA.bits()
            | Self::ENABLE_GENERIC_DOCUMENT_COPY_CONSTRUCTOR.bits();
    }
}

impl FlagSet {
    /// Flags in this set, in table order.
    pub fn flags(self) -> impl Iterator<Item = Flag> {
        Flag::ALL.into_iter().filter(move |flag| self.contains(Self::from(*flag)))
    }
}

impl From<Flag> for FlagSet {
    fn from(flag: Flag) -> Self {
        match flag {
            Flag::EnableSafeParcelable => Self::ENABLE_SAFE_PARCELABLE,
            Flag::EnableListFilterHasPropertyFunction => {
                Self::ENABLE_LIST_FILTER_HAS_PROPERTY_FUNCTION
            },
            Flag::EnableGroupingTypePerSchema => Self::ENABLE_GROUPING_TYPE_PER_SCHEMA,
            Flag::EnableGenericDocumentCopyConstructor => {
                Self::ENABLE_GENERIC_DOCUMENT_COPY_CONSTRUCTOR
            },
        }
    }
}

impl FromIterator<Flag> for FlagSet {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, flag| set | Self::from(flag))
    }
}

impl From<&str> for FlagSet {
    /// Accepts a suffix, a full key, or `all`/`*`. Anything else is empty.
    fn from(s: &str) -> Self {
        match s {
            "all" | "*" => Self::ALL,
            _ => s
                .strip_prefix(FLAG_NAMESPACE)
                .unwrap_or(s)
                .parse::<Flag>()
                .map_or_else(|_| Self::empty(), Self::from),
        }
    }
}

impl From<u32> for FlagSet {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for FlagSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for FlagSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn iteration_order_matches_table() {
        let iterated: Vec<Flag> = Flag::iter().collect();
        assert_eq!(iterated, Flag::ALL);
        assert_eq!(Flag::COUNT, Flag::ALL.len());
    }

    #[test]
    fn suffix_is_key_without_namespace() {
        for flag in Flag::ALL {
            assert_eq!(flag.key().strip_prefix(FLAG_NAMESPACE), Some(flag.suffix()));
            assert_eq!(flag.to_string(), flag.suffix());
        }
    }

    #[test]
    fn from_key_rejects_bare_suffix() {
        assert_eq!(Flag::from_key("enable_safe_parcelable"), None);
        assert_eq!(
            Flag::from_key(FLAG_ENABLE_SAFE_PARCELABLE),
            Some(Flag::EnableSafeParcelable)
        );
    }

    #[test]
    fn flag_set_from_str() {
        assert_eq!(FlagSet::from("*"), FlagSet::ALL);
        assert_eq!(
            FlagSet::from("enable_grouping_type_per_schema"),
            FlagSet::ENABLE_GROUPING_TYPE_PER_SCHEMA
        );
        assert_eq!(
            FlagSet::from(FLAG_ENABLE_GENERIC_DOCUMENT_COPY_CONSTRUCTOR),
            FlagSet::ENABLE_GENERIC_DOCUMENT_COPY_CONSTRUCTOR
        );
        assert!(FlagSet::from("enable_everything").is_empty());
    }

    #[test]
    fn flag_set_collects_and_lists_flags() {
        let set: FlagSet =
            [Flag::EnableGenericDocumentCopyConstructor, Flag::EnableSafeParcelable]
                .into_iter()
                .collect();
        let listed: Vec<Flag> = set.flags().collect();
        assert_eq!(
            listed,
            vec![Flag::EnableSafeParcelable, Flag::EnableGenericDocumentCopyConstructor]
        );
        assert_eq!(FlagSet::ALL.flags().count(), 4);
    }
}
