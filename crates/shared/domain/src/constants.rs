//! Fully-qualified flag keys.

/// Prepends the flag namespace to a literal suffix at compile time.
macro_rules! flag_key {
    ($suffix:literal) => {
        concat!("com.android.appsearch.flags.", $suffix)
    };
}

/// Namespace shared by every flag key.
pub const FLAG_NAMESPACE: &str = flag_key!("");

pub const FLAG_ENABLE_SAFE_PARCELABLE: &str = flag_key!("enable_safe_parcelable");
pub const FLAG_ENABLE_LIST_FILTER_HAS_PROPERTY_FUNCTION: &str =
    flag_key!("enable_list_filter_has_property_function");
pub const FLAG_ENABLE_GROUPING_TYPE_PER_SCHEMA: &str =
    flag_key!("enable_grouping_type_per_schema");
pub const FLAG_ENABLE_GENERIC_DOCUMENT_COPY_CONSTRUCTOR: &str =
    flag_key!("enable_generic_document_copy_constructor");

/// Every known key, in table order.
pub const ALL_FLAG_KEYS: [&str; 4] = [
    FLAG_ENABLE_SAFE_PARCELABLE,
    FLAG_ENABLE_LIST_FILTER_HAS_PROPERTY_FUNCTION,
    FLAG_ENABLE_GROUPING_TYPE_PER_SCHEMA,
    FLAG_ENABLE_GENERIC_DOCUMENT_COPY_CONSTRUCTOR,
];
