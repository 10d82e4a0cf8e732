use appsearch_domain::config::FlagConfig;
use appsearch_domain::flags::{Flag, FlagSet};
use serde_json::json;

#[test]
fn config_defaults_match_compiled_in_values() {
    let config = FlagConfig::default();
    for flag in Flag::ALL {
        assert_eq!(config.is_enabled(flag), flag.default_enabled());
    }
    assert_eq!(config.enabled(), FlagSet::ALL);
}

#[test]
fn alternate_config_changes_only_the_given_flag() {
    let base = FlagConfig::default();
    let alternate = base.clone().with(Flag::EnableGroupingTypePerSchema, false);

    assert!(base.is_enabled(Flag::EnableGroupingTypePerSchema));
    assert!(!alternate.is_enabled(Flag::EnableGroupingTypePerSchema));
    for flag in Flag::ALL.into_iter().filter(|f| *f != Flag::EnableGroupingTypePerSchema) {
        assert!(alternate.is_enabled(flag), "{flag} should stay enabled");
    }
}

#[test]
fn config_from_flag_set() {
    let config = FlagConfig::from(FlagSet::ENABLE_SAFE_PARCELABLE);
    assert!(config.enable_safe_parcelable);
    assert!(!config.enable_list_filter_has_property_function);
    assert_eq!(config.enabled(), FlagSet::ENABLE_SAFE_PARCELABLE);
}

#[test]
fn config_deserializes_with_defaults_for_missing_fields() {
    let raw = json!({ "enable_generic_document_copy_constructor": false });

    let cfg: FlagConfig = serde_json::from_value(raw).expect("config deserialize");
    assert!(!cfg.enable_generic_document_copy_constructor);
    assert!(cfg.enable_safe_parcelable);
    assert!(cfg.enable_list_filter_has_property_function);
    assert!(cfg.enable_grouping_type_per_schema);
}

#[test]
fn empty_document_yields_default_config() {
    let cfg: FlagConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg, FlagConfig::default());
}
