use appsearch_kernel::domain::config::FlagConfig;
use appsearch_kernel::domain::constants::ALL_FLAG_KEYS;
use appsearch_kernel::domain::flags::{Flag, FlagSet};
use appsearch_kernel::registry::FlagRegistry;
use std::thread;

#[test]
fn every_compiled_in_flag_is_enabled() {
    let registry = FlagRegistry::default();
    for (flag, enabled) in registry.iter() {
        assert!(enabled, "{} should be enabled", flag.key());
    }
}

#[test]
fn exposed_keys_are_exactly_the_known_set() {
    let keys: Vec<&str> = FlagRegistry::keys().collect();
    assert_eq!(keys, ALL_FLAG_KEYS);
    assert_eq!(
        FlagRegistry::key(Flag::EnableSafeParcelable),
        "com.android.appsearch.flags.enable_safe_parcelable"
    );
}

#[test]
fn lookups_have_no_side_effects() {
    let registry = FlagRegistry::default();
    let before = registry.clone();

    for _ in 0..100 {
        for flag in Flag::ALL {
            assert!(registry.is_enabled(flag));
        }
        let _ = registry.is_enabled_key("com.android.appsearch.flags.missing");
    }

    assert_eq!(registry, before);
}

#[test]
fn concurrent_reads_agree() {
    let registry =
        FlagRegistry::new(FlagConfig::default().with(Flag::EnableGroupingTypePerSchema, false));
    let expected = registry.enabled();

    thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                s.spawn(move || (0..1_000).map(|_| registry.enabled()).collect::<Vec<FlagSet>>())
            })
            .collect();

        for handle in handles {
            let seen = handle.join().expect("reader thread panicked");
            assert!(seen.iter().all(|set| *set == expected));
        }
    });

    assert!(!expected.contains(FlagSet::ENABLE_GROUPING_TYPE_PER_SCHEMA));
}

#[test]
fn alternate_registries_are_independent() {
    let base = FlagRegistry::default();
    let alternate = FlagRegistry::from(
        base.config().clone().with(Flag::EnableGenericDocumentCopyConstructor, false),
    );

    assert!(base.enable_generic_document_copy_constructor());
    assert!(!alternate.enable_generic_document_copy_constructor());
    assert_eq!(
        alternate.enabled(),
        FlagSet::ALL - FlagSet::ENABLE_GENERIC_DOCUMENT_COPY_CONSTRUCTOR
    );
}
