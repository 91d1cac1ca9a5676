//! Property-based tests for the configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, DriveConfig, LocationConfig, ProviderConfig};
use super::validator::ConfigValidator;
use crate::path::PathKind;
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = PathKind> {
    prop_oneof![
        Just(PathKind::Simple),
        Just(PathKind::ProviderQualified),
        Just(PathKind::DriveQualified),
        Just(PathKind::Relative),
    ]
}

fn location_strategy() -> impl Strategy<Value = LocationConfig> {
    ("[A-Z][a-z]{0,7}", prop::option::of("/[a-z]{1,8}")).prop_map(|(drive, path)| {
        LocationConfig { drive, path }
    })
}

fn provider(name: String) -> ProviderConfig {
    ProviderConfig {
        drives: vec![DriveConfig {
            name: format!("{name}Drive"),
            root: "/".to_string(),
        }],
        name,
        separator: None,
        source: None,
        items: Vec::new(),
    }
}

// Names are unique within one list
fn providers_strategy() -> impl Strategy<Value = Vec<ProviderConfig>> {
    prop::collection::btree_set("[A-Z][a-z]{1,8}", 0..4)
        .prop_map(|names| names.into_iter().map(provider).collect())
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(kind_strategy()),
        prop::option::of(providers_strategy()),
        prop::option::of(location_strategy()),
    )
        .prop_map(|(default_kind, providers, location)| Config {
            default_kind,
            providers,
            location,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    /// Higher-precedence scalar values win; absent ones never erase
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(result.default_kind, high.default_kind.or(low.default_kind));
        prop_assert_eq!(result.location, high.location.or(low.location));
    }

    /// Merging an empty config is the identity
    #[test]
    fn config_merge_empty_is_identity(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &Config::default());
        prop_assert_eq!(result, config);
    }

    /// Every merged provider name appears once (case-insensitively)
    #[test]
    fn config_merge_provider_names_unique(low in config_strategy(), high in config_strategy()) {
        let mut result = low;
        ConfigMerger::merge_into(&mut result, &high);

        let names: Vec<String> = result
            .providers
            .unwrap_or_default()
            .iter()
            .map(|p| p.name.to_lowercase())
            .collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), names.len());
    }

    /// Generated providers without a location always validate
    #[test]
    fn config_valid_providers_validate(providers in providers_strategy()) {
        let config = Config { providers: Some(providers), ..Default::default() };
        prop_assert!(ConfigValidator::validate(&config).is_ok());
    }

    /// Configs survive a YAML round trip
    #[test]
    fn config_yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
