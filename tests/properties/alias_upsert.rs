//! Property tests for alias upserts.

use std::collections::BTreeMap;

use proptest::prelude::*;

use fnpilot::application::AliasManager;
use fnpilot::domain::entities::FunctionSpec;
use fnpilot::domain::value_objects::VersionId;
use fnpilot::infrastructure::{InMemoryProvider, ProviderCall};
use fnpilot::FunctionProvider;

const NAMES: [&str; 3] = ["dev", "staging", "production"];

fn provider(versions: u64) -> InMemoryProvider {
    let provider = InMemoryProvider::with_page_size(1);
    let spec = FunctionSpec::builder("orders")
        .with_handler("index.handler")
        .with_role("role")
        .with_package("orders.zip")
        .with_runtime("python3.12")
        .build()
        .unwrap();
    provider
        .create_function(&spec.configuration(), b"v1", true)
        .unwrap();
    for n in 2..=versions {
        provider
            .update_function_code("orders", format!("v{n}").as_bytes(), true)
            .unwrap();
    }
    provider.clear_calls();
    provider
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: after any upsert sequence each alias points at its last
    /// target, and each alias name was created exactly once.
    #[test]
    fn property_last_upsert_wins(
        ops in proptest::collection::vec((0usize..3, 1u64..=4), 1..20)
    ) {
        let provider = provider(4);
        let manager = AliasManager::new(&provider);

        let mut expected: BTreeMap<&str, u64> = BTreeMap::new();
        for (index, version) in &ops {
            let name = NAMES[*index];
            let outcome = manager
                .upsert("orders", &VersionId::new(version.to_string()), name, "")
                .unwrap();
            prop_assert_eq!(outcome.is_created(), !expected.contains_key(name));
            expected.insert(name, *version);
        }

        let aliases = manager.list("orders").unwrap();
        prop_assert_eq!(aliases.len(), expected.len());
        for alias in &aliases {
            prop_assert_eq!(
                alias.version.as_str(),
                expected[alias.name.as_str()].to_string()
            );
        }

        let creates = provider
            .calls()
            .iter()
            .filter(|call| matches!(call, ProviderCall::CreateAlias { .. }))
            .count();
        prop_assert_eq!(creates, expected.len());
    }
}
