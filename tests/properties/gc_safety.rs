//! Property tests for version garbage collection.

use std::collections::BTreeSet;

use proptest::prelude::*;

use fnpilot::application::CleanupUseCase;
use fnpilot::domain::entities::FunctionSpec;
use fnpilot::domain::services::unreferenced_versions;
use fnpilot::domain::value_objects::VersionId;
use fnpilot::infrastructure::{InMemoryProvider, ProviderCall};
use fnpilot::FunctionProvider;

fn spec() -> FunctionSpec {
    FunctionSpec::builder("orders")
        .with_handler("index.handler")
        .with_role("role")
        .with_package("orders.zip")
        .with_runtime("nodejs20.x")
        .build()
        .unwrap()
}

/// Provider holding versions `1..=count`, with one alias per entry of
/// `targets` (alias `env<i>` points at version `targets[i]`).
fn seeded(count: u64, targets: &[u64], page_size: usize) -> InMemoryProvider {
    let provider = InMemoryProvider::with_page_size(page_size);
    provider
        .create_function(&spec().configuration(), b"v1", true)
        .unwrap();
    for n in 2..=count {
        provider
            .update_function_code("orders", format!("v{n}").as_bytes(), true)
            .unwrap();
    }
    for (i, target) in targets.iter().enumerate() {
        provider
            .create_alias(
                "orders",
                &format!("env{i}"),
                &VersionId::new(target.to_string()),
                "",
            )
            .unwrap();
    }
    provider.clear_calls();
    provider
}

fn deleted_versions(provider: &InMemoryProvider) -> BTreeSet<String> {
    provider
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            ProviderCall::DeleteFunction {
                qualifier: Some(version),
                ..
            } => Some(version.to_string()),
            _ => None,
        })
        .collect()
}

fn scenario() -> impl Strategy<Value = (u64, Vec<u64>, usize)> {
    (1u64..=12).prop_flat_map(|count| {
        (
            Just(count),
            proptest::collection::vec(1..=count, 0..=4),
            1usize..=5,
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: cleanup deletes exactly the unreferenced published versions.
    #[test]
    fn property_cleanup_deletes_exactly_all_minus_referenced(
        (count, targets, page_size) in scenario()
    ) {
        let provider = seeded(count, &targets, page_size);

        let result = CleanupUseCase::new(&provider).execute(&spec()).unwrap();

        let referenced: BTreeSet<String> = targets.iter().map(u64::to_string).collect();
        let expected: BTreeSet<String> = (1..=count)
            .map(|n| n.to_string())
            .filter(|v| !referenced.contains(v))
            .collect();

        prop_assert_eq!(deleted_versions(&provider), expected.clone());
        prop_assert_eq!(result.deleted_count(), expected.len());
        prop_assert_eq!(result.examined, count as usize);
        prop_assert!(result.is_success());
    }

    /// PROPERTY: a referenced version is never deleted, even when other
    /// deletes fail.
    #[test]
    fn property_referenced_versions_survive_failures(
        (count, targets, page_size) in scenario(),
        failing in 1u64..=12,
    ) {
        let provider = seeded(count, &targets, page_size);
        provider.fail_delete_of(VersionId::new(failing.to_string()));

        let _ = CleanupUseCase::new(&provider).execute(&spec()).unwrap();

        let deleted = deleted_versions(&provider);
        for target in &targets {
            prop_assert!(!deleted.contains(&target.to_string()));
        }
        let remaining: BTreeSet<String> = provider
            .snapshot()
            .functions["orders"]
            .versions
            .iter()
            .map(|v| v.version.to_string())
            .collect();
        for target in &targets {
            prop_assert!(remaining.contains(&target.to_string()));
        }
    }

    /// PROPERTY: the pure set difference keeps order, drops `$LATEST`, and
    /// never returns a referenced version.
    #[test]
    fn property_unreferenced_is_set_difference(
        all in proptest::collection::vec(0u8..20, 0..30),
        referenced in proptest::collection::btree_set(0u8..20, 0..10),
        include_latest in any::<bool>(),
    ) {
        let mut versions: Vec<VersionId> =
            all.iter().map(|n| VersionId::new(n.to_string())).collect();
        if include_latest {
            versions.insert(0, VersionId::latest());
        }
        let referenced: BTreeSet<VersionId> =
            referenced.iter().map(|n| VersionId::new(n.to_string())).collect();

        let doomed = unreferenced_versions(&versions, &referenced);

        prop_assert!(doomed.iter().all(|v| !referenced.contains(v)));
        prop_assert!(doomed.iter().all(|v| !v.is_latest()));
        let unique: BTreeSet<&VersionId> = doomed.iter().collect();
        prop_assert_eq!(unique.len(), doomed.len());
        for version in &versions {
            if !version.is_latest() && !referenced.contains(version) {
                prop_assert!(doomed.contains(version));
            }
        }
    }
}

#[test]
fn no_unreferenced_versions_means_no_deletes() {
    let provider = seeded(3, &[1, 2, 3], 2);

    let result = CleanupUseCase::new(&provider).execute(&spec()).unwrap();

    assert_eq!(result.deleted_count(), 0);
    assert!(deleted_versions(&provider).is_empty());
}
