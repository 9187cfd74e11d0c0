//! Property tests for function spec validation.

use proptest::prelude::*;

use fnpilot::domain::entities::{
    is_valid_environment_name, is_valid_function_name, FunctionSpec, FunctionSpecBuilder,
    SpecError, MAX_MEMORY_SIZE_MB, MEMORY_SIZE_STEP_MB, MIN_MEMORY_SIZE_MB,
};
use fnpilot::domain::value_objects::Runtime;
use fnpilot::Environment;

fn base() -> FunctionSpecBuilder {
    FunctionSpec::builder("orders")
        .with_handler("index.handler")
        .with_role("role")
        .with_package("orders.zip")
        .with_runtime("nodejs20.x")
}

fn ids() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z]{3}-[0-9a-f]{4}", 1..4)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: memory sizes build iff in range and on the step.
    #[test]
    fn property_memory_size_accepted_iff_aligned_and_in_range(memory in 0u32..4096) {
        let result = base().with_memory_size(memory).build();

        let in_range = (MIN_MEMORY_SIZE_MB..=MAX_MEMORY_SIZE_MB).contains(&memory);
        let aligned = memory % MEMORY_SIZE_STEP_MB == 0;
        match result {
            Ok(spec) => {
                prop_assert!(in_range && aligned);
                prop_assert_eq!(spec.memory_size(), memory);
            }
            Err(SpecError::MemorySizeOutOfRange { .. }) => prop_assert!(!in_range),
            Err(SpecError::MemorySizeNotAligned { .. }) => prop_assert!(in_range && !aligned),
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// PROPERTY: network placement needs both lists or neither.
    #[test]
    fn property_half_network_placement_fails(
        subnets in ids(),
        groups in ids(),
        which in 0u8..3,
    ) {
        let builder = match which {
            0 => base().with_subnet_ids(subnets),
            1 => base().with_security_group_ids(groups),
            _ => base().with_subnet_ids(subnets).with_security_group_ids(groups),
        };

        let result = builder.build();
        if which < 2 {
            prop_assert!(matches!(result, Err(SpecError::NetworkPlacement(_))));
        } else {
            prop_assert!(result.unwrap().network().is_some());
        }
    }

    /// PROPERTY: anything off the allow-list is rejected as unsupported.
    #[test]
    fn property_unknown_runtime_fails(runtime in "[a-z]{2,8}[0-9]{0,2}") {
        prop_assume!(runtime.parse::<Runtime>().is_err());

        let result = base().with_runtime(runtime.clone()).build();
        prop_assert_eq!(result.unwrap_err(), SpecError::UnsupportedRuntime { runtime });
    }

    /// PROPERTY: function name validation agrees with the builder.
    #[test]
    fn property_function_name_validation_matches_builder(name in "[A-Za-z0-9_ .-]{0,70}") {
        let valid = is_valid_function_name(name.trim());
        let built = FunctionSpec::builder(name.clone())
            .with_handler("h")
            .with_role("r")
            .with_package("p.zip")
            .with_runtime("java21")
            .build();

        prop_assert_eq!(built.is_ok(), valid);
    }

    /// PROPERTY: digits-only environment names never validate.
    #[test]
    fn property_numeric_environment_names_rejected(name in "[0-9]{1,12}") {
        prop_assert!(!is_valid_environment_name(&name));
        prop_assert!(Environment::new(name).is_err());
    }
}

#[test]
fn every_allow_listed_runtime_round_trips_through_its_identifier() {
    for runtime in Runtime::ALL {
        let parsed: Runtime = runtime.as_str().parse().unwrap();
        assert_eq!(parsed, runtime);
        assert!(base().with_runtime(runtime.as_str()).build().is_ok());
    }
}
