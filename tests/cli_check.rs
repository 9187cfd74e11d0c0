//! `fnpilot check`

mod common;

use common::*;

#[test]
fn check_passes_for_valid_project() {
    let env = TestEnv::new();

    let result = env.run(&["check"]);

    assert_exit_success!(result);
    assert_output_contains!(result, "[OK] Configuration OK");
    assert_output_contains!(result, "function - orders (nodejs20.x)");
    assert!(!env.has_state(), "check must not touch the provider");
}

#[test]
fn check_reports_missing_package() {
    let env = TestEnv::empty();
    env.write_project_file("fnpilot.toml", BASIC_CONFIG);

    let result = env.run(&["check"]);

    assert_exit_failure!(result);
    assert_output_contains!(result, "[FAIL] package");
    assert_output_contains!(result, "Build the deployment package first.");
}

#[test]
fn check_warns_about_unknown_keys() {
    let env = TestEnv::new();
    env.write_project_file(
        "fnpilot.toml",
        &BASIC_CONFIG.replace("runtime = ", "memory_sise = 256\nruntime = "),
    );

    let result = env.run(&["check"]);

    assert_exit_success!(result);
    assert_output_contains!(result, "unknown key 'function.memory_sise'");
    assert_output_contains!(result, "Did you mean 'memory_size'?");
}

#[test]
fn check_json_emits_items_and_summary() {
    let env = TestEnv::with_config(MISALIGNED_MEMORY_CONFIG);

    let result = env.run(&["--json", "check"]);

    assert_exit_failure!(result);
    let lines = result.json_lines();
    assert!(lines.iter().any(|l| l["event"] == "check"
        && l["name"] == "function"
        && l["status"] == "error"));
    assert_eq!(result.summary()["errors"], 1);
}

#[test]
fn check_of_missing_config_fails() {
    let env = TestEnv::empty();

    let result = env.run(&["check"]);

    assert_exit_failure!(result);
    assert_output_contains!(result, "config file not found");
}

#[test]
fn check_rejects_unparsable_override() {
    let env = TestEnv::new();

    let result = env.run_with_env(&["check"], &[("FNPILOT_PAGE_SIZE", "many")]);

    assert_exit_failure!(result);
    assert_output_contains!(result, "[FAIL] environment overrides");
    assert_output_contains!(result, "invalid value 'many' for FNPILOT_PAGE_SIZE");
}
