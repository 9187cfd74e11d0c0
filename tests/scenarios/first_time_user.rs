//! A new user checks their config, deploys, and looks at the result.

use crate::common::*;
use crate::{assert_exit_success, assert_output_contains};

#[test]
fn check_deploy_status() {
    let env = TestEnv::new();

    let check = env.run(&["check"]);
    assert_exit_success!(check);
    assert!(!env.has_state());

    let deploy = env.run(&["deploy", "staging"]);
    assert_exit_success!(deploy);
    assert_output_contains!(deploy, "published version 1");

    let status = env.run(&["status"]);
    assert_exit_success!(status);
    assert_output_contains!(status, "Runtime: nodejs20.x (index.handler)");
    assert_output_contains!(status, "version 1    staging");
}

#[test]
fn fixing_a_bad_memory_size() {
    let env = TestEnv::with_config(MISALIGNED_MEMORY_CONFIG);

    let deploy = env.run(&["deploy", "staging"]);
    assert!(!deploy.success);

    env.write_project_file(
        "fnpilot.toml",
        &MISALIGNED_MEMORY_CONFIG.replace("memory_size = 200", "memory_size = 256"),
    );
    let deploy = env.run(&["deploy", "staging"]);
    assert_exit_success!(deploy);

    let state = env.state();
    assert_eq!(state.functions["orders"].memory_size, 256);
}
