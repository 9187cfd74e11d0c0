//! Two long-lived environments plus a scratch one; a staging redeploy
//! collects every version neither environment points at.

use crate::common::*;
use crate::{assert_exit_success, assert_output_contains};

const CLEANUP_ON: &[(&str, &str)] = &[("FNPILOT_DELETE_UNREFERENCED_VERSIONS", "1")];

#[test]
fn redeploying_staging_deletes_stale_versions() {
    let env = TestEnv::with_config(NO_CLEANUP_CONFIG);

    // versions 1, 2, 3 with prod -> 1, staging -> 2
    assert_exit_success!(env.run(&["deploy", "prod"]));
    assert_exit_success!(env.run(&["deploy", "staging"]));
    assert_exit_success!(env.run(&["deploy", "scratch"]));
    assert_exit_success!(env.run(&["teardown", "scratch"]));
    assert_eq!(env.versions(), vec!["1", "2", "3"]);

    env.write_package(PACKAGE_V2);
    let deploy = env.run_with_env(&["--json", "deploy", "staging"], CLEANUP_ON);
    assert_exit_success!(deploy);

    let summary = deploy.summary();
    assert_eq!(summary["version"], "4");
    assert_eq!(summary["alias"]["previous"], "2");
    assert_eq!(summary["cleanup"]["examined"], 4);
    assert_eq!(summary["cleanup"]["referenced"], 2);
    assert_eq!(summary["cleanup"]["deleted"], serde_json::json!(["2", "3"]));

    assert_eq!(env.versions(), vec!["1", "4"]);
    assert_eq!(
        env.aliases(),
        vec![
            ("prod".to_string(), "1".to_string()),
            ("staging".to_string(), "4".to_string()),
        ]
    );
}

#[test]
fn promoting_to_prod_keeps_staging_version() {
    let env = TestEnv::new();
    assert_exit_success!(env.run(&["deploy", "prod"]));
    assert_exit_success!(env.run(&["deploy", "staging"]));

    env.write_package(PACKAGE_V2);
    let deploy = env.run(&["deploy", "prod"]);

    assert_exit_success!(deploy);
    assert_output_contains!(deploy, "alias prod moved from version 1 to 3");
    assert_eq!(env.versions(), vec!["2", "3"]);
}
