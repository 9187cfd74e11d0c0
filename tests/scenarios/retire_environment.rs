//! Tearing down an environment and finally deleting the function.

use crate::common::*;
use crate::{assert_exit_success, assert_output_contains};

#[test]
fn teardown_staging_keeps_prod_version() {
    let env = TestEnv::new();
    assert_exit_success!(env.run(&["deploy", "prod"]));
    env.write_package(PACKAGE_V2);
    assert_exit_success!(env.run(&["deploy", "staging"]));
    assert_eq!(env.versions(), vec!["1", "2"]);

    let teardown = env.run(&["teardown", "staging"]);

    assert_exit_success!(teardown);
    assert_output_contains!(teardown, "1 versions deleted");
    assert_eq!(env.versions(), vec!["1"]);
    assert_eq!(env.aliases(), vec![("prod".to_string(), "1".to_string())]);
}

#[test]
fn retire_everything() {
    let env = TestEnv::new();
    assert_exit_success!(env.run(&["deploy", "prod"]));
    assert_exit_success!(env.run(&["deploy", "staging"]));

    assert_exit_success!(env.run(&["teardown", "staging"]));
    assert_exit_success!(env.run(&["teardown", "prod"]));
    // the last alias is gone, so cleanup removed every published version
    assert!(env.versions().is_empty());

    assert_exit_success!(env.run(&["delete", "--yes"]));
    let status = env.run(&["status"]);
    assert_exit_success!(status);
    assert_output_contains!(status, "State: not deployed");
}
