//! Custom assertion macros for CLI and scenario tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

/// Assert that combined stdout/stderr contains a string.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "Deploy Complete");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {
        let combined = $result.combined_output();
        assert!(
            combined.contains($needle),
            "Expected output to contain '{}'.\n--- stdout ---\n{}\n--- stderr ---\n{}",
            $needle,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that a command succeeded, printing its output otherwise.
#[macro_export]
macro_rules! assert_exit_success {
    ($result:expr) => {
        assert!(
            $result.success,
            "Expected success, got exit code {}.\n--- stdout ---\n{}\n--- stderr ---\n{}",
            $result.exit_code,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that a command failed with a non-zero exit code.
#[macro_export]
macro_rules! assert_exit_failure {
    ($result:expr) => {
        assert!(
            !$result.success,
            "Expected failure, but command succeeded.\n--- stdout ---\n{}\n--- stderr ---\n{}",
            $result.stdout,
            $result.stderr
        );
    };
}
