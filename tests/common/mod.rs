//! Common test utilities for fnpilot CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory and provider state
//! - Assertion macros: `assert_output_contains!`, `assert_exit_failure!`
//! - Fixtures: Reusable config file contents

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
