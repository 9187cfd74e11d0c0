//! Test environment for isolated fnpilot testing.
//!
//! Provides `TestEnv` - a temp project directory with its own provider state
//! directory, plus helpers to run the fnpilot binary and inspect that state.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use fnpilot::application::StatusUseCase;
use fnpilot::config::Config;
use fnpilot::infrastructure::{ProviderState, TomlProviderStore};
use fnpilot::StatusReport;
use tempfile::TempDir;

use super::fixtures::{BASIC_CONFIG, PACKAGE_PATH, PACKAGE_V1};

const SCRUBBED_ENV: &[&str] = &[
    "FNPILOT_PACKAGE",
    "FNPILOT_PROVIDER_DIR",
    "FNPILOT_PAGE_SIZE",
    "FNPILOT_DELETE_UNREFERENCED_VERSIONS",
    "CI",
    "GITHUB_ACTIONS",
];

/// Result of running a fnpilot CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid JSON line {line:?}: {e}"))
            })
            .collect()
    }

    /// Values of the `event` field, in order
    pub fn event_names(&self) -> Vec<String> {
        self.json_lines()
            .iter()
            .filter_map(|v| v["event"].as_str().map(str::to_string))
            .collect()
    }

    /// The trailing `summary` line of a JSON run
    pub fn summary(&self) -> serde_json::Value {
        self.json_lines()
            .into_iter()
            .rev()
            .find(|v| v["event"] == "summary")
            .unwrap_or_else(|| panic!("no summary line in:\n{}", self.stdout))
    }
}

/// Isolated project directory with a private provider state directory
pub struct TestEnv {
    pub project_root: TempDir,
    fnpilot_bin: PathBuf,
}

impl TestEnv {
    /// Empty project directory
    pub fn empty() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create temp dir"),
            fnpilot_bin: PathBuf::from(env!("CARGO_BIN_EXE_fnpilot")),
        }
    }

    /// Project with `BASIC_CONFIG` and a package on disk
    pub fn new() -> Self {
        Self::with_config(BASIC_CONFIG)
    }

    pub fn with_config(config: &str) -> Self {
        let env = Self::empty();
        env.write_project_file("fnpilot.toml", config);
        env.write_package(PACKAGE_V1);
        env
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn state_dir(&self) -> PathBuf {
        self.project_path(".provider")
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        self.write_project_bytes(relative_path, content.as_bytes());
    }

    pub fn write_package(&self, bytes: &[u8]) {
        self.write_project_bytes(PACKAGE_PATH, bytes);
    }

    fn write_project_bytes(&self, relative_path: &str, content: &[u8]) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Run fnpilot from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run fnpilot from the project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.fnpilot_bin);
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        cmd.current_dir(cwd)
            .args(args)
            .stdin(Stdio::null())
            .env("NO_COLOR", "1")
            .env("LANG", "C")
            .env("FNPILOT_PROVIDER_DIR", self.state_dir());

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute fnpilot");
        output_to_result(output)
    }

    /// Provider state as persisted by the binary
    pub fn state(&self) -> ProviderState {
        let text = std::fs::read_to_string(self.state_dir().join("state.toml"))
            .expect("provider state file should exist");
        toml::from_str(&text).expect("provider state should parse")
    }

    pub fn has_state(&self) -> bool {
        self.state_dir().join("state.toml").exists()
    }

    /// Status report through the library, bypassing the CLI
    pub fn status(&self) -> StatusReport {
        let config = Config::load(&self.project_path("fnpilot.toml")).expect("config loads");
        let spec = config.function_spec().expect("spec is valid");
        let store = TomlProviderStore::new(self.state_dir());
        StatusUseCase::new(&store).execute(&spec).expect("status")
    }

    /// Published version ids, in listing order
    pub fn versions(&self) -> Vec<String> {
        self.status()
            .versions
            .iter()
            .map(|usage| usage.version.to_string())
            .collect()
    }

    /// `alias -> version` pairs, ordered by alias name
    pub fn aliases(&self) -> Vec<(String, String)> {
        self.status()
            .aliases
            .iter()
            .map(|alias| (alias.name.clone(), alias.version.to_string()))
            .collect()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
