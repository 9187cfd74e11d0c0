//! Configuration loading

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{FnpilotError, FnpilotResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the unknown key, e.g. `function.memory`
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FnpilotResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FnpilotError::ConfigNotFound {
            path: path.to_path_buf(),
        },
        _ => FnpilotError::Io(e),
    })?;

    let (config, unknown_paths) =
        parse_with_unknown_keys(&content).map_err(|e| FnpilotError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| {
            let leaf = key.split('.').next_back().unwrap_or(key.as_str()).to_string();
            ConfigWarning {
                line: find_line_number(&content, &leaf),
                suggestion: suggest_key(&leaf),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    let base = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok((config.resolve_paths(base), warnings))
}

/// Parse TOML, returning the dotted paths of keys the schema ignored
pub fn parse_with_unknown_keys(content: &str) -> Result<(Config, Vec<String>), toml::de::Error> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })?;

    Ok((config, unknown_paths))
}

/// Apply environment variable overrides (FNPILOT_* prefix)
///
/// Empty values are ignored; values that do not parse are errors.
pub fn with_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> FnpilotResult<Config> {
    // FNPILOT_PACKAGE
    if let Some(package) = get_env("FNPILOT_PACKAGE").filter(|v| !v.is_empty()) {
        config.function.package = Some(PathBuf::from(package));
    }

    // FNPILOT_PROVIDER_DIR
    if let Some(dir) = get_env("FNPILOT_PROVIDER_DIR").filter(|v| !v.is_empty()) {
        config.provider.state_dir = Some(PathBuf::from(dir));
    }

    // FNPILOT_PAGE_SIZE
    if let Some(val) = get_env("FNPILOT_PAGE_SIZE").filter(|v| !v.trim().is_empty()) {
        let size = val
            .trim()
            .parse()
            .map_err(|_| FnpilotError::InvalidEnvOverride {
                key: "FNPILOT_PAGE_SIZE",
                value: val.clone(),
                expected: "a non-negative integer",
            })?;
        config.provider.page_size = Some(size);
    }

    // FNPILOT_DELETE_UNREFERENCED_VERSIONS
    if let Some(val) =
        get_env("FNPILOT_DELETE_UNREFERENCED_VERSIONS").filter(|v| !v.trim().is_empty())
    {
        let enabled = match val.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => {
                return Err(FnpilotError::InvalidEnvOverride {
                    key: "FNPILOT_DELETE_UNREFERENCED_VERSIONS",
                    value: val,
                    expected: "one of 1, true, yes, on, 0, false, no, off",
                })
            }
        };
        config.function.delete_unreferenced_versions = Some(enabled);
    }

    Ok(config)
}

/// `$XDG_DATA_HOME/fnpilot/provider`, or a relative fallback
pub fn default_state_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("fnpilot").join("provider"))
        .unwrap_or_else(|| PathBuf::from(".fnpilot/provider"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "function",
        "name",
        "handler",
        "role",
        "package",
        "runtime",
        "description",
        "timeout",
        "memory_size",
        "delete_unreferenced_versions",
        "vpc",
        "subnet_ids",
        "security_group_ids",
        "provider",
        "state_dir",
        "page_size",
        "environments",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
