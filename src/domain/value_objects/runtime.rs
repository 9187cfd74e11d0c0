//! Runtime value object - the execution environment a function runs in
//!
//! Only identifiers on the allow-list below are accepted.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported function runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Runtime {
    #[serde(rename = "nodejs18.x")]
    Nodejs18,
    #[serde(rename = "nodejs20.x")]
    Nodejs20,
    #[serde(rename = "python3.9")]
    Python39,
    #[serde(rename = "python3.10")]
    Python310,
    #[serde(rename = "python3.11")]
    Python311,
    #[serde(rename = "python3.12")]
    Python312,
    #[serde(rename = "java17")]
    Java17,
    #[serde(rename = "java21")]
    Java21,
    #[serde(rename = "dotnet8")]
    Dotnet8,
    #[serde(rename = "ruby3.2")]
    Ruby32,
    #[serde(rename = "ruby3.3")]
    Ruby33,
    /// Custom runtime on Amazon Linux 2
    #[serde(rename = "provided.al2")]
    ProvidedAl2,
    /// Custom runtime on Amazon Linux 2023
    #[serde(rename = "provided.al2023")]
    ProvidedAl2023,
}

impl Runtime {
    /// Every runtime on the allow-list
    pub const ALL: [Runtime; 13] = [
        Runtime::Nodejs18,
        Runtime::Nodejs20,
        Runtime::Python39,
        Runtime::Python310,
        Runtime::Python311,
        Runtime::Python312,
        Runtime::Java17,
        Runtime::Java21,
        Runtime::Dotnet8,
        Runtime::Ruby32,
        Runtime::Ruby33,
        Runtime::ProvidedAl2,
        Runtime::ProvidedAl2023,
    ];

    /// Provider identifier for this runtime
    pub fn as_str(&self) -> &'static str {
        match self {
            Runtime::Nodejs18 => "nodejs18.x",
            Runtime::Nodejs20 => "nodejs20.x",
            Runtime::Python39 => "python3.9",
            Runtime::Python310 => "python3.10",
            Runtime::Python311 => "python3.11",
            Runtime::Python312 => "python3.12",
            Runtime::Java17 => "java17",
            Runtime::Java21 => "java21",
            Runtime::Dotnet8 => "dotnet8",
            Runtime::Ruby32 => "ruby3.2",
            Runtime::Ruby33 => "ruby3.3",
            Runtime::ProvidedAl2 => "provided.al2",
            Runtime::ProvidedAl2023 => "provided.al2023",
        }
    }
}

impl std::fmt::Display for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an identifier is not on the allow-list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRuntime(pub String);

impl std::fmt::Display for UnknownRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown runtime '{}'", self.0)
    }
}

impl std::error::Error for UnknownRuntime {}

impl FromStr for Runtime {
    type Err = UnknownRuntime;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Runtime::ALL
            .into_iter()
            .find(|runtime| runtime.as_str() == wanted)
            .ok_or_else(|| UnknownRuntime(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_runtime_round_trips_through_from_str() {
        for runtime in Runtime::ALL {
            assert_eq!(runtime.as_str().parse::<Runtime>().unwrap(), runtime);
        }
    }

    #[test]
    fn unknown_runtime_is_rejected() {
        let err = "cobol85".parse::<Runtime>().unwrap_err();
        assert_eq!(err, UnknownRuntime("cobol85".to_string()));
        assert_eq!(err.to_string(), "unknown runtime 'cobol85'");
    }

    #[test]
    fn identifiers_are_case_sensitive() {
        assert!("Python3.12".parse::<Runtime>().is_err());
    }

    #[test]
    fn serde_uses_provider_identifiers() {
        let json = serde_json::to_string(&Runtime::Nodejs20).unwrap();
        assert_eq!(json, "\"nodejs20.x\"");
        let back: Runtime = serde_json::from_str("\"provided.al2023\"").unwrap();
        assert_eq!(back, Runtime::ProvidedAl2023);
    }
}
