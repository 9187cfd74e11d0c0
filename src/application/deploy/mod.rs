//! Deploy Module
//!
//! Orchestrates the deployment flow for one environment.
//!
//! ## Structure
//!
//! - `result` - Result types (`DeployResult`, `FunctionAction`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use fnpilot::application::deploy::DeployUseCase;
//!
//! let use_case = DeployUseCase::new(provider, LocalArtifactSource::new());
//! let result = use_case.execute(&spec, &environment)?;
//! ```

mod result;
mod use_case;

pub use result::{DeployResult, FunctionAction};
pub use use_case::DeployUseCase;
