//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `FunctionSpec` - Desired state of the managed function
//! - `Environment` - Deployment target, source of alias names
//! - `Alias` - Named pointer to a published version
//! - `FunctionDetails` / `FunctionVersion` - Provider-reported records

mod alias;
mod environment;
mod function;
mod function_spec;

pub use alias::Alias;
pub use environment::{
    is_valid_environment_name, Environment, EnvironmentError, DEFAULT_ENVIRONMENT_DESCRIPTION,
};
pub use function::{FunctionConfiguration, FunctionDetails, FunctionVersion};
pub use function_spec::{
    is_valid_function_name, validate_memory_size, validate_timeout, FunctionSpec,
    FunctionSpecBuilder, SpecError, DEFAULT_DESCRIPTION, DEFAULT_MEMORY_SIZE_MB,
    DEFAULT_TIMEOUT_SECS, MAX_MEMORY_SIZE_MB, MAX_TIMEOUT_SECS, MEMORY_SIZE_STEP_MB,
    MIN_MEMORY_SIZE_MB, MIN_TIMEOUT_SECS,
};
