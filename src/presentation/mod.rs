//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command line definition shared by the binary and its tests
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use fnpilot::presentation::factory;
//!
//! let config = factory::load_config(Path::new("fnpilot.toml"))?;
//! let provider = factory::open_provider(&config)?;
//! let result = factory::create_deploy_use_case(provider).execute(&spec, &environment)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_deploy_use_case, create_event_sink, load_config, open_provider};
