//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;
use std::sync::Arc;

use crate::application::{
    CheckUseCase, CleanupUseCase, DeleteUseCase, DeployUseCase, StatusUseCase, TeardownUseCase,
};
use crate::config::Config;
use crate::domain::ports::{DeployEventSink, NoopEventSink, Operation};
use crate::error::FnpilotResult;
use crate::infrastructure::{
    ConsoleEventSink, JsonEventSink, LocalArtifactSource, TomlProviderStore,
};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<TomlProviderStore, LocalArtifactSource>;

pub type ConcreteTeardownUseCase = TeardownUseCase<TomlProviderStore>;
pub type ConcreteDeleteUseCase = DeleteUseCase<TomlProviderStore>;
pub type ConcreteCleanupUseCase = CleanupUseCase<TomlProviderStore>;
pub type ConcreteStatusUseCase = StatusUseCase<TomlProviderStore>;
pub type ConcreteCheckUseCase = CheckUseCase<LocalArtifactSource>;

/// Load the config file and apply `FNPILOT_*` overrides
pub fn load_config(path: &Path) -> FnpilotResult<Config> {
    Config::load(path)?.with_env_overrides()
}

/// Open the local provider store named by the config
pub fn open_provider(config: &Config) -> FnpilotResult<TomlProviderStore> {
    Ok(TomlProviderStore::open(
        config.state_dir(),
        config.page_size(),
    )?)
}

/// Pick the event sink for the requested output mode
///
/// JSON mode streams every event as NDJSON on stdout. Text mode only prints
/// progress lines when `-v` is given; the final summary is rendered
/// separately.
pub fn create_event_sink(
    json: bool,
    verbose: u8,
    color: bool,
    operation: Operation,
) -> Arc<dyn DeployEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout(operation))
    } else if verbose > 0 {
        Arc::new(ConsoleEventSink::stderr(color))
    } else {
        Arc::new(NoopEventSink)
    }
}

pub fn create_deploy_use_case(provider: TomlProviderStore) -> ConcreteDeployUseCase {
    DeployUseCase::new(provider, LocalArtifactSource::new())
}

pub fn create_teardown_use_case(provider: TomlProviderStore) -> ConcreteTeardownUseCase {
    TeardownUseCase::new(provider)
}

pub fn create_delete_use_case(provider: TomlProviderStore) -> ConcreteDeleteUseCase {
    DeleteUseCase::new(provider)
}

pub fn create_cleanup_use_case(provider: TomlProviderStore) -> ConcreteCleanupUseCase {
    CleanupUseCase::new(provider)
}

pub fn create_status_use_case(provider: TomlProviderStore) -> ConcreteStatusUseCase {
    StatusUseCase::new(provider)
}

pub fn create_check_use_case() -> ConcreteCheckUseCase {
    CheckUseCase::new(LocalArtifactSource::new())
}
