//! Function Provider Implementations
//!
//! - `InMemoryProvider` - process-local emulation with a call log
//! - `TomlProviderStore` - emulation persisted to a state directory
//!
//! Both delegate to the shared `ProviderState` model.

mod memory;
mod state;
mod toml_store;

pub use memory::{InMemoryProvider, ProviderCall};
pub use state::{
    ProviderState, StoredAlias, StoredFunction, StoredVersion, DEFAULT_PAGE_SIZE,
    STATE_FORMAT_VERSION,
};
pub use toml_store::TomlProviderStore;
