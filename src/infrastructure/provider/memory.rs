//! In-memory function provider
//!
//! Emulates the hosting platform inside the process. Every port call is
//! recorded so tests can assert on the exact call sequence, and failures
//! can be injected per operation.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use crate::domain::entities::{Alias, FunctionConfiguration, FunctionDetails, FunctionVersion};
use crate::domain::ports::{FunctionProvider, ProviderError, ProviderResult};
use crate::domain::services::Page;
use crate::domain::value_objects::VersionId;

use super::state::{ProviderState, DEFAULT_PAGE_SIZE};

/// A recorded provider call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    GetFunction {
        function: String,
    },
    CreateFunction {
        function: String,
        publish: bool,
    },
    UpdateFunctionConfiguration {
        function: String,
    },
    UpdateFunctionCode {
        function: String,
        publish: bool,
    },
    DeleteFunction {
        function: String,
        qualifier: Option<VersionId>,
    },
    ListVersions {
        function: String,
        marker: Option<String>,
    },
    ListAliases {
        function: String,
        marker: Option<String>,
    },
    CreateAlias {
        function: String,
        alias: String,
        version: VersionId,
    },
    UpdateAlias {
        function: String,
        alias: String,
        version: VersionId,
    },
    DeleteAlias {
        function: String,
        alias: String,
    },
}

impl ProviderCall {
    /// Operation name, as accepted by [`InMemoryProvider::fail_next`]
    pub fn operation(&self) -> &'static str {
        match self {
            ProviderCall::GetFunction { .. } => "get_function",
            ProviderCall::CreateFunction { .. } => "create_function",
            ProviderCall::UpdateFunctionConfiguration { .. } => "update_function_configuration",
            ProviderCall::UpdateFunctionCode { .. } => "update_function_code",
            ProviderCall::DeleteFunction { .. } => "delete_function",
            ProviderCall::ListVersions { .. } => "list_versions",
            ProviderCall::ListAliases { .. } => "list_aliases",
            ProviderCall::CreateAlias { .. } => "create_alias",
            ProviderCall::UpdateAlias { .. } => "update_alias",
            ProviderCall::DeleteAlias { .. } => "delete_alias",
        }
    }

    /// True for calls that change provider state
    pub fn is_mutating(&self) -> bool {
        !matches!(
            self,
            ProviderCall::GetFunction { .. }
                | ProviderCall::ListVersions { .. }
                | ProviderCall::ListAliases { .. }
        )
    }
}

struct Inner {
    state: ProviderState,
    calls: Vec<ProviderCall>,
    connected: bool,
    failing_deletes: HashSet<VersionId>,
    injected: Vec<(&'static str, ProviderError)>,
}

/// Function provider backed by process memory
pub struct InMemoryProvider {
    inner: Mutex<Inner>,
    page_size: usize,
}

impl Default for InMemoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Provider whose listings return at most `page_size` entries per page
    pub fn with_page_size(page_size: usize) -> Self {
        Self::from_state(ProviderState::new(), page_size)
    }

    pub fn from_state(state: ProviderState, page_size: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                state,
                calls: Vec::new(),
                connected: true,
                failing_deletes: HashSet::new(),
                injected: Vec::new(),
            }),
            page_size: page_size.max(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make every subsequent call fail with `Unavailable`
    pub fn disconnect(&self) {
        self.lock().connected = false;
    }

    pub fn reconnect(&self) {
        self.lock().connected = true;
    }

    /// Deleting `version` fails with `Throttled` from now on
    pub fn fail_delete_of(&self, version: VersionId) {
        self.lock().failing_deletes.insert(version);
    }

    /// The next call of `operation` (see [`ProviderCall::operation`]) fails with `error`
    pub fn fail_next(&self, operation: &'static str, error: ProviderError) {
        self.lock().injected.push((operation, error));
    }

    /// Calls recorded so far, oldest first
    pub fn calls(&self) -> Vec<ProviderCall> {
        self.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    pub fn snapshot(&self) -> ProviderState {
        self.lock().state.clone()
    }

    /// Record `call`, apply connection and injected failures, then run `op`.
    fn call<T>(
        &self,
        call: ProviderCall,
        op: impl FnOnce(&mut Inner) -> ProviderResult<T>,
    ) -> ProviderResult<T> {
        let mut inner = self.lock();
        let operation = call.operation();
        inner.calls.push(call);

        if !inner.connected {
            return Err(disconnected());
        }
        if let Some(position) = inner.injected.iter().position(|(name, _)| *name == operation) {
            let (_, error) = inner.injected.remove(position);
            return Err(error);
        }
        op(&mut *inner)
    }
}

fn disconnected() -> ProviderError {
    ProviderError::Unavailable {
        message: "in-memory provider is disconnected".to_string(),
    }
}

impl FunctionProvider for InMemoryProvider {
    fn check_connection(&self) -> ProviderResult<()> {
        if self.lock().connected {
            Ok(())
        } else {
            Err(disconnected())
        }
    }

    fn get_function(&self, name: &str) -> ProviderResult<FunctionDetails> {
        self.call(
            ProviderCall::GetFunction {
                function: name.to_string(),
            },
            |inner| inner.state.get_function(name),
        )
    }

    fn create_function(
        &self,
        configuration: &FunctionConfiguration,
        code: &[u8],
        publish: bool,
    ) -> ProviderResult<VersionId> {
        self.call(
            ProviderCall::CreateFunction {
                function: configuration.name.clone(),
                publish,
            },
            |inner| {
                inner
                    .state
                    .create_function(configuration, code, publish, Utc::now())
            },
        )
    }

    fn update_function_configuration(
        &self,
        configuration: &FunctionConfiguration,
    ) -> ProviderResult<()> {
        self.call(
            ProviderCall::UpdateFunctionConfiguration {
                function: configuration.name.clone(),
            },
            |inner| inner.state.update_configuration(configuration, Utc::now()),
        )
    }

    fn update_function_code(
        &self,
        name: &str,
        code: &[u8],
        publish: bool,
    ) -> ProviderResult<VersionId> {
        self.call(
            ProviderCall::UpdateFunctionCode {
                function: name.to_string(),
                publish,
            },
            |inner| inner.state.update_code(name, code, publish, Utc::now()),
        )
    }

    fn delete_function(&self, name: &str, qualifier: Option<&VersionId>) -> ProviderResult<()> {
        self.call(
            ProviderCall::DeleteFunction {
                function: name.to_string(),
                qualifier: qualifier.cloned(),
            },
            |inner| {
                if qualifier.is_some_and(|v| inner.failing_deletes.contains(v)) {
                    return Err(ProviderError::Throttled);
                }
                inner.state.delete_function(name, qualifier)
            },
        )
    }

    fn list_versions(
        &self,
        name: &str,
        marker: Option<&str>,
    ) -> ProviderResult<Page<FunctionVersion>> {
        self.call(
            ProviderCall::ListVersions {
                function: name.to_string(),
                marker: marker.map(str::to_string),
            },
            |inner| inner.state.list_versions(name, marker, self.page_size),
        )
    }

    fn list_aliases(&self, name: &str, marker: Option<&str>) -> ProviderResult<Page<Alias>> {
        self.call(
            ProviderCall::ListAliases {
                function: name.to_string(),
                marker: marker.map(str::to_string),
            },
            |inner| inner.state.list_aliases(name, marker, self.page_size),
        )
    }

    fn create_alias(
        &self,
        name: &str,
        alias: &str,
        version: &VersionId,
        description: &str,
    ) -> ProviderResult<Alias> {
        self.call(
            ProviderCall::CreateAlias {
                function: name.to_string(),
                alias: alias.to_string(),
                version: version.clone(),
            },
            |inner| inner.state.create_alias(name, alias, version, description),
        )
    }

    fn update_alias(
        &self,
        name: &str,
        alias: &str,
        version: &VersionId,
        description: &str,
    ) -> ProviderResult<Alias> {
        self.call(
            ProviderCall::UpdateAlias {
                function: name.to_string(),
                alias: alias.to_string(),
                version: version.clone(),
            },
            |inner| inner.state.update_alias(name, alias, version, description),
        )
    }

    fn delete_alias(&self, name: &str, alias: &str) -> ProviderResult<()> {
        self.call(
            ProviderCall::DeleteAlias {
                function: name.to_string(),
                alias: alias.to_string(),
            },
            |inner| inner.state.delete_alias(name, alias),
        )
    }
}
