//! Provider connection precondition

use crate::domain::ports::FunctionProvider;
use crate::error::{FnpilotError, FnpilotResult};

/// Fail with `ProviderNotConnected` unless the provider answers its probe.
///
/// This is a fatal precondition; callers do not retry it.
pub fn ensure_connected<P: FunctionProvider>(provider: &P) -> FnpilotResult<()> {
    provider
        .check_connection()
        .map_err(|err| FnpilotError::ProviderNotConnected {
            reason: err.to_string(),
        })
}
