//! Resource resolution
//!
//! Looks up the provider-side state of a function. A missing function is a
//! legitimate answer that drives the create-vs-update decision, so it is
//! returned as `None` rather than as an error.

use crate::domain::entities::FunctionDetails;
use crate::domain::ports::{FunctionProvider, ProviderError, ProviderResult};

/// Current details of `name`, or `None` if the function does not exist
pub fn resolve_function<P: FunctionProvider>(
    provider: &P,
    name: &str,
) -> ProviderResult<Option<FunctionDetails>> {
    match provider.get_function(name) {
        Ok(details) => Ok(Some(details)),
        Err(ProviderError::FunctionNotFound { .. }) => Ok(None),
        Err(err) => Err(err),
    }
}
