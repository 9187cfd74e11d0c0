//! Teardown Module
//!
//! Removes an environment from a function, and deletes whole functions.
//!
//! - `result` - Result types (`TeardownResult`)
//! - `use_case` - `TeardownUseCase` (alias removal + optional cleanup) and
//!   `DeleteUseCase` (unqualified function delete)

mod result;
mod use_case;

pub use result::TeardownResult;
pub use use_case::{DeleteUseCase, TeardownUseCase};
