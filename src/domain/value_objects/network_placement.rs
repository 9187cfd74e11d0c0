//! Network placement value object
//!
//! A function is either detached from any private network, or attached with
//! at least one subnet AND at least one security group. Exactly one empty
//! list is never a valid placement.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Subnets and security groups a function is attached to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkPlacement {
    subnet_ids: Vec<String>,
    security_group_ids: Vec<String>,
}

/// Only one of the two lists was populated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "network placement needs both subnets and security groups \
     (got {subnet_count} subnet(s), {security_group_count} security group(s))"
)]
pub struct MismatchedPlacement {
    pub subnet_count: usize,
    pub security_group_count: usize,
}

impl NetworkPlacement {
    /// Build a placement from raw lists.
    ///
    /// Returns `Ok(None)` when both lists are empty (detached function).
    pub fn from_lists(
        subnet_ids: Vec<String>,
        security_group_ids: Vec<String>,
    ) -> Result<Option<Self>, MismatchedPlacement> {
        match (subnet_ids.is_empty(), security_group_ids.is_empty()) {
            (true, true) => Ok(None),
            (false, false) => Ok(Some(Self {
                subnet_ids,
                security_group_ids,
            })),
            _ => Err(MismatchedPlacement {
                subnet_count: subnet_ids.len(),
                security_group_count: security_group_ids.len(),
            }),
        }
    }

    pub fn subnet_ids(&self) -> &[String] {
        &self.subnet_ids
    }

    pub fn security_group_ids(&self) -> &[String] {
        &self.security_group_ids
    }
}
