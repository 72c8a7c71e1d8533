//! Import identifier codec.
//!
//! Projects import by their bare id. Trust policies have no flat canonical
//! id, so their import identifier is the composite `project_id:trust_policy_id`
//! with exactly one separator; the decoded parts seed state for a normal
//! read.

use depot_core::{DepotError, Result};

/// Import identifier of a project: the bare project id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectImportId(String);

impl ProjectImportId {
    /// Parses a project import identifier.
    ///
    /// # Errors
    ///
    /// Returns `DepotError::Configuration` for an empty identifier.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(DepotError::configuration(
                "project import identifier must not be empty",
            ));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectImportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Composite import identifier of a trust policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustPolicyImportId {
    pub project_id: String,
    pub trust_policy_id: String,
}

impl TrustPolicyImportId {
    /// Parses a `project_id:trust_policy_id` identifier.
    ///
    /// # Errors
    ///
    /// Returns `DepotError::MalformedImportId` unless the split yields
    /// exactly two non-empty parts.
    pub fn parse(raw: &str) -> Result<Self> {
        let parts: Vec<&str> = raw.split(':').collect();
        match parts.as_slice() {
            [project_id, trust_policy_id]
                if !project_id.is_empty() && !trust_policy_id.is_empty() =>
            {
                Ok(Self {
                    project_id: (*project_id).to_string(),
                    trust_policy_id: (*trust_policy_id).to_string(),
                })
            }
            _ => Err(DepotError::malformed_import_id(raw)),
        }
    }
}

impl std::fmt::Display for TrustPolicyImportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.project_id, self.trust_policy_id)
    }
}
