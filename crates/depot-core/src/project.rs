use serde::{Deserialize, Serialize};

use crate::error::{DepotError, Result};

/// Cache size assigned to a project when the caller does not override it.
pub const DEFAULT_CACHE_SIZE_GB: i64 = 50;

/// Cache entry lifetime assigned to a project when the caller does not
/// override it.
pub const DEFAULT_CACHE_EXPIRY_DAYS: i64 = 14;

/// Normalized build-cache policy of a project.
///
/// Values are kept in caller units (GB and days); the remote service stores
/// bytes and days. Both members are 64-bit locally; the mapper guards the
/// narrowing into the remote 32-bit day field and the GB→byte multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachePolicy {
    #[serde(rename = "size")]
    pub size_gb: i64,
    #[serde(rename = "expiry")]
    pub expiry_days: i64,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            size_gb: DEFAULT_CACHE_SIZE_GB,
            expiry_days: DEFAULT_CACHE_EXPIRY_DAYS,
        }
    }
}

impl CachePolicy {
    pub fn new(size_gb: i64, expiry_days: i64) -> Self {
        Self {
            size_gb,
            expiry_days,
        }
    }
}

/// Desired configuration of a project, as declared by the caller.
///
/// `organization_id` and `cache_policy` may be left unset: the server
/// assigns an organization, and the default cache policy is injected by the
/// state mapper before the create request is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    pub region: String,
    #[serde(rename = "organizationId", skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(rename = "cache", skip_serializing_if = "Option::is_none")]
    pub cache_policy: Option<CachePolicy>,
}

impl ProjectConfig {
    pub fn new(name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            organization_id: None,
            cache_policy: None,
        }
    }

    pub fn with_organization_id(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }

    pub fn with_cache_policy(mut self, cache_policy: CachePolicy) -> Self {
        self.cache_policy = Some(cache_policy);
        self
    }

    /// Validates the declarative attribute constraints.
    ///
    /// `name` must be 1–64 UTF-8 code points, `region` at least one.
    /// Violations surface before any remote call is attempted.
    pub fn validate(&self) -> Result<()> {
        let name_len = self.name.chars().count();
        if name_len == 0 || name_len > 64 {
            return Err(DepotError::configuration(format!(
                "project name must be between 1 and 64 characters, got {name_len}"
            )));
        }
        if self.region.is_empty() {
            return Err(DepotError::configuration(
                "project region must not be empty",
            ));
        }
        Ok(())
    }
}

/// Observed state of a project, normalized from the remote representation.
///
/// `id` is server-assigned and uniquely identifies the project for its
/// lifetime; `region` and `organization_id` are fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectState {
    pub id: String,
    #[serde(rename = "organizationId")]
    pub organization_id: String,
    pub name: String,
    pub region: String,
    #[serde(rename = "cache")]
    pub cache_policy: CachePolicy,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cache_policy_default() {
        let policy = CachePolicy::default();
        assert_eq!(policy.size_gb, 50);
        assert_eq!(policy.expiry_days, 14);
    }

    #[test]
    fn test_cache_policy_serialization() {
        let policy = CachePolicy::new(25, 30);
        let value = serde_json::to_value(policy).unwrap();
        assert_eq!(value, json!({"size": 25, "expiry": 30}));
    }

    #[test]
    fn test_project_config_builders() {
        let config = ProjectConfig::new("todo-app", "eu-central-1")
            .with_organization_id("org-1")
            .with_cache_policy(CachePolicy::new(100, 7));

        assert_eq!(config.name, "todo-app");
        assert_eq!(config.region, "eu-central-1");
        assert_eq!(config.organization_id.as_deref(), Some("org-1"));
        assert_eq!(config.cache_policy, Some(CachePolicy::new(100, 7)));
    }

    #[test]
    fn test_project_config_validate_ok() {
        assert!(ProjectConfig::new("todo-app", "eu-central-1").validate().is_ok());
        assert!(ProjectConfig::new("x", "r").validate().is_ok());
        assert!(ProjectConfig::new("a".repeat(64), "r").validate().is_ok());
    }

    #[test]
    fn test_project_config_validate_name_bounds() {
        let err = ProjectConfig::new("", "eu-central-1").validate().unwrap_err();
        assert!(err.is_configuration());

        let err = ProjectConfig::new("a".repeat(65), "eu-central-1")
            .validate()
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_project_config_validate_counts_code_points() {
        // 64 multi-byte code points are within bounds even though the byte
        // length exceeds 64.
        let name: String = "ü".repeat(64);
        assert!(name.len() > 64);
        assert!(ProjectConfig::new(name, "eu-central-1").validate().is_ok());

        let name: String = "ü".repeat(65);
        assert!(ProjectConfig::new(name, "eu-central-1").validate().is_err());
    }

    #[test]
    fn test_project_config_validate_region() {
        let err = ProjectConfig::new("todo-app", "").validate().unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("region"));
    }

    #[test]
    fn test_project_config_serialization_omits_unset() {
        let config = ProjectConfig::new("todo-app", "eu-central-1");
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value, json!({"name": "todo-app", "region": "eu-central-1"}));
    }

    #[test]
    fn test_project_state_serialization_layout() {
        let state = ProjectState {
            id: "proj-1".to_string(),
            organization_id: "org-1".to_string(),
            name: "todo-app".to_string(),
            region: "eu-central-1".to_string(),
            cache_policy: CachePolicy::default(),
        };
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "proj-1",
                "organizationId": "org-1",
                "name": "todo-app",
                "region": "eu-central-1",
                "cache": {"size": 50, "expiry": 14}
            })
        );
    }

    #[test]
    fn test_project_state_roundtrip() {
        let state = ProjectState {
            id: "proj-2".to_string(),
            organization_id: "org-9".to_string(),
            name: "api".to_string(),
            region: "us-east-1".to_string(),
            cache_policy: CachePolicy::new(25, 30),
        };
        let value = serde_json::to_value(&state).unwrap();
        let back: ProjectState = serde_json::from_value(value).unwrap();
        assert_eq!(state, back);
    }
}
