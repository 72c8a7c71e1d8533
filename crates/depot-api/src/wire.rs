//! Remote wire representation of projects and trust policies.
//!
//! Field names follow the remote service's JSON: snake_case, provider
//! payloads spelled out per provider (`repository_owner`, `organization_slug`,
//! `organization_uuid`, …), cache sizes in bytes and expiry in 32-bit days.
//! Responses arrive wrapped in a single-key envelope (`{"project": …}`).
//!
//! Unset optional request fields are omitted entirely so the remote side
//! leaves the corresponding attributes unchanged.

use serde::{Deserialize, Serialize};

/// Remote cache policy: size in bytes, expiry in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteCachePolicy {
    pub size_bytes: i64,
    pub expiry_days: i32,
}

/// Remote representation of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteProject {
    pub project_id: String,
    pub organization_id: String,
    pub name: String,
    pub region_id: String,
    pub cache_policy: RemoteCachePolicy,
}

/// Create request. The state mapper always populates `cache_policy` (the
/// static defaults are injected when the caller declared none);
/// `organization_id` stays unset when the server should assign one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub region_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_policy: Option<RemoteCachePolicy>,
}

/// Partial update request: only fields that differ from prior state are
/// populated. An all-`None` body is still a valid request that the remote
/// side treats as a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_policy: Option<RemoteCachePolicy>,
}

impl UpdateProjectRequest {
    /// Whether no field is populated (the diff found nothing to change).
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.region_id.is_none() && self.cache_policy.is_none()
    }
}

/// Remote GitHub provider payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteGithubProvider {
    pub repository_owner: String,
    pub repository: String,
}

/// Remote Buildkite provider payload. Slug-valued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteBuildkiteProvider {
    pub organization_slug: String,
    pub pipeline_slug: String,
}

/// Remote CircleCI provider payload. UUID-valued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteCircleCiProvider {
    pub organization_uuid: String,
    pub project_uuid: String,
}

/// Remote representation of a trust policy. The remote contract guarantees
/// exactly one provider member is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteTrustPolicy {
    pub trust_policy_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<RemoteGithubProvider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buildkite: Option<RemoteBuildkiteProvider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circleci: Option<RemoteCircleCiProvider>,
}

/// Add request: the parent project and exactly one provider payload,
/// populated by the provider resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddTrustPolicyRequest {
    pub project_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<RemoteGithubProvider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buildkite: Option<RemoteBuildkiteProvider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circleci: Option<RemoteCircleCiProvider>,
}

/// Response envelope for single-project calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub project: RemoteProject,
}

/// Response envelope for single-trust-policy calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustPolicyResponse {
    pub trust_policy: RemoteTrustPolicy,
}

/// Response envelope for the trust-policy listing. The remote side omits
/// the array entirely when the project has no policies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTrustPoliciesResponse {
    #[serde(default)]
    pub trust_policies: Vec<RemoteTrustPolicy>,
}
