use serde::{Deserialize, Serialize};

use crate::error::{DepotError, Result};

/// GitHub Actions integration settings for a trust policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubProvider {
    pub owner: String,
    pub repository: String,
}

/// Buildkite integration settings for a trust policy.
///
/// `organization` is the Buildkite organization slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildkiteProvider {
    pub organization: String,
    pub pipeline: String,
}

/// CircleCI integration settings for a trust policy.
///
/// `organization` and `project` are CircleCI UUIDs, not slugs; the field
/// name is shared with [`BuildkiteProvider`] but the value space is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircleCiProvider {
    pub organization: String,
    pub project: String,
}

/// The CI provider a trust policy grants access to.
///
/// Exactly one provider is bound at creation and stays fixed for the
/// policy's lifetime. Modeling this as a sum type makes "exactly one set" a
/// construction-time invariant; only the caller-facing configuration keeps
/// the three optional slots of the declarative layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustProvider {
    Github(GithubProvider),
    Buildkite(BuildkiteProvider),
    Circleci(CircleCiProvider),
}

impl TrustProvider {
    /// Name of the provider slot this variant occupies in the declarative
    /// layout.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Github(_) => "github",
            Self::Buildkite(_) => "buildkite",
            Self::Circleci(_) => "circleci",
        }
    }
}

/// Desired configuration of a trust policy, as declared by the caller.
///
/// At most one of the provider slots may be set; the provider resolver
/// rejects zero or multiple before any remote call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustPolicyConfig {
    #[serde(rename = "projectId")]
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<GithubProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buildkite: Option<BuildkiteProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circleci: Option<CircleCiProvider>,
}

impl TrustPolicyConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Self::default()
        }
    }

    pub fn with_github(mut self, provider: GithubProvider) -> Self {
        self.github = Some(provider);
        self
    }

    pub fn with_buildkite(mut self, provider: BuildkiteProvider) -> Self {
        self.buildkite = Some(provider);
        self
    }

    pub fn with_circleci(mut self, provider: CircleCiProvider) -> Self {
        self.circleci = Some(provider);
        self
    }

    /// Validates field-level constraints: a non-empty parent project id and
    /// non-empty fields in whichever provider slots are present.
    ///
    /// Slot exclusivity is the provider resolver's concern, not this one's.
    pub fn validate(&self) -> Result<()> {
        if self.project_id.is_empty() {
            return Err(DepotError::configuration(
                "trust policy project_id must not be empty",
            ));
        }
        if let Some(github) = &self.github {
            if github.owner.is_empty() || github.repository.is_empty() {
                return Err(DepotError::configuration(
                    "github provider owner and repository must not be empty",
                ));
            }
        }
        if let Some(buildkite) = &self.buildkite {
            if buildkite.organization.is_empty() || buildkite.pipeline.is_empty() {
                return Err(DepotError::configuration(
                    "buildkite provider organization and pipeline must not be empty",
                ));
            }
        }
        if let Some(circleci) = &self.circleci {
            if circleci.organization.is_empty() || circleci.project.is_empty() {
                return Err(DepotError::configuration(
                    "circleci provider organization and project must not be empty",
                ));
            }
        }
        Ok(())
    }
}

/// Observed state of a trust policy, normalized from the remote
/// representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustPolicyState {
    pub id: String,
    #[serde(rename = "projectId")]
    pub project_id: String,
    #[serde(flatten)]
    pub provider: TrustProvider,
}
