//! Polymorphic provider resolution for trust policies.
//!
//! The declarative layout carries three optional provider slots; the remote
//! contract and the local sum type both require exactly one. Resolution
//! collapses the slots into a [`TrustProvider`] before any remote call, and
//! the reverse mapping inspects which wire member the remote side populated.
//!
//! The `organization` fields of Buildkite (a slug) and CircleCI (a UUID)
//! share a name but not a value space; each variant maps onto its own wire
//! members and nothing else.

use depot_api::wire::{
    AddTrustPolicyRequest, RemoteBuildkiteProvider, RemoteCircleCiProvider, RemoteGithubProvider,
    RemoteTrustPolicy,
};
use depot_core::{
    BuildkiteProvider, CircleCiProvider, DepotError, GithubProvider, Result, TrustPolicyConfig,
    TrustPolicyState, TrustProvider,
};

/// Resolves the provider slots of a desired configuration into the single
/// provider variant they declare.
///
/// # Errors
///
/// Returns `DepotError::Configuration` when zero or more than one slot is
/// set, surfaced before any remote call.
pub fn resolve_provider(config: &TrustPolicyConfig) -> Result<TrustProvider> {
    match (&config.github, &config.buildkite, &config.circleci) {
        (Some(github), None, None) => Ok(TrustProvider::Github(github.clone())),
        (None, Some(buildkite), None) => Ok(TrustProvider::Buildkite(buildkite.clone())),
        (None, None, Some(circleci)) => Ok(TrustProvider::Circleci(circleci.clone())),
        (None, None, None) => Err(DepotError::configuration(
            "trust policy must have exactly one provider, got none",
        )),
        (github, buildkite, circleci) => {
            let mut set = Vec::new();
            if github.is_some() {
                set.push("github");
            }
            if buildkite.is_some() {
                set.push("buildkite");
            }
            if circleci.is_some() {
                set.push("circleci");
            }
            Err(DepotError::configuration(format!(
                "trust policy must have exactly one provider, got {}",
                set.join(", ")
            )))
        }
    }
}

/// Builds the add request carrying the provider in its wire shape.
pub fn add_trust_policy_request(
    project_id: &str,
    provider: &TrustProvider,
) -> AddTrustPolicyRequest {
    let mut request = AddTrustPolicyRequest {
        project_id: project_id.to_string(),
        ..Default::default()
    };
    match provider {
        TrustProvider::Github(github) => {
            request.github = Some(RemoteGithubProvider {
                repository_owner: github.owner.clone(),
                repository: github.repository.clone(),
            });
        }
        TrustProvider::Buildkite(buildkite) => {
            request.buildkite = Some(RemoteBuildkiteProvider {
                organization_slug: buildkite.organization.clone(),
                pipeline_slug: buildkite.pipeline.clone(),
            });
        }
        TrustProvider::Circleci(circleci) => {
            request.circleci = Some(RemoteCircleCiProvider {
                organization_uuid: circleci.organization.clone(),
                project_uuid: circleci.project.clone(),
            });
        }
    }
    request
}

/// Reverse-maps a remote trust policy's provider member onto the local sum
/// type.
///
/// # Errors
///
/// Returns `DepotError::InvariantViolation` when the remote response sets
/// zero or multiple provider members; the remote contract guarantees
/// exactly one, so this is never coerced to a default.
pub fn provider_from_remote(remote: &RemoteTrustPolicy) -> Result<TrustProvider> {
    match (&remote.github, &remote.buildkite, &remote.circleci) {
        (Some(github), None, None) => Ok(TrustProvider::Github(GithubProvider {
            owner: github.repository_owner.clone(),
            repository: github.repository.clone(),
        })),
        (None, Some(buildkite), None) => Ok(TrustProvider::Buildkite(BuildkiteProvider {
            organization: buildkite.organization_slug.clone(),
            pipeline: buildkite.pipeline_slug.clone(),
        })),
        (None, None, Some(circleci)) => Ok(TrustProvider::Circleci(CircleCiProvider {
            organization: circleci.organization_uuid.clone(),
            project: circleci.project_uuid.clone(),
        })),
        (None, None, None) => Err(DepotError::invariant(format!(
            "trust policy {} has no provider set in the remote response",
            remote.trust_policy_id
        ))),
        _ => Err(DepotError::invariant(format!(
            "trust policy {} has multiple providers set in the remote response",
            remote.trust_policy_id
        ))),
    }
}

/// Normalizes a remote trust policy into local state under its parent
/// project.
pub fn trust_policy_state_from_remote(
    project_id: &str,
    remote: RemoteTrustPolicy,
) -> Result<TrustPolicyState> {
    let provider = provider_from_remote(&remote)?;
    Ok(TrustPolicyState {
        id: remote.trust_policy_id,
        project_id: project_id.to_string(),
        provider,
    })
}
