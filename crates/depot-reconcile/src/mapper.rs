//! State mapping between the normalized local representation and the remote
//! wire representation.
//!
//! The local model speaks GB and days; the remote side stores bytes and a
//! 32-bit day count. Conversions are guarded in both directions: an
//! out-of-range desired value is a configuration error caught before any
//! remote call, and a remote size that is not a whole number of GB is an
//! invariant violation rather than something to round away. Creating with
//! defaults and reading back must reproduce `{50, 14}` exactly.

use depot_api::wire::{CreateProjectRequest, RemoteCachePolicy, RemoteProject, UpdateProjectRequest};
use depot_core::{CachePolicy, DepotError, ProjectConfig, ProjectState, Result};

/// Bytes per locally-declared cache GB.
pub const BYTES_PER_GB: i64 = 1024 * 1024 * 1024;

/// Converts a local cache policy into the remote byte/day representation.
///
/// # Errors
///
/// Returns `DepotError::Configuration` when the GB value overflows the
/// remote byte field or the expiry exceeds the remote 32-bit day field.
pub fn cache_to_remote(cache: &CachePolicy) -> Result<RemoteCachePolicy> {
    let size_bytes = cache.size_gb.checked_mul(BYTES_PER_GB).ok_or_else(|| {
        DepotError::configuration(format!(
            "cache size of {} GB overflows the remote byte representation",
            cache.size_gb
        ))
    })?;
    let expiry_days = i32::try_from(cache.expiry_days).map_err(|_| {
        DepotError::configuration(format!(
            "cache expiry of {} days exceeds the remote 32-bit day field",
            cache.expiry_days
        ))
    })?;
    Ok(RemoteCachePolicy {
        size_bytes,
        expiry_days,
    })
}

/// Converts a remote cache policy back into local units.
///
/// # Errors
///
/// Returns `DepotError::InvariantViolation` when the remote size is not a
/// whole number of GB; the round trip must be exact, so no rounding.
pub fn cache_from_remote(remote: &RemoteCachePolicy) -> Result<CachePolicy> {
    if remote.size_bytes % BYTES_PER_GB != 0 {
        return Err(DepotError::invariant(format!(
            "remote cache size of {} bytes is not a whole number of GB",
            remote.size_bytes
        )));
    }
    Ok(CachePolicy {
        size_gb: remote.size_bytes / BYTES_PER_GB,
        expiry_days: i64::from(remote.expiry_days),
    })
}

/// Builds the create request for a desired project configuration.
///
/// Validates the declarative constraints and injects the static cache
/// defaults when the caller declared no policy, so the create request
/// always carries one.
pub fn project_create_request(desired: &ProjectConfig) -> Result<CreateProjectRequest> {
    desired.validate()?;
    let cache = desired.cache_policy.unwrap_or_default();
    Ok(CreateProjectRequest {
        name: desired.name.clone(),
        region_id: desired.region.clone(),
        organization_id: desired.organization_id.clone(),
        cache_policy: Some(cache_to_remote(&cache)?),
    })
}

/// The cache policy a desired configuration means: the declared one, or the
/// static defaults when the caller declared none.
pub fn desired_cache_policy(desired: &ProjectConfig) -> CachePolicy {
    desired.cache_policy.unwrap_or_default()
}

/// Builds the partial update request from the field-by-field diff of
/// desired configuration against prior state.
///
/// Only in-place attributes are considered; `region` and `organization_id`
/// force replacement and are the engine's concern. A field is populated iff
/// its desired value differs from the prior one. When nothing differs the
/// returned request is empty, which the remote side treats as a no-op.
///
/// The caller is expected to have validated `desired` already.
pub fn project_update_request(
    desired: &ProjectConfig,
    prior: &ProjectState,
) -> Result<UpdateProjectRequest> {
    let mut request = UpdateProjectRequest::default();
    if desired.name != prior.name {
        request.name = Some(desired.name.clone());
    }
    let cache = desired_cache_policy(desired);
    if cache != prior.cache_policy {
        request.cache_policy = Some(cache_to_remote(&cache)?);
    }
    Ok(request)
}

/// Normalizes a remote project into local state.
pub fn project_state_from_remote(remote: RemoteProject) -> Result<ProjectState> {
    Ok(ProjectState {
        id: remote.project_id,
        organization_id: remote.organization_id,
        name: remote.name,
        region: remote.region_id,
        cache_policy: cache_from_remote(&remote.cache_policy)?,
    })
}
