//! The remote gateway capability consumed by the reconciliation engines.

use std::sync::Arc;

use async_trait::async_trait;
use depot_core::Result;

use crate::wire::{
    AddTrustPolicyRequest, CreateProjectRequest, RemoteProject, RemoteTrustPolicy,
    UpdateProjectRequest,
};

/// Capability interface over the remote project service.
///
/// Every call maps to a single remote request; there is no retry, caching or
/// coordination in an implementation's contract. Implementations must be
/// thread-safe (`Send + Sync`), but callers invoking overlapping operations
/// on the same resource id receive no ordering guarantee beyond what the
/// remote service itself provides.
///
/// # Example
///
/// ```ignore
/// use depot_api::{DynProjectGateway, ProjectGateway};
/// use depot_core::{DepotError, ResourceKind};
///
/// async fn require_project(
///     gateway: &dyn ProjectGateway,
///     id: &str,
/// ) -> depot_core::Result<depot_api::RemoteProject> {
///     gateway
///         .get_project(id)
///         .await?
///         .ok_or_else(|| DepotError::not_found(ResourceKind::Project, id))
/// }
/// ```
#[async_trait]
pub trait ProjectGateway: Send + Sync {
    /// Creates a project.
    ///
    /// # Errors
    ///
    /// Returns `DepotError::RemoteCall` on any remote failure; the request
    /// is not retried.
    async fn create_project(&self, request: &CreateProjectRequest) -> Result<RemoteProject>;

    /// Fetches a project by id.
    ///
    /// Returns `None` if the project does not exist remotely.
    ///
    /// # Errors
    ///
    /// Returns an error only for call failures, not for a missing project.
    async fn get_project(&self, project_id: &str) -> Result<Option<RemoteProject>>;

    /// Applies a partial update to a project and returns the resulting
    /// remote representation.
    ///
    /// An empty request body is valid and treated as a no-op by the remote
    /// side.
    ///
    /// # Errors
    ///
    /// Returns `DepotError::RemoteCall` on any remote failure, including a
    /// project that has been deleted out-of-band.
    async fn update_project(
        &self,
        project_id: &str,
        request: &UpdateProjectRequest,
    ) -> Result<RemoteProject>;

    /// Deletes a project. Success is silent.
    ///
    /// # Errors
    ///
    /// Returns `DepotError::RemoteCall` on any remote failure.
    async fn delete_project(&self, project_id: &str) -> Result<()>;

    /// Attaches a trust policy to a project.
    ///
    /// # Errors
    ///
    /// Returns `DepotError::RemoteCall` on any remote failure.
    async fn add_trust_policy(
        &self,
        request: &AddTrustPolicyRequest,
    ) -> Result<RemoteTrustPolicy>;

    /// Lists the trust policies attached to a project.
    ///
    /// Trust policies have no flat fetch-by-id; readers scan this listing.
    ///
    /// # Errors
    ///
    /// Returns `DepotError::RemoteCall` on any remote failure.
    async fn list_trust_policies(&self, project_id: &str) -> Result<Vec<RemoteTrustPolicy>>;

    /// Detaches a trust policy from a project. Success is silent.
    ///
    /// # Errors
    ///
    /// Returns `DepotError::RemoteCall` on any remote failure.
    async fn remove_trust_policy(&self, project_id: &str, trust_policy_id: &str) -> Result<()>;
}

/// Type alias for a shared gateway trait object.
pub type DynProjectGateway = Arc<dyn ProjectGateway>;
