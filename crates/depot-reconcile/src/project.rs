//! Reconciliation engine for the project resource.
//!
//! Four atomic entry points (create, read, update, delete) plus import.
//! Update computes the field-by-field diff against the prior state snapshot
//! supplied by the caller: when a force-replace attribute differs the
//! engine only *reports* the replacement condition: orchestrating the
//! destroy/recreate cycle belongs to the host, not this core.

use depot_core::{
    DepotError, ProjectConfig, ProjectState, ResourceKind, Result, forces_replacement,
    project_attributes,
};
use depot_api::DynProjectGateway;
use tracing::{debug, info};

use crate::import::ProjectImportId;
use crate::mapper;

/// Result of an update plan against prior state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The update was applied in place; the contained state is normalized
    /// from the server response.
    Applied(ProjectState),
    /// One or more force-replace attributes differ. Nothing was sent to the
    /// remote service; the named fields can only converge by recreating the
    /// resource.
    ReplacementRequired { fields: Vec<&'static str> },
}

impl UpdateOutcome {
    /// The applied state, when the update went through in place.
    pub fn applied(&self) -> Option<&ProjectState> {
        match self {
            Self::Applied(state) => Some(state),
            Self::ReplacementRequired { .. } => None,
        }
    }

    pub fn requires_replacement(&self) -> bool {
        matches!(self, Self::ReplacementRequired { .. })
    }
}

/// Reconciles declared project configurations against the remote service.
#[derive(Clone)]
pub struct ProjectReconciler {
    gateway: DynProjectGateway,
}

impl ProjectReconciler {
    pub fn new(gateway: DynProjectGateway) -> Self {
        Self { gateway }
    }

    /// Creates the project and returns its full normalized state, including
    /// the server-assigned id and adopted organization.
    pub async fn create(&self, desired: &ProjectConfig) -> Result<ProjectState> {
        let request = mapper::project_create_request(desired)?;
        let remote = self.gateway.create_project(&request).await?;
        let state = mapper::project_state_from_remote(remote)?;
        info!(project_id = %state.id, region = %state.region, "created project");
        Ok(state)
    }

    /// Fetches and normalizes the project, or `NotFound` when it no longer
    /// exists remotely.
    pub async fn read(&self, project_id: &str) -> Result<ProjectState> {
        match self.gateway.get_project(project_id).await? {
            Some(remote) => mapper::project_state_from_remote(remote),
            None => Err(DepotError::not_found(ResourceKind::Project, project_id)),
        }
    }

    /// Diffs `desired` against the caller-supplied `prior` snapshot and
    /// either applies a partial in-place update or reports that replacement
    /// is required.
    ///
    /// The diff is computed against `prior` as given, not a fresh read;
    /// callers supply the result of the immediately preceding read. When no
    /// field differs an empty update is still sent and the response
    /// re-normalized, so the returned state always reflects the server.
    pub async fn update(
        &self,
        desired: &ProjectConfig,
        prior: &ProjectState,
    ) -> Result<UpdateOutcome> {
        desired.validate()?;
        let fields = replacement_fields(desired, prior);
        if !fields.is_empty() {
            debug!(project_id = %prior.id, ?fields, "update requires replacement");
            return Ok(UpdateOutcome::ReplacementRequired { fields });
        }
        let request = mapper::project_update_request(desired, prior)?;
        let remote = self.gateway.update_project(&prior.id, &request).await?;
        let state = mapper::project_state_from_remote(remote)?;
        info!(project_id = %state.id, "updated project");
        Ok(UpdateOutcome::Applied(state))
    }

    /// Deletes the project. Success is silent.
    pub async fn delete(&self, project_id: &str) -> Result<()> {
        self.gateway.delete_project(project_id).await?;
        info!(project_id, "deleted project");
        Ok(())
    }

    /// Imports a project by its bare id: the identifier seeds a normal
    /// read.
    pub async fn import(&self, import_id: &str) -> Result<ProjectState> {
        let id = ProjectImportId::parse(import_id)?;
        self.read(id.as_str()).await
    }
}

/// Force-replace attributes whose desired value differs from prior state.
///
/// An unset desired `organization_id` is not a change: the attribute is
/// computed, so the previously adopted value stands.
fn replacement_fields(desired: &ProjectConfig, prior: &ProjectState) -> Vec<&'static str> {
    let attributes = project_attributes();
    let mut fields = Vec::new();
    if desired.region != prior.region && forces_replacement(attributes, "region") {
        fields.push("region");
    }
    if let Some(organization_id) = &desired.organization_id {
        if organization_id != &prior.organization_id
            && forces_replacement(attributes, "organization_id")
        {
            fields.push("organization_id");
        }
    }
    fields
}
