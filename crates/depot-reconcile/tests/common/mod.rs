//! In-memory stub gateway for engine tests.
//!
//! Behaves like the remote service from the engines' point of view:
//! server-assigned ids, echoed attributes, partial updates applied onto the
//! stored representation. Update request bodies are captured so tests can
//! assert on diff minimality.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use depot_api::ProjectGateway;
use depot_api::wire::{
    AddTrustPolicyRequest, CreateProjectRequest, RemoteCachePolicy, RemoteProject,
    RemoteTrustPolicy, UpdateProjectRequest,
};
use depot_core::{DepotError, Result};

const DEFAULT_REMOTE_CACHE: RemoteCachePolicy = RemoteCachePolicy {
    size_bytes: 50 * 1024 * 1024 * 1024,
    expiry_days: 14,
};

#[derive(Default)]
pub struct StubProjectGateway {
    projects: Mutex<HashMap<String, RemoteProject>>,
    policies: Mutex<HashMap<String, Vec<RemoteTrustPolicy>>>,
    counter: AtomicU64,
    /// Captured partial-update bodies, in call order.
    pub update_requests: Mutex<Vec<UpdateProjectRequest>>,
}

impl StubProjectGateway {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self, prefix: &str) -> String {
        format!("{prefix}-{}", self.counter.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn captured_update_requests(&self) -> Vec<UpdateProjectRequest> {
        self.update_requests.lock().unwrap().clone()
    }

    pub fn stored_policy_count(&self, project_id: &str) -> usize {
        self.policies
            .lock()
            .unwrap()
            .get(project_id)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl ProjectGateway for StubProjectGateway {
    async fn create_project(&self, request: &CreateProjectRequest) -> Result<RemoteProject> {
        let project = RemoteProject {
            project_id: self.next_id("proj"),
            organization_id: request
                .organization_id
                .clone()
                .unwrap_or_else(|| "org-assigned".to_string()),
            name: request.name.clone(),
            region_id: request.region_id.clone(),
            cache_policy: request.cache_policy.unwrap_or(DEFAULT_REMOTE_CACHE),
        };
        self.projects
            .lock()
            .unwrap()
            .insert(project.project_id.clone(), project.clone());
        Ok(project)
    }

    async fn get_project(&self, project_id: &str) -> Result<Option<RemoteProject>> {
        Ok(self.projects.lock().unwrap().get(project_id).cloned())
    }

    async fn update_project(
        &self,
        project_id: &str,
        request: &UpdateProjectRequest,
    ) -> Result<RemoteProject> {
        self.update_requests.lock().unwrap().push(request.clone());
        let mut projects = self.projects.lock().unwrap();
        let project = projects.get_mut(project_id).ok_or_else(|| {
            DepotError::remote_call("update_project", format!("HTTP 404: no project {project_id}"))
        })?;
        if let Some(name) = &request.name {
            project.name = name.clone();
        }
        if let Some(region_id) = &request.region_id {
            project.region_id = region_id.clone();
        }
        if let Some(cache_policy) = request.cache_policy {
            project.cache_policy = cache_policy;
        }
        Ok(project.clone())
    }

    async fn delete_project(&self, project_id: &str) -> Result<()> {
        self.projects
            .lock()
            .unwrap()
            .remove(project_id)
            .map(|_| ())
            .ok_or_else(|| {
                DepotError::remote_call(
                    "delete_project",
                    format!("HTTP 404: no project {project_id}"),
                )
            })
    }

    async fn add_trust_policy(
        &self,
        request: &AddTrustPolicyRequest,
    ) -> Result<RemoteTrustPolicy> {
        let policy = RemoteTrustPolicy {
            trust_policy_id: self.next_id("tp"),
            github: request.github.clone(),
            buildkite: request.buildkite.clone(),
            circleci: request.circleci.clone(),
        };
        self.policies
            .lock()
            .unwrap()
            .entry(request.project_id.clone())
            .or_default()
            .push(policy.clone());
        Ok(policy)
    }

    async fn list_trust_policies(&self, project_id: &str) -> Result<Vec<RemoteTrustPolicy>> {
        Ok(self
            .policies
            .lock()
            .unwrap()
            .get(project_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn remove_trust_policy(&self, project_id: &str, trust_policy_id: &str) -> Result<()> {
        let mut policies = self.policies.lock().unwrap();
        let listing = policies.get_mut(project_id).ok_or_else(|| {
            DepotError::remote_call(
                "remove_trust_policy",
                format!("HTTP 404: no project {project_id}"),
            )
        })?;
        let before = listing.len();
        listing.retain(|policy| policy.trust_policy_id != trust_policy_id);
        if listing.len() == before {
            return Err(DepotError::remote_call(
                "remove_trust_policy",
                format!("HTTP 404: no trust policy {trust_policy_id}"),
            ));
        }
        Ok(())
    }
}
