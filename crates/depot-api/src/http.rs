//! Reqwest-backed gateway implementation.
//!
//! One remote request per call, bearer token on every request, no retries.
//! Failures are wrapped once with the attempted operation name and surfaced
//! as `DepotError::RemoteCall`; a 404 on the fetch path becomes `Ok(None)`
//! so read paths can distinguish a missing resource from a failed call.

use async_trait::async_trait;
use depot_core::{DepotError, Result};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::GatewayConfig;
use crate::gateway::ProjectGateway;
use crate::wire::{
    AddTrustPolicyRequest, CreateProjectRequest, ListTrustPoliciesResponse, ProjectResponse,
    RemoteProject, RemoteTrustPolicy, TrustPolicyResponse, UpdateProjectRequest,
};

/// HTTP gateway over the remote project service.
pub struct HttpProjectGateway {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpProjectGateway {
    /// Builds a gateway from configuration.
    ///
    /// # Errors
    ///
    /// Returns `DepotError::Configuration` when no token can be resolved or
    /// the base URL is invalid, before any resource operation is attempted.
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let token = config.resolve_token()?;
        let base_url = config.validated_base_url()?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|err| {
                DepotError::configuration(format!("failed to build HTTP client: {err}"))
            })?;
        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    fn projects_url(&self) -> String {
        format!("{}/v1/projects", self.base_url)
    }

    fn project_url(&self, project_id: &str) -> String {
        format!("{}/v1/projects/{project_id}", self.base_url)
    }

    fn trust_policies_url(&self, project_id: &str) -> String {
        format!("{}/v1/projects/{project_id}/trust-policies", self.base_url)
    }

    fn trust_policy_url(&self, project_id: &str, trust_policy_id: &str) -> String {
        format!(
            "{}/v1/projects/{project_id}/trust-policies/{trust_policy_id}",
            self.base_url
        )
    }

    fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        self.http.request(method, url).bearer_auth(&self.token)
    }
}

async fn send(
    operation: &'static str,
    request: reqwest::RequestBuilder,
) -> Result<reqwest::Response> {
    request
        .send()
        .await
        .map_err(|err| DepotError::remote_call(operation, err.to_string()))
}

async fn handle_response<T: DeserializeOwned>(
    operation: &'static str,
    response: reqwest::Response,
) -> Result<T> {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if !status.is_success() {
        return Err(DepotError::remote_call(
            operation,
            format!("HTTP {status}: {body}"),
        ));
    }
    serde_json::from_str(&body).map_err(|err| {
        DepotError::remote_call(operation, format!("failed to parse response: {err}"))
    })
}

async fn handle_ack(operation: &'static str, response: reqwest::Response) -> Result<()> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(DepotError::remote_call(
            operation,
            format!("HTTP {status}: {body}"),
        ));
    }
    Ok(())
}

#[async_trait]
impl ProjectGateway for HttpProjectGateway {
    async fn create_project(&self, request: &CreateProjectRequest) -> Result<RemoteProject> {
        let response = send(
            "create_project",
            self.request(Method::POST, &self.projects_url()).json(request),
        )
        .await?;
        let envelope: ProjectResponse = handle_response("create_project", response).await?;
        debug!(project_id = %envelope.project.project_id, "created a project");
        Ok(envelope.project)
    }

    async fn get_project(&self, project_id: &str) -> Result<Option<RemoteProject>> {
        let response = send(
            "get_project",
            self.request(Method::GET, &self.project_url(project_id)),
        )
        .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let envelope: ProjectResponse = handle_response("get_project", response).await?;
        Ok(Some(envelope.project))
    }

    async fn update_project(
        &self,
        project_id: &str,
        request: &UpdateProjectRequest,
    ) -> Result<RemoteProject> {
        let response = send(
            "update_project",
            self.request(Method::PATCH, &self.project_url(project_id))
                .json(request),
        )
        .await?;
        let envelope: ProjectResponse = handle_response("update_project", response).await?;
        debug!(project_id = %envelope.project.project_id, "updated a project");
        Ok(envelope.project)
    }

    async fn delete_project(&self, project_id: &str) -> Result<()> {
        let response = send(
            "delete_project",
            self.request(Method::DELETE, &self.project_url(project_id)),
        )
        .await?;
        handle_ack("delete_project", response).await?;
        debug!(project_id, "deleted a project");
        Ok(())
    }

    async fn add_trust_policy(
        &self,
        request: &AddTrustPolicyRequest,
    ) -> Result<RemoteTrustPolicy> {
        let response = send(
            "add_trust_policy",
            self.request(Method::POST, &self.trust_policies_url(&request.project_id))
                .json(request),
        )
        .await?;
        let envelope: TrustPolicyResponse = handle_response("add_trust_policy", response).await?;
        debug!(
            trust_policy_id = %envelope.trust_policy.trust_policy_id,
            "created a trust policy"
        );
        Ok(envelope.trust_policy)
    }

    async fn list_trust_policies(&self, project_id: &str) -> Result<Vec<RemoteTrustPolicy>> {
        let response = send(
            "list_trust_policies",
            self.request(Method::GET, &self.trust_policies_url(project_id)),
        )
        .await?;
        let envelope: ListTrustPoliciesResponse =
            handle_response("list_trust_policies", response).await?;
        Ok(envelope.trust_policies)
    }

    async fn remove_trust_policy(&self, project_id: &str, trust_policy_id: &str) -> Result<()> {
        let response = send(
            "remove_trust_policy",
            self.request(
                Method::DELETE,
                &self.trust_policy_url(project_id, trust_policy_id),
            ),
        )
        .await?;
        handle_ack("remove_trust_policy", response).await?;
        debug!(project_id, trust_policy_id, "deleted a trust policy");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{RemoteCachePolicy, RemoteGithubProvider};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway_for(server: &MockServer) -> HttpProjectGateway {
        let config = GatewayConfig::new()
            .with_token("test-token")
            .with_base_url(server.uri());
        HttpProjectGateway::new(&config).unwrap()
    }

    fn project_body() -> serde_json::Value {
        json!({
            "project": {
                "project_id": "proj-1",
                "organization_id": "org-1",
                "name": "todo-app",
                "region_id": "eu-central-1",
                "cache_policy": {"size_bytes": 53_687_091_200_i64, "expiry_days": 14}
            }
        })
    }

    #[tokio::test]
    async fn test_create_project_sends_bearer_token_and_body() {
        let server = MockServer::start().await;
        let request = CreateProjectRequest {
            name: "todo-app".to_string(),
            region_id: "eu-central-1".to_string(),
            organization_id: None,
            cache_policy: Some(RemoteCachePolicy {
                size_bytes: 53_687_091_200,
                expiry_days: 14,
            }),
        };

        Mock::given(method("POST"))
            .and(path("/v1/projects"))
            .and(header("authorization", "Bearer test-token"))
            .and(body_json(json!({
                "name": "todo-app",
                "region_id": "eu-central-1",
                "cache_policy": {"size_bytes": 53_687_091_200_i64, "expiry_days": 14}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(project_body()))
            .expect(1)
            .mount(&server)
            .await;

        let project = gateway_for(&server).create_project(&request).await.unwrap();
        assert_eq!(project.project_id, "proj-1");
        assert_eq!(project.organization_id, "org-1");
    }

    #[tokio::test]
    async fn test_get_project_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/projects/proj-1"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(project_body()))
            .mount(&server)
            .await;

        let project = gateway_for(&server).get_project("proj-1").await.unwrap();
        assert_eq!(project.unwrap().name, "todo-app");
    }

    #[tokio::test]
    async fn test_get_project_not_found_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/projects/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let project = gateway_for(&server).get_project("gone").await.unwrap();
        assert!(project.is_none());
    }

    #[tokio::test]
    async fn test_remote_failure_is_wrapped_with_operation_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/projects/proj-1"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = gateway_for(&server).get_project("proj-1").await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("get_project"), "{message}");
        assert!(message.contains("500"), "{message}");
        assert!(message.contains("boom"), "{message}");
    }

    #[tokio::test]
    async fn test_update_project_sends_partial_body() {
        let server = MockServer::start().await;
        let request = UpdateProjectRequest {
            name: Some("nue-todo-app".to_string()),
            ..Default::default()
        };

        Mock::given(method("PATCH"))
            .and(path("/v1/projects/proj-1"))
            .and(body_json(json!({"name": "nue-todo-app"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(project_body()))
            .expect(1)
            .mount(&server)
            .await;

        gateway_for(&server)
            .update_project("proj-1", &request)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_project_no_diff_sends_empty_object() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/v1/projects/proj-1"))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_json(project_body()))
            .expect(1)
            .mount(&server)
            .await;

        gateway_for(&server)
            .update_project("proj-1", &UpdateProjectRequest::default())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_project() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/projects/proj-1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        gateway_for(&server).delete_project("proj-1").await.unwrap();
    }

    #[tokio::test]
    async fn test_trust_policy_calls() {
        let server = MockServer::start().await;
        let request = AddTrustPolicyRequest {
            project_id: "proj-1".to_string(),
            github: Some(RemoteGithubProvider {
                repository_owner: "o".to_string(),
                repository: "r".to_string(),
            }),
            ..Default::default()
        };

        Mock::given(method("POST"))
            .and(path("/v1/projects/proj-1/trust-policies"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "trust_policy": {
                    "trust_policy_id": "tp-1",
                    "github": {"repository_owner": "o", "repository": "r"}
                }
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/projects/proj-1/trust-policies"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "trust_policies": [{
                    "trust_policy_id": "tp-1",
                    "github": {"repository_owner": "o", "repository": "r"}
                }]
            })))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/v1/projects/proj-1/trust-policies/tp-1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        let policy = gateway.add_trust_policy(&request).await.unwrap();
        assert_eq!(policy.trust_policy_id, "tp-1");

        let listed = gateway.list_trust_policies("proj-1").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].github.is_some());

        gateway.remove_trust_policy("proj-1", "tp-1").await.unwrap();
    }
}
