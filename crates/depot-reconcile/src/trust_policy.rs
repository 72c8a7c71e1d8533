//! Reconciliation engine for the trust-policy sub-resource.
//!
//! Trust policies are created once and deleted explicitly; the remote
//! contract defines no update operation, and there is no flat fetch-by-id:
//! reads scan the parent project's policy listing.

use depot_core::{
    DepotError, ResourceKind, Result, TrustPolicyConfig, TrustPolicyState, TrustProvider,
};
use depot_api::DynProjectGateway;
use tracing::{debug, info};

use crate::import::TrustPolicyImportId;
use crate::provider::{add_trust_policy_request, resolve_provider, trust_policy_state_from_remote};

/// Result of a trust-policy update plan against prior state.
///
/// There is no in-place variant because the remote contract defines no
/// update call: every attribute is either bound at creation (provider,
/// parent project, both force-replace) or server-assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrustPolicyUpdateOutcome {
    /// Nothing replace-worthy differs; the desired plan is echoed into
    /// state unchanged. Deliberately a documented no-op: drift in fields
    /// bound at creation is reported as replacement, never patched.
    Unchanged(TrustPolicyState),
    /// The parent project or the provider differs; the policy must be
    /// recreated. Nothing was sent to the remote service.
    ReplacementRequired { fields: Vec<&'static str> },
}

/// Reconciles declared trust policies against the remote service.
#[derive(Clone)]
pub struct TrustPolicyReconciler {
    gateway: DynProjectGateway,
}

impl TrustPolicyReconciler {
    pub fn new(gateway: DynProjectGateway) -> Self {
        Self { gateway }
    }

    /// Resolves the provider slots, attaches the policy to its project and
    /// returns the normalized state with the server-assigned id.
    pub async fn create(&self, desired: &TrustPolicyConfig) -> Result<TrustPolicyState> {
        desired.validate()?;
        let provider = resolve_provider(desired)?;
        let request = add_trust_policy_request(&desired.project_id, &provider);
        let remote = self.gateway.add_trust_policy(&request).await?;
        let state = trust_policy_state_from_remote(&desired.project_id, remote)?;
        info!(
            trust_policy_id = %state.id,
            project_id = %state.project_id,
            provider = state.provider.kind(),
            "created trust policy"
        );
        Ok(state)
    }

    /// Reads a trust policy by scanning the parent project's listing for a
    /// matching id.
    pub async fn read(&self, project_id: &str, trust_policy_id: &str) -> Result<TrustPolicyState> {
        let policies = self.gateway.list_trust_policies(project_id).await?;
        let found = policies
            .into_iter()
            .find(|policy| policy.trust_policy_id == trust_policy_id)
            .ok_or_else(|| DepotError::not_found(ResourceKind::TrustPolicy, trust_policy_id))?;
        trust_policy_state_from_remote(project_id, found)
    }

    /// Plans an update against prior state.
    ///
    /// No remote mutation exists for trust policies, so this performs no
    /// gateway call: a difference in the parent project or provider is a
    /// replacement signal, anything else passes the desired plan through
    /// into state.
    pub fn update(
        &self,
        desired: &TrustPolicyConfig,
        prior: &TrustPolicyState,
    ) -> Result<TrustPolicyUpdateOutcome> {
        desired.validate()?;
        let provider = resolve_provider(desired)?;
        let fields = replacement_fields(desired, &provider, prior);
        if !fields.is_empty() {
            debug!(trust_policy_id = %prior.id, ?fields, "update requires replacement");
            return Ok(TrustPolicyUpdateOutcome::ReplacementRequired { fields });
        }
        Ok(TrustPolicyUpdateOutcome::Unchanged(TrustPolicyState {
            id: prior.id.clone(),
            project_id: prior.project_id.clone(),
            provider,
        }))
    }

    /// Detaches the trust policy from its project. Success is silent.
    pub async fn delete(&self, project_id: &str, trust_policy_id: &str) -> Result<()> {
        self.gateway
            .remove_trust_policy(project_id, trust_policy_id)
            .await?;
        info!(project_id, trust_policy_id, "deleted trust policy");
        Ok(())
    }

    /// Imports a trust policy from its composite
    /// `project_id:trust_policy_id` identifier: the decoded parts seed a
    /// normal read.
    pub async fn import(&self, import_id: &str) -> Result<TrustPolicyState> {
        let id = TrustPolicyImportId::parse(import_id)?;
        self.read(&id.project_id, &id.trust_policy_id).await
    }
}

/// Force-replace attributes whose desired value differs from prior state.
fn replacement_fields(
    desired: &TrustPolicyConfig,
    desired_provider: &TrustProvider,
    prior: &TrustPolicyState,
) -> Vec<&'static str> {
    let mut fields = Vec::new();
    if desired.project_id != prior.project_id {
        fields.push("project_id");
    }
    if *desired_provider != prior.provider {
        if desired_provider.kind() == prior.provider.kind() {
            fields.push(desired_provider.kind());
        } else {
            fields.push(prior.provider.kind());
            fields.push(desired_provider.kind());
        }
    }
    fields
}
