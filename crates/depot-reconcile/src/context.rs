//! Typed reconciler context.
//!
//! The context owns the shared gateway handle and hands out per-resource
//! reconcilers. Components receive their dependencies explicitly at
//! construction; there is no provider-supplied opaque value to cast at
//! runtime.

use std::sync::Arc;

use depot_api::{DynProjectGateway, GatewayConfig, HttpProjectGateway};
use depot_core::Result;

use crate::project::ProjectReconciler;
use crate::trust_policy::TrustPolicyReconciler;

/// Shared context for all reconcilers talking to one remote service.
#[derive(Clone)]
pub struct ReconcilerContext {
    gateway: DynProjectGateway,
}

impl ReconcilerContext {
    /// Wraps an existing gateway. Tests use this with a stub.
    pub fn new(gateway: DynProjectGateway) -> Self {
        Self { gateway }
    }

    /// Builds the HTTP gateway from configuration and wraps it.
    ///
    /// # Errors
    ///
    /// Returns `DepotError::Configuration` when no token can be resolved or
    /// the base URL is invalid, before any resource operation is
    /// attempted.
    pub fn connect(config: &GatewayConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(HttpProjectGateway::new(config)?)))
    }

    /// The shared gateway handle.
    pub fn gateway(&self) -> DynProjectGateway {
        Arc::clone(&self.gateway)
    }

    /// A reconciler for project resources.
    pub fn projects(&self) -> ProjectReconciler {
        ProjectReconciler::new(self.gateway())
    }

    /// A reconciler for trust-policy sub-resources.
    pub fn trust_policies(&self) -> TrustPolicyReconciler {
        TrustPolicyReconciler::new(self.gateway())
    }
}
