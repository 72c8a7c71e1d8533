//! # depot-api
//!
//! Remote wire representation and gateway for the Depot API.
//!
//! This crate defines the [`ProjectGateway`] capability trait that the
//! reconciliation engines consume, the serde wire types it speaks, and the
//! reqwest-backed [`HttpProjectGateway`] implementation with bearer-token
//! authentication. Engines depend on the trait only; the HTTP
//! implementation is wired in by the caller (or replaced by a stub in
//! tests).

pub mod config;
pub mod gateway;
pub mod http;
pub mod wire;

pub use config::{DEFAULT_BASE_URL, GatewayConfig, TOKEN_ENV_VAR};
pub use gateway::{DynProjectGateway, ProjectGateway};
pub use http::HttpProjectGateway;
pub use wire::{
    AddTrustPolicyRequest, CreateProjectRequest, ListTrustPoliciesResponse, ProjectResponse,
    RemoteBuildkiteProvider, RemoteCachePolicy, RemoteCircleCiProvider, RemoteGithubProvider,
    RemoteProject, RemoteTrustPolicy, TrustPolicyResponse, UpdateProjectRequest,
};
