//! # depot-core
//!
//! Domain model, attribute model and error taxonomy for the Depot
//! reconciliation core. This crate holds no I/O: the remote wire
//! representation and the gateway live in `depot-api`, the engines in
//! `depot-reconcile`.

pub mod attribute;
pub mod error;
pub mod project;
pub mod trust_policy;

pub use attribute::{
    AttributeSpec, ChangePolicy, Modality, change_policy_of, forces_replacement,
    project_attributes, trust_policy_attributes,
};
pub use error::{DepotError, ErrorCategory, ResourceKind, Result};
pub use project::{
    CachePolicy, DEFAULT_CACHE_EXPIRY_DAYS, DEFAULT_CACHE_SIZE_GB, ProjectConfig, ProjectState,
};
pub use trust_policy::{
    BuildkiteProvider, CircleCiProvider, GithubProvider, TrustPolicyConfig, TrustPolicyState,
    TrustProvider,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::attribute::{AttributeSpec, ChangePolicy, Modality};
    pub use crate::error::{DepotError, ErrorCategory, ResourceKind, Result};
    pub use crate::project::{CachePolicy, ProjectConfig, ProjectState};
    pub use crate::trust_policy::{TrustPolicyConfig, TrustPolicyState, TrustProvider};
}
