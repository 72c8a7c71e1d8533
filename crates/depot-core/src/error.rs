use thiserror::Error;

/// Kinds of remote resources managed by the reconciliation core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Project,
    TrustPolicy,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Project => write!(f, "project"),
            Self::TrustPolicy => write!(f, "trust policy"),
        }
    }
}

/// Error types for reconciliation operations.
///
/// The taxonomy is deliberately small: configuration problems are caught
/// before any remote call, remote failures are wrapped once with the
/// attempted operation and never retried, and a missing resource is kept
/// distinct from a failed call so callers can recover from out-of-band
/// deletion.
#[derive(Debug, Error)]
pub enum DepotError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error(
        "Unexpected import identifier: expected format `project_id:trust_policy_id`, got {given:?}"
    )]
    MalformedImportId { given: String },

    #[error("{kind} doesn't exist: {id}")]
    NotFound { kind: ResourceKind, id: String },

    #[error("Remote call `{operation}` failed: {message}")]
    RemoteCall {
        operation: &'static str,
        message: String,
    },

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

impl DepotError {
    /// Create a new Configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a new MalformedImportId error
    pub fn malformed_import_id(given: impl Into<String>) -> Self {
        Self::MalformedImportId {
            given: given.into(),
        }
    }

    /// Create a new NotFound error
    pub fn not_found(kind: ResourceKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Create a new RemoteCall error wrapping a failed gateway operation
    pub fn remote_call(operation: &'static str, message: impl Into<String>) -> Self {
        Self::RemoteCall {
            operation,
            message: message.into(),
        }
    }

    /// Create a new InvariantViolation error
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation(message.into())
    }

    /// Check if this error means the resource no longer exists remotely
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error was caught before any remote call was made
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_) | Self::MalformedImportId { .. }
        )
    }

    /// Get error category for logging/monitoring
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Configuration(_) | Self::MalformedImportId { .. } => {
                ErrorCategory::Configuration
            }
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::RemoteCall { .. } => ErrorCategory::Remote,
            Self::InvariantViolation(_) => ErrorCategory::Invariant,
        }
    }
}

/// Error categories for monitoring and classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    NotFound,
    Remote,
    Invariant,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "configuration"),
            Self::NotFound => write!(f, "not_found"),
            Self::Remote => write!(f, "remote"),
            Self::Invariant => write!(f, "invariant"),
        }
    }
}

/// Convenience result type for reconciliation operations
pub type Result<T> = std::result::Result<T, DepotError>;
