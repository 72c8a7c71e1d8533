//! Declarative attribute model for the managed resources.
//!
//! Each field of a resource declares its modality (who supplies the value),
//! an optional static default, and what a change to it means for an existing
//! resource: applicable in place, or only by destroying and recreating the
//! resource. The reconciliation engines consult these tables when diffing a
//! desired configuration against prior state. `ForceReplace` attributes
//! only ever select the replacement path and are never written into a
//! partial-update request.

/// Who supplies an attribute's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    /// The caller must supply a value.
    Required,
    /// The caller may supply a value; absent means "leave to the server's
    /// default".
    Optional,
    /// The server derives the value. The caller may still supply one at
    /// creation; if absent, the server-assigned value is adopted into state.
    Computed,
}

/// What a change to an attribute means for an existing resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangePolicy {
    /// The change can be sent as part of a partial update.
    InPlace,
    /// The change cannot be applied in place; the resource must be
    /// recreated.
    ForceReplace,
}

/// Declaration of a single resource attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    pub name: &'static str,
    pub modality: Modality,
    pub change_policy: ChangePolicy,
    /// Static default, carried for documentation and plan rendering. The
    /// typed default values live with the domain types themselves.
    pub default: Option<&'static str>,
}

const PROJECT_ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec {
        name: "id",
        modality: Modality::Computed,
        change_policy: ChangePolicy::InPlace,
        default: None,
    },
    AttributeSpec {
        name: "organization_id",
        modality: Modality::Computed,
        change_policy: ChangePolicy::ForceReplace,
        default: None,
    },
    AttributeSpec {
        name: "name",
        modality: Modality::Required,
        change_policy: ChangePolicy::InPlace,
        default: None,
    },
    AttributeSpec {
        name: "region",
        modality: Modality::Required,
        change_policy: ChangePolicy::ForceReplace,
        default: None,
    },
    AttributeSpec {
        name: "cache_policy.size_gb",
        modality: Modality::Optional,
        change_policy: ChangePolicy::InPlace,
        default: Some("50"),
    },
    AttributeSpec {
        name: "cache_policy.expiry_days",
        modality: Modality::Optional,
        change_policy: ChangePolicy::InPlace,
        default: Some("14"),
    },
];

const TRUST_POLICY_ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec {
        name: "id",
        modality: Modality::Computed,
        change_policy: ChangePolicy::InPlace,
        default: None,
    },
    AttributeSpec {
        name: "project_id",
        modality: Modality::Required,
        change_policy: ChangePolicy::ForceReplace,
        default: None,
    },
    AttributeSpec {
        name: "github",
        modality: Modality::Optional,
        change_policy: ChangePolicy::ForceReplace,
        default: None,
    },
    AttributeSpec {
        name: "buildkite",
        modality: Modality::Optional,
        change_policy: ChangePolicy::ForceReplace,
        default: None,
    },
    AttributeSpec {
        name: "circleci",
        modality: Modality::Optional,
        change_policy: ChangePolicy::ForceReplace,
        default: None,
    },
];

/// Attribute declarations for the project resource.
pub fn project_attributes() -> &'static [AttributeSpec] {
    PROJECT_ATTRIBUTES
}

/// Attribute declarations for the trust-policy resource.
pub fn trust_policy_attributes() -> &'static [AttributeSpec] {
    TRUST_POLICY_ATTRIBUTES
}

/// Looks up the change policy declared for `name`.
pub fn change_policy_of(attributes: &[AttributeSpec], name: &str) -> Option<ChangePolicy> {
    attributes
        .iter()
        .find(|spec| spec.name == name)
        .map(|spec| spec.change_policy)
}

/// Whether a change to `name` forces resource replacement.
pub fn forces_replacement(attributes: &[AttributeSpec], name: &str) -> bool {
    matches!(
        change_policy_of(attributes, name),
        Some(ChangePolicy::ForceReplace)
    )
}
