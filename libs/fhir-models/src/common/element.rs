//! Element and resource metadata shared by every FHIR version
//!
//! These shapes are identical in DSTU2 and STU3, so the copy primitives of
//! the conversion engine move them across versions without transformation.

use super::code::fhir_code;
use super::complex::Coding;
use super::empty::impl_is_empty;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Base metadata of every element: an internal id and extensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
}

impl_is_empty!(Element { id, extension });

/// Metadata of a backbone (nested, resource-specific) element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackboneElement {
    #[serde(flatten)]
    pub element: Element,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,
}

impl_is_empty!(BackboneElement {
    element,
    modifier_extension,
});

/// FHIR Extension
///
/// The `value[x]` payload is kept as raw JSON; the engine copies it verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    pub url: String,

    #[serde(flatten)]
    pub value: Value,
}

impl_is_empty!(Extension { url, value });

impl Extension {
    pub fn new(url: impl Into<String>, value: Value) -> Self {
        Self {
            url: url.into(),
            value,
        }
    }
}

fhir_code! {
    /// Status of a narrative block
    pub enum NarrativeStatus {
        Generated => "generated",
        Extensions => "extensions",
        Additional => "additional",
        Empty => "empty",
    }
}

/// Human-readable summary of a resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    #[serde(flatten)]
    pub element: Element,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NarrativeStatus>,

    /// Limited xhtml content
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub div: String,
}

impl_is_empty!(Narrative {
    element,
    status,
    div,
});

/// Metadata about a resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(flatten)]
    pub element: Element,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub profile: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<Coding>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag: Vec<Coding>,
}

impl_is_empty!(Meta {
    element,
    version_id,
    last_updated,
    profile,
    security,
    tag,
});

/// Fields every resource carries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceBase {
    /// Logical id of this artifact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit_rules: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl_is_empty!(ResourceBase {
    id,
    meta,
    implicit_rules,
    language,
});

/// Fields every domain resource carries on top of [`ResourceBase`]
///
/// Contained resources are version-specific and live on the resource itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainResourceBase {
    #[serde(flatten)]
    pub resource: ResourceBase,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Narrative>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,
}

impl_is_empty!(DomainResourceBase {
    resource,
    text,
    extension,
    modifier_extension,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::IsEmpty;
    use serde_json::json;

    #[test]
    fn test_extension_flattens_value() {
        let ext = Extension::new("http://example.org/ext", json!({"valueString": "x"}));
        let json = serde_json::to_value(&ext).unwrap();
        assert_eq!(json["url"], "http://example.org/ext");
        assert_eq!(json["valueString"], "x");
    }

    #[test]
    fn test_domain_resource_emptiness() {
        let mut base = DomainResourceBase::default();
        assert!(base.is_empty());

        base.resource.language = Some("en".to_string());
        assert!(!base.is_empty());
    }

    #[test]
    fn test_narrative_status_serializes_as_code() {
        let narrative = Narrative {
            status: Some(NarrativeStatus::Generated),
            div: "<div>hi</div>".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&narrative).unwrap();
        assert_eq!(json["status"], "generated");
    }
}
