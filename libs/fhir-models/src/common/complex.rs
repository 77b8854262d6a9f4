//! Complex datatypes whose shape did not change between DSTU2 and STU3
//!
//! Both versions' polymorphic `Type` enums reuse these directly.

use super::code::fhir_code;
use super::element::Element;
use super::empty::impl_is_empty;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Coding - a reference to a code defined by a terminology system
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coding {
    #[serde(flatten)]
    pub element: Element,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_selected: Option<bool>,
}

impl_is_empty!(Coding {
    element,
    system,
    version,
    code,
    display,
    user_selected,
});

impl Coding {
    pub fn new(system: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            code: Some(code.into()),
            ..Default::default()
        }
    }

    /// True when both system and code match exactly.
    pub fn is(&self, system: &str, code: &str) -> bool {
        self.system.as_deref() == Some(system) && self.code.as_deref() == Some(code)
    }
}

/// Concept - reference to a terminology or just text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeableConcept {
    #[serde(flatten)]
    pub element: Element,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coding: Vec<Coding>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl_is_empty!(CodeableConcept {
    element,
    coding,
    text,
});

impl CodeableConcept {
    pub fn from_coding(coding: Coding) -> Self {
        Self {
            coding: vec![coding],
            ..Default::default()
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }
}

/// Time range defined by start and end date/time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Period {
    #[serde(flatten)]
    pub element: Element,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl_is_empty!(Period {
    element,
    start,
    end,
});

fhir_code! {
    /// How the quantity value should be understood
    pub enum QuantityComparator {
        LessThan => "<",
        LessOrEqual => "<=",
        GreaterOrEqual => ">=",
        GreaterThan => ">",
    }
}

/// A measured or measurable amount
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    #[serde(flatten)]
    pub element: Element,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparator: Option<QuantityComparator>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl_is_empty!(Quantity {
    element,
    value,
    comparator,
    unit,
    system,
    code,
});

/// Content in a format defined elsewhere
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[serde(flatten)]
    pub element: Element,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Data inline, base64ed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,

    /// Hash of the data (sha-1, base64ed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation: Option<String>,
}

impl_is_empty!(Attachment {
    element,
    content_type,
    language,
    data,
    url,
    size,
    hash,
    title,
    creation,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::IsEmpty;

    #[test]
    fn test_coding_is() {
        let coding = Coding::new("http://hl7.org/fhir/diagnostic-order-priority", "urgent");
        assert!(coding.is("http://hl7.org/fhir/diagnostic-order-priority", "urgent"));
        assert!(!coding.is("http://example.org", "urgent"));
    }

    #[test]
    fn test_concept_emptiness() {
        assert!(CodeableConcept::default().is_empty());
        assert!(CodeableConcept::from_coding(Coding::default()).is_empty());
        assert!(!CodeableConcept::text("fever").is_empty());
    }

    #[test]
    fn test_quantity_comparator_wire_code() {
        let q = Quantity {
            comparator: Some(QuantityComparator::LessOrEqual),
            ..Default::default()
        };
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["comparator"], "<=");
    }
}
