//! STU3 datatypes that differ from their DSTU2 counterparts

use crate::common::{
    fhir_code, impl_is_empty, Attachment, CodeableConcept, Coding, Element, Enumeration, IsEmpty,
    Period, Primitive, Quantity,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

fhir_code! {
    pub enum IdentifierUse {
        Usual => "usual",
        Official => "official",
        Temp => "temp",
        Secondary => "secondary",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    #[serde(flatten)]
    pub element: Element,

    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<Enumeration<IdentifierUse>>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigner: Option<Box<Reference>>,
}

impl_is_empty!(Identifier {
    element,
    use_,
    type_,
    system,
    value,
    period,
    assigner,
});

impl Identifier {
    pub fn new(system: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            value: Some(value.into()),
            ..Default::default()
        }
    }
}

/// A reference from one resource to another
///
/// STU3 adds a logical `identifier` alternative to the literal reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(flatten)]
    pub element: Element,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Box<Identifier>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl_is_empty!(Reference {
    element,
    reference,
    identifier,
    display,
});

impl Reference {
    pub fn to(reference: impl Into<String>) -> Self {
        Self {
            reference: Some(reference.into()),
            ..Default::default()
        }
    }
}

fhir_code! {
    pub enum UnitsOfTime {
        Second => "s",
        Minute => "min",
        Hour => "h",
        Day => "d",
        Week => "wk",
        Month => "mo",
        Year => "a",
    }
}

fhir_code! {
    pub enum EventTiming {
        Morn => "MORN",
        Aft => "AFT",
        Eve => "EVE",
        Night => "NIGHT",
        Phs => "PHS",
        Hs => "HS",
        Wake => "WAKE",
        C => "C",
        Cm => "CM",
        Cd => "CD",
        Cv => "CV",
        Ac => "AC",
        Acm => "ACM",
        Acd => "ACD",
        Acv => "ACV",
        Pc => "PC",
        Pcm => "PCM",
        Pcd => "PCD",
        Pcv => "PCV",
    }
}

fhir_code! {
    pub enum DayOfWeek {
        Mon => "mon",
        Tue => "tue",
        Wed => "wed",
        Thu => "thu",
        Fri => "fri",
        Sat => "sat",
        Sun => "sun",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingRepeat {
    #[serde(flatten)]
    pub element: Element,

    #[serde(rename = "boundsPeriod", skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Period>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_max: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_max: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_unit: Option<Enumeration<UnitsOfTime>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_max: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_max: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_unit: Option<Enumeration<UnitsOfTime>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub day_of_week: Vec<Enumeration<DayOfWeek>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub time_of_day: Vec<Primitive<String>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub when: Vec<Enumeration<EventTiming>>,

    /// Minutes from event (before or after)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl_is_empty!(TimingRepeat {
    element,
    bounds,
    count,
    count_max,
    duration,
    duration_max,
    duration_unit,
    frequency,
    frequency_max,
    period,
    period_max,
    period_unit,
    day_of_week,
    time_of_day,
    when,
    offset,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    #[serde(flatten)]
    pub element: Element,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub event: Vec<Primitive<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<TimingRepeat>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,
}

impl_is_empty!(Timing {
    element,
    event,
    repeat,
    code,
});

fhir_code! {
    pub enum RelatedArtifactType {
        Documentation => "documentation",
        Justification => "justification",
        Citation => "citation",
        Predecessor => "predecessor",
        Successor => "successor",
        DerivedFrom => "derived-from",
        DependsOn => "depends-on",
        ComposedOf => "composed-of",
    }
}

/// Related artifacts for a knowledge resource. New in STU3.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatedArtifact {
    #[serde(flatten)]
    pub element: Element,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<Enumeration<RelatedArtifactType>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Attachment>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Reference>,
}

impl_is_empty!(RelatedArtifact {
    element,
    type_,
    display,
    citation,
    url,
    document,
    resource,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherType {
    pub type_name: String,
    pub value: Value,
}

impl IsEmpty for OtherType {
    fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Any STU3 datatype, as carried by a polymorphic `[x]` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Type {
    #[serde(rename = "boolean")]
    Boolean(Primitive<bool>),
    #[serde(rename = "integer")]
    Integer(Primitive<i32>),
    #[serde(rename = "decimal")]
    Decimal(Primitive<Decimal>),
    #[serde(rename = "string")]
    String(Primitive<String>),
    #[serde(rename = "uri")]
    Uri(Primitive<String>),
    #[serde(rename = "code")]
    Code(Primitive<String>),
    #[serde(rename = "date")]
    Date(Primitive<String>),
    #[serde(rename = "dateTime")]
    DateTime(Primitive<String>),
    #[serde(rename = "instant")]
    Instant(Primitive<String>),
    Coding(Coding),
    CodeableConcept(CodeableConcept),
    Identifier(Identifier),
    Reference(Reference),
    Period(Period),
    Quantity(Quantity),
    Attachment(Attachment),
    Timing(Timing),
    RelatedArtifact(RelatedArtifact),
    Other(OtherType),
}

impl Type {
    pub fn type_name(&self) -> &str {
        match self {
            Type::Boolean(_) => "boolean",
            Type::Integer(_) => "integer",
            Type::Decimal(_) => "decimal",
            Type::String(_) => "string",
            Type::Uri(_) => "uri",
            Type::Code(_) => "code",
            Type::Date(_) => "date",
            Type::DateTime(_) => "dateTime",
            Type::Instant(_) => "instant",
            Type::Coding(_) => "Coding",
            Type::CodeableConcept(_) => "CodeableConcept",
            Type::Identifier(_) => "Identifier",
            Type::Reference(_) => "Reference",
            Type::Period(_) => "Period",
            Type::Quantity(_) => "Quantity",
            Type::Attachment(_) => "Attachment",
            Type::Timing(_) => "Timing",
            Type::RelatedArtifact(_) => "RelatedArtifact",
            Type::Other(other) => &other.type_name,
        }
    }
}

impl IsEmpty for Type {
    fn is_empty(&self) -> bool {
        match self {
            Type::Boolean(v) => v.is_empty(),
            Type::Integer(v) => v.is_empty(),
            Type::Decimal(v) => v.is_empty(),
            Type::String(v)
            | Type::Uri(v)
            | Type::Code(v)
            | Type::Date(v)
            | Type::DateTime(v)
            | Type::Instant(v) => v.is_empty(),
            Type::Coding(v) => v.is_empty(),
            Type::CodeableConcept(v) => v.is_empty(),
            Type::Identifier(v) => v.is_empty(),
            Type::Reference(v) => v.is_empty(),
            Type::Period(v) => v.is_empty(),
            Type::Quantity(v) => v.is_empty(),
            Type::Attachment(v) => v.is_empty(),
            Type::Timing(v) => v.is_empty(),
            Type::RelatedArtifact(v) => v.is_empty(),
            Type::Other(v) => v.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_with_only_identifier_is_present() {
        let reference = Reference {
            identifier: Some(Box::new(Identifier::new("urn:ietf:rfc:3986", "x"))),
            ..Default::default()
        };
        assert!(!reference.is_empty());
    }

    #[test]
    fn test_repeat_serializes_stu3_names() {
        let repeat = TimingRepeat {
            period_unit: Some(Enumeration::new(UnitsOfTime::Hour)),
            when: vec![Enumeration::new(EventTiming::Morn)],
            ..Default::default()
        };
        let json = serde_json::to_value(&repeat).unwrap();
        assert_eq!(json["periodUnit"]["value"], "h");
        assert_eq!(json["when"][0]["value"], "MORN");
    }
}
