//! DSTU2 datatypes that differ from their STU3 counterparts

use crate::common::{
    fhir_code, impl_is_empty, Attachment, CodeableConcept, Coding, Element, Enumeration, IsEmpty,
    Period, Primitive, Quantity,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

fhir_code! {
    /// Identifies the purpose for this identifier
    pub enum IdentifierUse {
        Usual => "usual",
        Official => "official",
        Temp => "temp",
        Secondary => "secondary",
    }
}

/// An identifier intended for computation
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
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(flatten)]
    pub element: Element,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl_is_empty!(Reference {
    element,
    reference,
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
    /// A unit of time (units from UCUM)
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
    /// Real world event relating to the schedule
    pub enum EventTiming {
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

/// When the event is to occur
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
    pub duration: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_max: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_units: Option<Enumeration<UnitsOfTime>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_max: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_max: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_units: Option<Enumeration<UnitsOfTime>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub when: Option<Enumeration<EventTiming>>,
}

impl_is_empty!(TimingRepeat {
    element,
    bounds,
    count,
    duration,
    duration_max,
    duration_units,
    frequency,
    frequency_max,
    period,
    period_max,
    period_units,
    when,
});

/// A timing schedule that specifies an event that may occur multiple times
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

/// A datatype this crate has no typed model for, kept as raw JSON.
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

/// Any DSTU2 datatype, as carried by a polymorphic `[x]` element.
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
            Type::Other(v) => v.is_empty(),
        }
    }
}
