//! STU3 CommunicationRequest

use super::datatypes::{Identifier, Reference, Type};
use super::resource::Resource;
use crate::common::{
    fhir_code, impl_is_empty, BackboneElement, CodeableConcept, DomainResourceBase, Enumeration,
    Primitive,
};
use serde::{Deserialize, Serialize};

fhir_code! {
    /// Shared status code set of STU3 request resources
    pub enum RequestStatus {
        Draft => "draft",
        Active => "active",
        Suspended => "suspended",
        Cancelled => "cancelled",
        Completed => "completed",
        EnteredInError => "entered-in-error",
        Unknown => "unknown",
    }
}

fhir_code! {
    pub enum RequestPriority {
        Routine => "routine",
        Urgent => "urgent",
        Asap => "asap",
        Stat => "stat",
    }
}

/// A request for information to be sent to a receiver
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationRequest {
    #[serde(flatten)]
    pub base: DomainResourceBase,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contained: Vec<Resource>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub based_on: Vec<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replaces: Vec<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_identifier: Option<Identifier>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Enumeration<RequestStatus>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Enumeration<RequestPriority>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub medium: Vec<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recipient: Vec<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topic: Vec<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payload: Vec<CommunicationRequestPayload>,

    /// occurrence[x]: dateTime | Period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrence: Option<Type>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authored_on: Option<Primitive<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester: Option<CommunicationRequestRequester>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reason_code: Vec<CodeableConcept>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reason_reference: Vec<Reference>,
}

impl_is_empty!(CommunicationRequest {
    base,
    contained,
    identifier,
    based_on,
    replaces,
    group_identifier,
    status,
    category,
    priority,
    medium,
    subject,
    recipient,
    topic,
    context,
    payload,
    occurrence,
    authored_on,
    sender,
    requester,
    reason_code,
    reason_reference,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommunicationRequestPayload {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    /// content[x]: string | Attachment | Reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Type>,
}

impl_is_empty!(CommunicationRequestPayload { backbone, content });

/// Who/what is requesting service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationRequestRequester {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<Reference>,
}

impl_is_empty!(CommunicationRequestRequester {
    backbone,
    agent,
    on_behalf_of,
});
