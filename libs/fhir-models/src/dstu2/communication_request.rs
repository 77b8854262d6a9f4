//! DSTU2 CommunicationRequest

use super::datatypes::{Identifier, Reference, Type};
use super::resource::Resource;
use crate::common::{
    fhir_code, impl_is_empty, BackboneElement, CodeableConcept, DomainResourceBase, Enumeration,
    Primitive,
};
use serde::{Deserialize, Serialize};

fhir_code! {
    /// The status of the communication
    pub enum CommunicationRequestStatus {
        Proposed => "proposed",
        Planned => "planned",
        Requested => "requested",
        Received => "received",
        Accepted => "accepted",
        InProgress => "in-progress",
        Completed => "completed",
        Suspended => "suspended",
        Rejected => "rejected",
        Failed => "failed",
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

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recipient: Vec<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payload: Vec<CommunicationRequestPayload>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub medium: Vec<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Enumeration<CommunicationRequestStatus>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Reference>,

    /// scheduled[x]: dateTime | Period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<Type>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reason: Vec<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_on: Option<Primitive<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<CodeableConcept>,
}

impl_is_empty!(CommunicationRequest {
    base,
    contained,
    identifier,
    category,
    sender,
    recipient,
    payload,
    medium,
    requester,
    status,
    encounter,
    scheduled,
    reason,
    requested_on,
    subject,
    priority,
});

/// Message payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommunicationRequestPayload {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    /// content[x]: string | Attachment | Reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Type>,
}

impl_is_empty!(CommunicationRequestPayload { backbone, content });
