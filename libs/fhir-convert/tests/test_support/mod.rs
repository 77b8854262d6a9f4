#![allow(dead_code)]

use ferrum_models::dstu2::{self, CommunicationRequestStatus};
use ferrum_models::stu3;
use ferrum_models::{
    CodeableConcept, Coding, Element, Enumeration, Primitive, VersionedResource,
};
use serde_json::{json, Map};

pub const PRIORITY_SYSTEM: &str = "http://hl7.org/fhir/diagnostic-order-priority";

/// A DSTU2 CommunicationRequest with every bijective field populated.
pub fn dstu2_communication_request() -> dstu2::CommunicationRequest {
    let mut request = dstu2::CommunicationRequest {
        identifier: vec![dstu2::Identifier::new("http://example.org/requests", "cr-1")],
        category: Some(CodeableConcept::from_coding(Coding::new(
            "http://example.org/category",
            "reminder",
        ))),
        sender: Some(dstu2::Reference::to("Practitioner/sender")),
        recipient: vec![
            dstu2::Reference::to("Patient/1"),
            dstu2::Reference::to("RelatedPerson/2"),
        ],
        payload: vec![dstu2::CommunicationRequestPayload {
            content: Some(dstu2::Type::String(Primitive::from("Please call back"))),
            ..Default::default()
        }],
        medium: vec![CodeableConcept::text("phone")],
        requester: Some(dstu2::Reference::to("Practitioner/requester")),
        status: Some(Enumeration::new(CommunicationRequestStatus::InProgress)),
        encounter: Some(dstu2::Reference::to("Encounter/5")),
        scheduled: Some(dstu2::Type::DateTime(Primitive::from("2016-05-01T10:00:00Z"))),
        reason: vec![CodeableConcept::text("follow-up")],
        requested_on: Some(Primitive::from("2016-04-30")),
        subject: Some(dstu2::Reference::to("Patient/1")),
        priority: Some(priority("routine")),
        ..Default::default()
    };
    request.base.resource.id = Some("cr-1".to_string());
    request
}

pub fn priority(code: &str) -> CodeableConcept {
    CodeableConcept::from_coding(Coding::new(PRIORITY_SYSTEM, code))
}

pub fn dstu2_device_metric() -> dstu2::DeviceMetric {
    dstu2::DeviceMetric {
        type_: Some(CodeableConcept::from_coding(Coding::new(
            "urn:iso:std:iso:11073:10101",
            "150456",
        ))),
        identifier: Some(dstu2::Identifier::new("http://example.org/metrics", "m-1")),
        unit: Some(CodeableConcept::text("%")),
        source: Some(dstu2::Reference::to("Device/monitor")),
        operational_status: Some(Enumeration::new(dstu2::DeviceMetricOperationalStatus::On)),
        color: Some(Enumeration::new(dstu2::DeviceMetricColor::Blue)),
        category: Some(Enumeration::new(dstu2::DeviceMetricCategory::Measurement)),
        calibration: vec![dstu2::DeviceMetricCalibration {
            type_: Some(Enumeration::new(dstu2::DeviceMetricCalibrationType::TwoPoint)),
            state: Some(Enumeration::new(dstu2::DeviceMetricCalibrationState::Calibrated)),
            time: Some(Primitive::from("2016-03-01T08:00:00Z")),
            ..Default::default()
        }],
        ..Default::default()
    }
}

pub fn stu3_device_metric() -> stu3::DeviceMetric {
    stu3::DeviceMetric {
        identifier: Some(stu3::Identifier::new("http://example.org/metrics", "m-2")),
        source: Some(stu3::Reference::to("Device/pump")),
        operational_status: Some(Enumeration::new(stu3::DeviceMetricOperationalStatus::Standby)),
        color: Some(Enumeration::new(stu3::DeviceMetricColor::Green)),
        category: Some(Enumeration::new(stu3::DeviceMetricCategory::Setting)),
        ..Default::default()
    }
}

/// A resource kind with no typed converter.
pub fn dstu2_other(resource_type: &str) -> dstu2::Resource {
    let mut content = Map::new();
    content.insert("id".to_string(), json!("x-1"));
    dstu2::Resource::Other(dstu2::OtherResource {
        resource_type: resource_type.to_string(),
        content,
    })
}

pub fn stu3_other(resource_type: &str) -> stu3::Resource {
    let mut content = Map::new();
    content.insert("id".to_string(), json!("x-1"));
    stu3::Resource::Other(stu3::OtherResource {
        resource_type: resource_type.to_string(),
        content,
    })
}

/// Metadata-only element, used to check that ids survive conversion.
pub fn element(id: &str) -> Element {
    Element {
        id: Some(id.to_string()),
        ..Default::default()
    }
}

pub fn dstu2_resource(resource: impl Into<dstu2::Resource>) -> VersionedResource {
    VersionedResource::from(resource.into())
}

pub fn stu3_resource(resource: impl Into<stu3::Resource>) -> VersionedResource {
    VersionedResource::from(resource.into())
}

pub fn expect_stu3(resource: Option<VersionedResource>) -> stu3::Resource {
    resource
        .and_then(VersionedResource::into_stu3)
        .expect("expected an STU3 resource")
}

pub fn expect_dstu2(resource: Option<VersionedResource>) -> dstu2::Resource {
    resource
        .and_then(VersionedResource::into_dstu2)
        .expect("expected a DSTU2 resource")
}
