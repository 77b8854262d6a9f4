//! CommunicationRequest
//!
//! STU3 -> DSTU2 is lossy: only the first `category` survives, and
//! `based_on`, `replaces`, `group_identifier`, `topic`, `reason_reference`
//! and `requester.on_behalf_of` have no DSTU2 home.

use super::{contained_to_dstu2, contained_to_stu3};
use crate::context::ConversionContext;
use crate::conv10_30::crosswalks::{
    COMMUNICATION_PRIORITY_10_30, COMMUNICATION_PRIORITY_30_10, COMMUNICATION_REQUEST_STATUS_10_30,
    COMMUNICATION_REQUEST_STATUS_30_10,
};
use crate::conv10_30::datatypes::{
    convert_enumeration, copy, copy_all, identifiers_to_dstu2, identifiers_to_stu3, primitive,
    reference_to_dstu2, reference_to_stu3, references_to_dstu2, references_to_stu3,
};
use crate::conv10_30::types;
use crate::error::Result;
use ferrum_models::{dstu2, present, stu3, Enumeration};

pub fn to_stu3(
    ctx: &mut ConversionContext<'_>,
    src: Option<&dstu2::CommunicationRequest>,
) -> Result<Option<stu3::CommunicationRequest>> {
    let Some(src) = present(src) else {
        return Ok(None);
    };
    let mut tgt = stu3::CommunicationRequest::default();
    ctx.copy_domain_resource(&src.base, &mut tgt.base);
    tgt.contained = contained_to_stu3(ctx, &src.contained)?;
    tgt.identifier = identifiers_to_stu3(ctx, &src.identifier);
    tgt.category = copy(src.category.as_ref()).into_iter().collect();
    tgt.sender = reference_to_stu3(ctx, src.sender.as_ref());
    tgt.recipient = references_to_stu3(ctx, &src.recipient);
    for (i, payload) in src.payload.iter().enumerate() {
        if let Some(payload) = ctx.at_index("payload", i, |ctx| payload_to_stu3(ctx, Some(payload)))? {
            tgt.payload.push(payload);
        }
    }
    tgt.medium = copy_all(&src.medium);
    tgt.requester = reference_to_stu3(ctx, src.requester.as_ref()).map(|agent| {
        stu3::CommunicationRequestRequester {
            agent: Some(agent),
            ..Default::default()
        }
    });
    tgt.status = convert_enumeration(ctx, src.status.as_ref(), &COMMUNICATION_REQUEST_STATUS_10_30);
    tgt.context = reference_to_stu3(ctx, src.encounter.as_ref());
    tgt.occurrence = ctx.at("scheduled", |ctx| types::to_stu3(ctx, src.scheduled.as_ref()))?;
    tgt.reason_code = copy_all(&src.reason);
    tgt.authored_on = primitive(src.requested_on.as_ref());
    tgt.subject = reference_to_stu3(ctx, src.subject.as_ref());
    tgt.priority = present(src.priority.as_ref())
        .and_then(|priority| COMMUNICATION_PRIORITY_10_30.map(priority))
        .map(Enumeration::new);
    Ok(Some(tgt))
}

pub fn to_dstu2(
    ctx: &mut ConversionContext<'_>,
    src: Option<&stu3::CommunicationRequest>,
) -> Result<Option<dstu2::CommunicationRequest>> {
    let Some(src) = present(src) else {
        return Ok(None);
    };
    let mut tgt = dstu2::CommunicationRequest::default();
    ctx.copy_domain_resource(&src.base, &mut tgt.base);
    tgt.contained = contained_to_dstu2(ctx, &src.contained)?;
    tgt.identifier = identifiers_to_dstu2(ctx, &src.identifier);
    tgt.category = copy(src.category.first());
    tgt.sender = reference_to_dstu2(ctx, src.sender.as_ref());
    tgt.recipient = references_to_dstu2(ctx, &src.recipient);
    for (i, payload) in src.payload.iter().enumerate() {
        if let Some(payload) = ctx.at_index("payload", i, |ctx| payload_to_dstu2(ctx, Some(payload)))? {
            tgt.payload.push(payload);
        }
    }
    tgt.medium = copy_all(&src.medium);
    tgt.requester = src
        .requester
        .as_ref()
        .and_then(|requester| reference_to_dstu2(ctx, requester.agent.as_ref()));
    tgt.status = convert_enumeration(ctx, src.status.as_ref(), &COMMUNICATION_REQUEST_STATUS_30_10);
    tgt.encounter = reference_to_dstu2(ctx, src.context.as_ref());
    tgt.scheduled = ctx.at("occurrence", |ctx| types::to_dstu2(ctx, src.occurrence.as_ref()))?;
    tgt.reason = copy_all(&src.reason_code);
    tgt.requested_on = primitive(src.authored_on.as_ref());
    tgt.subject = reference_to_dstu2(ctx, src.subject.as_ref());
    tgt.priority = COMMUNICATION_PRIORITY_30_10.map(src.priority.as_ref().and_then(|p| p.value));
    Ok(Some(tgt))
}

pub fn payload_to_stu3(
    ctx: &mut ConversionContext<'_>,
    src: Option<&dstu2::CommunicationRequestPayload>,
) -> Result<Option<stu3::CommunicationRequestPayload>> {
    let Some(src) = present(src) else {
        return Ok(None);
    };
    let mut tgt = stu3::CommunicationRequestPayload::default();
    ctx.copy_backbone_element(&src.backbone, &mut tgt.backbone);
    tgt.content = ctx.at("content", |ctx| types::to_stu3(ctx, src.content.as_ref()))?;
    Ok(Some(tgt))
}

pub fn payload_to_dstu2(
    ctx: &mut ConversionContext<'_>,
    src: Option<&stu3::CommunicationRequestPayload>,
) -> Result<Option<dstu2::CommunicationRequestPayload>> {
    let Some(src) = present(src) else {
        return Ok(None);
    };
    let mut tgt = dstu2::CommunicationRequestPayload::default();
    ctx.copy_backbone_element(&src.backbone, &mut tgt.backbone);
    tgt.content = ctx.at("content", |ctx| types::to_dstu2(ctx, src.content.as_ref()))?;
    Ok(Some(tgt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::BaseAdvisor;
    use crate::conv10_30::Dispatcher10_30;
    use ferrum_models::{BackboneElement, CodeableConcept, Coding, Element, FhirVersion, VersionPair};

    fn dstu2_ctx(advisor: &BaseAdvisor) -> ConversionContext<'_> {
        ConversionContext::new(
            VersionPair::new(FhirVersion::Dstu2, FhirVersion::Stu3),
            advisor,
            &Dispatcher10_30,
        )
    }

    #[test]
    fn test_empty_payload_converts_to_none() {
        let advisor = BaseAdvisor::default();
        let mut ctx = dstu2_ctx(&advisor);
        let payload = dstu2::CommunicationRequestPayload::default();
        assert_eq!(payload_to_stu3(&mut ctx, Some(&payload)).unwrap(), None);

        let payload = dstu2::CommunicationRequestPayload {
            backbone: BackboneElement {
                element: Element {
                    id: Some("p1".into()),
                    ..Default::default()
                },
                ..Default::default()
            },
            content: None,
        };
        let converted = payload_to_stu3(&mut ctx, Some(&payload)).unwrap().unwrap();
        assert_eq!(converted.backbone.element.id.as_deref(), Some("p1"));
        assert_eq!(converted.content, None);
    }

    #[test]
    fn test_priority_outside_known_system_is_absent() {
        let advisor = BaseAdvisor::default();
        let mut ctx = dstu2_ctx(&advisor);
        let src = dstu2::CommunicationRequest {
            priority: Some(CodeableConcept::from_coding(Coding::new(
                "http://example.org/priority",
                "urgent",
            ))),
            subject: Some(dstu2::Reference::to("Patient/1")),
            ..Default::default()
        };
        let tgt = to_stu3(&mut ctx, Some(&src)).unwrap().unwrap();
        assert_eq!(tgt.priority, None);
    }

    #[test]
    fn test_requester_only_emitted_when_present() {
        let advisor = BaseAdvisor::default();
        let mut ctx = ConversionContext::new(
            VersionPair::new(FhirVersion::Stu3, FhirVersion::Dstu2),
            &advisor,
            &Dispatcher10_30,
        );
        let src = stu3::CommunicationRequest {
            requester: Some(stu3::CommunicationRequestRequester {
                on_behalf_of: Some(stu3::Reference::to("Organization/1")),
                ..Default::default()
            }),
            subject: Some(stu3::Reference::to("Patient/1")),
            ..Default::default()
        };
        let tgt = to_dstu2(&mut ctx, Some(&src)).unwrap().unwrap();
        assert_eq!(tgt.requester, None);

        let mut ctx = dstu2_ctx(&advisor);
        let back = to_stu3(&mut ctx, Some(&tgt)).unwrap().unwrap();
        assert_eq!(back.requester, None);
    }
}
