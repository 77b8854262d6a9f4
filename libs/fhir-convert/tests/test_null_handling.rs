//! Absent roots, absent fields and advisor policy

use ferrum_convert::conv10_30::convert_type_to_stu3;
use ferrum_convert::{
    convert_resource, convert_resource_with, convert_type, convert_type_with, BaseAdvisor,
    ConversionAdvisor, FailureKind, Result,
};
use ferrum_models::{dstu2, stu3, FhirVersion, Primitive, VersionedResource, VersionedType};
mod test_support;

#[test]
fn test_absent_root_fails_under_default_advisor() {
    let err = convert_resource(None, FhirVersion::Stu3).unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidRoot);
    assert_eq!(err.path, "Resource");

    let err = convert_type(None, FhirVersion::Dstu2).unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidRoot);
    assert_eq!(err.path, "Type");
}

#[test]
fn test_empty_root_is_treated_as_absent() {
    let empty = test_support::dstu2_resource(dstu2::CommunicationRequest::default());
    let err = convert_resource(Some(&empty), FhirVersion::Stu3).unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidRoot);

    let lenient = BaseAdvisor::lenient();
    assert_eq!(
        convert_resource_with(Some(&empty), FhirVersion::Stu3, &lenient).unwrap(),
        None
    );
}

#[test]
fn test_lenient_advisor_absorbs_absent_roots() {
    let lenient = BaseAdvisor::lenient();
    assert_eq!(convert_resource_with(None, FhirVersion::Stu3, &lenient).unwrap(), None);
    assert_eq!(convert_type_with(None, FhirVersion::Stu3, &lenient).unwrap(), None);
    assert_eq!(convert_type_to_stu3(None, &lenient).unwrap(), None);
}

#[test]
fn test_absent_fields_never_fail() {
    let sparse = dstu2::CommunicationRequest {
        subject: Some(dstu2::Reference::to("Patient/1")),
        ..Default::default()
    };
    let converted = convert_resource(Some(&test_support::dstu2_resource(sparse)), FhirVersion::Stu3)
        .unwrap()
        .and_then(VersionedResource::into_stu3);
    let Some(stu3::Resource::CommunicationRequest(converted)) = converted else {
        panic!("expected an STU3 CommunicationRequest");
    };
    assert_eq!(converted.status, None);
    assert_eq!(converted.priority, None);
    assert_eq!(converted.requester, None);
    assert!(converted.payload.is_empty());
}

#[test]
fn test_unknown_resource_under_each_policy() {
    let basic = test_support::dstu2_resource(test_support::dstu2_other("Basic"));

    let err = convert_resource(Some(&basic), FhirVersion::Stu3).unwrap_err();
    assert_eq!(err.kind, FailureKind::UnhandledVariant);
    assert_eq!(err.path, "Basic");

    let lenient = BaseAdvisor::lenient();
    assert_eq!(
        convert_resource_with(Some(&basic), FhirVersion::Stu3, &lenient).unwrap(),
        None
    );
}

#[test]
fn test_datatype_round_trip() {
    let value = VersionedType::from(dstu2::Type::Uri(Primitive::from("http://example.org")));
    let converted = convert_type(Some(&value), FhirVersion::Stu3).unwrap().unwrap();
    assert_eq!(converted.version(), FhirVersion::Stu3);

    let back = convert_type(Some(&converted), FhirVersion::Dstu2).unwrap();
    assert_eq!(back, Some(value));
}

#[test]
fn test_stu3_only_datatype_under_each_policy() {
    let artifact = VersionedType::from(stu3::Type::RelatedArtifact(stu3::RelatedArtifact {
        type_: Some(ferrum_models::Enumeration::new(stu3::RelatedArtifactType::Citation)),
        ..Default::default()
    }));

    let err = convert_type(Some(&artifact), FhirVersion::Dstu2).unwrap_err();
    assert_eq!(err.kind, FailureKind::UnhandledVariant);
    assert_eq!(err.path, "RelatedArtifact");

    let lenient = BaseAdvisor::lenient();
    assert_eq!(
        convert_type_with(Some(&artifact), FhirVersion::Dstu2, &lenient).unwrap(),
        None
    );
}

/// Passes unknown resources through by re-tagging their raw content.
struct PassThroughAdvisor;

impl ConversionAdvisor for PassThroughAdvisor {
    fn handle_unknown_resource(
        &self,
        _path: &str,
        resource: &VersionedResource,
        target: FhirVersion,
    ) -> Result<Option<VersionedResource>> {
        let Some(dstu2::Resource::Other(other)) = resource.as_dstu2() else {
            return Ok(None);
        };
        let converted = stu3::Resource::Other(stu3::OtherResource {
            resource_type: other.resource_type.clone(),
            content: other.content.clone(),
        });
        assert_eq!(target, FhirVersion::Stu3);
        Ok(Some(converted.into()))
    }
}

/// Hands back the source resource untouched.
struct EchoAdvisor;

impl ConversionAdvisor for EchoAdvisor {
    fn handle_unknown_resource(
        &self,
        _path: &str,
        resource: &VersionedResource,
        _target: FhirVersion,
    ) -> Result<Option<VersionedResource>> {
        Ok(Some(resource.clone()))
    }
}

#[test]
fn test_advisor_can_supply_unknown_resources() {
    let basic = test_support::dstu2_resource(test_support::dstu2_other("Basic"));
    let converted = convert_resource_with(Some(&basic), FhirVersion::Stu3, &PassThroughAdvisor)
        .unwrap()
        .expect("advisor result is used");
    assert_eq!(converted.version(), FhirVersion::Stu3);
    assert_eq!(converted.resource_type(), "Basic");
}

#[test]
fn test_advisor_result_in_wrong_version_is_rejected() {
    let basic = test_support::dstu2_resource(test_support::dstu2_other("Basic"));
    let err = convert_resource_with(Some(&basic), FhirVersion::Stu3, &EchoAdvisor).unwrap_err();
    assert_eq!(err.kind, FailureKind::VersionMismatch);
    assert_eq!(err.path, "Basic");
}
