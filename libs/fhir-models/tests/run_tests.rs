use serde::de::DeserializeOwned;
use std::{fs::File, path::PathBuf};
use ferrum_models::{dstu2, stu3, FhirVersion, IsEmpty, VersionedResource};

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_fixture<T: DeserializeOwned>(relative: &str) -> T {
    let path = fixtures_root().join(relative);
    assert!(path.exists(), "fixture missing at {:?}", path);

    let file = File::open(&path).expect("failed to open fixture");
    serde_json::from_reader(file).expect("failed to deserialize fixture")
}

#[test]
fn parse_dstu2_communication_request_example() {
    let resource: dstu2::Resource = load_fixture("dstu2/communicationrequest-example.json");
    assert_eq!(resource.resource_type(), "CommunicationRequest");
    assert_eq!(resource.id(), Some("cr-example"));

    let dstu2::Resource::CommunicationRequest(request) = &resource else {
        panic!("expected a typed CommunicationRequest");
    };
    assert_eq!(
        request.status.as_ref().and_then(|s| s.value),
        Some(dstu2::CommunicationRequestStatus::Requested)
    );
    assert_eq!(
        request.identifier[0].use_.as_ref().and_then(|u| u.value),
        Some(dstu2::IdentifierUse::Official)
    );
    assert!(matches!(
        request.payload[0].content,
        Some(dstu2::Type::String(_))
    ));
    assert!(matches!(request.scheduled, Some(dstu2::Type::DateTime(_))));
    assert!(request.base.text.is_some());

    let versioned = VersionedResource::from(resource);
    assert_eq!(versioned.version(), FhirVersion::Dstu2);
    assert!(!versioned.is_empty());
}

#[test]
fn parse_stu3_bundle_example() {
    let resource: stu3::Resource = load_fixture("stu3/bundle-example.json");
    let stu3::Resource::Bundle(bundle) = &resource else {
        panic!("expected a typed Bundle");
    };

    assert_eq!(bundle.bundle_type(), Some(stu3::BundleType::Searchset));
    assert_eq!(bundle.total.as_ref().and_then(|t| t.value), Some(2));
    assert!(bundle.identifier.is_some());
    assert_eq!(bundle.entries().len(), 2);

    let Some(stu3::Resource::DeviceMetric(metric)) = bundle.entry[0].resource.as_deref() else {
        panic!("expected a typed DeviceMetric entry");
    };
    assert_eq!(
        metric.operational_status.as_ref().and_then(|s| s.value),
        Some(stu3::DeviceMetricOperationalStatus::EnteredInError)
    );
    assert_eq!(metric.calibration.len(), 1);

    let other = bundle.entry[1].resource.as_deref().expect("entry resource");
    assert!(matches!(other, stu3::Resource::Other(_)));
    assert_eq!(other.resource_type(), "Patient");
    assert_eq!(other.id(), Some("p-1"));
}

#[test]
fn untyped_resources_survive_a_json_round_trip() {
    let resource: stu3::Resource = load_fixture("stu3/bundle-example.json");
    let value = resource.to_value().expect("serializes");
    let again = stu3::Resource::from_value(value).expect("parses again");
    assert_eq!(again, resource);
}
