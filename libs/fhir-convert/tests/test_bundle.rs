//! Bundle conversion: entries go back through the resource dispatcher

use ferrum_convert::{convert_resource, convert_resource_with, BaseAdvisor, FailureKind};
use ferrum_models::{dstu2, stu3, Enumeration, FhirVersion};
mod test_support;

use test_support::{dstu2_communication_request, dstu2_other, dstu2_resource, expect_dstu2, expect_stu3};

fn dstu2_bundle() -> dstu2::Bundle {
    let mut bundle = dstu2::Bundle::new(dstu2::BundleType::Transaction);
    bundle.add_link("self", "http://example.org/fhir/Bundle/1");
    bundle.add_resource(dstu2_communication_request().into());
    bundle.add_resource(dstu2_other("Basic"));
    bundle.add_resource(test_support::dstu2_device_metric().into());
    for (i, entry) in bundle.entry.iter_mut().enumerate() {
        entry.full_url = Some(format!("urn:uuid:entry-{i}"));
        entry.request = Some(dstu2::BundleEntryRequest {
            method: Some(Enumeration::new(dstu2::HttpVerb::Post)),
            url: Some("Resource".to_string()),
            ..Default::default()
        });
    }
    bundle
}

fn into_stu3_bundle(resource: stu3::Resource) -> stu3::Bundle {
    match resource {
        stu3::Resource::Bundle(bundle) => bundle,
        other => panic!("unexpected resource {}", other.resource_type()),
    }
}

#[test]
fn test_unknown_entry_fails_with_entry_path() {
    let err = convert_resource(Some(&dstu2_resource(dstu2_bundle())), FhirVersion::Stu3).unwrap_err();
    assert_eq!(err.kind, FailureKind::UnhandledVariant);
    assert_eq!(err.path, "Bundle.entry[1].resource");
    assert!(err.message.contains("Basic"));
}

#[test]
fn test_lenient_keeps_entry_without_resource() {
    let converted = convert_resource_with(
        Some(&dstu2_resource(dstu2_bundle())),
        FhirVersion::Stu3,
        &BaseAdvisor::lenient(),
    )
    .unwrap();
    let bundle = into_stu3_bundle(expect_stu3(converted));

    assert_eq!(bundle.bundle_type(), Some(stu3::BundleType::Transaction));
    assert_eq!(bundle.entry.len(), 3);
    assert!(bundle.entry[1].resource.is_none());
    assert_eq!(bundle.entry[1].full_url.as_deref(), Some("urn:uuid:entry-1"));
    assert!(matches!(
        bundle.entry[0].resource.as_deref(),
        Some(stu3::Resource::CommunicationRequest(_))
    ));
    assert!(matches!(
        bundle.entry[2].resource.as_deref(),
        Some(stu3::Resource::DeviceMetric(_))
    ));
}

#[test]
fn test_ignored_entries_are_skipped() {
    let advisor = BaseAdvisor::default().with_ignored_entry_type("Basic");
    let converted =
        convert_resource_with(Some(&dstu2_resource(dstu2_bundle())), FhirVersion::Stu3, &advisor)
            .unwrap();
    let bundle = into_stu3_bundle(expect_stu3(converted));

    assert_eq!(bundle.entry.len(), 2);
    let urls: Vec<_> = bundle
        .entry
        .iter()
        .filter_map(|e| e.full_url.as_deref())
        .collect();
    assert_eq!(urls, ["urn:uuid:entry-0", "urn:uuid:entry-2"]);
    assert_eq!(bundle.link.len(), 1);
    assert_eq!(
        bundle.entry[0]
            .request
            .as_ref()
            .and_then(|r| r.method.as_ref())
            .and_then(|m| m.value),
        Some(stu3::HttpVerb::Post)
    );
}

#[test]
fn test_stu3_only_bundle_fields_are_dropped() {
    let mut bundle = stu3::Bundle::new(stu3::BundleType::TransactionResponse);
    bundle.identifier = Some(stu3::Identifier::new("urn:ietf:rfc:3986", "urn:uuid:b-1"));
    bundle.entry.push(stu3::BundleEntry {
        response: Some(stu3::BundleEntryResponse {
            status: Some("201 Created".to_string()),
            outcome: Some(Box::new(test_support::stu3_other("OperationOutcome"))),
            ..Default::default()
        }),
        ..Default::default()
    });
    bundle.entry.push(stu3::BundleEntry {
        response: Some(stu3::BundleEntryResponse {
            outcome: Some(Box::new(test_support::stu3_other("OperationOutcome"))),
            ..Default::default()
        }),
        ..Default::default()
    });

    let converted =
        convert_resource(Some(&test_support::stu3_resource(bundle)), FhirVersion::Dstu2).unwrap();
    let dstu2::Resource::Bundle(bundle) = expect_dstu2(converted) else {
        panic!("expected a DSTU2 bundle");
    };

    assert_eq!(bundle.bundle_type(), Some(dstu2::BundleType::TransactionResponse));
    assert_eq!(bundle.entry.len(), 2);
    assert_eq!(
        bundle.entry[0].response.as_ref().and_then(|r| r.status.as_deref()),
        Some("201 Created")
    );
    assert!(bundle.entry[1].response.is_none());
}

#[test]
fn test_nested_bundle_entry_path() {
    let mut inner = dstu2::Bundle::new(dstu2::BundleType::Collection);
    inner.add_resource(dstu2_other("Basic"));
    let mut outer = dstu2::Bundle::new(dstu2::BundleType::Collection);
    outer.add_resource(dstu2_communication_request().into());
    outer.add_resource(inner.into());

    let err = convert_resource(Some(&dstu2_resource(outer)), FhirVersion::Stu3).unwrap_err();
    assert_eq!(err.path, "Bundle.entry[1].resource.entry[0].resource");
}
