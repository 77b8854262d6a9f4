//! Polymorphic datatype dispatch
//!
//! Each known variant maps to its converter. A variant without a converter
//! (`Other`, or a datatype the target release lacks) goes to the advisor; the
//! dispatcher never substitutes a "closest" type.

use super::datatypes::{
    identifier_to_dstu2, identifier_to_stu3, reference_to_dstu2, reference_to_stu3,
    timing_to_dstu2, timing_to_stu3,
};
use crate::context::ConversionContext;
use crate::error::Result;
use ferrum_models::{dstu2, present, stu3, VersionedType};
use tracing::trace;

pub fn to_stu3(ctx: &mut ConversionContext<'_>, src: Option<&dstu2::Type>) -> Result<Option<stu3::Type>> {
    let Some(src) = present(src) else {
        return Ok(None);
    };
    trace!(type_name = src.type_name(), "dispatching datatype to STU3");

    let converted = match src {
        dstu2::Type::Boolean(v) => Some(stu3::Type::Boolean(v.clone())),
        dstu2::Type::Integer(v) => Some(stu3::Type::Integer(v.clone())),
        dstu2::Type::Decimal(v) => Some(stu3::Type::Decimal(v.clone())),
        dstu2::Type::String(v) => Some(stu3::Type::String(v.clone())),
        dstu2::Type::Uri(v) => Some(stu3::Type::Uri(v.clone())),
        dstu2::Type::Code(v) => Some(stu3::Type::Code(v.clone())),
        dstu2::Type::Date(v) => Some(stu3::Type::Date(v.clone())),
        dstu2::Type::DateTime(v) => Some(stu3::Type::DateTime(v.clone())),
        dstu2::Type::Instant(v) => Some(stu3::Type::Instant(v.clone())),
        dstu2::Type::Coding(v) => Some(stu3::Type::Coding(v.clone())),
        dstu2::Type::CodeableConcept(v) => Some(stu3::Type::CodeableConcept(v.clone())),
        dstu2::Type::Period(v) => Some(stu3::Type::Period(v.clone())),
        dstu2::Type::Quantity(v) => Some(stu3::Type::Quantity(v.clone())),
        dstu2::Type::Attachment(v) => Some(stu3::Type::Attachment(v.clone())),
        dstu2::Type::Identifier(v) => identifier_to_stu3(ctx, Some(v)).map(stu3::Type::Identifier),
        dstu2::Type::Reference(v) => reference_to_stu3(ctx, Some(v)).map(stu3::Type::Reference),
        dstu2::Type::Timing(v) => timing_to_stu3(ctx, Some(v)).map(stu3::Type::Timing),
        dstu2::Type::Other(_) => {
            return Ok(ctx
                .unknown_type(VersionedType::from(src.clone()))?
                .and_then(VersionedType::into_stu3));
        }
    };
    Ok(converted)
}

pub fn to_dstu2(ctx: &mut ConversionContext<'_>, src: Option<&stu3::Type>) -> Result<Option<dstu2::Type>> {
    let Some(src) = present(src) else {
        return Ok(None);
    };
    trace!(type_name = src.type_name(), "dispatching datatype to DSTU2");

    let converted = match src {
        stu3::Type::Boolean(v) => Some(dstu2::Type::Boolean(v.clone())),
        stu3::Type::Integer(v) => Some(dstu2::Type::Integer(v.clone())),
        stu3::Type::Decimal(v) => Some(dstu2::Type::Decimal(v.clone())),
        stu3::Type::String(v) => Some(dstu2::Type::String(v.clone())),
        stu3::Type::Uri(v) => Some(dstu2::Type::Uri(v.clone())),
        stu3::Type::Code(v) => Some(dstu2::Type::Code(v.clone())),
        stu3::Type::Date(v) => Some(dstu2::Type::Date(v.clone())),
        stu3::Type::DateTime(v) => Some(dstu2::Type::DateTime(v.clone())),
        stu3::Type::Instant(v) => Some(dstu2::Type::Instant(v.clone())),
        stu3::Type::Coding(v) => Some(dstu2::Type::Coding(v.clone())),
        stu3::Type::CodeableConcept(v) => Some(dstu2::Type::CodeableConcept(v.clone())),
        stu3::Type::Period(v) => Some(dstu2::Type::Period(v.clone())),
        stu3::Type::Quantity(v) => Some(dstu2::Type::Quantity(v.clone())),
        stu3::Type::Attachment(v) => Some(dstu2::Type::Attachment(v.clone())),
        stu3::Type::Identifier(v) => identifier_to_dstu2(ctx, Some(v)).map(dstu2::Type::Identifier),
        stu3::Type::Reference(v) => reference_to_dstu2(ctx, Some(v)).map(dstu2::Type::Reference),
        stu3::Type::Timing(v) => timing_to_dstu2(ctx, Some(v)).map(dstu2::Type::Timing),
        stu3::Type::RelatedArtifact(_) | stu3::Type::Other(_) => {
            return Ok(ctx
                .unknown_type(VersionedType::from(src.clone()))?
                .and_then(VersionedType::into_dstu2));
        }
    };
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::BaseAdvisor;
    use crate::conv10_30::Dispatcher10_30;
    use crate::error::FailureKind;
    use ferrum_models::{FhirVersion, Period, Primitive, VersionPair};

    #[test]
    fn test_date_time_passes_through() {
        let advisor = BaseAdvisor::default();
        let mut ctx = ConversionContext::new(
            VersionPair::new(FhirVersion::Dstu2, FhirVersion::Stu3),
            &advisor,
            &Dispatcher10_30,
        );
        let src = dstu2::Type::DateTime("2017-05-01".into());
        assert_eq!(
            to_stu3(&mut ctx, Some(&src)).unwrap(),
            Some(stu3::Type::DateTime("2017-05-01".into()))
        );
    }

    #[test]
    fn test_empty_variant_short_circuits() {
        let advisor = BaseAdvisor::default();
        let mut ctx = ConversionContext::new(
            VersionPair::new(FhirVersion::Dstu2, FhirVersion::Stu3),
            &advisor,
            &Dispatcher10_30,
        );
        let src = dstu2::Type::Period(Period::default());
        assert_eq!(to_stu3(&mut ctx, Some(&src)).unwrap(), None);
        let src = dstu2::Type::String(Primitive::default());
        assert_eq!(to_stu3(&mut ctx, Some(&src)).unwrap(), None);
    }

    #[test]
    fn test_related_artifact_goes_to_advisor() {
        let src = stu3::Type::RelatedArtifact(stu3::RelatedArtifact {
            url: Some("http://example.org/doc".into()),
            ..Default::default()
        });
        let pair = VersionPair::new(FhirVersion::Stu3, FhirVersion::Dstu2);

        let strict = BaseAdvisor::default();
        let mut ctx = ConversionContext::new(pair, &strict, &Dispatcher10_30);
        let err = ctx.at("content", |ctx| to_dstu2(ctx, Some(&src))).unwrap_err();
        assert_eq!(err.kind, FailureKind::UnhandledVariant);
        assert_eq!(err.path, "content");

        let lenient = BaseAdvisor::lenient();
        let mut ctx = ConversionContext::new(pair, &lenient, &Dispatcher10_30);
        assert_eq!(to_dstu2(&mut ctx, Some(&src)).unwrap(), None);
    }
}
