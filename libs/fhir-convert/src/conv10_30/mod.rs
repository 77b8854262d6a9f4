//! DSTU2 (1.0.2) <-> STU3 (3.0.x)

pub mod crosswalks;
pub mod datatypes;
pub mod resources;
pub mod types;

use crate::advisor::ConversionAdvisor;
use crate::context::{ConversionContext, Dispatcher};
use crate::error::{FailureKind, Result};
use ferrum_models::{
    dstu2, present, stu3, FhirVersion, VersionPair, VersionedResource, VersionedType,
};

const DSTU2_TO_STU3: VersionPair = VersionPair::new(FhirVersion::Dstu2, FhirVersion::Stu3);
const STU3_TO_DSTU2: VersionPair = VersionPair::new(FhirVersion::Stu3, FhirVersion::Dstu2);

/// Dispatcher for both directions of the pair; the direction comes from the
/// context it is called with.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher10_30;

impl Dispatcher for Dispatcher10_30 {
    fn convert_resource(
        &self,
        ctx: &mut ConversionContext<'_>,
        src: &VersionedResource,
    ) -> Result<Option<VersionedResource>> {
        match (src, ctx.target()) {
            (VersionedResource::Dstu2(r), FhirVersion::Stu3) => {
                Ok(resources::to_stu3(ctx, Some(&**r))?.map(VersionedResource::from))
            }
            (VersionedResource::Stu3(r), FhirVersion::Dstu2) => {
                Ok(resources::to_dstu2(ctx, Some(&**r))?.map(VersionedResource::from))
            }
            (src, target) => Err(ctx.fail(
                FailureKind::UnsupportedVersionPair,
                format!("cannot convert {} to {}", src.version(), target),
            )),
        }
    }

    fn convert_type(
        &self,
        ctx: &mut ConversionContext<'_>,
        src: &VersionedType,
    ) -> Result<Option<VersionedType>> {
        match (src, ctx.target()) {
            (VersionedType::Dstu2(t), FhirVersion::Stu3) => {
                Ok(types::to_stu3(ctx, Some(&**t))?.map(VersionedType::from))
            }
            (VersionedType::Stu3(t), FhirVersion::Dstu2) => {
                Ok(types::to_dstu2(ctx, Some(&**t))?.map(VersionedType::from))
            }
            (src, target) => Err(ctx.fail(
                FailureKind::UnsupportedVersionPair,
                format!("cannot convert {} to {}", src.version(), target),
            )),
        }
    }
}

/// Convert a DSTU2 resource to STU3.
///
/// An absent or empty root goes to [`ConversionAdvisor::handle_null_root`].
pub fn convert_resource_to_stu3(
    src: Option<&dstu2::Resource>,
    advisor: &dyn ConversionAdvisor,
) -> Result<Option<stu3::Resource>> {
    let mut ctx = ConversionContext::new(DSTU2_TO_STU3, advisor, &Dispatcher10_30);
    match present(src) {
        Some(src) => resources::to_stu3(&mut ctx, Some(src)),
        None => {
            advisor.handle_null_root("Resource")?;
            Ok(None)
        }
    }
}

/// Convert an STU3 resource to DSTU2.
pub fn convert_resource_to_dstu2(
    src: Option<&stu3::Resource>,
    advisor: &dyn ConversionAdvisor,
) -> Result<Option<dstu2::Resource>> {
    let mut ctx = ConversionContext::new(STU3_TO_DSTU2, advisor, &Dispatcher10_30);
    match present(src) {
        Some(src) => resources::to_dstu2(&mut ctx, Some(src)),
        None => {
            advisor.handle_null_root("Resource")?;
            Ok(None)
        }
    }
}

pub fn convert_type_to_stu3(
    src: Option<&dstu2::Type>,
    advisor: &dyn ConversionAdvisor,
) -> Result<Option<stu3::Type>> {
    let mut ctx = ConversionContext::new(DSTU2_TO_STU3, advisor, &Dispatcher10_30);
    match present(src) {
        Some(src) => ctx.at(src.type_name(), |ctx| types::to_stu3(ctx, Some(src))),
        None => {
            advisor.handle_null_root("Type")?;
            Ok(None)
        }
    }
}

pub fn convert_type_to_dstu2(
    src: Option<&stu3::Type>,
    advisor: &dyn ConversionAdvisor,
) -> Result<Option<dstu2::Type>> {
    let mut ctx = ConversionContext::new(STU3_TO_DSTU2, advisor, &Dispatcher10_30);
    match present(src) {
        Some(src) => ctx.at(src.type_name(), |ctx| types::to_dstu2(ctx, Some(src))),
        None => {
            advisor.handle_null_root("Type")?;
            Ok(None)
        }
    }
}
