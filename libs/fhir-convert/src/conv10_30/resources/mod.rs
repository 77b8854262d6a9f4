//! DSTU2 <-> STU3 resource converters
//!
//! Every converter takes `Option<&Source>` and returns `Result<Option<Target>>`:
//! an absent or structurally empty source yields `Ok(None)`, failures come
//! only from the advisor.

pub mod bundle;
pub mod communication_request;
pub mod device_metric;

use crate::context::ConversionContext;
use crate::error::Result;
use ferrum_models::{dstu2, present, stu3, VersionedResource};
use tracing::trace;

pub fn to_stu3(ctx: &mut ConversionContext<'_>, src: Option<&dstu2::Resource>) -> Result<Option<stu3::Resource>> {
    let Some(src) = present(src) else {
        return Ok(None);
    };
    trace!(resource_type = src.resource_type(), "dispatching resource to STU3");

    ctx.at_resource(src.resource_type(), |ctx| {
        Ok(match src {
            dstu2::Resource::CommunicationRequest(r) => {
                communication_request::to_stu3(ctx, Some(r))?.map(stu3::Resource::from)
            }
            dstu2::Resource::DeviceMetric(r) => {
                device_metric::to_stu3(ctx, Some(r))?.map(stu3::Resource::from)
            }
            dstu2::Resource::Bundle(r) => bundle::to_stu3(ctx, Some(r))?.map(stu3::Resource::from),
            dstu2::Resource::Other(_) => ctx
                .unknown_resource(VersionedResource::from(src.clone()))?
                .and_then(VersionedResource::into_stu3),
        })
    })
}

pub fn to_dstu2(ctx: &mut ConversionContext<'_>, src: Option<&stu3::Resource>) -> Result<Option<dstu2::Resource>> {
    let Some(src) = present(src) else {
        return Ok(None);
    };
    trace!(resource_type = src.resource_type(), "dispatching resource to DSTU2");

    ctx.at_resource(src.resource_type(), |ctx| {
        Ok(match src {
            stu3::Resource::CommunicationRequest(r) => {
                communication_request::to_dstu2(ctx, Some(r))?.map(dstu2::Resource::from)
            }
            stu3::Resource::DeviceMetric(r) => {
                device_metric::to_dstu2(ctx, Some(r))?.map(dstu2::Resource::from)
            }
            stu3::Resource::Bundle(r) => bundle::to_dstu2(ctx, Some(r))?.map(dstu2::Resource::from),
            stu3::Resource::Other(_) => ctx
                .unknown_resource(VersionedResource::from(src.clone()))?
                .and_then(VersionedResource::into_dstu2),
        })
    })
}

pub(crate) fn contained_to_stu3(
    ctx: &mut ConversionContext<'_>,
    src: &[dstu2::Resource],
) -> Result<Vec<stu3::Resource>> {
    let mut tgt = Vec::with_capacity(src.len());
    for (i, resource) in src.iter().enumerate() {
        if let Some(converted) = ctx.at_index("contained", i, |ctx| to_stu3(ctx, Some(resource)))? {
            tgt.push(converted);
        }
    }
    Ok(tgt)
}

pub(crate) fn contained_to_dstu2(
    ctx: &mut ConversionContext<'_>,
    src: &[stu3::Resource],
) -> Result<Vec<dstu2::Resource>> {
    let mut tgt = Vec::with_capacity(src.len());
    for (i, resource) in src.iter().enumerate() {
        if let Some(converted) = ctx.at_index("contained", i, |ctx| to_dstu2(ctx, Some(resource)))? {
            tgt.push(converted);
        }
    }
    Ok(tgt)
}
