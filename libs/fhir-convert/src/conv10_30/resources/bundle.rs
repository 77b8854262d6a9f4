//! Bundle
//!
//! Entry resources go back through the resource dispatcher, so an entry of
//! an unknown kind reaches the advisor like any other resource. Entries the
//! advisor asks to ignore are left out of the target bundle.

use crate::context::ConversionContext;
use crate::conv10_30::crosswalks::{
    BUNDLE_TYPE_10_30, BUNDLE_TYPE_30_10, HTTP_VERB_10_30, HTTP_VERB_30_10, SEARCH_ENTRY_MODE_10_30,
    SEARCH_ENTRY_MODE_30_10,
};
use crate::conv10_30::datatypes::{convert_enumeration, primitive};
use crate::error::Result;
use ferrum_models::{dstu2, present, stu3};
use tracing::warn;

pub fn to_stu3(ctx: &mut ConversionContext<'_>, src: Option<&dstu2::Bundle>) -> Result<Option<stu3::Bundle>> {
    let Some(src) = present(src) else {
        return Ok(None);
    };
    let mut tgt = stu3::Bundle::default();
    ctx.copy_resource(&src.base, &mut tgt.base);
    tgt.type_ = convert_enumeration(ctx, src.type_.as_ref(), &BUNDLE_TYPE_10_30);
    tgt.total = primitive(src.total.as_ref());
    tgt.link = src.link.iter().filter_map(|l| link_to_stu3(ctx, Some(l))).collect();
    for (i, entry) in src.entry.iter().enumerate() {
        if let Some(entry) = ctx.at_index("entry", i, |ctx| entry_to_stu3(ctx, Some(entry)))? {
            tgt.entry.push(entry);
        }
    }
    Ok(Some(tgt))
}

/// `identifier` and `entry.response.outcome` are dropped.
pub fn to_dstu2(ctx: &mut ConversionContext<'_>, src: Option<&stu3::Bundle>) -> Result<Option<dstu2::Bundle>> {
    let Some(src) = present(src) else {
        return Ok(None);
    };
    let mut tgt = dstu2::Bundle::default();
    ctx.copy_resource(&src.base, &mut tgt.base);
    tgt.type_ = convert_enumeration(ctx, src.type_.as_ref(), &BUNDLE_TYPE_30_10);
    tgt.total = primitive(src.total.as_ref());
    tgt.link = src.link.iter().filter_map(|l| link_to_dstu2(ctx, Some(l))).collect();
    for (i, entry) in src.entry.iter().enumerate() {
        if let Some(entry) = ctx.at_index("entry", i, |ctx| entry_to_dstu2(ctx, Some(entry)))? {
            tgt.entry.push(entry);
        }
    }
    Ok(Some(tgt))
}

fn link_to_stu3(ctx: &ConversionContext<'_>, src: Option<&dstu2::BundleLink>) -> Option<stu3::BundleLink> {
    let src = present(src)?;
    let mut tgt = stu3::BundleLink::default();
    ctx.copy_backbone_element(&src.backbone, &mut tgt.backbone);
    tgt.relation = src.relation.clone();
    tgt.url = src.url.clone();
    Some(tgt)
}

fn link_to_dstu2(ctx: &ConversionContext<'_>, src: Option<&stu3::BundleLink>) -> Option<dstu2::BundleLink> {
    let src = present(src)?;
    let mut tgt = dstu2::BundleLink::default();
    ctx.copy_backbone_element(&src.backbone, &mut tgt.backbone);
    tgt.relation = src.relation.clone();
    tgt.url = src.url.clone();
    Some(tgt)
}

fn skip_entry(ctx: &ConversionContext<'_>, resource_type: Option<&str>) -> bool {
    let Some(resource_type) = resource_type else {
        return false;
    };
    let path = ctx.path();
    if ctx.advisor().ignore_entry(&path, resource_type) {
        warn!(path = %path, resource_type, "skipping ignored bundle entry");
        true
    } else {
        false
    }
}

pub fn entry_to_stu3(
    ctx: &mut ConversionContext<'_>,
    src: Option<&dstu2::BundleEntry>,
) -> Result<Option<stu3::BundleEntry>> {
    let Some(src) = present(src) else {
        return Ok(None);
    };
    if skip_entry(ctx, src.resource.as_deref().map(dstu2::Resource::resource_type)) {
        return Ok(None);
    }
    let mut tgt = stu3::BundleEntry::default();
    ctx.copy_backbone_element(&src.backbone, &mut tgt.backbone);
    tgt.link = src.link.iter().filter_map(|l| link_to_stu3(ctx, Some(l))).collect();
    tgt.full_url = src.full_url.clone();
    tgt.resource = ctx
        .at("resource", |ctx| super::to_stu3(ctx, src.resource.as_deref()))?
        .map(Box::new);
    tgt.search = present(src.search.as_ref()).map(|search| stu3::BundleEntrySearch {
        backbone: search.backbone.clone(),
        mode: convert_enumeration(ctx, search.mode.as_ref(), &SEARCH_ENTRY_MODE_10_30),
        score: search.score,
    });
    tgt.request = present(src.request.as_ref()).map(|request| stu3::BundleEntryRequest {
        backbone: request.backbone.clone(),
        method: convert_enumeration(ctx, request.method.as_ref(), &HTTP_VERB_10_30),
        url: request.url.clone(),
        if_none_match: request.if_none_match.clone(),
        if_modified_since: request.if_modified_since.clone(),
        if_match: request.if_match.clone(),
        if_none_exist: request.if_none_exist.clone(),
    });
    tgt.response = present(src.response.as_ref()).map(|response| stu3::BundleEntryResponse {
        backbone: response.backbone.clone(),
        status: response.status.clone(),
        location: response.location.clone(),
        etag: response.etag.clone(),
        last_modified: response.last_modified.clone(),
        outcome: None,
    });
    Ok(Some(tgt))
}

pub fn entry_to_dstu2(
    ctx: &mut ConversionContext<'_>,
    src: Option<&stu3::BundleEntry>,
) -> Result<Option<dstu2::BundleEntry>> {
    let Some(src) = present(src) else {
        return Ok(None);
    };
    if skip_entry(ctx, src.resource.as_deref().map(stu3::Resource::resource_type)) {
        return Ok(None);
    }
    let mut tgt = dstu2::BundleEntry::default();
    ctx.copy_backbone_element(&src.backbone, &mut tgt.backbone);
    tgt.link = src.link.iter().filter_map(|l| link_to_dstu2(ctx, Some(l))).collect();
    tgt.full_url = src.full_url.clone();
    tgt.resource = ctx
        .at("resource", |ctx| super::to_dstu2(ctx, src.resource.as_deref()))?
        .map(Box::new);
    tgt.search = present(src.search.as_ref()).map(|search| dstu2::BundleEntrySearch {
        backbone: search.backbone.clone(),
        mode: convert_enumeration(ctx, search.mode.as_ref(), &SEARCH_ENTRY_MODE_30_10),
        score: search.score,
    });
    tgt.request = present(src.request.as_ref()).map(|request| dstu2::BundleEntryRequest {
        backbone: request.backbone.clone(),
        method: convert_enumeration(ctx, request.method.as_ref(), &HTTP_VERB_30_10),
        url: request.url.clone(),
        if_none_match: request.if_none_match.clone(),
        if_modified_since: request.if_modified_since.clone(),
        if_match: request.if_match.clone(),
        if_none_exist: request.if_none_exist.clone(),
    });
    tgt.response = present(src.response.as_ref())
        .map(|response| dstu2::BundleEntryResponse {
            backbone: response.backbone.clone(),
            status: response.status.clone(),
            location: response.location.clone(),
            etag: response.etag.clone(),
            last_modified: response.last_modified.clone(),
        })
        .filter(|response| !ferrum_models::IsEmpty::is_empty(response));
    Ok(Some(tgt))
}
