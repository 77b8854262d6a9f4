//! DSTU2 Bundle

use super::resource::Resource;
use crate::common::{
    fhir_code, impl_is_empty, BackboneElement, Enumeration, Primitive, ResourceBase,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fhir_code! {
    /// Indicates the purpose of a bundle
    pub enum BundleType {
        Document => "document",
        Message => "message",
        Transaction => "transaction",
        TransactionResponse => "transaction-response",
        Batch => "batch",
        BatchResponse => "batch-response",
        History => "history",
        Searchset => "searchset",
        Collection => "collection",
    }
}

fhir_code! {
    /// Why an entry is in the result set
    pub enum SearchEntryMode {
        Match => "match",
        Include => "include",
        Outcome => "outcome",
    }
}

fhir_code! {
    pub enum HttpVerb {
        Get => "GET",
        Post => "POST",
        Put => "PUT",
        Delete => "DELETE",
    }
}

/// Contains a collection of resources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    #[serde(flatten)]
    pub base: ResourceBase,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<Enumeration<BundleType>>,

    /// If search, the total number of matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Primitive<u32>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link: Vec<BundleLink>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entry: Vec<BundleEntry>,
}

impl_is_empty!(Bundle {
    base,
    type_,
    total,
    link,
    entry,
});

impl Bundle {
    pub fn new(bundle_type: BundleType) -> Self {
        Self {
            type_: Some(Enumeration::new(bundle_type)),
            ..Default::default()
        }
    }

    pub fn bundle_type(&self) -> Option<BundleType> {
        self.type_.as_ref().and_then(|t| t.value)
    }

    pub fn is_transaction(&self) -> bool {
        matches!(self.bundle_type(), Some(BundleType::Transaction))
    }

    pub fn entries(&self) -> &[BundleEntry] {
        &self.entry
    }

    /// Append an entry wrapping `resource`.
    pub fn add_resource(&mut self, resource: Resource) {
        self.entry.push(BundleEntry {
            resource: Some(Box::new(resource)),
            ..Default::default()
        });
    }

    pub fn add_link(&mut self, relation: impl Into<String>, url: impl Into<String>) {
        self.link.push(BundleLink {
            relation: Some(relation.into()),
            url: Some(url.into()),
            ..Default::default()
        });
    }
}

/// Links related to this Bundle or entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BundleLink {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl_is_empty!(BundleLink {
    backbone,
    relation,
    url,
});

/// Entry in the bundle - will have a resource, or information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntry {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link: Vec<BundleLink>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Box<Resource>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<BundleEntrySearch>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<BundleEntryRequest>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<BundleEntryResponse>,
}

impl_is_empty!(BundleEntry {
    backbone,
    link,
    full_url,
    resource,
    search,
    request,
    response,
});

/// Search related information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BundleEntrySearch {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Enumeration<SearchEntryMode>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Decimal>,
}

impl_is_empty!(BundleEntrySearch {
    backbone,
    mode,
    score,
});

/// Transaction related information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntryRequest {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<Enumeration<HttpVerb>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_none_match: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_modified_since: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_match: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_none_exist: Option<String>,
}

impl_is_empty!(BundleEntryRequest {
    backbone,
    method,
    url,
    if_none_match,
    if_modified_since,
    if_match,
    if_none_exist,
});

/// Transaction related information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntryResponse {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

impl_is_empty!(BundleEntryResponse {
    backbone,
    status,
    location,
    etag,
    last_modified,
});
