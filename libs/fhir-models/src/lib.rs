//! FHIR data models
//!
//! Strongly-typed Rust structures for the FHIR DSTU2 and STU3 releases.
//!
//! # Module Organization
//!
//! - `common`: element metadata, primitives, code sets and the datatypes
//!   whose shape is identical in both releases
//! - `dstu2`, `stu3`: release-specific datatypes and resources
//! - `version`: release identifiers
//! - `versioned`: resources and datatypes tagged with their release
//!
//! Only the resources the conversion engine handles have typed models. Any
//! other resource kind deserializes into an `OtherResource` that keeps its
//! JSON content.
//!
//! # Example
//!
//! ```rust
//! use ferrum_models::dstu2::{CommunicationRequestStatus, Resource};
//! use serde_json::json;
//!
//! let resource = Resource::from_value(json!({
//!     "resourceType": "CommunicationRequest",
//!     "id": "cr-1",
//!     "status": {"value": "in-progress"}
//! }))
//! .unwrap();
//!
//! let Resource::CommunicationRequest(request) = resource else {
//!     panic!("expected a CommunicationRequest");
//! };
//! assert_eq!(
//!     request.status.and_then(|s| s.value),
//!     Some(CommunicationRequestStatus::InProgress)
//! );
//! ```

pub mod common;
pub mod dstu2;
pub mod stu3;
pub mod version;
pub mod versioned;

// Re-export commonly used types
pub use common::*;
pub use version::{FhirVersion, VersionPair};
pub use versioned::{VersionedResource, VersionedType};
