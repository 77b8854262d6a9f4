//! FHIR version conversion
//!
//! Converts resources and datatypes between FHIR DSTU2 (1.0.2) and STU3
//! (3.0.x). Content with an exact counterpart is carried over; content
//! without one is approximated through fixed crosswalk tables or dropped.
//!
//! # Module Organization
//!
//! - `factory`: entry points (`convert_resource`, `convert_type`,
//!   `VersionConvertor`) and the dispatcher registry
//! - `context`: per-call state, copy primitives and the `Dispatcher` trait
//! - `advisor`: policy for absent roots and unknown resources or datatypes
//! - `crosswalk`: crosswalk table types and lookup by id
//! - `conv10_30`: the DSTU2 <-> STU3 converters and tables
//! - `config`: YAML configuration compiled into an advisor
//!
//! # Example
//!
//! ```rust
//! use ferrum_convert::{convert_resource, BaseAdvisor, convert_resource_with};
//! use ferrum_models::dstu2::{CommunicationRequest, CommunicationRequestStatus, Resource};
//! use ferrum_models::stu3::{self, RequestStatus};
//! use ferrum_models::{Enumeration, FhirVersion, VersionedResource};
//!
//! let request = CommunicationRequest {
//!     status: Some(Enumeration::new(CommunicationRequestStatus::Accepted)),
//!     ..Default::default()
//! };
//! let src = VersionedResource::from(Resource::from(request));
//!
//! let converted = convert_resource(Some(&src), FhirVersion::Stu3)
//!     .unwrap()
//!     .and_then(VersionedResource::into_stu3);
//! let Some(stu3::Resource::CommunicationRequest(converted)) = converted else {
//!     panic!("expected an STU3 CommunicationRequest");
//! };
//! assert_eq!(converted.status.and_then(|s| s.value), Some(RequestStatus::Active));
//!
//! // An absent root fails under the default advisor and is absorbed by a
//! // lenient one.
//! assert!(convert_resource(None, FhirVersion::Stu3).is_err());
//! assert!(convert_resource_with(None, FhirVersion::Stu3, &BaseAdvisor::lenient())
//!     .unwrap()
//!     .is_none());
//! ```

pub mod advisor;
pub mod config;
pub mod context;
pub mod conv10_30;
pub mod crosswalk;
pub mod error;
pub mod factory;

pub use advisor::{BaseAdvisor, ConversionAdvisor};
pub use config::{AdvisorConfig, ConvertorConfig, ConvertorConfigBuilder, Preset};
pub use context::{ConversionContext, Dispatcher};
pub use error::{ConfigError, ConversionError, FailureKind, Result};
pub use factory::{
    convert_resource, convert_resource_with, convert_type, convert_type_with, VersionConvertor,
};
