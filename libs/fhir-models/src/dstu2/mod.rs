//! FHIR DSTU2 (1.0.2) models

pub mod bundle;
pub mod communication_request;
pub mod datatypes;
pub mod device_metric;
pub mod resource;

pub use bundle::*;
pub use communication_request::*;
pub use datatypes::*;
pub use device_metric::*;
pub use resource::{OtherResource, Resource};
