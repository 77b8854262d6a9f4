//! Version-agnostic building blocks
//!
//! Element metadata, primitives, code sets and the handful of complex
//! datatypes whose shape is identical in DSTU2 and STU3.

pub mod code;
pub mod complex;
pub mod element;
pub mod empty;
pub mod error;
pub mod primitive;

pub use code::FhirCode;
pub use complex::*;
pub use element::*;
pub use empty::{present, IsEmpty};
pub use error::{Error, Result};
pub use primitive::{Enumeration, Primitive};

pub(crate) use code::fhir_code;
pub(crate) use empty::impl_is_empty;
