//! Primitive values with element-level metadata
//!
//! In FHIR a primitive (a string, a date, a code) is itself an element: it
//! can carry an id and extensions even when its value is absent.

use super::element::Element;
use super::empty::IsEmpty;
use serde::{Deserialize, Serialize};

/// A primitive value plus its own element metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive<T> {
    #[serde(flatten)]
    pub element: Element,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<T>,
}

/// A coded enumeration value. The code itself may carry extensions.
pub type Enumeration<E> = Primitive<E>;

impl<T> Default for Primitive<T> {
    fn default() -> Self {
        Self {
            element: Element::default(),
            value: None,
        }
    }
}

impl<T> Primitive<T> {
    pub fn new(value: T) -> Self {
        Self {
            element: Element::default(),
            value: Some(value),
        }
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

impl<T> From<T> for Primitive<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Primitive<String> {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

impl<T> IsEmpty for Primitive<T> {
    fn is_empty(&self) -> bool {
        self.element.is_empty() && self.value.is_none()
    }
}
