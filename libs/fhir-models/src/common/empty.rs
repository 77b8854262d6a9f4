//! Structural emptiness
//!
//! A FHIR element is "empty" when neither it nor anything below it carries a
//! value or metadata. Converters use this to tell an absent source apart from
//! one that is present but content-free.

use serde_json::Value;

pub trait IsEmpty {
    fn is_empty(&self) -> bool;
}

impl<T: IsEmpty> IsEmpty for Option<T> {
    fn is_empty(&self) -> bool {
        self.as_ref().map_or(true, IsEmpty::is_empty)
    }
}

impl<T: IsEmpty> IsEmpty for Box<T> {
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

impl<T: IsEmpty> IsEmpty for Vec<T> {
    fn is_empty(&self) -> bool {
        self.iter().all(IsEmpty::is_empty)
    }
}

macro_rules! never_empty {
    ($($ty:ty),+) => {
        $(impl IsEmpty for $ty {
            fn is_empty(&self) -> bool {
                false
            }
        })+
    };
}

never_empty!(bool, i32, u32, i64, rust_decimal::Decimal);

impl IsEmpty for String {
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl IsEmpty for Value {
    fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.iter().all(IsEmpty::is_empty),
            Value::Object(map) => map.values().all(IsEmpty::is_empty),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }
}

/// Returns the source only when it exists and is not structurally empty.
pub fn present<T: IsEmpty>(src: Option<&T>) -> Option<&T> {
    src.filter(|s| !s.is_empty())
}

/// Implements [`IsEmpty`] for a struct as "every listed field is empty".
macro_rules! impl_is_empty {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::common::IsEmpty for $ty {
            fn is_empty(&self) -> bool {
                $( $crate::common::IsEmpty::is_empty(&self.$field) )&&+
            }
        }
    };
}

pub(crate) use impl_is_empty;
