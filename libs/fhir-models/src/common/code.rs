//! Coded enumerations
//!
//! Every FHIR code set is a closed Rust enum implementing [`FhirCode`]. The
//! `fhir_code!` macro generates the enum, its serde names and the trait impl
//! from a single `Variant => "code"` list so the three never drift apart.

use std::fmt::Debug;
use std::hash::Hash;

/// A value drawn from a fixed, version-specific FHIR code set.
pub trait FhirCode: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Every member of the code set, in declaration order.
    const VALUES: &'static [Self];

    /// The wire code (`"in-progress"`, `"two-point"`, ...).
    fn code(self) -> &'static str;

    /// Parse a wire code. Unknown codes yield `None`.
    fn from_code(code: &str) -> Option<Self>;
}

macro_rules! fhir_code {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $code)] $variant ),+
        }

        impl $crate::common::FhirCode for $name {
            const VALUES: &'static [Self] = &[$(Self::$variant),+];

            fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code),+
                }
            }

            fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl $crate::common::IsEmpty for $name {
            fn is_empty(&self) -> bool {
                false
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::common::FhirCode::code(*self))
            }
        }
    };
}

pub(crate) use fhir_code;
