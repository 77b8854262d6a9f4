//! Conversion advisors
//!
//! An advisor decides what happens when the engine meets something it has no
//! converter for: an absent root, a resource kind outside the typed set, or a
//! datatype variant with no counterpart in the target release. Every default
//! method honours [`ConversionAdvisor::fail_fast`].

use crate::error::{ConversionError, Result};
use ferrum_models::{FhirVersion, VersionedResource, VersionedType};
use std::collections::BTreeSet;

pub trait ConversionAdvisor: Send + Sync {
    /// Whether unhandled cases raise a failure (`true`) or yield an absent
    /// result (`false`).
    fn fail_fast(&self) -> bool {
        true
    }

    /// Called when the value handed to the factory is absent or empty.
    fn handle_null_root(&self, path: &str) -> Result<()> {
        if self.fail_fast() {
            Err(ConversionError::invalid_root(
                path,
                "cannot convert an absent or empty root value",
            ))
        } else {
            Ok(())
        }
    }

    /// Called for a resource kind the dispatcher has no converter for.
    ///
    /// A returned resource must belong to `target`.
    fn handle_unknown_resource(
        &self,
        path: &str,
        resource: &VersionedResource,
        target: FhirVersion,
    ) -> Result<Option<VersionedResource>> {
        if self.fail_fast() {
            Err(ConversionError::unhandled_variant(
                path,
                format!(
                    "no {} -> {} converter for resource type {}",
                    resource.version(),
                    target,
                    resource.resource_type()
                ),
            ))
        } else {
            Ok(None)
        }
    }

    /// Called for a datatype variant the dispatcher has no converter for.
    ///
    /// A returned value must belong to `target`.
    fn handle_unknown_type(
        &self,
        path: &str,
        value: &VersionedType,
        target: FhirVersion,
    ) -> Result<Option<VersionedType>> {
        if self.fail_fast() {
            Err(ConversionError::unhandled_variant(
                path,
                format!(
                    "no {} -> {} converter for datatype {}",
                    value.version(),
                    target,
                    value.type_name()
                ),
            ))
        } else {
            Ok(None)
        }
    }

    /// Bundle entries whose resource this returns `true` for are skipped.
    fn ignore_entry(&self, _path: &str, _resource_type: &str) -> bool {
        false
    }
}

/// The built-in advisor: a fail-fast flag plus a set of resource types to
/// leave out of converted bundles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseAdvisor {
    fail_fast: bool,
    ignored_entry_types: BTreeSet<String>,
}

impl Default for BaseAdvisor {
    fn default() -> Self {
        Self::new(true)
    }
}

impl BaseAdvisor {
    pub fn new(fail_fast: bool) -> Self {
        Self {
            fail_fast,
            ignored_entry_types: BTreeSet::new(),
        }
    }

    pub fn lenient() -> Self {
        Self::new(false)
    }

    pub fn with_ignored_entry_type(mut self, resource_type: impl Into<String>) -> Self {
        self.ignored_entry_types.insert(resource_type.into());
        self
    }

    pub fn ignored_entry_types(&self) -> impl Iterator<Item = &str> {
        self.ignored_entry_types.iter().map(String::as_str)
    }
}

impl ConversionAdvisor for BaseAdvisor {
    fn fail_fast(&self) -> bool {
        self.fail_fast
    }

    fn ignore_entry(&self, _path: &str, resource_type: &str) -> bool {
        self.ignored_entry_types.contains(resource_type)
    }
}
