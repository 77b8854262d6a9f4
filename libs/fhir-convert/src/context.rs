//! Per-conversion state
//!
//! A [`ConversionContext`] lives for exactly one conversion call. It binds the
//! version pair, the advisor and the dispatcher, tracks the path of the
//! element being converted, and exposes the structural copy primitives every
//! converter shares.

use crate::advisor::ConversionAdvisor;
use crate::error::{ConversionError, FailureKind, Result};
use ferrum_models::{
    BackboneElement, DomainResourceBase, Element, FhirVersion, IsEmpty, ResourceBase,
    VersionPair, VersionedResource, VersionedType,
};
use tracing::warn;

/// Routes version-tagged values to the converters of one release pair.
pub trait Dispatcher: Send + Sync {
    fn convert_resource(
        &self,
        ctx: &mut ConversionContext<'_>,
        src: &VersionedResource,
    ) -> Result<Option<VersionedResource>>;

    fn convert_type(
        &self,
        ctx: &mut ConversionContext<'_>,
        src: &VersionedType,
    ) -> Result<Option<VersionedType>>;
}

pub struct ConversionContext<'a> {
    pair: VersionPair,
    advisor: &'a dyn ConversionAdvisor,
    dispatcher: &'a dyn Dispatcher,
    path: Vec<String>,
}

impl<'a> ConversionContext<'a> {
    pub fn new(
        pair: VersionPair,
        advisor: &'a dyn ConversionAdvisor,
        dispatcher: &'a dyn Dispatcher,
    ) -> Self {
        Self {
            pair,
            advisor,
            dispatcher,
            path: Vec::new(),
        }
    }

    pub fn pair(&self) -> VersionPair {
        self.pair
    }

    pub fn target(&self) -> FhirVersion {
        self.pair.target
    }

    pub fn advisor(&self) -> &'a dyn ConversionAdvisor {
        self.advisor
    }

    /// Dotted path of the element currently being converted.
    pub fn path(&self) -> String {
        self.path.join(".")
    }

    /// Run `f` one path segment deeper.
    pub fn at<R>(&mut self, segment: &str, f: impl FnOnce(&mut Self) -> R) -> R {
        self.path.push(segment.to_string());
        let result = f(self);
        self.path.pop();
        result
    }

    /// Run `f` at `field[index]`.
    pub fn at_index<R>(&mut self, field: &str, index: usize, f: impl FnOnce(&mut Self) -> R) -> R {
        self.at(&format!("{field}[{index}]"), f)
    }

    /// Run `f` for a resource. Only the outermost resource names the path
    /// root; nested resources are located by the field that holds them.
    pub fn at_resource<R>(&mut self, resource_type: &str, f: impl FnOnce(&mut Self) -> R) -> R {
        if self.path.is_empty() {
            self.at(resource_type, f)
        } else {
            f(self)
        }
    }

    pub fn fail(&self, kind: FailureKind, message: impl Into<String>) -> ConversionError {
        ConversionError::new(kind, self.path(), message)
    }

    pub fn copy_resource(&self, src: &ResourceBase, tgt: &mut ResourceBase) {
        tgt.clone_from(src);
    }

    /// Copies id, meta, narrative and extensions. Contained resources are
    /// release-specific and converted by the resource converter itself.
    pub fn copy_domain_resource(&self, src: &DomainResourceBase, tgt: &mut DomainResourceBase) {
        tgt.clone_from(src);
    }

    pub fn copy_element(&self, src: &Element, tgt: &mut Element) {
        tgt.clone_from(src);
    }

    pub fn copy_backbone_element(&self, src: &BackboneElement, tgt: &mut BackboneElement) {
        tgt.clone_from(src);
    }

    /// Convert a polymorphic value through the bound dispatcher.
    ///
    /// Absent and structurally empty values short-circuit to `None`.
    pub fn convert_polymorphic(&mut self, value: Option<&VersionedType>) -> Result<Option<VersionedType>> {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            return Ok(None);
        };
        self.check_source(value.version())?;
        let dispatcher = self.dispatcher;
        dispatcher.convert_type(self, value)
    }

    /// Convert a resource through the bound dispatcher.
    pub fn convert_resource(
        &mut self,
        resource: Option<&VersionedResource>,
    ) -> Result<Option<VersionedResource>> {
        let Some(resource) = resource.filter(|r| !r.is_empty()) else {
            return Ok(None);
        };
        self.check_source(resource.version())?;
        let dispatcher = self.dispatcher;
        dispatcher.convert_resource(self, resource)
    }

    /// Hand a datatype with no converter to the advisor.
    pub fn unknown_type(&mut self, value: VersionedType) -> Result<Option<VersionedType>> {
        let path = self.path();
        let target = self.target();
        match self.advisor.handle_unknown_type(&path, &value, target)? {
            Some(converted) if converted.version() != target => Err(ConversionError::new(
                FailureKind::VersionMismatch,
                path,
                format!(
                    "advisor returned a {} {} where {} was expected",
                    converted.version(),
                    converted.type_name(),
                    target
                ),
            )),
            Some(converted) => Ok(Some(converted)),
            None => {
                warn!(path = %path, type_name = value.type_name(), "dropped datatype with no converter");
                Ok(None)
            }
        }
    }

    /// Hand a resource with no converter to the advisor.
    pub fn unknown_resource(
        &mut self,
        resource: VersionedResource,
    ) -> Result<Option<VersionedResource>> {
        let path = self.path();
        let target = self.target();
        match self
            .advisor
            .handle_unknown_resource(&path, &resource, target)?
        {
            Some(converted) if converted.version() != target => Err(ConversionError::new(
                FailureKind::VersionMismatch,
                path,
                format!(
                    "advisor returned a {} {} where {} was expected",
                    converted.version(),
                    converted.resource_type(),
                    target
                ),
            )),
            Some(converted) => Ok(Some(converted)),
            None => {
                warn!(
                    path = %path,
                    resource_type = resource.resource_type(),
                    "dropped resource with no converter"
                );
                Ok(None)
            }
        }
    }

    fn check_source(&self, version: FhirVersion) -> Result<()> {
        if version == self.pair.source {
            Ok(())
        } else {
            Err(self.fail(
                FailureKind::VersionMismatch,
                format!("expected a {} value, got {}", self.pair.source, version),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::BaseAdvisor;
    use ferrum_models::{dstu2, stu3, Extension};
    use serde_json::json;

    struct NoopDispatcher;

    impl Dispatcher for NoopDispatcher {
        fn convert_resource(
            &self,
            _ctx: &mut ConversionContext<'_>,
            _src: &VersionedResource,
        ) -> Result<Option<VersionedResource>> {
            Ok(None)
        }

        fn convert_type(
            &self,
            ctx: &mut ConversionContext<'_>,
            src: &VersionedType,
        ) -> Result<Option<VersionedType>> {
            ctx.unknown_type(src.clone())
        }
    }

    fn pair() -> VersionPair {
        VersionPair::new(FhirVersion::Dstu2, FhirVersion::Stu3)
    }

    #[test]
    fn test_path_rendering() {
        let advisor = BaseAdvisor::default();
        let mut ctx = ConversionContext::new(pair(), &advisor, &NoopDispatcher);
        let path = ctx.at_resource("Bundle", |ctx| {
            ctx.at_index("entry", 2, |ctx| {
                ctx.at("resource", |ctx| {
                    ctx.at_resource("CommunicationRequest", |ctx| {
                        ctx.at_index("payload", 0, |ctx| ctx.at("content", |ctx| ctx.path()))
                    })
                })
            })
        });
        assert_eq!(path, "Bundle.entry[2].resource.payload[0].content");
        assert_eq!(ctx.path(), "");
    }

    #[test]
    fn test_path_unwinds_after_failure() {
        let advisor = BaseAdvisor::default();
        let mut ctx = ConversionContext::new(pair(), &advisor, &NoopDispatcher);
        let result: Result<()> = ctx.at("scheduled", |ctx| {
            Err(ctx.fail(FailureKind::UnhandledVariant, "boom"))
        });
        assert_eq!(result.unwrap_err().path, "scheduled");
        assert_eq!(ctx.path(), "");
    }

    #[test]
    fn test_copy_element_keeps_metadata() {
        let advisor = BaseAdvisor::default();
        let ctx = ConversionContext::new(pair(), &advisor, &NoopDispatcher);
        let src = Element {
            id: Some("e1".to_string()),
            extension: vec![Extension::new("http://example.org/x", json!({"valueBoolean": true}))],
        };
        let mut tgt = Element::default();
        ctx.copy_element(&src, &mut tgt);
        assert_eq!(tgt, src);
    }

    #[test]
    fn test_polymorphic_empty_short_circuits() {
        let advisor = BaseAdvisor::default();
        let mut ctx = ConversionContext::new(pair(), &advisor, &NoopDispatcher);
        let empty = VersionedType::from(dstu2::Type::String(Default::default()));
        assert_eq!(ctx.convert_polymorphic(Some(&empty)).unwrap(), None);
        assert_eq!(ctx.convert_polymorphic(None).unwrap(), None);
    }

    #[test]
    fn test_polymorphic_rejects_wrong_source_version() {
        let advisor = BaseAdvisor::default();
        let mut ctx = ConversionContext::new(pair(), &advisor, &NoopDispatcher);
        let value = VersionedType::from(stu3::Type::String("x".into()));
        let err = ctx.convert_polymorphic(Some(&value)).unwrap_err();
        assert_eq!(err.kind, FailureKind::VersionMismatch);
    }

    struct WrongVersionAdvisor;

    impl ConversionAdvisor for WrongVersionAdvisor {
        fn handle_unknown_type(
            &self,
            _path: &str,
            value: &VersionedType,
            _target: FhirVersion,
        ) -> Result<Option<VersionedType>> {
            Ok(Some(value.clone()))
        }
    }

    #[test]
    fn test_advisor_result_must_match_target() {
        let advisor = WrongVersionAdvisor;
        let mut ctx = ConversionContext::new(pair(), &advisor, &NoopDispatcher);
        let value = VersionedType::from(dstu2::Type::String("x".into()));
        let err = ctx.convert_polymorphic(Some(&value)).unwrap_err();
        assert_eq!(err.kind, FailureKind::VersionMismatch);
    }
}
