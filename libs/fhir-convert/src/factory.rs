//! Public entry points
//!
//! The factory resolves the dispatcher for a `(source, target)` pair, binds
//! it with an advisor into a fresh [`ConversionContext`] and runs one
//! conversion. Nothing survives between calls.

use crate::advisor::{BaseAdvisor, ConversionAdvisor};
use crate::config::ConvertorConfig;
use crate::context::{ConversionContext, Dispatcher};
use crate::conv10_30::Dispatcher10_30;
use crate::error::{ConfigError, ConversionError, FailureKind, Result};
use ferrum_models::{present, FhirVersion, VersionPair, VersionedResource, VersionedType};
use std::sync::Arc;
use tracing::{debug, Span};

static DISPATCHERS: &[(VersionPair, &dyn Dispatcher)] = &[
    (
        VersionPair::new(FhirVersion::Dstu2, FhirVersion::Stu3),
        &Dispatcher10_30 as &dyn Dispatcher,
    ),
    (
        VersionPair::new(FhirVersion::Stu3, FhirVersion::Dstu2),
        &Dispatcher10_30 as &dyn Dispatcher,
    ),
];

/// The dispatcher registered for `pair`, if any.
pub fn dispatcher(pair: VersionPair) -> Option<&'static dyn Dispatcher> {
    DISPATCHERS
        .iter()
        .find(|(registered, _)| *registered == pair)
        .map(|(_, dispatcher)| *dispatcher)
}

/// Every registered version pair.
pub fn supported_pairs() -> impl Iterator<Item = VersionPair> {
    DISPATCHERS.iter().map(|(pair, _)| *pair)
}

fn resolve(pair: VersionPair, root: &str) -> Result<&'static dyn Dispatcher> {
    dispatcher(pair).ok_or_else(|| {
        ConversionError::new(
            FailureKind::UnsupportedVersionPair,
            root,
            format!("no converter registered for {pair}"),
        )
    })
}

/// Convert `src` to `target` with the default (fail-fast) advisor.
pub fn convert_resource(
    src: Option<&VersionedResource>,
    target: FhirVersion,
) -> Result<Option<VersionedResource>> {
    convert_resource_with(src, target, &BaseAdvisor::default())
}

#[tracing::instrument(
    name = "convert_resource",
    skip_all,
    fields(
        fhir.target = %target,
        fhir.source = tracing::field::Empty,
        fhir.resource_type = tracing::field::Empty,
    )
)]
pub fn convert_resource_with(
    src: Option<&VersionedResource>,
    target: FhirVersion,
    advisor: &dyn ConversionAdvisor,
) -> Result<Option<VersionedResource>> {
    let Some(src) = present(src) else {
        advisor.handle_null_root("Resource")?;
        return Ok(None);
    };

    let span = Span::current();
    span.record("fhir.source", src.version().name());
    span.record("fhir.resource_type", src.resource_type());

    let pair = VersionPair::new(src.version(), target);
    let dispatcher = resolve(pair, src.resource_type())?;
    debug!(%pair, "converting resource");

    let mut ctx = ConversionContext::new(pair, advisor, dispatcher);
    let converted = ctx.convert_resource(Some(src))?;
    debug!(converted = converted.is_some(), "conversion finished");
    Ok(converted)
}

/// Convert a datatype value to `target` with the default (fail-fast) advisor.
pub fn convert_type(src: Option<&VersionedType>, target: FhirVersion) -> Result<Option<VersionedType>> {
    convert_type_with(src, target, &BaseAdvisor::default())
}

#[tracing::instrument(
    name = "convert_type",
    skip_all,
    fields(
        fhir.target = %target,
        fhir.source = tracing::field::Empty,
        fhir.type_name = tracing::field::Empty,
    )
)]
pub fn convert_type_with(
    src: Option<&VersionedType>,
    target: FhirVersion,
    advisor: &dyn ConversionAdvisor,
) -> Result<Option<VersionedType>> {
    let Some(src) = present(src) else {
        advisor.handle_null_root("Type")?;
        return Ok(None);
    };

    let span = Span::current();
    span.record("fhir.source", src.version().name());
    span.record("fhir.type_name", src.type_name());

    let pair = VersionPair::new(src.version(), target);
    let dispatcher = resolve(pair, src.type_name())?;
    debug!(%pair, "converting datatype");

    let mut ctx = ConversionContext::new(pair, advisor, dispatcher);
    ctx.at(src.type_name(), |ctx| ctx.convert_polymorphic(Some(src)))
}

/// Reusable convertor - owns its advisor, safe to share across threads
#[derive(Clone)]
pub struct VersionConvertor {
    advisor: Arc<dyn ConversionAdvisor>,
}

impl Default for VersionConvertor {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionConvertor {
    pub fn new() -> Self {
        Self::with_advisor(BaseAdvisor::default())
    }

    pub fn with_advisor(advisor: impl ConversionAdvisor + 'static) -> Self {
        Self {
            advisor: Arc::new(advisor),
        }
    }

    pub fn from_config(config: &ConvertorConfig) -> std::result::Result<Self, ConfigError> {
        let advisor = config.compile()?;
        Ok(Self::with_advisor(advisor))
    }

    pub fn advisor(&self) -> &dyn ConversionAdvisor {
        self.advisor.as_ref()
    }

    pub fn convert_resource(
        &self,
        src: Option<&VersionedResource>,
        target: FhirVersion,
    ) -> Result<Option<VersionedResource>> {
        convert_resource_with(src, target, self.advisor.as_ref())
    }

    pub fn convert_batch(
        &self,
        resources: &[VersionedResource],
        target: FhirVersion,
    ) -> Vec<Result<Option<VersionedResource>>> {
        resources
            .iter()
            .map(|r| self.convert_resource(Some(r), target))
            .collect()
    }

    pub fn convert_type(
        &self,
        src: Option<&VersionedType>,
        target: FhirVersion,
    ) -> Result<Option<VersionedType>> {
        convert_type_with(src, target, self.advisor.as_ref())
    }
}

impl std::fmt::Debug for VersionConvertor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionConvertor")
            .field("fail_fast", &self.advisor.fail_fast())
            .finish()
    }
}
