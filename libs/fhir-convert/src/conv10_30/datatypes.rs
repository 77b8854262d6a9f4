//! DSTU2 <-> STU3 datatype converters
//!
//! Datatype conversion never fails: everything here maps structurally or
//! through a crosswalk. Polymorphic values go through [`super::types`].

use super::crosswalks::{
    EVENT_TIMING_10_30, EVENT_TIMING_30_10, IDENTIFIER_USE_10_30, IDENTIFIER_USE_30_10,
    UNITS_OF_TIME_10_30, UNITS_OF_TIME_30_10,
};
use crate::context::ConversionContext;
use crate::crosswalk::CodeCrosswalk;
use ferrum_models::{dstu2, present, stu3, Enumeration, FhirCode, IsEmpty, Primitive};

/// Convert a coded value through `table`, keeping the code element's own
/// metadata. An unmatched code leaves the metadata with no value; a result
/// with neither is dropped.
pub fn convert_enumeration<S: FhirCode, T: FhirCode>(
    ctx: &ConversionContext<'_>,
    src: Option<&Enumeration<S>>,
    table: &CodeCrosswalk<S, T>,
) -> Option<Enumeration<T>> {
    let src = present(src)?;
    let mut tgt = Enumeration::default();
    ctx.copy_element(&src.element, &mut tgt.element);
    tgt.value = table.map(src.value);
    (!tgt.is_empty()).then_some(tgt)
}

/// Copy a value whose shape is the same in both releases.
pub fn copy<T: IsEmpty + Clone>(src: Option<&T>) -> Option<T> {
    present(src).cloned()
}

pub fn copy_all<T: IsEmpty + Clone>(src: &[T]) -> Vec<T> {
    src.iter().filter_map(|t| copy(Some(t))).collect()
}

pub fn primitive<T: Clone>(src: Option<&Primitive<T>>) -> Option<Primitive<T>> {
    present(src).cloned()
}

/// Copy a plain string field; an empty string counts as absent.
pub fn string(src: Option<&str>) -> Option<String> {
    src.filter(|s| !s.is_empty()).map(str::to_string)
}

pub fn identifier_to_stu3(
    ctx: &ConversionContext<'_>,
    src: Option<&dstu2::Identifier>,
) -> Option<stu3::Identifier> {
    let src = present(src)?;
    let mut tgt = stu3::Identifier::default();
    ctx.copy_element(&src.element, &mut tgt.element);
    tgt.use_ = convert_enumeration(ctx, src.use_.as_ref(), &IDENTIFIER_USE_10_30);
    tgt.type_ = copy(src.type_.as_ref());
    tgt.system = string(src.system.as_deref());
    tgt.value = string(src.value.as_deref());
    tgt.period = copy(src.period.as_ref());
    tgt.assigner = reference_to_stu3(ctx, src.assigner.as_deref()).map(Box::new);
    Some(tgt)
}

pub fn identifier_to_dstu2(
    ctx: &ConversionContext<'_>,
    src: Option<&stu3::Identifier>,
) -> Option<dstu2::Identifier> {
    let src = present(src)?;
    let mut tgt = dstu2::Identifier::default();
    ctx.copy_element(&src.element, &mut tgt.element);
    tgt.use_ = convert_enumeration(ctx, src.use_.as_ref(), &IDENTIFIER_USE_30_10);
    tgt.type_ = copy(src.type_.as_ref());
    tgt.system = string(src.system.as_deref());
    tgt.value = string(src.value.as_deref());
    tgt.period = copy(src.period.as_ref());
    tgt.assigner = reference_to_dstu2(ctx, src.assigner.as_deref()).map(Box::new);
    present(Some(&tgt))?;
    Some(tgt)
}

pub fn identifiers_to_stu3(ctx: &ConversionContext<'_>, src: &[dstu2::Identifier]) -> Vec<stu3::Identifier> {
    src.iter().filter_map(|t| identifier_to_stu3(ctx, Some(t))).collect()
}

pub fn identifiers_to_dstu2(ctx: &ConversionContext<'_>, src: &[stu3::Identifier]) -> Vec<dstu2::Identifier> {
    src.iter().filter_map(|t| identifier_to_dstu2(ctx, Some(t))).collect()
}

/// References are converted structurally; the target is never resolved.
pub fn reference_to_stu3(
    ctx: &ConversionContext<'_>,
    src: Option<&dstu2::Reference>,
) -> Option<stu3::Reference> {
    let src = present(src)?;
    let mut tgt = stu3::Reference::default();
    ctx.copy_element(&src.element, &mut tgt.element);
    tgt.reference = string(src.reference.as_deref());
    tgt.display = string(src.display.as_deref());
    Some(tgt)
}

/// `Reference.identifier` has no DSTU2 counterpart and is dropped.
pub fn reference_to_dstu2(
    ctx: &ConversionContext<'_>,
    src: Option<&stu3::Reference>,
) -> Option<dstu2::Reference> {
    let src = present(src)?;
    let mut tgt = dstu2::Reference::default();
    ctx.copy_element(&src.element, &mut tgt.element);
    tgt.reference = string(src.reference.as_deref());
    tgt.display = string(src.display.as_deref());
    present(Some(&tgt))?;
    Some(tgt)
}

pub fn references_to_stu3(ctx: &ConversionContext<'_>, src: &[dstu2::Reference]) -> Vec<stu3::Reference> {
    src.iter().filter_map(|t| reference_to_stu3(ctx, Some(t))).collect()
}

pub fn references_to_dstu2(ctx: &ConversionContext<'_>, src: &[stu3::Reference]) -> Vec<dstu2::Reference> {
    src.iter().filter_map(|t| reference_to_dstu2(ctx, Some(t))).collect()
}

pub fn timing_to_stu3(ctx: &ConversionContext<'_>, src: Option<&dstu2::Timing>) -> Option<stu3::Timing> {
    let src = present(src)?;
    let mut tgt = stu3::Timing::default();
    ctx.copy_element(&src.element, &mut tgt.element);
    tgt.event = src.event.iter().filter_map(|e| primitive(Some(e))).collect();
    tgt.repeat = timing_repeat_to_stu3(ctx, src.repeat.as_ref());
    tgt.code = copy(src.code.as_ref());
    Some(tgt)
}

pub fn timing_to_dstu2(ctx: &ConversionContext<'_>, src: Option<&stu3::Timing>) -> Option<dstu2::Timing> {
    let src = present(src)?;
    let mut tgt = dstu2::Timing::default();
    ctx.copy_element(&src.element, &mut tgt.element);
    tgt.event = src.event.iter().filter_map(|e| primitive(Some(e))).collect();
    tgt.repeat = timing_repeat_to_dstu2(ctx, src.repeat.as_ref());
    tgt.code = copy(src.code.as_ref());
    present(Some(&tgt))?;
    Some(tgt)
}

fn timing_repeat_to_stu3(
    ctx: &ConversionContext<'_>,
    src: Option<&dstu2::TimingRepeat>,
) -> Option<stu3::TimingRepeat> {
    let src = present(src)?;
    let mut tgt = stu3::TimingRepeat::default();
    ctx.copy_element(&src.element, &mut tgt.element);
    tgt.bounds = copy(src.bounds.as_ref());
    tgt.count = src.count;
    tgt.duration = src.duration;
    tgt.duration_max = src.duration_max;
    tgt.duration_unit = convert_enumeration(ctx, src.duration_units.as_ref(), &UNITS_OF_TIME_10_30);
    tgt.frequency = src.frequency;
    tgt.frequency_max = src.frequency_max;
    tgt.period = src.period;
    tgt.period_max = src.period_max;
    tgt.period_unit = convert_enumeration(ctx, src.period_units.as_ref(), &UNITS_OF_TIME_10_30);
    tgt.when = convert_enumeration(ctx, src.when.as_ref(), &EVENT_TIMING_10_30)
        .into_iter()
        .collect();
    Some(tgt)
}

/// Drops `count_max`, `day_of_week`, `time_of_day` and `offset`; only the
/// first `when` survives.
fn timing_repeat_to_dstu2(
    ctx: &ConversionContext<'_>,
    src: Option<&stu3::TimingRepeat>,
) -> Option<dstu2::TimingRepeat> {
    let src = present(src)?;
    let mut tgt = dstu2::TimingRepeat::default();
    ctx.copy_element(&src.element, &mut tgt.element);
    tgt.bounds = copy(src.bounds.as_ref());
    tgt.count = src.count;
    tgt.duration = src.duration;
    tgt.duration_max = src.duration_max;
    tgt.duration_units = convert_enumeration(ctx, src.duration_unit.as_ref(), &UNITS_OF_TIME_30_10);
    tgt.frequency = src.frequency;
    tgt.frequency_max = src.frequency_max;
    tgt.period = src.period;
    tgt.period_max = src.period_max;
    tgt.period_units = convert_enumeration(ctx, src.period_unit.as_ref(), &UNITS_OF_TIME_30_10);
    tgt.when = convert_enumeration(ctx, src.when.first(), &EVENT_TIMING_30_10);
    present(Some(&tgt))?;
    Some(tgt)
}
