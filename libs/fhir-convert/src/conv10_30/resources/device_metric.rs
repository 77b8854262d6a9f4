//! DeviceMetric

use super::{contained_to_dstu2, contained_to_stu3};
use crate::context::ConversionContext;
use crate::conv10_30::crosswalks::{
    DEVICE_METRIC_CALIBRATION_STATE_10_30, DEVICE_METRIC_CALIBRATION_STATE_30_10,
    DEVICE_METRIC_CALIBRATION_TYPE_10_30, DEVICE_METRIC_CALIBRATION_TYPE_30_10,
    DEVICE_METRIC_CATEGORY_10_30, DEVICE_METRIC_CATEGORY_30_10, DEVICE_METRIC_COLOR_10_30,
    DEVICE_METRIC_COLOR_30_10, DEVICE_METRIC_OPERATIONAL_STATUS_10_30,
    DEVICE_METRIC_OPERATIONAL_STATUS_30_10,
};
use crate::conv10_30::datatypes::{
    convert_enumeration, copy, identifier_to_dstu2, identifier_to_stu3, primitive,
    reference_to_dstu2, reference_to_stu3, timing_to_dstu2, timing_to_stu3,
};
use crate::error::Result;
use ferrum_models::{dstu2, present, stu3};

pub fn to_stu3(
    ctx: &mut ConversionContext<'_>,
    src: Option<&dstu2::DeviceMetric>,
) -> Result<Option<stu3::DeviceMetric>> {
    let Some(src) = present(src) else {
        return Ok(None);
    };
    let mut tgt = stu3::DeviceMetric::default();
    ctx.copy_domain_resource(&src.base, &mut tgt.base);
    tgt.contained = contained_to_stu3(ctx, &src.contained)?;
    tgt.type_ = copy(src.type_.as_ref());
    tgt.identifier = identifier_to_stu3(ctx, src.identifier.as_ref());
    tgt.unit = copy(src.unit.as_ref());
    tgt.source = reference_to_stu3(ctx, src.source.as_ref());
    tgt.parent = reference_to_stu3(ctx, src.parent.as_ref());
    tgt.operational_status = convert_enumeration(
        ctx,
        src.operational_status.as_ref(),
        &DEVICE_METRIC_OPERATIONAL_STATUS_10_30,
    );
    tgt.color = convert_enumeration(ctx, src.color.as_ref(), &DEVICE_METRIC_COLOR_10_30);
    tgt.category = convert_enumeration(ctx, src.category.as_ref(), &DEVICE_METRIC_CATEGORY_10_30);
    tgt.measurement_period = timing_to_stu3(ctx, src.measurement_period.as_ref());
    tgt.calibration = src
        .calibration
        .iter()
        .filter_map(|c| calibration_to_stu3(ctx, Some(c)))
        .collect();
    Ok(Some(tgt))
}

pub fn to_dstu2(
    ctx: &mut ConversionContext<'_>,
    src: Option<&stu3::DeviceMetric>,
) -> Result<Option<dstu2::DeviceMetric>> {
    let Some(src) = present(src) else {
        return Ok(None);
    };
    let mut tgt = dstu2::DeviceMetric::default();
    ctx.copy_domain_resource(&src.base, &mut tgt.base);
    tgt.contained = contained_to_dstu2(ctx, &src.contained)?;
    tgt.type_ = copy(src.type_.as_ref());
    tgt.identifier = identifier_to_dstu2(ctx, src.identifier.as_ref());
    tgt.unit = copy(src.unit.as_ref());
    tgt.source = reference_to_dstu2(ctx, src.source.as_ref());
    tgt.parent = reference_to_dstu2(ctx, src.parent.as_ref());
    tgt.operational_status = convert_enumeration(
        ctx,
        src.operational_status.as_ref(),
        &DEVICE_METRIC_OPERATIONAL_STATUS_30_10,
    );
    tgt.color = convert_enumeration(ctx, src.color.as_ref(), &DEVICE_METRIC_COLOR_30_10);
    tgt.category = convert_enumeration(ctx, src.category.as_ref(), &DEVICE_METRIC_CATEGORY_30_10);
    tgt.measurement_period = timing_to_dstu2(ctx, src.measurement_period.as_ref());
    tgt.calibration = src
        .calibration
        .iter()
        .filter_map(|c| calibration_to_dstu2(ctx, Some(c)))
        .collect();
    Ok(Some(tgt))
}

pub fn calibration_to_stu3(
    ctx: &ConversionContext<'_>,
    src: Option<&dstu2::DeviceMetricCalibration>,
) -> Option<stu3::DeviceMetricCalibration> {
    let src = present(src)?;
    let mut tgt = stu3::DeviceMetricCalibration::default();
    ctx.copy_backbone_element(&src.backbone, &mut tgt.backbone);
    tgt.type_ = convert_enumeration(ctx, src.type_.as_ref(), &DEVICE_METRIC_CALIBRATION_TYPE_10_30);
    tgt.state = convert_enumeration(ctx, src.state.as_ref(), &DEVICE_METRIC_CALIBRATION_STATE_10_30);
    tgt.time = primitive(src.time.as_ref());
    Some(tgt)
}

pub fn calibration_to_dstu2(
    ctx: &ConversionContext<'_>,
    src: Option<&stu3::DeviceMetricCalibration>,
) -> Option<dstu2::DeviceMetricCalibration> {
    let src = present(src)?;
    let mut tgt = dstu2::DeviceMetricCalibration::default();
    ctx.copy_backbone_element(&src.backbone, &mut tgt.backbone);
    tgt.type_ = convert_enumeration(ctx, src.type_.as_ref(), &DEVICE_METRIC_CALIBRATION_TYPE_30_10);
    tgt.state = convert_enumeration(ctx, src.state.as_ref(), &DEVICE_METRIC_CALIBRATION_STATE_30_10);
    tgt.time = primitive(src.time.as_ref());
    Some(tgt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::BaseAdvisor;
    use crate::conv10_30::Dispatcher10_30;
    use ferrum_models::{Enumeration, FhirVersion, VersionPair};

    #[test]
    fn test_entered_in_error_has_no_dstu2_status() {
        let advisor = BaseAdvisor::default();
        let mut ctx = ConversionContext::new(
            VersionPair::new(FhirVersion::Stu3, FhirVersion::Dstu2),
            &advisor,
            &Dispatcher10_30,
        );
        let src = stu3::DeviceMetric {
            operational_status: Some(Enumeration::new(
                stu3::DeviceMetricOperationalStatus::EnteredInError,
            )),
            color: Some(Enumeration::new(stu3::DeviceMetricColor::Cyan)),
            ..Default::default()
        };
        let tgt = to_dstu2(&mut ctx, Some(&src)).unwrap().unwrap();
        assert_eq!(tgt.operational_status, None);
        assert_eq!(
            tgt.color.and_then(|c| c.value),
            Some(dstu2::DeviceMetricColor::Cyan)
        );
    }

    #[test]
    fn test_empty_calibration_is_skipped() {
        let advisor = BaseAdvisor::default();
        let ctx = ConversionContext::new(
            VersionPair::new(FhirVersion::Dstu2, FhirVersion::Stu3),
            &advisor,
            &Dispatcher10_30,
        );
        assert!(calibration_to_stu3(&ctx, Some(&dstu2::DeviceMetricCalibration::default())).is_none());
    }
}
