//! STU3 DeviceMetric

use super::datatypes::{Identifier, Reference, Timing};
use super::resource::Resource;
use crate::common::{
    fhir_code, impl_is_empty, BackboneElement, CodeableConcept, DomainResourceBase, Enumeration,
    Primitive,
};
use serde::{Deserialize, Serialize};

fhir_code! {
    pub enum DeviceMetricOperationalStatus {
        On => "on",
        Off => "off",
        Standby => "standby",
        EnteredInError => "entered-in-error",
    }
}

fhir_code! {
    pub enum DeviceMetricColor {
        Black => "black",
        Red => "red",
        Green => "green",
        Yellow => "yellow",
        Blue => "blue",
        Magenta => "magenta",
        Cyan => "cyan",
        White => "white",
    }
}

fhir_code! {
    pub enum DeviceMetricCategory {
        Measurement => "measurement",
        Setting => "setting",
        Calculation => "calculation",
        Unspecified => "unspecified",
    }
}

fhir_code! {
    pub enum DeviceMetricCalibrationType {
        Unspecified => "unspecified",
        Offset => "offset",
        Gain => "gain",
        TwoPoint => "two-point",
    }
}

fhir_code! {
    pub enum DeviceMetricCalibrationState {
        NotCalibrated => "not-calibrated",
        CalibrationRequired => "calibration-required",
        Calibrated => "calibrated",
        Unspecified => "unspecified",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceMetric {
    #[serde(flatten)]
    pub base: DomainResourceBase,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contained: Vec<Resource>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub operational_status: Option<Enumeration<DeviceMetricOperationalStatus>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Enumeration<DeviceMetricColor>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Enumeration<DeviceMetricCategory>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_period: Option<Timing>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub calibration: Vec<DeviceMetricCalibration>,
}

impl_is_empty!(DeviceMetric {
    base,
    contained,
    type_,
    identifier,
    unit,
    source,
    parent,
    operational_status,
    color,
    category,
    measurement_period,
    calibration,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceMetricCalibration {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<Enumeration<DeviceMetricCalibrationType>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<Enumeration<DeviceMetricCalibrationState>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<Primitive<String>>,
}

impl_is_empty!(DeviceMetricCalibration {
    backbone,
    type_,
    state,
    time,
});
