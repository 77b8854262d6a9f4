//! DSTU2 <-> STU3 crosswalk tables
//!
//! Each table exists once per direction. Ids follow `<CodeSet>_10_30` for
//! DSTU2 -> STU3 and `<CodeSet>_30_10` for STU3 -> DSTU2.

use crate::crosswalk::{CodeCrosswalk, ConceptCrosswalk, ConceptReverseCrosswalk, CrosswalkTable};
use ferrum_models::dstu2::{
    BundleType as R2BundleType, CommunicationRequestStatus,
    DeviceMetricCalibrationState as R2CalibrationState,
    DeviceMetricCalibrationType as R2CalibrationType, DeviceMetricCategory as R2Category,
    DeviceMetricColor as R2Color, DeviceMetricOperationalStatus as R2OperationalStatus,
    EventTiming as R2EventTiming, HttpVerb as R2HttpVerb, IdentifierUse as R2IdentifierUse,
    SearchEntryMode as R2SearchEntryMode, UnitsOfTime as R2UnitsOfTime,
};
use ferrum_models::stu3::{
    BundleType as R3BundleType, DeviceMetricCalibrationState as R3CalibrationState,
    DeviceMetricCalibrationType as R3CalibrationType, DeviceMetricCategory as R3Category,
    DeviceMetricColor as R3Color, DeviceMetricOperationalStatus as R3OperationalStatus,
    EventTiming as R3EventTiming, HttpVerb as R3HttpVerb, IdentifierUse as R3IdentifierUse,
    RequestPriority, RequestStatus, SearchEntryMode as R3SearchEntryMode,
    UnitsOfTime as R3UnitsOfTime,
};
use phf::phf_map;

/// Pairs for codes that keep their variant name across releases.
macro_rules! same_codes {
    ($src:ident => $tgt:ident: $($variant:ident),+ $(,)?) => {
        &[$(($src::$variant, $tgt::$variant)),+]
    };
}

const PRIORITY_ROUTINE: &str = "http://hl7.org/fhir/diagnostic-order-priority|routine";
const PRIORITY_URGENT: &str = "http://hl7.org/fhir/diagnostic-order-priority|urgent";
const PRIORITY_STAT: &str = "http://hl7.org/fhir/diagnostic-order-priority|stat";
const PRIORITY_ASAP: &str = "http://hl7.org/fhir/diagnostic-order-priority|asap";

// CommunicationRequest

pub static COMMUNICATION_REQUEST_STATUS_10_30: CodeCrosswalk<CommunicationRequestStatus, RequestStatus> =
    CodeCrosswalk {
        id: "CommunicationRequestStatus_10_30",
        pairs: &[
            (CommunicationRequestStatus::Proposed, RequestStatus::Draft),
            (CommunicationRequestStatus::Planned, RequestStatus::Active),
            (CommunicationRequestStatus::Requested, RequestStatus::Active),
            (CommunicationRequestStatus::Received, RequestStatus::Active),
            (CommunicationRequestStatus::Accepted, RequestStatus::Active),
            (CommunicationRequestStatus::InProgress, RequestStatus::Active),
            (CommunicationRequestStatus::Completed, RequestStatus::Completed),
            (CommunicationRequestStatus::Suspended, RequestStatus::Suspended),
            (CommunicationRequestStatus::Rejected, RequestStatus::EnteredInError),
        ],
        default: None,
        non_invertible: &[
            CommunicationRequestStatus::Planned,
            CommunicationRequestStatus::Requested,
            CommunicationRequestStatus::Received,
            CommunicationRequestStatus::Accepted,
            CommunicationRequestStatus::Failed,
        ],
    };

pub static COMMUNICATION_REQUEST_STATUS_30_10: CodeCrosswalk<RequestStatus, CommunicationRequestStatus> =
    CodeCrosswalk {
        id: "CommunicationRequestStatus_30_10",
        pairs: &[
            (RequestStatus::Draft, CommunicationRequestStatus::Proposed),
            (RequestStatus::Active, CommunicationRequestStatus::InProgress),
            (RequestStatus::Completed, CommunicationRequestStatus::Completed),
            (RequestStatus::Suspended, CommunicationRequestStatus::Suspended),
            (RequestStatus::EnteredInError, CommunicationRequestStatus::Rejected),
        ],
        default: None,
        non_invertible: &[RequestStatus::Cancelled, RequestStatus::Unknown],
    };

pub static COMMUNICATION_PRIORITY_10_30: ConceptCrosswalk<RequestPriority> = ConceptCrosswalk {
    id: "CommunicationPriority_10_30",
    entries: &[
        (PRIORITY_ROUTINE, RequestPriority::Routine),
        (PRIORITY_URGENT, RequestPriority::Urgent),
        (PRIORITY_STAT, RequestPriority::Stat),
        (PRIORITY_ASAP, RequestPriority::Asap),
    ],
};

pub static COMMUNICATION_PRIORITY_30_10: ConceptReverseCrosswalk<RequestPriority> =
    ConceptReverseCrosswalk {
        id: "CommunicationPriority_30_10",
        entries: &[
            (RequestPriority::Routine, PRIORITY_ROUTINE),
            (RequestPriority::Urgent, PRIORITY_URGENT),
            (RequestPriority::Stat, PRIORITY_STAT),
            (RequestPriority::Asap, PRIORITY_ASAP),
        ],
    };

// DeviceMetric

pub static DEVICE_METRIC_OPERATIONAL_STATUS_10_30: CodeCrosswalk<R2OperationalStatus, R3OperationalStatus> =
    CodeCrosswalk {
        id: "DeviceMetricOperationalStatus_10_30",
        pairs: same_codes!(R2OperationalStatus => R3OperationalStatus: On, Off, Standby),
        default: None,
        non_invertible: &[],
    };

pub static DEVICE_METRIC_OPERATIONAL_STATUS_30_10: CodeCrosswalk<R3OperationalStatus, R2OperationalStatus> =
    CodeCrosswalk {
        id: "DeviceMetricOperationalStatus_30_10",
        pairs: same_codes!(R3OperationalStatus => R2OperationalStatus: On, Off, Standby),
        default: None,
        non_invertible: &[R3OperationalStatus::EnteredInError],
    };

pub static DEVICE_METRIC_COLOR_10_30: CodeCrosswalk<R2Color, R3Color> = CodeCrosswalk {
    id: "DeviceMetricColor_10_30",
    pairs: same_codes!(R2Color => R3Color: Black, Red, Green, Yellow, Blue, Magenta, Cyan, White),
    default: None,
    non_invertible: &[],
};

pub static DEVICE_METRIC_COLOR_30_10: CodeCrosswalk<R3Color, R2Color> = CodeCrosswalk {
    id: "DeviceMetricColor_30_10",
    pairs: same_codes!(R3Color => R2Color: Black, Red, Green, Yellow, Blue, Magenta, Cyan, White),
    default: None,
    non_invertible: &[],
};

pub static DEVICE_METRIC_CATEGORY_10_30: CodeCrosswalk<R2Category, R3Category> = CodeCrosswalk {
    id: "DeviceMetricCategory_10_30",
    pairs: same_codes!(R2Category => R3Category: Measurement, Setting, Calculation, Unspecified),
    default: None,
    non_invertible: &[],
};

pub static DEVICE_METRIC_CATEGORY_30_10: CodeCrosswalk<R3Category, R2Category> = CodeCrosswalk {
    id: "DeviceMetricCategory_30_10",
    pairs: same_codes!(R3Category => R2Category: Measurement, Setting, Calculation, Unspecified),
    default: None,
    non_invertible: &[],
};

pub static DEVICE_METRIC_CALIBRATION_TYPE_10_30: CodeCrosswalk<R2CalibrationType, R3CalibrationType> =
    CodeCrosswalk {
        id: "DeviceMetricCalibrationType_10_30",
        pairs: same_codes!(R2CalibrationType => R3CalibrationType: Unspecified, Offset, Gain, TwoPoint),
        default: None,
        non_invertible: &[],
    };

pub static DEVICE_METRIC_CALIBRATION_TYPE_30_10: CodeCrosswalk<R3CalibrationType, R2CalibrationType> =
    CodeCrosswalk {
        id: "DeviceMetricCalibrationType_30_10",
        pairs: same_codes!(R3CalibrationType => R2CalibrationType: Unspecified, Offset, Gain, TwoPoint),
        default: None,
        non_invertible: &[],
    };

pub static DEVICE_METRIC_CALIBRATION_STATE_10_30: CodeCrosswalk<R2CalibrationState, R3CalibrationState> =
    CodeCrosswalk {
        id: "DeviceMetricCalibrationState_10_30",
        pairs: same_codes!(
            R2CalibrationState => R3CalibrationState:
            NotCalibrated, CalibrationRequired, Calibrated, Unspecified
        ),
        default: None,
        non_invertible: &[],
    };

pub static DEVICE_METRIC_CALIBRATION_STATE_30_10: CodeCrosswalk<R3CalibrationState, R2CalibrationState> =
    CodeCrosswalk {
        id: "DeviceMetricCalibrationState_30_10",
        pairs: same_codes!(
            R3CalibrationState => R2CalibrationState:
            NotCalibrated, CalibrationRequired, Calibrated, Unspecified
        ),
        default: None,
        non_invertible: &[],
    };

// Datatypes

pub static IDENTIFIER_USE_10_30: CodeCrosswalk<R2IdentifierUse, R3IdentifierUse> = CodeCrosswalk {
    id: "IdentifierUse_10_30",
    pairs: same_codes!(R2IdentifierUse => R3IdentifierUse: Usual, Official, Temp, Secondary),
    default: None,
    non_invertible: &[],
};

pub static IDENTIFIER_USE_30_10: CodeCrosswalk<R3IdentifierUse, R2IdentifierUse> = CodeCrosswalk {
    id: "IdentifierUse_30_10",
    pairs: same_codes!(R3IdentifierUse => R2IdentifierUse: Usual, Official, Temp, Secondary),
    default: None,
    non_invertible: &[],
};

pub static UNITS_OF_TIME_10_30: CodeCrosswalk<R2UnitsOfTime, R3UnitsOfTime> = CodeCrosswalk {
    id: "UnitsOfTime_10_30",
    pairs: same_codes!(R2UnitsOfTime => R3UnitsOfTime: Second, Minute, Hour, Day, Week, Month, Year),
    default: None,
    non_invertible: &[],
};

pub static UNITS_OF_TIME_30_10: CodeCrosswalk<R3UnitsOfTime, R2UnitsOfTime> = CodeCrosswalk {
    id: "UnitsOfTime_30_10",
    pairs: same_codes!(R3UnitsOfTime => R2UnitsOfTime: Second, Minute, Hour, Day, Week, Month, Year),
    default: None,
    non_invertible: &[],
};

pub static EVENT_TIMING_10_30: CodeCrosswalk<R2EventTiming, R3EventTiming> = CodeCrosswalk {
    id: "EventTiming_10_30",
    pairs: same_codes!(
        R2EventTiming => R3EventTiming:
        Hs, Wake, C, Cm, Cd, Cv, Ac, Acm, Acd, Acv, Pc, Pcm, Pcd, Pcv
    ),
    default: None,
    non_invertible: &[],
};

pub static EVENT_TIMING_30_10: CodeCrosswalk<R3EventTiming, R2EventTiming> = CodeCrosswalk {
    id: "EventTiming_30_10",
    pairs: same_codes!(
        R3EventTiming => R2EventTiming:
        Hs, Wake, C, Cm, Cd, Cv, Ac, Acm, Acd, Acv, Pc, Pcm, Pcd, Pcv
    ),
    default: None,
    non_invertible: &[
        R3EventTiming::Morn,
        R3EventTiming::Aft,
        R3EventTiming::Eve,
        R3EventTiming::Night,
        R3EventTiming::Phs,
    ],
};

// Bundle

pub static BUNDLE_TYPE_10_30: CodeCrosswalk<R2BundleType, R3BundleType> = CodeCrosswalk {
    id: "BundleType_10_30",
    pairs: same_codes!(
        R2BundleType => R3BundleType:
        Document, Message, Transaction, TransactionResponse, Batch, BatchResponse, History,
        Searchset, Collection
    ),
    default: None,
    non_invertible: &[],
};

pub static BUNDLE_TYPE_30_10: CodeCrosswalk<R3BundleType, R2BundleType> = CodeCrosswalk {
    id: "BundleType_30_10",
    pairs: same_codes!(
        R3BundleType => R2BundleType:
        Document, Message, Transaction, TransactionResponse, Batch, BatchResponse, History,
        Searchset, Collection
    ),
    default: None,
    non_invertible: &[],
};

pub static SEARCH_ENTRY_MODE_10_30: CodeCrosswalk<R2SearchEntryMode, R3SearchEntryMode> = CodeCrosswalk {
    id: "SearchEntryMode_10_30",
    pairs: same_codes!(R2SearchEntryMode => R3SearchEntryMode: Match, Include, Outcome),
    default: None,
    non_invertible: &[],
};

pub static SEARCH_ENTRY_MODE_30_10: CodeCrosswalk<R3SearchEntryMode, R2SearchEntryMode> = CodeCrosswalk {
    id: "SearchEntryMode_30_10",
    pairs: same_codes!(R3SearchEntryMode => R2SearchEntryMode: Match, Include, Outcome),
    default: None,
    non_invertible: &[],
};

pub static HTTP_VERB_10_30: CodeCrosswalk<R2HttpVerb, R3HttpVerb> = CodeCrosswalk {
    id: "HttpVerb_10_30",
    pairs: same_codes!(R2HttpVerb => R3HttpVerb: Get, Post, Put, Delete),
    default: None,
    non_invertible: &[],
};

pub static HTTP_VERB_30_10: CodeCrosswalk<R3HttpVerb, R2HttpVerb> = CodeCrosswalk {
    id: "HttpVerb_30_10",
    pairs: same_codes!(R3HttpVerb => R2HttpVerb: Get, Post, Put, Delete),
    default: None,
    non_invertible: &[],
};

/// Every DSTU2 <-> STU3 table by id.
pub static TABLES: phf::Map<&'static str, &'static dyn CrosswalkTable> = phf_map! {
    "CommunicationRequestStatus_10_30" => &COMMUNICATION_REQUEST_STATUS_10_30 as &dyn CrosswalkTable,
    "CommunicationRequestStatus_30_10" => &COMMUNICATION_REQUEST_STATUS_30_10 as &dyn CrosswalkTable,
    "CommunicationPriority_10_30" => &COMMUNICATION_PRIORITY_10_30 as &dyn CrosswalkTable,
    "CommunicationPriority_30_10" => &COMMUNICATION_PRIORITY_30_10 as &dyn CrosswalkTable,
    "DeviceMetricOperationalStatus_10_30" => &DEVICE_METRIC_OPERATIONAL_STATUS_10_30 as &dyn CrosswalkTable,
    "DeviceMetricOperationalStatus_30_10" => &DEVICE_METRIC_OPERATIONAL_STATUS_30_10 as &dyn CrosswalkTable,
    "DeviceMetricColor_10_30" => &DEVICE_METRIC_COLOR_10_30 as &dyn CrosswalkTable,
    "DeviceMetricColor_30_10" => &DEVICE_METRIC_COLOR_30_10 as &dyn CrosswalkTable,
    "DeviceMetricCategory_10_30" => &DEVICE_METRIC_CATEGORY_10_30 as &dyn CrosswalkTable,
    "DeviceMetricCategory_30_10" => &DEVICE_METRIC_CATEGORY_30_10 as &dyn CrosswalkTable,
    "DeviceMetricCalibrationType_10_30" => &DEVICE_METRIC_CALIBRATION_TYPE_10_30 as &dyn CrosswalkTable,
    "DeviceMetricCalibrationType_30_10" => &DEVICE_METRIC_CALIBRATION_TYPE_30_10 as &dyn CrosswalkTable,
    "DeviceMetricCalibrationState_10_30" => &DEVICE_METRIC_CALIBRATION_STATE_10_30 as &dyn CrosswalkTable,
    "DeviceMetricCalibrationState_30_10" => &DEVICE_METRIC_CALIBRATION_STATE_30_10 as &dyn CrosswalkTable,
    "IdentifierUse_10_30" => &IDENTIFIER_USE_10_30 as &dyn CrosswalkTable,
    "IdentifierUse_30_10" => &IDENTIFIER_USE_30_10 as &dyn CrosswalkTable,
    "UnitsOfTime_10_30" => &UNITS_OF_TIME_10_30 as &dyn CrosswalkTable,
    "UnitsOfTime_30_10" => &UNITS_OF_TIME_30_10 as &dyn CrosswalkTable,
    "EventTiming_10_30" => &EVENT_TIMING_10_30 as &dyn CrosswalkTable,
    "EventTiming_30_10" => &EVENT_TIMING_30_10 as &dyn CrosswalkTable,
    "BundleType_10_30" => &BUNDLE_TYPE_10_30 as &dyn CrosswalkTable,
    "BundleType_30_10" => &BUNDLE_TYPE_30_10 as &dyn CrosswalkTable,
    "SearchEntryMode_10_30" => &SEARCH_ENTRY_MODE_10_30 as &dyn CrosswalkTable,
    "SearchEntryMode_30_10" => &SEARCH_ENTRY_MODE_30_10 as &dyn CrosswalkTable,
    "HttpVerb_10_30" => &HTTP_VERB_10_30 as &dyn CrosswalkTable,
    "HttpVerb_30_10" => &HTTP_VERB_30_10 as &dyn CrosswalkTable,
};
