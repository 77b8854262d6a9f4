//! DSTU2 resource union

use super::{Bundle, CommunicationRequest, DeviceMetric};
use crate::common::{Error, IsEmpty, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Any DSTU2 resource.
///
/// Resource kinds without a typed model deserialize into [`OtherResource`].
/// A typed kind that fails to parse is an error, never an `Other`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "resourceType")]
pub enum Resource {
    CommunicationRequest(CommunicationRequest),
    DeviceMetric(DeviceMetric),
    Bundle(Bundle),
    #[serde(untagged)]
    Other(OtherResource),
}

/// A resource kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherResource {
    #[serde(rename = "resourceType")]
    pub resource_type: String,

    #[serde(flatten)]
    pub content: Map<String, Value>,
}

impl Resource {
    pub fn resource_type(&self) -> &str {
        match self {
            Resource::CommunicationRequest(_) => "CommunicationRequest",
            Resource::DeviceMetric(_) => "DeviceMetric",
            Resource::Bundle(_) => "Bundle",
            Resource::Other(other) => &other.resource_type,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Resource::CommunicationRequest(r) => r.base.resource.id.as_deref(),
            Resource::DeviceMetric(r) => r.base.resource.id.as_deref(),
            Resource::Bundle(r) => r.base.id.as_deref(),
            Resource::Other(r) => r.content.get("id").and_then(Value::as_str),
        }
    }

    /// Parse a DSTU2 resource from JSON.
    pub fn from_value(value: Value) -> Result<Self> {
        let resource_type = match value.get("resourceType").and_then(Value::as_str) {
            Some(resource_type) => resource_type.to_string(),
            None => {
                return Err(Error::InvalidResource(
                    "missing resourceType".to_string(),
                ))
            }
        };
        let invalid = |e: serde_json::Error| Error::InvalidResource(format!("{resource_type}: {e}"));
        match resource_type.as_str() {
            "CommunicationRequest" => serde_json::from_value(value)
                .map(Resource::CommunicationRequest)
                .map_err(invalid),
            "DeviceMetric" => serde_json::from_value(value)
                .map(Resource::DeviceMetric)
                .map_err(invalid),
            "Bundle" => serde_json::from_value(value)
                .map(Resource::Bundle)
                .map_err(invalid),
            _ => serde_json::from_value(value)
                .map(Resource::Other)
                .map_err(Error::from),
        }
    }

    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(Error::from)
    }
}

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Resource::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl IsEmpty for Resource {
    fn is_empty(&self) -> bool {
        match self {
            Resource::CommunicationRequest(r) => r.is_empty(),
            Resource::DeviceMetric(r) => r.is_empty(),
            Resource::Bundle(r) => r.is_empty(),
            Resource::Other(r) => r.content.values().all(IsEmpty::is_empty),
        }
    }
}

impl From<CommunicationRequest> for Resource {
    fn from(value: CommunicationRequest) -> Self {
        Resource::CommunicationRequest(value)
    }
}

impl From<DeviceMetric> for Resource {
    fn from(value: DeviceMetric) -> Self {
        Resource::DeviceMetric(value)
    }
}

impl From<Bundle> for Resource {
    fn from(value: Bundle) -> Self {
        Resource::Bundle(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_resource_kind_is_preserved() {
        let resource = Resource::from_value(json!({
            "resourceType": "Patient",
            "id": "p1",
            "active": true
        }))
        .unwrap();
        assert_eq!(resource.resource_type(), "Patient");
        assert_eq!(resource.id(), Some("p1"));
        assert!(!resource.is_empty());
    }

    #[test]
    fn test_missing_resource_type() {
        assert!(Resource::from_value(json!({"id": "x"})).is_err());
    }

    #[test]
    fn test_typed_resource_with_bad_code_is_invalid() {
        let err = Resource::from_value(json!({
            "resourceType": "CommunicationRequest",
            "id": "cr-1",
            "status": {"value": "bogus"}
        }))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidResource(ref msg) if msg.starts_with("CommunicationRequest")));
    }

    #[test]
    fn test_bad_bundle_entry_is_invalid() {
        let result = Resource::from_value(json!({
            "resourceType": "Bundle",
            "type": {"value": "collection"},
            "entry": [{
                "resource": {"resourceType": "DeviceMetric", "color": {"value": "mauve"}}
            }]
        }));
        assert!(matches!(result, Err(Error::InvalidResource(_))));
    }

    #[test]
    fn test_typed_resource_round_trip() {
        let resource = Resource::from_value(json!({
            "resourceType": "DeviceMetric",
            "id": "dm1",
            "color": {"value": "red"}
        }))
        .unwrap();
        let Resource::DeviceMetric(metric) = &resource else {
            panic!("expected DeviceMetric");
        };
        assert_eq!(
            metric.color.as_ref().and_then(|c| c.value),
            Some(super::super::DeviceMetricColor::Red)
        );
        assert_eq!(resource.to_value().unwrap()["resourceType"], "DeviceMetric");
    }
}
