//! Values tagged with the FHIR release they belong to

use crate::common::IsEmpty;
use crate::version::FhirVersion;
use crate::{dstu2, stu3};

/// A resource from either supported release.
#[derive(Debug, Clone, PartialEq)]
pub enum VersionedResource {
    Dstu2(Box<dstu2::Resource>),
    Stu3(Box<stu3::Resource>),
}

impl VersionedResource {
    pub fn version(&self) -> FhirVersion {
        match self {
            VersionedResource::Dstu2(_) => FhirVersion::Dstu2,
            VersionedResource::Stu3(_) => FhirVersion::Stu3,
        }
    }

    pub fn resource_type(&self) -> &str {
        match self {
            VersionedResource::Dstu2(r) => r.resource_type(),
            VersionedResource::Stu3(r) => r.resource_type(),
        }
    }

    pub fn as_dstu2(&self) -> Option<&dstu2::Resource> {
        match self {
            VersionedResource::Dstu2(r) => Some(r),
            VersionedResource::Stu3(_) => None,
        }
    }

    pub fn as_stu3(&self) -> Option<&stu3::Resource> {
        match self {
            VersionedResource::Stu3(r) => Some(r),
            VersionedResource::Dstu2(_) => None,
        }
    }

    pub fn into_dstu2(self) -> Option<dstu2::Resource> {
        match self {
            VersionedResource::Dstu2(r) => Some(*r),
            VersionedResource::Stu3(_) => None,
        }
    }

    pub fn into_stu3(self) -> Option<stu3::Resource> {
        match self {
            VersionedResource::Stu3(r) => Some(*r),
            VersionedResource::Dstu2(_) => None,
        }
    }
}

impl IsEmpty for VersionedResource {
    fn is_empty(&self) -> bool {
        match self {
            VersionedResource::Dstu2(r) => r.is_empty(),
            VersionedResource::Stu3(r) => r.is_empty(),
        }
    }
}

impl From<dstu2::Resource> for VersionedResource {
    fn from(value: dstu2::Resource) -> Self {
        VersionedResource::Dstu2(Box::new(value))
    }
}

impl From<stu3::Resource> for VersionedResource {
    fn from(value: stu3::Resource) -> Self {
        VersionedResource::Stu3(Box::new(value))
    }
}

/// A datatype value from either supported release.
#[derive(Debug, Clone, PartialEq)]
pub enum VersionedType {
    Dstu2(Box<dstu2::Type>),
    Stu3(Box<stu3::Type>),
}

impl VersionedType {
    pub fn version(&self) -> FhirVersion {
        match self {
            VersionedType::Dstu2(_) => FhirVersion::Dstu2,
            VersionedType::Stu3(_) => FhirVersion::Stu3,
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            VersionedType::Dstu2(t) => t.type_name(),
            VersionedType::Stu3(t) => t.type_name(),
        }
    }

    pub fn into_dstu2(self) -> Option<dstu2::Type> {
        match self {
            VersionedType::Dstu2(t) => Some(*t),
            VersionedType::Stu3(_) => None,
        }
    }

    pub fn into_stu3(self) -> Option<stu3::Type> {
        match self {
            VersionedType::Stu3(t) => Some(*t),
            VersionedType::Dstu2(_) => None,
        }
    }
}

impl IsEmpty for VersionedType {
    fn is_empty(&self) -> bool {
        match self {
            VersionedType::Dstu2(t) => t.is_empty(),
            VersionedType::Stu3(t) => t.is_empty(),
        }
    }
}

impl From<dstu2::Type> for VersionedType {
    fn from(value: dstu2::Type) -> Self {
        VersionedType::Dstu2(Box::new(value))
    }
}

impl From<stu3::Type> for VersionedType {
    fn from(value: stu3::Type) -> Self {
        VersionedType::Stu3(Box::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versioned_resource_accessors() {
        let resource = VersionedResource::from(dstu2::Resource::from(dstu2::DeviceMetric::default()));
        assert_eq!(resource.version(), FhirVersion::Dstu2);
        assert_eq!(resource.resource_type(), "DeviceMetric");
        assert!(resource.is_empty());
        assert!(resource.as_stu3().is_none());
        assert!(resource.into_dstu2().is_some());
    }

    #[test]
    fn test_versioned_type_name() {
        let value = VersionedType::from(stu3::Type::RelatedArtifact(Default::default()));
        assert_eq!(value.version(), FhirVersion::Stu3);
        assert_eq!(value.type_name(), "RelatedArtifact");
    }
}
