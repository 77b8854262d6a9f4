//! FHIR release identifiers

use crate::common::Error;
use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A FHIR release the models cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FhirVersion {
    #[serde(rename = "DSTU2", alias = "R2")]
    Dstu2,
    #[serde(rename = "STU3", alias = "R3")]
    Stu3,
}

static VERSION_ALIASES: phf::Map<&'static str, FhirVersion> = phf_map! {
    "DSTU2" => FhirVersion::Dstu2,
    "R2" => FhirVersion::Dstu2,
    "1.0" => FhirVersion::Dstu2,
    "1.0.2" => FhirVersion::Dstu2,
    "STU3" => FhirVersion::Stu3,
    "R3" => FhirVersion::Stu3,
    "3.0" => FhirVersion::Stu3,
    "3.0.1" => FhirVersion::Stu3,
};

impl FhirVersion {
    pub fn name(self) -> &'static str {
        match self {
            FhirVersion::Dstu2 => "DSTU2",
            FhirVersion::Stu3 => "STU3",
        }
    }
}

impl FromStr for FhirVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_uppercase();
        VERSION_ALIASES
            .get(key.as_str())
            .copied()
            .ok_or_else(|| Error::UnknownVersion(s.to_string()))
    }
}

impl fmt::Display for FhirVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionPair {
    pub source: FhirVersion,
    pub target: FhirVersion,
}

impl VersionPair {
    pub const fn new(source: FhirVersion, target: FhirVersion) -> Self {
        Self { source, target }
    }
}

impl fmt::Display for VersionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("r2".parse::<FhirVersion>().unwrap(), FhirVersion::Dstu2);
        assert_eq!("1.0.2".parse::<FhirVersion>().unwrap(), FhirVersion::Dstu2);
        assert_eq!(" STU3 ".parse::<FhirVersion>().unwrap(), FhirVersion::Stu3);
        assert!("R4".parse::<FhirVersion>().is_err());
    }

    #[test]
    fn test_pair_display() {
        let pair = VersionPair::new(FhirVersion::Dstu2, FhirVersion::Stu3);
        assert_eq!(pair.to_string(), "DSTU2 -> STU3");
    }
}
