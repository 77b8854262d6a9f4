//! Convertor configuration
//!
//! A [`ConvertorConfig`] is plain serde data (YAML on disk). `compile()`
//! validates it and produces the advisor a [`crate::VersionConvertor`] runs
//! with.

use crate::advisor::BaseAdvisor;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertorConfig {
    pub advisor: AdvisorConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdvisorConfig {
    /// Raise on unhandled input instead of returning an absent result.
    pub fail_fast: bool,
    /// Resource types to leave out of converted bundles.
    pub ignore_entry_types: Vec<String>,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            fail_fast: true,
            ignore_entry_types: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Every unhandled case fails the conversion.
    Strict,
    /// Unhandled cases yield absent results and conversion continues.
    Lenient,
}

impl ConvertorConfig {
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Strict => Self::default(),
            Preset::Lenient => Self {
                advisor: AdvisorConfig {
                    fail_fast: false,
                    ..AdvisorConfig::default()
                },
            },
        }
    }

    pub fn builder() -> ConvertorConfigBuilder {
        ConvertorConfigBuilder::default()
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate and build the advisor.
    pub fn compile(&self) -> Result<BaseAdvisor, ConfigError> {
        let mut seen = BTreeSet::new();
        let mut advisor = BaseAdvisor::new(self.advisor.fail_fast);
        for resource_type in &self.advisor.ignore_entry_types {
            let resource_type = resource_type.trim();
            if resource_type.is_empty() {
                return Err(ConfigError::InvalidConfig(
                    "advisor.ignoreEntryTypes contains a blank resource type".to_string(),
                ));
            }
            if !seen.insert(resource_type) {
                return Err(ConfigError::InvalidConfig(format!(
                    "advisor.ignoreEntryTypes lists {resource_type} more than once"
                )));
            }
            advisor = advisor.with_ignored_entry_type(resource_type);
        }
        Ok(advisor)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConvertorConfigBuilder {
    config: ConvertorConfig,
}

impl ConvertorConfigBuilder {
    pub fn preset(mut self, preset: Preset) -> Self {
        self.config = ConvertorConfig::preset(preset);
        self
    }

    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.config.advisor.fail_fast = fail_fast;
        self
    }

    pub fn ignore_entry_type(mut self, resource_type: impl Into<String>) -> Self {
        self.config.advisor.ignore_entry_types.push(resource_type.into());
        self
    }

    pub fn build(self) -> ConvertorConfig {
        self.config
    }
}
