use std::fmt;
use thiserror::Error;

/// Category of a conversion failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// A resource kind or datatype with no converter that the advisor did not cover
    UnhandledVariant,
    /// The root value was absent or empty under a fail-fast advisor
    InvalidRoot,
    /// No dispatcher is registered for the requested version pair
    UnsupportedVersionPair,
    /// A value (usually an advisor result) belongs to the wrong release
    VersionMismatch,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::UnhandledVariant => "unhandled variant",
            FailureKind::InvalidRoot => "invalid root",
            FailureKind::UnsupportedVersionPair => "unsupported version pair",
            FailureKind::VersionMismatch => "version mismatch",
        };
        f.write_str(name)
    }
}

/// The single failure type every conversion surfaces.
///
/// `path` locates the offending element in the source graph, e.g.
/// `Bundle.entry[2].resource.payload[0].content`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {path}: {message}")]
pub struct ConversionError {
    pub kind: FailureKind,
    pub path: String,
    pub message: String,
}

impl ConversionError {
    pub fn new(kind: FailureKind, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn unhandled_variant(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(FailureKind::UnhandledVariant, path, message)
    }

    pub fn invalid_root(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(FailureKind::InvalidRoot, path, message)
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_path() {
        let err = ConversionError::unhandled_variant(
            "CommunicationRequest.payload[0].content",
            "no converter for datatype Annotation",
        );
        assert_eq!(
            err.to_string(),
            "unhandled variant at CommunicationRequest.payload[0].content: no converter for datatype Annotation"
        );
    }
}
