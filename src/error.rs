//! Error types for ecs-launch
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{ConversionError, Operation, ProviderError};

/// Result type alias for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration could not be loaded or is unusable
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has wrongly typed values
    #[error("invalid config file {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// Values parse but cannot drive a provisioning run
    #[error("invalid configuration: {message}")]
    Invalid { message: String },
}

/// Why a provisioning step failed
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// Step 1 failed
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// A remote call failed; the provider's message is kept as-is
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// A response lacks the identifier a later step needs
    #[error("{operation} response has no '{field}'")]
    MissingField { operation: Operation, field: String },

    /// The service container is not part of the converted task definition
    #[error("container '{container}' is not defined in the composition file (found: {})", available.join(", "))]
    UnknownContainer {
        container: String,
        available: Vec<String>,
    },
}

impl ProvisionError {
    /// Short machine-readable code for NDJSON output
    pub fn code(&self) -> &'static str {
        use crate::domain::ports::{ConversionErrorKind, ProviderErrorKind};

        match self {
            Self::Conversion(e) => match e.kind() {
                ConversionErrorKind::ConversionFailure => "conversion_failure",
                ConversionErrorKind::MalformedOutput => "malformed_output",
            },
            Self::Provider(e) => match e.kind() {
                ProviderErrorKind::PreconditionNotMet => "precondition_not_met",
                ProviderErrorKind::Rejected => "provider_error",
            },
            Self::MissingField { .. } => "missing_field",
            Self::UnknownContainer { .. } => "unknown_container",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_field() {
        let err = ProvisionError::MissingField {
            operation: Operation::CreateLoadBalancer,
            field: "/LoadBalancers/0/LoadBalancerArn".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "CreateLoadBalancer response has no '/LoadBalancers/0/LoadBalancerArn'"
        );
    }

    #[test]
    fn test_error_display_unknown_container() {
        let err = ProvisionError::UnknownContainer {
            container: "api".to_string(),
            available: vec!["web".to_string(), "db".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "container 'api' is not defined in the composition file (found: web, db)"
        );
    }

    #[test]
    fn test_provider_error_is_transparent() {
        let err: ProvisionError =
            ProviderError::new(Operation::CreateCluster, "An error occurred (X) when calling").into();
        assert_eq!(err.to_string(), "CreateCluster failed: An error occurred (X) when calling");
        assert_eq!(err.code(), "provider_error");
    }

    #[test]
    fn test_duplicate_name_maps_to_precondition_code() {
        let err: ProvisionError = ProviderError::new(
            Operation::CreateTargetGroup,
            "An error occurred (DuplicateTargetGroupName) when calling the CreateTargetGroup operation",
        )
        .into();
        assert_eq!(err.code(), "precondition_not_met");
    }

    #[test]
    fn test_conversion_codes() {
        let malformed: ProvisionError = ConversionError::MalformedOutput {
            message: "eof".to_string(),
        }
        .into();
        assert_eq!(malformed.code(), "malformed_output");
    }
}
