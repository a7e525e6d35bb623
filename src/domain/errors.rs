// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur when fetching parameters
//! from a store or coercing their values. All errors use `thiserror` for proper
//! error handling and conversion.

use std::num::ParseIntError;
use std::str::ParseBoolError;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// This enum represents all possible errors that can occur when fetching,
/// paging, or coercing parameter values. It is marked as `#[non_exhaustive]`
/// to allow for future additions without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use ssmcfg::domain::errors::ConfigError;
///
/// fn get_config_value() -> Result<String, ConfigError> {
///     Err(ConfigError::ParameterNotFound {
///         name: "/gadgetcloud/dev/database/host".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The store reported that the requested parameter does not exist.
    ///
    /// Raised only by single-parameter lookups, referencing the fully-qualified
    /// parameter name rather than the relative key.
    #[error("Parameter not found: {name}")]
    ParameterNotFound {
        /// The fully-qualified name of the missing parameter
        name: String,
    },

    /// A paged path listing failed partway through.
    ///
    /// Wraps the underlying failure with the full path being loaded. Results
    /// accumulated from earlier pages are discarded.
    #[error("Error loading parameters from '{path}': {source}")]
    PathLoadError {
        /// The full path that was being loaded
        path: String,
        /// The failure that interrupted paging
        source: Box<ConfigError>,
    },

    /// The parameter store reported a failure (network, auth, service).
    #[error("Parameter store '{store}' error: {message}")]
    StoreError {
        /// The name of the store that encountered the error
        store: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to convert a parameter value to the requested type.
    #[error("Failed to convert value for key '{key}' to type {target_type}: {source}")]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

// Implement conversions from common parsing errors to TypeConversionError
impl ConfigError {
    /// Creates a TypeConversionError from a ParseIntError.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseBoolError.
    pub fn from_parse_bool_error(key: String, err: ParseBoolError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "boolean".to_string(),
            source: Box::new(err),
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
