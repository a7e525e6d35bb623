// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parameter value type with type-safe conversions.
//!
//! This module provides the `ParamValue` type, which wraps fetched parameter
//! values and provides type-safe conversion methods to various Rust types.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A type-safe wrapper for parameter values.
///
/// `ParamValue` stores parameter values as strings internally, the way the
/// store returns them, and provides type-safe conversion methods to common
/// Rust types. This allows the loader to return a uniform type while still
/// providing type safety at the point of use.
///
/// # Examples
///
/// ```
/// use ssmcfg::domain::param_value::ParamValue;
///
/// let value = ParamValue::new("42".to_string());
/// assert_eq!(value.as_str(), "42");
/// assert_eq!(value.as_u32("api/rate_limit").unwrap(), 42);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamValue(String);

impl ParamValue {
    /// Creates a new `ParamValue` from a `String`.
    pub fn new(value: String) -> Self {
        ParamValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the value into a `String`.
    pub fn as_string(&self) -> String {
        self.0.clone()
    }

    /// Converts the value to a boolean.
    ///
    /// Recognizes the following values (case-insensitive):
    /// - `true`: "true", "yes", "1", "on"
    /// - `false`: "false", "no", "0", "off"
    ///
    /// # Examples
    ///
    /// ```
    /// use ssmcfg::domain::param_value::ParamValue;
    ///
    /// let value = ParamValue::from("yes");
    /// assert_eq!(value.as_bool("features/enable_analytics").unwrap(), true);
    /// ```
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        match self.0.to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(true),
            "false" | "no" | "0" | "off" => Ok(false),
            _ => self
                .0
                .parse::<bool>()
                .map_err(|e| ConfigError::from_parse_bool_error(key.to_string(), e)),
        }
    }

    /// Converts the value to an `i64`.
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        self.0
            .parse::<i64>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to a `u32`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ssmcfg::domain::param_value::ParamValue;
    ///
    /// let value = ParamValue::from("1000");
    /// assert_eq!(value.as_u32("api/rate_limit").unwrap(), 1000);
    /// ```
    pub fn as_u32(&self, key: &str) -> Result<u32> {
        self.0
            .parse::<u32>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Parses the value into any type that implements `FromStr`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ssmcfg::domain::param_value::ParamValue;
    ///
    /// let value = ParamValue::from("5432");
    /// let port: u16 = value.parse("database/port").unwrap();
    /// assert_eq!(port, 5432);
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.0
            .parse::<T>()
            .map_err(|e| ConfigError::TypeConversionError {
                key: key.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            })
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue(s)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue(s.to_string())
    }
}

impl From<ParamValue> for String {
    fn from(value: ParamValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ParamValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
