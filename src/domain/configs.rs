// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed configuration structs projected from fetched parameter maps.
//!
//! Each struct selects known sub-keys out of a path map returned by the
//! loader, coercing numeric fields and applying a static default when the
//! sub-key is absent. A sub-key that is present but malformed is an error,
//! never a silent default.

use crate::domain::errors::Result;
use crate::domain::param_value::ParamValue;
use serde::Serialize;
use std::collections::HashMap;

/// Database connection settings projected from the `database` parameter path.
///
/// # Examples
///
/// ```
/// use ssmcfg::domain::configs::DatabaseConfig;
/// use std::collections::HashMap;
///
/// let mut params = HashMap::new();
/// params.insert("database/host".to_string(), "db1".to_string());
/// params.insert("database/name".to_string(), "app".to_string());
///
/// let config = DatabaseConfig::from_params(&params).unwrap();
/// assert_eq!(config.host.as_deref(), Some("db1"));
/// assert_eq!(config.port, 5432);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DatabaseConfig {
    /// Database host name, when present in the store.
    pub host: Option<String>,
    /// Database port; defaults to [`DatabaseConfig::DEFAULT_PORT`].
    pub port: u16,
    /// Database name, when present in the store.
    pub database: Option<String>,
    /// Database password, when present in the store.
    pub password: Option<String>,
}

impl DatabaseConfig {
    /// Port used when the `database/port` sub-key is absent.
    pub const DEFAULT_PORT: u16 = 5432;

    /// Projects database settings out of a fetched path map.
    ///
    /// The map is keyed by relative parameter key, as returned by
    /// `ConfigLoader::get_parameters_by_path`.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self> {
        let port = match params.get("database/port") {
            Some(raw) => ParamValue::from(raw.as_str()).parse::<u16>("database/port")?,
            None => Self::DEFAULT_PORT,
        };

        Ok(Self {
            host: params.get("database/host").cloned(),
            port,
            database: params.get("database/name").cloned(),
            password: params.get("database/password").cloned(),
        })
    }
}

/// API client settings projected from the `api` parameter path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ApiConfig {
    /// Base URL of the API, when present in the store.
    pub base_url: Option<String>,
    /// Request rate limit; defaults to [`ApiConfig::DEFAULT_RATE_LIMIT`].
    pub rate_limit: u32,
}

impl ApiConfig {
    /// Rate limit used when the `api/rate_limit` sub-key is absent.
    pub const DEFAULT_RATE_LIMIT: u32 = 1000;

    /// Projects API settings out of a fetched path map.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self> {
        let rate_limit = match params.get("api/rate_limit") {
            Some(raw) => ParamValue::from(raw.as_str()).as_u32("api/rate_limit")?,
            None => Self::DEFAULT_RATE_LIMIT,
        };

        Ok(Self {
            base_url: params.get("api/base_url").cloned(),
            rate_limit,
        })
    }
}
