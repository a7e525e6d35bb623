// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parameter cache and fetcher.
//!
//! This module provides the `ConfigLoader`, which owns a process-lifetime
//! cache mapping fetch requests to previously fetched values, issues store
//! calls on cache misses, and projects fetched path maps into typed
//! configuration structs.

use crate::domain::{
    ApiConfig, CacheEntry, CacheKey, ConfigError, DatabaseConfig, ParamValue, Result,
};
use crate::ports::ParameterStore;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Environment variable naming the deployment environment.
const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Environment used when `ENVIRONMENT` is not set.
const DEFAULT_ENVIRONMENT: &str = "dev";

/// Project namespace prefixed onto every parameter key and path.
const DEFAULT_PROJECT: &str = "gadgetcloud";

/// Fetches and caches parameters from a backing store.
///
/// The loader composes a base path `/<project>/<environment>` that is
/// prefixed onto every key and path lookup. Each (key, decrypt) or
/// (path, decrypt) request is fetched from the store at most once per
/// process; all subsequent requests for the same pair return the cached
/// result unchanged. There is no eviction, TTL, or invalidation; the loader
/// targets short-lived, per-invocation processes.
///
/// The loader is explicitly constructed and injected into handlers. The
/// cache is lock-guarded, so a loader shared across tasks is safe, but
/// overlapping identical fetches are not de-duplicated and may each reach
/// the store.
///
/// # Examples
///
/// ```rust
/// use ssmcfg::adapters::MemoryStore;
/// use ssmcfg::service::ConfigLoader;
/// use std::sync::Arc;
///
/// # #[tokio::main]
/// # async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
/// let store = Arc::new(
///     MemoryStore::new().with_parameter("/gadgetcloud/prod/database/host", "db1"),
/// );
/// let loader = ConfigLoader::builder(store).environment("prod").build();
///
/// let config = loader.get_database_config().await?;
/// assert_eq!(config.host.as_deref(), Some("db1"));
/// # Ok(())
/// # }
/// ```
pub struct ConfigLoader {
    /// The injected backing store
    store: Arc<dyn ParameterStore>,
    /// Resolved environment name
    environment: String,
    /// Base path prefixed onto every lookup
    base_path: String,
    /// Cache of previously fetched results
    cache: RwLock<HashMap<CacheKey, CacheEntry>>,
}

impl ConfigLoader {
    /// Creates a loader over the given store.
    ///
    /// The environment name is read from the `ENVIRONMENT` variable,
    /// defaulting to `"dev"`, and combined with the fixed project namespace
    /// into the base path.
    pub fn new(store: Arc<dyn ParameterStore>) -> Self {
        Self::builder(store).build()
    }

    /// Creates a loader builder for overriding the environment or project.
    pub fn builder(store: Arc<dyn ParameterStore>) -> ConfigLoaderBuilder {
        ConfigLoaderBuilder::new(store)
    }

    /// Returns the resolved environment name.
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Returns the base path prefixed onto every lookup.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Composes the fully-qualified name for a relative key or path.
    fn qualify(&self, key: &str) -> String {
        format!("{}/{}", self.base_path, key)
    }

    fn cached(&self, key: &CacheKey) -> Option<CacheEntry> {
        match self.cache.read() {
            Ok(cache) => cache.get(key).cloned(),
            Err(_) => None,
        }
    }

    fn remember(&self, key: CacheKey, entry: CacheEntry) {
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(key, entry);
        }
    }

    /// Fetches a single parameter value.
    ///
    /// On a cache hit the stored value is returned without touching the
    /// store. On a miss the parameter named `<base_path>/<key>` is fetched,
    /// cached, and returned.
    ///
    /// # Arguments
    ///
    /// * `key` - Relative parameter key (e.g. `"database/host"`)
    /// * `decrypt` - Whether to decrypt an encrypted parameter value
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParameterNotFound`] naming the fully-qualified
    /// parameter when the store reports it absent; any other store failure
    /// propagates unchanged.
    pub async fn get_parameter(&self, key: &str, decrypt: bool) -> Result<ParamValue> {
        let cache_key = CacheKey::parameter(key, decrypt);
        if let Some(CacheEntry::Value(value)) = self.cached(&cache_key) {
            tracing::debug!(key = %cache_key, "parameter cache hit");
            return Ok(ParamValue::from(value));
        }

        let name = self.qualify(key);
        tracing::debug!(name = %name, decrypt, store = self.store.name(), "fetching parameter");

        let value = self
            .store
            .get_parameter(&name, decrypt)
            .await?
            .ok_or(ConfigError::ParameterNotFound { name })?;

        self.remember(cache_key, CacheEntry::Value(value.clone()));
        Ok(ParamValue::from(value))
    }

    /// Fetches all parameters under a path prefix.
    ///
    /// On a cache miss the loader pages through the store's recursive
    /// listing of `<base_path>/<path>`, following the continuation token
    /// until the listing is complete, and accumulates the entries into one
    /// map keyed by parameter name with the base-path prefix stripped. The
    /// complete map is cached and returned.
    ///
    /// # Errors
    ///
    /// Any failure during paging is wrapped as
    /// [`ConfigError::PathLoadError`] naming the full path; results from
    /// earlier pages are discarded and nothing is cached.
    pub async fn get_parameters_by_path(
        &self,
        path: &str,
        decrypt: bool,
    ) -> Result<HashMap<String, String>> {
        let cache_key = CacheKey::path(path, decrypt);
        if let Some(CacheEntry::Map(parameters)) = self.cached(&cache_key) {
            tracing::debug!(key = %cache_key, "path cache hit");
            return Ok(parameters);
        }

        let full_path = self.qualify(path);
        let parameters = self
            .fetch_all_pages(&full_path, decrypt)
            .await
            .map_err(|err| ConfigError::PathLoadError {
                path: full_path,
                source: Box::new(err),
            })?;

        self.remember(cache_key, CacheEntry::Map(parameters.clone()));
        Ok(parameters)
    }

    /// Pages through the store until the continuation token is absent.
    async fn fetch_all_pages(
        &self,
        full_path: &str,
        decrypt: bool,
    ) -> Result<HashMap<String, String>> {
        let prefix = format!("{}/", self.base_path);
        let mut parameters = HashMap::new();
        let mut next_token = None;

        loop {
            tracing::debug!(path = %full_path, store = self.store.name(), "fetching parameter page");
            let page = self
                .store
                .get_parameters_by_path(full_path, true, decrypt, next_token)
                .await?;

            for parameter in page.parameters {
                let key = parameter
                    .name
                    .strip_prefix(&prefix)
                    .unwrap_or(&parameter.name)
                    .to_string();
                parameters.insert(key, parameter.value);
            }

            match page.next_token {
                Some(token) => next_token = Some(token),
                None => break,
            }
        }

        Ok(parameters)
    }

    /// Loads database settings from the `database` parameter path.
    ///
    /// The path holds encrypted values (the password), so decryption is
    /// requested. Missing numeric sub-keys fall back to their defaults.
    pub async fn get_database_config(&self) -> Result<DatabaseConfig> {
        let parameters = self.get_parameters_by_path("database", true).await?;
        DatabaseConfig::from_params(&parameters)
    }

    /// Loads API settings from the `api` parameter path.
    pub async fn get_api_config(&self) -> Result<ApiConfig> {
        let parameters = self.get_parameters_by_path("api", false).await?;
        ApiConfig::from_params(&parameters)
    }
}

/// Builder for constructing a [`ConfigLoader`].
///
/// # Examples
///
/// ```rust
/// use ssmcfg::adapters::MemoryStore;
/// use ssmcfg::service::ConfigLoader;
/// use std::sync::Arc;
///
/// let loader = ConfigLoader::builder(Arc::new(MemoryStore::new()))
///     .environment("prod")
///     .build();
/// assert_eq!(loader.base_path(), "/gadgetcloud/prod");
/// ```
pub struct ConfigLoaderBuilder {
    store: Arc<dyn ParameterStore>,
    environment: Option<String>,
    project: String,
}

impl ConfigLoaderBuilder {
    fn new(store: Arc<dyn ParameterStore>) -> Self {
        Self {
            store,
            environment: None,
            project: DEFAULT_PROJECT.to_string(),
        }
    }

    /// Sets the environment name, overriding the `ENVIRONMENT` variable.
    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Sets the project namespace.
    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }

    /// Builds the loader, resolving the environment and base path.
    pub fn build(self) -> ConfigLoader {
        let environment = self.environment.unwrap_or_else(|| {
            std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string())
        });
        let base_path = format!("/{}/{}", self.project, environment);

        ConfigLoader {
            store: self.store,
            environment,
            base_path,
            cache: RwLock::new(HashMap::new()),
        }
    }
}
