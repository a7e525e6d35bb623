// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory parameter store adapter.
//!
//! This module provides a `ParameterStore` backed by an in-process map. It is
//! used by tests, doc examples, and local development, where fetching from a
//! real store is unwanted.

use crate::domain::{ConfigError, Result};
use crate::ports::{Parameter, ParameterPage, ParameterStore};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Number of parameters returned per page when no page size is set.
const DEFAULT_PAGE_SIZE: usize = 10;

/// An in-memory parameter store.
///
/// Parameters are held in a sorted map so that paged listings are
/// deterministic. The page size is configurable, which lets callers exercise
/// the continuation-token loop with small fixtures. Decryption is a no-op;
/// values are stored and returned as-is.
///
/// # Examples
///
/// ```rust
/// use ssmcfg::adapters::MemoryStore;
/// use ssmcfg::ports::ParameterStore;
///
/// # #[tokio::main]
/// # async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
/// let store = MemoryStore::new()
///     .with_parameter("/gadgetcloud/dev/api/base_url", "https://api.example.com")
///     .with_page_size(1);
///
/// let value = store
///     .get_parameter("/gadgetcloud/dev/api/base_url", false)
///     .await?;
/// assert_eq!(value.as_deref(), Some("https://api.example.com"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct MemoryStore {
    /// Parameters keyed by fully-qualified name, kept sorted for paging
    parameters: BTreeMap<String, String>,
    /// Number of parameters returned per page
    page_size: usize,
}

impl MemoryStore {
    /// Creates an empty in-memory store with the default page size.
    pub fn new() -> Self {
        Self {
            parameters: BTreeMap::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Adds a parameter, builder-style.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ssmcfg::adapters::MemoryStore;
    ///
    /// let store = MemoryStore::new()
    ///     .with_parameter("/gadgetcloud/dev/database/host", "localhost");
    /// ```
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Sets the number of parameters returned per page.
    ///
    /// A page size of zero is clamped to one.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Inserts a parameter into the store.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parameters.insert(name.into(), value.into());
    }

    /// Returns the number of parameters in the store.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Returns `true` if the store holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ParameterStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get_parameter(&self, name: &str, _decrypt: bool) -> Result<Option<String>> {
        Ok(self.parameters.get(name).cloned())
    }

    async fn get_parameters_by_path(
        &self,
        path: &str,
        recursive: bool,
        _decrypt: bool,
        next_token: Option<String>,
    ) -> Result<ParameterPage> {
        let prefix = if path.ends_with('/') {
            path.to_string()
        } else {
            format!("{}/", path)
        };

        let matching: Vec<(&String, &String)> = self
            .parameters
            .iter()
            .filter(|(name, _)| name.starts_with(&prefix))
            .filter(|(name, _)| recursive || !name[prefix.len()..].contains('/'))
            .collect();

        // Continuation tokens are offsets into the sorted matching sequence.
        let start = match next_token {
            Some(token) => token.parse::<usize>().map_err(|e| ConfigError::StoreError {
                store: "memory".to_string(),
                message: format!("Invalid continuation token '{}'", token),
                source: Some(Box::new(e)),
            })?,
            None => 0,
        };

        let end = (start + self.page_size).min(matching.len());
        let parameters = matching
            .get(start..end)
            .unwrap_or(&[])
            .iter()
            .map(|(name, value)| Parameter {
                name: (*name).clone(),
                value: (*value).clone(),
            })
            .collect();

        let next_token = if end < matching.len() {
            Some(end.to_string())
        } else {
            None
        };

        Ok(ParameterPage {
            parameters,
            next_token,
        })
    }
}
