// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parameter store test doubles shared across integration tests.

use async_trait::async_trait;
use ssmcfg::adapters::MemoryStore;
use ssmcfg::domain::{ConfigError, Result};
use ssmcfg::ports::{ParameterPage, ParameterStore};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Wraps a store and counts how many calls reach it.
///
/// Used to assert the one-fetch-per-cache-key invariant.
#[allow(dead_code)]
pub struct CountingStore<S> {
    inner: S,
    parameter_calls: AtomicUsize,
    page_calls: AtomicUsize,
}

#[allow(dead_code)]
impl<S> CountingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            parameter_calls: AtomicUsize::new(0),
            page_calls: AtomicUsize::new(0),
        }
    }

    /// Number of single-parameter fetches that reached the inner store.
    pub fn parameter_calls(&self) -> usize {
        self.parameter_calls.load(Ordering::SeqCst)
    }

    /// Number of page fetches that reached the inner store.
    pub fn page_calls(&self) -> usize {
        self.page_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<S: ParameterStore> ParameterStore for CountingStore<S> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn get_parameter(&self, name: &str, decrypt: bool) -> Result<Option<String>> {
        self.parameter_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_parameter(name, decrypt).await
    }

    async fn get_parameters_by_path(
        &self,
        path: &str,
        recursive: bool,
        decrypt: bool,
        next_token: Option<String>,
    ) -> Result<ParameterPage> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);
        self.inner
            .get_parameters_by_path(path, recursive, decrypt, next_token)
            .await
    }
}

/// Wraps a store and fails exactly one page fetch, by ordinal.
///
/// Used to exercise mid-paging failures: earlier pages succeed, the
/// configured call errors, and later calls go through again.
#[allow(dead_code)]
pub struct FailingStore<S> {
    inner: S,
    fail_on_call: usize,
    page_calls: AtomicUsize,
}

#[allow(dead_code)]
impl<S> FailingStore<S> {
    /// Fails the `fail_on_call`-th page fetch (1-based).
    pub fn new(inner: S, fail_on_call: usize) -> Self {
        Self {
            inner,
            fail_on_call,
            page_calls: AtomicUsize::new(0),
        }
    }

    pub fn page_calls(&self) -> usize {
        self.page_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<S: ParameterStore> ParameterStore for FailingStore<S> {
    fn name(&self) -> &str {
        "failing"
    }

    async fn get_parameter(&self, name: &str, decrypt: bool) -> Result<Option<String>> {
        self.inner.get_parameter(name, decrypt).await
    }

    async fn get_parameters_by_path(
        &self,
        path: &str,
        recursive: bool,
        decrypt: bool,
        next_token: Option<String>,
    ) -> Result<ParameterPage> {
        let call = self.page_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call == self.fail_on_call {
            return Err(ConfigError::StoreError {
                store: "failing".to_string(),
                message: format!("Injected failure on page fetch {}", call),
                source: None,
            });
        }
        self.inner
            .get_parameters_by_path(path, recursive, decrypt, next_token)
            .await
    }
}

/// A store seeded with the dev-environment fixture used across tests.
#[allow(dead_code)]
pub fn dev_store() -> MemoryStore {
    MemoryStore::new()
        .with_parameter("/gadgetcloud/dev/database/host", "localhost")
        .with_parameter("/gadgetcloud/dev/database/port", "5433")
        .with_parameter("/gadgetcloud/dev/database/name", "gadgets")
        .with_parameter("/gadgetcloud/dev/database/password", "s3cret")
        .with_parameter("/gadgetcloud/dev/api/base_url", "https://api.gadgetcloud.io")
        .with_parameter("/gadgetcloud/dev/api/rate_limit", "250")
        .with_parameter("/gadgetcloud/dev/features/enable_analytics", "true")
}
