// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parameter store trait definition.
//!
//! This module defines the `ParameterStore` trait, which is the primary port
//! (interface) for backing parameter stores. Any store offering named
//! parameters and paged path listings (AWS SSM, an in-memory fixture, etc.)
//! must implement this trait.

use crate::domain::Result;
use async_trait::async_trait;

/// One parameter record returned by a store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    /// Fully-qualified parameter name (e.g. `/gadgetcloud/dev/database/host`).
    pub name: String,
    /// The parameter's string value.
    pub value: String,
}

/// One page of parameters from a paged path listing.
///
/// A page may be empty. The continuation token, when present, must be passed
/// back on the next call to resume the listing; its absence signals the last
/// page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterPage {
    /// Parameters contained in this page.
    pub parameters: Vec<Parameter>,
    /// Continuation token for the next page; `None` on the last page.
    pub next_token: Option<String>,
}

/// A trait for paged, path-hierarchical parameter stores.
///
/// This trait defines the interface that all backing stores must implement.
/// It provides a single-parameter fetch with a not-found signal and a paged
/// fetch of all parameters under a path prefix.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow for use in multi-threaded
/// contexts.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use ssmcfg::domain::Result;
/// use ssmcfg::ports::{ParameterPage, ParameterStore};
///
/// struct StaticStore;
///
/// #[async_trait]
/// impl ParameterStore for StaticStore {
///     fn name(&self) -> &str {
///         "static"
///     }
///
///     async fn get_parameter(&self, name: &str, _decrypt: bool) -> Result<Option<String>> {
///         Ok((name == "/demo/greeting").then(|| "hello".to_string()))
///     }
///
///     async fn get_parameters_by_path(
///         &self,
///         _path: &str,
///         _recursive: bool,
///         _decrypt: bool,
///         _next_token: Option<String>,
///     ) -> Result<ParameterPage> {
///         Ok(ParameterPage::default())
///     }
/// }
/// ```
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Returns the name of this parameter store.
    ///
    /// This name is used for logging and error messages. It should be a
    /// short, descriptive identifier like "ssm" or "memory".
    fn name(&self) -> &str;

    /// Fetches a single parameter by fully-qualified name.
    ///
    /// # Arguments
    ///
    /// * `name` - The fully-qualified parameter name
    /// * `decrypt` - Whether to decrypt an encrypted parameter value
    ///
    /// # Returns
    ///
    /// * `Ok(Some(String))` - The parameter's value
    /// * `Ok(None)` - The store reports the parameter does not exist
    /// * `Err(ConfigError)` - Any other store failure
    async fn get_parameter(&self, name: &str, decrypt: bool) -> Result<Option<String>>;

    /// Fetches one page of parameters under a path prefix.
    ///
    /// Callers resume the listing by passing the returned page's
    /// `next_token` back in; the listing is complete when a page carries no
    /// token.
    ///
    /// # Arguments
    ///
    /// * `path` - The fully-qualified path prefix
    /// * `recursive` - Whether to traverse nested paths below the prefix
    /// * `decrypt` - Whether to decrypt encrypted parameter values
    /// * `next_token` - Continuation token from the previous page, if any
    async fn get_parameters_by_path(
        &self,
        path: &str,
        recursive: bool,
        decrypt: bool,
        next_token: Option<String>,
    ) -> Result<ParameterPage>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestStore;

    #[async_trait]
    impl ParameterStore for TestStore {
        fn name(&self) -> &str {
            "test-store"
        }

        async fn get_parameter(&self, _name: &str, _decrypt: bool) -> Result<Option<String>> {
            Ok(None)
        }

        async fn get_parameters_by_path(
            &self,
            _path: &str,
            _recursive: bool,
            _decrypt: bool,
            _next_token: Option<String>,
        ) -> Result<ParameterPage> {
            Ok(ParameterPage::default())
        }
    }

    #[test]
    fn test_store_name() {
        let store = TestStore;
        assert_eq!(store.name(), "test-store");
    }

    #[tokio::test]
    async fn test_store_not_found_signal() {
        let store = TestStore;
        let result = store.get_parameter("/missing", false).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_default_page_is_last() {
        let store = TestStore;
        let page = store
            .get_parameters_by_path("/demo", true, false, None)
            .await
            .unwrap();
        assert!(page.parameters.is_empty());
        assert!(page.next_token.is_none());
    }

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Box<dyn ParameterStore>>();
    }
}
