// SPDX-License-Identifier: MIT OR Apache-2.0

//! AWS SSM Parameter Store adapter.
//!
//! This module provides an adapter that fetches parameters from AWS Systems
//! Manager Parameter Store.

use crate::domain::{ConfigError, Result};
use crate::ports::{Parameter, ParameterPage, ParameterStore};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_ssm::Client;

/// Parameter store adapter for AWS SSM.
///
/// This adapter wraps an `aws_sdk_ssm::Client`. The store's own
/// parameter-not-found error becomes the port's `Ok(None)` signal; every other
/// SDK failure is surfaced as a store error. The adapter performs no retries
/// or backoff of its own; the SDK's configuration governs request behavior.
///
/// # Examples
///
/// ```rust,no_run
/// use ssmcfg::adapters::SsmAdapter;
/// use ssmcfg::ports::ParameterStore;
///
/// # #[tokio::main]
/// # async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
/// // Build from the ambient AWS configuration (region, credentials chain)
/// let adapter = SsmAdapter::new().await;
///
/// let value = adapter
///     .get_parameter("/gadgetcloud/dev/database/host", true)
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct SsmAdapter {
    /// SSM client
    client: Client,
}

impl SsmAdapter {
    /// Creates an adapter from the ambient AWS configuration.
    ///
    /// Region and credentials are resolved through the standard AWS
    /// credential chain (environment, profile, instance metadata).
    pub async fn new() -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self::from_client(Client::new(&config))
    }

    /// Creates an adapter from an existing SSM client.
    ///
    /// Useful for injecting a client with a custom endpoint or retry
    /// configuration.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ParameterStore for SsmAdapter {
    fn name(&self) -> &str {
        "ssm"
    }

    async fn get_parameter(&self, name: &str, decrypt: bool) -> Result<Option<String>> {
        let result = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(decrypt)
            .send()
            .await;

        match result {
            Ok(output) => Ok(output
                .parameter()
                .and_then(|p| p.value())
                .map(str::to_string)),
            Err(err) => {
                let err = err.into_service_error();
                if err.is_parameter_not_found() {
                    Ok(None)
                } else {
                    Err(ConfigError::StoreError {
                        store: "ssm".to_string(),
                        message: format!("Failed to get parameter '{}': {}", name, err),
                        source: Some(Box::new(err)),
                    })
                }
            }
        }
    }

    async fn get_parameters_by_path(
        &self,
        path: &str,
        recursive: bool,
        decrypt: bool,
        next_token: Option<String>,
    ) -> Result<ParameterPage> {
        let mut request = self
            .client
            .get_parameters_by_path()
            .path(path)
            .recursive(recursive)
            .with_decryption(decrypt);
        if let Some(token) = next_token {
            request = request.next_token(token);
        }

        let output = request.send().await.map_err(|err| {
            let err = err.into_service_error();
            ConfigError::StoreError {
                store: "ssm".to_string(),
                message: format!("Failed to list parameters under '{}': {}", path, err),
                source: Some(Box::new(err)),
            }
        })?;

        let parameters = output
            .parameters()
            .iter()
            .filter_map(|p| match (p.name(), p.value()) {
                (Some(name), Some(value)) => Some(Parameter {
                    name: name.to_string(),
                    value: value.to_string(),
                }),
                _ => None,
            })
            .collect();

        Ok(ParameterPage {
            parameters,
            next_token: output.next_token().map(str::to_string),
        })
    }
}
