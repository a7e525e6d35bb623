// SPDX-License-Identifier: MIT OR Apache-2.0

//! Invocation entrypoint glue for serverless runtimes.
//!
//! The handler loads the typed configurations through an injected
//! [`ConfigLoader`] and reports the outcome as a structured response with a
//! status code and a JSON-encoded body. Config-load failures are not caught;
//! they propagate and fail the invocation.

use crate::domain::Result;
use crate::service::ConfigLoader;
use serde::Serialize;
use serde_json::{json, Value};

/// Opaque invocation context passed alongside the event.
///
/// Unused beyond triggering; the request id, when present, is attached to
/// the logs.
#[derive(Clone, Debug, Default)]
pub struct InvocationContext {
    /// Request id assigned by the invoking runtime, when available.
    pub request_id: Option<String>,
}

/// Structured result returned to the invoking runtime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InvocationResponse {
    /// HTTP-style status code.
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// JSON-encoded response body.
    pub body: String,
}

/// Loads the database, API, and feature configuration and reports the outcome.
///
/// The event is opaque and unused beyond triggering the load. On success the
/// response carries status 200 and a JSON body with a success message and the
/// resolved environment name.
///
/// # Examples
///
/// ```rust,no_run
/// use ssmcfg::adapters::SsmAdapter;
/// use ssmcfg::handler::{handle, InvocationContext};
/// use ssmcfg::service::ConfigLoader;
/// use std::sync::Arc;
///
/// # #[tokio::main]
/// # async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
/// let loader = ConfigLoader::new(Arc::new(SsmAdapter::new().await));
/// let response = handle(&loader, serde_json::Value::Null, &InvocationContext::default()).await?;
/// assert_eq!(response.status_code, 200);
/// # Ok(())
/// # }
/// ```
pub async fn handle(
    loader: &ConfigLoader,
    _event: Value,
    context: &InvocationContext,
) -> Result<InvocationResponse> {
    tracing::info!(
        request_id = ?context.request_id,
        environment = loader.environment(),
        "loading configuration"
    );

    let database = loader.get_database_config().await?;
    tracing::info!(host = ?database.host, port = database.port, "database configuration loaded");

    let api = loader.get_api_config().await?;
    tracing::info!(base_url = ?api.base_url, rate_limit = api.rate_limit, "api configuration loaded");

    let analytics = loader.get_parameter("features/enable_analytics", false).await?;
    tracing::info!(enabled = %analytics, "analytics feature flag loaded");

    let body = json!({
        "message": "Configuration loaded successfully",
        "environment": loader.environment(),
    })
    .to_string();

    Ok(InvocationResponse {
        status_code: 200,
        body,
    })
}
