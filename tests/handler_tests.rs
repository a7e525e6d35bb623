// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the invocation entrypoint.

mod common;

use common::dev_store;
use ssmcfg::adapters::MemoryStore;
use ssmcfg::domain::ConfigError;
use ssmcfg::handler::{handle, InvocationContext, InvocationResponse};
use ssmcfg::service::ConfigLoader;
use std::sync::Arc;

#[tokio::test]
async fn test_handle_reports_success_and_environment() {
    let loader = ConfigLoader::builder(Arc::new(dev_store())).environment("dev").build();

    let response = handle(&loader, serde_json::Value::Null, &InvocationContext::default())
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);

    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["message"], "Configuration loaded successfully");
    assert_eq!(body["environment"], "dev");
}

#[tokio::test]
async fn test_handle_ignores_the_event_payload() {
    let loader = ConfigLoader::builder(Arc::new(dev_store())).environment("dev").build();
    let event = serde_json::json!({ "Records": [{ "eventSource": "aws:sqs" }] });
    let context = InvocationContext {
        request_id: Some("req-1234".to_string()),
    };

    let response = handle(&loader, event, &context).await.unwrap();
    assert_eq!(response.status_code, 200);
}

#[tokio::test]
async fn test_handle_propagates_config_load_failure() {
    // Database and API paths resolve, but the feature flag is absent.
    let store = MemoryStore::new()
        .with_parameter("/gadgetcloud/dev/database/host", "localhost")
        .with_parameter("/gadgetcloud/dev/api/base_url", "https://api.gadgetcloud.io");
    let loader = ConfigLoader::builder(Arc::new(store)).environment("dev").build();

    let err = handle(&loader, serde_json::Value::Null, &InvocationContext::default())
        .await
        .unwrap_err();

    match err {
        ConfigError::ParameterNotFound { name } => {
            assert_eq!(name, "/gadgetcloud/dev/features/enable_analytics");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_response_serializes_with_lambda_field_names() {
    let response = InvocationResponse {
        status_code: 200,
        body: "{}".to_string(),
    };

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["statusCode"], 200);
    assert_eq!(value["body"], "{}");
}
