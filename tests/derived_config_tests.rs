// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the typed configuration projections.

mod common;

use common::dev_store;
use ssmcfg::adapters::MemoryStore;
use ssmcfg::domain::{ApiConfig, ConfigError, DatabaseConfig};
use ssmcfg::service::ConfigLoader;
use std::sync::Arc;

#[tokio::test]
async fn test_database_config_projects_known_sub_keys() {
    let loader = ConfigLoader::builder(Arc::new(dev_store())).environment("dev").build();

    let config = loader.get_database_config().await.unwrap();
    assert_eq!(
        config,
        DatabaseConfig {
            host: Some("localhost".to_string()),
            port: 5433,
            database: Some("gadgets".to_string()),
            password: Some("s3cret".to_string()),
        }
    );
}

#[tokio::test]
async fn test_database_config_defaults_missing_port() {
    let store = MemoryStore::new()
        .with_parameter("/gadgetcloud/dev/database/host", "localhost")
        .with_parameter("/gadgetcloud/dev/database/name", "gadgets");
    let loader = ConfigLoader::builder(Arc::new(store)).environment("dev").build();

    let config = loader.get_database_config().await.unwrap();
    assert_eq!(config.port, 5432);
}

#[tokio::test]
async fn test_prod_database_config_example() {
    let store = MemoryStore::new()
        .with_parameter("/gadgetcloud/prod/database/host", "db1")
        .with_parameter("/gadgetcloud/prod/database/name", "app");
    let loader = ConfigLoader::builder(Arc::new(store)).environment("prod").build();

    let config = loader.get_database_config().await.unwrap();
    assert_eq!(
        config,
        DatabaseConfig {
            host: Some("db1".to_string()),
            port: 5432,
            database: Some("app".to_string()),
            password: None,
        }
    );
}

#[tokio::test]
async fn test_api_config_projects_known_sub_keys() {
    let loader = ConfigLoader::builder(Arc::new(dev_store())).environment("dev").build();

    let config = loader.get_api_config().await.unwrap();
    assert_eq!(
        config,
        ApiConfig {
            base_url: Some("https://api.gadgetcloud.io".to_string()),
            rate_limit: 250,
        }
    );
}

#[tokio::test]
async fn test_api_config_defaults_missing_rate_limit() {
    let store = MemoryStore::new()
        .with_parameter("/gadgetcloud/dev/api/base_url", "https://api.gadgetcloud.io");
    let loader = ConfigLoader::builder(Arc::new(store)).environment("dev").build();

    let config = loader.get_api_config().await.unwrap();
    assert_eq!(config.rate_limit, 1000);
}

#[tokio::test]
async fn test_empty_paths_yield_all_defaults() {
    let loader = ConfigLoader::builder(Arc::new(MemoryStore::new()))
        .environment("dev")
        .build();

    let database = loader.get_database_config().await.unwrap();
    assert_eq!(database.host, None);
    assert_eq!(database.port, DatabaseConfig::DEFAULT_PORT);

    let api = loader.get_api_config().await.unwrap();
    assert_eq!(api.base_url, None);
    assert_eq!(api.rate_limit, ApiConfig::DEFAULT_RATE_LIMIT);
}

#[tokio::test]
async fn test_malformed_port_is_a_conversion_error() {
    let store = MemoryStore::new()
        .with_parameter("/gadgetcloud/dev/database/port", "eighty");
    let loader = ConfigLoader::builder(Arc::new(store)).environment("dev").build();

    let err = loader.get_database_config().await.unwrap_err();
    assert!(matches!(err, ConfigError::TypeConversionError { .. }));
    assert!(err.to_string().contains("database/port"));
}
