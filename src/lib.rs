// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture configuration loading crate backed by AWS SSM
//! Parameter Store.
//!
//! This crate fetches named parameters and parameter-path trees from a paged,
//! path-hierarchical parameter store, caches each result for the lifetime of
//! the process, and reshapes the fetched values into typed configuration
//! structs for use inside a serverless function handler.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and business logic (`CacheKey`, `ParamValue`,
//!   derived configs, errors)
//! - **Ports**: Trait definitions that define interfaces (`ParameterStore`)
//! - **Adapters**: Implementations for specific parameter stores (AWS SSM,
//!   in-memory)
//! - **Service**: The `ConfigLoader` that owns the cache and orchestrates
//!   fetching
//!
//! # Features
//!
//! - **Process-Lifetime Caching**: Each (key, decrypt) or (path, decrypt)
//!   request is fetched at most once per process
//! - **Paged Listing**: Path lookups follow the store's continuation token
//!   until the listing is complete
//! - **Typed Projections**: Database and API settings are projected into
//!   plain structs with integer coercion and static defaults
//! - **Extensible**: Any paged parameter store can back the loader via the
//!   `ParameterStore` trait
//!
//! # Feature Flags
//!
//! - `aws`: Enable the AWS SSM Parameter Store adapter (default)
//!
//! # Quick Start
//!
//! ```rust
//! use ssmcfg::prelude::*;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(
//!     MemoryStore::new().with_parameter("/gadgetcloud/dev/database/host", "localhost"),
//! );
//! let loader = ConfigLoader::builder(store).environment("dev").build();
//!
//! let host = loader.get_parameter("database/host", false).await?;
//! assert_eq!(host.as_str(), "localhost");
//! # Ok(())
//! # }
//! ```
//!
//! Against the real parameter store, construct the loader from an
//! [`adapters::SsmAdapter`] instead and pass it into your handler.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod handler;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{ApiConfig, ConfigError, DatabaseConfig, ParamValue, Result};
    pub use crate::handler::{handle, InvocationContext, InvocationResponse};
    pub use crate::ports::{Parameter, ParameterPage, ParameterStore};
    pub use crate::service::{ConfigLoader, ConfigLoaderBuilder};

    pub use crate::adapters::MemoryStore;
    #[cfg(feature = "aws")]
    pub use crate::adapters::SsmAdapter;
}
