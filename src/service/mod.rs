// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration loader.
//!
//! This module contains the `ConfigLoader`, which provides the main interface
//! for fetching and caching parameters and projecting them into typed
//! configuration structs.

pub mod loader;

// Re-export commonly used types
pub use loader::{ConfigLoader, ConfigLoaderBuilder};
