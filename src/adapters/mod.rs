// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing parameter store implementations.
//!
//! This module contains concrete implementations of the `ParameterStore`
//! trait defined in the ports layer. Each adapter provides parameters from a
//! specific backing store.

pub mod memory;
#[cfg(feature = "aws")]
pub mod ssm;

// Re-export adapters based on feature flags
pub use memory::MemoryStore;
#[cfg(feature = "aws")]
pub use ssm::SsmAdapter;
