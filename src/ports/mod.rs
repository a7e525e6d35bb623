// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that define the
//! interfaces for the backing parameter store. These traits are implemented
//! by adapters in the adapters layer.

pub mod store;

// Re-export commonly used types
pub use store::{Parameter, ParameterPage, ParameterStore};
