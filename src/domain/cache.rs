// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cache identity and stored results for the parameter loader.
//!
//! This module provides the `CacheKey` and `CacheEntry` types used by the
//! loader's process-lifetime cache. A key uniquely identifies one fetch
//! request; an entry holds the immutable result of that request.

use std::collections::HashMap;
use std::fmt;

/// Uniquely identifies one cached fetch request.
///
/// A key carries the request parameters that make two fetches semantically
/// different: the relative key or path, and the decryption flag. The two
/// variants can never collide, and the same key with different decryption
/// flags caches separately.
///
/// The `Display` form is the deterministic `key:decrypt` /
/// `path:<path>:decrypt` rendering used in log messages.
///
/// # Examples
///
/// ```
/// use ssmcfg::domain::cache::CacheKey;
///
/// let key = CacheKey::parameter("database/host", true);
/// assert_eq!(key.to_string(), "database/host:true");
///
/// let key = CacheKey::path("database", false);
/// assert_eq!(key.to_string(), "path:database:false");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// A single named parameter request.
    Parameter {
        /// The relative parameter key
        key: String,
        /// Whether decryption was requested
        decrypt: bool,
    },
    /// A recursive path listing request.
    Path {
        /// The relative path prefix
        path: String,
        /// Whether decryption was requested
        decrypt: bool,
    },
}

impl CacheKey {
    /// Creates a key for a single-parameter request.
    pub fn parameter(key: impl Into<String>, decrypt: bool) -> Self {
        CacheKey::Parameter {
            key: key.into(),
            decrypt,
        }
    }

    /// Creates a key for a path listing request.
    pub fn path(path: impl Into<String>, decrypt: bool) -> Self {
        CacheKey::Path {
            path: path.into(),
            decrypt,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::Parameter { key, decrypt } => write!(f, "{}:{}", key, decrypt),
            CacheKey::Path { path, decrypt } => write!(f, "path:{}:{}", path, decrypt),
        }
    }
}

/// The immutable result of one cached fetch.
///
/// Entries live for the process lifetime; there is no eviction, TTL, or
/// invalidation. This is acceptable only because the loader targets
/// short-lived, per-invocation processes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CacheEntry {
    /// A single parameter value.
    Value(String),
    /// A map from relative key (base-path prefix stripped) to value,
    /// accumulated from a complete path listing.
    Map(HashMap<String, String>),
}
