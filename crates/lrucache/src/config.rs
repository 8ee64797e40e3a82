//! Serializable cache configuration

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::lru::Lru;

/// Capacity used when a config omits it
pub const DEFAULT_CAPACITY: i64 = 1024;

/// Cache settings, meant to be embedded in a host application's config
///
/// The capacity is signed so that a negative value in a config file is
/// reported as [`Error::InvalidCapacity`] instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LruConfig {
    /// Maximum number of entries
    pub capacity: i64,
}

impl Default for LruConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl LruConfig {
    /// Config with the given capacity
    pub fn new(capacity: i64) -> Self {
        Self { capacity }
    }

    /// Validated capacity
    ///
    /// # Errors
    /// * `Error::InvalidCapacity` - capacity is zero, negative, or larger
    ///   than `usize`
    pub fn capacity(&self) -> Result<NonZeroUsize> {
        usize::try_from(self.capacity)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(Error::InvalidCapacity(self.capacity))
    }

    /// Build an empty cache from this config
    pub fn build<T>(&self) -> Result<Lru<T>> {
        self.capacity().map(Lru::with_capacity)
    }
}
