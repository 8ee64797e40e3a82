//! # lrucache
//!
//! Fixed-capacity, string-keyed cache with least-recently-used eviction.
//!
//! ## Architecture
//! - **HashMap**: AHash index from key to list slot (O(1))
//! - **Recency list**: slab-backed doubly-linked list, head = most recent (O(1))
//! - **Single-threaded**: no locks, callers synchronize if they share it
//!
//! ```
//! use lrucache::Lru;
//!
//! let mut cache = Lru::new(2).unwrap();
//! assert!(!cache.add("dog", "Pingo"));
//! assert!(!cache.add("bird", "John"));
//! assert!(cache.add("salamander", "Bob"));
//!
//! assert_eq!(cache.get("dog"), None);
//! assert_eq!(cache.get("bird"), Some(&"John"));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod list;
mod lru;
mod stats;

pub use config::{LruConfig, DEFAULT_CAPACITY};
pub use error::{Error, Result};
pub use list::Iter;
pub use lru::Lru;
pub use stats::Stats;
