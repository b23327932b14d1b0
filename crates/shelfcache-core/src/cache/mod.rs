//! Local caching module for offline data access.
//!
//! This module provides the `CacheManager`, a small file-backed key-value
//! store holding the last good snapshot of each dataset together with the
//! time it was fetched. A snapshot is due for refresh after 24 hours.
//!
//! Keys per dataset:
//! - `cached_<dataset>`: serialized array of normalized records
//! - `lastRefresh_<dataset>`: epoch milliseconds of the last successful fetch

pub mod manager;
pub mod policy;

pub use manager::{CacheAges, CacheManager, Dataset};
