//! Core library for shelfcache.
//!
//! Fetches the shop's schedule and inventory sheets, caches them on disk,
//! normalizes the loosely typed rows, and renders them through pluggable
//! render targets. The inventory side also carries the filter, search,
//! sort and pagination engine used by the front ends.

pub mod api;
pub mod cache;
pub mod config;
pub mod debounce;
pub mod listing;
pub mod models;
pub mod pipeline;
pub mod utils;
pub mod view;

pub use api::{ApiError, SheetClient};
pub use cache::{CacheManager, Dataset};
pub use config::Config;
pub use debounce::Debouncer;
pub use listing::{InventoryQuery, PageButton, PaginationControls, SortBy};
pub use models::{InventoryItem, ScheduleEntry};
pub use pipeline::{InventoryPipeline, LoadOutcome, SchedulePipeline, Storefront};
pub use view::{InventoryPage, InventoryView, ScheduleView};
