//! Inventory listing engine.
//!
//! Turns the full inventory into one page of results: category filter,
//! search, price bounds and sort (`query`), then the page cursor and the
//! page-number controls (`pagination`).

pub mod pagination;
pub mod query;

pub use pagination::{page_buttons, PageButton, Pager, PaginationControls, PAGE_SIZE};
pub use query::{parse_bound, InventoryQuery, SortBy, ALL_CATEGORIES};
