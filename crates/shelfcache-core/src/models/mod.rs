//! Data models for the shop's datasets.
//!
//! - `ScheduleEntry`: an upcoming show, normalized from the shows sheet
//! - `InventoryItem`: a product, normalized from the inventory sheet
//!
//! Each model is built from a loosely typed sheet row; rows missing
//! required cells are dropped during normalization.

pub mod inventory;
mod row;
pub mod schedule;

pub use inventory::{format_price, normalize_inventory, parse_price, InventoryItem};
pub use schedule::{month_index, normalize_schedule, ScheduleDay, ScheduleEntry, UNKNOWN_MONTH};
