//! Render targets.
//!
//! Pipelines never build output themselves; they hand structured display
//! records to a render target. `markup` renders HTML fragments for the
//! page's mount points; front ends implement the traits over their own
//! display state.

pub mod markup;

use crate::listing::PaginationControls;
use crate::models::{InventoryItem, ScheduleEntry};

pub use markup::{InventoryMarkup, MountPoint, ScheduleMarkup};

/// Where the schedule pipeline renders.
pub trait ScheduleView {
    fn show_loading(&mut self);
    fn show_error(&mut self);
    /// The dataset loaded but has no upcoming entries
    fn show_empty(&mut self);
    fn show_entries(&mut self, entries: &[ScheduleEntry]);
}

/// One rendered page of inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryPage {
    pub items: Vec<InventoryItem>,
    pub pagination: PaginationControls,
}

/// Where the inventory pipeline renders.
pub trait InventoryView {
    fn show_loading(&mut self);
    fn show_error(&mut self);
    /// Nothing matched the current filters; pagination is hidden
    fn show_no_items(&mut self);
    fn show_page(&mut self, page: InventoryPage);
    /// Bring the inventory section into view after a page change.
    fn scroll_into_view(&mut self) {}
}
