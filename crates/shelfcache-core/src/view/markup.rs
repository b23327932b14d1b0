//! HTML fragments for the storefront page.
//!
//! The page owns its mount points; these targets only produce the markup
//! that goes inside them. All sheet text is escaped.

use super::{InventoryPage, InventoryView, ScheduleView};
use crate::listing::{PageButton, PaginationControls};
use crate::models::{InventoryItem, ScheduleDay, ScheduleEntry};
use crate::utils::escape_html;

/// Placeholder shown when an item has no picture.
const NO_IMAGE: &str = "📦";

/// Element ids of the page's mount points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MountPoint {
    ScheduleGrid,
    InventoryGrid,
    PaginationContainer,
    PageNumbers,
    PrevPage,
    NextPage,
}

impl MountPoint {
    pub fn id(&self) -> &'static str {
        match self {
            MountPoint::ScheduleGrid => "scheduleGrid",
            MountPoint::InventoryGrid => "inventoryGrid",
            MountPoint::PaginationContainer => "paginationContainer",
            MountPoint::PageNumbers => "pageNumbers",
            MountPoint::PrevPage => "prevPage",
            MountPoint::NextPage => "nextPage",
        }
    }
}

fn status_block(class: &str, message: &str) -> String {
    format!(r#"<div class="{}">{}</div>"#, class, message)
}

// ============================================================================
// Schedule
// ============================================================================

/// Markup for the schedule grid.
#[derive(Debug, Default, Clone)]
pub struct ScheduleMarkup {
    pub schedule_grid: String,
}

impl ScheduleMarkup {
    fn entry(entry: &ScheduleEntry) -> String {
        format!(
            concat!(
                r#"<div class="schedule-item">"#,
                r#"<div class="schedule-date"><span class="date-day">{}</span><span class="date-month">{}</span></div>"#,
                r#"<div class="schedule-details"><h3>{}</h3>"#,
                r#"<p class="schedule-location">📍 {}</p><p class="schedule-time">🕐 {}</p>"#,
                r#"</div></div>"#,
            ),
            escape_html(&entry.day.to_string()),
            escape_html(&entry.month),
            escape_html(&entry.title),
            escape_html(&entry.location),
            escape_html(&entry.time),
        )
    }

    pub fn fragments(&self) -> Vec<(MountPoint, String)> {
        vec![(MountPoint::ScheduleGrid, self.schedule_grid.clone())]
    }
}

impl ScheduleView for ScheduleMarkup {
    fn show_loading(&mut self) {
        self.schedule_grid = status_block("schedule-loading", "Loading schedule...");
    }

    fn show_error(&mut self) {
        self.schedule_grid = status_block(
            "schedule-error",
            "Unable to load schedule. Please try again later.",
        );
    }

    fn show_empty(&mut self) {
        self.schedule_grid = status_block("schedule-empty", "No upcoming shows.");
    }

    fn show_entries(&mut self, entries: &[ScheduleEntry]) {
        self.schedule_grid = entries.iter().map(Self::entry).collect();
    }
}

// ============================================================================
// Inventory
// ============================================================================

/// Markup for the inventory grid and its pagination bar.
#[derive(Debug, Clone)]
pub struct InventoryMarkup {
    pub inventory_grid: String,
    pub page_numbers: String,
    pub pagination_visible: bool,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    /// How many times the section asked to be scrolled into view
    pub scroll_requests: usize,
}

impl Default for InventoryMarkup {
    fn default() -> Self {
        Self {
            inventory_grid: String::new(),
            page_numbers: String::new(),
            pagination_visible: false,
            prev_disabled: true,
            next_disabled: true,
            scroll_requests: 0,
        }
    }
}

impl InventoryMarkup {
    fn item(item: &InventoryItem) -> String {
        let image = if item.has_image() {
            format!(
                r#"<img src="{}" alt="{}" loading="lazy" onerror="this.style.display='none'; this.parentElement.textContent='{}';" />"#,
                escape_html(&item.image),
                escape_html(&item.name),
                NO_IMAGE,
            )
        } else {
            NO_IMAGE.to_string()
        };
        format!(
            concat!(
                r#"<div class="inventory-item" data-category="{}">"#,
                r#"<div class="inventory-image">{}</div>"#,
                r#"<h3>{}</h3><p class="inventory-price">{}</p></div>"#,
            ),
            escape_html(&item.category),
            image,
            escape_html(&item.name),
            escape_html(&item.price),
        )
    }

    fn page_button(button: &PageButton) -> String {
        match button {
            PageButton::Page { number, current } => format!(
                r#"<button class="page-number{}" data-page="{}">{}</button>"#,
                if *current { " active" } else { "" },
                number,
                number
            ),
            PageButton::Ellipsis => r#"<span class="page-ellipsis">…</span>"#.to_string(),
        }
    }

    fn hide_pagination(&mut self) {
        self.page_numbers.clear();
        self.pagination_visible = false;
        self.prev_disabled = true;
        self.next_disabled = true;
    }

    fn show_pagination(&mut self, controls: &PaginationControls) {
        if !controls.is_visible() {
            self.hide_pagination();
            return;
        }
        self.page_numbers = controls.buttons.iter().map(Self::page_button).collect();
        self.pagination_visible = true;
        self.prev_disabled = !controls.prev_enabled;
        self.next_disabled = !controls.next_enabled;
    }

    fn nav_button(id: &str, label: &str, disabled: bool) -> String {
        if disabled {
            format!(r#"<button id="{}" disabled style="opacity: 0.5">{}</button>"#, id, label)
        } else {
            format!(r#"<button id="{}">{}</button>"#, id, label)
        }
    }

    pub fn fragments(&self) -> Vec<(MountPoint, String)> {
        let mut fragments = vec![(MountPoint::InventoryGrid, self.inventory_grid.clone())];
        if self.pagination_visible {
            fragments.push((MountPoint::PageNumbers, self.page_numbers.clone()));
            fragments.push((
                MountPoint::PrevPage,
                Self::nav_button(MountPoint::PrevPage.id(), "Previous", self.prev_disabled),
            ));
            fragments.push((
                MountPoint::NextPage,
                Self::nav_button(MountPoint::NextPage.id(), "Next", self.next_disabled),
            ));
        } else {
            fragments.push((
                MountPoint::PaginationContainer,
                r#"<div style="display: none"></div>"#.to_string(),
            ));
        }
        fragments
    }
}

impl InventoryView for InventoryMarkup {
    fn show_loading(&mut self) {
        self.inventory_grid = status_block("inventory-loading", "Loading inventory...");
        self.hide_pagination();
    }

    fn show_error(&mut self) {
        self.inventory_grid = status_block(
            "inventory-error",
            "Unable to load inventory. Please try again later.",
        );
        self.hide_pagination();
    }

    fn show_no_items(&mut self) {
        self.inventory_grid = status_block("inventory-empty", "No items found.");
        self.hide_pagination();
    }

    fn show_page(&mut self, page: InventoryPage) {
        self.inventory_grid = page.items.iter().map(Self::item).collect();
        self.show_pagination(&page.pagination);
    }

    fn scroll_into_view(&mut self) {
        self.scroll_requests += 1;
    }
}
