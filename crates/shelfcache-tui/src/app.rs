//! Application state management for shelfcache.
//!
//! This module contains the core `App` struct: UI state, the filter inputs
//! that drive the inventory listing, the display state the pipelines render
//! into, and coordination of the background loads.

use std::time::Instant;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use shelfcache_core::cache::CacheAges;
use shelfcache_core::debounce::{PRICE_DEBOUNCE, SEARCH_DEBOUNCE};
use shelfcache_core::listing::{parse_bound, ALL_CATEGORIES};
use shelfcache_core::{
    CacheManager, Config, Debouncer, InventoryPage, InventoryPipeline, InventoryQuery,
    InventoryView, LoadOutcome, ScheduleEntry, SchedulePipeline, ScheduleView, SortBy,
    Storefront,
};

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the background task message channel.
/// A load sends at most three view updates plus its completion message.
const CHANNEL_BUFFER_SIZE: usize = 32;

/// Maximum length for the search and price inputs.
const MAX_INPUT_LENGTH: usize = 64;

// ============================================================================
// UI State Types
// ============================================================================

/// Main navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Schedule,
    Inventory,
}

impl Tab {
    /// Get the display title for this tab.
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Schedule => "Schedule",
            Tab::Inventory => "Inventory",
        }
    }

    /// Get the next tab (wrapping around)
    pub fn next(&self) -> Self {
        match self {
            Tab::Schedule => Tab::Inventory,
            Tab::Inventory => Tab::Schedule,
        }
    }

    /// Get the previous tab (wrapping around)
    pub fn prev(&self) -> Self {
        self.next()
    }
}

/// Which price bound is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBound {
    Min,
    Max,
}

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    Searching,
    EditingPrice(PriceBound),
    ShowingHelp,
    ConfirmingQuit,
    Quitting,
}

// ============================================================================
// Display State
// ============================================================================

/// What the schedule tab currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleDisplay {
    Loading,
    Error,
    Empty,
    Entries(Vec<ScheduleEntry>),
}

impl ScheduleView for ScheduleDisplay {
    fn show_loading(&mut self) {
        *self = ScheduleDisplay::Loading;
    }

    fn show_error(&mut self) {
        *self = ScheduleDisplay::Error;
    }

    fn show_empty(&mut self) {
        *self = ScheduleDisplay::Empty;
    }

    fn show_entries(&mut self, entries: &[ScheduleEntry]) {
        *self = ScheduleDisplay::Entries(entries.to_vec());
    }
}

/// What the inventory tab currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryContent {
    Loading,
    Error,
    NoItems,
    Page(InventoryPage),
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryDisplay {
    pub content: InventoryContent,
    /// Set when a page change asked for the inventory to be brought into view
    scroll_requested: bool,
}

impl Default for InventoryDisplay {
    fn default() -> Self {
        Self {
            content: InventoryContent::Loading,
            scroll_requested: false,
        }
    }
}

impl InventoryDisplay {
    pub fn page(&self) -> Option<&InventoryPage> {
        match &self.content {
            InventoryContent::Page(page) => Some(page),
            _ => None,
        }
    }

    fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_requested)
    }
}

impl InventoryView for InventoryDisplay {
    fn show_loading(&mut self) {
        self.content = InventoryContent::Loading;
    }

    fn show_error(&mut self) {
        self.content = InventoryContent::Error;
    }

    fn show_no_items(&mut self) {
        self.content = InventoryContent::NoItems;
    }

    fn show_page(&mut self, page: InventoryPage) {
        self.content = InventoryContent::Page(page);
    }

    fn scroll_into_view(&mut self) {
        self.scroll_requested = true;
    }
}

// ============================================================================
// Background Task Results
// ============================================================================

/// Messages sent from background loads back to the main loop.
///
/// A load runs its pipeline on a spawned task; the pipeline renders into a
/// `ChannelView`, which forwards each view change here. When the load ends
/// the pipeline itself is handed back.
enum RefreshResult {
    Schedule(ScheduleDisplay),
    Inventory(InventoryContent),
    ScheduleDone(Box<SchedulePipeline>, LoadOutcome),
    InventoryDone(Box<InventoryPipeline>, LoadOutcome),
}

/// Render target that forwards view changes over the channel.
struct ChannelView {
    tx: mpsc::Sender<RefreshResult>,
}

impl ChannelView {
    fn send(&self, result: RefreshResult) {
        if let Err(e) = self.tx.try_send(result) {
            warn!(error = %e, "Failed to forward view update");
        }
    }
}

impl ScheduleView for ChannelView {
    fn show_loading(&mut self) {
        self.send(RefreshResult::Schedule(ScheduleDisplay::Loading));
    }

    fn show_error(&mut self) {
        self.send(RefreshResult::Schedule(ScheduleDisplay::Error));
    }

    fn show_empty(&mut self) {
        self.send(RefreshResult::Schedule(ScheduleDisplay::Empty));
    }

    fn show_entries(&mut self, entries: &[ScheduleEntry]) {
        self.send(RefreshResult::Schedule(ScheduleDisplay::Entries(entries.to_vec())));
    }
}

impl InventoryView for ChannelView {
    fn show_loading(&mut self) {
        self.send(RefreshResult::Inventory(InventoryContent::Loading));
    }

    fn show_error(&mut self) {
        self.send(RefreshResult::Inventory(InventoryContent::Error));
    }

    fn show_no_items(&mut self) {
        self.send(RefreshResult::Inventory(InventoryContent::NoItems));
    }

    fn show_page(&mut self, page: InventoryPage) {
        self.send(RefreshResult::Inventory(InventoryContent::Page(page)));
    }
}

// ============================================================================
// Main Application Struct
// ============================================================================

/// Main application state container
pub struct App {
    cache: CacheManager,

    // UI State
    pub state: AppState,
    pub current_tab: Tab,

    // Inventory filter inputs, as typed
    pub search_input: String,
    pub min_price_input: String,
    pub max_price_input: String,
    pub category: String,
    pub sort_by: SortBy,
    pub categories: Vec<String>,

    // Rendered state
    pub schedule: ScheduleDisplay,
    pub inventory: InventoryDisplay,

    // Pipelines are away while a background load runs
    schedule_pipeline: Option<SchedulePipeline>,
    inventory_pipeline: Option<InventoryPipeline>,

    // Debounced inputs
    search_debounce: Debouncer<()>,
    price_debounce: Debouncer<()>,

    // Background task channel
    refresh_rx: mpsc::Receiver<RefreshResult>,
    refresh_tx: mpsc::Sender<RefreshResult>,

    // Status message
    pub status_message: Option<String>,

    // Cache ages for status bar
    pub cache_ages: CacheAges,

    pub offline_mode: bool,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Result<Self> {
        let storefront = Storefront::new(&config)?;
        let cache = storefront.schedule.cache().clone();
        debug!(cache_dir = ?cache.cache_dir(), "Cache directory configured");
        Ok(Self::with_storefront(config, cache, storefront))
    }

    fn with_storefront(config: Config, cache: CacheManager, storefront: Storefront) -> Self {
        let (tx, rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);
        let offline_mode = config.offline_mode;
        let cache_ages = cache.get_cache_ages();

        Self {
            cache,

            state: AppState::Normal,
            current_tab: Tab::Schedule,

            search_input: String::new(),
            min_price_input: String::new(),
            max_price_input: String::new(),
            category: ALL_CATEGORIES.to_string(),
            sort_by: SortBy::Default,
            categories: Vec::new(),

            schedule: ScheduleDisplay::Loading,
            inventory: InventoryDisplay::default(),

            schedule_pipeline: Some(storefront.schedule),
            inventory_pipeline: Some(storefront.inventory),

            search_debounce: Debouncer::new(SEARCH_DEBOUNCE),
            price_debounce: Debouncer::new(PRICE_DEBOUNCE),

            refresh_rx: rx,
            refresh_tx: tx,

            status_message: None,
            cache_ages,
            offline_mode,
        }
    }

    // =========================================================================
    // Background Data Refresh
    // =========================================================================

    pub fn is_refreshing(&self) -> bool {
        self.schedule_pipeline.is_none() || self.inventory_pipeline.is_none()
    }

    /// Spawn background loads for both datasets. A dataset whose previous
    /// load is still running is skipped.
    pub fn start_refresh(&mut self, force_refresh: bool) {
        if self.is_refreshing() {
            self.status_message = Some("Refresh already in progress...".to_string());
            return;
        }
        info!(force_refresh, "Starting background refresh");

        if let Some(mut pipeline) = self.schedule_pipeline.take() {
            let tx = self.refresh_tx.clone();
            tokio::spawn(async move {
                let mut view = ChannelView { tx: tx.clone() };
                let outcome = pipeline.load(force_refresh, &mut view).await;
                if tx
                    .send(RefreshResult::ScheduleDone(Box::new(pipeline), outcome))
                    .await
                    .is_err()
                {
                    debug!("Schedule load finished after shutdown");
                }
            });
        }

        if let Some(mut pipeline) = self.inventory_pipeline.take() {
            let tx = self.refresh_tx.clone();
            tokio::spawn(async move {
                let mut view = ChannelView { tx: tx.clone() };
                let outcome = pipeline.load(force_refresh, &mut view).await;
                if tx
                    .send(RefreshResult::InventoryDone(Box::new(pipeline), outcome))
                    .await
                    .is_err()
                {
                    debug!("Inventory load finished after shutdown");
                }
            });
        }

        self.status_message = Some(if self.offline_mode {
            "Loading cached data...".to_string()
        } else {
            "Refreshing data...".to_string()
        });
    }

    /// Drain completed background work and apply it.
    pub fn check_background_tasks(&mut self) {
        while let Ok(result) = self.refresh_rx.try_recv() {
            self.process_refresh_result(result);
        }
    }

    fn process_refresh_result(&mut self, result: RefreshResult) {
        match result {
            RefreshResult::Schedule(display) => self.schedule = display,
            RefreshResult::Inventory(content) => self.inventory.content = content,
            RefreshResult::ScheduleDone(pipeline, outcome) => {
                debug!(?outcome, "Schedule load finished");
                self.schedule_pipeline = Some(*pipeline);
                self.finish_refresh();
            }
            RefreshResult::InventoryDone(pipeline, outcome) => {
                debug!(?outcome, "Inventory load finished");
                let mut pipeline = *pipeline;
                self.categories = pipeline.categories();
                if outcome.is_rendered() && pipeline.query() != &self.query() {
                    // Filters changed while the load was running
                    pipeline.render(self.query(), true, &mut self.inventory);
                }
                self.inventory_pipeline = Some(pipeline);
                self.finish_refresh();
            }
        }
    }

    fn finish_refresh(&mut self) {
        self.cache_ages = self.cache.get_cache_ages();
        if self.is_refreshing() {
            return;
        }
        self.status_message = match (&self.schedule, &self.inventory.content) {
            (ScheduleDisplay::Error, _) | (_, InventoryContent::Error) => {
                Some("Some data could not be loaded".to_string())
            }
            _ => None,
        };
    }

    // =========================================================================
    // Inventory Query
    // =========================================================================

    /// The listing query described by the current filter inputs.
    pub fn query(&self) -> InventoryQuery {
        InventoryQuery::default()
            .with_category(self.category.clone())
            .with_search(self.search_input.clone())
            .with_sort(self.sort_by)
            .with_price_range(
                parse_bound(&self.min_price_input),
                parse_bound(&self.max_price_input),
            )
    }

    /// Re-render the inventory from page 1 under the current inputs. While a
    /// load is running the render happens when the pipeline comes back.
    pub fn apply_query(&mut self) {
        let query = self.query();
        if let Some(pipeline) = self.inventory_pipeline.as_mut() {
            pipeline.render(query, true, &mut self.inventory);
        }
    }

    /// Called from the main loop; applies debounced inputs whose delay has passed.
    pub fn tick(&mut self, now: Instant) {
        let search_due = self.search_debounce.poll(now).is_some();
        let price_due = self.price_debounce.poll(now).is_some();
        if search_due || price_due {
            self.apply_query();
        }
    }

    pub fn push_search_char(&mut self, c: char, now: Instant) {
        if can_add_input_char(self.search_input.len(), c) {
            self.search_input.push(c);
            self.search_debounce.trigger((), now);
        }
    }

    pub fn pop_search_char(&mut self, now: Instant) {
        if self.search_input.pop().is_some() {
            self.search_debounce.trigger((), now);
        }
    }

    /// Apply the search term now instead of waiting out the delay.
    pub fn commit_search(&mut self) {
        if self.search_debounce.flush().is_some() {
            self.apply_query();
        }
    }

    pub fn clear_search(&mut self) {
        self.search_debounce.cancel();
        if !self.search_input.is_empty() {
            self.search_input.clear();
            self.apply_query();
        }
    }

    fn price_input_mut(&mut self, bound: PriceBound) -> &mut String {
        match bound {
            PriceBound::Min => &mut self.min_price_input,
            PriceBound::Max => &mut self.max_price_input,
        }
    }

    pub fn push_price_char(&mut self, bound: PriceBound, c: char, now: Instant) {
        if !is_price_char(c) {
            return;
        }
        let input = self.price_input_mut(bound);
        if can_add_input_char(input.len(), c) {
            input.push(c);
            self.price_debounce.trigger((), now);
        }
    }

    pub fn pop_price_char(&mut self, bound: PriceBound, now: Instant) {
        if self.price_input_mut(bound).pop().is_some() {
            self.price_debounce.trigger((), now);
        }
    }

    pub fn commit_price(&mut self) {
        if self.price_debounce.flush().is_some() {
            self.apply_query();
        }
    }

    pub fn clear_price(&mut self, bound: PriceBound) {
        let input = self.price_input_mut(bound);
        if !input.is_empty() {
            input.clear();
            self.price_debounce.cancel();
            self.apply_query();
        }
    }

    /// Step through "all" and the known categories.
    pub fn cycle_category(&mut self, forward: bool) {
        let mut options = vec![ALL_CATEGORIES.to_string()];
        options.extend(self.categories.iter().cloned());

        let current = options.iter().position(|c| *c == self.category).unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else {
            (current + options.len() - 1) % options.len()
        };
        self.category = options[next].clone();
        self.apply_query();
    }

    pub fn cycle_sort(&mut self) {
        self.sort_by = self.sort_by.next();
        self.apply_query();
    }

    /// Reset every filter input to its default.
    pub fn reset_filters(&mut self) {
        self.search_debounce.cancel();
        self.price_debounce.cancel();
        self.search_input.clear();
        self.min_price_input.clear();
        self.max_price_input.clear();
        self.category = ALL_CATEGORIES.to_string();
        self.sort_by = SortBy::Default;
        self.apply_query();
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    pub fn current_page(&self) -> Option<usize> {
        self.inventory
            .page()
            .map(|page| page.pagination.current_page)
    }

    pub fn go_to_page(&mut self, page: usize) {
        let total = self
            .inventory
            .page()
            .map(|p| p.pagination.total_pages)
            .unwrap_or(0);
        if page == 0 || page > total {
            return;
        }
        if let Some(pipeline) = self.inventory_pipeline.as_mut() {
            pipeline.go_to_page(page, &mut self.inventory);
            self.follow_scroll_request();
        }
    }

    pub fn prev_page(&mut self) {
        if let Some(pipeline) = self.inventory_pipeline.as_mut() {
            if pipeline.prev_page(&mut self.inventory) {
                self.follow_scroll_request();
            }
        }
    }

    pub fn next_page(&mut self) {
        if let Some(pipeline) = self.inventory_pipeline.as_mut() {
            if pipeline.next_page(&mut self.inventory) {
                self.follow_scroll_request();
            }
        }
    }

    fn follow_scroll_request(&mut self) {
        if self.inventory.take_scroll_request() {
            self.current_tab = Tab::Inventory;
        }
    }
}

// ============================================================================
// Input validation helpers (exported for use in input.rs)
// ============================================================================

/// Check if a character is valid for input (no control characters)
fn is_valid_input_char(c: char) -> bool {
    !c.is_control()
}

/// Check if an input character should be accepted
pub fn can_add_input_char(current_len: usize, c: char) -> bool {
    current_len < MAX_INPUT_LENGTH && is_valid_input_char(c)
}

/// Characters a price bound may contain
pub fn is_price_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '$' | ',' | '-')
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use shelfcache_core::{Dataset, InventoryItem, SheetClient};

    fn item(category: &str, name: &str, price: f64) -> InventoryItem {
        InventoryItem {
            category: category.to_string(),
            name: name.to_string(),
            price: format!("${}", price),
            price_value: price,
            image: String::new(),
        }
    }

    /// An offline app over a cache seeded with `items`, loaded and idle.
    async fn loaded_app(dir: &tempfile::TempDir, items: &[InventoryItem]) -> App {
        let cache = CacheManager::new(dir.path().to_path_buf()).unwrap();
        cache.save_snapshot(Dataset::Inventory, items).unwrap();

        let config = Config {
            inventory_url: Some("http://127.0.0.1:9/inventory".to_string()),
            offline_mode: true,
            ..Config::default()
        };
        let client = SheetClient::new(Duration::from_secs(1)).unwrap();
        let storefront = Storefront::from_parts(client, cache.clone(), &config);
        let mut app = App::with_storefront(config, cache, storefront);

        app.start_refresh(false);
        while app.is_refreshing() {
            tokio::time::sleep(Duration::from_millis(5)).await;
            app.check_background_tasks();
        }
        app
    }

    fn shelf(count: usize) -> Vec<InventoryItem> {
        (1..=count)
            .map(|i| item(if i % 2 == 0 { "sealed" } else { "singles" }, &format!("Item {i:02}"), i as f64))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Tab Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_tab_next() {
        assert_eq!(Tab::Schedule.next(), Tab::Inventory);
        assert_eq!(Tab::Inventory.next(), Tab::Schedule); // Wraps around
    }

    #[test]
    fn test_tab_prev() {
        assert_eq!(Tab::Schedule.prev(), Tab::Inventory);
        assert_eq!(Tab::Inventory.prev(), Tab::Schedule);
    }

    // -------------------------------------------------------------------------
    // Display Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_schedule_display_follows_view_calls() {
        let mut display = ScheduleDisplay::Loading;
        display.show_error();
        assert_eq!(display, ScheduleDisplay::Error);
        display.show_empty();
        assert_eq!(display, ScheduleDisplay::Empty);
    }

    #[test]
    fn test_inventory_scroll_request_is_taken_once() {
        let mut display = InventoryDisplay::default();
        display.scroll_into_view();
        assert!(display.take_scroll_request());
        assert!(!display.take_scroll_request());
    }

    // -------------------------------------------------------------------------
    // Background Load Tests
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_offline_load_renders_cached_inventory() {
        let dir = tempfile::TempDir::new().unwrap();
        let app = loaded_app(&dir, &shelf(12)).await;

        let page = app.inventory.page().unwrap_or_else(|| panic!("page rendered"));
        assert_eq!(page.items.len(), 9);
        assert_eq!(page.pagination.total_pages, 2);
        assert_eq!(app.categories, vec!["sealed", "singles"]);
        // No schedule endpoint: the loading view stays up
        assert_eq!(app.schedule, ScheduleDisplay::Loading);
    }

    // -------------------------------------------------------------------------
    // Filter Tests
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_search_applies_after_debounce() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut app = loaded_app(&dir, &shelf(12)).await;
        let start = Instant::now();

        app.push_search_char('1', start);
        app.push_search_char('1', start + Duration::from_millis(100));
        app.tick(start + Duration::from_millis(300));
        assert_eq!(app.inventory.page().map(|p| p.items.len()), Some(9));

        app.tick(start + Duration::from_millis(400));
        let page = app.inventory.page().unwrap_or_else(|| panic!("page rendered"));
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Item 11");
    }

    #[tokio::test]
    async fn test_price_bounds_apply_on_commit() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut app = loaded_app(&dir, &shelf(12)).await;
        let now = Instant::now();

        for c in "$10".chars() {
            app.push_price_char(PriceBound::Min, c, now);
        }
        app.push_price_char(PriceBound::Min, 'x', now);
        assert_eq!(app.min_price_input, "$10");

        app.commit_price();
        let names: Vec<&str> = app
            .inventory
            .page()
            .map(|p| p.items.iter().map(|i| i.name.as_str()).collect())
            .unwrap_or_default();
        assert_eq!(names, vec!["Item 10", "Item 11", "Item 12"]);
    }

    #[tokio::test]
    async fn test_category_cycle_wraps_through_all() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut app = loaded_app(&dir, &shelf(4)).await;

        app.cycle_category(true);
        assert_eq!(app.category, "sealed");
        app.cycle_category(true);
        assert_eq!(app.category, "singles");
        app.cycle_category(true);
        assert_eq!(app.category, ALL_CATEGORIES);
        app.cycle_category(false);
        assert_eq!(app.category, "singles");
        assert_eq!(app.inventory.page().map(|p| p.items.len()), Some(2));
    }

    #[tokio::test]
    async fn test_no_matches_shows_no_items() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut app = loaded_app(&dir, &shelf(4)).await;

        app.max_price_input = "0.5".to_string();
        app.apply_query();

        assert_eq!(app.inventory.content, InventoryContent::NoItems);
    }

    // -------------------------------------------------------------------------
    // Pagination Tests
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_page_change_switches_to_inventory_tab() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut app = loaded_app(&dir, &shelf(23)).await;
        assert_eq!(app.current_tab, Tab::Schedule);

        app.go_to_page(3);

        assert_eq!(app.current_page(), Some(3));
        assert_eq!(app.current_tab, Tab::Inventory);
        assert_eq!(app.inventory.page().map(|p| p.items.len()), Some(5));
    }

    #[tokio::test]
    async fn test_out_of_range_page_is_ignored() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut app = loaded_app(&dir, &shelf(23)).await;

        app.go_to_page(4);
        app.go_to_page(0);
        app.prev_page();

        assert_eq!(app.current_page(), Some(1));
        assert_eq!(app.current_tab, Tab::Schedule);
    }

    #[tokio::test]
    async fn test_sort_change_returns_to_first_page() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut app = loaded_app(&dir, &shelf(23)).await;

        app.next_page();
        assert_eq!(app.current_page(), Some(2));

        app.cycle_sort();
        assert_eq!(app.sort_by, SortBy::NameAsc);
        assert_eq!(app.current_page(), Some(1));
    }

    // -------------------------------------------------------------------------
    // Input Validation Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_can_add_input_char() {
        assert!(can_add_input_char(0, 'a'));
        assert!(can_add_input_char(63, 'z'));
        assert!(!can_add_input_char(64, 'a'));
        assert!(!can_add_input_char(0, '\n'));
        assert!(!can_add_input_char(0, '\t'));
    }

    #[test]
    fn test_is_price_char() {
        assert!(is_price_char('7'));
        assert!(is_price_char('$'));
        assert!(is_price_char('.'));
        assert!(!is_price_char('a'));
        assert!(!is_price_char(' '));
    }
}
