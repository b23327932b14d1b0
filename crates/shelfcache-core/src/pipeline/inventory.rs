use std::collections::BTreeSet;

use tracing::{debug, error, info, warn};

use super::LoadOutcome;
use crate::api::{ApiError, SheetClient};
use crate::cache::{CacheManager, Dataset};
use crate::listing::{InventoryQuery, Pager};
use crate::models::{normalize_inventory, InventoryItem};
use crate::view::{InventoryPage, InventoryView};

const DATASET: Dataset = Dataset::Inventory;

/// Fetches, caches and renders the inventory, and owns the listing state
/// (last query and page cursor) that survives between renders.
pub struct InventoryPipeline {
    client: SheetClient,
    cache: CacheManager,
    endpoint: Option<String>,
    offline: bool,
    items: Vec<InventoryItem>,
    query: InventoryQuery,
    pager: Pager,
}

impl InventoryPipeline {
    pub fn new(client: SheetClient, cache: CacheManager, endpoint: Option<String>) -> Self {
        Self {
            client,
            cache,
            endpoint,
            offline: false,
            items: Vec::new(),
            query: InventoryQuery::default(),
            pager: Pager::default(),
        }
    }

    /// When offline the network is never touched; only the snapshot is used.
    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn query(&self) -> &InventoryQuery {
        &self.query
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    pub fn cache(&self) -> &CacheManager {
        &self.cache
    }

    /// Distinct categories on the shelf, alphabetically.
    pub fn categories(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| item.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub async fn load<V: InventoryView>(&mut self, force_refresh: bool, view: &mut V) -> LoadOutcome {
        let Some(url) = self.endpoint.clone() else {
            debug!("No inventory endpoint configured");
            view.show_loading();
            return LoadOutcome::Unconfigured;
        };

        if self.offline {
            info!("Offline mode - rendering cached inventory");
            return self.fall_back(view);
        }

        if !force_refresh && !self.cache.should_refresh(DATASET) {
            if let Some(items) = self.cache.cached(DATASET) {
                debug!("Inventory cache is fresh, skipping fetch");
                self.replace_items(items, view);
                return LoadOutcome::Cached;
            }
        }

        view.show_loading();

        match self.fetch(&url).await {
            Ok(items) => {
                info!(count = items.len(), "Inventory loaded");
                self.persist(&items);
                self.replace_items(items, view);
                LoadOutcome::Fresh
            }
            Err(e) => {
                if e.is_shape_failure() {
                    error!(error = %e, url = %url, "Inventory sheet returned an unexpected payload");
                } else {
                    error!(error = %e, url = %url, "Error loading inventory");
                }
                self.fall_back(view)
            }
        }
    }

    async fn fetch(&self, url: &str) -> Result<Vec<InventoryItem>, ApiError> {
        let rows = self.client.fetch_inventory_rows(url).await?;
        Ok(normalize_inventory(&rows))
    }

    fn persist(&self, items: &[InventoryItem]) {
        if let Err(e) = self.cache.save_snapshot(DATASET, items) {
            warn!(error = %e, "Failed to cache inventory");
            return;
        }
        if let Err(e) = self.cache.record_refresh(DATASET) {
            warn!(error = %e, "Failed to record inventory refresh time");
        }
    }

    fn fall_back<V: InventoryView>(&mut self, view: &mut V) -> LoadOutcome {
        match self.cache.cached(DATASET) {
            Some(items) => {
                info!("Rendering cached inventory");
                self.replace_items(items, view);
                LoadOutcome::Cached
            }
            None => {
                view.show_error();
                LoadOutcome::Failed
            }
        }
    }

    /// Swap in a whole new collection and show its first page under the
    /// current query.
    fn replace_items<V: InventoryView>(&mut self, items: Vec<InventoryItem>, view: &mut V) {
        self.items = items;
        self.show(true, view);
    }

    /// Re-derive the listing for `query` and render the current page.
    pub fn render<V: InventoryView>(&mut self, query: InventoryQuery, reset_page: bool, view: &mut V) {
        self.query = query;
        self.show(reset_page, view);
    }

    /// Jump to `page`, render it, and bring the section into view.
    pub fn go_to_page<V: InventoryView>(&mut self, page: usize, view: &mut V) {
        self.pager.set_page(page);
        self.show(false, view);
        view.scroll_into_view();
    }

    /// Returns false (and renders nothing) when already on the first page.
    pub fn prev_page<V: InventoryView>(&mut self, view: &mut V) -> bool {
        if !self.pager.has_prev() {
            return false;
        }
        self.go_to_page(self.pager.current_page() - 1, view);
        true
    }

    /// Returns false (and renders nothing) when already on the last page.
    pub fn next_page<V: InventoryView>(&mut self, view: &mut V) -> bool {
        if !self.pager.has_next() {
            return false;
        }
        self.go_to_page(self.pager.current_page() + 1, view);
        true
    }

    fn show<V: InventoryView>(&mut self, reset_page: bool, view: &mut V) {
        let matched = self.query.apply(&self.items);
        let range = self.pager.paginate(matched.len(), reset_page);

        if matched.is_empty() {
            view.show_no_items();
            return;
        }

        let page = InventoryPage {
            items: matched[range].iter().map(|item| (*item).clone()).collect(),
            pagination: self.pager.controls(matched.len()),
        };
        debug!(
            page = page.pagination.current_page,
            total_pages = page.pagination.total_pages,
            total_items = page.pagination.total_items,
            "Rendering inventory page"
        );
        view.show_page(page);
    }
}
