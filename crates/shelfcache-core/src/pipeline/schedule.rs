use chrono::{Local, NaiveDate};
use tracing::{debug, error, info, warn};

use super::LoadOutcome;
use crate::api::{ApiError, SheetClient};
use crate::cache::{CacheManager, Dataset};
use crate::models::{normalize_schedule, ScheduleEntry};
use crate::view::ScheduleView;

const DATASET: Dataset = Dataset::Schedules;

/// Fetches, caches and renders the show schedule.
pub struct SchedulePipeline {
    client: SheetClient,
    cache: CacheManager,
    endpoint: Option<String>,
    offline: bool,
    entries: Vec<ScheduleEntry>,
}

impl SchedulePipeline {
    pub fn new(client: SheetClient, cache: CacheManager, endpoint: Option<String>) -> Self {
        Self {
            client,
            cache,
            endpoint,
            offline: false,
            entries: Vec::new(),
        }
    }

    /// When offline the network is never touched; only the snapshot is used.
    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn cache(&self) -> &CacheManager {
        &self.cache
    }

    /// Load the schedule, judging past shows against today's local date.
    pub async fn load<V: ScheduleView>(&mut self, force_refresh: bool, view: &mut V) -> LoadOutcome {
        let today = Local::now().date_naive();
        self.load_on(force_refresh, today, view).await
    }

    /// Load the schedule as of `today`.
    pub async fn load_on<V: ScheduleView>(
        &mut self,
        force_refresh: bool,
        today: NaiveDate,
        view: &mut V,
    ) -> LoadOutcome {
        let Some(url) = self.endpoint.clone() else {
            debug!("No schedule endpoint configured");
            view.show_loading();
            return LoadOutcome::Unconfigured;
        };

        if self.offline {
            info!("Offline mode - rendering cached schedule");
            return self.fall_back(today, view);
        }

        if !force_refresh && !self.cache.should_refresh(DATASET) {
            if let Some(entries) = self.cache.cached(DATASET) {
                debug!("Schedule cache is fresh, skipping fetch");
                self.adopt(entries, today);
                self.render(view);
                return LoadOutcome::Cached;
            }
        }

        view.show_loading();

        match self.fetch(&url, today).await {
            Ok(entries) => {
                info!(count = entries.len(), "Schedule loaded");
                self.persist(&entries);
                self.entries = entries;
                self.render(view);
                LoadOutcome::Fresh
            }
            Err(e) => {
                error!(error = %e, url = %url, "Error loading schedule");
                self.fall_back(today, view)
            }
        }
    }

    async fn fetch(&self, url: &str, today: NaiveDate) -> Result<Vec<ScheduleEntry>, ApiError> {
        let rows = self.client.fetch_schedule_rows(url).await?;
        Ok(normalize_schedule(&rows, today))
    }

    /// Write the snapshot, then the refresh time. A snapshot that failed to
    /// save must not be marked fresh.
    fn persist(&self, entries: &[ScheduleEntry]) {
        if let Err(e) = self.cache.save_snapshot(DATASET, entries) {
            warn!(error = %e, "Failed to cache schedule");
            return;
        }
        if let Err(e) = self.cache.record_refresh(DATASET) {
            warn!(error = %e, "Failed to record schedule refresh time");
        }
    }

    /// Take a snapshot as the current schedule. Shows that have passed since
    /// it was written are dropped.
    fn adopt(&mut self, mut entries: Vec<ScheduleEntry>, today: NaiveDate) {
        let before = entries.len();
        entries.retain(|entry| !entry.is_past(today));
        if entries.len() < before {
            debug!(dropped = before - entries.len(), "Dropped past shows from cached schedule");
        }
        self.entries = entries;
    }

    fn fall_back<V: ScheduleView>(&mut self, today: NaiveDate, view: &mut V) -> LoadOutcome {
        match self.cache.cached(DATASET) {
            Some(entries) => {
                info!("Rendering cached schedule");
                self.adopt(entries, today);
                self.render(view);
                LoadOutcome::Cached
            }
            None => {
                view.show_error();
                LoadOutcome::Failed
            }
        }
    }

    /// Render the in-memory schedule.
    pub fn render<V: ScheduleView>(&self, view: &mut V) {
        if self.entries.is_empty() {
            view.show_empty();
        } else {
            view.show_entries(&self.entries);
        }
    }
}
