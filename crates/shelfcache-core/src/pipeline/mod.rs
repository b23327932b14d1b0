//! Load pipelines for the two datasets.
//!
//! Each pipeline owns its in-memory collection and runs the same shape:
//! skip the fetch when the cached snapshot is still fresh, otherwise fetch,
//! normalize, persist and render; any failure falls back to the cached
//! snapshot and, failing that, to the error view. A load never returns an
//! error to its caller; the `LoadOutcome` only reports which view was shown.

pub mod inventory;
pub mod schedule;


use std::time::Duration;

use anyhow::Result;

use crate::api::SheetClient;
use crate::cache::CacheManager;
use crate::config::Config;
use crate::view::{InventoryView, ScheduleView};

pub use inventory::InventoryPipeline;
pub use schedule::SchedulePipeline;

/// Which view a load ended on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Rendered freshly fetched data
    Fresh,
    /// Rendered the cached snapshot
    Cached,
    /// Rendered the error view
    Failed,
    /// No endpoint configured; the loading view stays up
    Unconfigured,
}

impl LoadOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, LoadOutcome::Fresh | LoadOutcome::Cached)
    }
}

/// Both pipelines, wired from one configuration.
pub struct Storefront {
    pub schedule: SchedulePipeline,
    pub inventory: InventoryPipeline,
}

impl Storefront {
    pub fn new(config: &Config) -> Result<Self> {
        let client = SheetClient::new(Duration::from_secs(config.request_timeout_secs))?;
        let cache = CacheManager::new(config.cache_dir()?)?;
        Ok(Self::from_parts(client, cache, config))
    }

    pub fn from_parts(client: SheetClient, cache: CacheManager, config: &Config) -> Self {
        Self {
            schedule: SchedulePipeline::new(
                client.clone(),
                cache.clone(),
                config.schedule_endpoint().map(str::to_string),
            )
            .with_offline(config.offline_mode),
            inventory: InventoryPipeline::new(
                client,
                cache,
                config.inventory_endpoint().map(str::to_string),
            )
            .with_offline(config.offline_mode),
        }
    }

    /// Load both datasets. The two loads run concurrently and independently;
    /// one failing has no effect on the other.
    pub async fn load_all<S, I>(
        &mut self,
        force_refresh: bool,
        schedule_view: &mut S,
        inventory_view: &mut I,
    ) -> (LoadOutcome, LoadOutcome)
    where
        S: ScheduleView + Send,
        I: InventoryView + Send,
    {
        tokio::join!(
            self.schedule.load(force_refresh, schedule_view),
            self.inventory.load(force_refresh, inventory_view),
        )
    }
}
