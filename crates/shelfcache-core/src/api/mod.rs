//! HTTP client module for the published sheet endpoints.
//!
//! This module provides the `SheetClient` for fetching the raw rows behind
//! the schedule and inventory datasets. Endpoints are unauthenticated and
//! answer a plain GET with a JSON array of row objects.

pub mod client;
pub mod error;

pub use client::{RawRow, SheetClient};
pub use error::ApiError;
