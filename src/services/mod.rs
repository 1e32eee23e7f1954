//! Service layer for the harvester application.
//!
//! This module contains the per-stage logic:
//! - Page and asset fetching (`PageFetcher`)
//! - PDF link extraction (`links`)
//! - DOI detection (`doi`)

mod fetcher;

pub mod doi;
pub mod links;

pub use fetcher::PageFetcher;
