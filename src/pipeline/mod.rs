//! Pipeline entry points for harvester operations.
//!
//! - `run_harvest`: Fetch a page and download its linked PDFs

mod assets;
pub mod harvest;

pub use harvest::run_harvest;
