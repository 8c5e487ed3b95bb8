//! Core services - the directory's client-side business logic.
//!
//! Services orchestrate between ports and domain types. They never know
//! which HTTP adapter or navigator sits behind a port.

mod catalog_reader;
mod click_tracker;

pub use catalog_reader::CatalogReader;
pub use click_tracker::{ClickTracker, DEFAULT_QUEUE_CAPACITY, TrackerConfig};
