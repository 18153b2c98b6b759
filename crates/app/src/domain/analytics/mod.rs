//! View Analytics
//!
//! Pure aggregation over a view-event feed. Nothing here touches the store.

mod aggregator;
pub mod models;

pub use aggregator::*;
