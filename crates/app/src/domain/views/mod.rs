//! View Events
//!
//! Raw page and product view events, read from Postgres or from a remote JSON
//! feed.

pub mod data;
pub mod errors;
mod feed;
pub mod records;
mod repository;
pub mod service;

pub use errors::ViewsServiceError;
pub use feed::HttpViewFeed;
pub use service::*;
