//! Catalog, view analytics and dashboard services backed by `PostgreSQL`.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;

mod uuids;

pub use uuids::TypedUuid;
