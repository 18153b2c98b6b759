//! Product Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod ids;
pub(crate) mod index;
pub(crate) mod related;
pub(crate) mod update;
