//! Dashboard

pub(crate) mod handler;
mod responses;
