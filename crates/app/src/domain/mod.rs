//! Vitrine Domain Concerns

pub mod analytics;
pub mod dashboard;
pub mod products;
pub mod profiles;
pub mod views;
