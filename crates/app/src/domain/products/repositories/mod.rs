//! Product Repositories

mod images;
mod links;
mod products;
mod specifications;

pub(crate) use images::PgProductImagesRepository;
pub(crate) use links::PgProductLinksRepository;
pub(crate) use products::{PgProductsRepository, ProductRow};
pub(crate) use specifications::PgProductSpecificationsRepository;
