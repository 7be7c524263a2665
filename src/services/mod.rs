// Service exports
pub mod catalog;

pub use catalog::{CatalogSource, CatalogRegistry, CatalogError};
