// Service exports
pub mod catalog;

pub use catalog::{builtin_seed, Catalog, CatalogError, CatalogSeed};
