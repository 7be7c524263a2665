//! Oliv Match - ingredient to supermarket product matching for the Oliv.ai app
//!
//! This library maps free-text recipe ingredients to the closest product in a
//! supermarket catalog using heuristic string similarity widened by a static
//! synonym table, and prices the resulting baskets across supermarkets.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{IngredientMatcher, similarity, parse_price, format_price};
pub use error::MatchError;
pub use models::{Ingredient, CatalogProduct, MatchedProduct, BasketQuote, MatchProductsRequest, MatchProductsResponse};
pub use services::{CatalogSource, CatalogRegistry};
