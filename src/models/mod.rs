// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Ingredient, CatalogProduct, MatchedProduct, BasketQuote};
pub use requests::{MatchProductsRequest, ComparePricesRequest};
pub use responses::{MatchProductsResponse, ComparePricesResponse, SupermarketsResponse, SupermarketSummary, HealthResponse, ErrorResponse};
