use serde::{Deserialize, Serialize};
use crate::models::domain::{BasketQuote, MatchedProduct};

/// Response for the match products endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchProductsResponse {
    pub products: Vec<MatchedProduct>,
}

/// Response for the compare prices endpoint, cheapest complete basket first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparePricesResponse {
    pub quotes: Vec<BasketQuote>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupermarketSummary {
    pub id: String,
    pub products: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupermarketsResponse {
    pub supermarkets: Vec<SupermarketSummary>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
