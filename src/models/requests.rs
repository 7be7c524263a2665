use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::Ingredient;

/// Request to match a shopping list against one supermarket
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchProductsRequest {
    #[validate(length(min = 1))]
    pub supermarket: String,
    #[validate(length(min = 1), nested)]
    pub ingredients: Vec<Ingredient>,
}

/// Request to price a shopping list across every supported supermarket
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ComparePricesRequest {
    #[validate(length(min = 1), nested)]
    pub ingredients: Vec<Ingredient>,
}
