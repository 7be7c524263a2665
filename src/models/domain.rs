use serde::{Deserialize, Serialize};
use validator::Validate;

/// Recipe ingredient to be matched against a supermarket catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Ingredient {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: String::new(),
            unit: String::new(),
        }
    }

    pub fn with_amount(mut self, amount: impl Into<String>, unit: impl Into<String>) -> Self {
        self.amount = amount.into();
        self.unit = unit.into();
        self
    }

    /// Deduplication key: trimmed, lowercased name
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

/// One row of a supermarket catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub name: String,
    /// Currency-formatted price, e.g. "2,49 €"
    pub price: String,
    pub image: String,
}

impl CatalogProduct {
    pub fn new(name: impl Into<String>, price: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            image: image.into(),
        }
    }
}

/// Best catalog product found for one ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedProduct {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image: String,
    #[serde(rename = "originalIngredient")]
    pub original_ingredient: String,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
}

/// Priced basket of matched products for one supermarket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasketQuote {
    pub supermarket: String,
    /// Formatted total of every priced product
    pub total: String,
    #[serde(rename = "totalCents")]
    pub total_cents: u64,
    #[serde(rename = "matchedItems")]
    pub matched_items: usize,
    #[serde(rename = "unmatchedItems")]
    pub unmatched_items: usize,
    pub products: Vec<MatchedProduct>,
}
