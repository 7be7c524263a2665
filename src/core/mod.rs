// Core algorithm exports
pub mod matcher;
pub mod pricing;
pub mod similarity;
pub mod synonyms;

pub use matcher::{IngredientMatcher, candidate_score, ACCEPTANCE_THRESHOLD, PLACEHOLDER_SCORE};
pub use pricing::{parse_price, format_price, rank_quotes};
pub use similarity::similarity;
pub use synonyms::{synonyms_for, search_terms};
