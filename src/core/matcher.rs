use std::collections::HashSet;
use crate::error::MatchError;
use crate::models::{BasketQuote, CatalogProduct, Ingredient, MatchedProduct};
use crate::services::CatalogSource;
use crate::core::{
    pricing::rank_quotes,
    similarity::similarity,
    synonyms::search_terms,
};

/// A catalog product must score strictly above this to count as a match
pub const ACCEPTANCE_THRESHOLD: f64 = 0.3;

/// Score reported for placeholder products
pub const PLACEHOLDER_SCORE: f64 = 0.1;

pub const PLACEHOLDER_SUFFIX: &str = "(producto genérico)";
pub const PLACEHOLDER_PRICE: &str = "Precio no disponible";
pub const DEFAULT_FALLBACK_IMAGE: &str = "https://placehold.co/200x200?text=Producto";

/// Matches recipe ingredients against supermarket catalogs
///
/// # Pipeline
/// 1. Deduplicate ingredients by trimmed, lowercased name
/// 2. Expand each ingredient into search terms via the synonym table
/// 3. Score every catalog product and keep the best one
/// 4. Fall back to a placeholder product below the acceptance threshold
/// 5. Sort by match score (descending, stable)
#[derive(Debug, Clone)]
pub struct IngredientMatcher<C> {
    catalog: C,
    fallback_image: String,
}

impl<C: CatalogSource> IngredientMatcher<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            fallback_image: DEFAULT_FALLBACK_IMAGE.to_string(),
        }
    }

    pub fn with_fallback_image(mut self, image: impl Into<String>) -> Self {
        self.fallback_image = image.into();
        self
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Find the best catalog product for every distinct ingredient
    ///
    /// # Arguments
    /// * `supermarket_id` - Key of the catalog to search
    /// * `ingredients` - Shopping list, may contain duplicate names
    ///
    /// # Returns
    /// One MatchedProduct per distinct ingredient, sorted by match score
    pub fn match_ingredients(
        &self,
        supermarket_id: &str,
        ingredients: &[Ingredient],
    ) -> Result<Vec<MatchedProduct>, MatchError> {
        let unique = dedup_ingredients(ingredients)?;

        let products = self.catalog.products(supermarket_id).ok_or_else(|| {
            MatchError::CatalogNotFound(format!("No catalog for supermarket '{}'", supermarket_id))
        })?;

        Ok(self.match_against(supermarket_id.trim(), products, &unique))
    }

    /// Price the shopping list at every supermarket the catalog knows
    ///
    /// Quotes are ranked with the most complete, cheapest basket first.
    pub fn compare_prices(&self, ingredients: &[Ingredient]) -> Result<Vec<BasketQuote>, MatchError> {
        let unique = dedup_ingredients(ingredients)?;

        let mut quotes: Vec<BasketQuote> = self
            .catalog
            .supermarkets()
            .into_iter()
            .filter_map(|id| {
                let products = self.catalog.products(id)?;
                let matched = self.match_against(id, products, &unique);
                Some(BasketQuote::from_products(id, matched))
            })
            .collect();

        if quotes.is_empty() {
            return Err(MatchError::CatalogNotFound("No supermarket catalogs available".to_string()));
        }

        rank_quotes(&mut quotes);
        Ok(quotes)
    }

    fn match_against(
        &self,
        supermarket_id: &str,
        products: &[CatalogProduct],
        ingredients: &[&Ingredient],
    ) -> Vec<MatchedProduct> {
        let mut matched: Vec<MatchedProduct> = ingredients
            .iter()
            .enumerate()
            .map(|(position, ingredient)| {
                match best_product(ingredient, products) {
                    Some((index, score)) if score > ACCEPTANCE_THRESHOLD => {
                        let product = &products[index];
                        MatchedProduct {
                            id: format!("{}-{}", supermarket_id.to_lowercase(), index + 1),
                            name: product.name.clone(),
                            price: product.price.clone(),
                            image: product.image.clone(),
                            original_ingredient: ingredient.name.clone(),
                            match_score: score,
                        }
                    }
                    best => {
                        tracing::debug!(
                            "No catalog product for '{}' in {} (best score {:.2})",
                            ingredient.name,
                            supermarket_id,
                            best.map_or(0.0, |(_, score)| score)
                        );
                        self.placeholder(position, ingredient)
                    }
                }
            })
            .collect();

        // Vec::sort_by is stable, ties keep input order
        matched.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        matched
    }

    fn placeholder(&self, position: usize, ingredient: &Ingredient) -> MatchedProduct {
        MatchedProduct {
            id: format!("generic-{}", position + 1),
            name: format!("{} {}", ingredient.name.trim(), PLACEHOLDER_SUFFIX),
            price: PLACEHOLDER_PRICE.to_string(),
            image: self.fallback_image.clone(),
            original_ingredient: ingredient.name.clone(),
            match_score: PLACEHOLDER_SCORE,
        }
    }
}

/// Keep the first occurrence of every trimmed, lowercased name
fn dedup_ingredients(ingredients: &[Ingredient]) -> Result<Vec<&Ingredient>, MatchError> {
    if ingredients.is_empty() {
        return Err(MatchError::InvalidInput("Ingredient list is empty".to_string()));
    }

    let mut seen = HashSet::with_capacity(ingredients.len());
    let mut unique = Vec::with_capacity(ingredients.len());

    for ingredient in ingredients {
        let key = ingredient.key();
        if key.is_empty() {
            return Err(MatchError::InvalidInput("Ingredient name is blank".to_string()));
        }
        if seen.insert(key) {
            unique.push(ingredient);
        }
    }

    Ok(unique)
}

/// Score one product against an ingredient: best of every search term and
/// the raw ingredient name
///
/// `terms` comes from `search_terms` and is resolved once per ingredient.
#[inline]
pub fn candidate_score(ingredient: &Ingredient, terms: &[&str], product: &CatalogProduct) -> f64 {
    terms
        .iter()
        .map(|term| similarity(term, &product.name))
        .fold(similarity(&ingredient.name, &product.name), f64::max)
}

/// Index and score of the best product, the earliest one on ties
fn best_product(ingredient: &Ingredient, products: &[CatalogProduct]) -> Option<(usize, f64)> {
    let terms = search_terms(&ingredient.name);
    let mut best: Option<(usize, f64)> = None;

    for (index, product) in products.iter().enumerate() {
        let score = candidate_score(ingredient, &terms, product);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::CatalogRegistry;

    fn catalog() -> CatalogRegistry {
        CatalogRegistry::new().with_catalog(
            "carrefour",
            vec![
                CatalogProduct::new("Pechuga de Pollo Fileteada Carrefour 400g", "4,29 €", "pollo.jpg"),
                CatalogProduct::new("huevo", "0,25 €", "huevo.jpg"),
                CatalogProduct::new("Arroz Redondo 1kg", "1,35 €", "arroz.jpg"),
            ],
        )
    }

    #[test]
    fn test_exact_match_scores_one() {
        let matcher = IngredientMatcher::new(catalog());
        let result = matcher
            .match_ingredients("carrefour", &[Ingredient::new("huevo")])
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "huevo");
        assert_eq!(result[0].match_score, 1.0);
        assert_eq!(result[0].id, "carrefour-2");
    }

    #[test]
    fn test_synonym_substring_match() {
        let matcher = IngredientMatcher::new(catalog());
        let result = matcher
            .match_ingredients("carrefour", &[Ingredient::new("pollo")])
            .unwrap();

        assert!(result[0].match_score >= 0.9);
        assert_eq!(result[0].price, "4,29 €");
        assert_eq!(result[0].original_ingredient, "pollo");
    }

    #[test]
    fn test_placeholder_below_threshold() {
        let matcher = IngredientMatcher::new(catalog()).with_fallback_image("fallback.png");
        let result = matcher
            .match_ingredients("carrefour", &[Ingredient::new("Azafrán")])
            .unwrap();

        assert_eq!(result[0].id, "generic-1");
        assert_eq!(result[0].name, "Azafrán (producto genérico)");
        assert_eq!(result[0].price, PLACEHOLDER_PRICE);
        assert_eq!(result[0].image, "fallback.png");
        assert_eq!(result[0].match_score, PLACEHOLDER_SCORE);
    }

    #[test]
    fn test_deduplicates_and_sorts() {
        let matcher = IngredientMatcher::new(catalog());
        let ingredients = vec![
            Ingredient::new("Azafrán"),
            Ingredient::new("huevo"),
            Ingredient::new(" HUEVO "),
            Ingredient::new("pollo"),
        ];

        let result = matcher.match_ingredients("carrefour", &ingredients).unwrap();

        assert_eq!(result.len(), 3);
        let names: Vec<&str> = result.iter().map(|p| p.original_ingredient.as_str()).collect();
        assert_eq!(names, vec!["huevo", "pollo", "Azafrán"]);
    }

    #[test]
    fn test_errors() {
        let matcher = IngredientMatcher::new(catalog());

        assert!(matches!(
            matcher.match_ingredients("nonexistent", &[Ingredient::new("huevo")]),
            Err(MatchError::CatalogNotFound(_))
        ));
        assert!(matches!(
            matcher.match_ingredients("carrefour", &[]),
            Err(MatchError::InvalidInput(_))
        ));
        assert!(matches!(
            matcher.match_ingredients("carrefour", &[Ingredient::new("   ")]),
            Err(MatchError::InvalidInput(_))
        ));
    }

    fn single_product_catalog(name: &str) -> CatalogRegistry {
        CatalogRegistry::new().with_catalog("dia", vec![CatalogProduct::new(name, "1,00 €", "p.jpg")])
    }

    #[test]
    fn test_score_at_threshold_gives_placeholder() {
        // 3 of 10 tokens overlap
        let matcher = IngredientMatcher::new(single_product_catalog(
            "aa bb cc x1 x2 x3 x4 x5 x6 x7",
        ));
        let ingredient = Ingredient::new("aa bb cc zz1 zz2 zz3 zz4 zz5 zz6 zz7");
        assert_eq!(similarity(&ingredient.name, "aa bb cc x1 x2 x3 x4 x5 x6 x7"), ACCEPTANCE_THRESHOLD);

        let result = matcher.match_ingredients("dia", &[ingredient]).unwrap();

        assert_eq!(result[0].id, "generic-1");
        assert_eq!(result[0].match_score, PLACEHOLDER_SCORE);
        assert!(result[0].name.ends_with(PLACEHOLDER_SUFFIX));
    }

    #[test]
    fn test_score_just_above_threshold_matches() {
        // 1 of 3 tokens overlap
        let matcher = IngredientMatcher::new(single_product_catalog("aa x1 x2"));
        let result = matcher
            .match_ingredients("dia", &[Ingredient::new("aa zz1 zz2")])
            .unwrap();

        assert_eq!(result[0].id, "dia-1");
        assert!((result[0].match_score - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_candidate_score_with_resolved_terms() {
        let product = CatalogProduct::new("Pechuga Fileteada 400g", "4,29 €", "p.jpg");
        let ingredient = Ingredient::new("pollo");
        let terms = search_terms(&ingredient.name);

        assert_eq!(candidate_score(&ingredient, &terms, &product), 0.9);
        assert_eq!(candidate_score(&ingredient, &[], &product), 0.0);
    }

    #[test]
    fn test_first_product_wins_ties() {
        let registry = CatalogRegistry::new().with_catalog(
            "dia",
            vec![
                CatalogProduct::new("Leche Entera", "0,90 €", "a.jpg"),
                CatalogProduct::new("Leche Desnatada", "0,80 €", "b.jpg"),
            ],
        );
        let matcher = IngredientMatcher::new(registry);
        let result = matcher.match_ingredients("dia", &[Ingredient::new("leche")]).unwrap();

        assert_eq!(result[0].id, "dia-1");
    }
}
