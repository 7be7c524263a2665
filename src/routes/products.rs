use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::IngredientMatcher;
use crate::error::MatchError;
use crate::models::{
    ComparePricesRequest, ComparePricesResponse, HealthResponse, MatchProductsRequest,
    MatchProductsResponse, SupermarketSummary, SupermarketsResponse,
};
use crate::services::{CatalogRegistry, CatalogSource};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Arc<IngredientMatcher<CatalogRegistry>>,
}

impl AppState {
    pub fn new(matcher: IngredientMatcher<CatalogRegistry>) -> Self {
        Self {
            matcher: Arc::new(matcher),
        }
    }
}

/// Configure all product-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/supermarkets", web::get().to(list_supermarkets))
        .route("/match-products", web::post().to(match_products))
        .route("/compare-prices", web::post().to(compare_prices));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List supported supermarkets with their catalog sizes
async fn list_supermarkets(state: web::Data<AppState>) -> impl Responder {
    let catalog = state.matcher.catalog();
    let supermarkets = catalog
        .supermarkets()
        .into_iter()
        .filter_map(|id| {
            catalog.products(id).map(|products| SupermarketSummary {
                id: id.to_string(),
                products: products.len(),
            })
        })
        .collect();

    HttpResponse::Ok().json(SupermarketsResponse { supermarkets })
}

/// Match products endpoint
///
/// POST /api/v1/match-products
///
/// Request body:
/// ```json
/// {
///   "supermarket": "carrefour",
///   "ingredients": [{ "name": "pollo", "amount": "500", "unit": "g" }]
/// }
/// ```
async fn match_products(
    state: web::Data<AppState>,
    req: web::Json<MatchProductsRequest>,
) -> Result<HttpResponse, MatchError> {
    req.validate()
        .map_err(|errors| MatchError::InvalidInput(errors.to_string()))?;

    let MatchProductsRequest { supermarket, ingredients } = req.into_inner();

    tracing::info!(
        "Matching {} ingredients against {}",
        ingredients.len(),
        supermarket
    );

    let matcher = Arc::clone(&state.matcher);
    let products = web::block(move || matcher.match_ingredients(&supermarket, &ingredients))
        .await
        .map_err(|e| MatchError::Internal(e.to_string()))??;

    tracing::debug!("Returning {} matched products", products.len());

    Ok(HttpResponse::Ok().json(MatchProductsResponse { products }))
}

/// Compare basket prices across every supermarket
///
/// POST /api/v1/compare-prices
///
/// Request body:
/// ```json
/// {
///   "ingredients": [{ "name": "arroz", "amount": "1", "unit": "kg" }]
/// }
/// ```
async fn compare_prices(
    state: web::Data<AppState>,
    req: web::Json<ComparePricesRequest>,
) -> Result<HttpResponse, MatchError> {
    req.validate()
        .map_err(|errors| MatchError::InvalidInput(errors.to_string()))?;

    let ComparePricesRequest { ingredients } = req.into_inner();

    tracing::info!("Comparing prices for {} ingredients", ingredients.len());

    let matcher = Arc::clone(&state.matcher);
    let quotes = web::block(move || matcher.compare_prices(&ingredients))
        .await
        .map_err(|e| MatchError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(ComparePricesResponse { quotes }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test as actix_test, App};

    fn state() -> AppState {
        AppState::new(IngredientMatcher::new(CatalogRegistry::builtin()))
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/health").to_request();
        let resp: HealthResponse = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.status, "healthy");
    }

    #[actix_web::test]
    async fn test_list_supermarkets() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/supermarkets").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: SupermarketsResponse = actix_test::read_body_json(resp).await;
        let ids: Vec<&str> = body.supermarkets.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["carrefour", "dia", "lidl", "mercadona"]);
    }
}
