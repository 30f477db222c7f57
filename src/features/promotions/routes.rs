use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::promotions::handlers;
use crate::features::promotions::services::PromotionService;

/// Create routes for the promotions feature
pub fn routes(service: Arc<PromotionService>) -> Router {
    Router::new()
        .route(
            "/api/promotions",
            get(handlers::list_promotions).post(handlers::create_promotion),
        )
        .route(
            "/api/promotions/{id}",
            get(handlers::get_promotion)
                .patch(handlers::update_promotion)
                .delete(handlers::delete_promotion),
        )
        .with_state(service)
}
