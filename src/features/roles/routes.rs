use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::roles::handlers;
use crate::features::roles::services::RoleService;

/// Create routes for the roles feature
pub fn routes(service: Arc<RoleService>) -> Router {
    Router::new()
        .route(
            "/api/roles",
            get(handlers::list_roles).post(handlers::create_role),
        )
        .route(
            "/api/roles/{id}",
            get(handlers::get_role)
                .patch(handlers::update_role)
                .delete(handlers::delete_role),
        )
        .with_state(service)
}
