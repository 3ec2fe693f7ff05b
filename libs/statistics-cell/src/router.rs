use std::sync::Arc;

use axum::{routing::get, Router};

use shared_utils::AppState;

use crate::handlers;

pub fn statistics_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/doctores", get(handlers::get_busiest_doctor))
        .route("/especialidades", get(handlers::get_busiest_specialty))
        .with_state(state)
}
