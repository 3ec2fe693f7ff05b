use std::sync::Arc;

use axum::{routing::get, Router};

use shared_utils::AppState;

use crate::handlers;

pub fn patient_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::list_patients).post(handlers::create_patient))
        .route("/{id}", get(handlers::get_patient).put(handlers::update_patient))
        .route("/{id}/historial", get(handlers::get_patient_history))
        .with_state(state)
}
