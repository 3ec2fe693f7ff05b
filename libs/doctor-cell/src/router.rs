use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use shared_utils::AppState;

use crate::handlers;

pub fn doctor_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors).post(handlers::create_doctor))
        .route("/disponibles", get(handlers::get_available_doctors))
        .route("/especialidad/{especialidad}", get(handlers::get_doctors_by_specialty))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .with_state(state)
}
