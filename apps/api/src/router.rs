use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use appointment_cell::router::appointment_routes;
use doctor_cell::router::doctor_routes;
use patient_cell::router::patient_routes;
use shared_utils::AppState;
use statistics_cell::router::statistics_routes;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic scheduling API is running!" }))
        .nest("/pacientes", patient_routes(state.clone()))
        .nest("/doctores", doctor_routes(state.clone()))
        .nest("/citas", appointment_routes(state.clone()))
        .nest("/estadisticas", statistics_routes(state))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use shared_config::AppConfig;
    use shared_database::JsonFileStore;
    use shared_utils::FixedClock;

    fn file_backed_state(dir: &tempfile::TempDir) -> Arc<AppState> {
        let config = AppConfig::with_data_dir(dir.path());
        let store = Arc::new(JsonFileStore::new(&config));
        // Friday 2024-01-05 08:00
        let clock = Arc::new(FixedClock::at(2024, 1, 5, 8, 0));
        Arc::new(AppState::new(config, store, clock))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(match body {
                Some(json) => Body::from(json.to_string()),
                None => Body::empty(),
            })
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn on_disk(dir: &tempfile::TempDir, file: &str) -> Value {
        let raw = std::fs::read_to_string(dir.path().join(file)).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[tokio::test]
    async fn test_root_liveness() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_router(file_backed_state(&dir));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Clinic scheduling API is running!");
    }

    #[tokio::test]
    async fn test_scheduling_flow_persists_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_router(file_backed_state(&dir));

        let (status, _) = send(&app, "GET", "/estadisticas/doctores", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, patient) = send(
            &app,
            "POST",
            "/pacientes",
            Some(json!({
                "name": "Lucia Perez",
                "age": 34,
                "phone": "555-0100",
                "email": "lucia@example.com"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(patient["id"], "P001");
        assert_eq!(patient["registrationDate"], "2024-01-05");

        let (status, doctor) = send(
            &app,
            "POST",
            "/doctores",
            Some(json!({
                "name": "Dr. Ana Ruiz",
                "specialty": "Cardiology",
                "scheduleStart": "09:00",
                "scheduleEnd": "12:00",
                "availableDays": ["Lunes"]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(doctor["id"], "D001");

        let (status, booked) = send(
            &app,
            "POST",
            "/citas",
            Some(json!({
                "patientId": "P001",
                "doctorId": "D001",
                "date": "2024-01-08",
                "time": "10:00",
                "reason": "Chest pain"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(booked["id"], "C001");

        let stored = on_disk(&dir, "appointments.json");
        assert_eq!(stored.as_array().unwrap().len(), 1);
        assert_eq!(stored[0]["status"], "scheduled");

        let (status, available) = send(&app, "GET", "/doctores/disponibles?fecha=2024-01-08&hora=10:00", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(available["message"], "No doctors available for that date and time");

        let (_, busiest) = send(&app, "GET", "/estadisticas/doctores", None).await;
        assert_eq!(busiest, json!({ "doctorName": "Dr. Ana Ruiz", "totalCount": 1 }));

        let (_, history) = send(&app, "GET", "/pacientes/P001/historial", None).await;
        assert_eq!(history.as_array().unwrap().len(), 1);

        let (status, _) = send(&app, "PUT", "/citas/C001/cancelar", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(on_disk(&dir, "appointments.json")[0]["status"], "cancelled");

        let (_, busiest) = send(&app, "GET", "/estadisticas/especialidades", None).await;
        assert_eq!(busiest["message"], "No appointments registered");
    }

    #[tokio::test]
    async fn test_rejection_leaves_disk_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_router(file_backed_state(&dir));

        let (status, body) = send(
            &app,
            "POST",
            "/pacientes",
            Some(json!({ "name": "Lucia Perez", "age": 0, "phone": "555-0100", "email": "lucia@example.com" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
        assert!(!dir.path().join("patients.json").exists());
    }
}
