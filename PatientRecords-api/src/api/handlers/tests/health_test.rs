#[cfg(test)]
mod health_tests {
    use std::sync::Arc;

    use axum::http::{Method, StatusCode};

    use patient_records_data::repository::{InMemoryStore, SharedRecordStore};
    use patient_records_domain::health::STORE_UNREADABLE;
    use patient_records_domain::testing::{stored_patient, FailingStore};

    use crate::api::handlers::health::initialize_server_start_time;
    use crate::api::handlers::tests::{app_with, send};
    use crate::api::routes::create_app;

    #[tokio::test]
    async fn test_health_reports_store_records() {
        initialize_server_start_time();
        let store = InMemoryStore::with_records([("P001", stored_patient(1.75, 75.0))]);

        let (status, body) = send(app_with(&store), Method::GET, "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["components"]["store"]["status"], "ok");
        assert_eq!(body["components"]["store"]["message"], "1 records");
        assert!(body["uptime"].is_u64());
        assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_health_unavailable_when_store_unreadable() {
        let store: SharedRecordStore = Arc::new(FailingStore);

        let (status, body) = send(create_app(store), Method::GET, "/health", None).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "error");
        assert_eq!(body["components"]["store"]["status"], "error");
        assert_eq!(body["components"]["store"]["message"], STORE_UNREADABLE);
        assert!(!body.to_string().contains("patients.json"));
    }
}
