use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use patient_records_api::api::create_application;
use patient_records_api::config::{AppConfig, ServerConfig};

fn config_for(patients_file: &Path) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
        },
        data_dir: patients_file.parent().unwrap().to_path_buf(),
        patients_file: patients_file.to_path_buf(),
    }
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn read_document(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn test_startup_creates_empty_document() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("nested").join("patients.json");

    let app = create_application(&config_for(&file)).await.unwrap();
    assert_eq!(read_document(&file), json!({}));

    let (status, body) = call(&app, Method::GET, "/view", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_patient_lifecycle_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("patients.json");
    let app = create_application(&config_for(&file)).await.unwrap();

    let (status, _) = call(
        &app,
        Method::POST,
        "/create",
        Some(json!({
            "id": "P001",
            "name": "Rahul Mehta",
            "city": "Pune",
            "age": 42,
            "gender": "male",
            "height": 1.75,
            "weight": 75.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let stored = read_document(&file);
    assert_eq!(stored["P001"]["bmi"], 24.49);
    assert_eq!(stored["P001"]["verdict"], "Normal");
    assert!(stored["P001"].get("id").is_none());

    let (status, _) = call(&app, Method::PUT, "/update/P001", Some(json!({"weight": 100.0}))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(&app, Method::GET, "/patient/P001", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bmi"], 32.65);
    assert_eq!(body["verdict"], "Obese");
    assert_eq!(body["name"], "Rahul Mehta");

    let (status, _) = call(&app, Method::DELETE, "/delete/P001", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(read_document(&file), json!({}));

    let (status, _) = call(&app, Method::DELETE, "/delete/P001", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_existing_document_is_served_and_sorted() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("patients.json");
    std::fs::write(
        &file,
        json!({
            "P001": {"name": "Ravi Kumar", "city": "Delhi", "age": 50, "gender": "male",
                     "height": 1.7, "weight": 65.0, "bmi": 22.5, "verdict": "Normal"},
            "P002": {"name": "Meera Iyer", "city": "Chennai", "age": 33, "gender": "female",
                     "height": 1.6, "weight": 77.0, "bmi": 30.1, "verdict": "Obese"},
            "P003": {"name": "Kabir Das", "city": "Varanasi", "age": 61, "gender": "male",
                     "height": 1.8, "weight": 58.3, "bmi": 18.0, "verdict": "Underweight"},
            "P004": {"name": "Hand Edited", "city": "Nowhere", "age": 20, "gender": "other",
                     "height": 1.5, "weight": 40.0}
        })
        .to_string(),
    )
    .unwrap();

    let app = create_application(&config_for(&file)).await.unwrap();

    let (status, body) = call(&app, Method::GET, "/sort?sort_by=bmi&order=desc", None).await;
    assert_eq!(status, StatusCode::OK);
    let bmis: Vec<Value> = body.as_array().unwrap().iter().map(|r| r["bmi"].clone()).collect();
    assert_eq!(bmis, vec![json!(30.1), json!(22.5), json!(18.0), Value::Null]);

    let (status, body) = call(&app, Method::GET, "/patient/P004", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("bmi").is_none());
}

#[tokio::test]
async fn test_corrupt_document_is_internal_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("patients.json");
    let app = create_application(&config_for(&file)).await.unwrap();

    std::fs::write(&file, "{ not json").unwrap();

    let (status, body) = call(&app, Method::GET, "/view", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal_error");

    let (status, body) = call(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["components"]["store"]["status"], "error");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_application(&config_for(&dir.path().join("patients.json")))
        .await
        .unwrap();

    let (status, body) = call(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Patient Management System API");
    assert!(body["paths"]["/create"]["post"].is_object());
}
