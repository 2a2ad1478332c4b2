//! End-to-end API tests against the full router with an in-memory
//! database.

use axum::body::Body;
use axum::Router;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use salon_server::{build_router, Config, ServerState};

fn test_app() -> Router {
    let dir = std::env::temp_dir().join(format!("bristle-test-{}", uuid::Uuid::new_v4()));
    let config = Config::with_overrides(dir.to_string_lossy().to_string(), 0);
    let state = ServerState::in_memory(config).expect("state");
    build_router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_client(app: &Router, name: &str) -> Value {
    let (status, body) = send(app, "POST", "/api/clients", Some(json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::OK);
    body
}

async fn add_pet(app: &Router, client_id: &str, name: &str, breed: &str, weight: f64) -> Value {
    let (status, body) = send(
        app,
        "POST",
        &format!("/api/clients/{}/pets", client_id),
        Some(json!({ "name": name, "breed": breed, "weight": weight })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body
}

async fn create_groomer(app: &Router, name: &str) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/staff",
        Some(json!({ "name": name, "role": "Groomer", "isGroomer": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["stripeConfigured"], false);
}

#[tokio::test]
async fn client_and_pet_lifecycle() {
    let app = test_app();

    let client = create_client(&app, "Dana Whitfield").await;
    let client_id = client["id"].as_str().unwrap().to_string();
    assert!(client["createdAt"].is_string());

    // Weight category is derived, not supplied
    let client = add_pet(&app, &client_id, "Biscuit", "Poodle", 18.0).await;
    let pet_id = client["pets"][0]["id"].as_str().unwrap().to_string();
    assert_eq!(client["pets"][0]["weightCategory"], "small");

    // Weight change recomputes the category
    let (status, client) = send(
        &app,
        "PUT",
        &format!("/api/clients/{}/pets/{}", client_id, pet_id),
        Some(json!({ "weight": 55.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(client["pets"][0]["weightCategory"], "large");

    // Photos round-trip through their own slot
    let photo_uri = format!("/api/clients/{}/pets/{}/photos", client_id, pet_id);
    let (status, photos) = send(&app, "POST", &photo_uri, Some(json!({ "photo": "data:a" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(photos.as_array().unwrap().len(), 1);

    let (status, photos) = send(&app, "DELETE", &format!("{}/0", photo_uri), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(photos.as_array().unwrap().is_empty());

    // Removing the pet removes it from the client
    let (status, client) = send(
        &app,
        "DELETE",
        &format!("/api/clients/{}/pets/{}", client_id, pet_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(client["pets"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn client_validation_and_missing_lookups() {
    let app = test_app();

    let (status, body) = send(&app, "POST", "/api/clients", Some(json!({ "name": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["code"].as_u64().is_some());

    let (status, _) = send(&app, "GET", "/api/clients/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn appointment_booking_and_conflicts() {
    let app = test_app();

    let client = create_client(&app, "Dana").await;
    let client_id = client["id"].as_str().unwrap().to_string();
    let client = add_pet(&app, &client_id, "Biscuit", "Poodle", 18.0).await;
    let pet_id = client["pets"][0]["id"].as_str().unwrap().to_string();
    let groomer = create_groomer(&app, "Mo Ahmed").await;
    let groomer_id = groomer["id"].as_str().unwrap().to_string();

    let booking = json!({
        "clientId": client_id,
        "petId": pet_id,
        "groomerId": groomer_id,
        "date": "2024-06-10",
        "startTime": "10:00 AM",
        "endTime": "11:30 AM",
        "totalPrice": 90.0
    });
    let (status, appointment) = send(&app, "POST", "/api/appointments", Some(booking.clone())).await;
    assert_eq!(status, StatusCode::OK);
    // Names and size are denormalized at booking time
    assert_eq!(appointment["clientName"], "Dana");
    assert_eq!(appointment["petName"], "Biscuit");
    assert_eq!(appointment["groomerName"], "Mo Ahmed");
    assert_eq!(appointment["petWeightCategory"], "small");
    assert_eq!(appointment["status"], "scheduled");
    let appointment_id = appointment["id"].as_str().unwrap().to_string();

    // Overlapping booking for the same groomer is rejected
    let mut overlap = booking.clone();
    overlap["startTime"] = json!("11:00 AM");
    overlap["endTime"] = json!("12:00 PM");
    let (status, _) = send(&app, "POST", "/api/appointments", Some(overlap.clone())).await;
    assert_eq!(status, StatusCode::CONFLICT);

    // The booked hour disappears from availability
    let slots_uri = format!(
        "/api/appointments/available-slots?date=2024-06-10&duration=60&groomerId={}",
        groomer_id
    );
    let (status, slots) = send(&app, "GET", &slots_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let starts: Vec<&str> = slots
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["startTime"].as_str().unwrap())
        .collect();
    assert!(starts.contains(&"9:00 AM"));
    assert!(!starts.contains(&"10:00 AM"));
    assert!(!starts.contains(&"11:00 AM"));

    // Cancelling frees the slot
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/appointments/{}", appointment_id),
        Some(json!({ "status": "cancelled" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "POST", "/api/appointments", Some(overlap)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn transaction_marks_appointment_paid() {
    let app = test_app();

    let client = create_client(&app, "Dana").await;
    let client_id = client["id"].as_str().unwrap().to_string();
    let client = add_pet(&app, &client_id, "Biscuit", "Poodle", 18.0).await;
    let pet_id = client["pets"][0]["id"].as_str().unwrap().to_string();
    let groomer = create_groomer(&app, "Mo").await;
    let groomer_id = groomer["id"].as_str().unwrap().to_string();

    let (_, appointment) = send(
        &app,
        "POST",
        "/api/appointments",
        Some(json!({
            "clientId": client_id,
            "petId": pet_id,
            "groomerId": groomer_id,
            "date": "2024-06-10",
            "startTime": "9:00 AM",
            "endTime": "10:00 AM",
            "totalPrice": 80.0
        })),
    )
    .await;
    let appointment_id = appointment["id"].as_str().unwrap().to_string();

    let (status, transaction) = send(
        &app,
        "POST",
        "/api/transactions",
        Some(json!({
            "appointmentId": appointment_id,
            "subtotal": 80.0,
            "tipAmount": 15.0,
            "total": 95.0,
            "paymentMethod": { "kind": "card", "cardBrand": "visa", "cardLast4": "4242" }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(transaction["createdAt"].is_string());

    let (_, appointment) = send(
        &app,
        "GET",
        &format!("/api/appointments/{}", appointment_id),
        None,
    )
    .await;
    assert_eq!(appointment["status"], "paid");
    assert_eq!(appointment["tipAmount"], 15.0);

    // Payroll over the period sees the transaction-derived figures
    let (status, summary) = send(
        &app,
        "GET",
        "/api/payroll/summary?start=2024-06-01&end=2024-06-15",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let row = &summary["staff"][0];
    assert_eq!(row["appointmentCount"], 1);
    assert_eq!(row["grossRevenue"], 80.0);
    assert_eq!(row["tips"], 15.0);
    assert_eq!(row["netPay"], 95.0);

    // Closing the period freezes it into the history
    let (status, snapshot) = send(
        &app,
        "POST",
        "/api/payroll/close",
        Some(json!({ "start": "2024-06-01", "end": "2024-06-15" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(snapshot["totalNet"], 95.0);

    let (_, history) = send(&app, "GET", "/api/payroll/history", None).await;
    assert_eq!(history.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn inventory_reorder_listing() {
    let app = test_app();

    let (status, low) = send(
        &app,
        "POST",
        "/api/inventory",
        Some(json!({
            "name": "Oatmeal Shampoo",
            "category": "retail",
            "quantity": 2,
            "cost": 4.5,
            "price": 12.0,
            "reorderThreshold": 3
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    send(
        &app,
        "POST",
        "/api/inventory",
        Some(json!({
            "name": "Clipper Blades",
            "category": "supply",
            "quantity": 20,
            "cost": 8.0,
            "reorderThreshold": 5
        })),
    )
    .await;

    let (status, items) = send(&app, "GET", "/api/inventory/reorder", None).await;
    assert_eq!(status, StatusCode::OK);
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], low["id"]);
}

#[tokio::test]
async fn business_info_defaults_and_validation() {
    let app = test_app();

    let (status, info) = send(&app, "GET", "/api/business-info", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(info["slotIntervalMinutes"], 30);
    assert_eq!(info["hours"]["sunday"]["closed"], true);

    // Close before open is rejected
    let mut hours = info["hours"].clone();
    hours["monday"] = json!({ "open": "17:00", "close": "09:00", "closed": false });
    let (status, _) = send(
        &app,
        "PUT",
        "/api/business-info",
        Some(json!({ "hours": hours })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn performance_report_starts_empty() {
    let app = test_app();
    let (status, data) = send(&app, "GET", "/api/reports/performance", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["kpis"]["completedCount"], 0);
    assert_eq!(data["rpmByMonth"].as_array().unwrap().len(), 0);
    assert_eq!(data["earningsByBreed"].as_array().unwrap().len(), 0);
    assert_eq!(data["matrix"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn stripe_status_requires_an_account() {
    let app = test_app();
    let (status, _) = send(&app, "GET", "/api/stripe/connect/status", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // An empty accountId is as good as none at all
    let (status, _) = send(
        &app,
        "GET",
        "/api/stripe/connect/status?accountId=",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
