mod common;

use axum::body::Body;
use common::{TestApp, order_with, sample_order};
use http::{Method, Request, StatusCode, header};
use serde_json::json;

#[tokio::test]
async fn example_order_totals_200_and_is_pending() {
    let app = TestApp::new().await;
    let (status, body) = app.post("/api/orders", sample_order(), None).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["code"], 0);
    assert_eq!(body["message"], "Order created successfully");
    assert_eq!(body["data"]["total_price_GHS"], 200.0);
    assert_eq!(body["data"]["order_status"], "Pending");

    let order_id = body["data"]["order_id"].as_str().unwrap();
    let parts: Vec<_> = order_id.split('-').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "ORD");
    assert!(parts[1].parse::<i64>().is_ok());
    assert_eq!(parts[2].len(), 8);
    assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    assert_eq!(app.order_count().await, 1);
}

#[tokio::test]
async fn total_is_quantity_times_unit_price() {
    let app = TestApp::new().await;
    for (quantity, price, expected) in [(1, 0.0, 0.0), (3, 33.33, 99.99), (99, 690.0, 68310.0)] {
        let receipt = app
            .create_order(order_with("Ama", "0241234567", quantity, price))
            .await;
        assert_eq!(receipt["total_price_GHS"], expected);
    }
}

#[tokio::test]
async fn client_supplied_total_is_ignored() {
    let app = TestApp::new().await;
    let mut body = sample_order();
    body["total_price_GHS"] = json!(1);
    let receipt = app.create_order(body).await;
    assert_eq!(receipt["total_price_GHS"], 200.0);
}

#[tokio::test]
async fn missing_required_field_is_400_and_creates_nothing() {
    let app = TestApp::new().await;
    for field in [
        "customer_full_name",
        "customer_phone",
        "delivery_address",
        "city",
        "product_name",
        "quantity",
        "unit_price_GHS",
    ] {
        let mut body = sample_order();
        body.as_object_mut().unwrap().remove(field);
        let (status, resp) = app.post("/api/orders", body, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{field}");
        assert_eq!(resp["message"], "Missing required fields");
        assert_eq!(resp["details"]["fields"], json!([field]));
    }

    let mut blank = sample_order();
    blank["city"] = json!("   ");
    let (status, _) = app.post("/api/orders", blank, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(app.order_count().await, 0);
}

#[tokio::test]
async fn out_of_range_values_are_rejected() {
    let app = TestApp::new().await;
    for quantity in [0, 100, -1] {
        let (status, body) = app
            .post("/api/orders", order_with("A", "0241234567", quantity, 10.0), None)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Quantity must be between 1 and 99");
    }

    let (status, _) = app
        .post("/api/orders", order_with("A", "0241234567", 1, -5.0), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut bad_email = sample_order();
    bad_email["customer_email"] = json!("not-an-email");
    let (status, body) = app.post("/api/orders", bad_email, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "customer_email");

    let long_name = "x".repeat(101);
    let (status, _) = app
        .post("/api/orders", order_with(&long_name, "0241234567", 1, 1.0), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(app.order_count().await, 0);
}

#[tokio::test]
async fn malformed_json_is_400_envelope() {
    let app = TestApp::new().await;
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/orders")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"customer_full_name\": "))
        .unwrap();
    let (status, body) = app.send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);

    let mut wrong_type = sample_order();
    wrong_type["quantity"] = json!("two");
    let (status, _) = app.post("/api/orders", wrong_type, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.order_count().await, 0);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let app = TestApp::new().await;
    let mut body = sample_order();
    body["additional_notes"] = json!("n".repeat(11 * 1024));
    let (status, resp) = app.post("/api/orders", body, None).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(resp["code"], 10);
    assert_eq!(app.order_count().await, 0);
}

#[tokio::test]
async fn optional_fields_are_normalized() {
    let app = TestApp::new().await;
    let token = app.login().await;

    let mut body = sample_order();
    body["customer_email"] = json!("  Ama@Example.COM ");
    body["product_category"] = json!("");
    body["additional_notes"] = json!(" leave at gate ");
    let receipt = app.create_order(body).await;

    let uri = format!("/api/admin/orders/{}", receipt["order_id"].as_str().unwrap());
    let (status, body) = app.get(&uri, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["customer_email"], "ama@example.com");
    assert!(body["data"]["product_category"].is_null());
    assert_eq!(body["data"]["additional_notes"], "leave at gate");
}
