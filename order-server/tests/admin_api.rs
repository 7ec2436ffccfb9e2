mod common;

use std::net::SocketAddr;

use axum::body::Body;
use axum::extract::ConnectInfo;
use common::{ADMIN_EMAIL, ADMIN_PASSWORD, TestApp, order_with, request, sample_order, test_config};
use http::{Method, Request, StatusCode, header};
use order_server::{Config, JwtService};
use order_server::auth::JwtConfig;
use serde_json::json;

#[tokio::test]
async fn login_returns_token_and_admin() {
    let app = TestApp::new().await;
    let (status, body) = app
        .post(
            "/api/admin/login",
            json!({ "email": "ADMIN@ashmeganab.com", "password": ADMIN_PASSWORD }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["data"]["admin"]["email"], ADMIN_EMAIL);
    assert_eq!(body["data"]["admin"]["role"], "admin");

    let token = body["data"]["token"].as_str().unwrap();
    let claims = app.state.jwt_service.validate_token(token).unwrap();
    assert_eq!(claims.role, "admin");

    let (status, me) = app.get("/api/admin/me", Some(token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["data"]["email"], ADMIN_EMAIL);
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/admin/login",
            json!({ "email": ADMIN_EMAIL, "password": "wrong" }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");

    let (status, _) = app
        .post(
            "/api/admin/login",
            json!({ "email": "someone@else.com", "password": ADMIN_PASSWORD }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app
        .post("/api/admin/login", json!({ "email": ADMIN_EMAIL }), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please provide email and password");
}

fn login_attempt(peer: &str, forwarded_for: Option<&str>) -> Request<Body> {
    let mut req = request(
        Method::POST,
        "/api/admin/login",
        Some(json!({ "email": ADMIN_EMAIL, "password": "wrong" })),
        None,
    );
    if let Some(ip) = forwarded_for {
        req.headers_mut()
            .insert("x-forwarded-for", ip.parse().unwrap());
    }
    let peer: SocketAddr = peer.parse().unwrap();
    req.extensions_mut().insert(ConnectInfo(peer));
    req
}

#[tokio::test]
async fn login_is_rate_limited_per_ip() {
    let app = TestApp::new().await;

    for _ in 0..5 {
        let (status, _) = app.send(login_attempt("198.51.100.1:5000", None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
    let (status, body) = app.send(login_attempt("198.51.100.1:5001", None)).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["code"], 1005);

    // another client is unaffected
    let (status, _) = app.send(login_attempt("198.51.100.2:5000", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn rotating_forwarded_for_does_not_reset_the_limit() {
    let app = TestApp::new().await;

    let mut statuses = Vec::new();
    for i in 0..10 {
        let spoofed = format!("203.0.113.{i}");
        let (status, _) = app
            .send(login_attempt("198.51.100.1:5000", Some(&spoofed)))
            .await;
        statuses.push(status);
    }
    assert!(statuses[..5].iter().all(|s| *s == StatusCode::UNAUTHORIZED));
    assert!(statuses[5..].iter().all(|s| *s == StatusCode::TOO_MANY_REQUESTS));
}

#[tokio::test]
async fn trusted_proxy_limits_by_forwarded_client() {
    let app = TestApp::with_config(Config {
        trust_proxy: true,
        ..test_config()
    })
    .await;

    // every request arrives from the proxy's address
    for _ in 0..5 {
        let (status, _) = app
            .send(login_attempt("10.0.0.1:5000", Some("198.51.100.1")))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
    let (status, _) = app
        .send(login_attempt("10.0.0.1:5000", Some("198.51.100.1")))
        .await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);

    // a client-supplied prefix does not change the key
    let (status, _) = app
        .send(login_attempt("10.0.0.1:5000", Some("1.1.1.1, 198.51.100.1")))
        .await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);

    let (status, _) = app
        .send(login_attempt("10.0.0.1:5000", Some("198.51.100.2")))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_routes_require_valid_token() {
    let app = TestApp::new().await;
    let routes = [
        (Method::GET, "/api/admin/orders"),
        (Method::GET, "/api/admin/orders/stats"),
        (Method::GET, "/api/admin/orders/1"),
        (Method::DELETE, "/api/admin/orders/1"),
        (Method::GET, "/api/admin/export/excel"),
        (Method::GET, "/api/admin/export/pdf"),
    ];

    for (method, uri) in routes.clone() {
        let (status, body) = app.send(request(method, uri, None, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(body["message"], "Access denied. No token provided.");
    }

    for (method, uri) in routes {
        let (status, body) = app
            .send(request(method, uri, None, Some("not-a-token")))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(body["code"], 1004);
    }

    let mut req = request(Method::GET, "/api/admin/orders", None, None);
    req.headers_mut()
        .insert(header::AUTHORIZATION, "Basic abc".parse().unwrap());
    let (status, _) = app.send(req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_and_foreign_tokens_are_rejected() {
    let app = TestApp::new().await;

    let expired = JwtService::with_config(JwtConfig {
        expiration_minutes: -10,
        ..app.state.config.jwt.clone()
    })
    .generate_token(ADMIN_EMAIL, "admin")
    .unwrap();
    let (status, body) = app.get("/api/admin/orders", Some(&expired)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1003);

    let foreign = JwtService::with_config(JwtConfig {
        secret: "some-other-secret-that-is-32-chars-long!".into(),
        ..app.state.config.jwt.clone()
    })
    .generate_token(ADMIN_EMAIL, "admin")
    .unwrap();
    let (status, _) = app.get("/api/admin/orders", Some(&foreign)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn non_admin_role_is_forbidden() {
    let app = TestApp::new().await;
    let token = app
        .state
        .jwt_service
        .generate_token("viewer@ashmeganab.com", "viewer")
        .unwrap();
    let (status, body) = app.get("/api/admin/orders", Some(&token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 2003);
}

#[tokio::test]
async fn list_paginates_consistently() {
    let app = TestApp::new().await;
    let token = app.login().await;
    for i in 0..7 {
        app.create_order(order_with(&format!("Customer {i}"), "0241234567", 1, 10.0))
            .await;
    }

    let (status, body) = app.get("/api/admin/orders?limit=3", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["orders"].as_array().unwrap().len(), 3);
    assert_eq!(
        body["data"]["pagination"],
        json!({ "page": 1, "limit": 3, "total": 7, "pages": 3 })
    );

    let (_, last) = app
        .get("/api/admin/orders?limit=3&page=3", Some(&token))
        .await;
    assert_eq!(last["data"]["orders"].as_array().unwrap().len(), 1);

    let (_, beyond) = app
        .get("/api/admin/orders?limit=3&page=9", Some(&token))
        .await;
    assert!(beyond["data"]["orders"].as_array().unwrap().is_empty());

    let (_, defaults) = app.get("/api/admin/orders", Some(&token)).await;
    assert_eq!(defaults["data"]["pagination"]["limit"], 20);
    assert_eq!(defaults["data"]["pagination"]["pages"], 1);

    let (status, _) = app
        .get("/api/admin/orders?limit=0", Some(&token))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = app
        .get("/api/admin/orders?limit=101", Some(&token))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_list_query_is_json_400() {
    let app = TestApp::new().await;
    let token = app.login().await;

    for uri in ["/api/admin/orders?page=abc", "/api/admin/orders?limit=-1"] {
        let raw = app.raw(request(Method::GET, uri, None, Some(&token))).await;
        assert_eq!(raw.status, StatusCode::BAD_REQUEST, "{uri}");
        let body: serde_json::Value = serde_json::from_slice(&raw.body).unwrap();
        assert_eq!(body["code"], 5, "{uri}");
        assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    }
}

#[tokio::test]
async fn list_filters_by_status_search_and_date() {
    let app = TestApp::new().await;
    let token = app.login().await;
    let ama = app
        .create_order(order_with("Ama Owusu", "0241111111", 1, 10.0))
        .await;
    app.create_order(order_with("Kwame Mensah", "0552222222", 1, 10.0))
        .await;

    let uri = format!("/api/admin/orders/{}", ama["order_id"].as_str().unwrap());
    app.put(&uri, json!({ "order_status": "Delivered" }), Some(&token))
        .await;

    let total = |body: &serde_json::Value| body["data"]["pagination"]["total"].clone();

    let (_, body) = app
        .get("/api/admin/orders?status=Delivered", Some(&token))
        .await;
    assert_eq!(total(&body), 1);
    let (_, body) = app.get("/api/admin/orders?status=all", Some(&token)).await;
    assert_eq!(total(&body), 2);
    let (status, _) = app
        .get("/api/admin/orders?status=Shipped", Some(&token))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app.get("/api/admin/orders?search=kwame", Some(&token)).await;
    assert_eq!(total(&body), 1);
    let (_, body) = app.get("/api/admin/orders?search=0241", Some(&token)).await;
    assert_eq!(total(&body), 1);
    let suffix = &ama["order_id"].as_str().unwrap()[18..];
    let (_, body) = app
        .get(&format!("/api/admin/orders?search={suffix}"), Some(&token))
        .await;
    assert_eq!(total(&body), 1);

    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
    let (_, body) = app
        .get(
            &format!("/api/admin/orders?startDate={today}&endDate={today}"),
            Some(&token),
        )
        .await;
    assert_eq!(total(&body), 2);
    let (_, body) = app
        .get("/api/admin/orders?endDate=2000-01-01", Some(&token))
        .await;
    assert_eq!(total(&body), 0);
    let (status, _) = app
        .get("/api/admin/orders?startDate=yesterday", Some(&token))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_update_delete_by_both_ids() {
    let app = TestApp::new().await;
    let token = app.login().await;
    let receipt = app.create_order(sample_order()).await;
    let reference = receipt["order_id"].as_str().unwrap().to_string();

    let (status, by_ref) = app
        .get(&format!("/api/admin/orders/{reference}"), Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    let id = by_ref["data"]["id"].as_i64().unwrap();

    let (status, by_id) = app
        .get(&format!("/api/admin/orders/{id}"), Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_id["data"], by_ref["data"]);

    let (status, updated) = app
        .put(
            &format!("/api/admin/orders/{id}"),
            json!({ "order_status": "processed" }),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["order_status"], "Processed");
    assert_eq!(updated["data"]["total_price_GHS"], 200.0);
    assert!(
        updated["data"]["updated_at"].as_i64().unwrap()
            >= by_id["data"]["updated_at"].as_i64().unwrap()
    );

    let (status, body) = app
        .put(
            &format!("/api/admin/orders/{id}"),
            json!({ "order_status": "Lost" }),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4002);

    let (status, _) = app
        .put(&format!("/api/admin/orders/{id}"), json!({}), Some(&token))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .delete(&format!("/api/admin/orders/{reference}"), Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Order deleted successfully");
    assert_eq!(app.order_count().await, 0);

    let (status, body) = app
        .delete(&format!("/api/admin/orders/{reference}"), Some(&token))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Order not found");
}

#[tokio::test]
async fn unknown_order_is_404() {
    let app = TestApp::new().await;
    let token = app.login().await;
    for uri in ["/api/admin/orders/12345", "/api/admin/orders/ORD-0-DEADBEEF"] {
        let (status, body) = app.get(uri, Some(&token)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 4001);
    }
    let (status, _) = app
        .put(
            "/api/admin/orders/12345",
            json!({ "order_status": "Delivered" }),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stats_count_every_status() {
    let app = TestApp::new().await;
    let token = app.login().await;

    let (status, empty) = app.get("/api/admin/orders/stats", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(empty["data"]["totalOrders"], 0);
    assert_eq!(empty["data"]["totalRevenue"], 0.0);
    assert_eq!(empty["data"]["byStatus"].as_array().unwrap().len(), 3);

    let first = app.create_order(sample_order()).await;
    app.create_order(order_with("B", "0241234567", 3, 33.33)).await;
    let uri = format!("/api/admin/orders/{}", first["order_id"].as_str().unwrap());
    app.put(&uri, json!({ "order_status": "Delivered" }), Some(&token))
        .await;

    let (_, stats) = app.get("/api/admin/orders/stats", Some(&token)).await;
    assert_eq!(stats["data"]["totalOrders"], 2);
    assert_eq!(stats["data"]["totalRevenue"], 299.99);
    assert_eq!(
        stats["data"]["byStatus"],
        json!([
            { "status": "Pending", "count": 1 },
            { "status": "Processed", "count": 0 },
            { "status": "Delivered", "count": 1 }
        ])
    );
}
