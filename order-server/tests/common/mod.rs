//! In-process test harness: in-memory database, router driven with `oneshot`.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use order_server::auth::JwtConfig;
use order_server::core::AdminCredentials;
use order_server::{Config, ServerState, api, db};
use serde_json::{Value, json};
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "admin@ashmeganab.com";
pub const ADMIN_PASSWORD: &str = "correct horse battery staple";
pub const JWT_SECRET: &str = "integration-test-secret-0123456789abcdef";

pub struct TestApp {
    pub app: Router,
    pub state: ServerState,
}

pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

pub fn test_config() -> Config {
    Config {
        http_port: 0,
        database_url: "sqlite::memory:".into(),
        db_max_connections: 1,
        environment: "test".into(),
        admin: AdminCredentials::from_password(ADMIN_EMAIL, ADMIN_PASSWORD).unwrap(),
        jwt: JwtConfig {
            secret: JWT_SECRET.into(),
            expiration_minutes: 60,
            issuer: "order-server".into(),
        },
        request_timeout_ms: 30_000,
        trust_proxy: false,
    }
}

/// Body of the reference example order
pub fn sample_order() -> Value {
    json!({
        "customer_full_name": "A",
        "customer_phone": "0241234567",
        "delivery_address": "X",
        "city": "Accra",
        "product_name": "P",
        "quantity": 2,
        "unit_price_GHS": 100
    })
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    pub async fn with_config(config: Config) -> Self {
        let pool = db::connect(&config.database_url, config.db_max_connections)
            .await
            .unwrap();
        let state = ServerState::new(config, pool);
        let app = api::build_app(state.clone());
        Self { app, state }
    }

    pub async fn raw(&self, req: Request<Body>) -> RawResponse {
        let response = self.app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec();
        RawResponse {
            status,
            headers,
            body,
        }
    }

    /// Send a request and parse the body as JSON (`Null` when empty or not JSON)
    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let raw = self.raw(req).await;
        let body = serde_json::from_slice(&raw.body).unwrap_or(Value::Null);
        (raw.status, body)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(request(Method::GET, uri, None, token)).await
    }

    pub async fn post(&self, uri: &str, body: Value, token: Option<&str>) -> (StatusCode, Value) {
        self.send(request(Method::POST, uri, Some(body), token)).await
    }

    pub async fn put(&self, uri: &str, body: Value, token: Option<&str>) -> (StatusCode, Value) {
        self.send(request(Method::PUT, uri, Some(body), token)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(request(Method::DELETE, uri, None, token)).await
    }

    /// Log in with the configured admin and return the bearer token
    pub async fn login(&self) -> String {
        let (status, body) = self
            .post(
                "/api/admin/login",
                json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["data"]["token"].as_str().unwrap().to_string()
    }

    /// Create an order and return the receipt (`data`)
    pub async fn create_order(&self, body: Value) -> Value {
        let (status, resp) = self.post("/api/orders", body, None).await;
        assert_eq!(status, StatusCode::CREATED, "{resp}");
        resp["data"].clone()
    }

    pub async fn order_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.state.pool)
            .await
            .unwrap()
    }
}

pub fn request(method: Method, uri: &str, body: Option<Value>, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Order payload with a given customer name, quantity and unit price
pub fn order_with(name: &str, phone: &str, quantity: i64, price: f64) -> Value {
    let mut body = sample_order();
    body["customer_full_name"] = json!(name);
    body["customer_phone"] = json!(phone);
    body["quantity"] = json!(quantity);
    body["unit_price_GHS"] = json!(price);
    body
}
