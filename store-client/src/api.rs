//! Typed clients for the public order endpoint and the admin API

use crate::http::into_data;
use crate::{ClientConfig, ClientResult, HttpClient};
use shared::models::{
    AdminInfo, LoginRequest, LoginResponse, Order, OrderCreate, OrderPage, OrderQuery,
    OrderReceipt, OrderStats, OrderStatus, OrderStatusUpdate,
};

/// Public storefront client
#[derive(Debug, Clone)]
pub struct OrderApi {
    http: HttpClient,
}

impl OrderApi {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http: config.build_http_client()?,
        })
    }

    pub fn from_http(http: HttpClient) -> Self {
        Self { http }
    }

    /// POST /api/orders
    pub async fn create_order(&self, order: &OrderCreate) -> ClientResult<OrderReceipt> {
        let response = self.http.post("/api/orders", order).await?;
        into_data(response, "order receipt")
    }
}

/// Admin dashboard client; holds the bearer token after `login`.
#[derive(Debug, Clone)]
pub struct AdminApi {
    http: HttpClient,
}

impl AdminApi {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http: config.build_http_client()?,
        })
    }

    pub fn is_logged_in(&self) -> bool {
        self.http.token().is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.http.token()
    }

    /// POST /api/admin/login; keeps the issued token for later calls
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let response = self
            .http
            .post("/api/admin/login", &LoginRequest::new(email, password))
            .await?;
        let login: LoginResponse = into_data(response, "login")?;
        self.http.set_token(Some(login.token.clone()));
        tracing::debug!(email = %login.admin.email, "Admin logged in");
        Ok(login)
    }

    /// Drop the token locally; tokens are not revoked server side
    pub fn logout(&mut self) {
        self.http.set_token(None);
    }

    pub async fn me(&self) -> ClientResult<AdminInfo> {
        into_data(self.http.get("/api/admin/me").await?, "admin")
    }

    pub async fn list_orders(&self, query: &OrderQuery) -> ClientResult<OrderPage> {
        let response = self.http.get_with_query("/api/admin/orders", query).await?;
        into_data(response, "order list")
    }

    /// `key` is a numeric id or an `ORD-` reference
    pub async fn get_order(&self, key: &str) -> ClientResult<Order> {
        let response = self.http.get(&order_path(key)).await?;
        into_data(response, "order")
    }

    pub async fn update_status(&self, key: &str, status: OrderStatus) -> ClientResult<Order> {
        let response = self
            .http
            .put(&order_path(key), &OrderStatusUpdate::new(status))
            .await?;
        into_data(response, "order")
    }

    pub async fn delete_order(&self, key: &str) -> ClientResult<()> {
        self.http
            .delete::<serde_json::Value>(&order_path(key))
            .await?;
        Ok(())
    }

    pub async fn stats(&self) -> ClientResult<OrderStats> {
        into_data(self.http.get("/api/admin/orders/stats").await?, "stats")
    }

    /// Excel workbook bytes
    pub async fn export_excel(&self) -> ClientResult<Vec<u8>> {
        self.http.get_bytes("/api/admin/export/excel").await
    }

    /// PDF report bytes
    pub async fn export_pdf(&self) -> ClientResult<Vec<u8>> {
        self.http.get_bytes("/api/admin/export/pdf").await
    }
}

fn order_path(key: &str) -> String {
    format!("/api/admin/orders/{}", key.trim())
}
