//! Order Model

use crate::error::{AppError, AppResult, ErrorCode};
use crate::money;
use crate::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_PHONE_LEN, MAX_PRODUCT_NAME_LEN,
    MAX_SEARCH_LEN, MAX_SHORT_TEXT_LEN, normalize_optional, validate_email,
    validate_optional_text, validate_required_text,
};
use chrono::{DateTime, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum quantity per order line
pub const MIN_QUANTITY: i64 = 1;
/// Maximum quantity per order line
pub const MAX_QUANTITY: i64 = 99;

/// Default admin page size
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Largest page size the admin list accepts
pub const MAX_PAGE_SIZE: u32 = 100;

/// Order lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "PascalCase"))]
pub enum OrderStatus {
    #[default]
    Pending,
    Processed,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [Self::Pending, Self::Processed, Self::Delivered];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processed => "Processed",
            Self::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = AppError;

    /// Case-insensitive; anything else is `OrderStatusInvalid`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                AppError::new(ErrorCode::OrderStatusInvalid)
                    .with_detail("value", s)
                    .with_detail("allowed", Self::ALL.map(|st| st.as_str()).to_vec())
            })
    }
}

/// Order record (one product line per order)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    /// `ORD-<millis>-<hex>` reference shown to customers and admins
    pub order_id: String,
    pub customer_full_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub delivery_address: String,
    pub city: String,
    pub product_name: String,
    pub product_category: Option<String>,
    pub quantity: i64,
    #[serde(rename = "unit_price_GHS")]
    pub unit_price_ghs: f64,
    #[serde(rename = "total_price_GHS")]
    pub total_price_ghs: f64,
    pub additional_notes: Option<String>,
    pub order_status: OrderStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Public create payload.
///
/// Every field is optional so that an absent field is reported as
/// "Missing required fields" instead of a deserializer error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_full_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub delivery_address: Option<String>,
    pub city: Option<String>,
    pub product_name: Option<String>,
    pub product_category: Option<String>,
    pub quantity: Option<i64>,
    #[serde(rename = "unit_price_GHS")]
    pub unit_price_ghs: Option<f64>,
    pub additional_notes: Option<String>,
}

/// Validated, normalized order ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub customer_full_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub delivery_address: String,
    pub city: String,
    pub product_name: String,
    pub product_category: Option<String>,
    pub quantity: i64,
    pub unit_price_ghs: f64,
    pub total_price_ghs: f64,
    pub additional_notes: Option<String>,
}

impl OrderCreate {
    /// Check required fields, limits and formats, then compute the line total.
    pub fn validate(self) -> AppResult<NewOrder> {
        let customer_full_name = normalize_optional(self.customer_full_name);
        let customer_phone = normalize_optional(self.customer_phone);
        let delivery_address = normalize_optional(self.delivery_address);
        let city = normalize_optional(self.city);
        let product_name = normalize_optional(self.product_name);

        let mut missing = Vec::new();
        if customer_full_name.is_none() {
            missing.push("customer_full_name");
        }
        if customer_phone.is_none() {
            missing.push("customer_phone");
        }
        if delivery_address.is_none() {
            missing.push("delivery_address");
        }
        if city.is_none() {
            missing.push("city");
        }
        if product_name.is_none() {
            missing.push("product_name");
        }
        if self.quantity.is_none() {
            missing.push("quantity");
        }
        if self.unit_price_ghs.is_none() {
            missing.push("unit_price_GHS");
        }

        let (
            Some(customer_full_name),
            Some(customer_phone),
            Some(delivery_address),
            Some(city),
            Some(product_name),
            Some(quantity),
            Some(unit_price_ghs),
        ) = (
            customer_full_name,
            customer_phone,
            delivery_address,
            city,
            product_name,
            self.quantity,
            self.unit_price_ghs,
        )
        else {
            return Err(AppError::required_fields(&missing));
        };

        validate_required_text(&customer_full_name, "customer_full_name", MAX_NAME_LEN)?;
        validate_required_text(&customer_phone, "customer_phone", MAX_PHONE_LEN)?;
        validate_required_text(&delivery_address, "delivery_address", MAX_ADDRESS_LEN)?;
        validate_required_text(&city, "city", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&product_name, "product_name", MAX_PRODUCT_NAME_LEN)?;

        let customer_email = normalize_optional(self.customer_email).map(|e| e.to_lowercase());
        if let Some(email) = &customer_email {
            validate_email(email, "customer_email")?;
        }

        let product_category = normalize_optional(self.product_category);
        validate_optional_text(&product_category, "product_category", MAX_SHORT_TEXT_LEN)?;

        let additional_notes = normalize_optional(self.additional_notes);
        validate_optional_text(&additional_notes, "additional_notes", MAX_NOTE_LEN)?;

        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
            return Err(AppError::new(ErrorCode::OrderQuantityInvalid)
                .with_detail("field", "quantity")
                .with_detail("value", quantity));
        }

        if !unit_price_ghs.is_finite() || !(0.0..=money::MAX_UNIT_PRICE).contains(&unit_price_ghs)
        {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                format!("unit_price_GHS must be between 0 and {}", money::MAX_UNIT_PRICE),
            )
            .with_detail("field", "unit_price_GHS"));
        }

        Ok(NewOrder {
            total_price_ghs: money::line_total(quantity, unit_price_ghs),
            customer_full_name,
            customer_phone,
            customer_email,
            delivery_address,
            city,
            product_name,
            product_category,
            quantity,
            unit_price_ghs,
            additional_notes,
        })
    }
}

/// Response to a successful order submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: String,
    pub order_status: OrderStatus,
    #[serde(rename = "total_price_GHS")]
    pub total_price_ghs: f64,
    pub created_at: i64,
}

impl From<&Order> for OrderReceipt {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.order_id.clone(),
            order_status: order.order_status,
            total_price_ghs: order.total_price_ghs,
            created_at: order.created_at,
        }
    }
}

/// Admin status change payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub order_status: Option<String>,
}

impl OrderStatusUpdate {
    pub fn new(status: OrderStatus) -> Self {
        Self {
            order_status: Some(status.as_str().to_string()),
        }
    }

    pub fn status(&self) -> AppResult<OrderStatus> {
        match self.order_status.as_deref() {
            Some(value) => value.parse(),
            None => Err(AppError::required_fields(&["order_status"])),
        }
    }
}

/// Raw admin list query string
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(rename = "startDate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Parsed and bounded list filter
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub search: Option<String>,
    /// Inclusive lower bound on `created_at` (millis)
    pub created_from: Option<i64>,
    /// Inclusive upper bound on `created_at` (millis)
    pub created_to: Option<i64>,
    pub page: u32,
    pub limit: u32,
}

impl Default for OrderFilter {
    fn default() -> Self {
        Self {
            status: None,
            search: None,
            created_from: None,
            created_to: None,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl OrderFilter {
    pub fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1)) * i64::from(self.limit)
    }
}

impl OrderQuery {
    pub fn into_filter(self) -> AppResult<OrderFilter> {
        let status = match normalize_optional(self.status) {
            None => None,
            Some(s) if s.eq_ignore_ascii_case("all") => None,
            Some(s) => Some(s.parse::<OrderStatus>()?),
        };

        let search = normalize_optional(self.search);
        validate_optional_text(&search, "search", MAX_SEARCH_LEN)?;

        let created_from = normalize_optional(self.start_date)
            .map(|s| parse_date_bound(&s, "startDate", false))
            .transpose()?;
        let created_to = normalize_optional(self.end_date)
            .map(|s| parse_date_bound(&s, "endDate", true))
            .transpose()?;

        let limit = self.limit.unwrap_or(DEFAULT_PAGE_SIZE);
        if !(1..=MAX_PAGE_SIZE).contains(&limit) {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                format!("limit must be between 1 and {MAX_PAGE_SIZE}"),
            )
            .with_detail("field", "limit"));
        }

        Ok(OrderFilter {
            status,
            search,
            created_from,
            created_to,
            page: self.page.unwrap_or(1).max(1),
            limit,
        })
    }
}

/// Parse an RFC 3339 timestamp or a `YYYY-MM-DD` date into millis.
///
/// A date-only upper bound covers the whole day (up to 23:59:59.999 UTC).
fn parse_date_bound(value: &str, field: &str, end_of_day: bool) -> AppResult<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.timestamp_millis());
    }

    let invalid = || {
        AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("{field} must be an RFC 3339 timestamp or YYYY-MM-DD"),
        )
        .with_detail("field", field)
    };

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid())?;
    let start = date.and_hms_opt(0, 0, 0).ok_or_else(invalid)?.and_utc();
    if end_of_day {
        let next = start.checked_add_days(Days::new(1)).ok_or_else(invalid)?;
        Ok(next.timestamp_millis() - 1)
    } else {
        Ok(start.timestamp_millis())
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: i64,
    pub pages: i64,
}

impl Pagination {
    pub fn new(page: u32, limit: u32, total: i64) -> Self {
        let per_page = i64::from(limit.max(1));
        Self {
            page,
            limit,
            total,
            pages: (total + per_page - 1) / per_page,
        }
    }
}

/// One page of orders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPage {
    pub orders: Vec<Order>,
    pub pagination: Pagination,
}

/// Order count for one status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct StatusCount {
    pub status: OrderStatus,
    pub count: i64,
}

/// Dashboard statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStats {
    #[serde(rename = "byStatus")]
    pub by_status: Vec<StatusCount>,
    #[serde(rename = "totalOrders")]
    pub total_orders: i64,
    #[serde(rename = "totalRevenue")]
    pub total_revenue: f64,
}

impl OrderStats {
    pub fn count_for(&self, status: OrderStatus) -> i64 {
        self.by_status
            .iter()
            .find(|c| c.status == status)
            .map_or(0, |c| c.count)
    }
}
