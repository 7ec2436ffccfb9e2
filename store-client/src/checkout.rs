//! Checkout flow
//!
//! Items come from the pending single-product order when one exists,
//! otherwise from the cart. Submission posts one order per line; if the
//! server cannot be reached the order is handed off as a pre-filled
//! WhatsApp message instead.

use crate::api::OrderApi;
use crate::cart::{CART_KEY, Cart, CartItem};
use crate::error::FieldErrors;
use crate::storage::Storage;
use crate::{ClientConfig, ClientError, ClientResult};
use regex::Regex;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use shared::catalog::Product;
use shared::models::{MAX_QUANTITY, MIN_QUANTITY, OrderCreate, OrderReceipt};
use shared::money;
use std::fmt::Write as _;
use std::sync::LazyLock;

/// Storage key of the "order now" single-product order
pub const PENDING_ORDER_KEY: &str = "ashmeg_pending_order";

/// Storage key of the quick-order modal's selection
pub const QUICK_ORDER_KEY: &str = "ashmeg_quick_order";

// Static patterns, covered by tests
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+233|0)[0-9]{9}$").unwrap());
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// One product line awaiting checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingOrder {
    pub product_id: u32,
    pub product_name: String,
    /// Unit price in GHS
    pub product_price: f64,
    pub product_image: String,
    pub product_category: String,
    pub quantity: u32,
    pub subtotal: f64,
}

impl PendingOrder {
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        let mut order = Self {
            product_id: product.id,
            product_name: product.name.to_string(),
            product_price: product.price,
            product_image: product.image.to_string(),
            product_category: product.category.to_string(),
            quantity: 0,
            subtotal: 0.0,
        };
        order.set_quantity(quantity);
        order
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.clamp(MIN_QUANTITY as u32, MAX_QUANTITY as u32);
        self.subtotal = money::line_total(i64::from(self.quantity), self.product_price);
    }

    fn with_quantity(mut self, quantity: u32) -> Self {
        self.set_quantity(quantity);
        self
    }
}

impl From<&CartItem> for PendingOrder {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.id,
            product_name: item.name.clone(),
            product_price: item.price,
            product_image: item.image.clone(),
            product_category: item.category.clone(),
            quantity: 0,
            subtotal: 0.0,
        }
        .with_quantity(item.quantity)
    }
}

/// Customer details entered at checkout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub full_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: String,
    pub city: String,
    pub notes: Option<String>,
}

impl CheckoutForm {
    /// Check every field and return a trimmed copy.
    ///
    /// All failing fields are reported together, keyed by field name.
    pub fn validate(&self) -> ClientResult<CheckoutForm> {
        let mut errors = FieldErrors::new();

        let full_name = self.full_name.trim();
        check_text(&mut errors, "full_name", "Full Name", full_name, 3);

        let phone: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        if phone.is_empty() {
            errors.insert("phone", "Phone Number is required".into());
        } else if !PHONE_RE.is_match(&phone) {
            errors.insert(
                "phone",
                "Please enter a valid Ghana phone number (e.g., 0241234567)".into(),
            );
        }

        let email = non_blank(self.email.as_deref());
        if email.is_some_and(|e| !EMAIL_RE.is_match(e)) {
            errors.insert("email", "Please enter a valid email address".into());
        }

        let address = self.address.trim();
        check_text(&mut errors, "address", "Delivery Address", address, 10);

        let city = self.city.trim();
        check_text(&mut errors, "city", "City", city, 2);

        if !errors.is_empty() {
            return Err(ClientError::Validation(errors));
        }

        Ok(CheckoutForm {
            full_name: full_name.to_string(),
            phone,
            email: email.map(str::to_string),
            address: address.to_string(),
            city: city.to_string(),
            notes: non_blank(self.notes.as_deref()).map(str::to_string),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn check_text(
    errors: &mut FieldErrors,
    field: &'static str,
    label: &str,
    value: &str,
    min_len: usize,
) {
    if value.is_empty() {
        errors.insert(field, format!("{label} is required"));
    } else if value.chars().count() < min_len {
        errors.insert(field, format!("{label} must be at least {min_len} characters"));
    }
}

/// Result of a checkout submission
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// Every line was accepted by the server
    Submitted {
        receipts: Vec<OrderReceipt>,
        total: f64,
    },
    /// The server was unreachable; the customer finishes the order on WhatsApp.
    ///
    /// `submitted` holds lines the server accepted before it failed; the
    /// message only lists the remaining ones.
    WhatsAppFallback {
        url: String,
        submitted: Vec<OrderReceipt>,
    },
    /// The server rejected a line after accepting the ones before it.
    ///
    /// Accepted lines are removed from the checkout and the cart; the
    /// rejected line and the ones after it remain for a corrected retry.
    PartiallySubmitted {
        submitted: Vec<OrderReceipt>,
        code: Option<u16>,
        message: String,
    },
}

/// Checkout page state
#[derive(Debug)]
pub struct Checkout<S: Storage> {
    storage: S,
    api: OrderApi,
    whatsapp_number: String,
    items: Vec<PendingOrder>,
}

impl<S: Storage> Checkout<S> {
    /// Load items: pending order, then quick order, then the cart.
    pub fn load(storage: S, api: OrderApi, config: &ClientConfig) -> Self {
        let items = Self::load_items(&storage);
        Self {
            storage,
            api,
            whatsapp_number: config.whatsapp_number.clone(),
            items,
        }
    }

    fn load_items(storage: &S) -> Vec<PendingOrder> {
        for key in [PENDING_ORDER_KEY, QUICK_ORDER_KEY] {
            let Some(raw) = storage.get(key) else {
                continue;
            };
            match serde_json::from_str::<PendingOrder>(&raw) {
                Ok(mut order) => {
                    order.set_quantity(order.quantity);
                    return vec![order];
                }
                Err(e) => tracing::warn!(key, error = %e, "Ignoring corrupt stored order"),
            }
        }

        let cart = Cart::load(storage);
        cart.items().iter().map(PendingOrder::from).collect()
    }

    /// Start a single-product checkout ("order now"), replacing any pending one
    pub fn order_now(&mut self, product: &Product, quantity: u32) -> ClientResult<()> {
        let order = PendingOrder::from_product(product, quantity);
        self.storage
            .set(PENDING_ORDER_KEY, &serde_json::to_string(&order)?)?;
        self.items = vec![order];
        Ok(())
    }

    pub fn items(&self) -> &[PendingOrder] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line subtotals (no shipping)
    pub fn total(&self) -> f64 {
        money::sum(self.items.iter().map(|item| item.subtotal))
    }

    /// Apply one quantity to every line; values outside 1..=99 are ignored.
    pub fn set_quantity(&mut self, quantity: u32) -> ClientResult<()> {
        let in_range = (MIN_QUANTITY..=MAX_QUANTITY).contains(&i64::from(quantity));
        if !in_range || self.items.is_empty() {
            return Ok(());
        }
        for item in &mut self.items {
            item.set_quantity(quantity);
        }
        if let [single] = self.items.as_slice() {
            self.storage
                .set(PENDING_ORDER_KEY, &serde_json::to_string(single)?)?;
        }
        Ok(())
    }

    /// Drop the pending/quick order (the cart is kept)
    pub fn clear(&mut self) -> ClientResult<()> {
        self.items.clear();
        self.storage.remove(PENDING_ORDER_KEY)?;
        self.storage.remove(QUICK_ORDER_KEY)
    }

    /// Validate the form and submit one order per line.
    ///
    /// Local validation failures, and 4xx rejections of the first line, are
    /// returned as errors and leave the checkout untouched.
    pub async fn submit(&mut self, form: &CheckoutForm) -> ClientResult<CheckoutOutcome> {
        let form = form.validate()?;
        if self.items.is_empty() {
            return Err(ClientError::EmptyOrder);
        }

        let mut receipts = Vec::with_capacity(self.items.len());
        let mut failed_at = None;
        let mut rejected = None;
        for (index, item) in self.items.iter().enumerate() {
            match self.api.create_order(&order_payload(&form, item)).await {
                Ok(receipt) => {
                    tracing::info!(order_id = %receipt.order_id, "Order submitted");
                    receipts.push(receipt);
                }
                Err(e) if e.is_server_failure() => {
                    tracing::warn!(error = %e, "Order submission failed, falling back to WhatsApp");
                    failed_at = Some(index);
                    break;
                }
                Err(e) if receipts.is_empty() => return Err(e),
                Err(e) => {
                    tracing::warn!(error = %e, accepted = receipts.len(), "Order line rejected");
                    rejected = Some(e);
                    break;
                }
            }
        }

        if let Some(e) = rejected {
            self.drop_submitted(receipts.len())?;
            return Ok(CheckoutOutcome::PartiallySubmitted {
                code: e.code(),
                message: e.to_string(),
                submitted: receipts,
            });
        }

        if let Some(index) = failed_at {
            let url = whatsapp_url(&self.whatsapp_number, &form, &self.items[index..])?;
            self.finish()?;
            return Ok(CheckoutOutcome::WhatsAppFallback {
                url,
                submitted: receipts,
            });
        }

        let total = money::sum(receipts.iter().map(|r| r.total_price_ghs));
        self.finish()?;
        Ok(CheckoutOutcome::Submitted { receipts, total })
    }

    /// Forget the first `count` lines, which the server already holds.
    /// Only cart checkouts have more than one line.
    fn drop_submitted(&mut self, count: usize) -> ClientResult<()> {
        let mut cart = Cart::load(&self.storage);
        for item in self.items.drain(..count) {
            cart.remove(item.product_id)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> ClientResult<()> {
        self.clear()?;
        self.storage.remove(CART_KEY)
    }
}

fn order_payload(form: &CheckoutForm, item: &PendingOrder) -> OrderCreate {
    OrderCreate {
        customer_full_name: Some(form.full_name.clone()),
        customer_phone: Some(form.phone.clone()),
        customer_email: form.email.clone(),
        delivery_address: Some(form.address.clone()),
        city: Some(form.city.clone()),
        product_name: Some(item.product_name.clone()),
        product_category: Some(item.product_category.clone()),
        quantity: Some(i64::from(item.quantity)),
        unit_price_ghs: Some(item.product_price),
        additional_notes: form.notes.clone(),
    }
}

/// Plain-text order message for WhatsApp (`*bold*` markup)
pub fn whatsapp_message(form: &CheckoutForm, items: &[PendingOrder]) -> String {
    let mut msg = String::from("*New Order - Ash Meganab Herbal*\n\n");
    msg.push_str("*Customer Details:*\n");
    let _ = writeln!(msg, "Name: {}", form.full_name);
    let _ = writeln!(msg, "Phone: {}", form.phone);
    if let Some(email) = &form.email {
        let _ = writeln!(msg, "Email: {email}");
    }
    let _ = writeln!(msg, "Address: {}", form.address);
    let _ = writeln!(msg, "City: {}", form.city);
    if let Some(notes) = &form.notes {
        let _ = writeln!(msg, "Notes: {notes}");
    }

    msg.push_str("\n*Order Details:*\n");
    for (i, item) in items.iter().enumerate() {
        let _ = writeln!(msg, "{}. {}", i + 1, item.product_name);
        let _ = writeln!(msg, "   Price: ₵{:.2}", item.product_price);
        let _ = writeln!(msg, "   Quantity: {}", item.quantity);
        let _ = writeln!(msg, "   Subtotal: ₵{:.2}\n", item.subtotal);
    }

    let total = money::sum(items.iter().map(|item| item.subtotal));
    let _ = writeln!(msg, "*Total: ₵{total:.2}*");
    let _ = write!(msg, "\nOrder Date: {}", chrono::Local::now().format("%d/%m/%Y"));
    msg
}

/// `https://wa.me/<number>?text=<message>`
pub fn whatsapp_url(
    number: &str,
    form: &CheckoutForm,
    items: &[PendingOrder],
) -> ClientResult<String> {
    let url = Url::parse_with_params(
        &format!("https://wa.me/{number}"),
        &[("text", whatsapp_message(form, items))],
    )
    .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
    Ok(url.into())
}
