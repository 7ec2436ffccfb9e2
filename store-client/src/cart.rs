//! Shopping cart
//!
//! Cart lines are unique by product id and persisted as a JSON array under
//! [`CART_KEY`] after every mutation.

use crate::storage::Storage;
use crate::ClientResult;
use serde::{Deserialize, Serialize};
use shared::catalog::Product;
use shared::models::MAX_QUANTITY;
use shared::money;

/// Storage key of the cart
pub const CART_KEY: &str = "ashmeganab_cart";

/// Subtotal (GHS) from which shipping is free
pub const FREE_SHIPPING_THRESHOLD: f64 = 1125.0;

/// Flat shipping fee (GHS) below the threshold
pub const SHIPPING_FEE: f64 = 120.0;

/// Cart line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: u32,
    pub name: String,
    /// Unit price in GHS
    pub price: f64,
    pub image: String,
    pub category: String,
    pub category_name: String,
    pub quantity: u32,
}

impl CartItem {
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id,
            name: product.name.to_string(),
            price: product.price,
            image: product.image.to_string(),
            category: product.category.to_string(),
            category_name: product.category_name.to_string(),
            quantity,
        }
    }

    pub fn line_total(&self) -> f64 {
        money::line_total(i64::from(self.quantity), self.price)
    }
}

/// Most units of one product a line may hold
const LINE_MAX: u32 = MAX_QUANTITY as u32;

/// Shipping quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shipping {
    pub free: bool,
    pub cost: f64,
}

pub fn shipping_for(subtotal: f64) -> Shipping {
    if subtotal >= FREE_SHIPPING_THRESHOLD {
        Shipping {
            free: true,
            cost: 0.0,
        }
    } else {
        Shipping {
            free: false,
            cost: SHIPPING_FEE,
        }
    }
}

/// Accepted promo code
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromoCode {
    /// Upper-cased code
    pub code: String,
    /// Fraction off the subtotal (0.10 = 10 %)
    pub discount: f64,
}

/// Look up a promo code, case-insensitively
pub fn apply_promo_code(code: &str) -> Option<PromoCode> {
    let code = code.trim().to_uppercase();
    let discount = match code.as_str() {
        "WELCOME10" => 0.10,
        "HEALTH20" => 0.20,
        "FIRST15" => 0.15,
        _ => return None,
    };
    Some(PromoCode { code, discount })
}

/// subtotal − subtotal × discount + shipping
pub fn order_total(subtotal: f64, discount: f64, shipping: f64) -> f64 {
    money::sum([subtotal, -money::discount_amount(subtotal, discount), shipping])
}

/// Totals shown on the cart page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutSummary {
    pub items: Vec<CartItem>,
    pub subtotal: f64,
    pub shipping: Shipping,
    pub promo: Option<PromoCode>,
    pub total: f64,
}

impl CheckoutSummary {
    /// Recompute the total with a promo code applied
    pub fn with_promo(mut self, promo: PromoCode) -> Self {
        self.total = order_total(self.subtotal, promo.discount, self.shipping.cost);
        self.promo = Some(promo);
        self
    }
}

/// Cart bound to a storage backend
#[derive(Debug)]
pub struct Cart<S: Storage> {
    storage: S,
    items: Vec<CartItem>,
}

impl<S: Storage> Cart<S> {
    /// Load the persisted cart; an unreadable value starts an empty cart.
    pub fn load(storage: S) -> Self {
        let items = match storage.get(CART_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Stored cart is corrupt, starting empty");
                Vec::new()
            }),
            None => Vec::new(),
        };
        Self { storage, items }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units
    pub fn count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn subtotal(&self) -> f64 {
        money::sum(self.items.iter().map(CartItem::line_total))
    }

    /// Add units of a product; an existing line is incremented.
    ///
    /// Lines are capped at 99 units.
    pub fn add(&mut self, product: &Product, quantity: u32) -> ClientResult<()> {
        let quantity = quantity.clamp(1, LINE_MAX);
        match self.find_mut(product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity).min(LINE_MAX),
            None => self.items.push(CartItem::from_product(product, quantity)),
        }
        tracing::debug!(product_id = product.id, quantity, "Added to cart");
        self.save()
    }

    /// Set a line's quantity; zero or less removes it. Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: u32, quantity: i64) -> ClientResult<()> {
        if quantity <= 0 {
            return self.remove(id);
        }
        let Some(item) = self.find_mut(id) else {
            return Ok(());
        };
        item.quantity = u32::try_from(quantity).map_or(LINE_MAX, |q| q.min(LINE_MAX));
        self.save()
    }

    pub fn increment(&mut self, id: u32) -> ClientResult<()> {
        let Some(item) = self.find_mut(id) else {
            return Ok(());
        };
        item.quantity = item.quantity.saturating_add(1).min(LINE_MAX);
        self.save()
    }

    /// Decrement a line; a line at quantity 1 is removed.
    pub fn decrement(&mut self, id: u32) -> ClientResult<()> {
        let Some(item) = self.find_mut(id) else {
            return Ok(());
        };
        if item.quantity <= 1 {
            return self.remove(id);
        }
        item.quantity -= 1;
        self.save()
    }

    pub fn remove(&mut self, id: u32) -> ClientResult<()> {
        self.items.retain(|item| item.id != id);
        self.save()
    }

    pub fn clear(&mut self) -> ClientResult<()> {
        self.items.clear();
        self.save()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Units of a product in the cart (0 if absent)
    pub fn quantity_of(&self, id: u32) -> u32 {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map_or(0, |item| item.quantity)
    }

    pub fn checkout_summary(&self) -> CheckoutSummary {
        let subtotal = self.subtotal();
        let shipping = shipping_for(subtotal);
        CheckoutSummary {
            items: self.items.clone(),
            subtotal,
            shipping,
            promo: None,
            total: order_total(subtotal, 0.0, shipping.cost),
        }
    }

    fn find_mut(&mut self, id: u32) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    fn save(&self) -> ClientResult<()> {
        let raw = serde_json::to_string(&self.items)?;
        self.storage.set(CART_KEY, &raw)
    }
}
