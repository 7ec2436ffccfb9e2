//! Store Client - storefront side of the Ash Meganab order system
//!
//! Cart and checkout state kept in local key/value storage, plus HTTP
//! clients for the public order endpoint and the admin API.
//!
//! ```text
//! store-client/src/
//! ├── config.rs    # ClientConfig builder
//! ├── error.rs     # ClientError
//! ├── http.rs      # reqwest transport, envelope unwrapping
//! ├── api.rs       # OrderApi, AdminApi
//! ├── storage.rs   # Storage trait, MemoryStorage, FileStorage
//! ├── cart.rs      # Cart state and pricing helpers
//! └── checkout.rs  # Checkout form, submission, WhatsApp fallback
//! ```

pub mod api;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod http;
pub mod storage;

pub use api::{AdminApi, OrderApi};
pub use cart::{Cart, CartItem, CheckoutSummary};
pub use checkout::{Checkout, CheckoutForm, CheckoutOutcome, PendingOrder};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use storage::{FileStorage, MemoryStorage, Storage};

// Re-export shared types for convenience
pub use shared::models::{LoginResponse, Order, OrderReceipt, OrderStats, OrderStatus};
