//! Domain types for the shop.
//!
//! These are the validated types handlers and repositories exchange;
//! raw database rows live in the `db` modules.

pub mod contact;
pub mod order;
pub mod product;
pub mod restoration;

pub use contact::{ContactSubmission, NewContactSubmission};
pub use order::{NewOrder, Order};
pub use product::{NewProduct, Product, ProductUpdate};
pub use restoration::{NewRestorationRequest, RestorationRequest};
