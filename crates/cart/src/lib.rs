//! Cart domain module.
//!
//! Two cart variants share one contract: the physical cart only takes
//! unit-counted products and the fractional cart only takes weighed ones.
//! `CartService` reads any cart through that contract to produce a receipt.

pub mod cart;
pub mod service;

pub use cart::{Cart, FractionalCart, FractionalProductCart, PhysicalCart, PhysicalProductCart};
pub use service::{CartService, CheckoutFormat, Receipt};
