//! Products domain module.
//!
//! Catalog entries come in two disjoint kinds: physical products counted in
//! units and fractional products measured by weight. Both are plain values
//! (no IO, no storage).

pub mod product;

pub use product::{FractionalProduct, PhysicalProduct, Product, ProductInfo, ProductKind};
