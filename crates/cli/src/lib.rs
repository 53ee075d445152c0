//! `cartkit` driver: fill one cart per product kind and check both out.

pub mod catalog;
pub mod config;

use std::io::Write;

use anyhow::Context;
use tracing::{info, warn};

use cartkit_cart::{Cart, CartService, FractionalProductCart, PhysicalProductCart};
use cartkit_products::{Product, ProductKind};

use crate::config::Config;

/// Printed between the two receipts.
pub const SEPARATOR: &str = "---------";

/// Route each product to the cart of its kind.
pub fn fill_carts(products: &[Product]) -> (PhysicalProductCart, FractionalProductCart) {
    let mut physical = PhysicalProductCart::new();
    let mut fractional = FractionalProductCart::new();

    for product in products {
        match product.kind() {
            ProductKind::Physical => physical.add_item(product),
            ProductKind::Fractional => fractional.add_item(product),
        }
    }

    (physical, fractional)
}

/// Load the catalog, fill both carts and write their receipts to `out`.
pub fn run(config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let products = match &config.catalog_path {
        Some(path) => catalog::load(path)?,
        None => {
            warn!("CART_CATALOG not set; using built-in sample catalog");
            catalog::sample()
        }
    };
    info!(products = products.len(), "catalog loaded");

    let (physical, fractional) = fill_carts(&products);

    write_receipt(&physical, config, out)?;
    writeln!(out, "{SEPARATOR}")?;
    write_receipt(&fractional, config, out)?;

    Ok(())
}

fn write_receipt(cart: &dyn Cart, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let rendered = CartService::new(cart)
        .checkout()
        .render(config.checkout_format)
        .with_context(|| format!("failed to render {} cart receipt", cart.kind()))?;
    writeln!(out, "{rendered}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartkit_cart::{FractionalCart, PhysicalCart};

    #[test]
    fn fill_carts_routes_by_kind() {
        let (physical, fractional) = fill_carts(&catalog::sample());

        assert_eq!(physical.len(), 2);
        assert_eq!(physical.total(), 19.0);
        assert_eq!(physical.total_units(), 5);
        assert_eq!(fractional.len(), 2);
        assert_eq!(fractional.total(), 50.5);
        assert_eq!(fractional.total_grams(), 75.5);
    }

    #[test]
    fn fill_carts_on_empty_catalog_yields_empty_carts() {
        let (physical, fractional) = fill_carts(&[]);
        assert!(physical.is_empty());
        assert!(fractional.is_empty());
    }
}
