//! Product catalog sources: the built-in sample set or a JSON file.

use std::path::Path;

use anyhow::Context;

use cartkit_products::{FractionalProduct, PhysicalProduct, Product};

/// Built-in sample catalog (two products of each kind).
pub fn sample() -> Vec<Product> {
    vec![
        PhysicalProduct::new("Bullion Bar 10g", 5.0, 2).into(),
        PhysicalProduct::new("Bullion Bar 5g", 3.0, 3).into(),
        FractionalProduct::new("Gold Dust", 1.0, 25.5).into(),
        FractionalProduct::new("Silver Shavings", 0.5, 50.0).into(),
    ]
}

/// Read and validate a JSON array of products from `path`.
pub fn load(path: &Path) -> anyhow::Result<Vec<Product>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    parse(&raw).with_context(|| format!("invalid catalog {}", path.display()))
}

/// Parse and validate a JSON array of products.
pub fn parse(raw: &str) -> anyhow::Result<Vec<Product>> {
    let products: Vec<Product> = serde_json::from_str(raw).context("malformed catalog JSON")?;
    for (index, product) in products.iter().enumerate() {
        product
            .validate()
            .with_context(|| format!("product #{index} ({})", product))?;
    }
    Ok(products)
}
