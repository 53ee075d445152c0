use serde::{Deserialize, Serialize};

use cartkit_core::{DomainError, DomainResult, ValueObject};

/// Read contract shared by every catalog entry.
pub trait ProductInfo {
    fn name(&self) -> &str;

    /// Unit price (per unit for physical products, per gram for fractional ones).
    fn price(&self) -> f64;

    /// Human-readable rendering used for cart listings and as the removal key.
    fn display_info(&self) -> String;
}

/// Product kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Physical,
    Fractional,
}

impl core::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ProductKind::Physical => f.write_str("physical"),
            ProductKind::Fractional => f.write_str("fractional"),
        }
    }
}

/// A product sold by whole units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalProduct {
    name: String,
    price: f64,
    units: u32,
}

impl PhysicalProduct {
    /// Build a product without checking its fields.
    pub fn new(name: impl Into<String>, price: f64, units: u32) -> Self {
        Self {
            name: name.into(),
            price,
            units,
        }
    }

    /// Build a product, rejecting a blank name or an invalid price.
    pub fn try_new(name: impl Into<String>, price: f64, units: u32) -> DomainResult<Self> {
        let product = Self::new(name, price, units);
        product.validate()?;
        Ok(product)
    }

    pub fn units(&self) -> u32 {
        self.units
    }

    pub fn validate(&self) -> DomainResult<()> {
        ensure_name(&self.name)?;
        ensure_price(self.price)
    }
}

impl ProductInfo for PhysicalProduct {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn display_info(&self) -> String {
        format!("{} ({} units)", self.name, self.units)
    }
}

impl ValueObject for PhysicalProduct {}

/// A product sold by weight, in grams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractionalProduct {
    name: String,
    price: f64,
    weight: f64,
}

impl FractionalProduct {
    /// Build a product without checking its fields.
    pub fn new(name: impl Into<String>, price: f64, weight: f64) -> Self {
        Self {
            name: name.into(),
            price,
            weight,
        }
    }

    /// Build a product, rejecting a blank name, an invalid price or a
    /// non-positive weight.
    pub fn try_new(name: impl Into<String>, price: f64, weight: f64) -> DomainResult<Self> {
        let product = Self::new(name, price, weight);
        product.validate()?;
        Ok(product)
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn validate(&self) -> DomainResult<()> {
        ensure_name(&self.name)?;
        ensure_price(self.price)?;
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(DomainError::validation("weight must be a positive number"));
        }
        Ok(())
    }
}

impl ProductInfo for FractionalProduct {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn display_info(&self) -> String {
        format!("{} ({:?}g)", self.name, self.weight)
    }
}

impl ValueObject for FractionalProduct {}

fn ensure_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    Ok(())
}

fn ensure_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(DomainError::validation("price must be a non-negative number"));
    }
    Ok(())
}

/// Closed set of catalog entries.
///
/// Carts dispatch on the variant tag; there is no third kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Product {
    Physical(PhysicalProduct),
    Fractional(FractionalProduct),
}

impl Product {
    pub fn kind(&self) -> ProductKind {
        match self {
            Product::Physical(_) => ProductKind::Physical,
            Product::Fractional(_) => ProductKind::Fractional,
        }
    }

    /// Units for physical products, grams for fractional ones.
    pub fn quantity(&self) -> f64 {
        match self {
            Product::Physical(p) => f64::from(p.units),
            Product::Fractional(p) => p.weight,
        }
    }

    /// `price * quantity`.
    pub fn line_total(&self) -> f64 {
        self.price() * self.quantity()
    }

    pub fn validate(&self) -> DomainResult<()> {
        match self {
            Product::Physical(p) => p.validate(),
            Product::Fractional(p) => p.validate(),
        }
    }
}

impl ProductInfo for Product {
    fn name(&self) -> &str {
        match self {
            Product::Physical(p) => p.name(),
            Product::Fractional(p) => p.name(),
        }
    }

    fn price(&self) -> f64 {
        match self {
            Product::Physical(p) => p.price(),
            Product::Fractional(p) => p.price(),
        }
    }

    fn display_info(&self) -> String {
        match self {
            Product::Physical(p) => p.display_info(),
            Product::Fractional(p) => p.display_info(),
        }
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.display_info())
    }
}

impl From<PhysicalProduct> for Product {
    fn from(value: PhysicalProduct) -> Self {
        Product::Physical(value)
    }
}

impl From<FractionalProduct> for Product {
    fn from(value: FractionalProduct) -> Self {
        Product::Fractional(value)
    }
}
