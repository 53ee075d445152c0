//! Checkout over any cart variant.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use cartkit_core::{DomainError, DomainResult};

use crate::cart::Cart;

/// Read-only consumer bound to exactly one cart.
///
/// Only the shared [`Cart`] contract is used, so the service never knows which
/// variant it holds.
pub struct CartService<'a> {
    cart: &'a dyn Cart,
}

impl<'a> CartService<'a> {
    pub fn new(cart: &'a dyn Cart) -> Self {
        Self { cart }
    }

    /// Snapshot the bound cart's items and total.
    pub fn checkout(&self) -> Receipt {
        let receipt = Receipt {
            items: self.cart.list(),
            total: self.cart.total(),
        };
        info!(
            kind = %self.cart.kind(),
            items = receipt.items.len(),
            total = receipt.total,
            "checkout"
        );
        receipt
    }
}

/// Result of a checkout: item lines in cart order, then the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub items: Vec<String>,
    pub total: f64,
}

impl Receipt {
    pub fn render(&self, format: CheckoutFormat) -> DomainResult<String> {
        match format {
            CheckoutFormat::Text => Ok(self.to_string()),
            CheckoutFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| DomainError::invariant(format!("receipt could not be encoded: {e}"))),
        }
    }
}

impl core::fmt::Display for Receipt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "🛒 Cart Items:")?;
        for item in &self.items {
            writeln!(f, " - {item}")?;
        }
        write!(f, "💵 Total: ${:?}", self.total)
    }
}

/// How a receipt is rendered for output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for CheckoutFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(CheckoutFormat::Text),
            "json" => Ok(CheckoutFormat::Json),
            other => Err(DomainError::validation(format!(
                "unknown checkout format '{other}' (expected 'text' or 'json')"
            ))),
        }
    }
}
