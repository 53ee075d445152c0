//! Driver configuration, read once from the environment.

use std::path::PathBuf;

use anyhow::Context;

use cartkit_cart::CheckoutFormat;

/// Runtime configuration for the `cartkit` binary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// `CART_CATALOG`: JSON product array; `None` uses the sample catalog.
    pub catalog_path: Option<PathBuf>,
    /// `CHECKOUT_FORMAT`: `text` (default) or `json`.
    pub checkout_format: CheckoutFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let catalog_path = lookup("CART_CATALOG")
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        let checkout_format = match lookup("CHECKOUT_FORMAT") {
            Some(raw) => raw
                .parse::<CheckoutFormat>()
                .context("invalid CHECKOUT_FORMAT")?,
            None => CheckoutFormat::default(),
        };

        Ok(Self {
            catalog_path,
            checkout_format,
        })
    }
}
