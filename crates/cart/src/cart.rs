use tracing::debug;

use cartkit_products::{Product, ProductInfo, ProductKind};

/// Mutation and read contract shared by every cart variant.
///
/// Operations never fail. A product of the wrong kind is ignored rather than
/// rejected, so callers can route a mixed catalog through any cart.
pub trait Cart {
    /// The only product kind this cart accepts.
    fn kind(&self) -> ProductKind;

    /// Append `product` and add `price * quantity` to the total, if its kind
    /// matches the cart. Otherwise nothing changes.
    fn add_item(&mut self, product: &Product);

    /// Remove every item whose display string starts with `name`.
    ///
    /// Totals and the variant aggregate are left untouched.
    fn remove_item(&mut self, name: &str);

    /// `remove_item(name)` followed by `add_item(new_product)`.
    fn update_item(&mut self, name: &str, new_product: &Product) {
        self.remove_item(name);
        self.add_item(new_product);
    }

    /// Borrowed view of the display strings, in insertion order.
    fn items(&self) -> &[String];

    /// Owned snapshot of the display strings, in insertion order.
    fn list(&self) -> Vec<String> {
        self.items().to_vec()
    }

    /// Running total of accepted items.
    fn total(&self) -> f64;

    fn len(&self) -> usize {
        self.items().len()
    }

    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

/// Capability: total unit count across accepted physical products.
pub trait PhysicalCart: Cart {
    fn total_units(&self) -> u64;
}

/// Capability: total weight in grams across accepted fractional products.
pub trait FractionalCart: Cart {
    fn total_grams(&self) -> f64;
}

/// Item list plus running total, shared by both cart variants.
#[derive(Debug, Clone, Default, PartialEq)]
struct CartLines {
    items: Vec<String>,
    total: f64,
}

impl CartLines {
    fn push(&mut self, product: &Product) {
        let item = product.display_info();
        self.total += product.line_total();
        debug!(item = %item, total = self.total, "item added");
        self.items.push(item);
    }

    fn remove_prefixed(&mut self, name: &str) {
        let before = self.items.len();
        self.items.retain(|item| !item.starts_with(name));
        debug!(prefix = name, removed = before - self.items.len(), "items removed");
    }
}

fn ignore(cart: ProductKind, product: &Product) {
    debug!(item = %product, kind = %product.kind(), cart = %cart, "ignoring product of another kind");
}

/// Cart that only accepts [`Product::Physical`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhysicalProductCart {
    lines: CartLines,
    total_units: u64,
}

impl PhysicalProductCart {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cart for PhysicalProductCart {
    fn kind(&self) -> ProductKind {
        ProductKind::Physical
    }

    fn add_item(&mut self, product: &Product) {
        let Product::Physical(physical) = product else {
            ignore(self.kind(), product);
            return;
        };

        self.total_units += u64::from(physical.units());
        self.lines.push(product);
    }

    fn remove_item(&mut self, name: &str) {
        self.lines.remove_prefixed(name);
    }

    fn items(&self) -> &[String] {
        &self.lines.items
    }

    fn total(&self) -> f64 {
        self.lines.total
    }
}

impl PhysicalCart for PhysicalProductCart {
    fn total_units(&self) -> u64 {
        self.total_units
    }
}

/// Cart that only accepts [`Product::Fractional`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FractionalProductCart {
    lines: CartLines,
    total_grams: f64,
}

impl FractionalProductCart {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cart for FractionalProductCart {
    fn kind(&self) -> ProductKind {
        ProductKind::Fractional
    }

    fn add_item(&mut self, product: &Product) {
        let Product::Fractional(fractional) = product else {
            ignore(self.kind(), product);
            return;
        };

        self.total_grams += fractional.weight();
        self.lines.push(product);
    }

    fn remove_item(&mut self, name: &str) {
        self.lines.remove_prefixed(name);
    }

    fn items(&self) -> &[String] {
        &self.lines.items
    }

    fn total(&self) -> f64 {
        self.lines.total
    }
}

impl FractionalCart for FractionalProductCart {
    fn total_grams(&self) -> f64 {
        self.total_grams
    }
}
