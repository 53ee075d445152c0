//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances holding the same
/// attribute values are interchangeable. Catalog products are value objects;
/// a cart is not (it is mutated in place by its owner).
///
/// Value objects are immutable once built. To "change" one, build a new one
/// and hand it to whoever holds the old value (e.g. `Cart::update_item`).
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Weight(f64);
///
/// impl ValueObject for Weight {}
///
/// assert_eq!(Weight(25.5), Weight(25.5));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
