use cartkit_cart::{
    Cart, CartService, CheckoutFormat, FractionalCart, FractionalProductCart, PhysicalCart,
    PhysicalProductCart,
};
use cartkit_products::{FractionalProduct, PhysicalProduct, Product};

fn catalog() -> Vec<Product> {
    vec![
        PhysicalProduct::new("Bullion Bar 10g", 5.0, 2).into(),
        PhysicalProduct::new("Bullion Bar 5g", 3.0, 3).into(),
        FractionalProduct::new("Gold Dust", 1.0, 25.5).into(),
        FractionalProduct::new("Silver Shavings", 0.5, 50.0).into(),
    ]
}

fn fill(cart: &mut dyn Cart, products: &[Product]) {
    for product in products {
        cart.add_item(product);
    }
}

#[test]
fn physical_cart_end_to_end() {
    let mut cart = PhysicalProductCart::new();
    fill(&mut cart, &catalog());

    assert_eq!(
        cart.list(),
        vec!["Bullion Bar 10g (2 units)", "Bullion Bar 5g (3 units)"]
    );
    assert_eq!(cart.total(), 19.0);
    assert_eq!(cart.total_units(), 5);
}

#[test]
fn fractional_cart_end_to_end() {
    let mut cart = FractionalProductCart::new();
    fill(&mut cart, &catalog());

    assert_eq!(cart.list(), vec!["Gold Dust (25.5g)", "Silver Shavings (50.0g)"]);
    assert_eq!(cart.total(), 50.5);
    assert_eq!(cart.total_grams(), 75.5);
}

#[test]
fn checkout_renders_each_cart_independently() {
    let products = catalog();
    let mut physical = PhysicalProductCart::new();
    let mut fractional = FractionalProductCart::new();
    fill(&mut physical, &products);
    fill(&mut fractional, &products);

    let physical_text = CartService::new(&physical)
        .checkout()
        .render(CheckoutFormat::Text)
        .unwrap();
    let fractional_text = CartService::new(&fractional)
        .checkout()
        .render(CheckoutFormat::Text)
        .unwrap();

    assert_eq!(
        physical_text,
        "🛒 Cart Items:\n - Bullion Bar 10g (2 units)\n - Bullion Bar 5g (3 units)\n💵 Total: $19.0"
    );
    assert_eq!(
        fractional_text,
        "🛒 Cart Items:\n - Gold Dust (25.5g)\n - Silver Shavings (50.0g)\n💵 Total: $50.5"
    );
}

#[test]
fn update_then_checkout_keeps_stale_total() {
    let mut cart = PhysicalProductCart::new();
    fill(&mut cart, &catalog());

    cart.update_item("Bullion Bar 1", &PhysicalProduct::new("Bullion Bar 1kg", 400.0, 1).into());

    let receipt = CartService::new(&cart).checkout();
    assert_eq!(
        receipt.items,
        vec!["Bullion Bar 5g (3 units)", "Bullion Bar 1kg (1 units)"]
    );
    assert_eq!(receipt.total, 419.0);
    assert_eq!(cart.total_units(), 6);
}
