//! Results section - the products container and its cards.

use vitrine_catalog::{Currency, Product};

use super::html_escape;

/// Render the products container with one card per product.
pub fn render_products(products: &[Product], currency: Currency) -> String {
    let cards: String = if products.is_empty() {
        r#"<p class="empty-state">Nenhum produto encontrado.</p>"#.to_string()
    } else {
        products
            .iter()
            .map(|p| render_product_card(p, currency))
            .collect()
    };

    format!(
        r#"<div id="products-container" class="products-grid" data-count="{}">
{}
</div>"#,
        products.len(),
        cards
    )
}

/// Availability line under the store name.
pub fn availability_label(product: &Product) -> String {
    if product.is_purchasable() {
        format!("Em estoque: {}", product.stock)
    } else {
        "Indisponível".to_string()
    }
}

/// Render a single product card.
pub fn render_product_card(product: &Product, currency: Currency) -> String {
    let badge = if product.has_discount() {
        format!(r#"<div class="discount-badge">-{}%</div>"#, product.discount)
    } else {
        String::new()
    };

    let original_price = product
        .original_price
        .map(|op| format!(r#"<p class="original-price">{}</p>"#, currency.format(op)))
        .unwrap_or_default();

    let action = if product.is_purchasable() {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener" class="buy-button">
                <i class="fas fa-shopping-cart"></i>
                Comprar agora
            </a>"#,
            html_escape(&product.affiliate_link)
        )
    } else {
        r#"<button class="buy-button disabled" disabled>
                <i class="fas fa-ban"></i>
                Indisponível
            </button>"#
            .to_string()
    };

    format!(
        r#"<div class="product-card" data-product-id="{id}">
    {badge}
    <img src="{image}" alt="{title}" class="product-image" loading="lazy">
    <div class="product-info">
        <h3 class="product-title">{title}</h3>
        <div class="price-container">
            <p class="product-price">{price}</p>
            {original_price}
        </div>
        <p class="product-store">
            <i class="fas fa-store"></i>
            {store}
        </p>
        <p class="product-stock">{availability}</p>
        {action}
    </div>
</div>
"#,
        id = html_escape(&product.id.to_string()),
        image = html_escape(&product.image),
        title = html_escape(&product.title),
        price = currency.format(product.price),
        store = html_escape(&product.store),
        availability = availability_label(product),
    )
}
