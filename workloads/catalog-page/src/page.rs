//! Full page document.

use crate::sections::{
    render_filters, render_loading_overlay, render_site_header, render_toolbar,
};
use crate::state::Storefront;

/// Render the whole catalog page for the current state.
pub fn render_page(store: &Storefront) -> String {
    let catalog = store.catalog();
    let stores = catalog.stores();
    let categories = catalog.categories();
    let panels = store.panels();

    let body_style = if panels.body_scroll_locked {
        r#" style="overflow: hidden""#
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Vitrine - Ofertas</title>
    <style>{styles}</style>
</head>
<body{body_style}>
{header}
<main class="catalog-layout">
{filters}
<section class="catalog-main">
{toolbar}
{products}
</section>
</main>
{overlay}
</body>
</html>
"#,
        styles = CATALOG_STYLES,
        header = render_site_header(panels),
        filters = render_filters(&stores, &categories, store.filters(), panels),
        toolbar = render_toolbar(store.search_term(), store.sort(), store.visible().len()),
        products = store.render_products(),
        overlay = render_loading_overlay(store.is_loading()),
    )
}

const CATALOG_STYLES: &str = r##"
:root {
    --primary: #16a34a;
    --primary-hover: #15803d;
    --bg: #f8fafc;
    --card-bg: #ffffff;
    --text: #1e293b;
    --text-muted: #64748b;
    --border: #e2e8f0;
    --discount: #ef4444;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
}

.site-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1rem 2rem;
    background: var(--card-bg);
    border-bottom: 1px solid var(--border);
}

.logo { font-weight: 700; font-size: 1.25rem; color: var(--primary); text-decoration: none; }
.nav-links { gap: 1.5rem; }
.nav-links a { color: var(--text); text-decoration: none; }
.hamburger { background: none; border: none; cursor: pointer; }
.hamburger span { display: block; width: 24px; height: 2px; margin: 5px 0; background: var(--text); }

.catalog-layout { display: flex; gap: 2rem; padding: 2rem; }
.catalog-main { flex: 1; }

.filters { width: 240px; flex-shrink: 0; }
.filters-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; }
.close-filters { display: none; background: none; border: none; font-size: 1.5rem; cursor: pointer; }
.filter-section { margin-bottom: 1.5rem; }
.filter-title { font-size: 0.875rem; font-weight: 600; text-transform: uppercase; color: var(--text-muted); margin-bottom: 0.5rem; }
.filter-option { display: flex; gap: 0.5rem; align-items: center; padding: 0.25rem 0; cursor: pointer; }

.catalog-toolbar { display: flex; flex-wrap: wrap; gap: 1rem; align-items: center; margin-bottom: 1.5rem; }
.search-box { flex: 1; min-width: 200px; }
.search-box input { width: 100%; padding: 0.5rem 0.75rem; border: 1px solid var(--border); border-radius: 6px; }
.result-count { color: var(--text-muted); }
.filter-toggle { display: none; }

.products-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1.5rem; }
.product-card { position: relative; background: var(--card-bg); border: 1px solid var(--border); border-radius: 8px; overflow: hidden; }
.product-image { width: 100%; aspect-ratio: 1; object-fit: cover; }
.product-info { padding: 1rem; }
.product-title { font-size: 1rem; margin-bottom: 0.5rem; }
.price-container { display: flex; gap: 0.5rem; align-items: baseline; }
.product-price { font-size: 1.25rem; font-weight: 700; color: var(--primary); }
.original-price { color: var(--text-muted); text-decoration: line-through; }
.product-store, .product-stock { font-size: 0.875rem; color: var(--text-muted); }
.discount-badge { position: absolute; top: 0.5rem; left: 0.5rem; background: var(--discount); color: #fff; padding: 0.25rem 0.5rem; border-radius: 4px; font-weight: 600; }
.buy-button { display: block; margin-top: 0.75rem; padding: 0.5rem; text-align: center; background: var(--primary); color: #fff; border: none; border-radius: 6px; text-decoration: none; }
.buy-button:hover { background: var(--primary-hover); }
.buy-button.disabled { background: var(--border); color: var(--text-muted); cursor: not-allowed; }
.empty-state { grid-column: 1 / -1; text-align: center; color: var(--text-muted); padding: 3rem 0; }

.loading-overlay { display: none; position: fixed; inset: 0; background: rgba(255, 255, 255, 0.7); align-items: center; justify-content: center; }
.loading-overlay.active { display: flex; }
.spinner { width: 40px; height: 40px; border: 4px solid var(--border); border-top-color: var(--primary); border-radius: 50%; animation: spin 0.8s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }

@media (max-width: 768px) {
    .catalog-layout { padding: 1rem; }
    .filters { position: fixed; top: 0; left: -100%; height: 100%; width: 80%; background: var(--card-bg); padding: 1rem; transition: left 0.2s; z-index: 10; }
    .filters.active { left: 0; }
    .close-filters { display: block; }
    .filter-toggle { display: inline-block; }
}
"##;
