//! Facets section - store, category and price filter sidebar.

use vitrine_catalog::search::{FilterControls, PriceBand, ALL_STORES};

use super::html_escape;
use crate::panels::PanelState;

/// Price radio options: (value, label).
pub const PRICE_BANDS: &[(&str, &str)] = &[
    ("0-50", "Até R$ 50"),
    ("50-100", "R$ 50 a R$ 100"),
    ("100-200", "R$ 100 a R$ 200"),
    ("200-", "Acima de R$ 200"),
];

/// Render the filter sidebar.
///
/// Store and category options come from the loaded catalog; checked state
/// comes from the active controls.
pub fn render_filters(
    stores: &[String],
    categories: &[String],
    controls: &FilterControls,
    panels: &PanelState,
) -> String {
    let panel_class = if panels.filters_open {
        "filters active"
    } else {
        "filters"
    };

    let selected_stores: Vec<String> = controls.stores.iter().map(|s| s.to_lowercase()).collect();
    let mut store_options = vec![render_checkbox(
        "store",
        ALL_STORES,
        "Todas",
        selected_stores.is_empty() || selected_stores.iter().any(|s| s == ALL_STORES),
    )];
    store_options.extend(stores.iter().map(|store| {
        let value = store.to_lowercase();
        let checked = selected_stores.contains(&value);
        render_checkbox("store", &value, store, checked)
    }));

    let selected_categories: Vec<String> =
        controls.categories.iter().map(|c| c.to_lowercase()).collect();
    let category_options: Vec<String> = categories
        .iter()
        .map(|category| {
            let checked = selected_categories.contains(category);
            render_checkbox("category", category, &capitalize(category), checked)
        })
        .collect();

    let price_options: Vec<String> = PRICE_BANDS
        .iter()
        .map(|(value, label)| {
            let checked = match (&controls.price_band, value.parse::<PriceBand>()) {
                (Some(active), Ok(band)) => *active == band,
                _ => false,
            };
            format!(
                r#"<label class="filter-option">
                <input type="radio" name="price" value="{}"{}>
                <span>{}</span>
            </label>"#,
                value,
                if checked { " checked" } else { "" },
                label
            )
        })
        .collect();

    format!(
        r#"<aside id="filters-panel" class="{panel_class}" data-section="filters">
    <div class="filters-header">
        <h2>Filtros</h2>
        <button id="close-filters" class="close-filters" aria-label="Fechar filtros">&times;</button>
    </div>
    <div class="filter-section">
        <h3 class="filter-title">Lojas</h3>
        <div class="filter-options">
            {}
        </div>
    </div>
    <div class="filter-section">
        <h3 class="filter-title">Categoria</h3>
        <div class="filter-options">
            {}
        </div>
    </div>
    <div class="filter-section">
        <h3 class="filter-title">Preço</h3>
        <div class="filter-options">
            {}
        </div>
    </div>
</aside>"#,
        store_options.join("\n            "),
        category_options.join("\n            "),
        price_options.join("\n            "),
    )
}

fn render_checkbox(name: &str, value: &str, label: &str, checked: bool) -> String {
    format!(
        r#"<label class="filter-option">
                <input type="checkbox" name="{}" value="{}"{}>
                <span>{}</span>
            </label>"#,
        name,
        html_escape(value),
        if checked { " checked" } else { "" },
        html_escape(label)
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stores() -> Vec<String> {
        vec!["Acme".to_string(), "Casa Forte".to_string()]
    }

    fn categories() -> Vec<String> {
        vec!["cozinha".to_string(), "casa".to_string()]
    }

    #[test]
    fn test_all_stores_checked_without_selection() {
        let html = render_filters(&stores(), &categories(), &FilterControls::new(), &PanelState::default());
        assert!(html.contains(r#"name="store" value="todas" checked>"#));
        assert!(html.contains(r#"name="store" value="acme">"#));
        assert!(html.contains("<span>Casa Forte</span>"));
        assert!(html.contains("<span>Cozinha</span>"));
    }

    #[test]
    fn test_checked_state_follows_controls() {
        let controls = FilterControls::new()
            .with_stores(["Acme"])
            .with_categories(["casa"])
            .with_price_band("200-".parse().unwrap());
        let html = render_filters(&stores(), &categories(), &controls, &PanelState::default());

        assert!(html.contains(r#"name="store" value="todas">"#));
        assert!(html.contains(r#"name="store" value="acme" checked>"#));
        assert!(html.contains(r#"name="category" value="casa" checked>"#));
        assert!(html.contains(r#"name="price" value="200-" checked>"#));
        assert!(html.contains(r#"name="price" value="50-100">"#));
    }

    #[test]
    fn test_panel_open_class() {
        let mut panels = PanelState::default();
        panels.open_filters();
        let html = render_filters(&[], &[], &FilterControls::new(), &panels);
        assert!(html.contains(r#"class="filters active""#));
    }
}
