//! Application state and the filter/search/sort controllers.

use serde::{Deserialize, Serialize};
use vitrine_catalog::prelude::*;
use vitrine_feed::{FeedError, FeedLoader, FeedSource};

use crate::page;
use crate::panels::PanelState;
use crate::sections;

/// Raw values read from the filter sidebar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterForm {
    /// Checked store checkbox values.
    #[serde(default)]
    pub stores: Vec<String>,
    /// Checked category checkbox values.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Selected price radio value, e.g. `"50-100"`.
    #[serde(default)]
    pub price: Option<String>,
}

impl FilterForm {
    /// Interpret the form. An unreadable price band is logged and ignored.
    pub fn to_controls(&self) -> FilterControls {
        let mut controls = FilterControls::new()
            .with_stores(self.stores.iter().cloned())
            .with_categories(self.categories.iter().cloned());

        if let Some(raw) = self.price.as_deref().filter(|s| !s.trim().is_empty()) {
            match raw.parse::<PriceBand>() {
                Ok(band) => controls = controls.with_price_band(band),
                Err(e) => tracing::warn!(error = %e, "ignoring price filter"),
            }
        }

        controls
    }
}

/// The whole page state: catalog, control values and what is on screen.
#[derive(Debug, Clone, Default)]
pub struct Storefront {
    catalog: Catalog,
    filters: FilterControls,
    search: String,
    sort: SortOption,
    visible: Vec<Product>,
    loading: bool,
    panels: PanelState,
    currency: Currency,
}

impl Storefront {
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            ..Self::default()
        }
    }

    /// Start from an already loaded catalog.
    pub fn with_catalog(currency: Currency, catalog: Catalog) -> Self {
        let visible = catalog.products().to_vec();
        Self {
            catalog,
            visible,
            currency,
            ..Self::default()
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Products currently rendered.
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn filters(&self) -> &FilterControls {
        &self.filters
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn panels(&self) -> &PanelState {
        &self.panels
    }

    pub fn panels_mut(&mut self) -> &mut PanelState {
        &mut self.panels
    }

    /// Fetch the feed and replace the catalog.
    ///
    /// Failures are logged and swallowed: the loading indicator is cleared and
    /// the previous catalog stays in place. Returns whether the load succeeded.
    pub async fn load(&mut self, loader: &FeedLoader, source: &dyn FeedSource) -> bool {
        self.loading = true;
        let result = loader.load(source).await;
        self.finish_load(result)
    }

    /// Apply the outcome of a load.
    pub fn finish_load(&mut self, result: Result<Vec<Product>, FeedError>) -> bool {
        self.loading = false;
        match result {
            Ok(products) => {
                self.catalog.replace(products);
                self.visible = self.catalog.products().to_vec();
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load products");
                false
            }
        }
    }

    /// Recompute the grid from the sidebar filters.
    pub fn apply_filters(&mut self, controls: FilterControls) {
        self.visible = filter_products(self.catalog.products(), &controls);
        self.filters = controls;
        self.loading = false;
        tracing::debug!(visible = self.visible.len(), "filters applied");
    }

    /// A keystroke arrived; the search itself runs after the debounce.
    pub fn begin_search(&mut self, term: &str) {
        self.search = term.to_string();
        self.loading = true;
    }

    /// Recompute the grid from the search term.
    pub fn apply_search(&mut self, term: &str) {
        self.search = term.to_string();
        self.visible = search_products(self.catalog.products(), term);
        self.loading = false;
        tracing::debug!(term, visible = self.visible.len(), "search applied");
    }

    /// Sort the current search results.
    ///
    /// Checkbox and price filters are not taken into account.
    pub fn apply_sort(&mut self, sort: SortOption) {
        self.sort = sort;
        let matched = search_products(self.catalog.products(), &self.search);
        self.visible = sort_products(&matched, sort);
        self.loading = false;
    }

    /// Sort from a select value; unknown values fall back to relevance.
    pub fn apply_sort_value(&mut self, value: &str) {
        let sort = value.parse::<SortOption>().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to relevance");
            SortOption::Relevance
        });
        self.apply_sort(sort);
    }

    /// Markup for the products container.
    pub fn render_products(&self) -> String {
        sections::render_products(&self.visible, self.currency)
    }

    /// Markup for the whole page.
    pub fn render_page(&self) -> String {
        page::render_page(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from(vec![
            Product::new(1, "Cafeteira", 120.0)
                .with_store("Acme")
                .with_category("cozinha")
                .with_discount(10),
            Product::new(2, "Liquidificador", 80.0)
                .with_store("Magazine")
                .with_category("cozinha")
                .with_discount(25),
            Product::new(3, "Abajur", 45.0).with_store("Acme").with_category("casa"),
            Product::new(4, "Fogão", 999.9)
                .with_store("Casa Forte")
                .with_category("cozinha"),
        ])
    }

    fn titles(store: &Storefront) -> Vec<&str> {
        store.visible().iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_filter_form_parses_band() {
        let form = FilterForm {
            stores: vec!["Acme".into()],
            categories: vec![],
            price: Some("50-100".into()),
        };
        let controls = form.to_controls();
        assert_eq!(controls.price_band, Some(PriceBand::new(50.0, Some(100.0))));
        assert_eq!(controls.stores, vec!["Acme"]);
    }

    #[test]
    fn test_filter_form_ignores_bad_band() {
        let form = FilterForm {
            price: Some("barato".into()),
            ..FilterForm::default()
        };
        assert_eq!(form.to_controls().price_band, None);
    }

    #[test]
    fn test_filters_recompute_from_full_catalog() {
        let mut store = Storefront::with_catalog(Currency::BRL, catalog());
        store.apply_filters(FilterControls::new().with_stores(["acme"]));
        assert_eq!(titles(&store), vec!["Cafeteira", "Abajur"]);

        store.apply_filters(FilterControls::new().with_categories(["cozinha"]));
        assert_eq!(titles(&store), vec!["Cafeteira", "Liquidificador", "Fogão"]);
    }

    #[test]
    fn test_search_by_store_name() {
        let mut store = Storefront::with_catalog(Currency::BRL, catalog());
        store.begin_search("forte");
        assert!(store.is_loading());
        store.apply_search("forte");
        assert!(!store.is_loading());
        assert_eq!(titles(&store), vec!["Fogão"]);
    }

    #[test]
    fn test_sort_uses_search_results_and_ignores_filters() {
        let mut store = Storefront::with_catalog(Currency::BRL, catalog());
        store.apply_filters(FilterControls::new().with_categories(["casa"]));
        store.apply_search("a");
        store.apply_sort(SortOption::PriceAsc);
        assert_eq!(
            titles(&store),
            vec!["Abajur", "Liquidificador", "Cafeteira", "Fogão"]
        );
    }

    #[test]
    fn test_rerender_clears_pending_search_overlay() {
        let mut store = Storefront::with_catalog(Currency::BRL, catalog());
        store.begin_search("caf");
        assert!(store.is_loading());
        store.apply_filters(FilterControls::new().with_stores(["acme"]));
        assert!(!store.is_loading());
        assert!(!store.render_page().contains(r#"class="loading-overlay active""#));

        store.begin_search("fog");
        store.apply_sort(SortOption::PriceDesc);
        assert!(!store.is_loading());
    }

    #[test]
    fn test_sort_value_fallback() {
        let mut store = Storefront::with_catalog(Currency::BRL, catalog());
        store.apply_sort_value("discount");
        assert_eq!(store.sort(), SortOption::Discount);
        assert_eq!(titles(&store)[0], "Liquidificador");

        store.apply_sort_value("bogus");
        assert_eq!(store.sort(), SortOption::Relevance);
        assert_eq!(titles(&store)[0], "Cafeteira");
    }

    #[test]
    fn test_failed_load_keeps_previous_catalog() {
        let mut store = Storefront::with_catalog(Currency::BRL, catalog());
        let ok = store.finish_load(Err(FeedError::MalformedBody("bad".into())));
        assert!(!ok);
        assert!(!store.is_loading());
        assert_eq!(store.catalog().len(), 4);
    }

    #[test]
    fn test_successful_load_replaces_and_shows_all() {
        let mut store = Storefront::with_catalog(Currency::BRL, catalog());
        store.apply_search("fog");
        assert!(store.finish_load(Ok(vec![Product::new(9, "Novo", 1.0)])));
        assert_eq!(titles(&store), vec!["Novo"]);
    }
}
