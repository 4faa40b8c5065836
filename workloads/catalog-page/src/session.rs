//! Event-driven catalog session.
//!
//! Every UI event runs to completion before the next one is handled. The
//! only suspension points are the feed fetch and the debounced search, which
//! comes back through a channel owned by the session.

use std::time::Duration;

use tokio::sync::mpsc;
use vitrine_catalog::Currency;
use vitrine_feed::{FeedLoader, FeedSource};

use crate::debounce::Debouncer;
use crate::panels::ClickTarget;
use crate::state::{FilterForm, Storefront};

/// Quiet period after the last keystroke before searching.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Input events from the page.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// A filter checkbox or price radio changed.
    FilterChange(FilterForm),
    /// The search input changed.
    SearchInput(String),
    /// The sort select changed.
    SortChange(String),
    /// The mobile filter toggle was clicked.
    OpenFilters,
    /// The filter panel close button was clicked.
    CloseFilters,
    /// Any click on the page.
    PageClick {
        target: ClickTarget,
        viewport_width: u32,
    },
    /// The hamburger button was clicked.
    ToggleNav,
    /// Fetch the feed again.
    Reload,
}

/// Owns a [`Storefront`] and applies UI events to it.
pub struct CatalogSession<S> {
    storefront: Storefront,
    source: S,
    loader: FeedLoader,
    debouncer: Debouncer,
    search_tx: mpsc::UnboundedSender<String>,
    search_rx: mpsc::UnboundedReceiver<String>,
}

impl<S: FeedSource> CatalogSession<S> {
    pub fn new(source: S, loader: FeedLoader, currency: Currency) -> Self {
        let (search_tx, search_rx) = mpsc::unbounded_channel();
        Self {
            storefront: Storefront::new(currency),
            source,
            loader,
            debouncer: Debouncer::new(SEARCH_DEBOUNCE),
            search_tx,
            search_rx,
        }
    }

    /// Override the search debounce delay.
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debouncer = Debouncer::new(delay);
        self
    }

    pub fn storefront(&self) -> &Storefront {
        &self.storefront
    }

    pub fn into_storefront(self) -> Storefront {
        self.storefront
    }

    /// Initial page load.
    pub async fn start(&mut self) -> bool {
        self.storefront.load(&self.loader, &self.source).await
    }

    /// Apply one event.
    pub async fn handle(&mut self, event: UiEvent) {
        tracing::trace!(?event, "ui event");
        match event {
            UiEvent::FilterChange(form) => self.storefront.apply_filters(form.to_controls()),
            UiEvent::SearchInput(term) => {
                self.storefront.begin_search(&term);
                let tx = self.search_tx.clone();
                self.debouncer.schedule(async move {
                    let _ = tx.send(term);
                });
            }
            UiEvent::SortChange(value) => self.storefront.apply_sort_value(&value),
            UiEvent::OpenFilters => self.storefront.panels_mut().open_filters(),
            UiEvent::CloseFilters => self.storefront.panels_mut().close_filters(),
            UiEvent::PageClick {
                target,
                viewport_width,
            } => self
                .storefront
                .panels_mut()
                .page_click(target, viewport_width),
            UiEvent::ToggleNav => self.storefront.panels_mut().toggle_nav(),
            UiEvent::Reload => {
                self.start().await;
            }
        }
    }

    /// Wait for the next debounced search and apply it.
    ///
    /// Returns the term that was searched.
    pub async fn next_search(&mut self) -> Option<String> {
        let term = self.search_rx.recv().await?;
        self.storefront.apply_search(&term);
        Some(term)
    }

    /// Process events until the sender side closes, then return the state.
    pub async fn run(mut self, mut events: mpsc::Receiver<UiEvent>) -> Storefront {
        self.start().await;
        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => self.handle(event).await,
                    None => break,
                },
                Some(term) = self.search_rx.recv() => {
                    self.storefront.apply_search(&term);
                }
            }
        }
        self.debouncer.cancel();
        self.storefront
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_feed::StaticFeed;

    const CSV: &str = "id,title,price,store,category,stock,discount\n\
        1,Cafeteira,120,Acme,Cozinha,3,10\n\
        2,Liquidificador,80,Magazine,Cozinha,0,25\n\
        3,Abajur,45,Acme,Casa,5,0\n";

    fn session(body: &str) -> CatalogSession<StaticFeed> {
        CatalogSession::new(
            StaticFeed::new("https://example.com/export?format=csv", Some("text/csv"), body),
            FeedLoader::default(),
            Currency::BRL,
        )
    }

    fn titles(store: &Storefront) -> Vec<String> {
        store.visible().iter().map(|p| p.title.clone()).collect()
    }

    #[tokio::test]
    async fn test_start_loads_catalog() {
        let mut s = session(CSV);
        assert!(s.start().await);
        assert_eq!(s.storefront().catalog().len(), 3);
        assert!(!s.storefront().is_loading());
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_catalog() {
        let mut s = CatalogSession::new(
            StaticFeed::new("https://example.com/gviz/tq", None, "setResponse({oops});"),
            FeedLoader::default(),
            Currency::BRL,
        );
        assert!(!s.start().await);
        assert!(s.storefront().catalog().is_empty());
        assert!(!s.storefront().is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounced_search_applies_last_term() {
        let mut s = session(CSV);
        s.start().await;

        for term in ["l", "li", "liq"] {
            s.handle(UiEvent::SearchInput(term.to_string())).await;
            assert!(s.storefront().is_loading());
        }

        assert_eq!(s.next_search().await.as_deref(), Some("liq"));
        assert_eq!(titles(s.storefront()), vec!["Liquidificador"]);
        assert!(!s.storefront().is_loading());
        assert!(s.search_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_filter_and_sort_events() {
        let mut s = session(CSV);
        s.start().await;

        s.handle(UiEvent::FilterChange(FilterForm {
            stores: vec!["acme".into()],
            categories: vec![],
            price: Some("40-100".into()),
        }))
        .await;
        assert_eq!(titles(s.storefront()), vec!["Abajur"]);

        s.handle(UiEvent::SortChange("price-desc".into())).await;
        assert_eq!(
            titles(s.storefront()),
            vec!["Cafeteira", "Liquidificador", "Abajur"]
        );
    }

    #[tokio::test]
    async fn test_panel_events() {
        let mut s = session(CSV);
        s.handle(UiEvent::OpenFilters).await;
        assert!(s.storefront().panels().filters_open);
        s.handle(UiEvent::PageClick {
            target: ClickTarget::Elsewhere,
            viewport_width: 400,
        })
        .await;
        assert!(!s.storefront().panels().filters_open);
        s.handle(UiEvent::ToggleNav).await;
        assert!(s.storefront().panels().nav_open);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_drains_events() {
        let (tx, rx) = mpsc::channel(8);
        let handle = tokio::spawn(session(CSV).run(rx));

        tx.send(UiEvent::SearchInput("acme".into())).await.unwrap();
        tokio::time::sleep(Duration::from_millis(350)).await;
        drop(tx);

        let store = handle.await.unwrap();
        assert_eq!(titles(&store), vec!["Cafeteira", "Abajur"]);
    }
}
