//! CLI command implementations.

pub mod config;
pub mod list;
pub mod render;

use std::path::Path;

use anyhow::{bail, Context as _, Result};
use catalog_page::{CatalogSession, FilterForm, Storefront, UiEvent};
use clap::{Args, Subcommand};
use vitrine_catalog::Currency;
use vitrine_feed::{FeedFormat, FeedLoader, FeedSource, HttpFeedClient, StaticFeed};

use crate::context::Context;

/// Where the feed comes from.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Read the feed from a local file instead of `feed.url`.
    #[arg(short, long)]
    pub input: Option<String>,

    /// Feed format override (auto, csv, gviz, rest).
    #[arg(long)]
    pub format: Option<String>,
}

/// Page controls to apply after loading.
///
/// Each control recomputes the grid from the full catalog, as on the page:
/// filters first, then the search, then the sort over the search results.
#[derive(Args, Debug, Default)]
pub struct ControlArgs {
    /// Store checkbox to tick (repeatable).
    #[arg(long = "store")]
    pub stores: Vec<String>,

    /// Category checkbox to tick (repeatable).
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Price band, e.g. `50-100` or `200-`.
    #[arg(long)]
    pub price: Option<String>,

    /// Search term (title or store).
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort mode (relevance, price-asc, price-desc, discount).
    #[arg(long)]
    pub sort: Option<String>,
}

impl ControlArgs {
    fn filter_form(&self) -> Option<FilterForm> {
        if self.stores.is_empty() && self.categories.is_empty() && self.price.is_none() {
            return None;
        }
        Some(FilterForm {
            stores: self.stores.clone(),
            categories: self.categories.clone(),
            price: self.price.clone(),
        })
    }

    /// Events the page would receive for these controls.
    pub fn events(&self) -> Vec<UiEvent> {
        let mut events = Vec::new();
        if let Some(form) = self.filter_form() {
            events.push(UiEvent::FilterChange(form));
        }
        if let Some(term) = &self.search {
            events.push(UiEvent::SearchInput(term.clone()));
        }
        if let Some(sort) = &self.sort {
            events.push(UiEvent::SortChange(sort.clone()));
        }
        events
    }
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub controls: ControlArgs,

    /// Write the page here instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Render with the filter panel open.
    #[arg(long)]
    pub open_filters: bool,
}

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub controls: ControlArgs,

    /// Show only the first N products.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Print the path of the config file in use.
    Path,
    /// Set a config value in the config file.
    Set {
        /// Config key (dot-separated), e.g. `feed.url`.
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Load the feed and replay the requested controls through a catalog session.
pub async fn load_storefront(
    source: &SourceArgs,
    controls: &ControlArgs,
    ctx: &Context,
) -> Result<Storefront> {
    let format = match &source.format {
        Some(raw) => raw.parse::<FeedFormat>().map_err(anyhow::Error::msg)?,
        None => ctx.config.feed_format()?,
    };
    let currency = ctx.config.currency()?;
    let loader = FeedLoader::new(format, ctx.config.mapper());

    match &source.input {
        Some(path) => {
            let feed = read_feed_file(&ctx.resolve_path(path))?;
            drive(feed, loader, currency, controls, ctx).await
        }
        None => {
            ctx.output.debug(&format!("Fetching {}", ctx.config.feed.url));
            let client = HttpFeedClient::with_timeout(ctx.config.feed.url.clone(), ctx.config.timeout())
                .context("Invalid feed configuration")?;
            drive(client, loader, currency, controls, ctx).await
        }
    }
}

async fn drive<S: FeedSource>(
    source: S,
    loader: FeedLoader,
    currency: Currency,
    controls: &ControlArgs,
    ctx: &Context,
) -> Result<Storefront> {
    let mut session = CatalogSession::new(source, loader, currency).with_debounce(ctx.config.debounce());

    if !session.start().await {
        bail!("Failed to load products from the feed");
    }
    ctx.output
        .debug(&format!("Loaded {} products", session.storefront().catalog().len()));

    for event in controls.events() {
        let searching = matches!(event, UiEvent::SearchInput(_));
        session.handle(event).await;
        if searching {
            session.next_search().await;
        }
    }

    Ok(session.into_storefront())
}

/// A local feed file. JSON files are served with a JSON content type so
/// format detection can tell gviz from REST.
fn read_feed_file(path: &Path) -> Result<StaticFeed> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read feed file: {}", path.display()))?;
    let content_type = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Some("application/json"),
        _ => None,
    };
    Ok(StaticFeed::new(path.to_string_lossy(), content_type, body))
}
