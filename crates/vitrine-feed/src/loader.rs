//! Fetch → parse → map pipeline.

use vitrine_catalog::Product;

use crate::client::FeedSource;
use crate::error::FeedError;
use crate::format::FeedFormat;
use crate::mapper::RecordMapper;
use crate::parse;

/// Loads products from a feed source in one pass.
#[derive(Debug, Clone, Default)]
pub struct FeedLoader {
    format: FeedFormat,
    mapper: RecordMapper,
}

impl FeedLoader {
    pub fn new(format: FeedFormat, mapper: RecordMapper) -> Self {
        Self { format, mapper }
    }

    /// Fetch, parse and map. Any fetch or parse failure fails the whole load.
    pub async fn load(&self, source: &dyn FeedSource) -> Result<Vec<Product>, FeedError> {
        let raw = source.fetch().await?;
        let format = self.format.resolve(&raw);
        tracing::debug!(url = %raw.url, format = format.as_str(), "parsing feed");

        let records = parse::parse(format, &raw.body)?;
        let products = self.mapper.map_all(&records);
        tracing::info!(count = products.len(), format = format.as_str(), "feed loaded");

        Ok(products)
    }
}

/// Load with auto-detected format and default fallbacks.
pub async fn load_products(source: &dyn FeedSource) -> Result<Vec<Product>, FeedError> {
    FeedLoader::default().load(source).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{HttpFeedClient, StaticFeed};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_csv_end_to_end() {
        let feed = StaticFeed::new(
            "https://example.com/export?format=csv",
            Some("text/csv"),
            "title,price,store\nWidget,19.90,Acme",
        );
        let products = load_products(&feed).await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title, "Widget");
        assert_eq!(products[0].price, 19.90);
        assert_eq!(products[0].store, "Acme");
        assert_eq!(products[0].category, "geral");
    }

    #[tokio::test]
    async fn test_gviz_over_http() {
        let server = MockServer::start().await;
        let body = r#"/*O_o*/
google.visualization.Query.setResponse({"table":{"cols":[{"id":"A","label":"Nome"},{"id":"B","label":"Preço"},{"id":"C","label":"Estoque"}],"rows":[{"c":[{"v":"Caneca"},{"v":"29,90"},{"v":3.0}]}]}});"#;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/javascript; charset=utf-8")
                    .set_body_string(body),
            )
            .mount(&server)
            .await;

        let client = HttpFeedClient::new(format!("{}/gviz/tq?tqx=out:json", server.uri())).unwrap();
        let products = load_products(&client).await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title, "Caneca");
        assert_eq!(products[0].price, 29.90);
        assert_eq!(products[0].stock, 3);
        assert!(products[0].is_purchasable());
    }

    #[tokio::test]
    async fn test_rest_with_explicit_format() {
        let feed = StaticFeed::new(
            "https://bridge.example.com/api/v1/abc",
            None,
            r#"[{"id":"a1","title":"Lamp","price":"45","stock":"2"}]"#,
        );
        let loader = FeedLoader::new(FeedFormat::Rest, RecordMapper::new());
        let products = loader.load(&feed).await.unwrap();

        assert_eq!(products[0].id.to_string(), "a1");
        assert_eq!(products[0].price, 45.0);
    }

    #[tokio::test]
    async fn test_malformed_gviz_fails_load() {
        let feed = StaticFeed::new("https://x/gviz/tq", None, "setResponse({broken});");
        assert!(load_products(&feed).await.is_err());
    }

    #[tokio::test]
    async fn test_empty_body_is_empty_catalog() {
        let feed = StaticFeed::new("https://x/export.csv", None, "");
        assert!(load_products(&feed).await.unwrap().is_empty());
    }
}
