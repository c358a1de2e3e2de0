//! # news-agent: one-shot news ingestion for newsrag
//!
//! Fetches articles matching a topic from the news provider and posts each
//! one to the document service's add endpoint. The run is sequential and
//! fail-fast: the first failed post aborts the remainder. No local state is
//! kept.

mod api_client;
mod news;

use anyhow::Result;
use api_client::ApiClient;
use clap::Parser;
use news::{Article, NewsClient, EVENT_REGISTRY_API_URL};
use newsrag::{Metadata, MetadataValue};
use tracing_subscriber::{fmt, EnvFilter};

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Topic keyword to search articles for
    #[arg(long, default_value = "AI research")]
    topic: String,

    /// Maximum number of articles to fetch
    #[arg(long, default_value_t = 5)]
    page_size: usize,

    /// Base URL of the document service
    #[arg(
        long,
        env = "NEWSRAG_SERVER_URL",
        default_value = "http://localhost:8000"
    )]
    server_url: String,

    /// API key for the news provider
    #[arg(long, env = "NEWS_API_KEY", default_value = "YOUR_NEWSAPI_KEY")]
    api_key: String,
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    let news = NewsClient::new(EVENT_REGISTRY_API_URL.to_string(), cli.api_key);
    let api = ApiClient::new(cli.server_url);

    let articles = news.fetch_articles(&cli.topic, cli.page_size).await?;
    for article in articles {
        let (doc_id, text, metadata) = document_from_article(&article);
        let ack = api.add_document(&doc_id, &text, metadata).await?;
        println!("Posted: {doc_id} -> {ack}");
    }

    Ok(())
}

/// Derives the document id, text, and metadata for one article. Missing
/// fields fall back to placeholders instead of failing the run.
fn document_from_article(article: &Article) -> (String, String, Metadata) {
    let text = format!(
        "{}\n{}",
        article.title,
        article.body.clone().unwrap_or_default()
    );

    let source = article
        .source
        .as_ref()
        .and_then(|s| s.title.clone())
        .unwrap_or_else(|| "unknown".to_string());
    let published_at = article
        .date
        .clone()
        .unwrap_or_else(|| "unknown".to_string());
    let url = article.url.clone().unwrap_or_default();

    let metadata: Metadata = [
        ("source".to_string(), MetadataValue::Text(source)),
        ("publishedAt".to_string(), MetadataValue::Text(published_at)),
        ("url".to_string(), MetadataValue::Text(url)),
    ]
    .into_iter()
    .collect();

    (article.uri.clone(), text, metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use news::ArticleSource;

    fn full_article() -> Article {
        Article {
            uri: "art-1".to_string(),
            title: "Big model news".to_string(),
            body: Some("Details inside".to_string()),
            source: Some(ArticleSource {
                title: Some("Example Wire".to_string()),
            }),
            date: Some("2025-07-01".to_string()),
            url: Some("http://example.com/1".to_string()),
        }
    }

    #[test]
    fn article_maps_to_document_fields() {
        let (doc_id, text, metadata) = document_from_article(&full_article());

        assert_eq!(doc_id, "art-1");
        assert_eq!(text, "Big model news\nDetails inside");
        assert_eq!(metadata["source"], MetadataValue::from("Example Wire"));
        assert_eq!(metadata["publishedAt"], MetadataValue::from("2025-07-01"));
        assert_eq!(metadata["url"], MetadataValue::from("http://example.com/1"));
    }

    #[test]
    fn missing_article_fields_fall_back_to_placeholders() {
        let article = Article {
            uri: "art-2".to_string(),
            title: "Sparse record".to_string(),
            body: None,
            source: None,
            date: None,
            url: None,
        };

        let (_, text, metadata) = document_from_article(&article);

        assert_eq!(text, "Sparse record\n");
        assert_eq!(metadata["source"], MetadataValue::from("unknown"));
        assert_eq!(metadata["publishedAt"], MetadataValue::from("unknown"));
        assert_eq!(metadata["url"], MetadataValue::from(""));
    }
}
