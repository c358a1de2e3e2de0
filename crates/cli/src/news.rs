//! # News Provider Client
//!
//! A client for the Event Registry keyword article search. Responses are
//! decoded leniently: a body that is not JSON yields an empty article list,
//! but an error HTTP status still fails the call afterwards, so a malformed
//! body never masks a failed request.

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

pub const EVENT_REGISTRY_API_URL: &str = "https://eventregistry.org/api/v1/article/getArticles";

/// The provider's maximum allowed lookback, in days.
const MAX_DATA_TIME_WINDOW_DAYS: u32 = 31;

/// Custom error types for the news fetch.
#[derive(Error, Debug)]
pub enum NewsError {
    #[error("Failed to fetch articles: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("News provider returned {status}: {body}")]
    Provider {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// An article record as returned by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    /// The provider-assigned unique id.
    pub uri: String,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub source: Option<ArticleSource>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ArticlesEnvelope {
    #[serde(default)]
    articles: ArticleResults,
}

#[derive(Debug, Default, Deserialize)]
struct ArticleResults {
    #[serde(default)]
    results: Vec<Article>,
}

/// A client for the news provider's article search endpoint.
pub struct NewsClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl NewsClient {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
        }
    }

    /// Fetches up to `page_size` articles matching `topic` as a keyword,
    /// sorted by date, within the provider's maximum time window.
    pub async fn fetch_articles(
        &self,
        topic: &str,
        page_size: usize,
    ) -> Result<Vec<Article>, NewsError> {
        let params = [
            ("action", "getArticles".to_string()),
            ("keyword", topic.to_string()),
            (
                "forceMaxDataTimeWindow",
                MAX_DATA_TIME_WINDOW_DAYS.to_string(),
            ),
            ("resultType", "articles".to_string()),
            ("articlesSortBy", "date".to_string()),
            ("apiKey", self.api_key.clone()),
            ("articlesCount", page_size.to_string()),
        ];

        info!(topic, page_size, "Fetching news articles");
        let response = self.client.get(&self.api_url).query(&params).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // Decode before the status check: a malformed body is logged and
        // replaced with an empty envelope, then the status still decides
        // whether the call failed.
        let envelope: ArticlesEnvelope = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!("Failed to decode provider response as JSON: {e}");
                ArticlesEnvelope::default()
            }
        };

        if !status.is_success() {
            return Err(NewsError::Provider { status, body });
        }

        let articles = envelope.articles.results;
        info!("Found {} articles.", articles.len());
        Ok(articles)
    }
}
