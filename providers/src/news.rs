//! NewsAPI headlines and article search. An empty committed query is not an
//! error on this page: it switches the endpoint to the US top-headlines
//! feed. Both modes share the page size and the `{status, code, message}`
//! envelope.

use serde::Deserialize;

use crate::{ProviderError, ResultSet};

const API_BASE: &str = "https://newsapi.org/v2";
const DEFAULT_COUNTRY: &str = "us";

pub const PAGE_SIZE: u64 = 12;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Article {
    pub source: Source,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: String,
    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Source {
    pub name: Option<String>,
}

#[derive(Deserialize)]
struct NewsResponse {
    status: String,
    code: Option<String>,
    message: Option<String>,
    #[serde(default)]
    articles: Vec<Article>,
    #[serde(rename = "totalResults", default)]
    total_results: u64,
}

#[derive(Debug)]
pub struct NewsClient {
    http: reqwest::Client,
    api_key: String,
}

impl NewsClient {
    pub fn new(api_key: Option<&str>) -> Result<Self, ProviderError> {
        let api_key = api_key
            .filter(|key| !key.is_empty())
            .ok_or(ProviderError::MissingKey("NEWS_API_KEY"))?;
        Ok(Self { http: reqwest::Client::new(), api_key: api_key.to_string() })
    }

    /// Non-empty query searches everything by publish date; an empty query
    /// falls back to top headlines for the default country.
    pub async fn search(
        &self,
        query: &str,
        page: u32,
    ) -> Result<ResultSet<Article>, ProviderError> {
        let page = page.to_string();
        let page_size = PAGE_SIZE.to_string();
        let mut params = vec![
            ("apiKey", self.api_key.as_str()),
            ("page", page.as_str()),
            ("pageSize", page_size.as_str()),
        ];
        let endpoint = if query.is_empty() {
            params.push(("country", DEFAULT_COUNTRY));
            "top-headlines"
        } else {
            params.push(("q", query));
            params.push(("sortBy", "publishedAt"));
            "everything"
        };
        tracing::debug!(endpoint, query, page, "fetching news api");

        let response: NewsResponse = self
            .http
            .get(format!("{API_BASE}/{endpoint}"))
            .query(&params)
            .send()
            .await?
            .json()
            .await?;
        decode(response)
    }
}

fn decode(response: NewsResponse) -> Result<ResultSet<Article>, ProviderError> {
    if response.status != "ok" {
        let code = response.code.unwrap_or_else(|| response.status.clone());
        let message = response.message.unwrap_or_else(|| "Request failed".to_string());
        return Err(ProviderError::Upstream(format!("NewsAPI Error: {code} - {message}")));
    }
    Ok(ResultSet { items: response.articles, total: response.total_results })
}
