//! Google Custom Search for the dashboard's web-search box. Needs both an
//! API key and a search-engine id; without either the page shows a
//! configuration error and never issues a request.

use serde::Deserialize;

use crate::ProviderError;

const API_BASE: &str = "https://www.googleapis.com/customsearch/v1";

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SearchItem {
    pub title: Option<String>,
    pub link: String,
    pub snippet: Option<String>,
    #[serde(rename = "formattedUrl")]
    pub formatted_url: Option<String>,
}

impl SearchItem {
    pub fn display_url(&self) -> &str {
        self.formatted_url.as_deref().unwrap_or(&self.link)
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct ApiError {
    message: Option<String>,
}

#[derive(Debug)]
pub struct WebSearchClient {
    http: reqwest::Client,
    api_key: String,
    cx_id: String,
}

impl WebSearchClient {
    pub fn new(api_key: Option<&str>, cx_id: Option<&str>) -> Result<Self, ProviderError> {
        let api_key = api_key
            .filter(|key| !key.is_empty())
            .ok_or(ProviderError::MissingKey("GOOGLE_API_KEY"))?;
        let cx_id = cx_id
            .filter(|id| !id.is_empty())
            .ok_or(ProviderError::MissingKey("GOOGLE_CX_ID"))?;
        Ok(Self {
            http: reqwest::Client::new(),
            api_key: api_key.to_string(),
            cx_id: cx_id.to_string(),
        })
    }

    pub async fn search(&self, query: &str) -> Result<Vec<SearchItem>, ProviderError> {
        tracing::debug!(query, "fetching custom search");
        let response = self
            .http
            .get(API_BASE)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.cx_id.as_str()),
                ("q", query),
            ])
            .send()
            .await?;
        let status = response.status();
        let body: SearchResponse = response.json().await?;
        decode(body, status)
    }
}

fn decode(
    body: SearchResponse,
    status: reqwest::StatusCode,
) -> Result<Vec<SearchItem>, ProviderError> {
    if let Some(error) = body.error {
        let message = error.message.unwrap_or_else(|| "Request failed".to_string());
        return Err(ProviderError::Upstream(format!("Search API Error: {message}")));
    }
    if !status.is_success() {
        return Err(ProviderError::Upstream(format!("Search API Error: HTTP {status}")));
    }
    Ok(body.items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn both_credentials_are_required() {
        assert!(matches!(
            WebSearchClient::new(None, Some("cx")).unwrap_err(),
            ProviderError::MissingKey("GOOGLE_API_KEY")
        ));
        assert!(matches!(
            WebSearchClient::new(Some("key"), None).unwrap_err(),
            ProviderError::MissingKey("GOOGLE_CX_ID")
        ));
        assert!(WebSearchClient::new(Some("key"), Some("cx")).is_ok());
    }

    #[test]
    fn missing_items_decode_as_empty_results() {
        let body: SearchResponse = serde_json::from_str(r#"{"kind": "customsearch#search"}"#)
            .unwrap();
        assert!(decode(body, StatusCode::OK).unwrap().is_empty());
    }

    #[test]
    fn error_body_surfaces_the_message() {
        let body: SearchResponse = serde_json::from_str(
            r#"{"error": {"code": 429, "message": "Quota exceeded"}}"#,
        )
        .unwrap();
        let err = decode(body, StatusCode::TOO_MANY_REQUESTS).unwrap_err();
        assert_eq!(err.to_string(), "Search API Error: Quota exceeded");
    }

    #[test]
    fn display_url_falls_back_to_link() {
        let item: SearchItem =
            serde_json::from_str(r#"{"link": "https://example.com/page"}"#).unwrap();
        assert_eq!(item.display_url(), "https://example.com/page");
    }
}
