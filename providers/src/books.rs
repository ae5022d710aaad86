//! Google Books volume search. The API key is optional here; unauthenticated
//! requests work with tighter quotas, so the key is appended only when
//! configured.

use serde::Deserialize;

use crate::{ProviderError, ResultSet};

const API_BASE: &str = "https://www.googleapis.com/books/v1";

pub const PAGE_SIZE: u64 = 12;
pub const DEFAULT_QUERY: &str = "popular programming books";

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Volume {
    pub id: Option<String>,
    #[serde(rename = "volumeInfo")]
    pub info: Option<VolumeInfo>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VolumeInfo {
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    pub description: Option<String>,
    #[serde(rename = "imageLinks")]
    pub image_links: Option<ImageLinks>,
    #[serde(rename = "infoLink")]
    pub info_link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ImageLinks {
    pub thumbnail: Option<String>,
    #[serde(rename = "smallThumbnail")]
    pub small_thumbnail: Option<String>,
}

impl VolumeInfo {
    pub fn thumbnail_url(&self) -> Option<&str> {
        let links = self.image_links.as_ref()?;
        links.thumbnail.as_deref().or(links.small_thumbnail.as_deref())
    }

    pub fn author_line(&self) -> String {
        if self.authors.is_empty() {
            "Unknown Author".to_string()
        } else {
            self.authors.join(", ")
        }
    }
}

#[derive(Deserialize)]
struct VolumesResponse {
    #[serde(default)]
    items: Vec<Volume>,
    #[serde(rename = "totalItems", default)]
    total_items: u64,
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct ApiError {
    message: Option<String>,
}

#[derive(Debug)]
pub struct BooksClient {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl BooksClient {
    pub fn new(api_key: Option<&str>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.filter(|key| !key.is_empty()).map(str::to_string),
        }
    }

    pub async fn search(
        &self,
        query: &str,
        page: u32,
    ) -> Result<ResultSet<Volume>, ProviderError> {
        if query.is_empty() {
            return Ok(ResultSet::empty());
        }
        let start_index = (u64::from(page) - 1) * PAGE_SIZE;
        tracing::debug!(query, page, start_index, "fetching google books");

        let start = start_index.to_string();
        let max_results = PAGE_SIZE.to_string();
        let mut request = self.http.get(format!("{API_BASE}/volumes")).query(&[
            ("q", query),
            ("startIndex", start.as_str()),
            ("maxResults", max_results.as_str()),
            ("orderBy", "relevance"),
        ]);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        let response = request.send().await?;
        let status = response.status();
        let body: VolumesResponse = response.json().await?;
        decode(body, status)
    }
}

fn decode(
    body: VolumesResponse,
    status: reqwest::StatusCode,
) -> Result<ResultSet<Volume>, ProviderError> {
    if let Some(error) = body.error {
        let message = error.message.unwrap_or_else(|| "Request failed".to_string());
        return Err(ProviderError::Upstream(format!("Google Books API Error: {message}")));
    }
    if !status.is_success() {
        return Err(ProviderError::Upstream(format!("Google Books API Error: {status}")));
    }
    // Items without volumeInfo render nothing useful; drop them here.
    let items: Vec<_> = body.items.into_iter().filter(|item| item.info.is_some()).collect();
    Ok(ResultSet { items, total: body.total_items })
}
