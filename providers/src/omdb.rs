//! OMDb movie search and detail lookups. The API reports failure inside a
//! 200 response as `Response: "False"`; the one "failure" that is really an
//! empty page ("Movie not found!") maps to an empty result set instead of an
//! error.

use serde::Deserialize;

use crate::{ProviderError, ResultSet};

const API_BASE: &str = "https://www.omdbapi.com/";

/// Fixed by the API; search responses always carry at most ten hits.
pub const PAGE_SIZE: u64 = 10;

pub const DEFAULT_QUERY: &str = "Minecraft";

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Poster")]
    pub poster: String,
}

impl SearchHit {
    /// `Poster` is the literal string "N/A" when there is no artwork.
    pub fn poster_url(&self) -> Option<&str> {
        (self.poster != "N/A").then_some(self.poster.as_str())
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "Search", default)]
    search: Vec<SearchHit>,
    #[serde(rename = "totalResults")]
    total_results: Option<String>,
}

/// Full record for the detail view. OMDb uses "N/A" for absent values;
/// `field()` filters those at render time.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MovieDetail {
    pub title: String,
    pub year: String,
    pub rated: String,
    pub released: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub writer: String,
    pub actors: String,
    pub plot: String,
    pub language: String,
    pub country: String,
    pub awards: String,
    pub poster: String,
    #[serde(default)]
    pub ratings: Vec<Rating>,
    pub metascore: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct Rating {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Value")]
    pub value: String,
}

pub fn is_absent(value: &str) -> bool {
    value.is_empty() || value == "N/A"
}

impl MovieDetail {
    pub fn field<'a>(&self, value: &'a str) -> Option<&'a str> {
        (!is_absent(value)).then_some(value)
    }

    /// IMDb and Metascore folded into the ratings list, IMDb first.
    pub fn all_ratings(&self) -> Vec<Rating> {
        let mut ratings = Vec::new();
        if !is_absent(&self.imdb_rating) {
            ratings.push(Rating {
                source: "IMDb".to_string(),
                value: format!("{}/10", self.imdb_rating),
            });
        }
        ratings.extend(self.ratings.iter().cloned());
        if !is_absent(&self.metascore) {
            ratings.push(Rating {
                source: "Metascore".to_string(),
                value: format!("{}/100", self.metascore),
            });
        }
        ratings
    }
}

#[derive(Debug)]
pub struct OmdbClient {
    http: reqwest::Client,
    api_key: String,
}

impl OmdbClient {
    /// `MissingKey` when no API key was configured at build time.
    pub fn new(api_key: Option<&str>) -> Result<Self, ProviderError> {
        let api_key = api_key
            .filter(|key| !key.is_empty())
            .ok_or(ProviderError::MissingKey("OMDB_API_KEY"))?;
        Ok(Self { http: reqwest::Client::new(), api_key: api_key.to_string() })
    }

    pub async fn search(
        &self,
        query: &str,
        page: u32,
    ) -> Result<ResultSet<SearchHit>, ProviderError> {
        if query.is_empty() {
            return Ok(ResultSet::empty());
        }
        tracing::debug!(query, page, "fetching omdb search");
        let page = page.to_string();
        let response: SearchResponse = self
            .http
            .get(API_BASE)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("s", query),
                ("type", "movie"),
                ("page", page.as_str()),
            ])
            .send()
            .await?
            .json()
            .await?;
        decode_search(response)
    }

    pub async fn detail(&self, imdb_id: &str) -> Result<MovieDetail, ProviderError> {
        tracing::debug!(imdb_id, "fetching omdb detail");
        let detail: MovieDetail = self
            .http
            .get(API_BASE)
            .query(&[("apikey", self.api_key.as_str()), ("i", imdb_id), ("plot", "full")])
            .send()
            .await?
            .json()
            .await?;
        if detail.response == "False" {
            let message = detail
                .error
                .unwrap_or_else(|| "Movie not found or request failed".to_string());
            return Err(ProviderError::Upstream(format!("OMDb API Error: {message}")));
        }
        Ok(detail)
    }
}

fn decode_search(response: SearchResponse) -> Result<ResultSet<SearchHit>, ProviderError> {
    if response.response == "False" {
        // An empty page, not a failure.
        if response.error.as_deref() == Some("Movie not found!") {
            return Ok(ResultSet::empty());
        }
        let message = response.error.unwrap_or_else(|| "Request failed".to_string());
        return Err(ProviderError::Upstream(format!("OMDb API Error: {message}")));
    }
    let total = response
        .total_results
        .as_deref()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(0);
    Ok(ResultSet { items: response.search, total })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_not_found_is_an_empty_page() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"Response": "False", "Error": "Movie not found!"}"#).unwrap();
        let set = decode_search(response).unwrap();
        assert_eq!(set, ResultSet::empty());
    }

    #[test]
    fn other_false_responses_are_errors() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"Response": "False", "Error": "Invalid API key!"}"#).unwrap();
        let err = decode_search(response).unwrap_err();
        assert_eq!(err.to_string(), "OMDb API Error: Invalid API key!");
    }

    #[test]
    fn search_page_decodes_hits_and_total() {
        let response: SearchResponse = serde_json::from_str(
            r#"{
                "Response": "True",
                "totalResults": "25",
                "Search": [
                    {"Title": "Dune", "Year": "2021", "imdbID": "tt1160419", "Poster": "https://img/dune.jpg"},
                    {"Title": "Dune", "Year": "1984", "imdbID": "tt0087182", "Poster": "N/A"}
                ]
            }"#,
        )
        .unwrap();
        let set = decode_search(response).unwrap();
        assert_eq!(set.total, 25);
        assert_eq!(set.items.len(), 2);
        assert_eq!(set.items[0].poster_url(), Some("https://img/dune.jpg"));
        assert_eq!(set.items[1].poster_url(), None);
        // 25 results at the API's fixed page size of 10 is 3 pages.
        assert_eq!(set.total_pages(PAGE_SIZE), 3);
    }

    #[test]
    fn missing_key_fails_before_any_network_call() {
        assert!(matches!(
            OmdbClient::new(None).unwrap_err(),
            ProviderError::MissingKey("OMDB_API_KEY")
        ));
        assert!(matches!(
            OmdbClient::new(Some("")).unwrap_err(),
            ProviderError::MissingKey("OMDB_API_KEY")
        ));
        assert!(OmdbClient::new(Some("abcd1234")).is_ok());
    }

    #[test]
    fn detail_ratings_fold_imdb_and_metascore() {
        let detail = MovieDetail {
            imdb_rating: "8.0".into(),
            metascore: "74".into(),
            ratings: vec![Rating {
                source: "Rotten Tomatoes".into(),
                value: "83%".into(),
            }],
            ..MovieDetail::default()
        };
        let ratings = detail.all_ratings();
        assert_eq!(ratings[0].source, "IMDb");
        assert_eq!(ratings[0].value, "8.0/10");
        assert_eq!(ratings[1].source, "Rotten Tomatoes");
        assert_eq!(ratings[2].value, "74/100");
    }

    #[test]
    fn absent_detail_fields_filter_out() {
        let detail = MovieDetail { director: "N/A".into(), ..MovieDetail::default() };
        assert_eq!(detail.field(&detail.director), None);
    }
}
