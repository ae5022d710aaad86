//! GitHub profile, repository, and per-repo language lookups, aggregated
//! into one view model. Requests are unauthenticated, so the language
//! fan-out is capped to keep the call count inside the anonymous rate
//! budget.

use std::collections::HashMap;

use futures::join;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::{ProviderError, fanout};

const API_BASE: &str = "https://api.github.com";
const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// Only this many repos get a secondary language lookup; completeness is
/// traded for a bounded number of remote calls.
const LANGUAGE_FANOUT_LIMIT: usize = 10;
const TOP_REPO_LIMIT: usize = 6;

pub const DEFAULT_USERNAME: &str = "Rohan-droid7341";

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct User {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    pub bio: Option<String>,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
    pub location: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub twitter_username: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Repo {
    pub name: String,
    pub fork: bool,
    /// Size in kilobytes as reported by the API; zero-size repos have no
    /// language data worth fetching.
    pub size: u64,
    pub stargazers_count: u64,
}

/// Bytes of code per language, summed across the sampled repos.
#[derive(Clone, Debug, PartialEq)]
pub struct LanguageBytes {
    pub name: String,
    pub bytes: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RepoStars {
    pub name: String,
    pub stars: u64,
}

/// Everything the profile page renders for one username.
#[derive(Clone, Debug, PartialEq)]
pub struct Overview {
    pub user: User,
    pub languages: Vec<LanguageBytes>,
    pub top_repos: Vec<RepoStars>,
}

#[derive(Deserialize)]
struct ApiMessage {
    #[serde(default)]
    message: String,
}

#[derive(Debug)]
pub struct GithubClient {
    http: reqwest::Client,
}

impl Default for GithubClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GithubClient {
    pub fn new() -> Self {
        Self { http: reqwest::Client::new() }
    }

    async fn get(&self, path: &str, subject: &str) -> Result<reqwest::Response, ProviderError> {
        let response = self
            .http
            .get(format!("{API_BASE}/{path}"))
            .header("Accept", ACCEPT_HEADER)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let detail = response
            .json::<ApiMessage>()
            .await
            .map(|body| body.message)
            .unwrap_or_default();
        let mut message = format!("GitHub API Error: {status}. {detail}");
        if status == StatusCode::FORBIDDEN {
            message = format!("{} (Rate limit likely exceeded)", message.trim());
        } else if status == StatusCode::NOT_FOUND {
            message = format!("{} ({subject} not found)", message.trim());
        }
        Err(ProviderError::Upstream(message.trim().to_string()))
    }

    pub async fn user_profile(&self, username: &str) -> Result<User, ProviderError> {
        let response = self.get(&format!("users/{username}"), "User").await?;
        Ok(response.json().await?)
    }

    pub async fn user_repos(&self, username: &str) -> Result<Vec<Repo>, ProviderError> {
        let response = self
            .get(&format!("users/{username}/repos?per_page=100&sort=pushed"), "User")
            .await?;
        Ok(response.json().await?)
    }

    pub async fn repo_languages(
        &self,
        username: &str,
        repo: &str,
    ) -> Result<HashMap<String, u64>, ProviderError> {
        let response = self
            .get(&format!("repos/{username}/{repo}/languages"), "Repository")
            .await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(HashMap::new());
        }
        Ok(response.json().await?)
    }

    /// Fetches the profile and the repo list concurrently, then fans out a
    /// bounded set of language lookups. A failed language lookup degrades to
    /// an empty map; a failed profile or repo fetch fails the whole view.
    pub async fn overview(&self, username: &str) -> Result<Overview, ProviderError> {
        tracing::debug!(username, "fetching github overview");
        let (user, repos) = join!(self.user_profile(username), self.user_repos(username));
        let user = user?;
        let repos = repos?;

        let language_futures: Vec<_> = repos
            .iter()
            .filter(|repo| !repo.fork && repo.size > 0)
            .take(LANGUAGE_FANOUT_LIMIT)
            .map(|repo| self.repo_languages(username, &repo.name))
            .collect();
        let language_maps = fanout::join_defaulting(language_futures, "repo languages").await;

        Ok(Overview {
            user,
            languages: aggregate_languages(&language_maps),
            top_repos: top_repos_by_stars(&repos),
        })
    }
}

/// Sums byte counts per language across repos, most-used first.
pub fn aggregate_languages(maps: &[HashMap<String, u64>]) -> Vec<LanguageBytes> {
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for map in maps {
        for (language, bytes) in map {
            *totals.entry(language).or_default() += bytes;
        }
    }
    let mut languages: Vec<_> = totals
        .into_iter()
        .map(|(name, bytes)| LanguageBytes { name: name.to_string(), bytes })
        .collect();
    languages.sort_by(|a, b| b.bytes.cmp(&a.bytes).then_with(|| a.name.cmp(&b.name)));
    languages
}

/// The six most-starred repos, dropping anything with zero stars.
pub fn top_repos_by_stars(repos: &[Repo]) -> Vec<RepoStars> {
    let mut sorted: Vec<_> = repos.iter().filter(|repo| repo.stargazers_count > 0).collect();
    sorted.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    sorted
        .into_iter()
        .take(TOP_REPO_LIMIT)
        .map(|repo| RepoStars { name: repo.name.clone(), stars: repo.stargazers_count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, u64)]) -> HashMap<String, u64> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn languages_sum_across_repos_and_sort_by_bytes() {
        let maps = vec![
            map(&[("Rust", 1000), ("TOML", 50)]),
            map(&[("Rust", 500), ("JavaScript", 800)]),
            HashMap::new(), // a defaulted fan-out failure contributes nothing
        ];
        let aggregated = aggregate_languages(&maps);
        assert_eq!(
            aggregated,
            vec![
                LanguageBytes { name: "Rust".into(), bytes: 1500 },
                LanguageBytes { name: "JavaScript".into(), bytes: 800 },
                LanguageBytes { name: "TOML".into(), bytes: 50 },
            ]
        );
    }

    #[test]
    fn language_ties_break_alphabetically() {
        let maps = vec![map(&[("Zig", 10), ("Ada", 10)])];
        let aggregated = aggregate_languages(&maps);
        assert_eq!(aggregated[0].name, "Ada");
        assert_eq!(aggregated[1].name, "Zig");
    }

    fn repo(name: &str, stars: u64) -> Repo {
        Repo { name: name.into(), fork: false, size: 1, stargazers_count: stars }
    }

    #[test]
    fn top_repos_keep_six_and_drop_unstarred() {
        let repos = vec![
            repo("a", 1),
            repo("b", 9),
            repo("c", 0),
            repo("d", 5),
            repo("e", 3),
            repo("f", 7),
            repo("g", 2),
            repo("h", 4),
        ];
        let top = top_repos_by_stars(&repos);
        assert_eq!(top.len(), 6);
        assert_eq!(top[0], RepoStars { name: "b".into(), stars: 9 });
        assert!(top.iter().all(|r| r.stars > 0));
        assert!(top.iter().all(|r| r.name != "a")); // the smallest got cut
    }

    #[test]
    fn user_decodes_from_api_shape() {
        let user: User = serde_json::from_str(
            r#"{
                "login": "octocat",
                "name": "The Octocat",
                "avatar_url": "https://avatars.githubusercontent.com/u/583231",
                "html_url": "https://github.com/octocat",
                "bio": null,
                "followers": 3938,
                "following": 9,
                "public_repos": 8,
                "location": "San Francisco",
                "company": "@github",
                "blog": "https://github.blog",
                "twitter_username": null
            }"#,
        )
        .unwrap();
        assert_eq!(user.login, "octocat");
        assert_eq!(user.followers, 3938);
        assert_eq!(user.blog.as_deref(), Some("https://github.blog"));
        assert!(user.twitter_username.is_none());
    }

    #[test]
    fn repo_decodes_from_api_shape() {
        let repo: Repo = serde_json::from_str(
            r#"{"name": "hello-world", "fork": false, "size": 12, "stargazers_count": 42,
                "extra_field_we_ignore": true}"#,
        )
        .unwrap();
        assert_eq!(repo.name, "hello-world");
        assert_eq!(repo.stargazers_count, 42);
    }
}
