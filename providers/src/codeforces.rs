//! Codeforces profile and submission statistics. Every endpoint shares the
//! `{status, comment, result}` envelope; a FAILED status carries the
//! upstream comment verbatim. The problemset catalog is large and mostly
//! static, so the UI caches it once per app lifetime (see the ui crate's
//! problemset hook) and joins submissions against it here.

use std::collections::HashMap;

use futures::join;
use serde::Deserialize;

use crate::ProviderError;

const API_BASE: &str = "https://codeforces.com/api";

pub const DEFAULT_HANDLE: &str = "Rohan_Garg_";
/// How many recent submissions to sample for the charts.
pub const SUBMISSION_SAMPLE: u32 = 1000;

#[derive(Deserialize)]
struct Envelope<T> {
    status: String,
    comment: Option<String>,
    result: Option<T>,
}

impl<T> Envelope<T> {
    fn into_result(self) -> Result<T, ProviderError> {
        if self.status != "OK" {
            let comment = self.comment.unwrap_or_else(|| "Request failed".to_string());
            return Err(ProviderError::Upstream(format!("Codeforces API Error: {comment}")));
        }
        self.result.ok_or_else(|| {
            ProviderError::upstream("Codeforces API Error: OK response with no result")
        })
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfUser {
    pub handle: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub rating: Option<i64>,
    pub max_rating: Option<i64>,
    pub rank: Option<String>,
    pub max_rank: Option<String>,
    pub organization: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub contribution: Option<i64>,
    pub title_photo: Option<String>,
}

impl CfUser {
    /// Title photos come back protocol-relative ("//userpic...").
    pub fn photo_url(&self) -> Option<String> {
        self.title_photo.as_ref().map(|url| {
            if let Some(rest) = url.strip_prefix("//") {
                format!("https://{rest}")
            } else {
                url.clone()
            }
        })
    }

    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            _ => self.handle.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemRef {
    pub contest_id: Option<i64>,
    pub index: String,
}

impl ProblemRef {
    /// Composite key joining a submission to the problemset catalog.
    pub fn key(&self) -> String {
        match self.contest_id {
            Some(contest) => format!("{contest}-{}", self.index),
            None => format!("?-{}", self.index),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub verdict: Option<String>,
    pub programming_language: Option<String>,
    pub problem: ProblemRef,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    #[serde(flatten)]
    pub reference: ProblemRef,
    pub name: Option<String>,
    pub rating: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Deserialize)]
struct ProblemsetResult {
    problems: Vec<Problem>,
}

/// The catalog the profile page joins solved submissions against.
pub type ProblemMap = HashMap<String, Problem>;

#[derive(Clone, Debug, PartialEq)]
pub struct CountEntry {
    pub name: String,
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RatingCount {
    pub rating: u32,
    pub count: u64,
}

/// Chart-ready aggregates over one handle's sampled submissions.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SubmissionStats {
    pub verdicts: Vec<CountEntry>,
    pub languages: Vec<CountEntry>,
    pub solved_ratings: Vec<RatingCount>,
    pub solved_tags: Vec<CountEntry>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    pub user: CfUser,
    pub stats: SubmissionStats,
}

#[derive(Debug)]
pub struct CodeforcesClient {
    http: reqwest::Client,
}

impl Default for CodeforcesClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeforcesClient {
    pub fn new() -> Self {
        Self { http: reqwest::Client::new() }
    }

    // The API signals failure inside the JSON envelope (often alongside a
    // non-2xx status), so the body is decoded unconditionally.
    async fn call<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<T, ProviderError> {
        let url = format!("{API_BASE}/{endpoint}");
        tracing::debug!(%url, "fetching codeforces api");
        let envelope: Envelope<T> = self.http.get(url).send().await?.json().await?;
        envelope.into_result()
    }

    pub async fn user_info(&self, handle: &str) -> Result<CfUser, ProviderError> {
        let users: Vec<CfUser> = self.call(&format!("user.info?handles={handle}")).await?;
        users.into_iter().next().ok_or_else(|| {
            ProviderError::Upstream(format!(
                "User handle \"{handle}\" not found on Codeforces."
            ))
        })
    }

    pub async fn user_submissions(
        &self,
        handle: &str,
        count: u32,
    ) -> Result<Vec<Submission>, ProviderError> {
        self.call(&format!("user.status?handle={handle}&count={count}")).await
    }

    /// Fetches the entire problemset and keys it for joining. Expensive;
    /// callers are expected to cache the result.
    pub async fn problemset(&self) -> Result<ProblemMap, ProviderError> {
        let result: ProblemsetResult = self.call("problemset.problems").await?;
        tracing::debug!(problems = result.problems.len(), "problemset fetched");
        Ok(result
            .problems
            .into_iter()
            .map(|problem| (problem.reference.key(), problem))
            .collect())
    }

    /// Profile and submission sample fetched concurrently, joined against
    /// the (cached) problemset for the solved-problem charts.
    pub async fn profile(
        &self,
        handle: &str,
        problems: &ProblemMap,
    ) -> Result<Profile, ProviderError> {
        let (user, submissions) = join!(
            self.user_info(handle),
            self.user_submissions(handle, SUBMISSION_SAMPLE)
        );
        let user = user?;
        let submissions = submissions?;
        Ok(Profile { user, stats: submission_stats(&submissions, problems) })
    }
}

/// Aggregates a submission sample into chart-ready counts. Solved-problem
/// ratings and tags are deduplicated by problem key so re-solves of the same
/// problem count once, and only problems present in the catalog contribute
/// (an empty catalog degrades those two charts to empty, nothing more).
pub fn submission_stats(submissions: &[Submission], problems: &ProblemMap) -> SubmissionStats {
    let mut verdicts: HashMap<&str, u64> = HashMap::new();
    let mut languages: HashMap<&str, u64> = HashMap::new();
    let mut solved: HashMap<String, &Problem> = HashMap::new();

    for submission in submissions {
        let verdict = submission.verdict.as_deref().unwrap_or("UNKNOWN");
        *verdicts.entry(verdict).or_default() += 1;
        let language = submission.programming_language.as_deref().unwrap_or("Unknown");
        *languages.entry(language).or_default() += 1;

        if verdict == "OK" {
            let key = submission.problem.key();
            if let Some(problem) = problems.get(&key) {
                solved.entry(key).or_insert(problem);
            }
        }
    }

    let mut ratings: HashMap<u32, u64> = HashMap::new();
    let mut tags: HashMap<&str, u64> = HashMap::new();
    for problem in solved.values() {
        if let Some(rating) = problem.rating {
            *ratings.entry(rating).or_default() += 1;
        }
        for tag in &problem.tags {
            *tags.entry(tag).or_default() += 1;
        }
    }

    SubmissionStats {
        verdicts: sorted_counts(verdicts),
        languages: sorted_counts(languages),
        solved_ratings: {
            let mut entries: Vec<_> = ratings
                .into_iter()
                .map(|(rating, count)| RatingCount { rating, count })
                .collect();
            entries.sort_by_key(|entry| entry.rating);
            entries
        },
        solved_tags: sorted_counts(tags),
    }
}

fn sorted_counts(map: HashMap<&str, u64>) -> Vec<CountEntry> {
    let mut entries: Vec<_> = map
        .into_iter()
        .map(|(name, count)| CountEntry { name: name.to_string(), count })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_envelope_surfaces_the_comment() {
        let envelope: Envelope<Vec<CfUser>> = serde_json::from_str(
            r#"{"status": "FAILED", "comment": "handles: User with handle nobody not found"}"#,
        )
        .unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Codeforces API Error: handles: User with handle nobody not found"
        );
    }

    #[test]
    fn ok_envelope_yields_the_result() {
        let envelope: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"status": "OK", "result": [1, 2, 3]}"#).unwrap();
        assert_eq!(envelope.into_result().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn user_decodes_camel_case_fields() {
        let user: CfUser = serde_json::from_str(
            r#"{
                "handle": "tourist",
                "firstName": "Gennady",
                "lastName": "Korotkevich",
                "rating": 3780,
                "maxRating": 4009,
                "rank": "legendary grandmaster",
                "maxRank": "tourist",
                "contribution": 128,
                "titlePhoto": "//userpic.codeforces.org/x/title.jpg"
            }"#,
        )
        .unwrap();
        assert_eq!(user.max_rating, Some(4009));
        assert_eq!(
            user.photo_url().as_deref(),
            Some("https://userpic.codeforces.org/x/title.jpg")
        );
        assert_eq!(user.display_name(), "Gennady Korotkevich");
    }

    fn submission(verdict: &str, language: &str, contest: i64, index: &str) -> Submission {
        Submission {
            verdict: Some(verdict.to_string()),
            programming_language: Some(language.to_string()),
            problem: ProblemRef { contest_id: Some(contest), index: index.to_string() },
        }
    }

    fn problem(contest: i64, index: &str, rating: Option<u32>, tags: &[&str]) -> Problem {
        Problem {
            reference: ProblemRef { contest_id: Some(contest), index: index.to_string() },
            name: None,
            rating,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn catalog(problems: Vec<Problem>) -> ProblemMap {
        problems.into_iter().map(|p| (p.reference.key(), p)).collect()
    }

    #[test]
    fn stats_count_verdicts_and_languages() {
        let submissions = vec![
            submission("OK", "Rust", 1, "A"),
            submission("WRONG_ANSWER", "Rust", 1, "B"),
            submission("OK", "C++17", 1, "A"),
        ];
        let stats = submission_stats(&submissions, &ProblemMap::new());
        assert_eq!(
            stats.verdicts,
            vec![
                CountEntry { name: "OK".into(), count: 2 },
                CountEntry { name: "WRONG_ANSWER".into(), count: 1 },
            ]
        );
        assert_eq!(stats.languages[0], CountEntry { name: "Rust".into(), count: 2 });
    }

    #[test]
    fn solved_problems_deduplicate_by_key() {
        let submissions = vec![
            submission("OK", "Rust", 1, "A"),
            submission("OK", "Rust", 1, "A"), // re-solve, counts once
            submission("OK", "Rust", 2, "B"),
            submission("WRONG_ANSWER", "Rust", 3, "C"), // not solved
        ];
        let problems = catalog(vec![
            problem(1, "A", Some(800), &["math"]),
            problem(2, "B", Some(1200), &["math", "dp"]),
            problem(3, "C", Some(1600), &["graphs"]),
        ]);
        let stats = submission_stats(&submissions, &problems);
        assert_eq!(
            stats.solved_ratings,
            vec![
                RatingCount { rating: 800, count: 1 },
                RatingCount { rating: 1200, count: 1 },
            ]
        );
        assert_eq!(stats.solved_tags[0], CountEntry { name: "math".into(), count: 2 });
    }

    #[test]
    fn empty_catalog_degrades_rating_and_tag_charts_only() {
        let submissions = vec![submission("OK", "Rust", 1, "A")];
        let stats = submission_stats(&submissions, &ProblemMap::new());
        assert!(!stats.verdicts.is_empty());
        assert!(stats.solved_ratings.is_empty());
        assert!(stats.solved_tags.is_empty());
    }

    #[test]
    fn problemset_rows_key_by_contest_and_index() {
        let reference = ProblemRef { contest_id: Some(1914), index: "G2".into() };
        assert_eq!(reference.key(), "1914-G2");
        let reference = ProblemRef { contest_id: None, index: "A".into() };
        assert_eq!(reference.key(), "?-A");
    }
}
