//! End-to-end checks of the orchestration policies over canned JSON: the
//! decode -> transform pipeline each page drives, plus the pager gating that
//! sits in front of every paginated fetch.

use providers::QueryState;
use providers::codeforces::{self, ProblemMap, Submission};
use providers::fanout;
use providers::github::{self, Repo};
use providers::pager;

#[test]
fn page_gating_and_ceiling_work_together() {
    // 25 results at 12 per page is 3 pages.
    assert_eq!(pager::total_pages(25, 12), 3);

    // From page 2 of 3: both neighbors fine, edges and no-ops rejected.
    assert!(pager::page_change_allowed(1, 2, 3, false));
    assert!(pager::page_change_allowed(3, 2, 3, false));
    assert!(!pager::page_change_allowed(0, 2, 3, false));
    assert!(!pager::page_change_allowed(4, 2, 3, false));
    assert!(!pager::page_change_allowed(2, 2, 3, false));

    // In flight blocks everything.
    assert!(!pager::page_change_allowed(1, 2, 3, true));
    assert!(!pager::page_change_allowed(3, 2, 3, true));
}

#[test]
fn query_state_is_a_pure_function_of_the_search_string() {
    let search = "?q=rust+books&page=2";
    let first = QueryState::from_search(search);
    let second = QueryState::from_search(search);
    // Equal inputs give equal values, so a dependency-tracked fetch effect
    // keyed on the parse result stays quiet across re-renders.
    assert_eq!(first, second);
    assert_eq!(first.q.as_deref(), Some("rust books"));
    assert_eq!(first.page, 2);
    assert!(first.id.is_none());
}

#[test]
fn fanout_failures_default_without_failing_the_batch() {
    let futures: Vec<_> = (0..5)
        .map(|i| async move {
            if i % 2 == 1 {
                Err(providers::ProviderError::upstream("secondary lookup failed"))
            } else {
                Ok(vec![i])
            }
        })
        .collect();
    let results: Vec<Vec<i32>> =
        futures::executor::block_on(fanout::join_defaulting(futures, "test batch"));
    assert_eq!(results.len(), 5);
    assert_eq!(results[0], vec![0]);
    assert!(results[1].is_empty());
    assert_eq!(results[2], vec![2]);
    assert!(results[3].is_empty());
    assert_eq!(results[4], vec![4]);
}

#[test]
fn github_repo_payload_flows_into_both_transforms() {
    let repos: Vec<Repo> = serde_json::from_str(
        r#"[
            {"name": "alpha", "fork": false, "size": 120, "stargazers_count": 7},
            {"name": "beta", "fork": true, "size": 40, "stargazers_count": 3},
            {"name": "gamma", "fork": false, "size": 0, "stargazers_count": 0},
            {"name": "delta", "fork": false, "size": 9, "stargazers_count": 1}
        ]"#,
    )
    .unwrap();

    let top = github::top_repos_by_stars(&repos);
    assert_eq!(top.len(), 3); // gamma has no stars
    assert_eq!(top[0].name, "alpha");

    // The language fan-out filter: forks and empty repos are skipped, so
    // only alpha and delta would get a secondary lookup.
    let fanout_targets: Vec<_> = repos
        .iter()
        .filter(|repo| !repo.fork && repo.size > 0)
        .map(|repo| repo.name.as_str())
        .collect();
    assert_eq!(fanout_targets, vec!["alpha", "delta"]);
}

fn canned_problemset() -> ProblemMap {
    let problems: Vec<codeforces::Problem> = serde_json::from_str(
        r#"[
            {"contestId": 1, "index": "A", "name": "Theatre Square",
             "rating": 1000, "tags": ["math"]},
            {"contestId": 1, "index": "B", "name": "Spreadsheets",
             "rating": 1600, "tags": ["implementation", "math"]},
            {"contestId": 2, "index": "A", "name": "Winner",
             "rating": 1500, "tags": ["hashing", "implementation"]}
        ]"#,
    )
    .unwrap();
    problems.into_iter().map(|problem| (problem.reference.key(), problem)).collect()
}

#[test]
fn submission_sample_joins_against_the_catalog() {
    let submissions: Vec<Submission> = serde_json::from_str(
        r#"[
            {"verdict": "OK", "programmingLanguage": "Rust",
             "problem": {"contestId": 1, "index": "A"}},
            {"verdict": "OK", "programmingLanguage": "Rust",
             "problem": {"contestId": 1, "index": "A"}},
            {"verdict": "WRONG_ANSWER", "programmingLanguage": "C++17",
             "problem": {"contestId": 1, "index": "B"}},
            {"verdict": "OK", "programmingLanguage": "C++17",
             "problem": {"contestId": 2, "index": "A"}},
            {"verdict": "OK", "programmingLanguage": "Rust",
             "problem": {"contestId": 99, "index": "Z"}}
        ]"#,
    )
    .unwrap();

    let stats = codeforces::submission_stats(&submissions, &canned_problemset());

    // Verdict and language counts cover every submission.
    assert_eq!(stats.verdicts[0].name, "OK");
    assert_eq!(stats.verdicts[0].count, 4);
    assert_eq!(stats.languages[0].name, "Rust");
    assert_eq!(stats.languages[0].count, 3);

    // The re-solve of 1-A counts once and 99-Z is absent from the catalog,
    // so exactly two solved problems contribute to the charts.
    let solved_total: u64 = stats.solved_ratings.iter().map(|entry| entry.count).sum();
    assert_eq!(solved_total, 2);
    assert_eq!(stats.solved_ratings[0].rating, 1000);
    assert_eq!(stats.solved_ratings[1].rating, 1500);

    let math = stats.solved_tags.iter().find(|entry| entry.name == "math").unwrap();
    assert_eq!(math.count, 1);
}

#[test]
fn empty_catalog_degrades_only_the_joined_charts() {
    let submissions: Vec<Submission> = serde_json::from_str(
        r#"[
            {"verdict": "OK", "programmingLanguage": "Rust",
             "problem": {"contestId": 1, "index": "A"}}
        ]"#,
    )
    .unwrap();

    let stats = codeforces::submission_stats(&submissions, &ProblemMap::new());
    assert_eq!(stats.verdicts[0].count, 1);
    assert_eq!(stats.languages[0].count, 1);
    assert!(stats.solved_ratings.is_empty());
    assert!(stats.solved_tags.is_empty());
}
