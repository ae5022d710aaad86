use providers::github::{DEFAULT_USERNAME, GithubClient, LanguageBytes, Overview, RepoStars};
use yew::prelude::*;

use crate::Route;
use crate::components::{EmptySubmit, ErrorAlert, LoadingIndicator, SearchBox};
use crate::hooks::{use_query_state, use_search_navigate, use_title, use_tracked_fetch};

#[function_component]
pub fn GithubPage() -> Html {
    use_title("GitHub");
    let query = use_query_state("username");
    let navigate = use_search_navigate();

    let (username, is_default) = query.term_or_default(DEFAULT_USERNAME);
    let username = username.to_string();

    let fetch = use_tracked_fetch(username.clone(), true, |username| async move {
        GithubClient::new().overview(&username).await
    });

    let on_commit = {
        let navigate = navigate.clone();
        Callback::from(move |term: Option<String>| {
            let params = match term {
                Some(term) => vec![("username", term)],
                None => vec![],
            };
            navigate.emit((Route::Github, params));
        })
    };

    html! {
        <div>
            <h2 class="text-2xl font-bold mb-4">{"GitHub Profile"}</h2>

            <SearchBox
                placeholder="GitHub username..."
                committed={query.q.clone()}
                {on_commit}
                empty_submit={EmptySubmit::ResetToDefault}
                busy={fetch.status.is_loading()}
            />

            if is_default {
                <p class="text-center text-sm text-gray-500 dark:text-gray-400 mb-4">
                    {format!("Showing sample profile: {username}")}
                </p>
            }

            if let Some(message) = fetch.status.error() {
                <ErrorAlert message={message.to_string()} />
            } else if fetch.status.is_loading() {
                <LoadingIndicator label="Loading profile..." />
            } else if let Some(overview) = &fetch.data {
                <OverviewView overview={overview.clone()} />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct OverviewProps {
    overview: Overview,
}

#[function_component]
fn OverviewView(props: &OverviewProps) -> Html {
    let Overview { user, languages, top_repos } = &props.overview;

    html! {
        <div class="space-y-6">
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow border border-gray-200 dark:border-gray-700 p-6 flex items-start space-x-6">
                <img
                    src={user.avatar_url.clone()}
                    alt={format!("{} avatar", user.login)}
                    class="w-24 h-24 rounded-full"
                />
                <div class="flex-1">
                    <h3 class="text-xl font-semibold">
                        {user.name.clone().unwrap_or_else(|| user.login.clone())}
                    </h3>
                    <a
                        href={user.html_url.clone()}
                        target="_blank"
                        class="text-blue-600 dark:text-blue-400 text-sm hover:underline"
                    >
                        {format!("@{}", user.login)}
                    </a>
                    if let Some(bio) = &user.bio {
                        <p class="text-gray-600 dark:text-gray-300 mt-2">{bio}</p>
                    }
                    <div class="flex flex-wrap gap-x-6 gap-y-1 mt-3 text-sm text-gray-500 dark:text-gray-400">
                        <span>{format!("{} followers", user.followers)}</span>
                        <span>{format!("{} following", user.following)}</span>
                        <span>{format!("{} public repos", user.public_repos)}</span>
                        if let Some(location) = &user.location {
                            <span>{location}</span>
                        }
                        if let Some(company) = &user.company {
                            <span>{company}</span>
                        }
                        if let Some(blog) = user.blog.as_deref().filter(|blog| !blog.is_empty()) {
                            <a
                                href={blog.to_string()}
                                target="_blank"
                                class="text-blue-600 dark:text-blue-400 hover:underline"
                            >
                                {"Website"}
                            </a>
                        }
                        if let Some(twitter) = &user.twitter_username {
                            <a
                                href={format!("https://twitter.com/{twitter}")}
                                target="_blank"
                                class="text-blue-600 dark:text-blue-400 hover:underline"
                            >
                                {format!("@{twitter}")}
                            </a>
                        }
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="bg-white dark:bg-gray-800 rounded-lg shadow border border-gray-200 dark:border-gray-700 p-6">
                    <h4 class="font-semibold mb-4">{"Languages by bytes of code"}</h4>
                    <LanguageBars languages={languages.clone()} />
                </div>
                <div class="bg-white dark:bg-gray-800 rounded-lg shadow border border-gray-200 dark:border-gray-700 p-6">
                    <h4 class="font-semibold mb-4">{"Top starred repositories"}</h4>
                    <StarBars repos={top_repos.clone()} />
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct LanguageBarsProps {
    languages: Vec<LanguageBytes>,
}

#[function_component]
fn LanguageBars(props: &LanguageBarsProps) -> Html {
    let max = props.languages.iter().map(|l| l.bytes).max().unwrap_or(0);
    if max == 0 {
        return html! {
            <p class="text-sm text-gray-500 dark:text-gray-400">
                {"No language data available."}
            </p>
        };
    }

    html! {
        <div class="space-y-3">
            { for props.languages.iter().map(|language| {
                let pct = (language.bytes as f64 / max as f64 * 100.0).max(2.0);
                html! {
                    <div>
                        <div class="flex justify-between text-sm mb-1">
                            <span>{&language.name}</span>
                            <span class="text-gray-500 dark:text-gray-400">
                                {format_bytes(language.bytes)}
                            </span>
                        </div>
                        <div class="h-2 bg-gray-200 dark:bg-gray-700 rounded-full">
                            <div
                                class="h-2 bg-blue-600 rounded-full"
                                style={format!("width: {pct:.0}%")}
                            ></div>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StarBarsProps {
    repos: Vec<RepoStars>,
}

#[function_component]
fn StarBars(props: &StarBarsProps) -> Html {
    let max = props.repos.iter().map(|r| r.stars).max().unwrap_or(0);
    if max == 0 {
        return html! {
            <p class="text-sm text-gray-500 dark:text-gray-400">
                {"No starred repositories."}
            </p>
        };
    }

    html! {
        <div class="space-y-3">
            { for props.repos.iter().map(|repo| {
                let pct = (repo.stars as f64 / max as f64 * 100.0).max(2.0);
                html! {
                    <div>
                        <div class="flex justify-between text-sm mb-1">
                            <span class="truncate">{&repo.name}</span>
                            <span class="text-gray-500 dark:text-gray-400">
                                {format!("\u{2605} {}", repo.stars)}
                            </span>
                        </div>
                        <div class="h-2 bg-gray-200 dark:bg-gray-700 rounded-full">
                            <div
                                class="h-2 bg-amber-500 rounded-full"
                                style={format!("width: {pct:.0}%")}
                            ></div>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

fn format_bytes(bytes: u64) -> String {
    if bytes >= 1_000_000 {
        format!("{:.1} MB", bytes as f64 / 1_000_000.0)
    } else if bytes >= 1_000 {
        format!("{:.1} kB", bytes as f64 / 1_000.0)
    } else {
        format!("{bytes} B")
    }
}
