use std::rc::Rc;

use providers::codeforces::{
    CodeforcesClient, CountEntry, DEFAULT_HANDLE, Profile, RatingCount,
};
use yew::prelude::*;

use crate::Route;
use crate::components::{EmptySubmit, ErrorAlert, LoadingIndicator, SearchBox};
use crate::hooks::{
    use_problemset, use_query_state, use_search_navigate, use_title, use_tracked_fetch,
};

#[function_component]
pub fn CodeforcesPage() -> Html {
    use_title("Codeforces");
    let query = use_query_state("handle");
    let navigate = use_search_navigate();
    let problemset = use_problemset();

    let (handle, is_default) = query.term_or_default(DEFAULT_HANDLE);
    let handle = handle.to_string();

    // The profile fetch waits for the problemset catalog to settle so the
    // solved-problem charts can join against it. A poisoned catalog still
    // enables the fetch; only the rating/tag charts degrade.
    let fetch = use_tracked_fetch(handle.clone(), problemset.catalog.is_some(), {
        let catalog = problemset.catalog.clone();
        move |handle: String| {
            let catalog = catalog.clone().unwrap_or_default();
            async move { CodeforcesClient::new().profile(&handle, &catalog).await }
        }
    });

    let on_commit = {
        let navigate = navigate.clone();
        Callback::from(move |term: Option<String>| {
            // Empty submits are ignored on this page, so a commit always
            // carries a handle.
            if let Some(term) = term {
                navigate.emit((Route::Codeforces, vec![("handle", term)]));
            }
        })
    };

    html! {
        <div>
            <h2 class="text-2xl font-bold mb-4">{"Codeforces Profile"}</h2>

            <SearchBox
                placeholder="Codeforces handle..."
                committed={query.q.clone()}
                {on_commit}
                empty_submit={EmptySubmit::Ignore}
                busy={fetch.status.is_loading()}
            />

            if is_default {
                <p class="text-center text-sm text-gray-500 dark:text-gray-400 mb-4">
                    {format!("Showing sample profile: {handle}")}
                </p>
            }

            if problemset.degraded {
                <p class="text-center text-sm text-amber-600 dark:text-amber-400 mb-4">
                    {"Problem catalog unavailable; rating and tag charts will be empty."}
                </p>
            }

            if let Some(message) = fetch.status.error() {
                <ErrorAlert message={message.to_string()} />
            } else if fetch.status.is_loading() || problemset.catalog.is_none() {
                <LoadingIndicator label="Loading profile..." />
            } else if let Some(profile) = &fetch.data {
                <ProfileView profile={Rc::new(profile.clone())} />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProfileProps {
    profile: Rc<Profile>,
}

#[function_component]
fn ProfileView(props: &ProfileProps) -> Html {
    let Profile { user, stats } = &*props.profile;

    html! {
        <div class="space-y-6">
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow border border-gray-200 dark:border-gray-700 p-6 flex items-start space-x-6">
                if let Some(photo) = user.photo_url() {
                    <img
                        src={photo}
                        alt={format!("{} avatar", user.handle)}
                        class="w-24 h-24 rounded-full"
                    />
                }
                <div class="flex-1">
                    <h3 class="text-xl font-semibold">{user.display_name()}</h3>
                    <p class="text-gray-500 dark:text-gray-400 text-sm">{&user.handle}</p>
                    <div class="flex flex-wrap gap-x-6 gap-y-1 mt-3 text-sm text-gray-500 dark:text-gray-400">
                        if let Some(rank) = &user.rank {
                            <span class="capitalize">{rank}</span>
                        }
                        if let Some(rating) = user.rating {
                            <span>{format!("Rating {rating}")}</span>
                        }
                        if let Some(max_rating) = user.max_rating {
                            <span>{format!("Max {max_rating}")}</span>
                        }
                        if let Some(organization) = &user.organization {
                            <span>{organization}</span>
                        }
                        if let Some(country) = &user.country {
                            <span>{country}</span>
                        }
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <ChartCard title="Verdicts (last 1000 submissions)">
                    <CountBars entries={stats.verdicts.clone()} color="bg-blue-600" />
                </ChartCard>
                <ChartCard title="Languages">
                    <CountBars entries={stats.languages.clone()} color="bg-violet-600" />
                </ChartCard>
                <ChartCard title="Solved problems by rating">
                    <RatingBars entries={stats.solved_ratings.clone()} />
                </ChartCard>
                <ChartCard title="Solved problems by tag">
                    <CountBars entries={stats.solved_tags.clone()} color="bg-emerald-600" />
                </ChartCard>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ChartCardProps {
    title: AttrValue,
    children: Children,
}

#[function_component]
fn ChartCard(props: &ChartCardProps) -> Html {
    html! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow border border-gray-200 dark:border-gray-700 p-6">
            <h4 class="font-semibold mb-4">{&props.title}</h4>
            {for props.children.iter()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CountBarsProps {
    entries: Vec<CountEntry>,
    color: &'static str,
}

#[function_component]
fn CountBars(props: &CountBarsProps) -> Html {
    let max = props.entries.iter().map(|e| e.count).max().unwrap_or(0);
    if max == 0 {
        return html! {
            <p class="text-sm text-gray-500 dark:text-gray-400">{"No data."}</p>
        };
    }

    html! {
        <div class="space-y-2">
            { for props.entries.iter().map(|entry| {
                let pct = (entry.count as f64 / max as f64 * 100.0).max(2.0);
                html! {
                    <div>
                        <div class="flex justify-between text-sm mb-1">
                            <span class="truncate">{&entry.name}</span>
                            <span class="text-gray-500 dark:text-gray-400">{entry.count}</span>
                        </div>
                        <div class="h-2 bg-gray-200 dark:bg-gray-700 rounded-full">
                            <div
                                class={classes!("h-2", "rounded-full", props.color)}
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
struct RatingBarsProps {
    entries: Vec<RatingCount>,
}

#[function_component]
fn RatingBars(props: &RatingBarsProps) -> Html {
    let max = props.entries.iter().map(|e| e.count).max().unwrap_or(0);
    if max == 0 {
        return html! {
            <p class="text-sm text-gray-500 dark:text-gray-400">{"No data."}</p>
        };
    }

    html! {
        <div class="flex items-end space-x-1 h-40">
            { for props.entries.iter().map(|entry| {
                let pct = (entry.count as f64 / max as f64 * 100.0).max(4.0);
                html! {
                    <div
                        class="flex-1 flex flex-col items-center justify-end h-full"
                        title={format!("{}: {} solved", entry.rating, entry.count)}
                    >
                        <div
                            class="w-full bg-amber-500 rounded-t"
                            style={format!("height: {pct:.0}%")}
                        ></div>
                        <span class="text-[10px] text-gray-500 dark:text-gray-400 mt-1">
                            {entry.rating}
                        </span>
                    </div>
                }
            }) }
        </div>
    }
}
