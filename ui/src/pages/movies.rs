use providers::omdb::{DEFAULT_QUERY, MovieDetail, OmdbClient, PAGE_SIZE, SearchHit};
use providers::pager::ResultSet;
use yew::prelude::*;

use crate::Route;
use crate::components::{
    EmptySubmit, ErrorAlert, LoadingIndicator, PaginationControls, SearchBox,
};
use crate::hooks::{use_query_state, use_search_navigate, use_title, use_tracked_fetch};
use crate::keys;

#[function_component]
pub fn MoviesPage() -> Html {
    use_title("Movies");
    let query = use_query_state("q");
    let navigate = use_search_navigate();

    let (term, is_default) = query.term_or_default(DEFAULT_QUERY);
    let term = term.to_string();

    // The list fetch goes quiet while a detail id is committed, so closing
    // the detail view re-runs it against the same committed query.
    let list = use_tracked_fetch(
        (term.clone(), query.page),
        query.id.is_none(),
        |(term, page): (String, u32)| async move {
            OmdbClient::new(keys().omdb)?.search(&term, page).await
        },
    );

    let detail = use_tracked_fetch(
        query.id.clone(),
        query.id.is_some(),
        |id: Option<String>| async move {
            OmdbClient::new(keys().omdb)?.detail(id.as_deref().unwrap_or_default()).await
        },
    );

    let on_commit = {
        let navigate = navigate.clone();
        Callback::from(move |term: Option<String>| {
            let params = match term {
                Some(term) => vec![("q", term)],
                None => vec![],
            };
            navigate.emit((Route::Movies, params));
        })
    };

    let on_page_change = {
        let navigate = navigate.clone();
        let q = query.q.clone();
        Callback::from(move |page: u32| {
            let mut params = vec![];
            if let Some(q) = &q {
                params.push(("q", q.clone()));
            }
            params.push(("page", page.to_string()));
            navigate.emit((Route::Movies, params));
        })
    };

    let on_select = {
        let navigate = navigate.clone();
        let query = query.clone();
        Callback::from(move |id: String| {
            let mut params = vec![];
            if let Some(q) = &query.q {
                params.push(("q", q.clone()));
            }
            if query.page > 1 {
                params.push(("page", query.page.to_string()));
            }
            params.push(("id", id));
            navigate.emit((Route::Movies, params));
        })
    };

    let on_back = {
        let navigate = navigate.clone();
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            let mut params = vec![];
            if let Some(q) = &query.q {
                params.push(("q", q.clone()));
            }
            if query.page > 1 {
                params.push(("page", query.page.to_string()));
            }
            navigate.emit((Route::Movies, params));
        })
    };

    if query.id.is_some() {
        return html! {
            <div>
                <button
                    onclick={on_back}
                    class="mb-4 text-sm text-blue-600 dark:text-blue-400 hover:underline"
                >
                    {"\u{2190} Back to results"}
                </button>
                if let Some(message) = detail.status.error() {
                    <ErrorAlert message={message.to_string()} />
                } else if detail.status.is_loading() {
                    <LoadingIndicator label="Loading movie..." />
                } else if let Some(movie) = &detail.data {
                    <DetailView movie={movie.clone()} />
                }
            </div>
        };
    }

    let total_pages = list.data.as_ref().map(|set| set.total_pages(PAGE_SIZE)).unwrap_or(0);

    html! {
        <div>
            <h2 class="text-2xl font-bold mb-4">{"Movies"}</h2>

            <SearchBox
                placeholder="Search movies..."
                committed={query.q.clone()}
                {on_commit}
                empty_submit={EmptySubmit::ResetToDefault}
                busy={list.status.is_loading()}
            />

            if is_default {
                <p class="text-center text-sm text-gray-500 dark:text-gray-400 mb-4">
                    {format!("Showing sample results for \"{term}\"")}
                </p>
            }

            if let Some(message) = list.status.error() {
                <ErrorAlert message={message.to_string()} />
            } else if list.status.is_loading() {
                <LoadingIndicator label="Loading movies..." />
            } else if let Some(results) = &list.data {
                <ResultGrid results={results.clone()} {on_select} />
            }

            <PaginationControls
                current_page={query.page}
                {total_pages}
                {on_page_change}
                busy={list.status.is_loading()}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ResultGridProps {
    results: ResultSet<SearchHit>,
    on_select: Callback<String>,
}

#[function_component]
fn ResultGrid(props: &ResultGridProps) -> Html {
    if props.results.items.is_empty() {
        return html! {
            <p class="text-center text-gray-500 dark:text-gray-400 py-12">
                {"No movies found."}
            </p>
        };
    }

    html! {
        <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-5 gap-4">
            { for props.results.items.iter().map(|hit| {
                let on_select = props.on_select.clone();
                let id = hit.imdb_id.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_select.emit(id.clone()));
                html! {
                    <button
                        {onclick}
                        class="text-left bg-white dark:bg-gray-800 rounded-lg shadow border border-gray-200 dark:border-gray-700 overflow-hidden hover:shadow-md transition-shadow duration-200"
                    >
                        if let Some(poster) = hit.poster_url() {
                            <img
                                src={poster.to_string()}
                                alt={format!("{} poster", hit.title)}
                                class="w-full aspect-[2/3] object-cover"
                            />
                        } else {
                            <div class="w-full aspect-[2/3] bg-gray-200 dark:bg-gray-700 flex items-center justify-center text-4xl">
                                {"\u{1F3AC}"}
                            </div>
                        }
                        <div class="p-3">
                            <h3 class="font-medium text-sm truncate">{&hit.title}</h3>
                            <p class="text-xs text-gray-500 dark:text-gray-400">{&hit.year}</p>
                        </div>
                    </button>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DetailProps {
    movie: MovieDetail,
}

#[function_component]
fn DetailView(props: &DetailProps) -> Html {
    let movie = &props.movie;

    html! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow border border-gray-200 dark:border-gray-700 p-6 flex flex-col md:flex-row gap-6">
            if let Some(poster) = movie.field(&movie.poster) {
                <img
                    src={poster.to_string()}
                    alt={format!("{} poster", movie.title)}
                    class="w-full md:w-64 rounded-lg object-cover self-start"
                />
            }
            <div class="flex-1">
                <h2 class="text-2xl font-bold">{&movie.title}</h2>
                <p class="text-gray-500 dark:text-gray-400 text-sm mt-1">
                    {[&movie.year, &movie.rated, &movie.runtime]
                        .iter()
                        .filter_map(|value| movie.field(value.as_str()))
                        .collect::<Vec<_>>()
                        .join(" \u{b7} ")}
                </p>
                if let Some(genre) = movie.field(&movie.genre) {
                    <p class="mt-2 text-sm">
                        <span class="font-medium">{"Genre: "}</span>{genre}
                    </p>
                }
                if let Some(director) = movie.field(&movie.director) {
                    <p class="text-sm">
                        <span class="font-medium">{"Director: "}</span>{director}
                    </p>
                }
                if let Some(actors) = movie.field(&movie.actors) {
                    <p class="text-sm">
                        <span class="font-medium">{"Cast: "}</span>{actors}
                    </p>
                }
                if let Some(plot) = movie.field(&movie.plot) {
                    <p class="mt-4 text-gray-700 dark:text-gray-300">{plot}</p>
                }
                <div class="flex flex-wrap gap-4 mt-4">
                    { for movie.all_ratings().iter().map(|rating| html! {
                        <div class="bg-gray-100 dark:bg-gray-700 rounded-lg px-4 py-2">
                            <p class="text-xs text-gray-500 dark:text-gray-400">
                                {&rating.source}
                            </p>
                            <p class="font-semibold">{&rating.value}</p>
                        </div>
                    }) }
                </div>
                if let Some(awards) = movie.field(&movie.awards) {
                    <p class="mt-4 text-sm text-amber-600 dark:text-amber-400">
                        {"\u{1F3C6} "}{awards}
                    </p>
                }
            </div>
        </div>
    }
}
