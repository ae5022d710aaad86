use providers::websearch::{SearchItem, WebSearchClient};
use yew::prelude::*;

use crate::Route;
use crate::components::{EmptySubmit, ErrorAlert, LoadingIndicator, SearchBox};
use crate::hooks::{use_query_state, use_search_navigate, use_title, use_tracked_fetch};
use crate::keys;

#[function_component]
pub fn SearchPage() -> Html {
    use_title("Web Search");
    let query = use_query_state("q");
    let navigate = use_search_navigate();

    // This page has no default sample query; without a committed term it
    // just shows the prompt.
    let term = query.q.clone().unwrap_or_default();

    let fetch = use_tracked_fetch(term.clone(), !term.is_empty(), |term: String| async move {
        let keys = keys();
        WebSearchClient::new(keys.google, keys.google_cx)?.search(&term).await
    });

    let on_commit = {
        let navigate = navigate.clone();
        Callback::from(move |term: Option<String>| {
            if let Some(term) = term {
                navigate.emit((Route::Search, vec![("q", term)]));
            }
        })
    };

    html! {
        <div>
            <h2 class="text-2xl font-bold mb-4">{"Web Search"}</h2>

            <SearchBox
                placeholder="Search the web..."
                committed={query.q.clone()}
                {on_commit}
                empty_submit={EmptySubmit::Ignore}
                busy={fetch.status.is_loading()}
            />

            if term.is_empty() {
                <p class="text-center text-gray-500 dark:text-gray-400 py-12">
                    {"Type a query above to search the web."}
                </p>
            } else if let Some(message) = fetch.status.error() {
                <ErrorAlert message={message.to_string()} />
            } else if fetch.status.is_loading() {
                <LoadingIndicator label="Searching..." />
            } else if let Some(items) = &fetch.data {
                <ResultList items={items.clone()} />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ResultListProps {
    items: Vec<SearchItem>,
}

#[function_component]
fn ResultList(props: &ResultListProps) -> Html {
    if props.items.is_empty() {
        return html! {
            <p class="text-center text-gray-500 dark:text-gray-400 py-12">
                {"No results found."}
            </p>
        };
    }

    html! {
        <div class="space-y-6 max-w-2xl mx-auto">
            { for props.items.iter().map(|item| html! {
                <div>
                    <p class="text-sm text-green-700 dark:text-green-400 truncate">
                        {item.display_url()}
                    </p>
                    <a
                        href={item.link.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-lg text-blue-700 dark:text-blue-400 hover:underline"
                    >
                        {item.title.clone().unwrap_or_else(|| item.link.clone())}
                    </a>
                    if let Some(snippet) = &item.snippet {
                        <p class="text-sm text-gray-600 dark:text-gray-300 mt-1">
                            {snippet}
                        </p>
                    }
                </div>
            }) }
        </div>
    }
}
