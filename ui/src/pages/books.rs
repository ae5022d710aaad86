use providers::books::{BooksClient, DEFAULT_QUERY, PAGE_SIZE, Volume};
use providers::pager::ResultSet;
use yew::prelude::*;

use crate::Route;
use crate::components::{
    EmptySubmit, ErrorAlert, LoadingIndicator, PaginationControls, SearchBox,
};
use crate::hooks::{use_query_state, use_search_navigate, use_title, use_tracked_fetch};
use crate::keys;

#[function_component]
pub fn BooksPage() -> Html {
    use_title("Books");
    let query = use_query_state("q");
    let navigate = use_search_navigate();

    let (term, is_default) = query.term_or_default(DEFAULT_QUERY);
    let term = term.to_string();

    let fetch = use_tracked_fetch(
        (term.clone(), query.page),
        true,
        |(term, page): (String, u32)| async move {
            BooksClient::new(keys().books).search(&term, page).await
        },
    );

    let on_commit = {
        let navigate = navigate.clone();
        Callback::from(move |term: Option<String>| {
            let params = match term {
                Some(term) => vec![("q", term)],
                None => vec![],
            };
            navigate.emit((Route::Books, params));
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
            navigate.emit((Route::Books, params));
        })
    };

    let total_pages = fetch.data.as_ref().map(|set| set.total_pages(PAGE_SIZE)).unwrap_or(0);

    html! {
        <div>
            <h2 class="text-2xl font-bold mb-4">{"Books"}</h2>

            <SearchBox
                placeholder="Search books..."
                committed={query.q.clone()}
                {on_commit}
                empty_submit={EmptySubmit::ResetToDefault}
                busy={fetch.status.is_loading()}
            />

            if is_default {
                <p class="text-center text-sm text-gray-500 dark:text-gray-400 mb-4">
                    {format!("Showing results for \"{term}\"")}
                </p>
            }

            if let Some(message) = fetch.status.error() {
                <ErrorAlert message={message.to_string()} />
            } else if fetch.status.is_loading() {
                <LoadingIndicator label="Loading books..." />
            } else if let Some(results) = &fetch.data {
                <VolumeGrid results={results.clone()} />
            }

            <PaginationControls
                current_page={query.page}
                {total_pages}
                {on_page_change}
                busy={fetch.status.is_loading()}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct VolumeGridProps {
    results: ResultSet<Volume>,
}

#[function_component]
fn VolumeGrid(props: &VolumeGridProps) -> Html {
    if props.results.items.is_empty() {
        return html! {
            <p class="text-center text-gray-500 dark:text-gray-400 py-12">
                {"No books found."}
            </p>
        };
    }

    html! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
            { for props.results.items.iter().filter_map(|volume| {
                // decode() already drops entries without volumeInfo; the
                // filter_map keeps the render total.
                let info = volume.info.as_ref()?;
                let title = info.title.clone().unwrap_or_else(|| "Untitled".to_string());
                Some(html! {
                    <a
                        href={info.info_link.clone().unwrap_or_default()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex bg-white dark:bg-gray-800 rounded-lg shadow border border-gray-200 dark:border-gray-700 overflow-hidden hover:shadow-md transition-shadow duration-200"
                    >
                        if let Some(thumbnail) = info.thumbnail_url() {
                            <img
                                src={thumbnail.to_string()}
                                alt={format!("{title} cover")}
                                class="w-24 object-cover"
                            />
                        } else {
                            <div class="w-24 bg-gray-200 dark:bg-gray-700 flex items-center justify-center text-3xl">
                                {"\u{1F4D6}"}
                            </div>
                        }
                        <div class="p-4 flex-1">
                            <h3 class="font-medium line-clamp-2">{title.clone()}</h3>
                            <p class="text-sm text-gray-500 dark:text-gray-400 mt-1">
                                {info.author_line()}
                            </p>
                            if let Some(description) = &info.description {
                                <p class="text-sm text-gray-600 dark:text-gray-300 mt-2 line-clamp-3">
                                    {description}
                                </p>
                            }
                        </div>
                    </a>
                })
            }) }
        </div>
    }
}
