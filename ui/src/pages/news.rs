use providers::news::{Article, NewsClient, PAGE_SIZE};
use providers::pager::ResultSet;
use yew::prelude::*;

use crate::Route;
use crate::components::{
    EmptySubmit, ErrorAlert, LoadingIndicator, PaginationControls, SearchBox,
};
use crate::hooks::{use_query_state, use_search_navigate, use_title, use_tracked_fetch};
use crate::keys;

#[function_component]
pub fn NewsPage() -> Html {
    use_title("News");
    let query = use_query_state("q");
    let navigate = use_search_navigate();

    // No committed term means top headlines, not an idle page; the empty
    // string is what the client keys that behavior on.
    let term = query.q.clone().unwrap_or_default();

    let fetch = use_tracked_fetch(
        (term.clone(), query.page),
        true,
        |(term, page): (String, u32)| async move {
            NewsClient::new(keys().news)?.search(&term, page).await
        },
    );

    let on_commit = {
        let navigate = navigate.clone();
        Callback::from(move |term: Option<String>| {
            let params = match term {
                Some(term) => vec![("q", term)],
                None => vec![],
            };
            navigate.emit((Route::News, params));
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
            navigate.emit((Route::News, params));
        })
    };

    let total_pages = fetch.data.as_ref().map(|set| set.total_pages(PAGE_SIZE)).unwrap_or(0);

    html! {
        <div>
            <h2 class="text-2xl font-bold mb-4">{"News"}</h2>

            <SearchBox
                placeholder="Search the news..."
                committed={query.q.clone()}
                {on_commit}
                empty_submit={EmptySubmit::ResetToDefault}
                busy={fetch.status.is_loading()}
            />

            if query.q.is_none() {
                <p class="text-center text-sm text-gray-500 dark:text-gray-400 mb-4">
                    {"Top headlines"}
                </p>
            }

            if let Some(message) = fetch.status.error() {
                <ErrorAlert message={message.to_string()} />
            } else if fetch.status.is_loading() {
                <LoadingIndicator label="Loading articles..." />
            } else if let Some(results) = &fetch.data {
                <ArticleGrid results={results.clone()} />
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
struct ArticleGridProps {
    results: ResultSet<Article>,
}

#[function_component]
fn ArticleGrid(props: &ArticleGridProps) -> Html {
    if props.results.items.is_empty() {
        return html! {
            <p class="text-center text-gray-500 dark:text-gray-400 py-12">
                {"No articles found."}
            </p>
        };
    }

    html! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
            { for props.results.items.iter().map(|article| html! {
                <a
                    href={article.url.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="block bg-white dark:bg-gray-800 rounded-lg shadow border border-gray-200 dark:border-gray-700 overflow-hidden hover:shadow-md transition-shadow duration-200"
                >
                    if let Some(image) = &article.url_to_image {
                        <img
                            src={image.clone()}
                            alt=""
                            class="w-full h-40 object-cover"
                        />
                    }
                    <div class="p-4">
                        <h3 class="font-medium line-clamp-2">
                            {article.title.clone().unwrap_or_else(|| "Untitled".to_string())}
                        </h3>
                        if let Some(description) = &article.description {
                            <p class="text-sm text-gray-600 dark:text-gray-300 mt-2 line-clamp-3">
                                {description}
                            </p>
                        }
                        <p class="text-xs text-gray-500 dark:text-gray-400 mt-3">
                            {article.source.name.clone().unwrap_or_default()}
                        </p>
                    </div>
                </a>
            }) }
        </div>
    }
}
