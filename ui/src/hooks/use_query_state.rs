use providers::QueryState;
use yew::prelude::*;
use yew_router::prelude::*;

/// Derives the committed query state from the current location, re-running
/// on every navigation. Parsing is a pure function of the search string, so
/// an unchanged location produces an equal `QueryState` and downstream
/// dependency-tracked fetch effects stay quiet.
///
/// `term_param` is the query-string key carrying the search term (`q` on
/// the search pages, `username`/`handle` on the profile pages).
#[hook]
pub fn use_query_state(term_param: &'static str) -> QueryState {
    let location = use_location();
    let search = location
        .as_ref()
        .map(|location| location.query_str().to_string())
        .unwrap_or_default();
    QueryState::from_search_keyed(&search, term_param)
}
