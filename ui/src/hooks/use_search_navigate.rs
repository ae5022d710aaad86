use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Returns a callback that navigates to a route with the given query pairs
/// and scrolls back to the top of the view. Committing a search and paging
/// through results both go through here; the URL is the only write path for
/// committed search state.
#[hook]
pub fn use_search_navigate() -> Callback<(Route, Vec<(&'static str, String)>)> {
    let navigator = use_navigator().unwrap();
    Callback::from(move |(route, query): (Route, Vec<(&'static str, String)>)| {
        if let Err(err) = navigator.push_with_query(&route, &query) {
            tracing::error!(%err, "failed to encode navigation query");
            return;
        }
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    })
}
