use yew::prelude::*;

use crate::Route;
use crate::components::{AppGrid, EmptySubmit, SearchBox, WeatherCard};
use crate::hooks::{use_search_navigate, use_title};

/// The dashboard landing page: weather up top, a web-search box that hands
/// off to the search page, and the launcher grid.
#[function_component]
pub fn HomePage() -> Html {
    use_title("Dashboard");
    let navigate = use_search_navigate();

    let on_commit = {
        let navigate = navigate.clone();
        Callback::from(move |term: Option<String>| {
            if let Some(term) = term {
                navigate.emit((Route::Search, vec![("q", term)]));
            }
        })
    };

    html! {
        <div class="space-y-8">
            <WeatherCard />

            <SearchBox
                placeholder="Search the web..."
                committed={None::<String>}
                {on_commit}
                empty_submit={EmptySubmit::Ignore}
            />

            <AppGrid />
        </div>
    }
}
