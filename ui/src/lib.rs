use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod hooks;
mod logs;
mod pages;
mod state;

pub use config::keys;
pub use state::{ProblemsetCache, State};

use components::LockGate;
use components::layout::MainLayout;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/github")]
    Github,
    #[at("/codeforces")]
    Codeforces,
    #[at("/movies")]
    Movies,
    #[at("/news")]
    News,
    #[at("/books")]
    Books,
    #[at("/search")]
    Search,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <LockGate>
                <MainLayout>
                    <Switch<Route> render={switch} />
                </MainLayout>
            </LockGate>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::HomePage /> },
        Route::Github => html! { <pages::GithubPage /> },
        Route::Codeforces => html! { <pages::CodeforcesPage /> },
        Route::Movies => html! { <pages::MoviesPage /> },
        Route::News => html! { <pages::NewsPage /> },
        Route::Books => html! { <pages::BooksPage /> },
        Route::Search => html! { <pages::SearchPage /> },
        Route::NotFound => html! { <pages::NotFoundPage /> },
    }
}
