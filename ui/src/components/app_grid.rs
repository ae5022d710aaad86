use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

struct Tile {
    route: Route,
    title: &'static str,
    blurb: &'static str,
    emoji: &'static str,
}

const TILES: &[Tile] = &[
    Tile {
        route: Route::Github,
        title: "GitHub",
        blurb: "Profile, languages, and top starred repos",
        emoji: "\u{1F419}",
    },
    Tile {
        route: Route::Codeforces,
        title: "Codeforces",
        blurb: "Rating, verdicts, and solved-problem charts",
        emoji: "\u{1F4C8}",
    },
    Tile {
        route: Route::Movies,
        title: "Movies",
        blurb: "Search films and pull full details",
        emoji: "\u{1F3AC}",
    },
    Tile {
        route: Route::News,
        title: "News",
        blurb: "Top headlines or search everything",
        emoji: "\u{1F4F0}",
    },
    Tile {
        route: Route::Books,
        title: "Books",
        blurb: "Browse volumes with covers and authors",
        emoji: "\u{1F4DA}",
    },
];

/// The home-page launcher grid. Each tile is a plain route link; the
/// destination page owns its own data fetching.
#[function_component]
pub fn AppGrid() -> Html {
    html! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
            { for TILES.iter().map(|tile| html! {
                <Link<Route>
                    to={tile.route.clone()}
                    classes="block bg-white dark:bg-gray-800 rounded-lg \
                             shadow hover:shadow-md border \
                             border-gray-200 dark:border-gray-700 \
                             p-5 transition-shadow duration-200"
                >
                    <div class="text-3xl mb-2">{tile.emoji}</div>
                    <h3
                        class="text-lg font-semibold text-gray-900 \
                               dark:text-gray-100"
                    >
                        {tile.title}
                    </h3>
                    <p
                        class="text-sm text-gray-500 dark:text-gray-400 \
                               mt-1"
                    >
                        {tile.blurb}
                    </p>
                </Link<Route>>
            }) }
        </div>
    }
}
