use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use gloo_timers::future::sleep;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const NAV_LINKS: &[(Route, &str)] = &[
    (Route::Home, "Home"),
    (Route::Github, "GitHub"),
    (Route::Codeforces, "Codeforces"),
    (Route::Movies, "Movies"),
    (Route::News, "News"),
    (Route::Books, "Books"),
];

fn clock_text() -> String {
    jiff::Zoned::now().strftime("%H:%M:%S").to_string()
}

#[function_component]
pub fn Header() -> Html {
    let clock = use_state(clock_text);

    // Tick the wall clock once a second for as long as the header is
    // mounted.
    {
        let clock = clock.clone();
        use_effect_with((), move |_| {
            let cancelled = Rc::new(AtomicBool::new(false));
            let cancelled_clone = cancelled.clone();

            spawn_local(async move {
                while !cancelled_clone.load(Ordering::Relaxed) {
                    sleep(Duration::from_secs(1)).await;
                    if cancelled_clone.load(Ordering::Relaxed) {
                        break;
                    }
                    clock.set(clock_text());
                }
            });

            move || cancelled.store(true, Ordering::Relaxed)
        });
    }

    html! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center space-x-8">
                        <h1 class="text-xl font-semibold text-gray-900 dark:text-white">
                            {"Dashboard"}
                        </h1>
                        <nav class="hidden md:flex space-x-4">
                            { for NAV_LINKS.iter().map(|(route, label)| html! {
                                <Link<Route>
                                    to={route.clone()}
                                    classes="text-sm text-gray-600 dark:text-gray-300 hover:text-gray-900 dark:hover:text-white transition-colors"
                                >
                                    {*label}
                                </Link<Route>>
                            }) }
                        </nav>
                    </div>
                    <span class="font-mono text-sm text-gray-500 dark:text-gray-400 tabular-nums">
                        {(*clock).clone()}
                    </span>
                </div>
            </div>
        </header>
    }
}
