use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_title;

#[function_component]
pub fn NotFoundPage() -> Html {
    use_title("Not Found");

    html! {
        <div class="text-center py-24">
            <h2 class="text-4xl font-bold mb-2">{"404"}</h2>
            <p class="text-gray-500 dark:text-gray-400 mb-6">
                {"That page doesn't exist."}
            </p>
            <Link<Route>
                to={Route::Home}
                classes="text-blue-600 dark:text-blue-400 hover:underline"
            >
                {"Back to the dashboard"}
            </Link<Route>>
        </div>
    }
}
