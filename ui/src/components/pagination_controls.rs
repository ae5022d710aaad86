use providers::pager::page_change_allowed;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Current 1-based page.
    pub current_page: u32,
    /// From the pager: `ceil(totalCount / pageSize)`.
    pub total_pages: u32,
    /// Emitted only for page changes the gate allows.
    pub on_page_change: Callback<u32>,
    /// Whether a list fetch is in flight (blocks all page changes).
    #[prop_or(false)]
    pub busy: bool,
}

#[function_component]
pub fn PaginationControls(props: &Props) -> Html {
    let Props { current_page, total_pages, busy, .. } = *props;

    if total_pages <= 1 {
        return html! {};
    }

    let go_to = |target: u32| {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| {
            // Gate here as well as visually: a rejected change never
            // navigates and never fetches.
            if page_change_allowed(target, current_page, total_pages, busy) {
                on_page_change.emit(target);
            }
        })
    };

    let prev_disabled = !page_change_allowed(
        current_page.saturating_sub(1),
        current_page,
        total_pages,
        busy,
    );
    let next_disabled =
        !page_change_allowed(current_page + 1, current_page, total_pages, busy);

    let button_class = |disabled: bool| {
        if disabled {
            "px-4 py-2 border border-gray-300 dark:border-gray-600 \
             rounded-md text-sm font-medium text-gray-400 \
             dark:text-gray-500 bg-gray-100 dark:bg-gray-800 \
             cursor-not-allowed"
        } else {
            "px-4 py-2 border border-gray-300 dark:border-gray-600 \
             rounded-md text-sm font-medium text-gray-700 \
             dark:text-gray-300 bg-white dark:bg-gray-700 \
             hover:bg-gray-50 dark:hover:bg-gray-600 \
             transition-colors duration-200"
        }
    };

    html! {
        <div class="flex items-center justify-center space-x-4 mt-8">
            <button
                onclick={go_to(current_page.saturating_sub(1))}
                disabled={prev_disabled}
                class={button_class(prev_disabled)}
            >
                {"Previous"}
            </button>

            <span class="text-sm text-gray-600 dark:text-gray-400">
                {format!("Page {current_page} of {total_pages}")}
            </span>

            <button
                onclick={go_to(current_page + 1)}
                disabled={next_disabled}
                class={button_class(next_disabled)}
            >
                {"Next"}
            </button>
        </div>
    }
}
