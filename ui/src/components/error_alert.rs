use providers::error_hint;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Upstream or client error message, shown verbatim.
    pub message: AttrValue,
}

/// Red alert box for failed fetches. The upstream message is never
/// reworded; a recovery hint is appended on a separate line when the
/// message matches a known failure shape.
#[function_component]
pub fn ErrorAlert(props: &Props) -> Html {
    let hint = error_hint(&props.message);

    html! {
        <div
            class="bg-red-50 dark:bg-red-900/20 border border-red-200 \
                   dark:border-red-800 rounded-lg p-4 my-4"
            role="alert"
        >
            <p class="text-red-700 dark:text-red-300 font-medium">
                {&props.message}
            </p>
            if let Some(hint) = hint {
                <p class="text-red-600 dark:text-red-400 text-sm mt-1">
                    {hint}
                </p>
            }
        </div>
    }
}
