use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::state::State;

const CORRECT_PIN: &str = "1234";
const UNLOCKED_KEY: &str = "dashboard_unlocked";

fn stored_unlock() -> bool {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.session_storage() {
            if let Ok(Some(value)) = storage.get_item(UNLOCKED_KEY) {
                return value == "true";
            }
        }
    }
    false
}

fn persist_unlock() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.session_storage() {
            let _ = storage.set_item(UNLOCKED_KEY, "true");
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

/// Gates the whole app behind a four-digit PIN. The unlock flag lives
/// in session storage, so a reload within the tab stays unlocked but a
/// new tab asks again.
#[function_component]
pub fn LockGate(props: &Props) -> Html {
    let (state, dispatch) = use_store::<State>();

    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            if stored_unlock() {
                dispatch.reduce_mut(|s| s.unlocked = true);
            }
        });
    }

    if state.unlocked {
        return html! { <>{props.children.clone()}</> };
    }

    html! { <PinScreen /> }
}

#[function_component]
fn PinScreen() -> Html {
    let (_state, dispatch) = use_store::<State>();
    let pin = use_state(String::new);
    let error = use_state(|| false);
    let input_ref = use_node_ref();

    let oninput = {
        let pin = pin.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let digits: String = input
                .value()
                .chars()
                .filter(|c| c.is_ascii_digit())
                .take(4)
                .collect();
            input.set_value(&digits);
            error.set(false);
            pin.set(digits);
        })
    };

    let onsubmit = {
        let pin = pin.clone();
        let error = error.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *pin == CORRECT_PIN {
                persist_unlock();
                dispatch.reduce_mut(|s| s.unlocked = true);
            } else {
                // Wrong guess: show the error and clear for another try.
                error.set(true);
                pin.set(String::new());
                if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                    input.set_value("");
                    let _ = input.focus();
                }
            }
        })
    };

    html! {
        <div
            class="min-h-screen flex items-center justify-center \
                   bg-gray-100 dark:bg-gray-900"
        >
            <form
                {onsubmit}
                class="bg-white dark:bg-gray-800 rounded-xl shadow-lg \
                       p-8 w-full max-w-xs text-center"
            >
                <h1
                    class="text-xl font-semibold text-gray-900 \
                           dark:text-gray-100 mb-2"
                >
                    {"Enter PIN"}
                </h1>
                <p class="text-sm text-gray-500 dark:text-gray-400 mb-6">
                    {"This dashboard is locked."}
                </p>
                <input
                    ref={input_ref}
                    type="password"
                    inputmode="numeric"
                    maxlength="4"
                    autofocus=true
                    {oninput}
                    class="w-full text-center text-2xl tracking-[0.5em] \
                           border border-gray-300 dark:border-gray-600 \
                           rounded-md py-2 bg-white dark:bg-gray-700 \
                           text-gray-900 dark:text-gray-100 \
                           focus:outline-none focus:ring-2 focus:ring-blue-500"
                />
                if *error {
                    <p class="text-red-600 dark:text-red-400 text-sm mt-3">
                        {"Incorrect PIN. Try again."}
                    </p>
                }
                <button
                    type="submit"
                    disabled={pin.len() < 4}
                    class="mt-6 w-full py-2 rounded-md bg-blue-600 text-white \
                           font-medium hover:bg-blue-700 disabled:opacity-50 \
                           disabled:cursor-not-allowed transition-colors \
                           duration-200"
                >
                    {"Unlock"}
                </button>
            </form>
        </div>
    }
}
