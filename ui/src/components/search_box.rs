use providers::query::submit_commit;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub use providers::query::EmptySubmit;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub placeholder: AttrValue,
    /// The committed term currently driving fetches. The input buffer
    /// mirrors this only when it changes underneath the user (back/forward
    /// navigation); typing never gets overwritten otherwise.
    pub committed: Option<String>,
    /// Emitted on a commit. `Some(term)` for a new search, `None` when an
    /// empty submit resets to the default view.
    pub on_commit: Callback<Option<String>>,
    pub empty_submit: EmptySubmit,
    /// Disables the submit button while a fetch is in flight.
    #[prop_or(false)]
    pub busy: bool,
}

/// The input buffer half of every search page: holds the literal text in
/// the box, decoupled from the committed query, and turns a submit into a
/// commit only when it would change anything.
#[function_component]
pub fn SearchBox(props: &Props) -> Html {
    let buffer = use_state(String::new);

    // Mirror the committed term into the buffer when the target changes out
    // from under the user. Typing only ever changes the buffer, so this
    // effect can't clobber an in-progress edit.
    {
        let buffer = buffer.clone();
        use_effect_with(props.committed.clone(), move |committed| {
            buffer.set(committed.clone().unwrap_or_default());
        });
    }

    let oninput = {
        let buffer = buffer.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            buffer.set(input.value());
        })
    };

    let onsubmit = {
        let buffer = buffer.clone();
        let committed = props.committed.clone();
        let on_commit = props.on_commit.clone();
        let empty_submit = props.empty_submit;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if let Some(commit) = submit_commit(&buffer, committed.as_deref(), empty_submit) {
                on_commit.emit(commit);
            }
        })
    };

    let trimmed = buffer.trim();
    let submit_disabled =
        props.busy || trimmed.is_empty() || Some(trimmed) == props.committed.as_deref();

    html! {
        <form {onsubmit} class="relative w-full max-w-lg mx-auto my-4">
            <input
                type="text"
                value={(*buffer).clone()}
                {oninput}
                placeholder={props.placeholder.clone()}
                class="w-full py-3 pl-12 pr-4 text-gray-900 dark:text-white bg-white \
                       dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
                       rounded-full shadow-sm focus:outline-none focus:ring-2 \
                       focus:ring-indigo-500 focus:border-transparent"
            />
            <button
                type="submit"
                disabled={submit_disabled}
                title="Search"
                class="absolute left-0 top-0 bottom-0 flex items-center justify-center pl-4 \
                       text-gray-400 hover:text-indigo-500 focus:outline-none \
                       disabled:opacity-50"
            >
                {"🔍"}
            </button>
        </form>
    }
}
