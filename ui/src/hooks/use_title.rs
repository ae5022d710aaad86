use yew::prelude::*;

/// Sets the document title. No cleanup on unmount; every page sets its own
/// title when it mounts.
#[hook]
pub fn use_title(title: &str) {
    let title = title.to_string();
    use_effect_with(title, |title| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    });
}
