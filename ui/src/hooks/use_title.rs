use yew::prelude::*;

const APP_NAME: &str = "Hotel Admin";

/// Sets the document title to "{title} · Hotel Admin". No cleanup on
/// unmount; the next page sets its own.
#[hook]
pub fn use_title(title: &str) {
    let title = format!("{title} · {APP_NAME}");
    use_effect_with(title, |title| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    });
}
