use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmationModalProps {
    /// Modal title (e.g., "Delete hotel")
    pub title: AttrValue,
    /// What will be lost
    pub message: AttrValue,
    /// Confirm button text (e.g., "Delete")
    pub confirm_text: AttrValue,
    /// When set, the user must type this value before confirming.
    #[prop_or_default]
    pub confirmation_value: Option<AttrValue>,
    pub on_confirm: Callback<()>,
    /// Called when user cancels or clicks backdrop
    pub on_close: Callback<()>,
    /// Whether the confirmed operation is in progress
    #[prop_or_default]
    pub is_loading: bool,
}

#[function_component]
pub fn ConfirmationModal(props: &ConfirmationModalProps) -> Html {
    let confirmation_input = use_state(String::new);
    let backdrop_ref = use_node_ref();

    let can_confirm = match &props.confirmation_value {
        Some(expected) => confirmation_input.trim() == expected.as_str(),
        None => true,
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(backdrop_element) =
                backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>()
                    == Some(&backdrop_element)
            {
                on_close.emit(());
            }
        })
    };

    let on_input = {
        let confirmation_input = confirmation_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            confirmation_input.set(input.value());
        })
    };

    html! {
        <div
            ref={backdrop_ref}
            onclick={on_backdrop_click}
            class="fixed inset-0 bg-gray-900 bg-opacity-50 z-50 flex items-center justify-center p-4"
        >
            <div
                role="dialog"
                aria-modal="true"
                class="bg-white dark:bg-gray-800 rounded-lg shadow-xl max-w-md w-full p-6"
            >
                <h3 class="text-lg font-semibold text-gray-900 dark:text-gray-100 mb-4">
                    {&props.title}
                </h3>

                <div class="space-y-4">
                    <p class="text-sm text-gray-600 dark:text-gray-400">
                        {"This action "}
                        <span class="font-semibold text-red-600 dark:text-red-400">
                            {"cannot be undone"}
                        </span>
                        {". "}{&props.message}
                    </p>

                    if let Some(expected) = &props.confirmation_value {
                        <>
                        <p class="text-sm text-gray-600 dark:text-gray-400">
                            {"Type "}
                            <span class="font-mono font-semibold text-gray-900 dark:text-gray-100">
                                {expected}
                            </span>
                            {" to confirm."}
                        </p>
                        <input
                            type="text"
                            value={(*confirmation_input).clone()}
                            oninput={on_input}
                            disabled={props.is_loading}
                            class="w-full px-3 py-2 text-sm border border-gray-300 dark:border-gray-600
                                   rounded-md bg-white dark:bg-gray-700
                                   focus:outline-none focus:ring-2 focus:ring-red-500
                                   disabled:opacity-50"
                        />
                        </>
                    }
                </div>

                <div class="flex justify-end gap-3 mt-6">
                    <button
                        onclick={props.on_close.reform(|_: MouseEvent| ())}
                        disabled={props.is_loading}
                        class="px-4 py-2 text-sm font-medium text-gray-700 dark:text-gray-300
                               bg-white dark:bg-gray-700 border border-gray-300 dark:border-gray-600
                               rounded-md hover:bg-gray-50 dark:hover:bg-gray-600
                               disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        {"Cancel"}
                    </button>
                    <button
                        onclick={props.on_confirm.reform(|_: MouseEvent| ())}
                        disabled={!can_confirm || props.is_loading}
                        class="px-4 py-2 text-sm font-medium text-white
                               bg-red-600 hover:bg-red-700 rounded-md
                               disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        {if props.is_loading { "Deleting..." } else { props.confirm_text.as_str() }}
                    </button>
                </div>
            </div>
        </div>
    }
}
