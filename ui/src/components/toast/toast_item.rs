use crate::contexts::toast::{Toast, ToastType, use_toast};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastItemProps {
    pub toast: Toast,
}

struct ToastStyle {
    colors: &'static str,
    icon: &'static str,
    /// Errors and warnings interrupt screen readers; the rest wait.
    role: &'static str,
}

fn style(toast_type: ToastType) -> ToastStyle {
    match toast_type {
        ToastType::Error => ToastStyle {
            colors: "bg-red-50 dark:bg-red-900 border-red-200 dark:border-red-800 \
                     text-red-700 dark:text-red-400",
            icon: "✕",
            role: "alert",
        },
        ToastType::Warning => ToastStyle {
            colors: "bg-amber-50 dark:bg-amber-900 border-amber-200 dark:border-amber-800 \
                     text-amber-800 dark:text-amber-300",
            icon: "!",
            role: "alert",
        },
        ToastType::Success => ToastStyle {
            colors: "bg-green-50 dark:bg-green-900 border-green-200 dark:border-green-800 \
                     text-green-700 dark:text-green-400",
            icon: "✓",
            role: "status",
        },
        ToastType::Info => ToastStyle {
            colors: "bg-gray-50 dark:bg-gray-800 border-gray-200 dark:border-gray-700 \
                     text-gray-700 dark:text-gray-300",
            icon: "ℹ",
            role: "status",
        },
    }
}

#[function_component]
pub fn ToastItem(props: &ToastItemProps) -> Html {
    let toast_handle = use_toast();
    let toast = &props.toast;
    let style = style(toast.toast_type);

    let on_close = {
        let toast_id = toast.id;
        Callback::from(move |_: MouseEvent| toast_handle.remove(toast_id))
    };

    html! {
        <div
            role={style.role}
            class={classes!("relative", "p-4", "rounded-lg", "border", "shadow-lg", style.colors)}
        >
            <div class="flex items-start space-x-3">
                <span class="flex-shrink-0 text-sm font-medium">{style.icon}</span>
                <p class="flex-1 min-w-0 text-sm font-medium leading-5">
                    {&toast.message}
                </p>
                <button
                    onclick={on_close}
                    class="flex-shrink-0 text-gray-400 hover:text-gray-600 dark:hover:text-gray-200"
                    title="Dismiss"
                >
                    <span class="text-lg leading-none">{"×"}</span>
                </button>
            </div>
        </div>
    }
}
