use yew::prelude::*;

use crate::{
    Route,
    hooks::{use_push_route, use_title},
};

struct Stat {
    label: &'static str,
    value: &'static str,
    accent: &'static str,
}

/// Placeholder figures; the dashboard does not query the API.
const STATS: &[Stat] = &[
    Stat {
        label: "Hotels",
        value: "12",
        accent: "text-indigo-600 dark:text-indigo-400",
    },
    Stat {
        label: "Rooms",
        value: "240",
        accent: "text-green-600 dark:text-green-400",
    },
    Stat {
        label: "Bookings",
        value: "87",
        accent: "text-yellow-600 dark:text-yellow-400",
    },
    Stat {
        label: "Customers",
        value: "350",
        accent: "text-pink-600 dark:text-pink-400",
    },
    Stat {
        label: "Revenue",
        value: "$15,000",
        accent: "text-teal-600 dark:text-teal-400",
    },
    Stat {
        label: "Availability",
        value: "76%",
        accent: "text-red-600 dark:text-red-400",
    },
];

#[function_component]
pub fn DashboardPage() -> Html {
    use_title("Dashboard");
    let push_route = use_push_route();

    html! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold text-gray-900 dark:text-gray-100">
                    {"Dashboard"}
                </h1>
                <button
                    onclick={push_route.reform(|_: MouseEvent| Route::Hotels)}
                    class="px-4 py-2 rounded-md bg-blue-600 text-white hover:bg-blue-700"
                >
                    {"View hotels"}
                </button>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                { for STATS.iter().map(|stat| html! {
                    <div key={stat.label} class="p-6 rounded-lg border border-gray-200 dark:border-gray-700">
                        <h3 class="text-sm font-medium text-gray-600 dark:text-gray-400">
                            {stat.label}
                        </h3>
                        <p class={classes!("text-3xl", "font-bold", "mt-2", stat.accent)}>
                            {stat.value}
                        </p>
                    </div>
                })}
            </div>
        </div>
    }
}
