use crate::{Route, State, state::store_appearance};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

struct NavItem {
    title: &'static str,
    route: Route,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        title: "Dashboard",
        route: Route::Dashboard,
    },
    NavItem {
        title: "Hotels",
        route: Route::Hotels,
    },
    NavItem {
        title: "Accommodations",
        route: Route::Accommodations,
    },
];

const LINK_BASE_CLASSES: &str =
    "px-3 py-2 rounded-md text-sm transition-colors";
const LINK_INACTIVE_CLASSES: &str = "text-gray-600 dark:text-gray-400 \
    hover:text-gray-900 dark:hover:text-white \
    hover:bg-gray-100 dark:hover:bg-gray-700";
const LINK_ACTIVE_CLASSES: &str =
    "text-gray-900 dark:text-white bg-gray-100 dark:bg-gray-700 font-medium";

/// The assignment manager lives under the hotels section.
fn is_active(current: &Route, item: &Route) -> bool {
    match (current, item) {
        (Route::HotelAssignments { .. }, Route::Hotels) => true,
        _ => current == item,
    }
}

#[function_component]
pub fn Header() -> Html {
    let current = use_route::<Route>().unwrap_or(Route::NotFound);
    let (state, dispatch) = use_store::<State>();

    let on_toggle_appearance = dispatch.reduce_mut_callback(|state| {
        state.appearance = state.appearance.toggled();
        store_appearance(state.appearance);
    });

    html! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center space-x-6">
                        <h1 class="text-xl font-semibold text-gray-900 dark:text-white">{"Hotel Admin"}</h1>
                        <nav class="flex space-x-1">
                            { for NAV_ITEMS.iter().map(|item| {
                                let classes = format!(
                                    "{} {}",
                                    LINK_BASE_CLASSES,
                                    if is_active(&current, &item.route) {
                                        LINK_ACTIVE_CLASSES
                                    } else {
                                        LINK_INACTIVE_CLASSES
                                    }
                                );
                                html! {
                                    <Link<Route> to={item.route.clone()} classes={classes!(classes)}>
                                        {item.title}
                                    </Link<Route>>
                                }
                            })}
                        </nav>
                    </div>
                    <div class="flex items-center space-x-4">
                        <button
                            onclick={on_toggle_appearance}
                            class="text-sm text-gray-600 dark:text-gray-400 hover:text-gray-900 dark:hover:text-white"
                            title="Switch the assignment manager layout"
                        >
                            {state.appearance.toggled().label()}
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}
