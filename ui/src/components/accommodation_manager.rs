use payloads::{
    AccommodationId, AccommodationType, Hotel, HotelId, HotelRoom,
    HotelRoomId, RoomType, RoomTypeId, assignments::AssignmentSelection,
    responses::HotelWithAssignments, workflows,
};
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    ManagerAppearance, Route, State,
    contexts::{use_api_client, use_toast},
    hooks::{use_push_route, use_request_scope},
};

#[derive(Properties, PartialEq)]
pub struct AccommodationManagerProps {
    /// Without a hotel the manager renders a placeholder and fetches
    /// nothing.
    #[prop_or_default]
    pub hotel_id: Option<HotelId>,
    /// Overrides the stored layout preference.
    #[prop_or_default]
    pub appearance: Option<ManagerAppearance>,
}

struct LayoutClasses {
    container: &'static str,
    section: &'static str,
    input: &'static str,
}

impl ManagerAppearance {
    fn layout_classes(self) -> LayoutClasses {
        match self {
            ManagerAppearance::Card => LayoutClasses {
                container: "rounded-lg border border-gray-200 dark:border-gray-700 \
                            bg-white dark:bg-gray-800 shadow p-6 space-y-6",
                section: "rounded-md bg-gray-50 dark:bg-gray-900 p-4",
                input: "mt-1 w-full rounded-md border border-gray-300 \
                        dark:border-gray-600 px-3 py-2",
            },
            ManagerAppearance::Plain => LayoutClasses {
                container: "space-y-4",
                section: "py-2",
                input: "mt-1 w-full border-b border-gray-400 px-1 py-1 \
                        bg-transparent",
            },
        }
    }
}

/// Per-hotel state of the manager. Every field belongs to the hotel being
/// shown; switching hotels starts from scratch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManagerState {
    pub hotel: Option<Hotel>,
    pub rooms: Vec<HotelRoom>,
    pub accommodations: Vec<AccommodationType>,
    pub room_types: Vec<RoomType>,
    pub selection: AssignmentSelection,
    pub is_loading: bool,
    pub is_saving: bool,
}

pub enum ManagerAction {
    /// The hotel id changed. Anything in flight for the previous hotel is
    /// dropped by its request scope, so its busy flags go too.
    Reset { loading: bool },
    /// Results of the initial fetches; `None` for a failed one.
    Loaded {
        hotel: Option<HotelWithAssignments>,
        accommodations: Option<Vec<AccommodationType>>,
        room_types: Option<Vec<RoomType>>,
    },
    Select(AssignmentSelection),
    SaveStarted,
    /// `saved` clears the selection; `rooms` is the re-fetched list, if
    /// the reload succeeded.
    SaveFinished {
        saved: bool,
        rooms: Option<Vec<HotelRoom>>,
    },
    RoomsReloaded(Vec<HotelRoom>),
}

impl Reducible for ManagerState {
    type Action = ManagerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            ManagerAction::Reset { loading } => {
                next = ManagerState {
                    accommodations: next.accommodations,
                    room_types: next.room_types,
                    is_loading: loading,
                    ..ManagerState::default()
                };
            }
            ManagerAction::Loaded {
                hotel,
                accommodations,
                room_types,
            } => {
                if let Some(response) = hotel {
                    next.hotel = Some(response.hotel);
                    next.rooms = response.accommodations;
                }
                if let Some(list) = accommodations {
                    next.accommodations = list;
                }
                if let Some(list) = room_types {
                    next.room_types = list;
                }
                next.is_loading = false;
            }
            ManagerAction::Select(selection) => next.selection = selection,
            ManagerAction::SaveStarted => next.is_saving = true,
            ManagerAction::SaveFinished { saved, rooms } => {
                if saved {
                    next.selection.clear();
                }
                if let Some(rooms) = rooms {
                    next.rooms = rooms;
                }
                next.is_saving = false;
            }
            ManagerAction::RoomsReloaded(rooms) => next.rooms = rooms,
        }

        Rc::new(next)
    }
}

/// Create, update and remove the room assignments of one hotel.
///
/// Saving a (room type, accommodation) pair the hotel already has updates
/// that assignment's quantity instead of adding a second row.
#[function_component]
pub fn AccommodationManager(props: &AccommodationManagerProps) -> Html {
    let api = use_api_client();
    let toast = use_toast();
    let push_route = use_push_route();
    let (store, _) = use_store::<State>();
    let scope = use_request_scope(props.hotel_id);
    let state = use_reducer(ManagerState::default);

    {
        let api = api.clone();
        let toast = toast.clone();
        let scope = scope.clone();
        let state = state.clone();

        use_effect_with(props.hotel_id, move |hotel_id| {
            state.dispatch(ManagerAction::Reset {
                loading: hotel_id.is_some(),
            });

            if let Some(hotel_id) = *hotel_id {
                let token = scope.token();
                yew::platform::spawn_local(async move {
                    let load =
                        workflows::load_assignment_manager(&*api, hotel_id)
                            .await;
                    token.apply(load, |load| {
                        toast.notices(&load.notices());
                        state.dispatch(ManagerAction::Loaded {
                            hotel: load.hotel.ok(),
                            accommodations: load.accommodations.ok(),
                            room_types: load.room_types.ok(),
                        });
                    });
                });
            }
        });
    }

    let Some(hotel_id) = props.hotel_id else {
        return html! {
            <div class="text-center py-12 text-gray-600 dark:text-gray-400">
                {"Select a hotel to manage its room assignments."}
            </div>
        };
    };

    let on_room_type = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let id = select.value().parse().ok().map(RoomTypeId);
            let mut selection = state.selection.clone();
            selection.room_type =
                state.room_types.iter().find(|r| Some(r.id) == id).cloned();
            state.dispatch(ManagerAction::Select(selection));
        })
    };

    let on_accommodation = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let id = select.value().parse().ok().map(AccommodationId);
            let mut selection = state.selection.clone();
            selection.accommodation = state
                .accommodations
                .iter()
                .find(|a| Some(a.id) == id)
                .cloned();
            state.dispatch(ManagerAction::Select(selection));
        })
    };

    let on_quantity = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut selection = state.selection.clone();
            selection.quantity = input.value().trim().parse().ok();
            state.dispatch(ManagerAction::Select(selection));
        })
    };

    let on_save = {
        let api = api.clone();
        let toast = toast.clone();
        let scope = scope.clone();
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let api = api.clone();
            let toast = toast.clone();
            let token = scope.token();
            let state = state.clone();
            let existing = state.rooms.clone();
            let chosen = state.selection.clone();

            state.dispatch(ManagerAction::SaveStarted);
            yew::platform::spawn_local(async move {
                let result = workflows::save_assignment(
                    &*api, hotel_id, &existing, &chosen,
                )
                .await;
                token.apply(result, |result| match result {
                    Ok(refreshed) => {
                        toast.notice(&refreshed.notice);
                        if let Some(notice) = refreshed.reload_notice() {
                            toast.notice(&notice);
                        }
                        state.dispatch(ManagerAction::SaveFinished {
                            saved: true,
                            rooms: refreshed.reloaded.ok(),
                        });
                    }
                    Err(notice) => {
                        toast.notice(&notice);
                        state.dispatch(ManagerAction::SaveFinished {
                            saved: false,
                            rooms: None,
                        });
                    }
                });
            });
        })
    };

    let on_clear = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(ManagerAction::Select(AssignmentSelection::default()));
        })
    };

    let on_delete = {
        let api = api.clone();
        let toast = toast.clone();
        let scope = scope.clone();
        let state = state.clone();
        Callback::from(move |room_id: HotelRoomId| {
            let api = api.clone();
            let toast = toast.clone();
            let token = scope.token();
            let state = state.clone();
            yew::platform::spawn_local(async move {
                let result =
                    workflows::delete_assignment(&*api, hotel_id, room_id)
                        .await;
                token.apply(result, |result| match result {
                    Ok(refreshed) => {
                        toast.notice(&refreshed.notice);
                        if let Some(notice) = refreshed.reload_notice() {
                            toast.notice(&notice);
                        }
                        if let Ok(list) = refreshed.reloaded {
                            state.dispatch(ManagerAction::RoomsReloaded(list));
                        }
                    }
                    Err(notice) => toast.notice(&notice),
                });
            });
        })
    };

    let appearance = props.appearance.unwrap_or(store.appearance);
    let styles = appearance.layout_classes();

    let selection = &state.selection;
    let selected_room_type = selection
        .room_type
        .as_ref()
        .map(|r| r.id.to_string())
        .unwrap_or_default();
    let selected_accommodation = selection
        .accommodation
        .as_ref()
        .map(|a| a.id.to_string())
        .unwrap_or_default();
    let quantity = selection
        .quantity
        .map(|q| q.to_string())
        .unwrap_or_default();

    html! {
        <div class={styles.container}>
            <div class="flex items-start justify-between">
                <div>
                    <h2 class="text-2xl font-bold">
                        {state.hotel.as_ref().map(|h| h.name.clone()).unwrap_or_else(|| {
                            if state.is_loading { "Loading hotel...".into() } else { format!("Hotel #{hotel_id}") }
                        })}
                    </h2>
                    if let Some(hotel) = &state.hotel {
                        <p class="text-sm text-gray-600 dark:text-gray-400">
                            {format!("Total rooms: {}", hotel.max_rooms)}
                        </p>
                    }
                </div>
                <div class="space-x-2">
                    <button
                        onclick={push_route.reform(|_: MouseEvent| Route::Hotels)}
                        class="px-3 py-2 text-sm rounded-md border"
                    >
                        {"Back to hotels"}
                    </button>
                    <button
                        onclick={push_route.reform(|_: MouseEvent| Route::Dashboard)}
                        class="px-3 py-2 text-sm rounded-md border"
                    >
                        {"Dashboard"}
                    </button>
                </div>
            </div>

            <form onsubmit={on_save} class={classes!(styles.section, "grid", "grid-cols-1", "md:grid-cols-4", "gap-4", "items-end")}>
                <label class="block text-sm">
                    {"Room type"}
                    <select class={styles.input} onchange={on_room_type}>
                        <option value="" selected={selected_room_type.is_empty()}>{"Select"}</option>
                        { for state.room_types.iter().map(|room_type| {
                            let value = room_type.id.to_string();
                            html! {
                                <option key={value.clone()} selected={value == selected_room_type} value={value.clone()}>
                                    {&room_type.name}
                                </option>
                            }
                        })}
                    </select>
                </label>
                <label class="block text-sm">
                    {"Accommodation"}
                    <select class={styles.input} onchange={on_accommodation}>
                        <option value="" selected={selected_accommodation.is_empty()}>{"Select"}</option>
                        { for state.accommodations.iter().map(|accommodation| {
                            let value = accommodation.id.to_string();
                            html! {
                                <option key={value.clone()} selected={value == selected_accommodation} value={value.clone()}>
                                    {&accommodation.name}
                                </option>
                            }
                        })}
                    </select>
                </label>
                <label class="block text-sm">
                    {"Quantity"}
                    <input type="number" min="1" class={styles.input}
                        value={quantity} oninput={on_quantity} />
                </label>
                <div class="flex gap-2">
                    <button type="submit" disabled={state.is_saving}
                        class="px-4 py-2 rounded-md bg-blue-600 text-white disabled:opacity-50">
                        {if state.is_saving { "Saving..." } else { "Save" }}
                    </button>
                    <button type="button" onclick={on_clear}
                        class="px-4 py-2 rounded-md border">
                        {"Clear"}
                    </button>
                </div>
            </form>

            <div class={styles.section}>
                if state.rooms.is_empty() {
                    <p class="text-sm text-gray-600 dark:text-gray-400">
                        {"No room assignments yet."}
                    </p>
                } else {
                    <table class="min-w-full text-sm">
                        <thead>
                            <tr class="text-left text-gray-500 dark:text-gray-400">
                                <th class="px-3 py-2">{"Room type"}</th>
                                <th class="px-3 py-2">{"Accommodation"}</th>
                                <th class="px-3 py-2">{"Quantity"}</th>
                                <th class="px-3 py-2"></th>
                            </tr>
                        </thead>
                        <tbody>
                            { for state.rooms.iter().map(|room| {
                                let room_id = room.id;
                                html! {
                                    <tr key={room_id.to_string()}>
                                        <td class="px-3 py-2">{&room.room_type.name}</td>
                                        <td class="px-3 py-2">{&room.accommodation.name}</td>
                                        <td class="px-3 py-2">{room.quantity}</td>
                                        <td class="px-3 py-2 text-right">
                                            <button
                                                onclick={on_delete.reform(move |_: MouseEvent| room_id)}
                                                class="text-red-600 hover:underline"
                                            >
                                                {"Delete"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                }
            </div>
        </div>
    }
}
