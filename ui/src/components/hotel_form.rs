use payloads::{
    CityId, Hotel, HotelId, Notice,
    hotel_form::{HotelForm, HotelSubmission},
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::{
    components::ConfirmationModal, contexts::use_toast, hooks::use_cities,
};

#[derive(Properties, PartialEq)]
pub struct HotelFormViewProps {
    /// Hotel being edited; `None` for a new one.
    #[prop_or_default]
    pub hotel: Option<Hotel>,
    /// Bumped by the parent after a successful save or delete to empty the
    /// form.
    #[prop_or_default]
    pub generation: u32,
    pub on_submit: Callback<HotelSubmission>,
    pub on_delete: Callback<HotelId>,
    pub on_cancel: Callback<()>,
    #[prop_or_default]
    pub is_busy: bool,
}

#[function_component]
pub fn HotelFormView(props: &HotelFormViewProps) -> Html {
    let toast = use_toast();
    let cities = use_cities();
    let form = use_state(HotelForm::default);
    let show_delete_modal = use_state(|| false);

    let city_list = cities.data.as_ref().cloned().unwrap_or_default();

    // A new hotel or generation prefills from scratch. A catalog arriving
    // on its own only re-resolves the city.
    let prefilled_for = use_mut_ref(|| None::<(Option<Hotel>, u32)>);
    {
        let form = form.clone();
        use_effect_with(
            (props.hotel.clone(), props.generation, city_list.clone()),
            move |(hotel, generation, cities)| {
                let key = (hotel.clone(), *generation);
                if prefilled_for.borrow().as_ref() != Some(&key) {
                    *prefilled_for.borrow_mut() = Some(key);
                    form.set(match hotel {
                        Some(hotel) => HotelForm::from_hotel(hotel, cities),
                        None => HotelForm::default(),
                    });
                } else {
                    let mut next = (*form).clone();
                    next.refresh_city(hotel.as_ref(), cities);
                    form.set(next);
                }
            },
        );
    }

    {
        let toast = toast.clone();
        use_effect_with(cities.error.clone(), move |error| {
            if let Some(error) = error {
                toast.notice(&Notice::warning("Catalog", error.clone()));
            }
        });
    }

    let update = |apply: fn(&mut HotelForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };
    let on_name = update(|f, v| f.name = v);
    let on_address = update(|f, v| f.address = v);
    let on_nit = update(|f, v| f.nit = v);
    let on_max_rooms = update(|f, v| f.set_max_rooms(&v));

    let on_city = {
        let form = form.clone();
        let city_list = city_list.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let selected = select.value().parse::<i64>().ok().map(CityId);
            let mut next = (*form).clone();
            next.city = city_list
                .iter()
                .find(|c| Some(c.id) == selected)
                .cloned();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let toast = toast.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.submission() {
                Ok(submission) => on_submit.emit(submission),
                Err(e) => toast.notice(&e.notice()),
            }
        })
    };

    let on_cancel = {
        let form = form.clone();
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(HotelForm::default());
            on_cancel.emit(());
        })
    };

    let open_delete = {
        let show_delete_modal = show_delete_modal.clone();
        Callback::from(move |_: MouseEvent| show_delete_modal.set(true))
    };
    let close_delete = {
        let show_delete_modal = show_delete_modal.clone();
        Callback::from(move |_| show_delete_modal.set(false))
    };
    let confirm_delete = {
        let form = form.clone();
        let show_delete_modal = show_delete_modal.clone();
        let on_delete = props.on_delete.clone();
        Callback::from(move |_| {
            show_delete_modal.set(false);
            if let Some(id) = form.id {
                on_delete.emit(id);
            }
        })
    };

    let selected_city = form
        .city
        .as_ref()
        .map(|c| c.id.to_string())
        .unwrap_or_default();

    html! {
        <form onsubmit={on_submit} class="space-y-4 p-6 rounded-lg border border-gray-200 dark:border-gray-700">
            <h2 class="text-lg font-semibold">
                {if form.is_editing() { "Edit hotel" } else { "New hotel" }}
            </h2>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <label class="block text-sm">
                    {"Name"}
                    <input type="text" class="mt-1 w-full rounded-md border px-3 py-2"
                        value={form.name.clone()} oninput={on_name} />
                </label>
                <label class="block text-sm">
                    {"Address"}
                    <input type="text" class="mt-1 w-full rounded-md border px-3 py-2"
                        value={form.address.clone()} oninput={on_address} />
                </label>
                <label class="block text-sm">
                    {"City"}
                    <select class="mt-1 w-full rounded-md border px-3 py-2" onchange={on_city}>
                        <option value="" selected={form.city.is_none()}>{"Select a city"}</option>
                        { for city_list.iter().map(|city| {
                            let value = city.id.to_string();
                            html! {
                                <option
                                    key={value.clone()}
                                    selected={value == selected_city}
                                    value={value.clone()}
                                >
                                    {&city.name}
                                </option>
                            }
                        })}
                    </select>
                </label>
                <label class="block text-sm">
                    {"NIT"}
                    <input type="text" class="mt-1 w-full rounded-md border px-3 py-2"
                        value={form.nit.clone()} oninput={on_nit} />
                </label>
                <label class="block text-sm">
                    {"Max rooms"}
                    <input type="number" min="0" class="mt-1 w-full rounded-md border px-3 py-2"
                        value={form.max_rooms.to_string()} oninput={on_max_rooms} />
                </label>
            </div>

            <div class="flex gap-3">
                <button type="submit" disabled={props.is_busy}
                    class="px-4 py-2 rounded-md bg-blue-600 text-white disabled:opacity-50">
                    {if form.is_editing() { "Update" } else { "Create" }}
                </button>
                <button type="button" onclick={on_cancel} disabled={props.is_busy}
                    class="px-4 py-2 rounded-md border">
                    {"Cancel"}
                </button>
                <button type="button" onclick={open_delete}
                    disabled={!form.can_delete() || props.is_busy}
                    class="px-4 py-2 rounded-md bg-red-600 text-white disabled:opacity-50">
                    {"Delete"}
                </button>
            </div>

            if *show_delete_modal {
                <ConfirmationModal
                    title="Delete hotel"
                    message={format!("{} and its room assignments will be removed.", form.name)}
                    confirm_text="Delete"
                    on_confirm={confirm_delete}
                    on_close={close_delete}
                    is_loading={props.is_busy}
                />
            }
        </form>
    }
}
