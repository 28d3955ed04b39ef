use payloads::{
    Hotel, HotelId, Notice,
    hotel_form::HotelSubmission,
    workflows::{self, Refreshed},
};
use yew::prelude::*;

use crate::{
    Route,
    components::{HotelFormView, HotelTable},
    contexts::{use_api_client, use_toast},
    hooks::{use_hotels, use_push_route, use_title},
};

#[function_component]
pub fn HotelsPage() -> Html {
    use_title("Hotels");
    let api = use_api_client();
    let toast = use_toast();
    let push_route = use_push_route();
    let hotels = use_hotels();

    let editing = use_state(|| None::<Hotel>);
    let generation = use_state(|| 0u32);
    let is_busy = use_state(|| false);

    // Applies the outcome of a mutation: notices, the re-fetched list, and
    // a cleared form.
    let finish = {
        let toast = toast.clone();
        let replace = hotels.replace.clone();
        let editing = editing.clone();
        let generation = generation.clone();
        let is_busy = is_busy.clone();
        Callback::from(
            move |result: Result<Refreshed<Vec<Hotel>>, Notice>| {
                match result {
                    Ok(refreshed) => {
                        toast.notice(&refreshed.notice);
                        if let Some(notice) = refreshed.reload_notice() {
                            toast.notice(&notice);
                        }
                        if let Ok(list) = refreshed.reloaded {
                            replace.emit(list);
                        }
                        editing.set(None);
                        generation.set(generation.wrapping_add(1));
                    }
                    Err(notice) => toast.notice(&notice),
                }
                is_busy.set(false);
            },
        )
    };

    let on_submit = {
        let api = api.clone();
        let scope = hotels.scope.clone();
        let finish = finish.clone();
        let is_busy = is_busy.clone();
        Callback::from(move |submission: HotelSubmission| {
            let api = api.clone();
            let token = scope.token();
            let finish = finish.clone();
            is_busy.set(true);
            yew::platform::spawn_local(async move {
                let result = workflows::submit_hotel(&*api, &submission).await;
                token.apply(result, |result| finish.emit(result));
            });
        })
    };

    let on_delete = {
        let api = api.clone();
        let scope = hotels.scope.clone();
        let finish = finish.clone();
        let is_busy = is_busy.clone();
        Callback::from(move |hotel_id: HotelId| {
            let api = api.clone();
            let token = scope.token();
            let finish = finish.clone();
            is_busy.set(true);
            yew::platform::spawn_local(async move {
                let result = workflows::delete_hotel(&*api, hotel_id).await;
                token.apply(result, |result| finish.emit(result));
            });
        })
    };

    let on_cancel = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(None))
    };

    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |hotel: Hotel| editing.set(Some(hotel)))
    };

    let on_manage = push_route
        .reform(|hotel: Hotel| Route::HotelAssignments { hotel_id: hotel.id });

    html! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold text-gray-900 dark:text-gray-100">
                    {"Hotels"}
                </h1>
                <button
                    onclick={hotels.refetch.reform(|_: MouseEvent| ())}
                    disabled={hotels.is_loading}
                    class="px-3 py-2 text-sm rounded-md border disabled:opacity-50"
                >
                    {"Refresh"}
                </button>
            </div>

            <HotelFormView
                hotel={(*editing).clone()}
                generation={*generation}
                {on_submit}
                {on_delete}
                {on_cancel}
                is_busy={*is_busy}
            />

            {hotels.render("hotels", |list, is_loading, error| html! {
                <div class="space-y-2">
                    if is_loading {
                        <p class="text-sm text-gray-500">{"Refreshing..."}</p>
                    }
                    if let Some(error) = error {
                        <p class="text-sm text-red-600 dark:text-red-400">{error}</p>
                    }
                    <HotelTable
                        hotels={list.clone()}
                        on_edit={on_edit.clone()}
                        on_manage={on_manage.clone()}
                    />
                </div>
            })}
        </div>
    }
}
