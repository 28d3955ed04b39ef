use payloads::{
    AccommodationId, AccommodationType, Notice,
    accommodations::{AccommodationFilter, AccommodationForm},
    workflows::{self, Refreshed},
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    components::ConfirmationModal,
    contexts::{use_api_client, use_toast},
    hooks::{use_accommodations, use_title},
};

fn input_value(e: InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

#[function_component]
pub fn AccommodationsPage() -> Html {
    use_title("Accommodations");
    let api = use_api_client();
    let toast = use_toast();
    let catalog = use_accommodations();

    let filter = use_state(AccommodationFilter::default);
    let form = use_state(AccommodationForm::default);
    let pending_delete = use_state(|| None::<AccommodationType>);
    let is_busy = use_state(|| false);

    let finish = {
        let toast = toast.clone();
        let replace = catalog.replace.clone();
        let form = form.clone();
        let is_busy = is_busy.clone();
        Callback::from(
            move |result: Result<Refreshed<Vec<AccommodationType>>, Notice>| {
                match result {
                    Ok(refreshed) => {
                        toast.notice(&refreshed.notice);
                        if let Some(notice) = refreshed.reload_notice() {
                            toast.notice(&notice);
                        }
                        if let Ok(list) = refreshed.reloaded {
                            replace.emit(list);
                        }
                        form.set(AccommodationForm::default());
                    }
                    Err(notice) => toast.notice(&notice),
                }
                is_busy.set(false);
            },
        )
    };

    let on_filter_name = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            filter.set(AccommodationFilter {
                name: input_value(e),
                ..(*filter).clone()
            });
        })
    };
    let on_filter_description = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            filter.set(AccommodationFilter {
                description: input_value(e),
                ..(*filter).clone()
            });
        })
    };

    let on_form_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(AccommodationForm {
                name: input_value(e),
                ..(*form).clone()
            });
        })
    };
    let on_form_description = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(AccommodationForm {
                description: input_value(e),
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let api = api.clone();
        let toast = toast.clone();
        let scope = catalog.scope.clone();
        let form = form.clone();
        let finish = finish.clone();
        let is_busy = is_busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let submission = match form.submission() {
                Ok(submission) => submission,
                Err(e) => {
                    toast.notice(&e.notice());
                    return;
                }
            };
            let api = api.clone();
            let token = scope.token();
            let finish = finish.clone();
            is_busy.set(true);
            yew::platform::spawn_local(async move {
                let result =
                    workflows::submit_accommodation(&*api, &submission).await;
                token.apply(result, |result| finish.emit(result));
            });
        })
    };

    let on_cancel = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(AccommodationForm::default());
        })
    };

    let on_confirm_delete = {
        let api = api.clone();
        let scope = catalog.scope.clone();
        let pending_delete = pending_delete.clone();
        let finish = finish.clone();
        let is_busy = is_busy.clone();
        Callback::from(move |_| {
            let Some(accommodation) = (*pending_delete).clone() else {
                return;
            };
            pending_delete.set(None);
            let id: AccommodationId = accommodation.id;
            let api = api.clone();
            let token = scope.token();
            let finish = finish.clone();
            is_busy.set(true);
            yew::platform::spawn_local(async move {
                let result = workflows::delete_accommodation(&*api, id).await;
                token.apply(result, |result| finish.emit(result));
            });
        })
    };

    let on_close_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_| pending_delete.set(None))
    };

    let render_table = |list: &Vec<AccommodationType>,
                        is_loading: bool,
                        error: Option<&String>| {
        let rows = filter.apply(list);
        html! {
            <div class="space-y-2">
                if is_loading {
                    <p class="text-sm text-gray-500">{"Refreshing..."}</p>
                }
                if let Some(error) = error {
                    <p class="text-sm text-red-600 dark:text-red-400">{error}</p>
                }
                if rows.is_empty() {
                    <p class="text-center py-8 text-gray-600 dark:text-gray-400">
                        {"No accommodations match."}
                    </p>
                } else {
                    <table class="min-w-full text-sm">
                        <thead>
                            <tr class="text-left text-gray-500 dark:text-gray-400">
                                <th class="px-3 py-2">{"Name"}</th>
                                <th class="px-3 py-2">{"Description"}</th>
                                <th class="px-3 py-2">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for rows.into_iter().map(|accommodation| {
                                let on_edit = {
                                    let form = form.clone();
                                    let accommodation = accommodation.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        form.set(AccommodationForm::from_accommodation(&accommodation));
                                    })
                                };
                                let on_delete = {
                                    let pending_delete = pending_delete.clone();
                                    let accommodation = accommodation.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        pending_delete.set(Some(accommodation.clone()));
                                    })
                                };
                                html! {
                                    <tr key={accommodation.id.to_string()}>
                                        <td class="px-3 py-2 font-medium">{&accommodation.name}</td>
                                        <td class="px-3 py-2">
                                            {accommodation.description.clone().unwrap_or_default()}
                                        </td>
                                        <td class="px-3 py-2 space-x-2">
                                            <button onclick={on_edit} class="text-blue-600 hover:underline">
                                                {"Edit"}
                                            </button>
                                            <button onclick={on_delete} class="text-red-600 hover:underline">
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
        }
    };

    html! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold text-gray-900 dark:text-gray-100">
                    {"Accommodations"}
                </h1>
                <button
                    onclick={catalog.refetch.reform(|_: MouseEvent| ())}
                    disabled={catalog.is_loading}
                    class="px-3 py-2 text-sm rounded-md border disabled:opacity-50"
                >
                    {"Refresh"}
                </button>
            </div>

            <form onsubmit={on_submit} class="space-y-4 p-6 rounded-lg border border-gray-200 dark:border-gray-700">
                <h2 class="text-lg font-semibold">
                    {if form.id.is_some() { "Edit accommodation" } else { "New accommodation" }}
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <label class="block text-sm">
                        {"Name"}
                        <input type="text" class="mt-1 w-full rounded-md border px-3 py-2"
                            value={form.name.clone()} oninput={on_form_name} />
                    </label>
                    <label class="block text-sm">
                        {"Description"}
                        <input type="text" class="mt-1 w-full rounded-md border px-3 py-2"
                            value={form.description.clone()} oninput={on_form_description} />
                    </label>
                </div>
                <div class="flex gap-3">
                    <button type="submit" disabled={*is_busy}
                        class="px-4 py-2 rounded-md bg-blue-600 text-white disabled:opacity-50">
                        {if form.id.is_some() { "Update" } else { "Create" }}
                    </button>
                    <button type="button" onclick={on_cancel} class="px-4 py-2 rounded-md border">
                        {"Cancel"}
                    </button>
                </div>
            </form>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <input type="search" placeholder="Filter by name"
                    class="rounded-md border px-3 py-2"
                    value={filter.name.clone()} oninput={on_filter_name} />
                <input type="search" placeholder="Filter by description"
                    class="rounded-md border px-3 py-2"
                    value={filter.description.clone()} oninput={on_filter_description} />
            </div>

            {catalog.render("accommodations", render_table)}

            if let Some(accommodation) = (*pending_delete).clone() {
                <ConfirmationModal
                    title="Delete accommodation"
                    message={format!("{} will be removed from the catalog.", accommodation.name)}
                    confirm_text="Delete"
                    on_confirm={on_confirm_delete}
                    on_close={on_close_delete}
                    is_loading={*is_busy}
                />
            }
        </div>
    }
}
