use payloads::Hotel;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HotelTableProps {
    pub hotels: Vec<Hotel>,
    pub on_edit: Callback<Hotel>,
    pub on_manage: Callback<Hotel>,
}

#[function_component]
pub fn HotelTable(props: &HotelTableProps) -> Html {
    if props.hotels.is_empty() {
        return html! {
            <p class="text-center py-8 text-gray-600 dark:text-gray-400">
                {"No hotels yet."}
            </p>
        };
    }

    html! {
        <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700 text-sm">
            <thead>
                <tr class="text-left text-gray-500 dark:text-gray-400">
                    <th class="px-3 py-2">{"Name"}</th>
                    <th class="px-3 py-2">{"Address"}</th>
                    <th class="px-3 py-2">{"City"}</th>
                    <th class="px-3 py-2">{"Max rooms"}</th>
                    <th class="px-3 py-2">{"NIT"}</th>
                    <th class="px-3 py-2">{"Actions"}</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-gray-100 dark:divide-gray-800">
                { for props.hotels.iter().map(|hotel| {
                    let on_edit = {
                        let hotel = hotel.clone();
                        props.on_edit.reform(move |_: MouseEvent| hotel.clone())
                    };
                    let on_manage = {
                        let hotel = hotel.clone();
                        props.on_manage.reform(move |_: MouseEvent| hotel.clone())
                    };
                    html! {
                        <tr key={hotel.id.to_string()}>
                            <td class="px-3 py-2 font-medium">{&hotel.name}</td>
                            <td class="px-3 py-2">{&hotel.address}</td>
                            <td class="px-3 py-2">{hotel.city.clone().unwrap_or_default()}</td>
                            <td class="px-3 py-2">{hotel.max_rooms}</td>
                            <td class="px-3 py-2">{&hotel.nit}</td>
                            <td class="px-3 py-2 space-x-2">
                                <button onclick={on_edit} class="text-blue-600 hover:underline">
                                    {"Edit"}
                                </button>
                                <button onclick={on_manage} class="text-blue-600 hover:underline">
                                    {"Manage"}
                                </button>
                            </td>
                        </tr>
                    }
                })}
            </tbody>
        </table>
    }
}
