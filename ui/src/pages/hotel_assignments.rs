use payloads::HotelId;
use yew::prelude::*;

use crate::{components::AccommodationManager, hooks::use_title};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub hotel_id: HotelId,
}

#[function_component]
pub fn HotelAssignmentsPage(props: &Props) -> Html {
    use_title("Room assignments");

    html! {
        <AccommodationManager hotel_id={props.hotel_id} />
    }
}
