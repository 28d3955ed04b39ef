use payloads::{AccommodationType, City, Hotel, HotelApi};
use yew::prelude::*;

use crate::{
    contexts::use_api_client,
    hooks::{FetchHookReturn, use_fetch},
};

#[hook]
pub fn use_hotels() -> FetchHookReturn<Vec<Hotel>> {
    let api = use_api_client();
    use_fetch((), move || {
        let api = api.clone();
        async move { api.list_hotels().await.map_err(|e| e.user_message()) }
    })
}

/// City catalog for the hotel form; fetched once per mount.
#[hook]
pub fn use_cities() -> FetchHookReturn<Vec<City>> {
    let api = use_api_client();
    use_fetch((), move || {
        let api = api.clone();
        async move { api.list_cities().await.map_err(|e| e.user_message()) }
    })
}

#[hook]
pub fn use_accommodations() -> FetchHookReturn<Vec<AccommodationType>> {
    let api = use_api_client();
    use_fetch((), move || {
        let api = api.clone();
        async move {
            api.list_accommodations()
                .await
                .map_err(|e| e.user_message())
        }
    })
}
