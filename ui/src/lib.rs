use payloads::{APIClient, HotelId, api_client::DEFAULT_BACKEND_URL};
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
mod logs;
mod pages;
mod state;

pub use state::{ManagerAppearance, State};

use components::{ToastContainer, layout::MainLayout};
use contexts::{ApiProvider, ToastProvider};

/// Build the API client. The backend address is fixed at build time through
/// the `BACKEND_URL` environment variable.
pub fn build_api_client() -> APIClient {
    let address = option_env!("BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL);
    APIClient::new(address)
}

#[function_component]
pub fn App() -> Html {
    use_effect_with((), |_| logs::init_logging());
    let client = use_memo((), |_| build_api_client());

    html! {
        <ApiProvider client={(*client).clone()}>
            <ToastProvider>
                <BrowserRouter>
                    <MainLayout>
                        <Switch<Route> render={switch} />
                    </MainLayout>
                    <ToastContainer />
                </BrowserRouter>
            </ToastProvider>
        </ApiProvider>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/hotels")]
    Hotels,
    #[at("/hotels/:hotel_id")]
    HotelAssignments { hotel_id: HotelId },
    #[at("/accommodations")]
    Accommodations,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Dashboard => html! { <pages::DashboardPage /> },
        Route::Hotels => html! { <pages::HotelsPage /> },
        Route::HotelAssignments { hotel_id } => html! {
            <pages::HotelAssignmentsPage {hotel_id} />
        },
        Route::Accommodations => html! { <pages::AccommodationsPage /> },
        Route::NotFound => html! { <pages::NotFoundPage /> },
    }
}
