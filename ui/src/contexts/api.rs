use payloads::APIClient;
use std::rc::Rc;
use yew::prelude::*;

/// The API client shared by every page. Built once by `App` and provided
/// here so components never construct their own.
pub type ApiContext = Rc<APIClient>;

#[derive(Properties, PartialEq)]
pub struct ApiProviderProps {
    pub client: APIClient,
    pub children: Children,
}

#[function_component]
pub fn ApiProvider(props: &ApiProviderProps) -> Html {
    let client = use_memo(props.client.clone(), |client| client.clone());

    html! {
        <ContextProvider<ApiContext> context={client}>
            {props.children.clone()}
        </ContextProvider<ApiContext>>
    }
}

#[hook]
pub fn use_api_client() -> ApiContext {
    use_context::<ApiContext>()
        .expect("use_api_client must be used within an ApiProvider")
}
