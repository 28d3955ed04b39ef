use payloads::RequestScope;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::{FetchState, use_request_scope};

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
    /// Overwrite the data with a list the caller re-fetched itself, e.g.
    /// the reload that follows a mutation.
    pub replace: Callback<T>,
    /// Scope the fetches run in. Callers issuing their own requests for
    /// the same data take tokens from it.
    pub scope: RequestScope,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// - No data + loading: "Loading {context}..."
    /// - No data + error: "Error loading {context}: ..."
    /// - Has data: `render_fn(data, is_loading, error)`; on a failed
    ///   refetch the previous data is still shown alongside the error.
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&String>) -> Html,
    {
        match self.data.as_ref() {
            None => {
                if let Some(error) = &self.error {
                    html! {
                        <div class="p-4 rounded-md bg-red-50 \
                                   dark:bg-red-900/20 border \
                                   border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 \
                                      dark:text-red-400">
                                {format!("Error loading {}: {}", context, error)}
                            </p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("Loading {}...", context)}
                            </p>
                        </div>
                    }
                }
            }
            Some(data) => render_fn(data, self.is_loading, self.error.as_ref()),
        }
    }
}

/// Generic fetch hook composer.
///
/// Fetches on mount and whenever `deps` changes, and provides a refetch
/// callback. The fetch function captures its inputs from the closure;
/// `deps` is only used for change tracking. Results of fetches issued
/// before the last deps change (or before unmount) are discarded.
///
/// ```rust
/// #[hook]
/// pub fn use_room_types() -> FetchHookReturn<Vec<RoomType>> {
///     let api = use_api_client();
///     use_fetch((), move || {
///         let api = api.clone();
///         async move {
///             api.list_room_types().await.map_err(|e| e.user_message())
///         }
///     })
/// }
/// ```
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let scope = use_request_scope(deps.clone());
    let data = use_state(|| FetchState::NotFetched);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let refetch = {
        let data = data.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let scope = scope.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, _| {
            let data = data.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            let fetch_fn = fetch_fn.clone();
            let token = scope.token();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                let result = fetch_fn().await;
                token.apply(result, |result| {
                    match result {
                        Ok(result) => data.set(FetchState::Fetched(result)),
                        Err(e) => error.set(Some(e)),
                    }
                    is_loading.set(false);
                });
            });
        })
    };

    // Auto-fetch on mount and when deps change
    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| {
            refetch.emit(());
        });
    }

    let replace = {
        let data = data.clone();
        let error = error.clone();
        Callback::from(move |value: T| {
            data.set(FetchState::Fetched(value));
            error.set(None);
        })
    };

    FetchHookReturn {
        data: (*data).clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
        replace,
        scope,
    }
}
