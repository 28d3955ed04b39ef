use payloads::RequestScope;
use yew::prelude::*;

/// A request scope tied to the calling component.
///
/// The scope is invalidated when the component unmounts and whenever
/// `deps` changes, so responses to requests issued before either event
/// are dropped. Call this before any hook that issues requests on the same
/// deps; effects run in declaration order.
#[hook]
pub fn use_request_scope<D>(deps: D) -> RequestScope
where
    D: PartialEq + 'static,
{
    let scope = use_memo((), |_| RequestScope::new());

    {
        let scope = scope.clone();
        use_effect_with(deps, move |_| move || scope.invalidate());
    }

    (*scope).clone()
}
