pub mod use_catalogs;
pub mod use_fetch;
pub mod use_push_route;
pub mod use_request_scope;
pub mod use_title;

pub use use_catalogs::{use_accommodations, use_cities, use_hotels};
pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_push_route::use_push_route;
pub use use_request_scope::use_request_scope;
pub use use_title::use_title;

/// Distinguishes "not fetched yet" from "fetched and empty".
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Fetched(data) => Some(data),
            Self::NotFetched => None,
        }
    }
}
