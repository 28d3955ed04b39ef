pub mod api;
pub mod toast;

pub use api::{ApiProvider, use_api_client};
pub use toast::{ToastProvider, use_toast};
