pub mod accommodation_manager;
pub mod confirmation_modal;
pub mod hotel_form;
pub mod hotel_table;
pub mod layout;
pub mod toast;

pub use accommodation_manager::AccommodationManager;
pub use confirmation_modal::ConfirmationModal;
pub use hotel_form::HotelFormView;
pub use hotel_table::HotelTable;
pub use toast::ToastContainer;
