pub mod accommodations;
pub mod dashboard;
pub mod hotel_assignments;
pub mod hotels;
pub mod not_found;

pub use accommodations::AccommodationsPage;
pub use dashboard::DashboardPage;
pub use hotel_assignments::HotelAssignmentsPage;
pub use hotels::HotelsPage;
pub use not_found::NotFoundPage;
