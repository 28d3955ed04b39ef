use crate::{AccommodationId, CityId, RoomTypeId};
use serde::{Deserialize, Serialize};

/// Body for creating or updating a hotel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelDetails {
    pub name: String,
    pub address: String,
    pub city: Option<String>,
    pub city_id: Option<CityId>,
    pub nit: String,
    pub max_rooms: u32,
}

/// Body for creating or updating a hotel's room assignment. Updates replace
/// the quantity rather than adding to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelRoomDetails {
    pub room_type_id: RoomTypeId,
    pub accommodation_id: AccommodationId,
    pub quantity: u32,
}

/// Body for creating or updating an entry of the accommodation catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccommodationDetails {
    pub name: String,
    pub description: Option<String>,
}
