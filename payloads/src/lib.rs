//! Types shared between the admin frontend and anything that talks to the
//! hotel inventory API: ids, entities, request bodies, the HTTP client, and
//! the client-side workflows built on top of it.

pub mod accommodations;
pub mod api_client;
pub mod assignments;
pub mod hotel_form;
pub mod notice;
pub mod requests;
pub mod responses;
pub mod scope;
pub mod workflows;

pub use api_client::{APIClient, ClientError, HotelApi};
pub use notice::{Notice, Severity};
pub use scope::{RequestScope, ScopeToken};

use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(transparent)]
pub struct HotelId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(transparent)]
pub struct CityId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(transparent)]
pub struct AccommodationId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(transparent)]
pub struct RoomTypeId(pub i64);

/// Identifier of a hotel's (room type, accommodation) assignment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(transparent)]
pub struct HotelRoomId(pub i64);

impl std::str::FromStr for HotelId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(HotelId)
    }
}

/// A hotel as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    pub address: String,
    /// City display name. Older records may only carry this and no id.
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub city_id: Option<CityId>,
    /// Tax / registration number.
    pub nit: String,
    pub max_rooms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccommodationType {
    pub id: AccommodationId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomType {
    pub id: RoomTypeId,
    pub name: String,
}

/// A hotel's assignment of a number of rooms to a (room type,
/// accommodation) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelRoom {
    pub id: HotelRoomId,
    pub room_type: RoomType,
    pub accommodation: AccommodationType,
    pub quantity: u32,
}
