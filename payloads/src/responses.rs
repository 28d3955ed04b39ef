use crate::{Hotel, HotelRoom};
use serde::{Deserialize, Serialize};

/// A hotel bundled with its current room assignments, as returned by
/// `GET /hotels/{id}/accommodations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelWithAssignments {
    pub hotel: Hotel,
    #[serde(default)]
    pub accommodations: Vec<HotelRoom>,
}

/// Error body shape used by the backend. Some deployments use `error`
/// instead of `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(alias = "error")]
    pub message: String,
}
