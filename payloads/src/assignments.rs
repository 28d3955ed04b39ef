//! Deciding what a save on the assignment manager should do.
//!
//! The backend does not reject a second assignment for the same
//! (room type, accommodation) pair, so the client keeps the pairs unique:
//! before saving it scans the hotel's current assignments and turns the
//! save into an update when the pair already exists.

use crate::{
    AccommodationId, AccommodationType, HotelRoom, HotelRoomId, Notice,
    RoomType, RoomTypeId, requests::HotelRoomDetails,
};

/// The user's pending choice on the assignment form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentSelection {
    pub room_type: Option<RoomType>,
    pub accommodation: Option<AccommodationType>,
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("All fields are required.")]
    MissingFields,
}

impl SelectionError {
    pub fn notice(&self) -> Notice {
        Notice::warning("Validation", self.to_string())
    }
}

impl AssignmentSelection {
    /// Build the request body. A quantity of zero counts as missing.
    pub fn details(&self) -> Result<HotelRoomDetails, SelectionError> {
        match (&self.room_type, &self.accommodation, self.quantity) {
            (Some(room_type), Some(accommodation), Some(quantity))
                if quantity > 0 =>
            {
                Ok(HotelRoomDetails {
                    room_type_id: room_type.id,
                    accommodation_id: accommodation.id,
                    quantity,
                })
            }
            _ => Err(SelectionError::MissingFields),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// What a save should turn into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavePlan {
    Create(HotelRoomDetails),
    /// Replace the quantity of an existing assignment.
    Update {
        room_id: HotelRoomId,
        details: HotelRoomDetails,
    },
}

impl SavePlan {
    pub fn details(&self) -> &HotelRoomDetails {
        match self {
            Self::Create(details) | Self::Update { details, .. } => details,
        }
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Self::Update { .. })
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Self::Create(_) => "Assignment created.",
            Self::Update { .. } => "Assignment updated.",
        }
    }
}

/// The existing assignment for a (room type, accommodation) pair, if any.
pub fn find_matching(
    existing: &[HotelRoom],
    room_type_id: RoomTypeId,
    accommodation_id: AccommodationId,
) -> Option<&HotelRoom> {
    existing.iter().find(|room| {
        room.room_type.id == room_type_id
            && room.accommodation.id == accommodation_id
    })
}

/// Reconcile the selection against the hotel's current assignments.
pub fn plan_save(
    existing: &[HotelRoom],
    selection: &AssignmentSelection,
) -> Result<SavePlan, SelectionError> {
    let details = selection.details()?;
    Ok(
        match find_matching(
            existing,
            details.room_type_id,
            details.accommodation_id,
        ) {
            Some(room) => SavePlan::Update {
                room_id: room.id,
                details,
            },
            None => SavePlan::Create(details),
        },
    )
}
