//! In-memory stand-in for the backend's storage.
//!
//! Catalogs (cities, room types, accommodations) are seeded on creation.
//! Ids are handed out from one counter shared by every table, so an id is
//! never reused after a delete.

use std::collections::BTreeMap;

use payloads::{
    AccommodationId, AccommodationType, City, CityId, Hotel, HotelId,
    HotelRoom, HotelRoomId, RoomType, RoomTypeId, requests,
    responses::HotelWithAssignments,
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Hotel not found")]
    HotelNotFound,
    #[error("Room assignment not found")]
    RoomNotFound,
    #[error("Accommodation not found")]
    AccommodationNotFound,
    #[error("Room type not found")]
    RoomTypeNotFound,
    #[error("Quantity must be a positive number")]
    InvalidQuantity,
    #[error("Name is required")]
    MissingName,
    #[error("Accommodation is still assigned to a hotel")]
    AccommodationInUse,
}

#[derive(Debug, Clone)]
struct StoredRoom {
    hotel_id: HotelId,
    room_type_id: RoomTypeId,
    accommodation_id: AccommodationId,
    quantity: u32,
}

#[derive(Debug)]
pub struct Store {
    next_id: i64,
    hotels: BTreeMap<HotelId, Hotel>,
    rooms: BTreeMap<HotelRoomId, StoredRoom>,
    accommodations: BTreeMap<AccommodationId, AccommodationType>,
    room_types: Vec<RoomType>,
    cities: Vec<City>,
}

impl Default for Store {
    fn default() -> Self {
        let cities = ["Bogotá", "Medellín", "Cartagena"]
            .into_iter()
            .enumerate()
            .map(|(i, name)| City {
                id: CityId(i as i64 + 1),
                name: name.into(),
            })
            .collect();
        let room_types = ["Double", "Single", "Suite"]
            .into_iter()
            .enumerate()
            .map(|(i, name)| RoomType {
                id: RoomTypeId(i as i64 + 1),
                name: name.into(),
            })
            .collect();
        let accommodations = [
            (5, "King", "One king size bed"),
            (6, "Twin", "Two single beds"),
            (7, "Triple", "Three single beds"),
        ]
        .into_iter()
        .map(|(id, name, description)| {
            (
                AccommodationId(id),
                AccommodationType {
                    id: AccommodationId(id),
                    name: name.into(),
                    description: Some(description.into()),
                },
            )
        })
        .collect();

        Self {
            next_id: 100,
            hotels: BTreeMap::new(),
            rooms: BTreeMap::new(),
            accommodations,
            room_types,
            cities,
        }
    }
}

impl Store {
    fn next_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn list_hotels(&self) -> Vec<Hotel> {
        self.hotels.values().cloned().collect()
    }

    pub fn get_hotel(&self, hotel_id: HotelId) -> Result<Hotel, StoreError> {
        self.hotels
            .get(&hotel_id)
            .cloned()
            .ok_or(StoreError::HotelNotFound)
    }

    pub fn create_hotel(
        &mut self,
        details: &requests::HotelDetails,
    ) -> Result<Hotel, StoreError> {
        if details.name.trim().is_empty() {
            return Err(StoreError::MissingName);
        }
        let id = HotelId(self.next_id());
        let hotel = hotel_from_details(id, details);
        self.hotels.insert(id, hotel.clone());
        Ok(hotel)
    }

    pub fn update_hotel(
        &mut self,
        hotel_id: HotelId,
        details: &requests::HotelDetails,
    ) -> Result<Hotel, StoreError> {
        if details.name.trim().is_empty() {
            return Err(StoreError::MissingName);
        }
        let hotel = self
            .hotels
            .get_mut(&hotel_id)
            .ok_or(StoreError::HotelNotFound)?;
        *hotel = hotel_from_details(hotel_id, details);
        Ok(hotel.clone())
    }

    /// Deleting a hotel also deletes its room assignments.
    pub fn delete_hotel(&mut self, hotel_id: HotelId) -> Result<(), StoreError> {
        self.hotels
            .remove(&hotel_id)
            .ok_or(StoreError::HotelNotFound)?;
        self.rooms.retain(|_, room| room.hotel_id != hotel_id);
        Ok(())
    }

    pub fn hotel_with_assignments(
        &self,
        hotel_id: HotelId,
    ) -> Result<HotelWithAssignments, StoreError> {
        Ok(HotelWithAssignments {
            hotel: self.get_hotel(hotel_id)?,
            accommodations: self.list_hotel_rooms(hotel_id)?,
        })
    }

    pub fn list_hotel_rooms(
        &self,
        hotel_id: HotelId,
    ) -> Result<Vec<HotelRoom>, StoreError> {
        self.get_hotel(hotel_id)?;
        self.rooms
            .iter()
            .filter(|(_, room)| room.hotel_id == hotel_id)
            .map(|(id, room)| self.room_view(*id, room))
            .collect()
    }

    /// Duplicate (room type, accommodation) pairs are accepted, like the
    /// real backend does; the client is responsible for avoiding them.
    pub fn create_hotel_room(
        &mut self,
        hotel_id: HotelId,
        details: &requests::HotelRoomDetails,
    ) -> Result<HotelRoom, StoreError> {
        self.get_hotel(hotel_id)?;
        let room = self.validate_room(hotel_id, details)?;
        let id = HotelRoomId(self.next_id());
        let view = self.room_view(id, &room)?;
        self.rooms.insert(id, room);
        Ok(view)
    }

    pub fn update_hotel_room(
        &mut self,
        hotel_id: HotelId,
        room_id: HotelRoomId,
        details: &requests::HotelRoomDetails,
    ) -> Result<HotelRoom, StoreError> {
        self.get_hotel(hotel_id)?;
        match self.rooms.get(&room_id) {
            Some(room) if room.hotel_id == hotel_id => {}
            _ => return Err(StoreError::RoomNotFound),
        }
        let room = self.validate_room(hotel_id, details)?;
        let view = self.room_view(room_id, &room)?;
        self.rooms.insert(room_id, room);
        Ok(view)
    }

    pub fn delete_hotel_room(
        &mut self,
        hotel_id: HotelId,
        room_id: HotelRoomId,
    ) -> Result<(), StoreError> {
        match self.rooms.get(&room_id) {
            Some(room) if room.hotel_id == hotel_id => {
                self.rooms.remove(&room_id);
                Ok(())
            }
            _ => Err(StoreError::RoomNotFound),
        }
    }

    pub fn list_accommodations(&self) -> Vec<AccommodationType> {
        self.accommodations.values().cloned().collect()
    }

    pub fn create_accommodation(
        &mut self,
        details: &requests::AccommodationDetails,
    ) -> Result<AccommodationType, StoreError> {
        if details.name.trim().is_empty() {
            return Err(StoreError::MissingName);
        }
        let id = AccommodationId(self.next_id());
        let accommodation = AccommodationType {
            id,
            name: details.name.clone(),
            description: details.description.clone(),
        };
        self.accommodations.insert(id, accommodation.clone());
        Ok(accommodation)
    }

    pub fn update_accommodation(
        &mut self,
        accommodation_id: AccommodationId,
        details: &requests::AccommodationDetails,
    ) -> Result<AccommodationType, StoreError> {
        if details.name.trim().is_empty() {
            return Err(StoreError::MissingName);
        }
        let accommodation = self
            .accommodations
            .get_mut(&accommodation_id)
            .ok_or(StoreError::AccommodationNotFound)?;
        accommodation.name = details.name.clone();
        accommodation.description = details.description.clone();
        Ok(accommodation.clone())
    }

    pub fn delete_accommodation(
        &mut self,
        accommodation_id: AccommodationId,
    ) -> Result<(), StoreError> {
        if !self.accommodations.contains_key(&accommodation_id) {
            return Err(StoreError::AccommodationNotFound);
        }
        if self
            .rooms
            .values()
            .any(|room| room.accommodation_id == accommodation_id)
        {
            return Err(StoreError::AccommodationInUse);
        }
        self.accommodations.remove(&accommodation_id);
        Ok(())
    }

    pub fn list_room_types(&self) -> Vec<RoomType> {
        self.room_types.clone()
    }

    pub fn list_cities(&self) -> Vec<City> {
        self.cities.clone()
    }

    fn validate_room(
        &self,
        hotel_id: HotelId,
        details: &requests::HotelRoomDetails,
    ) -> Result<StoredRoom, StoreError> {
        if details.quantity == 0 {
            return Err(StoreError::InvalidQuantity);
        }
        Ok(StoredRoom {
            hotel_id,
            room_type_id: details.room_type_id,
            accommodation_id: details.accommodation_id,
            quantity: details.quantity,
        })
    }

    fn room_view(
        &self,
        id: HotelRoomId,
        room: &StoredRoom,
    ) -> Result<HotelRoom, StoreError> {
        let room_type = self
            .room_types
            .iter()
            .find(|rt| rt.id == room.room_type_id)
            .cloned()
            .ok_or(StoreError::RoomTypeNotFound)?;
        let accommodation = self
            .accommodations
            .get(&room.accommodation_id)
            .cloned()
            .ok_or(StoreError::AccommodationNotFound)?;
        Ok(HotelRoom {
            id,
            room_type,
            accommodation,
            quantity: room.quantity,
        })
    }
}

fn hotel_from_details(id: HotelId, details: &requests::HotelDetails) -> Hotel {
    Hotel {
        id,
        name: details.name.clone(),
        address: details.address.clone(),
        city: details.city.clone(),
        city_id: details.city_id,
        nit: details.nit.clone(),
        max_rooms: details.max_rooms,
    }
}
