//! Mock data for the development server and integration tests.
//!
//! Uses the seeded catalogs (cities, room types, accommodations) and adds a
//! few hotels with room assignments through the public API, so the data
//! goes through the same paths the UI uses.

use crate::TestApp;
use anyhow::Result;
use payloads::{
    AccommodationId, CityId, Hotel, HotelApi, RoomTypeId, requests,
};

pub struct DevDataset {
    pub hotels: Vec<Hotel>,
    pub assignment_count: usize,
}

struct SeedHotel {
    name: &'static str,
    address: &'static str,
    city: (i64, &'static str),
    nit: &'static str,
    max_rooms: u32,
    /// (room type, accommodation, quantity)
    rooms: &'static [(i64, i64, u32)],
}

const HOTELS: &[SeedHotel] = &[
    SeedHotel {
        name: "Decameron Cartagena",
        address: "Carrera 1 # 10-10",
        city: (3, "Cartagena"),
        nit: "890100200-1",
        max_rooms: 42,
        rooms: &[(1, 5, 20), (1, 6, 12), (3, 5, 10)],
    },
    SeedHotel {
        name: "Hotel Estelar Medellín",
        address: "Calle 10 # 42-25",
        city: (2, "Medellín"),
        nit: "890900300-2",
        max_rooms: 30,
        rooms: &[(2, 6, 18), (1, 7, 12)],
    },
    SeedHotel {
        name: "Hotel Tequendama",
        address: "Carrera 10 # 26-21",
        city: (1, "Bogotá"),
        nit: "860000400-3",
        max_rooms: 15,
        rooms: &[],
    },
];

impl DevDataset {
    pub async fn create(app: &TestApp) -> Result<Self> {
        let mut hotels = Vec::new();
        let mut assignment_count = 0;

        for seed in HOTELS {
            tracing::info!("🏨 Creating {}", seed.name);
            let details = requests::HotelDetails {
                name: seed.name.into(),
                address: seed.address.into(),
                city: Some(seed.city.1.into()),
                city_id: Some(CityId(seed.city.0)),
                nit: seed.nit.into(),
                max_rooms: seed.max_rooms,
            };
            app.client.create_hotel(&details).await?;
            let hotel = app
                .client
                .list_hotels()
                .await?
                .into_iter()
                .rev()
                .find(|h| h.name == seed.name)
                .ok_or_else(|| anyhow::anyhow!("{} not listed", seed.name))?;

            for &(room_type, accommodation, quantity) in seed.rooms {
                let room = requests::HotelRoomDetails {
                    room_type_id: RoomTypeId(room_type),
                    accommodation_id: AccommodationId(accommodation),
                    quantity,
                };
                app.client.create_hotel_room(hotel.id, &room).await?;
                assignment_count += 1;
            }
            hotels.push(hotel);
        }

        Ok(Self {
            hotels,
            assignment_count,
        })
    }

    pub fn print_summary(&self) {
        tracing::info!(
            "📋 {} hotels, {} room assignments",
            self.hotels.len(),
            self.assignment_count
        );
        for hotel in &self.hotels {
            tracing::info!("   #{} {}", hotel.id, hotel.name);
        }
    }
}
