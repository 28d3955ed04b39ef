//! State behind the hotel create / edit form.

use crate::{City, Hotel, HotelId, Notice, requests::HotelDetails};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelForm {
    /// Present when editing an existing hotel. This alone decides between
    /// create and update.
    pub id: Option<HotelId>,
    pub name: String,
    pub address: String,
    pub city: Option<City>,
    pub nit: String,
    pub max_rooms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotelSubmission {
    Create(HotelDetails),
    Update(HotelId, HotelDetails),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HotelFormError {
    #[error("The hotel name is required.")]
    MissingName,
}

impl HotelFormError {
    pub fn notice(&self) -> Notice {
        Notice::warning("Validation", self.to_string())
    }
}

impl HotelForm {
    /// Prefill from an existing hotel. The city is resolved by id, or by
    /// name for records that only carry the name.
    pub fn from_hotel(hotel: &Hotel, cities: &[City]) -> Self {
        Self {
            id: Some(hotel.id),
            name: hotel.name.clone(),
            address: hotel.address.clone(),
            city: city_of(hotel, cities).cloned(),
            nit: hotel.nit.clone(),
            max_rooms: hotel.max_rooms,
        }
    }

    /// Re-resolve the city against a newly arrived catalog, leaving every
    /// other field as the user left it. A city the catalog no longer lists
    /// falls back to the hotel's own.
    pub fn refresh_city(&mut self, hotel: Option<&Hotel>, cities: &[City]) {
        let current = self
            .city
            .as_ref()
            .and_then(|city| cities.iter().find(|c| c.id == city.id));
        self.city = current
            .or_else(|| hotel.and_then(|hotel| city_of(hotel, cities)))
            .cloned();
    }

    /// Parse the max rooms input; anything unparsable counts as zero.
    pub fn set_max_rooms(&mut self, input: &str) {
        self.max_rooms = input.trim().parse().unwrap_or(0);
    }

    pub fn can_delete(&self) -> bool {
        self.id.is_some()
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn details(&self) -> HotelDetails {
        HotelDetails {
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.as_ref().map(|c| c.name.clone()),
            city_id: self.city.as_ref().map(|c| c.id),
            nit: self.nit.trim().to_string(),
            max_rooms: self.max_rooms,
        }
    }

    pub fn submission(&self) -> Result<HotelSubmission, HotelFormError> {
        if self.name.trim().is_empty() {
            return Err(HotelFormError::MissingName);
        }
        let details = self.details();
        Ok(match self.id {
            Some(id) => HotelSubmission::Update(id, details),
            None => HotelSubmission::Create(details),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn city_of<'a>(hotel: &Hotel, cities: &'a [City]) -> Option<&'a City> {
    cities
        .iter()
        .find(|c| Some(c.id) == hotel.city_id)
        .or_else(|| {
            cities
                .iter()
                .find(|c| Some(c.name.as_str()) == hotel.city.as_deref())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CityId;

    fn cities() -> Vec<City> {
        vec![
            City {
                id: CityId(1),
                name: "Bogotá".into(),
            },
            City {
                id: CityId(2),
                name: "Medellín".into(),
            },
        ]
    }

    fn hotel() -> Hotel {
        Hotel {
            id: HotelId(9),
            name: "Decameron".into(),
            address: "Calle 1".into(),
            city: Some("Medellín".into()),
            city_id: None,
            nit: "900-1".into(),
            max_rooms: 40,
        }
    }

    #[test]
    fn form_without_id_creates() {
        let form = HotelForm {
            name: "New".into(),
            city: Some(cities()[0].clone()),
            max_rooms: 5,
            ..Default::default()
        };
        assert!(!form.can_delete());
        match form.submission().unwrap() {
            HotelSubmission::Create(details) => {
                assert_eq!(details.name, "New");
                assert_eq!(details.city_id, Some(CityId(1)));
                assert_eq!(details.city.as_deref(), Some("Bogotá"));
            }
            other => panic!("expected create, got {other:?}"),
        }
    }

    #[test]
    fn form_with_id_updates() {
        let form = HotelForm::from_hotel(&hotel(), &cities());
        assert!(form.can_delete());
        assert!(matches!(
            form.submission().unwrap(),
            HotelSubmission::Update(HotelId(9), _)
        ));
    }

    #[test]
    fn prefill_resolves_city_by_name_when_id_is_missing() {
        let form = HotelForm::from_hotel(&hotel(), &cities());
        assert_eq!(form.city.map(|c| c.id), Some(CityId(2)));
    }

    #[test]
    fn prefill_prefers_city_id() {
        let mut hotel = hotel();
        hotel.city_id = Some(CityId(1));
        let form = HotelForm::from_hotel(&hotel, &cities());
        assert_eq!(form.city.map(|c| c.id), Some(CityId(1)));
    }

    #[test]
    fn blank_name_is_rejected() {
        let form = HotelForm {
            name: "   ".into(),
            ..Default::default()
        };
        assert_eq!(form.submission(), Err(HotelFormError::MissingName));
    }

    #[test]
    fn reset_clears_identifier_and_fields() {
        let mut form = HotelForm::from_hotel(&hotel(), &cities());
        form.reset();
        assert_eq!(form, HotelForm::default());
        assert!(!form.can_delete());
    }

    #[test]
    fn max_rooms_input_parsing() {
        let mut form = HotelForm::default();
        form.set_max_rooms(" 12 ");
        assert_eq!(form.max_rooms, 12);
        form.set_max_rooms("twelve");
        assert_eq!(form.max_rooms, 0);
    }

    #[test]
    fn late_catalog_keeps_typed_input_on_new_form() {
        let mut form = HotelForm {
            name: "Hilton".into(),
            address: "Carrera 7".into(),
            nit: "800-2".into(),
            max_rooms: 12,
            ..Default::default()
        };
        let typed = form.clone();

        form.refresh_city(None, &cities());

        assert_eq!(form, typed);
    }

    #[test]
    fn late_catalog_fills_city_of_edited_hotel() {
        let mut form = HotelForm::from_hotel(&hotel(), &[]);
        assert_eq!(form.city, None);
        form.name = "Decameron Caribe".into();

        form.refresh_city(Some(&hotel()), &cities());

        assert_eq!(form.city.map(|c| c.id), Some(CityId(2)));
        assert_eq!(form.name, "Decameron Caribe");
        assert_eq!(form.id, Some(HotelId(9)));
    }

    #[test]
    fn refreshed_catalog_keeps_user_chosen_city() {
        let mut form = HotelForm::from_hotel(&hotel(), &cities());
        form.city = Some(cities()[0].clone());

        form.refresh_city(Some(&hotel()), &cities());

        assert_eq!(form.city.map(|c| c.id), Some(CityId(1)));
    }
}
