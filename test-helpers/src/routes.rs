use std::sync::{Mutex, MutexGuard};

use actix_web::{
    HttpResponse, ResponseError, delete, dev::HttpServiceFactory, get,
    http::StatusCode, post, put, web,
};
use payloads::{
    AccommodationId, HotelId, HotelRoomId, requests, responses::ErrorMessage,
};

use crate::store::{Store, StoreError};

pub type SharedStore = web::Data<Mutex<Store>>;

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("/api")
        .service(health_check)
        .service(list_hotels)
        .service(create_hotel)
        .service(get_hotel)
        .service(update_hotel)
        .service(delete_hotel)
        .service(get_hotel_assignments)
        .service(list_hotel_rooms)
        .service(create_hotel_room)
        .service(update_hotel_room)
        .service(delete_hotel_room)
        .service(list_accommodations)
        .service(create_accommodation)
        .service(update_accommodation)
        .service(delete_accommodation)
        .service(list_room_types)
        .service(list_cities)
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Bad request: {0}")]
    BadRequest(#[source] StoreError),
    #[error("Not found: {0}")]
    NotFound(#[source] StoreError),
    #[error("Conflict: {0}")]
    Conflict(#[source] StoreError),
    #[error("Something went wrong")]
    Poisoned,
}

impl ResponseError for APIError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Poisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            Self::BadRequest(e) | Self::NotFound(e) | Self::Conflict(e) => {
                e.to_string()
            }
            Self::Poisoned => self.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorMessage { message })
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::HotelNotFound
            | StoreError::RoomNotFound
            | StoreError::AccommodationNotFound => APIError::NotFound(e),
            StoreError::RoomTypeNotFound
            | StoreError::InvalidQuantity
            | StoreError::MissingName => APIError::BadRequest(e),
            StoreError::AccommodationInUse => APIError::Conflict(e),
        }
    }
}

fn lock(store: &SharedStore) -> Result<MutexGuard<'_, Store>, APIError> {
    store.lock().map_err(|_| APIError::Poisoned)
}

#[get("/health_check")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().body("healthy")
}

#[tracing::instrument(skip(store))]
#[get("/hotels")]
pub async fn list_hotels(store: SharedStore) -> Result<HttpResponse, APIError> {
    Ok(HttpResponse::Ok().json(lock(&store)?.list_hotels()))
}

#[tracing::instrument(skip(store), ret)]
#[post("/hotels")]
pub async fn create_hotel(
    details: web::Json<requests::HotelDetails>,
    store: SharedStore,
) -> Result<HttpResponse, APIError> {
    let hotel = lock(&store)?.create_hotel(&details)?;
    Ok(HttpResponse::Created().json(hotel))
}

#[tracing::instrument(skip(store))]
#[get("/hotels/{hotel_id}")]
pub async fn get_hotel(
    path: web::Path<HotelId>,
    store: SharedStore,
) -> Result<HttpResponse, APIError> {
    let hotel = lock(&store)?.get_hotel(path.into_inner())?;
    Ok(HttpResponse::Ok().json(hotel))
}

#[tracing::instrument(skip(store), ret)]
#[put("/hotels/{hotel_id}")]
pub async fn update_hotel(
    path: web::Path<HotelId>,
    details: web::Json<requests::HotelDetails>,
    store: SharedStore,
) -> Result<HttpResponse, APIError> {
    let hotel = lock(&store)?.update_hotel(path.into_inner(), &details)?;
    Ok(HttpResponse::Ok().json(hotel))
}

#[tracing::instrument(skip(store), ret)]
#[delete("/hotels/{hotel_id}")]
pub async fn delete_hotel(
    path: web::Path<HotelId>,
    store: SharedStore,
) -> Result<HttpResponse, APIError> {
    lock(&store)?.delete_hotel(path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

#[tracing::instrument(skip(store))]
#[get("/hotels/{hotel_id}/accommodations")]
pub async fn get_hotel_assignments(
    path: web::Path<HotelId>,
    store: SharedStore,
) -> Result<HttpResponse, APIError> {
    let response = lock(&store)?.hotel_with_assignments(path.into_inner())?;
    Ok(HttpResponse::Ok().json(response))
}

#[tracing::instrument(skip(store))]
#[get("/hotels/{hotel_id}/rooms")]
pub async fn list_hotel_rooms(
    path: web::Path<HotelId>,
    store: SharedStore,
) -> Result<HttpResponse, APIError> {
    let rooms = lock(&store)?.list_hotel_rooms(path.into_inner())?;
    Ok(HttpResponse::Ok().json(rooms))
}

#[tracing::instrument(skip(store), ret)]
#[post("/hotels/{hotel_id}/rooms")]
pub async fn create_hotel_room(
    path: web::Path<HotelId>,
    details: web::Json<requests::HotelRoomDetails>,
    store: SharedStore,
) -> Result<HttpResponse, APIError> {
    let room = lock(&store)?.create_hotel_room(path.into_inner(), &details)?;
    Ok(HttpResponse::Created().json(room))
}

#[tracing::instrument(skip(store), ret)]
#[put("/hotels/{hotel_id}/rooms/{room_id}")]
pub async fn update_hotel_room(
    path: web::Path<(HotelId, HotelRoomId)>,
    details: web::Json<requests::HotelRoomDetails>,
    store: SharedStore,
) -> Result<HttpResponse, APIError> {
    let (hotel_id, room_id) = path.into_inner();
    let room = lock(&store)?.update_hotel_room(hotel_id, room_id, &details)?;
    Ok(HttpResponse::Ok().json(room))
}

#[tracing::instrument(skip(store), ret)]
#[delete("/hotels/{hotel_id}/rooms/{room_id}")]
pub async fn delete_hotel_room(
    path: web::Path<(HotelId, HotelRoomId)>,
    store: SharedStore,
) -> Result<HttpResponse, APIError> {
    let (hotel_id, room_id) = path.into_inner();
    lock(&store)?.delete_hotel_room(hotel_id, room_id)?;
    Ok(HttpResponse::NoContent().finish())
}

#[tracing::instrument(skip(store))]
#[get("/accommodations")]
pub async fn list_accommodations(
    store: SharedStore,
) -> Result<HttpResponse, APIError> {
    Ok(HttpResponse::Ok().json(lock(&store)?.list_accommodations()))
}

#[tracing::instrument(skip(store), ret)]
#[post("/accommodations")]
pub async fn create_accommodation(
    details: web::Json<requests::AccommodationDetails>,
    store: SharedStore,
) -> Result<HttpResponse, APIError> {
    let accommodation = lock(&store)?.create_accommodation(&details)?;
    Ok(HttpResponse::Created().json(accommodation))
}

#[tracing::instrument(skip(store), ret)]
#[put("/accommodations/{accommodation_id}")]
pub async fn update_accommodation(
    path: web::Path<AccommodationId>,
    details: web::Json<requests::AccommodationDetails>,
    store: SharedStore,
) -> Result<HttpResponse, APIError> {
    let accommodation =
        lock(&store)?.update_accommodation(path.into_inner(), &details)?;
    Ok(HttpResponse::Ok().json(accommodation))
}

#[tracing::instrument(skip(store), ret)]
#[delete("/accommodations/{accommodation_id}")]
pub async fn delete_accommodation(
    path: web::Path<AccommodationId>,
    store: SharedStore,
) -> Result<HttpResponse, APIError> {
    lock(&store)?.delete_accommodation(path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

#[tracing::instrument(skip(store))]
#[get("/room-types")]
pub async fn list_room_types(
    store: SharedStore,
) -> Result<HttpResponse, APIError> {
    Ok(HttpResponse::Ok().json(lock(&store)?.list_room_types()))
}

#[tracing::instrument(skip(store))]
#[get("/cities")]
pub async fn list_cities(store: SharedStore) -> Result<HttpResponse, APIError> {
    Ok(HttpResponse::Ok().json(lock(&store)?.list_cities()))
}
