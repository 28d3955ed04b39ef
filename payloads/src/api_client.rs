use crate::{
    AccommodationId, AccommodationType, City, Hotel, HotelId, HotelRoom,
    HotelRoomId, RoomType, requests, responses,
};
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// Base URL of the production backend, used when no other address is
/// configured at build time.
pub const DEFAULT_BACKEND_URL: &str = "https://api-hotel-01nz.onrender.com/api";

/// The REST endpoints of the hotel inventory backend, one method each.
///
/// [`APIClient`] is the real implementation; the workflows in
/// [`crate::workflows`] are generic over this trait so tests can substitute
/// an in-memory fake.
#[allow(async_fn_in_trait)]
pub trait HotelApi {
    async fn list_hotels(&self) -> Result<Vec<Hotel>, ClientError>;

    async fn get_hotel(&self, hotel_id: HotelId) -> Result<Hotel, ClientError>;

    async fn create_hotel(
        &self,
        details: &requests::HotelDetails,
    ) -> Result<(), ClientError>;

    async fn update_hotel(
        &self,
        hotel_id: HotelId,
        details: &requests::HotelDetails,
    ) -> Result<(), ClientError>;

    async fn delete_hotel(&self, hotel_id: HotelId) -> Result<(), ClientError>;

    /// The hotel record together with its room assignments.
    async fn get_hotel_assignments(
        &self,
        hotel_id: HotelId,
    ) -> Result<responses::HotelWithAssignments, ClientError>;

    async fn list_hotel_rooms(
        &self,
        hotel_id: HotelId,
    ) -> Result<Vec<HotelRoom>, ClientError>;

    async fn create_hotel_room(
        &self,
        hotel_id: HotelId,
        details: &requests::HotelRoomDetails,
    ) -> Result<(), ClientError>;

    async fn update_hotel_room(
        &self,
        hotel_id: HotelId,
        room_id: HotelRoomId,
        details: &requests::HotelRoomDetails,
    ) -> Result<(), ClientError>;

    async fn delete_hotel_room(
        &self,
        hotel_id: HotelId,
        room_id: HotelRoomId,
    ) -> Result<(), ClientError>;

    async fn list_accommodations(
        &self,
    ) -> Result<Vec<AccommodationType>, ClientError>;

    async fn create_accommodation(
        &self,
        details: &requests::AccommodationDetails,
    ) -> Result<(), ClientError>;

    async fn update_accommodation(
        &self,
        accommodation_id: AccommodationId,
        details: &requests::AccommodationDetails,
    ) -> Result<(), ClientError>;

    async fn delete_accommodation(
        &self,
        accommodation_id: AccommodationId,
    ) -> Result<(), ClientError>;

    async fn list_room_types(&self) -> Result<Vec<RoomType>, ClientError>;

    async fn list_cities(&self) -> Result<Vec<City>, ClientError>;
}

/// An API client for interfacing with the backend.
#[derive(Debug, Clone)]
pub struct APIClient {
    /// Base URL including any path prefix, e.g. `http://127.0.0.1:8000/api`.
    pub address: String,
    pub inner_client: reqwest::Client,
}

impl PartialEq for APIClient {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl APIClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
        }
    }
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/{path}", self.address.trim_end_matches('/'))
    }

    async fn get(&self, path: &str) -> ReqwestResult {
        self.inner_client
            .get(self.format_url(path))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.inner_client
            .post(self.format_url(path))
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await
    }

    async fn put(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.inner_client
            .put(self.format_url(path))
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await
    }

    async fn delete(&self, path: &str) -> ReqwestResult {
        self.inner_client
            .delete(self.format_url(path))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
    }
}

/// Methods on the backend API
impl HotelApi for APIClient {
    async fn list_hotels(&self) -> Result<Vec<Hotel>, ClientError> {
        let response = self.get("hotels").await?;
        ok_body(response).await
    }

    async fn get_hotel(&self, hotel_id: HotelId) -> Result<Hotel, ClientError> {
        let response = self.get(&format!("hotels/{hotel_id}")).await?;
        ok_body(response).await
    }

    async fn create_hotel(
        &self,
        details: &requests::HotelDetails,
    ) -> Result<(), ClientError> {
        let response = self.post("hotels", details).await?;
        ok_empty(response).await
    }

    async fn update_hotel(
        &self,
        hotel_id: HotelId,
        details: &requests::HotelDetails,
    ) -> Result<(), ClientError> {
        let response = self.put(&format!("hotels/{hotel_id}"), details).await?;
        ok_empty(response).await
    }

    async fn delete_hotel(&self, hotel_id: HotelId) -> Result<(), ClientError> {
        let response = self.delete(&format!("hotels/{hotel_id}")).await?;
        ok_empty(response).await
    }

    async fn get_hotel_assignments(
        &self,
        hotel_id: HotelId,
    ) -> Result<responses::HotelWithAssignments, ClientError> {
        let response =
            self.get(&format!("hotels/{hotel_id}/accommodations")).await?;
        ok_body(response).await
    }

    async fn list_hotel_rooms(
        &self,
        hotel_id: HotelId,
    ) -> Result<Vec<HotelRoom>, ClientError> {
        let response = self.get(&format!("hotels/{hotel_id}/rooms")).await?;
        ok_body(response).await
    }

    async fn create_hotel_room(
        &self,
        hotel_id: HotelId,
        details: &requests::HotelRoomDetails,
    ) -> Result<(), ClientError> {
        let response =
            self.post(&format!("hotels/{hotel_id}/rooms"), details).await?;
        ok_empty(response).await
    }

    async fn update_hotel_room(
        &self,
        hotel_id: HotelId,
        room_id: HotelRoomId,
        details: &requests::HotelRoomDetails,
    ) -> Result<(), ClientError> {
        let response = self
            .put(&format!("hotels/{hotel_id}/rooms/{room_id}"), details)
            .await?;
        ok_empty(response).await
    }

    async fn delete_hotel_room(
        &self,
        hotel_id: HotelId,
        room_id: HotelRoomId,
    ) -> Result<(), ClientError> {
        let response = self
            .delete(&format!("hotels/{hotel_id}/rooms/{room_id}"))
            .await?;
        ok_empty(response).await
    }

    async fn list_accommodations(
        &self,
    ) -> Result<Vec<AccommodationType>, ClientError> {
        let response = self.get("accommodations").await?;
        ok_body(response).await
    }

    async fn create_accommodation(
        &self,
        details: &requests::AccommodationDetails,
    ) -> Result<(), ClientError> {
        let response = self.post("accommodations", details).await?;
        ok_empty(response).await
    }

    async fn update_accommodation(
        &self,
        accommodation_id: AccommodationId,
        details: &requests::AccommodationDetails,
    ) -> Result<(), ClientError> {
        let response = self
            .put(&format!("accommodations/{accommodation_id}"), details)
            .await?;
        ok_empty(response).await
    }

    async fn delete_accommodation(
        &self,
        accommodation_id: AccommodationId,
    ) -> Result<(), ClientError> {
        let response = self
            .delete(&format!("accommodations/{accommodation_id}"))
            .await?;
        ok_empty(response).await
    }

    async fn list_room_types(&self) -> Result<Vec<RoomType>, ClientError> {
        let response = self.get("room-types").await?;
        ok_body(response).await
    }

    async fn list_cities(&self) -> Result<Vec<City>, ClientError> {
        let response = self.get("cities").await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("Request failed with status {0}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    /// The message the server put in its error body, if it sent one.
    pub fn server_message(&self) -> Option<String> {
        match self {
            Self::APIError(_, body) => {
                serde_json::from_str::<responses::ErrorMessage>(body)
                    .ok()
                    .map(|e| e.message)
                    .filter(|m| !m.trim().is_empty())
            }
            Self::Network(_) => None,
        }
    }

    /// Text to show the user: the server's own message when present,
    /// otherwise a generic description of the failure.
    pub fn user_message(&self) -> String {
        self.server_message().unwrap_or_else(|| self.to_string())
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::APIError(status, _) => Some(*status),
            Self::Network(e) => e.status(),
        }
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that a response is OK, returning a ClientError if not. The body of
/// a successful response is ignored.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_preferred() {
        let err = ClientError::APIError(
            StatusCode::CONFLICT,
            r#"{"message":"Assignment already exists"}"#.into(),
        );
        assert_eq!(err.user_message(), "Assignment already exists");
    }

    #[test]
    fn error_key_is_accepted() {
        let err = ClientError::APIError(
            StatusCode::NOT_FOUND,
            r#"{"error":"Hotel not found"}"#.into(),
        );
        assert_eq!(err.server_message().as_deref(), Some("Hotel not found"));
    }

    #[test]
    fn falls_back_to_generic_message() {
        let err = ClientError::APIError(
            StatusCode::INTERNAL_SERVER_ERROR,
            "<html>oops</html>".into(),
        );
        assert_eq!(err.server_message(), None);
        assert_eq!(
            err.user_message(),
            "Request failed with status 500 Internal Server Error"
        );

        let blank = ClientError::APIError(
            StatusCode::BAD_REQUEST,
            r#"{"message":"  "}"#.into(),
        );
        assert_eq!(blank.server_message(), None);
    }

    #[test]
    fn urls_join_without_double_slashes() {
        let client = APIClient::new("http://localhost:8000/api/");
        assert_eq!(
            client.format_url("hotels/3/rooms"),
            "http://localhost:8000/api/hotels/3/rooms"
        );
    }
}
