//! Request sequences behind the admin screens.
//!
//! Each mutation is followed by a full re-fetch of the affected list; the
//! caller only ever displays data that came back from the server. The
//! re-fetch is issued only after the mutation succeeded.

use crate::{
    AccommodationId, AccommodationType, ClientError, Hotel, HotelApi, HotelId,
    HotelRoom, HotelRoomId, Notice, RoomType,
    accommodations::AccommodationSubmission,
    assignments::{self, AssignmentSelection},
    hotel_form::HotelSubmission,
    responses::HotelWithAssignments,
};

/// Result of a successful mutation: the notice to show, and the re-fetched
/// list (which can fail on its own).
#[derive(Debug)]
pub struct Refreshed<T> {
    pub notice: Notice,
    pub reloaded: Result<T, ClientError>,
}

impl<T> Refreshed<T> {
    /// Notice for a failed re-fetch, if it failed.
    pub fn reload_notice(&self) -> Option<Notice> {
        self.reloaded
            .as_ref()
            .err()
            .map(|e| Notice::error("Error reloading", e.user_message()))
    }
}

/// Everything the assignment manager fetches when it mounts. The three
/// requests are independent and each result is applied on its own.
#[derive(Debug)]
pub struct ManagerLoad {
    pub hotel: Result<HotelWithAssignments, ClientError>,
    pub accommodations: Result<Vec<AccommodationType>, ClientError>,
    pub room_types: Result<Vec<RoomType>, ClientError>,
}

impl ManagerLoad {
    /// A failed hotel fetch is an error; failed catalogs only warn since
    /// the assignment table is still usable without them.
    pub fn notices(&self) -> Vec<Notice> {
        let mut notices = Vec::new();
        if let Err(e) = &self.hotel {
            notices.push(Notice::error("Error", e.user_message()));
        }
        if let Err(e) = &self.accommodations {
            notices.push(Notice::warning("Catalog", e.user_message()));
        }
        if let Err(e) = &self.room_types {
            notices.push(Notice::warning("Catalog", e.user_message()));
        }
        notices
    }
}

pub async fn load_assignment_manager<A: HotelApi>(
    api: &A,
    hotel_id: HotelId,
) -> ManagerLoad {
    let (hotel, accommodations, room_types) = futures::join!(
        api.get_hotel_assignments(hotel_id),
        api.list_accommodations(),
        api.list_room_types(),
    );
    ManagerLoad {
        hotel,
        accommodations,
        room_types,
    }
}

pub async fn reload_assignments<A: HotelApi>(
    api: &A,
    hotel_id: HotelId,
) -> Result<Vec<HotelRoom>, ClientError> {
    api.get_hotel_assignments(hotel_id)
        .await
        .map(|response| response.accommodations)
}

/// Create or update the selected assignment, then re-fetch the list.
///
/// `existing` must be the list currently on screen; it decides between
/// create and update. An incomplete selection fails without any request.
#[tracing::instrument(skip(api, existing))]
pub async fn save_assignment<A: HotelApi>(
    api: &A,
    hotel_id: HotelId,
    existing: &[HotelRoom],
    selection: &AssignmentSelection,
) -> Result<Refreshed<Vec<HotelRoom>>, Notice> {
    let plan =
        assignments::plan_save(existing, selection).map_err(|e| e.notice())?;

    let result = match &plan {
        assignments::SavePlan::Create(details) => {
            api.create_hotel_room(hotel_id, details).await
        }
        assignments::SavePlan::Update { room_id, details } => {
            api.update_hotel_room(hotel_id, *room_id, details).await
        }
    };
    if let Err(e) = result {
        tracing::warn!("Saving assignment failed: {e}");
        return Err(Notice::error("Error saving", e.user_message()));
    }
    tracing::debug!(update = plan.is_update(), "Saved assignment");

    Ok(Refreshed {
        notice: Notice::success("Success", plan.success_message()),
        reloaded: reload_assignments(api, hotel_id).await,
    })
}

#[tracing::instrument(skip(api))]
pub async fn delete_assignment<A: HotelApi>(
    api: &A,
    hotel_id: HotelId,
    room_id: HotelRoomId,
) -> Result<Refreshed<Vec<HotelRoom>>, Notice> {
    if let Err(e) = api.delete_hotel_room(hotel_id, room_id).await {
        tracing::warn!("Deleting assignment failed: {e}");
        return Err(Notice::error("Error deleting", e.user_message()));
    }

    Ok(Refreshed {
        notice: Notice::info("Deleted", "Assignment removed."),
        reloaded: reload_assignments(api, hotel_id).await,
    })
}

#[tracing::instrument(skip(api))]
pub async fn submit_hotel<A: HotelApi>(
    api: &A,
    submission: &HotelSubmission,
) -> Result<Refreshed<Vec<Hotel>>, Notice> {
    let (result, message) = match submission {
        HotelSubmission::Create(details) => {
            (api.create_hotel(details).await, "Hotel created.")
        }
        HotelSubmission::Update(hotel_id, details) => {
            (api.update_hotel(*hotel_id, details).await, "Hotel updated.")
        }
    };
    if let Err(e) = result {
        tracing::warn!("Saving hotel failed: {e}");
        return Err(Notice::error("Error saving", e.user_message()));
    }

    Ok(Refreshed {
        notice: Notice::success("Success", message),
        reloaded: api.list_hotels().await,
    })
}

#[tracing::instrument(skip(api))]
pub async fn delete_hotel<A: HotelApi>(
    api: &A,
    hotel_id: HotelId,
) -> Result<Refreshed<Vec<Hotel>>, Notice> {
    if let Err(e) = api.delete_hotel(hotel_id).await {
        tracing::warn!("Deleting hotel failed: {e}");
        return Err(Notice::error("Error deleting", e.user_message()));
    }

    Ok(Refreshed {
        notice: Notice::info("Deleted", "Hotel removed."),
        reloaded: api.list_hotels().await,
    })
}

#[tracing::instrument(skip(api))]
pub async fn submit_accommodation<A: HotelApi>(
    api: &A,
    submission: &AccommodationSubmission,
) -> Result<Refreshed<Vec<AccommodationType>>, Notice> {
    let (result, message) = match submission {
        AccommodationSubmission::Create(details) => (
            api.create_accommodation(details).await,
            "Accommodation created.",
        ),
        AccommodationSubmission::Update(id, details) => (
            api.update_accommodation(*id, details).await,
            "Accommodation updated.",
        ),
    };
    if let Err(e) = result {
        tracing::warn!("Saving accommodation failed: {e}");
        return Err(Notice::error("Error saving", e.user_message()));
    }

    Ok(Refreshed {
        notice: Notice::success("Success", message),
        reloaded: api.list_accommodations().await,
    })
}

#[tracing::instrument(skip(api))]
pub async fn delete_accommodation<A: HotelApi>(
    api: &A,
    accommodation_id: AccommodationId,
) -> Result<Refreshed<Vec<AccommodationType>>, Notice> {
    if let Err(e) = api.delete_accommodation(accommodation_id).await {
        tracing::warn!("Deleting accommodation failed: {e}");
        return Err(Notice::error("Error deleting", e.user_message()));
    }

    Ok(Refreshed {
        notice: Notice::info("Deleted", "Accommodation removed."),
        reloaded: api.list_accommodations().await,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        City, RoomTypeId, Severity,
        requests::{AccommodationDetails, HotelDetails, HotelRoomDetails},
    };
    use futures::executor::block_on;
    use reqwest::StatusCode;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        ListHotels,
        CreateHotel(HotelDetails),
        UpdateHotel(HotelId, HotelDetails),
        DeleteHotel(HotelId),
        GetHotelAssignments(HotelId),
        CreateHotelRoom(HotelId, HotelRoomDetails),
        UpdateHotelRoom(HotelId, HotelRoomId, HotelRoomDetails),
        DeleteHotelRoom(HotelId, HotelRoomId),
        ListAccommodations,
        CreateAccommodation(AccommodationDetails),
        DeleteAccommodation(AccommodationId),
        ListRoomTypes,
        Other,
    }

    /// Records every call. Mutations don't touch `rooms`; tests set the
    /// list the next fetch returns directly.
    #[derive(Default)]
    struct FakeApi {
        calls: RefCell<Vec<Call>>,
        hotels: RefCell<Vec<Hotel>>,
        rooms: RefCell<Vec<HotelRoom>>,
        accommodations: Vec<AccommodationType>,
        room_types: Vec<RoomType>,
        /// Body of the error every mutation returns, if set.
        fail_mutations: Option<String>,
        fail_room_types: Cell<bool>,
    }

    impl FakeApi {
        fn record(&self, call: Call) {
            self.calls.borrow_mut().push(call);
        }

        fn mutation(&self, call: Call) -> Result<(), ClientError> {
            self.record(call);
            match &self.fail_mutations {
                Some(body) => Err(ClientError::APIError(
                    StatusCode::BAD_REQUEST,
                    body.clone(),
                )),
                None => Ok(()),
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl HotelApi for FakeApi {
        async fn list_hotels(&self) -> Result<Vec<Hotel>, ClientError> {
            self.record(Call::ListHotels);
            Ok(self.hotels.borrow().clone())
        }

        async fn get_hotel(
            &self,
            hotel_id: HotelId,
        ) -> Result<Hotel, ClientError> {
            self.record(Call::Other);
            Ok(hotel(hotel_id))
        }

        async fn create_hotel(
            &self,
            details: &HotelDetails,
        ) -> Result<(), ClientError> {
            self.mutation(Call::CreateHotel(details.clone()))
        }

        async fn update_hotel(
            &self,
            hotel_id: HotelId,
            details: &HotelDetails,
        ) -> Result<(), ClientError> {
            self.mutation(Call::UpdateHotel(hotel_id, details.clone()))
        }

        async fn delete_hotel(
            &self,
            hotel_id: HotelId,
        ) -> Result<(), ClientError> {
            self.mutation(Call::DeleteHotel(hotel_id))
        }

        async fn get_hotel_assignments(
            &self,
            hotel_id: HotelId,
        ) -> Result<HotelWithAssignments, ClientError> {
            self.record(Call::GetHotelAssignments(hotel_id));
            Ok(HotelWithAssignments {
                hotel: hotel(hotel_id),
                accommodations: self.rooms.borrow().clone(),
            })
        }

        async fn list_hotel_rooms(
            &self,
            _hotel_id: HotelId,
        ) -> Result<Vec<HotelRoom>, ClientError> {
            self.record(Call::Other);
            Ok(self.rooms.borrow().clone())
        }

        async fn create_hotel_room(
            &self,
            hotel_id: HotelId,
            details: &HotelRoomDetails,
        ) -> Result<(), ClientError> {
            self.mutation(Call::CreateHotelRoom(hotel_id, details.clone()))
        }

        async fn update_hotel_room(
            &self,
            hotel_id: HotelId,
            room_id: HotelRoomId,
            details: &HotelRoomDetails,
        ) -> Result<(), ClientError> {
            self.mutation(Call::UpdateHotelRoom(
                hotel_id,
                room_id,
                details.clone(),
            ))
        }

        async fn delete_hotel_room(
            &self,
            hotel_id: HotelId,
            room_id: HotelRoomId,
        ) -> Result<(), ClientError> {
            self.mutation(Call::DeleteHotelRoom(hotel_id, room_id))
        }

        async fn list_accommodations(
            &self,
        ) -> Result<Vec<AccommodationType>, ClientError> {
            self.record(Call::ListAccommodations);
            Ok(self.accommodations.clone())
        }

        async fn create_accommodation(
            &self,
            details: &AccommodationDetails,
        ) -> Result<(), ClientError> {
            self.mutation(Call::CreateAccommodation(details.clone()))
        }

        async fn update_accommodation(
            &self,
            _accommodation_id: AccommodationId,
            _details: &AccommodationDetails,
        ) -> Result<(), ClientError> {
            self.mutation(Call::Other)
        }

        async fn delete_accommodation(
            &self,
            accommodation_id: AccommodationId,
        ) -> Result<(), ClientError> {
            self.mutation(Call::DeleteAccommodation(accommodation_id))
        }

        async fn list_room_types(&self) -> Result<Vec<RoomType>, ClientError> {
            self.record(Call::ListRoomTypes);
            if self.fail_room_types.get() {
                return Err(ClientError::APIError(
                    StatusCode::SERVICE_UNAVAILABLE,
                    String::new(),
                ));
            }
            Ok(self.room_types.clone())
        }

        async fn list_cities(&self) -> Result<Vec<City>, ClientError> {
            self.record(Call::Other);
            Ok(vec![])
        }
    }

    const HOTEL: HotelId = HotelId(3);

    fn hotel(id: HotelId) -> Hotel {
        Hotel {
            id,
            name: "Casa Blanca".into(),
            address: "Carrera 7".into(),
            city: Some("Cartagena".into()),
            city_id: None,
            nit: "800-5".into(),
            max_rooms: 20,
        }
    }

    fn double() -> RoomType {
        RoomType {
            id: RoomTypeId(1),
            name: "Double".into(),
        }
    }

    fn king() -> AccommodationType {
        AccommodationType {
            id: AccommodationId(5),
            name: "King".into(),
            description: None,
        }
    }

    fn fake() -> FakeApi {
        FakeApi {
            accommodations: vec![king()],
            room_types: vec![double()],
            ..Default::default()
        }
    }

    fn selection(quantity: Option<u32>) -> AssignmentSelection {
        AssignmentSelection {
            room_type: Some(double()),
            accommodation: Some(king()),
            quantity,
        }
    }

    fn assignment(id: i64, quantity: u32) -> HotelRoom {
        HotelRoom {
            id: HotelRoomId(id),
            room_type: double(),
            accommodation: king(),
            quantity,
        }
    }

    #[test]
    fn initial_load_fetches_hotel_and_both_catalogs() {
        let api = fake();
        let load = block_on(load_assignment_manager(&api, HOTEL));

        assert_eq!(load.hotel.unwrap().hotel.id, HOTEL);
        assert_eq!(load.accommodations.unwrap(), vec![king()]);
        assert_eq!(load.room_types.unwrap(), vec![double()]);
        let calls = api.calls();
        assert_eq!(calls.len(), 3);
        assert!(calls.contains(&Call::GetHotelAssignments(HOTEL)));
        assert!(calls.contains(&Call::ListAccommodations));
        assert!(calls.contains(&Call::ListRoomTypes));
    }

    #[test]
    fn failed_catalog_only_warns() {
        let api = fake();
        api.fail_room_types.set(true);
        let load = block_on(load_assignment_manager(&api, HOTEL));

        assert!(load.hotel.is_ok());
        let notices = load.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].severity, Severity::Warning);
    }

    #[test]
    fn incomplete_selection_issues_no_request() {
        let api = fake();
        for incomplete in [
            AssignmentSelection::default(),
            selection(None),
            AssignmentSelection {
                room_type: None,
                ..selection(Some(2))
            },
            AssignmentSelection {
                accommodation: None,
                ..selection(Some(2))
            },
        ] {
            let notice =
                block_on(save_assignment(&api, HOTEL, &[], &incomplete))
                    .unwrap_err();
            assert_eq!(notice.severity, Severity::Warning);
            assert_eq!(notice.detail, "All fields are required.");
        }
        assert!(api.calls().is_empty());
    }

    #[test]
    fn new_pair_is_created_and_list_refetched() {
        let api = fake();
        *api.rooms.borrow_mut() = vec![assignment(77, 3)];

        let refreshed =
            block_on(save_assignment(&api, HOTEL, &[], &selection(Some(3))))
                .unwrap();

        assert_eq!(
            api.calls(),
            vec![
                Call::CreateHotelRoom(
                    HOTEL,
                    HotelRoomDetails {
                        room_type_id: RoomTypeId(1),
                        accommodation_id: AccommodationId(5),
                        quantity: 3,
                    }
                ),
                Call::GetHotelAssignments(HOTEL),
            ]
        );
        assert_eq!(refreshed.notice.severity, Severity::Success);
        assert_eq!(refreshed.notice.detail, "Assignment created.");
        // the list comes from the fetch, not from the local input
        assert_eq!(refreshed.reloaded.unwrap(), vec![assignment(77, 3)]);
    }

    #[test]
    fn existing_pair_is_updated_by_id() {
        let api = fake();
        let existing = vec![assignment(42, 1)];
        *api.rooms.borrow_mut() = vec![assignment(42, 3)];

        let refreshed = block_on(save_assignment(
            &api,
            HOTEL,
            &existing,
            &selection(Some(3)),
        ))
        .unwrap();

        assert_eq!(
            api.calls()[0],
            Call::UpdateHotelRoom(
                HOTEL,
                HotelRoomId(42),
                HotelRoomDetails {
                    room_type_id: RoomTypeId(1),
                    accommodation_id: AccommodationId(5),
                    quantity: 3,
                }
            )
        );
        assert_eq!(refreshed.notice.detail, "Assignment updated.");
        assert_eq!(refreshed.reloaded.unwrap()[0].quantity, 3);
    }

    #[test]
    fn failed_save_surfaces_server_message_and_skips_reload() {
        let api = FakeApi {
            fail_mutations: Some(r#"{"message":"Quantity too large"}"#.into()),
            ..fake()
        };

        let notice =
            block_on(save_assignment(&api, HOTEL, &[], &selection(Some(99))))
                .unwrap_err();

        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.detail, "Quantity too large");
        assert_eq!(api.calls().len(), 1);
    }

    #[test]
    fn delete_refetches_on_success_only() {
        let api = fake();
        let refreshed =
            block_on(delete_assignment(&api, HOTEL, HotelRoomId(42))).unwrap();
        assert_eq!(refreshed.notice.severity, Severity::Info);
        assert_eq!(
            api.calls(),
            vec![
                Call::DeleteHotelRoom(HOTEL, HotelRoomId(42)),
                Call::GetHotelAssignments(HOTEL),
            ]
        );

        let failing = FakeApi {
            fail_mutations: Some("gone".into()),
            ..fake()
        };
        let notice =
            block_on(delete_assignment(&failing, HOTEL, HotelRoomId(42)))
                .unwrap_err();
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(failing.calls().len(), 1);
    }

    #[test]
    fn hotel_submission_dispatches_on_identifier() {
        let api = fake();
        *api.hotels.borrow_mut() = vec![hotel(HOTEL)];
        let details = HotelDetails {
            name: "Casa Blanca".into(),
            address: "Carrera 7".into(),
            city: None,
            city_id: None,
            nit: "800-5".into(),
            max_rooms: 20,
        };

        let created = block_on(submit_hotel(
            &api,
            &HotelSubmission::Create(details.clone()),
        ))
        .unwrap();
        assert_eq!(created.reloaded.unwrap().len(), 1);

        block_on(submit_hotel(
            &api,
            &HotelSubmission::Update(HOTEL, details.clone()),
        ))
        .unwrap();

        assert_eq!(
            api.calls(),
            vec![
                Call::CreateHotel(details.clone()),
                Call::ListHotels,
                Call::UpdateHotel(HOTEL, details),
                Call::ListHotels,
            ]
        );
    }

    #[test]
    fn hotel_delete_reloads_list() {
        let api = fake();
        block_on(delete_hotel(&api, HOTEL)).unwrap();
        assert_eq!(
            api.calls(),
            vec![Call::DeleteHotel(HOTEL), Call::ListHotels]
        );
    }

    #[test]
    fn accommodation_catalog_mutations_reload_catalog() {
        let api = fake();
        let details = AccommodationDetails {
            name: "Queen".into(),
            description: None,
        };
        let refreshed = block_on(submit_accommodation(
            &api,
            &AccommodationSubmission::Create(details.clone()),
        ))
        .unwrap();
        assert_eq!(refreshed.reloaded.unwrap(), vec![king()]);

        block_on(delete_accommodation(&api, AccommodationId(5))).unwrap();
        assert_eq!(
            api.calls(),
            vec![
                Call::CreateAccommodation(details),
                Call::ListAccommodations,
                Call::DeleteAccommodation(AccommodationId(5)),
                Call::ListAccommodations,
            ]
        );
    }

    #[test]
    fn reload_failure_is_reported_separately() {
        let refreshed: Refreshed<Vec<Hotel>> = Refreshed {
            notice: Notice::success("Success", "Hotel created."),
            reloaded: Err(ClientError::APIError(
                StatusCode::BAD_GATEWAY,
                String::new(),
            )),
        };
        let notice = refreshed.reload_notice().unwrap();
        assert_eq!(notice.severity, Severity::Error);
    }
}
