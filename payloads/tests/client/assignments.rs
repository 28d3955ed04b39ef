use payloads::{
    HotelApi, HotelId, Severity,
    assignments::AssignmentSelection,
    workflows::{self, ManagerLoad},
};
use reqwest::StatusCode;
use test_helpers::{assert_status_code, double_king, spawn_app};

fn selection_from(load: &ManagerLoad, quantity: u32) -> AssignmentSelection {
    let room_types = load.room_types.as_ref().unwrap();
    let accommodations = load.accommodations.as_ref().unwrap();
    AssignmentSelection {
        room_type: room_types.iter().find(|rt| rt.name == "Double").cloned(),
        accommodation: accommodations
            .iter()
            .find(|a| a.name == "King")
            .cloned(),
        quantity: Some(quantity),
    }
}

#[tokio::test]
async fn manager_load_returns_hotel_and_catalogs() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let hotel = app.create_test_hotel().await?;

    let load = workflows::load_assignment_manager(&app.client, hotel.id).await;
    assert!(load.notices().is_empty());
    let loaded = load.hotel?;
    assert_eq!(loaded.hotel, hotel);
    assert!(loaded.accommodations.is_empty());
    assert_eq!(load.room_types?.len(), 3);
    assert_eq!(load.accommodations?.len(), 3);

    Ok(())
}

#[tokio::test]
async fn unknown_hotel_fails_only_the_hotel_fetch() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let load =
        workflows::load_assignment_manager(&app.client, HotelId(999)).await;
    assert!(load.hotel.is_err());
    assert!(load.room_types.is_ok());
    assert!(load.accommodations.is_ok());
    let notices = load.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].severity, Severity::Error);
    assert_eq!(notices[0].detail, "Hotel not found");

    Ok(())
}

#[tokio::test]
async fn save_creates_then_updates_the_same_pair() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let hotel = app.create_test_hotel().await?;
    let load = workflows::load_assignment_manager(&app.client, hotel.id).await;

    let created = workflows::save_assignment(
        &app.client,
        hotel.id,
        &[],
        &selection_from(&load, 3),
    )
    .await
    .map_err(|n| anyhow::anyhow!(n.text()))?;
    assert_eq!(created.notice.detail, "Assignment created.");
    let rooms = created.reloaded?;
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].quantity, 3);
    assert_eq!(rooms[0].room_type.name, "Double");
    assert_eq!(rooms[0].accommodation.name, "King");

    let updated = workflows::save_assignment(
        &app.client,
        hotel.id,
        &rooms,
        &selection_from(&load, 7),
    )
    .await
    .map_err(|n| anyhow::anyhow!(n.text()))?;
    assert_eq!(updated.notice.detail, "Assignment updated.");
    let after = updated.reloaded?;
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].id, rooms[0].id);
    assert_eq!(after[0].quantity, 7);

    Ok(())
}

#[tokio::test]
async fn backend_accepts_duplicate_pairs() -> anyhow::Result<()> {
    // the one-assignment-per-pair rule only exists on the client
    let app = spawn_app().await;
    let hotel = app.create_test_hotel().await?;

    app.client.create_hotel_room(hotel.id, &double_king(1)).await?;
    app.client.create_hotel_room(hotel.id, &double_king(2)).await?;
    assert_eq!(app.client.list_hotel_rooms(hotel.id).await?.len(), 2);

    Ok(())
}

#[tokio::test]
async fn delete_assignment_and_reload() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let hotel = app.create_test_hotel().await?;
    app.client.create_hotel_room(hotel.id, &double_king(4)).await?;
    let rooms = app.assignments(hotel.id).await?.accommodations;

    let refreshed =
        workflows::delete_assignment(&app.client, hotel.id, rooms[0].id)
            .await
            .map_err(|n| anyhow::anyhow!(n.text()))?;
    assert_eq!(refreshed.notice.severity, Severity::Info);
    assert!(refreshed.reloaded?.is_empty());

    let notice =
        workflows::delete_assignment(&app.client, hotel.id, rooms[0].id)
            .await
            .unwrap_err();
    assert_eq!(notice.severity, Severity::Error);
    assert_eq!(notice.detail, "Room assignment not found");

    Ok(())
}

#[tokio::test]
async fn zero_quantity_is_rejected_by_backend() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let hotel = app.create_test_hotel().await?;

    assert_status_code(
        app.client.create_hotel_room(hotel.id, &double_king(0)).await,
        StatusCode::BAD_REQUEST,
    );

    Ok(())
}

#[tokio::test]
async fn deleting_hotel_drops_its_assignments() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let hotel = app.create_test_hotel().await?;
    app.client.create_hotel_room(hotel.id, &double_king(4)).await?;

    app.client.delete_hotel(hotel.id).await?;
    assert_status_code(
        app.client.list_hotel_rooms(hotel.id).await,
        StatusCode::NOT_FOUND,
    );

    Ok(())
}
