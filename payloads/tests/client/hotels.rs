use payloads::{
    HotelApi,
    hotel_form::{HotelForm, HotelSubmission},
    workflows,
};
use reqwest::StatusCode;
use test_helpers::{assert_status_code, hotel_details_a, spawn_app};

#[tokio::test]
async fn create_read_update_delete_hotel() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let hotel = app.create_test_hotel().await?;

    let fetched = app.client.get_hotel(hotel.id).await?;
    assert_eq!(fetched, hotel);
    assert_eq!(fetched.city.as_deref(), Some("Bogotá"));

    let mut details = hotel_details_a("Hotel Las Américas Plaza");
    details.max_rooms = 80;
    app.client.update_hotel(hotel.id, &details).await?;
    let updated = app.client.get_hotel(hotel.id).await?;
    assert_eq!(updated.name, "Hotel Las Américas Plaza");
    assert_eq!(updated.max_rooms, 80);

    app.client.delete_hotel(hotel.id).await?;
    assert!(app.client.list_hotels().await?.is_empty());
    assert_status_code(app.client.get_hotel(hotel.id).await, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn missing_hotel_reports_server_message() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let err = app
        .client
        .delete_hotel(payloads::HotelId(12345))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(err.user_message(), "Hotel not found");

    Ok(())
}

#[tokio::test]
async fn form_submission_creates_then_updates() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let cities = app.client.list_cities().await?;

    let mut form = HotelForm {
        name: "Hotel Boutique".into(),
        address: "Calle 5".into(),
        city: cities.first().cloned(),
        nit: "901-2".into(),
        max_rooms: 8,
        ..Default::default()
    };
    let submission = form.submission()?;
    assert!(matches!(submission, HotelSubmission::Create(_)));
    let refreshed = workflows::submit_hotel(&app.client, &submission)
        .await
        .map_err(|n| anyhow::anyhow!(n.text()))?;
    let hotels = refreshed.reloaded?;
    assert_eq!(hotels.len(), 1);
    form.reset();
    assert!(!form.can_delete());

    // editing the listed row switches the form into update mode
    let mut form = HotelForm::from_hotel(&hotels[0], &cities);
    assert_eq!(form.city, cities.first().cloned());
    form.set_max_rooms("9");
    let submission = form.submission()?;
    assert!(matches!(submission, HotelSubmission::Update(..)));
    let refreshed = workflows::submit_hotel(&app.client, &submission)
        .await
        .map_err(|n| anyhow::anyhow!(n.text()))?;
    let hotels = refreshed.reloaded?;
    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0].max_rooms, 9);

    Ok(())
}

#[tokio::test]
async fn blank_name_is_rejected_by_backend() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let err = app
        .client
        .create_hotel(&hotel_details_a("  "))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    assert_eq!(err.user_message(), "Name is required");

    Ok(())
}
