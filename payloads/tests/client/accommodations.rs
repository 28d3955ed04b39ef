use payloads::{
    AccommodationId, HotelApi,
    accommodations::{AccommodationFilter, AccommodationForm},
    requests::AccommodationDetails,
    workflows,
};
use reqwest::StatusCode;
use test_helpers::{assert_status_code, double_king, spawn_app};

#[tokio::test]
async fn create_update_delete_accommodation() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let form = AccommodationForm {
        name: "Queen".into(),
        description: "One queen size bed".into(),
        ..Default::default()
    };
    let refreshed =
        workflows::submit_accommodation(&app.client, &form.submission()?)
            .await
            .map_err(|n| anyhow::anyhow!(n.text()))?;
    let catalog = refreshed.reloaded?;
    let queen = catalog
        .iter()
        .find(|a| a.name == "Queen")
        .cloned()
        .expect("created accommodation is listed");

    let mut form = AccommodationForm::from_accommodation(&queen);
    form.description = "Queen bed with sofa".into();
    workflows::submit_accommodation(&app.client, &form.submission()?)
        .await
        .map_err(|n| anyhow::anyhow!(n.text()))?;

    let filter = AccommodationFilter {
        name: String::new(),
        description: "SOFA".into(),
    };
    let catalog = app.client.list_accommodations().await?;
    let matches = filter.apply(&catalog);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, queen.id);

    let refreshed = workflows::delete_accommodation(&app.client, queen.id)
        .await
        .map_err(|n| anyhow::anyhow!(n.text()))?;
    assert!(refreshed.reloaded?.iter().all(|a| a.id != queen.id));

    Ok(())
}

#[tokio::test]
async fn assigned_accommodation_cannot_be_deleted() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let hotel = app.create_test_hotel().await?;
    app.client.create_hotel_room(hotel.id, &double_king(1)).await?;

    let notice = workflows::delete_accommodation(&app.client, AccommodationId(5))
        .await
        .unwrap_err();
    assert_eq!(notice.detail, "Accommodation is still assigned to a hotel");

    assert_status_code(
        app.client
            .update_accommodation(
                AccommodationId(404),
                &AccommodationDetails {
                    name: "Ghost".into(),
                    description: None,
                },
            )
            .await,
        StatusCode::NOT_FOUND,
    );

    Ok(())
}
