mod accommodations;
mod assignments;
mod hotels;

use test_helpers::spawn_app;

#[tokio::test]
async fn health_check() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let response = app
        .client
        .inner_client
        .get(format!("{}/health_check", app.client.address))
        .send()
        .await?;
    assert!(response.status().is_success());

    Ok(())
}
