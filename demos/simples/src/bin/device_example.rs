use cloudplugs_client::prelude::*;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let session = Session::from_config(&Config::new())?;

    let device = session.get_device(None).await?;
    info!("Device: {}", device.body());

    session
        .set_device_prop(None, Some("firmware"), &json!(version()))
        .await?;

    let location = LocationUpdate::new(12.4964, 41.9028)?
        .with_accuracy(15.0)
        .with_timestamp_now();
    session.set_device_location(None, &location).await?;

    let stored = session.get_device_location(None).await?;
    let stored: LocationUpdate = stored.json()?;
    info!("Location stored at {}, {}", stored.x, stored.y);

    Ok(())
}
