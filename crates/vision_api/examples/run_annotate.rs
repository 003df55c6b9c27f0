use tracing::info;
use vision_api::VisionClient;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    tracing_subscriber::fmt::init();
    color_eyre::install()?;
    dotenv::dotenv().ok();

    let endpoint = std::env::var("VISION_ENDPOINT")?;
    let api_key = std::env::var("VISION_API_KEY")?;
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/sample.jpg".to_string());

    let client = VisionClient::with_endpoint(&endpoint)
        .api_key(api_key)
        .build();
    let image = std::fs::read(&path)?;
    let annotation = client.annotate(&image).await?;

    info!(
        "{path}: {} labels, {} faces, {} objects",
        annotation.label_annotations.len(),
        annotation.face_annotations.len(),
        annotation.localized_object_annotations.len()
    );
    for label in &annotation.label_annotations {
        info!("label: {} ({:.2})", label.description, label.score);
    }
    Ok(())
}
