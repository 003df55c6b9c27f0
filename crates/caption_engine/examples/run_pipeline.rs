use caption_engine::{CaptionOutcome, CaptionPipeline, CaptionRequest, settings};
use tokio_util::sync::CancellationToken;
use tracing::info;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    tracing_subscriber::fmt::init();
    color_eyre::install()?;

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/sample.jpg".to_string());
    let query = std::env::args().nth(2);

    let pipeline = CaptionPipeline::from_settings(settings())?;
    let image = std::fs::read(&path)?;
    let request = match query {
        Some(query) => CaptionRequest::with_query(image, &query),
        None => CaptionRequest::new(image),
    };

    match pipeline.caption(&request, &CancellationToken::new()).await? {
        CaptionOutcome::Blocked { reason } => info!("blocked: {reason}"),
        CaptionOutcome::Generated { variants } => {
            info!("safe: {}", variants.safe);
            info!("medium: {}", variants.medium);
            info!("bold: {}", variants.bold);
        }
    }
    Ok(())
}
