use language_model::ChatClient;
use tracing::info;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    tracing_subscriber::fmt::init();
    color_eyre::install()?;
    dotenv::dotenv().ok();

    let base_url = std::env::var("GENERATION_ENDPOINT")?;
    let api_key = std::env::var("GENERATION_API_KEY")?;

    let client = ChatClient::with_base_url(&base_url)
        .api_key(api_key)
        .model("gpt-4o-mini".to_string())
        .build();

    let response = client
        .chat("Write a four word caption for a sunset photo.")
        .system("You are a caption writer.")
        .call()
        .await?;
    info!("response: {response}");
    Ok(())
}
