use dotenvy::dotenv;
use pope_service::config::PopeConfig;
use pope_service::observability::init_tracing;
use pope_service::services::providers::openai::{OpenAiChatProvider, OpenAiConfig};
use pope_service::services::providers::ChatProvider;
use pope_service::startup::Application;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing("info");

    let config = PopeConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;

    let provider: Arc<dyn ChatProvider> = Arc::new(OpenAiChatProvider::new(OpenAiConfig {
        api_key: config.openai.api_key.clone(),
        model: config.openai.model.clone(),
        base_url: config.openai.base_url.clone(),
    }));

    info!(model = %config.openai.model, "Initialized OpenAI chat provider");

    let app = Application::build(&config, provider).await?;
    info!("Pope Leon XIV backend listening on port {}", app.port());

    app.run_until_stopped().await?;

    Ok(())
}
