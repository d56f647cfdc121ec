use std::error::Error;

use qa_llm_service::telemetry;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from a .env file, when one exists.
    match dotenvy::dotenv() {
        Ok(_) => {}
        Err(err) if err.not_found() => {}
        Err(err) => return Err(err.into()),
    }

    let filter = telemetry::env_filter_with_level("info", Level::DEBUG);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_timer(telemetry::ChronoRfc3339Utc::default())
                .with_target(false),
        )
        .init();

    api::start().await?;

    Ok(())
}
