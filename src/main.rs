use anyhow::Context;
use pitchdeck_lib::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the variables may come from the real environment.
    dotenv::dotenv().ok();
    pitchdeck_lib::telemetry::init();

    let config = Config::from_env().context("invalid configuration")?;
    tracing::debug!(?config, "Configuration loaded");

    pitchdeck_lib::run(config).await
}
