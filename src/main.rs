mod api;
mod services;
mod util;

use api::api;
use services::shared::{env::Config, logger::init_logger};

async fn run_rupeebox() -> anyhow::Result<()> {
    init_logger();
    let config = Config::from_env()?;
    api(config).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run_rupeebox().await?;
    Ok(())
}
