use routes::create_router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::services::{market_data::alpha_vantage::http_client, shared::env::Config};

pub mod errors;
pub mod handlers;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: reqwest::Client,
}

pub async fn api(config: Config) -> anyhow::Result<()> {
    let port = config.port;
    let state = AppState {
        config: Arc::new(config),
        client: http_client()?,
    };
    let router = create_router(state)?;
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Serving exchange rate API on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    Ok(axum::serve(listener, router.into_make_service()).await?)
}
