use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{exchange_rates, latest_date, route_not_found};
use super::AppState;

pub fn create_router(state: AppState) -> anyhow::Result<Router> {
    let api_routes = Router::new()
        .route("/exchange-rates", get(exchange_rates))
        .route("/latest-date", get(latest_date));

    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let router = Router::new()
        .nest("/api", api_routes)
        .fallback(route_not_found)
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state);
    Ok(router)
}
