use std::str::FromStr;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{errors::ErrorResponse, AppState};
use crate::services::{
    conversion::{convert, ConversionResult},
    errors::ExchangeError,
    market_data::alpha_vantage::{fetch_daily_series, fetch_latest_date},
};

// Callers get this message for every failure kind, the specifics go to the log.
const GENERIC_FAILURE_MESSAGE: &str = "Failed to fetch exchange rates";

fn json_response<T: serde::Serialize>(
    data: &T,
) -> Result<(StatusCode, HeaderMap, String), ErrorResponse> {
    let data = serde_json::to_string(data).map_err(|_| generic_failure())?;
    let mut headers = HeaderMap::new();
    headers.insert("Content-Type", HeaderValue::from_static("application/json"));
    Ok((StatusCode::OK, headers, data))
}

fn generic_failure() -> ErrorResponse {
    ErrorResponse::new(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE_MESSAGE)
}

#[derive(Debug, Deserialize)]
pub struct ExchangeRatesQuery {
    pub amount: Option<String>,
    #[serde(rename = "fromCurrency")]
    pub from_currency: Option<String>,
    #[serde(rename = "toCurrency")]
    pub to_currency: Option<String>,
    pub date: Option<String>,
}

pub async fn exchange_rates(
    State(state): State<AppState>,
    Query(query): Query<ExchangeRatesQuery>,
) -> Result<impl IntoResponse, ErrorResponse> {
    match lookup_exchange_rates(&state, &query).await {
        Ok(result) => json_response(&result),
        Err(err) => {
            tracing::error!("exchange rate lookup failed: {err}");
            Err(generic_failure())
        }
    }
}

async fn lookup_exchange_rates(
    state: &AppState,
    query: &ExchangeRatesQuery,
) -> Result<ConversionResult, ExchangeError> {
    let amount = parse_amount(require(&query.amount, "amount")?)?;
    let date = parse_date(require(&query.date, "date")?)?;
    let from_currency = require(&query.from_currency, "fromCurrency")?;
    let to_currency = require(&query.to_currency, "toCurrency")?;

    let series = fetch_daily_series(&state.client, &state.config, from_currency, to_currency).await?;
    convert(&series, date, amount)
}

#[derive(Debug, Deserialize)]
pub struct LatestDateQuery {
    #[serde(rename = "fromCurrency")]
    pub from_currency: Option<String>,
    #[serde(rename = "toCurrency")]
    pub to_currency: Option<String>,
}

#[derive(Serialize)]
struct LatestDateResponse {
    #[serde(rename = "latestDate")]
    latest_date: NaiveDate,
}

pub async fn latest_date(
    State(state): State<AppState>,
    Query(query): Query<LatestDateQuery>,
) -> Result<impl IntoResponse, ErrorResponse> {
    match lookup_latest_date(&state, &query).await {
        Ok(date) => json_response(&LatestDateResponse { latest_date: date }),
        Err(err) => {
            tracing::error!("latest date lookup failed: {err}");
            Err(generic_failure())
        }
    }
}

async fn lookup_latest_date(
    state: &AppState,
    query: &LatestDateQuery,
) -> Result<NaiveDate, ExchangeError> {
    let from_currency = require(&query.from_currency, "fromCurrency")?;
    let to_currency = require(&query.to_currency, "toCurrency")?;
    fetch_latest_date(&state.client, &state.config, from_currency, to_currency).await
}

pub async fn route_not_found() -> ErrorResponse {
    ErrorResponse::new(StatusCode::NOT_FOUND, "Route not found.")
}

fn require<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str, ExchangeError> {
    value
        .as_deref()
        .ok_or_else(|| ExchangeError::InvalidQuery(format!("missing parameter '{name}'")))
}

fn parse_amount(raw: &str) -> Result<Decimal, ExchangeError> {
    Decimal::from_str(raw.trim()).map_err(|_| ExchangeError::InvalidAmount(raw.to_string()))
}

fn parse_date(raw: &str) -> Result<NaiveDate, ExchangeError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ExchangeError::InvalidQuery(format!("unparseable date '{raw}'")))
}
