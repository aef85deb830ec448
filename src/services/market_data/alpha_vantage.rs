use std::collections::HashMap;
use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use crate::services::{errors::ExchangeError, shared::env::Config};

const ALPHA_VANTAGE_BASE_URL: &str = "https://www.alphavantage.co/query";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub fn http_client() -> anyhow::Result<Client> {
    Ok(Client::builder().timeout(REQUEST_TIMEOUT).build()?)
}

#[derive(Deserialize, Debug)]
struct FxDailyResponse {
    #[serde(rename = "Meta Data", default)]
    meta_data: Option<FxMetaData>,
    #[serde(rename = "Time Series FX (Daily)", default)]
    time_series: Option<HashMap<String, FxDailyBar>>,
}

#[derive(Deserialize, Debug)]
struct FxMetaData {
    #[serde(rename = "5. Last Refreshed")]
    last_refreshed: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FxDailyBar {
    #[serde(rename = "4. close")]
    pub close: String,
}

#[derive(Debug)]
pub struct FxDailySeries {
    pub last_refreshed: String,
    pub days: HashMap<String, FxDailyBar>,
}

pub async fn fetch_daily_series(
    client: &Client,
    config: &Config,
    from_currency: &str,
    to_currency: &str,
) -> Result<FxDailySeries, ExchangeError> {
    let url = format!(
        "{}?function=FX_DAILY&from_symbol={}&to_symbol={}&apikey={}",
        ALPHA_VANTAGE_BASE_URL, from_currency, to_currency, config.api_key
    );

    let response = match client.get(&url).send().await {
        Ok(response) => response,
        // one retry on a dropped connection or a timed-out request
        Err(err) if err.is_timeout() || err.is_connect() => client
            .get(&url)
            .send()
            .await
            .map_err(|err| ExchangeError::Upstream(err.to_string()))?,
        Err(err) => return Err(ExchangeError::Upstream(err.to_string())),
    };

    if !response.status().is_success() {
        return Err(ExchangeError::Upstream(format!(
            "Alpha Vantage returned {}",
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|err| ExchangeError::Upstream(err.to_string()))?;

    parse_daily_series(&body)
}

fn parse_daily_series(body: &str) -> Result<FxDailySeries, ExchangeError> {
    let data = serde_json::from_str::<FxDailyResponse>(body)
        .map_err(|err| ExchangeError::Upstream(format!("unexpected response body: {err}")))?;

    let days = data
        .time_series
        .ok_or_else(|| ExchangeError::Upstream("no daily time series in response".to_string()))?;
    let meta_data = data
        .meta_data
        .ok_or_else(|| ExchangeError::Upstream("no metadata in response".to_string()))?;

    Ok(FxDailySeries {
        last_refreshed: meta_data.last_refreshed,
        days,
    })
}

pub async fn fetch_latest_date(
    client: &Client,
    config: &Config,
    from_currency: &str,
    to_currency: &str,
) -> Result<NaiveDate, ExchangeError> {
    let series = fetch_daily_series(client, config, from_currency, to_currency).await?;
    latest_series_date(&series)
        .ok_or_else(|| ExchangeError::Upstream("no dated entries in response".to_string()))
}

pub fn latest_series_date(series: &FxDailySeries) -> Option<NaiveDate> {
    series
        .days
        .keys()
        .filter_map(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_BODY: &str = r#"{
        "Meta Data": {
            "1. Information": "Forex Daily Prices (open, high, low, close)",
            "2. From Symbol": "USD",
            "3. To Symbol": "INR",
            "4. Output Size": "Compact",
            "5. Last Refreshed": "2023-01-02 16:00:00",
            "6. Time Zone": "UTC"
        },
        "Time Series FX (Daily)": {
            "2023-01-02": {
                "1. open": "82.40",
                "2. high": "82.70",
                "3. low": "82.30",
                "4. close": "82.50"
            },
            "2022-12-30": {
                "1. open": "82.60",
                "2. high": "82.80",
                "3. low": "82.20",
                "4. close": "82.45"
            }
        }
    }"#;

    #[test]
    fn parses_a_daily_series_payload() {
        let series = parse_daily_series(SAMPLE_BODY).unwrap();
        assert_eq!(series.last_refreshed, "2023-01-02 16:00:00");
        assert_eq!(series.days.len(), 2);
        assert_eq!(series.days["2023-01-02"].close, "82.50");
    }

    #[test]
    fn a_body_without_the_series_key_is_an_upstream_error() {
        let body = r#"{"Error Message": "Invalid API call."}"#;
        assert!(matches!(
            parse_daily_series(body),
            Err(ExchangeError::Upstream(_))
        ));
    }

    #[test]
    fn a_body_without_metadata_is_an_upstream_error() {
        let body = r#"{"Time Series FX (Daily)": {"2023-01-02": {"4. close": "82.50"}}}"#;
        assert!(matches!(
            parse_daily_series(body),
            Err(ExchangeError::Upstream(_))
        ));
    }

    #[test]
    fn latest_date_is_the_maximum_key_regardless_of_map_order() {
        let series = parse_daily_series(SAMPLE_BODY).unwrap();
        assert_eq!(
            latest_series_date(&series).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 2).unwrap()
        );
    }
}
