use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::services::{errors::ExchangeError, market_data::alpha_vantage::FxDailySeries};
use crate::util::format_helpers::format_indian_units;

#[derive(Debug, Serialize)]
pub struct ConversionResult {
    #[serde(rename = "refreshTime")]
    pub refresh_time: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    pub amount: String,
}

pub fn convert(
    series: &FxDailySeries,
    date: NaiveDate,
    amount: Decimal,
) -> Result<ConversionResult, ExchangeError> {
    if amount < Decimal::ZERO {
        return Err(ExchangeError::InvalidAmount(amount.to_string()));
    }

    let day = series
        .days
        .get(&date.format("%Y-%m-%d").to_string())
        .ok_or(ExchangeError::DataUnavailable(date))?;

    let rate = Decimal::from_str(&day.close)
        .map_err(|_| ExchangeError::MalformedData(day.close.clone()))?;

    // round to the cent first, then decompose the whole units
    let output = (rate * amount).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    Ok(ConversionResult {
        refresh_time: series.last_refreshed.clone(),
        rate,
        amount: format_indian_units(output),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::market_data::alpha_vantage::FxDailyBar;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn stub_series(close: &str) -> FxDailySeries {
        let mut days = HashMap::new();
        days.insert(
            "2023-01-02".to_string(),
            FxDailyBar {
                close: close.to_string(),
            },
        );
        FxDailySeries {
            last_refreshed: "2023-01-02 16:00:00".to_string(),
            days,
        }
    }

    fn jan_2nd() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, 2).unwrap()
    }

    #[test]
    fn converts_and_formats_for_an_available_date() {
        let result = convert(&stub_series("82.50"), jan_2nd(), dec!(100)).unwrap();
        assert_eq!(result.refresh_time, "2023-01-02 16:00:00");
        assert_eq!(result.rate, dec!(82.50));
        assert_eq!(result.amount, "8 Thousand 250");
    }

    #[test]
    fn the_rate_serializes_as_a_json_number() {
        let result = convert(&stub_series("82.50"), jan_2nd(), dec!(100)).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["rate"], serde_json::json!(82.5));
        assert_eq!(value["refreshTime"], "2023-01-02 16:00:00");
        assert_eq!(value["amount"], "8 Thousand 250");
    }

    #[test]
    fn a_missing_date_is_data_unavailable() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 3).unwrap();
        assert!(matches!(
            convert(&stub_series("82.50"), date, dec!(100)),
            Err(ExchangeError::DataUnavailable(missing)) if missing == date
        ));
    }

    #[test]
    fn a_non_numeric_close_is_malformed_data() {
        assert!(matches!(
            convert(&stub_series("n/a"), jan_2nd(), dec!(100)),
            Err(ExchangeError::MalformedData(_))
        ));
    }

    #[test]
    fn a_negative_amount_is_rejected() {
        assert!(matches!(
            convert(&stub_series("82.50"), jan_2nd(), dec!(-1)),
            Err(ExchangeError::InvalidAmount(_))
        ));
    }

    #[test]
    fn a_zero_amount_renders_as_an_empty_string() {
        let result = convert(&stub_series("82.50"), jan_2nd(), Decimal::ZERO).unwrap();
        assert_eq!(result.amount, "");
    }

    #[test]
    fn rounds_to_the_cent_before_decomposing() {
        // 100 * 9.99995 = 999.995, which rounds up to 1000.00
        let result = convert(&stub_series("9.99995"), jan_2nd(), dec!(100)).unwrap();
        assert_eq!(result.amount, "1 Thousand");

        let result = convert(&stub_series("9.9999"), jan_2nd(), dec!(100)).unwrap();
        assert_eq!(result.amount, "999");
    }
}
