use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("upstream request failed: {0}")]
    Upstream(String),
    #[error("no exchange rate data available for {0}")]
    DataUnavailable(NaiveDate),
    #[error("close rate is not numeric: '{0}'")]
    MalformedData(String),
    #[error("invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("invalid query parameter: {0}")]
    InvalidQuery(String),
}
