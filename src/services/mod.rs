pub mod conversion;
pub mod errors;
pub mod market_data;
pub mod shared;
