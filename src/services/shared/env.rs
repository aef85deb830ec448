use anyhow::anyhow;
use dotenvy::{dotenv, from_filename, var};

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = get_env_variable("API_KEY").ok_or_else(|| {
            anyhow!("Please set an Alpha Vantage API key as API_KEY in your environment variables")
        })?;

        let port = match get_env_variable("PORT") {
            Some(port) => port
                .parse()
                .map_err(|_| anyhow!("PORT must be a valid port number, got '{}'", port))?,
            None => DEFAULT_PORT,
        };

        Ok(Config { api_key, port })
    }
}

pub fn get_env_variable(variable_to_get: &str) -> Option<String> {
    let environment = var("RUST_ENV").unwrap_or_else(|_| "development".into());

    match environment.as_str() {
        "development" => from_filename(".env.dev").ok(),
        "production" => from_filename(".env.prod").ok(),
        _ => dotenv().ok(),
    };
    var(variable_to_get).ok()
}
