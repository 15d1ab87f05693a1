use anyhow::{ensure, Context, Result};

const DEFAULT_MAX_BATCH_SIZE: usize = 50;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on match results accepted by the batch endpoint.
    pub max_batch_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_batch_size: parse_max_batch_size(std::env::var("MAX_BATCH_SIZE").ok().as_deref())?,
        })
    }
}

fn parse_max_batch_size(raw: Option<&str>) -> Result<usize> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_MAX_BATCH_SIZE);
    };
    let size = raw
        .trim()
        .parse::<usize>()
        .with_context(|| format!("MAX_BATCH_SIZE must be a positive integer, got '{raw}'"))?;
    ensure!(size > 0, "MAX_BATCH_SIZE must be at least 1");
    Ok(size)
}
