use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub log_level: String,
    pub summary_cache_ttl: Duration,
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            summary_cache_ttl: Duration::from_secs(
                env::var("SUMMARY_CACHE_TTL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(3600),
            ),
        }
    }
}

// Global static accessible everywhere
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
