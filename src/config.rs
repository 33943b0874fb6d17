use std::env;
use std::time::Duration;

/// Environment-driven configuration, read once at startup (after dotenv
/// has loaded any .env file).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub mongo_uri: String,
    pub database: String,
    pub windows_cache_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080);
        let mongo_uri =
            env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let database = env::var("MONGODB_DATABASE").unwrap_or_else(|_| "clinic".to_string());
        let windows_cache_ttl = env::var("WINDOWS_CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(60));

        Config {
            host,
            port,
            mongo_uri,
            database,
            windows_cache_ttl,
        }
    }
}
