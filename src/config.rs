use std::net::SocketAddr;

use anyhow::Context;
use tower_sessions::cookie::Key;
use tracing::warn;

pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub session_key: Key,
    pub session_ttl: time::Duration,
}

impl Config {
    /// Reads the process environment, falling back to `.env` entries.
    pub fn from_env() -> anyhow::Result<Config> {
        let database_url = dotenv::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:keskustelu.db?mode=rwc".to_owned());

        let bind_addr = dotenv::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_owned())
            .parse()
            .context("BIND_ADDR")?;

        let session_key = match dotenv::var("SECRET_KEY") {
            Ok(secret) if !secret.is_empty() => Key::try_from(secret.as_bytes())
                .context("SECRET_KEY must be at least 64 bytes")?,
            _ => {
                warn!("SECRET_KEY not set, sessions will not survive a restart");
                Key::generate()
            }
        };

        let session_minutes: i64 = match dotenv::var("SESSION_MINUTES") {
            Ok(minutes) => minutes.parse().context("SESSION_MINUTES")?,
            Err(_) => 60,
        };

        Ok(Config {
            database_url,
            bind_addr,
            session_key,
            session_ttl: time::Duration::minutes(session_minutes),
        })
    }
}
