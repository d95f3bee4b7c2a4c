use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the portal backend
    pub portal_url: String,
    /// Per-request timeout for portal calls
    pub portal_timeout: Duration,
    pub port: u16,
    /// Sustained login attempts per second per peer
    pub login_rate_per_second: u64,
    pub login_burst: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            portal_url: env::var("PORTAL_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string()),
            portal_timeout: Duration::from_secs(parse_or("PORTAL_TIMEOUT_SECS", 30)),
            port: parse_or("PORT", 8080),
            login_rate_per_second: parse_or("LOGIN_RATE_PER_SECOND", 2),
            login_burst: parse_or("LOGIN_BURST", 5),
        }
    }

    /// Interval between replenished login permits. The governor builder is
    /// configured by interval, so the per-second rate is inverted here.
    pub fn login_replenish_ms(&self) -> u64 {
        (1000 / self.login_rate_per_second.max(1)).max(1)
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
