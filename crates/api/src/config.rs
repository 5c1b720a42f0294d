use faal_core::schedule::{FaalSchedule, DEFAULT_UTC_OFFSET_MINUTES};

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Daily gate and local offset used to decide "today".
    pub faal: FaalSchedule,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                    |
    /// |---------------------------|----------------------------|
    /// | `HOST`                    | `0.0.0.0`                  |
    /// | `PORT`                    | `3000`                     |
    /// | `CORS_ORIGINS`            | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                       |
    /// | `FAAL_GATE_TIME`          | `08:00`                    |
    /// | `FAAL_UTC_OFFSET_MINUTES` | `210` (Asia/Tehran)        |
    ///
    /// # Panics
    ///
    /// Panics on any malformed value so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();
        let faal = faal_schedule_from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            faal,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn faal_schedule_from_env() -> FaalSchedule {
    let gate = std::env::var("FAAL_GATE_TIME").unwrap_or_else(|_| "08:00".into());
    let gate = FaalSchedule::parse_gate(&gate)
        .unwrap_or_else(|e| panic!("FAAL_GATE_TIME is invalid: {e}"));

    let offset_minutes: i32 = std::env::var("FAAL_UTC_OFFSET_MINUTES")
        .unwrap_or_else(|_| DEFAULT_UTC_OFFSET_MINUTES.to_string())
        .parse()
        .expect("FAAL_UTC_OFFSET_MINUTES must be a valid i32");

    FaalSchedule::from_offset_minutes(gate, offset_minutes)
        .unwrap_or_else(|e| panic!("FAAL_UTC_OFFSET_MINUTES is invalid: {e}"))
}
