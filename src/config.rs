use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub data_dir: PathBuf,
    pub enrollments_region: String,
    pub seed_demo_enrollments: bool,
    pub session_duration_hours: i64,
    pub bcrypt_cost: u32,
    pub client_origin: String,
    pub latency: LatencyConfig,
    pub otel_exporter_endpoint: Option<String>,
    pub service_name: String,
    pub metrics_enabled: bool,
    pub metrics_port: u16,
}

/// Simulated round-trip delays applied by the services.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LatencyConfig {
    pub read: Duration,
    pub enroll: Duration,
    pub progress: Duration,
    pub payment: Duration,
}

impl LatencyConfig {
    pub const fn none() -> Self {
        Self {
            read: Duration::ZERO,
            enroll: Duration::ZERO,
            progress: Duration::ZERO,
            payment: Duration::ZERO,
        }
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            read: Duration::from_millis(500),
            enroll: Duration::from_millis(1000),
            progress: Duration::from_millis(500),
            payment: Duration::from_millis(1500),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let server_port = parse_var("SERVER_PORT", 5000)?;

        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        let enrollments_region = env::var("ENROLLMENTS_REGION")
            .unwrap_or_else(|_| "medlecture_enrollments".to_string());
        if enrollments_region.is_empty()
            || enrollments_region.contains(['/', '\\'])
            || enrollments_region.starts_with('.')
        {
            return Err(ConfigError::InvalidValue("ENROLLMENTS_REGION"));
        }

        let seed_demo_enrollments = parse_var("SEED_DEMO_ENROLLMENTS", true)?;
        let session_duration_hours = parse_var("SESSION_DURATION_HOURS", 24)?;

        let bcrypt_cost = parse_var("BCRYPT_COST", 10)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue("BCRYPT_COST"));
        }

        let client_origin =
            env::var("CLIENT_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());

        let defaults = LatencyConfig::default();
        let latency = LatencyConfig {
            read: parse_millis("LATENCY_READ_MS", defaults.read)?,
            enroll: parse_millis("LATENCY_ENROLL_MS", defaults.enroll)?,
            progress: parse_millis("LATENCY_PROGRESS_MS", defaults.progress)?,
            payment: parse_millis("LATENCY_PAYMENT_MS", defaults.payment)?,
        };

        let otel_exporter_endpoint = env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok();
        let service_name = env::var("SERVICE_NAME").unwrap_or_else(|_| "medlecture".to_string());
        let metrics_enabled = parse_var("METRICS_ENABLED", true)?;
        let metrics_port = parse_var("METRICS_PORT", 9000)?;

        Ok(Config {
            server_host,
            server_port,
            data_dir,
            enrollments_region,
            seed_demo_enrollments,
            session_duration_hours,
            bcrypt_cost,
            client_origin,
            latency,
            otel_exporter_endpoint,
            service_name,
            metrics_enabled,
            metrics_port,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// File backing the durable enrollment region.
    pub fn enrollments_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.enrollments_region))
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue(name)),
        Err(_) => Ok(default),
    }
}

fn parse_millis(name: &'static str, default: Duration) -> Result<Duration, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::InvalidValue(name)),
        Err(_) => Ok(default),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_latency_matches_simulated_round_trips() {
        let latency = LatencyConfig::default();
        assert_eq!(latency.read, Duration::from_millis(500));
        assert_eq!(latency.enroll, Duration::from_millis(1000));
        assert_eq!(latency.payment, Duration::from_millis(1500));
    }

    #[test]
    fn test_no_latency_is_zero() {
        let latency = LatencyConfig::none();
        assert!(latency.read.is_zero());
        assert!(latency.enroll.is_zero());
        assert!(latency.progress.is_zero());
        assert!(latency.payment.is_zero());
    }
}
