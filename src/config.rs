use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Runtime configuration, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `SHIFTDESK_ADDR`
    pub addr: SocketAddr,
    /// `SHIFTDESK_DATA_DIR`: where the record files live.
    pub data_dir: PathBuf,
    /// `SHIFTDESK_LOG_DIR`: daily rolling log files.
    pub log_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str, default: &str| {
            get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let raw_addr = value("SHIFTDESK_ADDR", DEFAULT_ADDR);
        let addr = raw_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("SHIFTDESK_ADDR is not a socket address: {raw_addr}"))?;

        Ok(Self {
            addr,
            data_dir: PathBuf::from(value("SHIFTDESK_DATA_DIR", DEFAULT_DATA_DIR)),
            log_dir: PathBuf::from(value("SHIFTDESK_LOG_DIR", DEFAULT_LOG_DIR)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset_or_blank() {
        let config = AppConfig::from_lookup(lookup(&[("SHIFTDESK_DATA_DIR", "  ")])).unwrap();

        assert_eq!(config.addr.port(), 5000);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.log_dir, PathBuf::from("logs"));
    }

    #[test]
    fn values_are_read_from_environment() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SHIFTDESK_ADDR", "127.0.0.1:8088"),
            ("SHIFTDESK_DATA_DIR", "/var/lib/shiftdesk"),
            ("SHIFTDESK_LOG_DIR", "/var/log/shiftdesk"),
        ]))
        .unwrap();

        assert_eq!(config.addr, "127.0.0.1:8088".parse().unwrap());
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/shiftdesk"));
        assert_eq!(config.log_dir, PathBuf::from("/var/log/shiftdesk"));
    }

    #[test]
    fn malformed_address_is_an_error() {
        let err = AppConfig::from_lookup(lookup(&[("SHIFTDESK_ADDR", "localhost")])).unwrap_err();
        assert!(err.to_string().contains("SHIFTDESK_ADDR"));
    }
}
