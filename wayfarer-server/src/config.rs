//! Server configuration
//!
//! Defines the configurable parameters of the server: the bind address and
//! the artificial delay between processing checkpoints. The delay exists so
//! clients see staged progress; tests run with it near zero.

use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address to bind (e.g. "0.0.0.0:8080")
    pub bind_addr: String,

    /// Pause between processing checkpoints
    pub stage_delay: Duration,
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - WAYFARER_BIND_ADDR (optional, default: 0.0.0.0:8080)
    /// - STAGE_DELAY_MS (optional, milliseconds, default: 2000)
    pub fn from_env() -> Self {
        let bind_addr = std::env::var("WAYFARER_BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let stage_delay = std::env::var("STAGE_DELAY_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(2000));

        Self {
            bind_addr,
            stage_delay,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.bind_addr.is_empty() {
            return Err("bind_addr cannot be empty".to_string());
        }
        if !self.bind_addr.contains(':') {
            return Err("bind_addr must include a port".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            stage_delay: Duration::from_millis(2000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.stage_delay, Duration::from_millis(2000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.bind_addr = String::new();
        assert!(config.validate().is_err());

        config.bind_addr = "localhost".to_string();
        assert!(config.validate().is_err());

        config.bind_addr = "127.0.0.1:9090".to_string();
        assert!(config.validate().is_ok());
    }
}
