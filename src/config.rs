use crate::error::{AppError, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub devices: DeviceConfig,
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// IP addresses of the smart plugs to poll.
    pub addresses: Vec<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// Electricity unit price in cents per kWh.
    pub kwh_price_cents: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://smartplugs.db?mode=rwc".to_string());

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("SERVER_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(9999);

        let addresses = parse_device_list(
            &env::var("DEVICES")
                .map_err(|_| AppError::Config("DEVICES must be set".to_string()))?,
        );
        if addresses.is_empty() {
            return Err(AppError::Config(
                "DEVICES must contain at least one device address".to_string(),
            ));
        }

        let timeout_secs = env::var("DEVICE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        let kwh_price_cents = env::var("KWH_PRICE_CENTS")
            .map_err(|_| AppError::Config("KWH_PRICE_CENTS must be set".to_string()))?
            .parse()
            .map_err(|_| AppError::Config("KWH_PRICE_CENTS must be a number".to_string()))?;

        Ok(Config {
            database: DatabaseConfig {
                url: database_url,
                max_connections: Some(max_connections),
            },
            server: ServerConfig { host, port },
            devices: DeviceConfig {
                addresses,
                timeout_secs,
            },
            pricing: PricingConfig { kwh_price_cents },
        })
    }
}

fn parse_device_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_device_list() {
        let devices = parse_device_list("192.168.1.11, 192.168.1.12,192.168.1.13");
        assert_eq!(
            devices,
            vec!["192.168.1.11", "192.168.1.12", "192.168.1.13"]
        );
    }

    #[test]
    fn test_parse_device_list_skips_empty_entries() {
        let devices = parse_device_list("192.168.1.11,, ,192.168.1.12");
        assert_eq!(devices, vec!["192.168.1.11", "192.168.1.12"]);
    }

    #[test]
    fn test_parse_device_list_empty_input() {
        assert!(parse_device_list("").is_empty());
    }
}
