//! Configuration for the sonarviz daemon
//!
//! Loads configuration from a TOML file with the minimal parameters
//! needed to bridge one sonar to one marker consumer.

use crate::error::Result;
use crate::streaming::WireFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Top-level application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub serial: SerialConfig,
    pub marker: MarkerConfig,
    pub publish: PublishConfig,
}

/// Serial channel configuration (8N1 frame format is fixed)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SerialConfig {
    /// Sonar serial device path
    pub port: String,
    /// Input/output baud rate
    pub baud_rate: u32,
    /// Read timeout in deciseconds: maximum wait for the first byte
    /// before a read returns empty
    pub read_timeout_ds: u32,
}

impl SerialConfig {
    /// Read-timeout policy as a duration
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(u64::from(self.read_timeout_ds) * 100)
    }
}

/// Identity of this sensor's marker slot
///
/// A later descriptor with the same namespace and id replaces the
/// previous one in the consumer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MarkerConfig {
    /// Coordinate space for marker positions (e.g. the robot base frame)
    pub frame_id: String,
    /// Marker namespace
    pub namespace: String,
    /// Marker id within the namespace
    pub id: u32,
}

/// Marker publishing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PublishConfig {
    /// UDP unicast target for marker datagrams
    ///
    /// Examples:
    /// - `127.0.0.1:5555` - consumer on the same host
    /// - `192.168.1.20:5555` - remote renderer
    pub target_address: String,
    /// Sampling/publish period in milliseconds
    pub period_ms: u64,
    /// Wire format for descriptors ("json" or "postcard")
    pub format: WireFormat,
}

impl PublishConfig {
    /// Tick period as a duration
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }
}

impl AppConfig {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Default configuration for a single sonar on an Arduino-style
    /// USB serial adapter
    ///
    /// Suitable for testing and development. Production deployments
    /// should use a proper TOML configuration file.
    pub fn sonar_defaults() -> Self {
        Self {
            serial: SerialConfig {
                port: "/dev/ttyACM0".to_string(),
                baud_rate: 9600,
                read_timeout_ds: 10,
            },
            marker: MarkerConfig {
                frame_id: "base_link".to_string(),
                namespace: "sonar".to_string(),
                id: 0,
            },
            publish: PublishConfig {
                target_address: "127.0.0.1:5555".to_string(),
                period_ms: 500,
                format: WireFormat::Json,
            },
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::sonar_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::sonar_defaults();
        assert_eq!(config.serial.port, "/dev/ttyACM0");
        assert_eq!(config.serial.baud_rate, 9600);
        assert_eq!(config.serial.read_timeout_ds, 10);
        assert_eq!(config.serial.read_timeout(), Duration::from_secs(1));
        assert_eq!(config.marker.frame_id, "base_link");
        assert_eq!(config.marker.namespace, "sonar");
        assert_eq!(config.marker.id, 0);
        assert_eq!(config.publish.target_address, "127.0.0.1:5555");
        assert_eq!(config.publish.period_ms, 500);
        assert_eq!(config.publish.format, WireFormat::Json);
    }

    #[test]
    fn test_toml_serialization() {
        let config = AppConfig::sonar_defaults();
        let toml_string = toml::to_string_pretty(&config).unwrap();

        // Should contain all sections
        assert!(toml_string.contains("[serial]"));
        assert!(toml_string.contains("[marker]"));
        assert!(toml_string.contains("[publish]"));

        // Should contain key values
        assert!(toml_string.contains("port = \"/dev/ttyACM0\""));
        assert!(toml_string.contains("baud_rate = 9600"));
        assert!(toml_string.contains("period_ms = 500"));
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_content = r#"
[serial]
port = "/dev/ttyUSB0"
baud_rate = 115200
read_timeout_ds = 5

[marker]
frame_id = "map"
namespace = "front_sonar"
id = 3

[publish]
target_address = "10.0.0.2:6000"
period_ms = 250
format = "postcard"
"#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.serial.port, "/dev/ttyUSB0");
        assert_eq!(config.serial.baud_rate, 115200);
        assert_eq!(config.serial.read_timeout(), Duration::from_millis(500));
        assert_eq!(config.marker.namespace, "front_sonar");
        assert_eq!(config.marker.id, 3);
        assert_eq!(config.publish.format, WireFormat::Postcard);
        assert_eq!(config.publish.period(), Duration::from_millis(250));
    }
}
