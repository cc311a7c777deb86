use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    #[serde(default)]
    pub board: Option<String>,

    #[serde(default)]
    pub port: Option<String>,

    #[serde(default = "default_platform")]
    pub platform: String,

    #[serde(default = "default_framework")]
    pub framework: String,

    /// PlatformIO executable.
    #[serde(default = "default_pio")]
    pub pio: String,
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("generated")
}
fn default_platform() -> String {
    "espressif32".to_string()
}
fn default_framework() -> String {
    "arduino".to_string()
}
fn default_pio() -> String {
    "pio".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            out_dir: default_out_dir(),
            board: None,
            port: None,
            platform: default_platform(),
            framework: default_framework(),
            pio: default_pio(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.out_dir, PathBuf::from("generated"));
        assert!(config.board.is_none());
        assert!(config.port.is_none());
        assert_eq!(config.platform, "espressif32");
        assert_eq!(config.framework, "arduino");
        assert_eq!(config.pio, "pio");
    }

    #[test]
    fn test_deserialize_full_config() {
        let json = r#"{
            "out_dir": "build/sketch",
            "board": "esp32-s3-devkitm-1",
            "port": "/dev/ttyUSB0",
            "platform": "atmelavr",
            "framework": "arduino",
            "pio": "/opt/pio/bin/pio"
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.out_dir, PathBuf::from("build/sketch"));
        assert_eq!(config.board.as_deref(), Some("esp32-s3-devkitm-1"));
        assert_eq!(config.port.as_deref(), Some("/dev/ttyUSB0"));
        assert_eq!(config.platform, "atmelavr");
        assert_eq!(config.pio, "/opt/pio/bin/pio");
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: Config = serde_json::from_str(r#"{"board": "uno"}"#).unwrap();
        assert_eq!(config.board.as_deref(), Some("uno"));
        assert_eq!(config, Config {
            board: Some("uno".to_string()),
            ..Config::default()
        });
    }

    #[test]
    fn test_empty_object_is_default() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }
}
