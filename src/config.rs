use log::{info, LevelFilter};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub num_balls: usize,
    pub min_size: f64,
    pub max_size: f64,
    /// Blur radius in pixels.
    pub blur: f64,
    /// Width of the overlay surface the balls are drawn on.
    pub reference_width: f64,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        BackgroundConfig {
            num_balls: 7,
            min_size: 150.,
            max_size: 300.,
            blur: 30.,
            reference_width: 1920.,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransferConfig {
    pub interval_ms: u64,
}

impl TransferConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for TransferConfig {
    fn default() -> Self {
        TransferConfig { interval_ms: 5000 }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,
    pub frame_time_cap_ms: u64,
    /// Number of translucent rings used to approximate the blur.
    pub blur_layers: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            title: "Balls".to_string(),
            frame_time_cap_ms: 16,
            blur_layers: 6,
        }
    }
}

/// A mount point on the page. Disabled containers behave like a selector
/// that matched nothing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContainerConfig {
    pub name: String,
    pub width: f64,
    pub height: f64,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl ContainerConfig {
    pub fn new(name: &str, width: f64, height: f64) -> ContainerConfig {
        ContainerConfig {
            name: name.to_string(),
            width,
            height,
            enabled: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.level.parse::<LevelFilter>().map_err(|_| {
            Error::InvalidConfig(format!("unknown log level '{}'", self.level))
        })
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "warn".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub background: BackgroundConfig,
    pub transfer: TransferConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
    pub containers: Vec<ContainerConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            background: BackgroundConfig::default(),
            transfer: TransferConfig::default(),
            display: DisplayConfig::default(),
            logging: LoggingConfig::default(),
            containers: vec![
                ContainerConfig::new("hero", 1280., 480.),
                ContainerConfig::new("skills", 1280., 360.),
            ],
        }
    }
}

impl AppConfig {
    /// The values the landing page boots with.
    pub fn landing_page() -> AppConfig {
        AppConfig {
            background: BackgroundConfig {
                num_balls: 20,
                min_size: 100.,
                max_size: 250.,
                blur: 30.,
                ..BackgroundConfig::default()
            },
            transfer: TransferConfig { interval_ms: 7000 },
            ..AppConfig::default()
        }
    }

    pub fn from_toml_str(content: &str) -> Result<AppConfig> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path` when given, otherwise falls back to `base`.
    pub fn load(path: Option<&Path>, base: AppConfig) -> Result<AppConfig> {
        match path {
            Some(path) => {
                info!("Loading config from {}", path.display());
                let content = std::fs::read_to_string(path)?;
                AppConfig::from_toml_str(&content)
            }
            None => {
                base.validate()?;
                Ok(base)
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let background = &self.background;
        let lengths = [
            ("background.min_size", background.min_size),
            ("background.max_size", background.max_size),
            ("background.blur", background.blur),
            ("background.reference_width", background.reference_width),
        ];
        for (name, value) in lengths {
            if !value.is_finite() {
                return Err(Error::InvalidConfig(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        if background.min_size < 0. || background.min_size > background.max_size {
            return Err(Error::InvalidConfig(format!(
                "ball size range [{}, {}] is empty",
                background.min_size, background.max_size
            )));
        }
        if background.blur < 0. {
            return Err(Error::InvalidConfig(format!(
                "blur must not be negative, got {}",
                background.blur
            )));
        }
        if self.transfer.interval_ms == 0 {
            return Err(Error::InvalidConfig(
                "transfer interval must be positive".to_string(),
            ));
        }
        for container in &self.containers {
            if !container.width.is_finite() || !container.height.is_finite() {
                return Err(Error::InvalidConfig(format!(
                    "container '{}' must have a finite size",
                    container.name
                )));
            }
            if container.width < 0. || container.height < 0. {
                return Err(Error::InvalidConfig(format!(
                    "container '{}' has a negative size",
                    container.name
                )));
            }
        }
        self.logging.level_filter()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_script() {
        let config = AppConfig::default();
        assert_eq!(config.background.num_balls, 7);
        assert_eq!(config.background.min_size, 150.);
        assert_eq!(config.background.max_size, 300.);
        assert_eq!(config.background.blur, 30.);
        assert_eq!(config.transfer.interval(), Duration::from_millis(5000));
    }

    #[test]
    fn landing_page_preset() {
        let config = AppConfig::landing_page();
        assert_eq!(config.background.num_balls, 20);
        assert_eq!(config.background.min_size, 100.);
        assert_eq!(config.background.max_size, 250.);
        assert_eq!(config.transfer.interval_ms, 7000);
        assert_eq!(config.containers.len(), 2);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [background]
            num_balls = 3

            [[containers]]
            name = "hero"
            width = 800
            height = 400

            [[containers]]
            name = "skills"
            width = 800
            height = 300
            enabled = false
            "#,
        )
        .unwrap();
        assert_eq!(config.background.num_balls, 3);
        assert_eq!(config.background.max_size, 300.);
        assert_eq!(config.transfer.interval_ms, 5000);
        assert_eq!(config.containers.len(), 2);
        assert!(config.containers[0].enabled);
        assert!(!config.containers[1].enabled);
    }

    #[test]
    fn rejects_inverted_size_range() {
        let result = AppConfig::from_toml_str(
            r#"
            [background]
            min_size = 300
            max_size = 100
            "#,
        );
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_non_finite_values() {
        for toml in [
            "[background]\nmax_size = inf\n",
            "[background]\nmin_size = nan\n",
            "[background]\nblur = inf\n",
            "[background]\nreference_width = -inf\n",
            "[[containers]]\nname = \"hero\"\nwidth = inf\nheight = 400\n",
            "[[containers]]\nname = \"hero\"\nwidth = 800\nheight = nan\n",
        ] {
            let result = AppConfig::from_toml_str(toml);
            assert!(matches!(result, Err(Error::InvalidConfig(_))), "accepted {:?}", toml);
        }
    }

    #[test]
    fn log_level_comes_from_config() {
        assert_eq!(AppConfig::default().logging.level_filter().unwrap(), LevelFilter::Warn);
        let config = AppConfig::from_toml_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.logging.level_filter().unwrap(), LevelFilter::Debug);
        let result = AppConfig::from_toml_str("[logging]\nlevel = \"loud\"\n");
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_zero_interval() {
        let result = AppConfig::from_toml_str("[transfer]\ninterval_ms = 0\n");
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn reports_parse_errors() {
        let result = AppConfig::from_toml_str("[background\n");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn load_without_path_uses_base() {
        let config = AppConfig::load(None, AppConfig::landing_page()).unwrap();
        assert_eq!(config, AppConfig::landing_page());
    }
}
