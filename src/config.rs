use crate::error::{Result, SiteCastError};
use dialoguer::{Input, Password};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    pub openweathermap: Option<OpenWeatherMapConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    pub name: String,
    pub location: String,
    /// Workers normally on site
    pub labor_availability: i32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScheduleConfig {
    /// Vary the crew by up to one worker per day
    #[serde(default = "default_true")]
    pub labor_jitter: bool,
    /// Fixed seed for reproducible jitter
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_forecast_days")]
    pub forecast_days: usize,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            labor_jitter: true,
            seed: None,
            forecast_days: default_forecast_days(),
        }
    }
}

fn default_forecast_days() -> usize {
    5
}

#[derive(Clone, Deserialize, Serialize)]
pub struct OpenWeatherMapConfig {
    pub api_key: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl OpenWeatherMapConfig {
    /// False for an empty key or a `${VAR}` placeholder left unresolved
    pub fn has_api_key(&self) -> bool {
        let key = self.api_key.trim();
        !key.is_empty() && !(key.starts_with("${") && key.ends_with('}'))
    }
}

fn default_true() -> bool {
    true
}

impl std::fmt::Debug for OpenWeatherMapConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherMapConfig")
            .field("api_key", &"[REDACTED]")
            .field("latitude", &self.latitude)
            .field("longitude", &self.longitude)
            .field("enabled", &self.enabled)
            .finish()
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(SiteCastError::Config(format!(
                "Config file not found at {:?}. Run `sitecast init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| SiteCastError::Config(format!("Failed to read config: {}", e)))?;

        Self::parse(&config_str)
    }

    /// Load the config, falling back to defaults only when no path was given
    /// and no file exists in the standard locations. An explicit path must exist.
    pub fn load_or_default(config_override: Option<PathBuf>) -> Result<Self> {
        if config_override.is_none() && !Self::exists(None) {
            tracing::info!("No config file found - using defaults. Run `sitecast init` to set up.");
            return Ok(Self::default());
        }
        Self::load(config_override)
    }

    /// Parse YAML after substituting `${VAR}` references from the environment
    pub fn parse(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content);

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| SiteCastError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let Some(ref owm) = self.openweathermap {
            if !(-90.0..=90.0).contains(&owm.latitude) || !(-180.0..=180.0).contains(&owm.longitude)
            {
                return Err(SiteCastError::Config(format!(
                    "Coordinates out of range: {}, {}",
                    owm.latitude, owm.longitude
                )));
            }
        }
        if self.schedule.forecast_days == 0 {
            return Err(SiteCastError::Config(
                "schedule.forecast_days must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("sitecast").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        Self::default_config_path()
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/sitecast/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SiteCastError::Config("Cannot determine config directory".into()))?
            .join("sitecast");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up SiteCast!");
        println!();

        println!("Site");
        let name: String = Input::new()
            .with_prompt("  Project name")
            .default("Riverside Residence".into())
            .interact_text()
            .map_err(|e| SiteCastError::Config(format!("Input error: {}", e)))?;

        let location: String = Input::new()
            .with_prompt("  Location")
            .default("Mumbai".into())
            .interact_text()
            .map_err(|e| SiteCastError::Config(format!("Input error: {}", e)))?;

        let labor_availability: i32 = Input::new()
            .with_prompt("  Workers on site")
            .default(6)
            .interact_text()
            .map_err(|e| SiteCastError::Config(format!("Input error: {}", e)))?;

        println!();

        println!("OpenWeatherMap (leave API key blank to use demo weather)");
        let owm_api_key: String = Password::new()
            .with_prompt("  API key")
            .allow_empty_password(true)
            .interact()
            .map_err(|e| SiteCastError::Config(format!("Input error: {}", e)))?;

        let openweathermap = if owm_api_key.is_empty() {
            None
        } else {
            let latitude: f64 = Input::new()
                .with_prompt("  Latitude")
                .default(19.0144)
                .interact_text()
                .map_err(|e| SiteCastError::Config(format!("Input error: {}", e)))?;

            let longitude: f64 = Input::new()
                .with_prompt("  Longitude")
                .default(72.8479)
                .interact_text()
                .map_err(|e| SiteCastError::Config(format!("Input error: {}", e)))?;

            Some(OpenWeatherMapConfig {
                api_key: owm_api_key,
                latitude,
                longitude,
                enabled: true,
            })
        };

        println!();

        let config = Config {
            site: SiteConfig {
                name,
                location,
                labor_availability,
            },
            schedule: ScheduleConfig::default(),
            openweathermap,
        };
        config.validate()?;

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| SiteCastError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# SiteCast Configuration\n# Generated by `sitecast init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        let Ok(re) = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") else {
            return result;
        };

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig {
                name: "Riverside Residence".into(),
                location: "Mumbai".into(),
                labor_availability: 6,
            },
            schedule: ScheduleConfig::default(),
            openweathermap: None,
        }
    }
}
