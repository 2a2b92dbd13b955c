use crate::config::Config;
use crate::datasources::{DemoWeather, OpenWeatherMapClient};
use crate::models::{CurrentWeatherReading, ForecastEntry};
use chrono::Utc;

/// Fetches weather for the scheduling core. Upstream failures never reach
/// the caller: they are logged and replaced with a benign clear-sky default.
pub struct WeatherService {
    openweathermap_client: Option<OpenWeatherMapClient>,
    demo: DemoWeather,
}

impl WeatherService {
    pub fn new(config: &Config) -> Self {
        let openweathermap_client = config
            .openweathermap
            .as_ref()
            .filter(|c| c.enabled && c.has_api_key())
            .map(|c| {
                tracing::info!("OpenWeatherMap client configured for {}", config.site.location);
                OpenWeatherMapClient::new(c.clone())
            });

        if openweathermap_client.is_none() {
            tracing::info!("OpenWeatherMap not configured - using demo weather");
        }

        let demo = match config.schedule.seed {
            Some(seed) => DemoWeather::seeded(seed),
            None => DemoWeather::new(),
        };

        Self {
            openweathermap_client,
            demo,
        }
    }

    pub fn with_client(client: Option<OpenWeatherMapClient>, demo: DemoWeather) -> Self {
        Self {
            openweathermap_client: client,
            demo,
        }
    }

    pub fn is_live(&self) -> bool {
        self.openweathermap_client.is_some()
    }

    /// Current reading; `None` only when the provider answered without a condition.
    pub async fn current(&mut self) -> Option<CurrentWeatherReading> {
        let Some(ref client) = self.openweathermap_client else {
            return Some(self.demo.current());
        };

        match client.fetch_current().await {
            Ok(reading) => {
                if reading.is_none() {
                    tracing::warn!("Current weather response had no condition entry");
                }
                reading
            }
            Err(e) => {
                tracing::warn!("Failed to fetch current weather: {}", e);
                Some(CurrentWeatherReading::fallback())
            }
        }
    }

    pub async fn forecast(&mut self) -> Vec<ForecastEntry> {
        let Some(ref client) = self.openweathermap_client else {
            return self.demo.forecast(Utc::now());
        };

        match client.fetch_forecast().await {
            Ok(entries) => {
                tracing::debug!("Weather forecast updated: {} entries", entries.len());
                entries
            }
            Err(e) => {
                tracing::warn!("Failed to fetch weather forecast: {}", e);
                vec![ForecastEntry::fallback(Utc::now())]
            }
        }
    }

    pub async fn check_connection(&self) -> ConnectionStatus {
        match self.openweathermap_client {
            Some(ref client) => ConnectionStatus {
                configured: true,
                reachable: client.test_connection().await.unwrap_or(false),
            },
            None => ConnectionStatus::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionStatus {
    pub configured: bool,
    pub reachable: bool,
}

impl ConnectionStatus {
    pub fn describe(&self) -> &'static str {
        match (self.configured, self.reachable) {
            (false, _) => "OpenWeatherMap: not configured (demo weather)",
            (true, true) => "OpenWeatherMap: OK",
            (true, false) => "OpenWeatherMap: OFFLINE",
        }
    }
}
