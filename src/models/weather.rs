use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Weather condition categories, keyed by the OpenWeatherMap `main` group name
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum WeatherCondition {
    #[default]
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Fog,
    Haze,
    Dust,
    /// Anything the impact table has no entry for
    Other,
}

impl WeatherCondition {
    pub const KNOWN: [WeatherCondition; 10] = [
        WeatherCondition::Clear,
        WeatherCondition::Clouds,
        WeatherCondition::Rain,
        WeatherCondition::Drizzle,
        WeatherCondition::Thunderstorm,
        WeatherCondition::Snow,
        WeatherCondition::Mist,
        WeatherCondition::Fog,
        WeatherCondition::Haze,
        WeatherCondition::Dust,
    ];

    /// Parse a condition group name. Unrecognized names map to `Other`.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "Clear" => WeatherCondition::Clear,
            "Clouds" => WeatherCondition::Clouds,
            "Rain" => WeatherCondition::Rain,
            "Drizzle" => WeatherCondition::Drizzle,
            "Thunderstorm" => WeatherCondition::Thunderstorm,
            "Snow" => WeatherCondition::Snow,
            "Mist" => WeatherCondition::Mist,
            "Fog" => WeatherCondition::Fog,
            "Haze" => WeatherCondition::Haze,
            "Dust" => WeatherCondition::Dust,
            _ => WeatherCondition::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::Clouds => "Clouds",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Drizzle => "Drizzle",
            WeatherCondition::Thunderstorm => "Thunderstorm",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::Mist => "Mist",
            WeatherCondition::Fog => "Fog",
            WeatherCondition::Haze => "Haze",
            WeatherCondition::Dust => "Dust",
            WeatherCondition::Other => "Other",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "☀",
            WeatherCondition::Clouds => "☁",
            WeatherCondition::Rain => "🌧",
            WeatherCondition::Drizzle => "🌦",
            WeatherCondition::Thunderstorm => "⛈",
            WeatherCondition::Snow => "❄",
            WeatherCondition::Mist | WeatherCondition::Fog | WeatherCondition::Haze => "🌫",
            WeatherCondition::Dust => "💨",
            WeatherCondition::Other => "?",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A normalized point-in-time weather observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeatherReading {
    pub condition: WeatherCondition,
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    pub wind_speed_ms: f64,
    pub description: String,
}

impl CurrentWeatherReading {
    /// Benign reading substituted when the upstream fetch fails
    pub fn fallback() -> Self {
        Self {
            condition: WeatherCondition::Clear,
            temperature_celsius: 30.0,
            humidity_percent: 60.0,
            wind_speed_ms: 3.0,
            description: "clear sky".to_string(),
        }
    }
}

/// A single sub-daily forecast point (typically 3-hour spacing)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub timestamp_seconds: i64,
    pub temperature_celsius: f64,
    pub condition: WeatherCondition,
    pub wind_speed_ms: f64,
}

impl ForecastEntry {
    /// Benign single-entry forecast substituted when the upstream fetch fails
    pub fn fallback(now: DateTime<Utc>) -> Self {
        Self {
            timestamp_seconds: now.timestamp(),
            temperature_celsius: 30.0,
            condition: WeatherCondition::Clear,
            wind_speed_ms: 3.0,
        }
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp_seconds, 0)
    }

    /// Calendar day of this entry, with the day boundary at UTC midnight
    pub fn utc_date(&self) -> Option<NaiveDate> {
        self.timestamp().map(|t| t.date_naive())
    }
}
