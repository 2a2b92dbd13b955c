use super::impact::{ActivityKind, ActivityImpact, ImpactLevel, WeatherImpactProfile};
use super::weather::WeatherCondition;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub min: f64,
    pub max: f64,
}

/// Worst-case reduction of one UTC calendar day of forecast entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecastSummary {
    pub date: NaiveDate,
    /// Condition responsible for the day's worst impact
    pub condition: WeatherCondition,
    pub impact_level: ImpactLevel,
    pub temperature: TemperatureRange,
    pub max_wind_speed_ms: f64,
    /// Activity table of `condition`
    pub activities: WeatherImpactProfile,
}

impl DailyForecastSummary {
    pub fn activity(&self, kind: ActivityKind) -> ActivityImpact {
        self.activities.activity(kind)
    }
}
