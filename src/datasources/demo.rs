use crate::models::{CurrentWeatherReading, ForecastEntry, WeatherCondition};
use chrono::{DateTime, Duration, Timelike, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FORECAST_DAYS: i64 = 5;
const ENTRIES_PER_DAY: i64 = 8;
const ENTRY_SPACING_HOURS: i64 = 3;
const BASE_TEMP_C: f64 = 30.0;

/// Day-by-day condition cycle of the demo forecast
const CONDITION_CYCLE: [WeatherCondition; 5] = [
    WeatherCondition::Clear,
    WeatherCondition::Clouds,
    WeatherCondition::Rain,
    WeatherCondition::Clear,
    WeatherCondition::Clouds,
];

/// Synthetic weather for sites without an API key
pub struct DemoWeather {
    rng: StdRng,
}

impl DemoWeather {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn current(&mut self) -> CurrentWeatherReading {
        CurrentWeatherReading {
            condition: WeatherCondition::Clear,
            temperature_celsius: (BASE_TEMP_C + self.rng.gen_range(0.0..5.0)).round(),
            humidity_percent: (60.0 + self.rng.gen_range(0.0..20.0_f64)).round(),
            wind_speed_ms: 3.6,
            description: "clear sky".to_string(),
        }
    }

    /// Five days of 3-hourly entries starting at `start`
    pub fn forecast(&mut self, start: DateTime<Utc>) -> Vec<ForecastEntry> {
        let mut entries = Vec::with_capacity((FORECAST_DAYS * ENTRIES_PER_DAY) as usize);

        for day in 0..FORECAST_DAYS {
            let condition = CONDITION_CYCLE[day as usize % CONDITION_CYCLE.len()];
            for slot in 0..ENTRIES_PER_DAY {
                let timestamp =
                    start + Duration::days(day) + Duration::hours(slot * ENTRY_SPACING_HOURS);

                let hour = timestamp.hour();
                let mut temp = BASE_TEMP_C;
                if (10..=16).contains(&hour) {
                    temp += 5.0;
                } else if hour <= 5 {
                    temp -= 5.0;
                }
                temp += self.rng.gen_range(-1.5..1.5);

                entries.push(ForecastEntry {
                    timestamp_seconds: timestamp.timestamp(),
                    temperature_celsius: temp,
                    condition,
                    wind_speed_ms: 2.0 + self.rng.gen_range(0.0..5.0),
                });
            }
        }

        entries
    }
}

impl Default for DemoWeather {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::aggregator::aggregate_forecast;
    use crate::logic::impact_table::WeatherImpactTable;
    use chrono::TimeZone;

    fn midnight() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap()
    }

    #[test]
    fn forecast_shape() {
        let entries = DemoWeather::seeded(1).forecast(midnight());
        assert_eq!(entries.len(), 40);
        assert!(entries
            .windows(2)
            .all(|w| w[1].timestamp_seconds - w[0].timestamp_seconds == 3 * 3600));
        assert!(entries
            .iter()
            .all(|e| (23.5..=36.5).contains(&e.temperature_celsius)));
        assert!(entries.iter().all(|e| (2.0..7.0).contains(&e.wind_speed_ms)));
    }

    #[test]
    fn forecast_cycles_conditions_by_day() {
        let entries = DemoWeather::seeded(1).forecast(midnight());
        let days = aggregate_forecast(WeatherImpactTable::standard(), &entries);

        let conditions: Vec<_> = days.iter().map(|d| d.condition).collect();
        assert_eq!(conditions, CONDITION_CYCLE.to_vec());
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = DemoWeather::seeded(9).forecast(midnight());
        let b = DemoWeather::seeded(9).forecast(midnight());
        assert_eq!(a, b);
    }

    #[test]
    fn current_reading_is_warm_and_clear() {
        let reading = DemoWeather::seeded(3).current();
        assert_eq!(reading.condition, WeatherCondition::Clear);
        assert!((30.0..=35.0).contains(&reading.temperature_celsius));
        assert!((60.0..=80.0).contains(&reading.humidity_percent));
    }
}
