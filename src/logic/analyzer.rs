use super::impact_table::WeatherImpactTable;
use crate::models::{CurrentWeatherReading, ImpactLevel, WeatherAssessment, WeatherImpactProfile};

/// Above this, concrete curing and roof heat exposure become a problem
pub const HEAT_THRESHOLD_C: f64 = 35.0;
/// Below this, fresh concrete risks freezing
pub const COLD_THRESHOLD_C: f64 = 5.0;

/// Temperature-extreme profile for a reading, independent of the sky condition
pub fn temperature_profile(temperature_celsius: f64) -> WeatherImpactProfile {
    if temperature_celsius > HEAT_THRESHOLD_C {
        WeatherImpactProfile::from_delays(ImpactLevel::Moderate, [1, 2, 1, 2, 1, 0])
    } else if temperature_celsius < COLD_THRESHOLD_C {
        WeatherImpactProfile::from_delays(ImpactLevel::Moderate, [1, 2, 1, 1, 2, 0])
    } else {
        WeatherImpactProfile::calm()
    }
}

/// Assess a current-weather reading against the impact table.
///
/// A missing reading degrades to the table's default profile. Otherwise the
/// condition profile and the temperature profile are merged per activity by
/// taking the larger delay.
pub fn analyze_weather_impact(
    table: &WeatherImpactTable,
    reading: Option<&CurrentWeatherReading>,
) -> WeatherAssessment {
    let Some(reading) = reading else {
        tracing::debug!("No weather reading available, using default impact profile");
        return WeatherAssessment {
            profile: table.default_profile().clone(),
            reading: None,
        };
    };

    let condition_profile = table.lookup(reading.condition);
    let temp_profile = if reading.temperature_celsius.is_nan() {
        WeatherImpactProfile::calm()
    } else {
        temperature_profile(reading.temperature_celsius)
    };

    WeatherAssessment {
        profile: condition_profile.combine(&temp_profile),
        reading: Some(reading.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityKind, ActivityStatus, WeatherCondition};

    fn reading(condition: WeatherCondition, temperature_celsius: f64) -> CurrentWeatherReading {
        CurrentWeatherReading {
            condition,
            temperature_celsius,
            humidity_percent: 55.0,
            wind_speed_ms: 2.5,
            description: "test".to_string(),
        }
    }

    #[test]
    fn missing_reading_uses_default_profile() {
        let table = WeatherImpactTable::standard();
        let result = analyze_weather_impact(table, None);
        assert_eq!(&result.profile, table.default_profile());
        assert!(result.reading.is_none());
    }

    #[test]
    fn heat_dominates_clear_sky() {
        let table = WeatherImpactTable::standard();
        let result = analyze_weather_impact(table, Some(&reading(WeatherCondition::Clear, 40.0)));

        assert!(result.profile.activity(ActivityKind::Foundation).delay_units() >= 2);
        assert!(result.profile.activity(ActivityKind::Roofing).delay_units() >= 2);
        assert_eq!(
            result.profile.activity(ActivityKind::Interior).status(),
            ActivityStatus::Optimal
        );
        assert_eq!(result.profile.impact_level, ImpactLevel::Moderate);
    }

    #[test]
    fn cold_delays_foundation_and_exterior() {
        let table = WeatherImpactTable::standard();
        let result = analyze_weather_impact(table, Some(&reading(WeatherCondition::Clouds, 2.0)));

        assert_eq!(
            result.profile.activity(ActivityKind::Foundation).status(),
            ActivityStatus::Delayed
        );
        assert_eq!(
            result.profile.activity(ActivityKind::Exterior).status(),
            ActivityStatus::Delayed
        );
        assert_eq!(result.profile.activity(ActivityKind::Roofing).delay_units(), 1);
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(temperature_profile(35.0), WeatherImpactProfile::calm());
        assert_eq!(temperature_profile(5.0), WeatherImpactProfile::calm());
        assert_ne!(temperature_profile(35.1), WeatherImpactProfile::calm());
        assert_ne!(temperature_profile(4.9), WeatherImpactProfile::calm());
    }

    #[test]
    fn condition_delay_survives_mild_temperature() {
        let table = WeatherImpactTable::standard();
        let result = analyze_weather_impact(table, Some(&reading(WeatherCondition::Rain, 20.0)));
        assert_eq!(result.profile.activity(ActivityKind::Roofing).delay_units(), 3);
        assert_eq!(result.profile.impact_level, ImpactLevel::Moderate);
    }

    #[test]
    fn unknown_condition_in_mild_weather_reports_low() {
        let table = WeatherImpactTable::standard();
        let result = analyze_weather_impact(table, Some(&reading(WeatherCondition::Other, 20.0)));
        assert_eq!(result.profile.impact_level, ImpactLevel::Low);
        // Default table delays still apply
        assert_eq!(result.profile.activity(ActivityKind::Excavation).delay_units(), 1);
    }

    #[test]
    fn combined_level_is_never_weaker_than_either_source() {
        let table = WeatherImpactTable::standard();
        for condition in WeatherCondition::KNOWN {
            for temp in [-10.0, 4.0, 20.0, 36.0, 45.0] {
                let result = analyze_weather_impact(table, Some(&reading(condition, temp)));
                let weather_level = table.lookup(condition).impact_level;
                let temp_level = temperature_profile(temp).impact_level;
                assert!(result.profile.impact_level >= weather_level);
                assert!(result.profile.impact_level >= temp_level);

                for kind in ActivityKind::ALL {
                    let combined = result.profile.activity(kind);
                    assert!(combined.delay_units() >= table.lookup(condition).activity(kind).delay_units());
                    assert!(combined.delay_units() >= temperature_profile(temp).activity(kind).delay_units());
                }
            }
        }
    }

    #[test]
    fn infinite_temperatures_hit_the_extreme_profiles() {
        let table = WeatherImpactTable::standard();

        let hot = analyze_weather_impact(table, Some(&reading(WeatherCondition::Clear, f64::INFINITY)));
        assert_eq!(hot.profile.impact_level, ImpactLevel::Moderate);
        assert_eq!(hot.profile.activity(ActivityKind::Foundation).delay_units(), 2);

        let cold =
            analyze_weather_impact(table, Some(&reading(WeatherCondition::Clear, f64::NEG_INFINITY)));
        assert_eq!(cold.profile.impact_level, ImpactLevel::Moderate);
        assert_eq!(cold.profile.activity(ActivityKind::Exterior).delay_units(), 2);
    }

    #[test]
    fn nan_temperature_keeps_the_condition_profile() {
        let table = WeatherImpactTable::standard();
        let result = analyze_weather_impact(table, Some(&reading(WeatherCondition::Clear, f64::NAN)));
        assert_eq!(&result.profile, table.lookup(WeatherCondition::Clear));
    }

    #[test]
    fn reading_is_carried_through_for_display() {
        let table = WeatherImpactTable::standard();
        let input = reading(WeatherCondition::Haze, 28.0);
        let result = analyze_weather_impact(table, Some(&input));
        assert_eq!(result.reading, Some(input));
    }
}
