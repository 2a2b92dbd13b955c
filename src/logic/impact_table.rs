use crate::models::{ImpactLevel, WeatherCondition, WeatherImpactProfile};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Read-only mapping from weather condition to construction impact profile.
///
/// Delay arrays are in `ActivityKind::ALL` order:
/// Excavation, Foundation, Framing, Roofing, Exterior, Interior.
#[derive(Debug, Clone)]
pub struct WeatherImpactTable {
    profiles: HashMap<WeatherCondition, WeatherImpactProfile>,
    default: WeatherImpactProfile,
}

impl WeatherImpactTable {
    pub fn new(
        profiles: HashMap<WeatherCondition, WeatherImpactProfile>,
        default: WeatherImpactProfile,
    ) -> Self {
        Self { profiles, default }
    }

    /// Build the standard construction table
    pub fn build_standard() -> Self {
        use ImpactLevel::*;
        use WeatherCondition::*;

        let rows: [(WeatherCondition, ImpactLevel, [u8; 6]); 10] = [
            (Clear, Low, [0, 0, 0, 0, 0, 0]),
            (Clouds, Low, [0, 0, 0, 0, 0, 0]),
            (Rain, Moderate, [2, 2, 1, 3, 2, 0]),
            (Drizzle, Low, [1, 1, 0, 2, 1, 0]),
            (Thunderstorm, High, [3, 3, 3, 3, 3, 1]),
            (Snow, High, [3, 3, 2, 3, 3, 1]),
            (Mist, Low, [1, 1, 1, 1, 1, 0]),
            (Fog, Moderate, [1, 1, 2, 2, 2, 0]),
            (Haze, Low, [1, 0, 0, 1, 1, 0]),
            (Dust, Moderate, [1, 1, 1, 1, 2, 1]),
        ];

        let profiles = rows
            .into_iter()
            .map(|(condition, level, delays)| {
                (condition, WeatherImpactProfile::from_delays(level, delays))
            })
            .collect();

        Self::new(
            profiles,
            WeatherImpactProfile::from_delays(Unknown, [1, 1, 1, 1, 1, 0]),
        )
    }

    /// Process-wide standard table, built on first use and never mutated
    pub fn standard() -> &'static WeatherImpactTable {
        static TABLE: OnceLock<WeatherImpactTable> = OnceLock::new();
        TABLE.get_or_init(Self::build_standard)
    }

    /// Profile for a condition; unrecognized conditions get the default profile.
    pub fn lookup(&self, condition: WeatherCondition) -> &WeatherImpactProfile {
        self.profiles.get(&condition).unwrap_or(&self.default)
    }

    /// Profile for a raw condition group name
    pub fn lookup_name(&self, name: &str) -> &WeatherImpactProfile {
        self.lookup(WeatherCondition::from_name(name))
    }

    pub fn default_profile(&self) -> &WeatherImpactProfile {
        &self.default
    }

    pub fn contains(&self, condition: WeatherCondition) -> bool {
        self.profiles.contains_key(&condition)
    }
}

impl Default for WeatherImpactTable {
    fn default() -> Self {
        Self::build_standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityKind, ActivityStatus};

    #[test]
    fn covers_every_known_condition() {
        let table = WeatherImpactTable::standard();
        for condition in WeatherCondition::KNOWN {
            assert!(table.contains(condition), "missing {}", condition);
        }
        assert!(!table.contains(WeatherCondition::Other));
    }

    #[test]
    fn unrecognized_condition_gets_default() {
        let table = WeatherImpactTable::standard();
        let profile = table.lookup_name("Volcanic Ash");
        assert_eq!(profile, table.default_profile());
        assert_eq!(profile.impact_level, ImpactLevel::Unknown);
        assert_eq!(
            profile.activity(ActivityKind::Interior).status(),
            ActivityStatus::Optimal
        );
        assert_eq!(
            profile.activity(ActivityKind::Roofing).status(),
            ActivityStatus::Caution
        );
    }

    #[test]
    fn every_entry_status_agrees_with_delay() {
        let table = WeatherImpactTable::standard();
        let profiles = WeatherCondition::KNOWN
            .iter()
            .map(|c| table.lookup(*c))
            .chain(std::iter::once(table.default_profile()));

        for profile in profiles {
            assert_eq!(profile.activities().count(), 6);
            for (_, impact) in profile.activities() {
                let expected = match impact.delay_units() {
                    0 => ActivityStatus::Optimal,
                    1 => ActivityStatus::Caution,
                    2 => ActivityStatus::Delayed,
                    _ => ActivityStatus::Halted,
                };
                assert_eq!(impact.status(), expected);
            }
        }
    }

    #[test]
    fn severe_conditions() {
        let table = WeatherImpactTable::standard();
        let storm = table.lookup(WeatherCondition::Thunderstorm);
        assert_eq!(storm.impact_level, ImpactLevel::High);
        assert_eq!(
            storm.activity(ActivityKind::Framing).status(),
            ActivityStatus::Halted
        );

        let rain = table.lookup(WeatherCondition::Rain);
        assert_eq!(rain.impact_level, ImpactLevel::Moderate);
        assert_eq!(rain.activity(ActivityKind::Roofing).delay_units(), 3);
        assert_eq!(rain.activity(ActivityKind::Framing).delay_units(), 1);
    }
}
