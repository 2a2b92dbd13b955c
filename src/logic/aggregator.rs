use super::impact_table::WeatherImpactTable;
use crate::models::{DailyForecastSummary, ForecastEntry, TemperatureRange};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Reduce sub-daily forecast entries to one worst-case summary per UTC day,
/// in ascending date order. Entries need not be sorted.
pub fn aggregate_forecast(
    table: &WeatherImpactTable,
    entries: &[ForecastEntry],
) -> Vec<DailyForecastSummary> {
    // Group by date, keeping input order within each day
    let mut by_date: HashMap<NaiveDate, Vec<&ForecastEntry>> = HashMap::new();
    for entry in entries {
        match entry.utc_date() {
            Some(date) => by_date.entry(date).or_default().push(entry),
            None => tracing::debug!(
                "Skipping forecast entry with out-of-range timestamp {}",
                entry.timestamp_seconds
            ),
        }
    }

    let mut days: Vec<DailyForecastSummary> = by_date
        .into_iter()
        .filter_map(|(date, day_entries)| aggregate_day(table, date, &day_entries))
        .collect();

    days.sort_by_key(|d| d.date);
    days
}

fn aggregate_day(
    table: &WeatherImpactTable,
    date: NaiveDate,
    entries: &[&ForecastEntry],
) -> Option<DailyForecastSummary> {
    let first = entries.first()?;

    // The first entry sets the baseline; only a strictly worse reading replaces
    // it, so the earliest condition at the worst level names the day.
    let mut worst_condition = first.condition;
    let mut worst_level = table.lookup(first.condition).impact_level;
    let mut max_temp = first.temperature_celsius;
    let mut min_temp = first.temperature_celsius;
    let mut max_wind = first.wind_speed_ms;

    for entry in &entries[1..] {
        let level = table.lookup(entry.condition).impact_level;
        if level > worst_level {
            worst_level = level;
            worst_condition = entry.condition;
        }

        max_temp = max_temp.max(entry.temperature_celsius);
        min_temp = min_temp.min(entry.temperature_celsius);
        max_wind = max_wind.max(entry.wind_speed_ms);
    }

    Some(DailyForecastSummary {
        date,
        condition: worst_condition,
        impact_level: worst_level,
        temperature: TemperatureRange {
            min: min_temp,
            max: max_temp,
        },
        max_wind_speed_ms: max_wind,
        activities: table.lookup(worst_condition).clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityKind, ActivityStatus, ImpactLevel, WeatherCondition};

    // 2024-06-03T00:00:00Z
    const DAY_START: i64 = 1_717_372_800;
    const HOUR: i64 = 3600;
    const DAY: i64 = 24 * HOUR;

    fn entry(offset: i64, condition: WeatherCondition, temp: f64, wind: f64) -> ForecastEntry {
        ForecastEntry {
            timestamp_seconds: DAY_START + offset,
            temperature_celsius: temp,
            condition,
            wind_speed_ms: wind,
        }
    }

    #[test]
    fn empty_input_yields_no_days() {
        let table = WeatherImpactTable::standard();
        assert!(aggregate_forecast(table, &[]).is_empty());
    }

    #[test]
    fn single_entry_day() {
        let table = WeatherImpactTable::standard();
        let days = aggregate_forecast(table, &[entry(9 * HOUR, WeatherCondition::Clouds, 27.5, 4.0)]);

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert_eq!(days[0].temperature.min, 27.5);
        assert_eq!(days[0].temperature.max, 27.5);
        assert_eq!(days[0].max_wind_speed_ms, 4.0);
        assert_eq!(days[0].impact_level, ImpactLevel::Low);
    }

    #[test]
    fn same_day_entries_collapse() {
        let table = WeatherImpactTable::standard();
        let days = aggregate_forecast(
            table,
            &[
                entry(3 * HOUR, WeatherCondition::Clear, 24.0, 2.0),
                entry(15 * HOUR, WeatherCondition::Clear, 33.0, 6.5),
            ],
        );

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].temperature.min, 24.0);
        assert_eq!(days[0].temperature.max, 33.0);
        assert_eq!(days[0].max_wind_speed_ms, 6.5);
    }

    #[test]
    fn worst_condition_names_the_day() {
        let table = WeatherImpactTable::standard();
        let days = aggregate_forecast(
            table,
            &[
                entry(0, WeatherCondition::Clear, 20.0, 1.0),
                entry(3 * HOUR, WeatherCondition::Rain, 19.0, 3.0),
                entry(6 * HOUR, WeatherCondition::Thunderstorm, 18.0, 9.0),
                entry(9 * HOUR, WeatherCondition::Clouds, 22.0, 2.0),
            ],
        );

        assert_eq!(days[0].condition, WeatherCondition::Thunderstorm);
        assert_eq!(days[0].impact_level, ImpactLevel::High);
        assert_eq!(
            days[0].activity(ActivityKind::Framing).status(),
            ActivityStatus::Halted
        );
    }

    #[test]
    fn first_condition_wins_ties_at_worst_level() {
        let table = WeatherImpactTable::standard();
        let days = aggregate_forecast(
            table,
            &[
                entry(0, WeatherCondition::Clear, 20.0, 1.0),
                entry(3 * HOUR, WeatherCondition::Fog, 19.0, 1.0),
                entry(6 * HOUR, WeatherCondition::Rain, 18.0, 1.0),
            ],
        );

        // Fog and Rain are both Moderate; Fog came first
        assert_eq!(days[0].condition, WeatherCondition::Fog);
        assert_eq!(days[0].impact_level, ImpactLevel::Moderate);
    }

    #[test]
    fn low_conditions_keep_first_seen_name() {
        let table = WeatherImpactTable::standard();
        let days = aggregate_forecast(
            table,
            &[
                entry(0, WeatherCondition::Drizzle, 20.0, 1.0),
                entry(3 * HOUR, WeatherCondition::Clear, 21.0, 1.0),
            ],
        );
        assert_eq!(days[0].condition, WeatherCondition::Drizzle);
        assert_eq!(
            days[0].activity(ActivityKind::Roofing).status(),
            ActivityStatus::Delayed
        );
    }

    #[test]
    fn unknown_never_overrides_known() {
        let table = WeatherImpactTable::standard();
        let days = aggregate_forecast(
            table,
            &[
                entry(0, WeatherCondition::Other, 20.0, 1.0),
                entry(3 * HOUR, WeatherCondition::Clouds, 21.0, 1.0),
                entry(6 * HOUR, WeatherCondition::Other, 21.0, 1.0),
            ],
        );
        assert_eq!(days[0].condition, WeatherCondition::Clouds);
        assert_eq!(days[0].impact_level, ImpactLevel::Low);
    }

    #[test]
    fn days_come_out_in_ascending_order() {
        let table = WeatherImpactTable::standard();
        let days = aggregate_forecast(
            table,
            &[
                entry(2 * DAY + HOUR, WeatherCondition::Snow, -2.0, 5.0),
                entry(HOUR, WeatherCondition::Clear, 25.0, 1.0),
                entry(DAY + HOUR, WeatherCondition::Rain, 15.0, 3.0),
                entry(DAY + 5 * HOUR, WeatherCondition::Clear, 18.0, 2.0),
            ],
        );

        let dates: Vec<_> = days.iter().map(|d| d.date.to_string()).collect();
        assert_eq!(dates, vec!["2024-06-03", "2024-06-04", "2024-06-05"]);
        assert_eq!(days[1].condition, WeatherCondition::Rain);
        assert_eq!(days[1].temperature.max, 18.0);
        assert_eq!(days[2].condition, WeatherCondition::Snow);
    }

    #[test]
    fn grouping_splits_at_utc_midnight() {
        let table = WeatherImpactTable::standard();
        let days = aggregate_forecast(
            table,
            &[
                entry(DAY - 1, WeatherCondition::Clear, 20.0, 1.0),
                entry(DAY, WeatherCondition::Clear, 20.0, 1.0),
            ],
        );
        assert_eq!(days.len(), 2);
    }
}
