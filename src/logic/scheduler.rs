use crate::models::{
    ActivityStatus, ConstructionActivity, DailyForecastSummary, DailySchedule, ImpactLevel,
    ScheduleStatus, ScheduledActivity, TimeSlot, WeatherCondition, ACTIVITY_CATALOG, EXCAVATION,
    EXTERIOR_FINISHING, FOUNDATION_WORK, PAINTING, ROOFING,
};

/// Work day starts at 08:00
pub const WORKDAY_START_HOUR: u32 = 8;

/// Weather-exposed work pulled on High impact and on rain or storms
const SEVERE_WEATHER_EXCLUSIONS: [&str; 4] = [EXCAVATION, FOUNDATION_WORK, ROOFING, EXTERIOR_FINISHING];
/// Work pulled on Moderate impact
const MODERATE_WEATHER_EXCLUSIONS: [&str; 2] = [ROOFING, EXTERIOR_FINISHING];

/// Clamp a requested headcount to at least one worker
pub fn clamp_labor(labor_availability: i32) -> u32 {
    labor_availability.max(1) as u32
}

/// Whether the day's weather rules keep this activity off the site
fn excluded_by_weather(activity: &ConstructionActivity, summary: &DailyForecastSummary) -> bool {
    let by_impact = match summary.impact_level {
        ImpactLevel::High => SEVERE_WEATHER_EXCLUSIONS.contains(&activity.name),
        ImpactLevel::Moderate => MODERATE_WEATHER_EXCLUSIONS.contains(&activity.name),
        ImpactLevel::Low | ImpactLevel::Unknown => false,
    };

    // Condition rules add to the impact-level rules
    let by_condition = match summary.condition {
        WeatherCondition::Rain | WeatherCondition::Thunderstorm => {
            SEVERE_WEATHER_EXCLUSIONS.contains(&activity.name)
        }
        WeatherCondition::Snow => {
            SEVERE_WEATHER_EXCLUSIONS.contains(&activity.name) || activity.name == PAINTING
        }
        _ => false,
    };

    let halted = activity
        .impact_kind
        .map(|kind| summary.activity(kind).status() == ActivityStatus::Halted)
        .unwrap_or(false);

    by_impact || by_condition || halted
}

/// Build one day's schedule from the fixed catalog.
///
/// Activities are filtered by weather, then by headcount, ordered by priority
/// (catalog order within a priority), and packed back to back from 08:00.
/// Everything filtered out lands in `postponed` with its reason; weather wins
/// when both reasons apply.
pub fn schedule_day(summary: &DailyForecastSummary, labor_availability: i32) -> DailySchedule {
    let labor = clamp_labor(labor_availability);

    let mut runnable: Vec<ConstructionActivity> = Vec::new();
    let mut postponed: Vec<ScheduledActivity> = Vec::new();

    for activity in ACTIVITY_CATALOG {
        let status = if excluded_by_weather(&activity, summary) {
            ScheduleStatus::PostponedWeather
        } else if activity.labor_needed > labor {
            ScheduleStatus::PostponedLabor
        } else {
            runnable.push(activity);
            continue;
        };
        postponed.push(ScheduledActivity {
            activity,
            time_slot: None,
            status,
        });
    }

    // Stable sorts keep catalog order within a priority
    runnable.sort_by_key(|a| a.priority);
    postponed.sort_by_key(|a| a.activity.priority);

    let mut start_hour = WORKDAY_START_HOUR;
    let activities = runnable
        .into_iter()
        .map(|activity| {
            let end_hour = start_hour + activity.duration_hours;
            let slot = TimeSlot {
                start_hour,
                end_hour,
            };
            start_hour = end_hour;
            ScheduledActivity {
                activity,
                time_slot: Some(slot),
                status: ScheduleStatus::Scheduled,
            }
        })
        .collect();

    DailySchedule {
        date: summary.date,
        weather_condition: summary.condition,
        impact_level: summary.impact_level,
        labor_availability: labor,
        activities,
        postponed,
    }
}
