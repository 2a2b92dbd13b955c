use crate::models::{
    ActivityKind, ActivityStatus, DailyForecastSummary, RecommendationKind, RecommendedDay,
    ScheduleRecommendation,
};

/// Best and worst forecast days for each requested activity.
///
/// Optimal days produce a scheduling suggestion; Delayed or Halted days
/// produce an avoid notice. Caution days are not reported either way.
pub fn recommend(
    forecast: &[DailyForecastSummary],
    activities: &[ActivityKind],
) -> Vec<ScheduleRecommendation> {
    if forecast.is_empty() {
        return Vec::new();
    }

    let mut recommendations = Vec::new();

    for &activity in activities {
        let mut best_days = Vec::new();
        let mut worst_days = Vec::new();

        for day in forecast {
            let status = day.activity(activity).status();
            let entry = RecommendedDay {
                date: day.date,
                condition: day.condition,
                status,
            };
            match status {
                ActivityStatus::Optimal => best_days.push(entry),
                ActivityStatus::Delayed | ActivityStatus::Halted => worst_days.push(entry),
                ActivityStatus::Caution => {}
            }
        }

        if !best_days.is_empty() {
            recommendations.push(ScheduleRecommendation::new(
                activity,
                RecommendationKind::Optimal,
                best_days,
            ));
        }
        if !worst_days.is_empty() {
            recommendations.push(ScheduleRecommendation::new(
                activity,
                RecommendationKind::Avoid,
                worst_days,
            ));
        }
    }

    recommendations
}
