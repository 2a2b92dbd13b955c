use super::impact::{ActivityKind, ActivityStatus};
use super::weather::WeatherCondition;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationKind {
    Optimal,
    Avoid,
}

impl RecommendationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationKind::Optimal => "Optimal",
            RecommendationKind::Avoid => "Avoid",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            RecommendationKind::Optimal => "→",
            RecommendationKind::Avoid => "⚠",
        }
    }
}

impl std::fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedDay {
    pub date: NaiveDate,
    pub condition: WeatherCondition,
    pub status: ActivityStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRecommendation {
    pub activity: ActivityKind,
    pub kind: RecommendationKind,
    pub message: String,
    pub days: Vec<RecommendedDay>,
}

impl ScheduleRecommendation {
    pub fn new(activity: ActivityKind, kind: RecommendationKind, days: Vec<RecommendedDay>) -> Self {
        let listed = days
            .iter()
            .map(|d| format_day(d.date))
            .collect::<Vec<_>>()
            .join(", ");

        let message = match kind {
            RecommendationKind::Optimal => {
                format!("Schedule {} on {} for optimal conditions.", activity, listed)
            }
            RecommendationKind::Avoid => {
                let cause = days
                    .first()
                    .map(|d| d.condition.as_str().to_lowercase())
                    .unwrap_or_default();
                format!("Avoid {} on {} due to {} conditions.", activity, listed, cause)
            }
        };

        Self {
            activity,
            kind,
            message,
            days,
        }
    }
}

/// Short day label, e.g. `Mon, Jan 6`
pub fn format_day(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}
