use super::impact::{ActivityKind, ImpactLevel};
use super::weather::WeatherCondition;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Scheduling priority. Variant order is the scheduling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog entry of site work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConstructionActivity {
    pub name: &'static str,
    pub duration_hours: u32,
    pub priority: Priority,
    pub labor_needed: u32,
    /// Impact-table row governing this work, if it is weather exposed
    #[serde(skip)]
    pub impact_kind: Option<ActivityKind>,
}

impl ConstructionActivity {
    const fn new(
        name: &'static str,
        duration_hours: u32,
        priority: Priority,
        labor_needed: u32,
        impact_kind: Option<ActivityKind>,
    ) -> Self {
        Self {
            name,
            duration_hours,
            priority,
            labor_needed,
            impact_kind,
        }
    }
}

pub const EXCAVATION: &str = "Excavation";
pub const FOUNDATION_WORK: &str = "Foundation Work";
pub const FRAMING: &str = "Framing";
pub const ROOFING: &str = "Roofing";
pub const EXTERIOR_FINISHING: &str = "Exterior Finishing";
pub const INTERIOR_WORK: &str = "Interior Work";
pub const ELECTRICAL_INSTALLATION: &str = "Electrical Installation";
pub const PLUMBING: &str = "Plumbing";
pub const PAINTING: &str = "Painting";
pub const FINAL_INSPECTION: &str = "Final Inspection";

/// The fixed daily work catalog, in catalog order
pub const ACTIVITY_CATALOG: [ConstructionActivity; 10] = [
    ConstructionActivity::new(EXCAVATION, 3, Priority::High, 4, Some(ActivityKind::Excavation)),
    ConstructionActivity::new(
        FOUNDATION_WORK,
        5,
        Priority::Critical,
        6,
        Some(ActivityKind::Foundation),
    ),
    ConstructionActivity::new(FRAMING, 4, Priority::High, 5, Some(ActivityKind::Framing)),
    ConstructionActivity::new(ROOFING, 6, Priority::Medium, 4, Some(ActivityKind::Roofing)),
    ConstructionActivity::new(
        EXTERIOR_FINISHING,
        4,
        Priority::Medium,
        3,
        Some(ActivityKind::Exterior),
    ),
    ConstructionActivity::new(INTERIOR_WORK, 5, Priority::Low, 4, Some(ActivityKind::Interior)),
    ConstructionActivity::new(ELECTRICAL_INSTALLATION, 3, Priority::Medium, 2, None),
    ConstructionActivity::new(PLUMBING, 3, Priority::Medium, 2, None),
    ConstructionActivity::new(PAINTING, 4, Priority::Low, 3, None),
    ConstructionActivity::new(FINAL_INSPECTION, 2, Priority::Critical, 1, None),
];

/// Contiguous block of working hours, `start_hour` inclusive to `end_hour` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:00 - {}:00", self.start_hour, self.end_hour)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleStatus {
    Scheduled,
    PostponedWeather,
    PostponedLabor,
}

impl ScheduleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleStatus::Scheduled => "Scheduled",
            ScheduleStatus::PostponedWeather => "Postponed (Weather)",
            ScheduleStatus::PostponedLabor => "Postponed (Labor)",
        }
    }

    pub fn is_postponed(&self) -> bool {
        !matches!(self, ScheduleStatus::Scheduled)
    }
}

impl std::fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduledActivity {
    #[serde(flatten)]
    pub activity: ConstructionActivity,
    /// Present only for `Scheduled` work
    pub time_slot: Option<TimeSlot>,
    pub status: ScheduleStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySchedule {
    pub date: NaiveDate,
    pub weather_condition: WeatherCondition,
    pub impact_level: ImpactLevel,
    pub labor_availability: u32,
    /// Work that runs today, in priority then time-slot order
    pub activities: Vec<ScheduledActivity>,
    /// Every other catalog activity, tagged with why it was held back
    pub postponed: Vec<ScheduledActivity>,
}

impl DailySchedule {
    pub fn is_idle(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn postponed_count(&self) -> usize {
        self.postponed.len()
    }

    pub fn scheduled_hours(&self) -> u32 {
        self.activities
            .iter()
            .map(|a| a.activity.duration_hours)
            .sum()
    }

    pub fn labor_hours(&self) -> u32 {
        self.activities
            .iter()
            .map(|a| a.activity.duration_hours * a.activity.labor_needed)
            .sum()
    }
}
