use super::weather::CurrentWeatherReading;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Qualitative severity of weather's effect on site work.
///
/// Variant order is the worst-case ranking: `Unknown` ranks below every known level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ImpactLevel {
    Unknown,
    Low,
    Moderate,
    High,
}

impl ImpactLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactLevel::Unknown => "Unknown",
            ImpactLevel::Low => "Low",
            ImpactLevel::Moderate => "Moderate",
            ImpactLevel::High => "High",
        }
    }

    /// Combine two independent assessments. Only known levels contribute; the
    /// result is `Low` when neither side reports anything stronger.
    pub fn combine(self, other: ImpactLevel) -> ImpactLevel {
        if self == ImpactLevel::High || other == ImpactLevel::High {
            ImpactLevel::High
        } else if self == ImpactLevel::Moderate || other == ImpactLevel::Moderate {
            ImpactLevel::Moderate
        } else {
            ImpactLevel::Low
        }
    }
}

impl std::fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The six work categories every impact profile covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    Excavation,
    Foundation,
    Framing,
    Roofing,
    Exterior,
    Interior,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 6] = [
        ActivityKind::Excavation,
        ActivityKind::Foundation,
        ActivityKind::Framing,
        ActivityKind::Roofing,
        ActivityKind::Exterior,
        ActivityKind::Interior,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Excavation => "Excavation",
            ActivityKind::Foundation => "Foundation",
            ActivityKind::Framing => "Framing",
            ActivityKind::Roofing => "Roofing",
            ActivityKind::Exterior => "Exterior",
            ActivityKind::Interior => "Interior",
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActivityStatus {
    Optimal,
    Caution,
    Delayed,
    Halted,
}

impl ActivityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityStatus::Optimal => "Optimal",
            ActivityStatus::Caution => "Caution",
            ActivityStatus::Delayed => "Delayed",
            ActivityStatus::Halted => "Halted",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ActivityStatus::Optimal => "✓",
            ActivityStatus::Caution => "⚠",
            ActivityStatus::Delayed => "⏸",
            ActivityStatus::Halted => "✗",
        }
    }
}

impl std::fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Delay severity for one activity. The status is always derived from the
/// delay units, so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ActivityImpact {
    delay_units: u8,
    status: ActivityStatus,
}

impl ActivityImpact {
    pub const MAX_DELAY: u8 = 3;

    /// Build from delay units; values above 3 saturate to `Halted`.
    pub fn from_delay(delay_units: u8) -> Self {
        let delay_units = delay_units.min(Self::MAX_DELAY);
        let status = match delay_units {
            0 => ActivityStatus::Optimal,
            1 => ActivityStatus::Caution,
            2 => ActivityStatus::Delayed,
            _ => ActivityStatus::Halted,
        };
        Self {
            delay_units,
            status,
        }
    }

    pub fn delay_units(&self) -> u8 {
        self.delay_units
    }

    pub fn status(&self) -> ActivityStatus {
        self.status
    }

    /// The worse of two impacts, with the status re-derived
    pub fn worst(self, other: ActivityImpact) -> ActivityImpact {
        ActivityImpact::from_delay(self.delay_units.max(other.delay_units))
    }
}

// Deserialize through the delay units only so a stored status can't drift.
impl<'de> Deserialize<'de> for ActivityImpact {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            delay_units: u8,
        }
        let raw = Raw::deserialize(deserializer)?;
        Ok(ActivityImpact::from_delay(raw.delay_units))
    }
}

/// Impact level plus a per-activity delay table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherImpactProfile {
    pub impact_level: ImpactLevel,
    activities: BTreeMap<ActivityKind, ActivityImpact>,
}

impl WeatherImpactProfile {
    /// Delays are given in `ActivityKind::ALL` order, so every key is always present.
    pub fn from_delays(impact_level: ImpactLevel, delays: [u8; 6]) -> Self {
        let activities = ActivityKind::ALL
            .into_iter()
            .zip(delays)
            .map(|(kind, delay)| (kind, ActivityImpact::from_delay(delay)))
            .collect();
        Self {
            impact_level,
            activities,
        }
    }

    /// Low impact, zero delay everywhere
    pub fn calm() -> Self {
        Self::from_delays(ImpactLevel::Low, [0; 6])
    }

    pub fn activity(&self, kind: ActivityKind) -> ActivityImpact {
        self.activities
            .get(&kind)
            .copied()
            .unwrap_or_else(|| ActivityImpact::from_delay(0))
    }

    pub fn activities(&self) -> impl Iterator<Item = (ActivityKind, ActivityImpact)> + '_ {
        self.activities.iter().map(|(k, v)| (*k, *v))
    }

    /// Per-activity worst case of both profiles, combined impact level
    pub fn combine(&self, other: &WeatherImpactProfile) -> WeatherImpactProfile {
        let activities = ActivityKind::ALL
            .into_iter()
            .map(|kind| (kind, self.activity(kind).worst(other.activity(kind))))
            .collect();
        WeatherImpactProfile {
            impact_level: self.impact_level.combine(other.impact_level),
            activities,
        }
    }
}

/// Analyzer output: the combined profile alongside the reading it was built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherAssessment {
    #[serde(flatten)]
    pub profile: WeatherImpactProfile,
    /// Absent when the input reading was missing or malformed
    pub reading: Option<CurrentWeatherReading>,
}
