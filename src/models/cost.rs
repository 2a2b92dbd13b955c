use super::activity::DailySchedule;
use super::impact::ImpactLevel;
use serde::{Deserialize, Serialize};

/// Added for every postponed activity on a day
pub const POSTPONEMENT_COST: i64 = 5_000;
/// Saved on a day where nothing is postponed
pub const OPTIMAL_DAY_SAVINGS: i64 = 8_000;
/// Saved on a Low-impact day
pub const LOW_IMPACT_SAVINGS: i64 = 3_000;
/// Added on a High-impact day
pub const HIGH_IMPACT_COST: i64 = 10_000;
/// Schedule slip charged for a day with any postponement
pub const DELAY_PER_POSTPONED_DAY: f64 = 0.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostImplications {
    pub total_savings: i64,
    pub total_additional_costs: i64,
    pub net_impact: i64,
    pub delayed_days: f64,
}

impl CostImplications {
    /// Fold a week of schedules into aggregate cost effects
    pub fn from_schedule(schedule: &[DailySchedule]) -> Self {
        let mut costs = schedule.iter().fold(Self::default(), |mut acc, day| {
            let postponed = day.postponed_count() as i64;
            if postponed > 0 {
                acc.total_additional_costs += postponed * POSTPONEMENT_COST;
                acc.delayed_days += DELAY_PER_POSTPONED_DAY;
            } else {
                acc.total_savings += OPTIMAL_DAY_SAVINGS;
            }

            // Impact-level effects stack on top of the postponement effect
            match day.impact_level {
                ImpactLevel::Low => acc.total_savings += LOW_IMPACT_SAVINGS,
                ImpactLevel::High => acc.total_additional_costs += HIGH_IMPACT_COST,
                ImpactLevel::Moderate | ImpactLevel::Unknown => {}
            }
            acc
        });
        costs.net_impact = costs.total_savings - costs.total_additional_costs;
        costs
    }

    pub fn is_net_positive(&self) -> bool {
        self.net_impact >= 0
    }
}

/// A scheduled forecast window with its cost fold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyPlan {
    pub schedule: Vec<DailySchedule>,
    pub costs: CostImplications,
}

/// Format a currency amount with thousands separators, e.g. `-12,500`
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
