use super::scheduler::schedule_day;
use crate::models::{CostImplications, DailyForecastSummary, DailySchedule, WeeklyPlan};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Per-day headcount variation source. Results are clamped to -1..=1.
pub trait LaborAdjustment {
    fn adjust(&mut self, day_index: usize, date: NaiveDate) -> i32;
}

/// Same crew every day
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAdjustment;

impl LaborAdjustment for NoAdjustment {
    fn adjust(&mut self, _day_index: usize, _date: NaiveDate) -> i32 {
        0
    }
}

/// Uniform -1, 0 or +1 worker per day
#[derive(Debug, Clone)]
pub struct RandomJitter<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomJitter<StdRng> {
    /// Reproducible jitter for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> LaborAdjustment for RandomJitter<R> {
    fn adjust(&mut self, _day_index: usize, _date: NaiveDate) -> i32 {
        self.rng.gen_range(-1..=1)
    }
}

impl<F> LaborAdjustment for F
where
    F: FnMut(usize, NaiveDate) -> i32,
{
    fn adjust(&mut self, day_index: usize, date: NaiveDate) -> i32 {
        self(day_index, date)
    }
}

/// Schedule every forecast day with its adjusted crew and fold the costs
pub fn schedule_week(
    summaries: &[DailyForecastSummary],
    labor_availability: i32,
    adjustment: &mut dyn LaborAdjustment,
) -> WeeklyPlan {
    let schedule: Vec<DailySchedule> = summaries
        .iter()
        .enumerate()
        .map(|(index, day)| {
            let delta = adjustment.adjust(index, day.date).clamp(-1, 1);
            let day_labor = labor_availability.saturating_add(delta).max(1);
            if delta != 0 {
                tracing::debug!(
                    "Labor on {} adjusted by {} to {} workers",
                    day.date,
                    delta,
                    day_labor
                );
            }
            schedule_day(day, day_labor)
        })
        .collect();

    let costs = CostImplications::from_schedule(&schedule);
    let postponed: usize = schedule.iter().map(|d| d.postponed_count()).sum();
    tracing::info!(
        "Scheduled {} days: {} postponements, net impact {}",
        schedule.len(),
        postponed,
        costs.net_impact
    );

    WeeklyPlan { schedule, costs }
}
