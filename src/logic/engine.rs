use super::aggregator::aggregate_forecast;
use super::analyzer::analyze_weather_impact;
use super::impact_table::WeatherImpactTable;
use super::recommendations::recommend;
use super::scheduler::schedule_day;
use super::weekly::{schedule_week, LaborAdjustment};
use crate::models::{
    ActivityKind, CurrentWeatherReading, DailyForecastSummary, DailySchedule, ForecastEntry,
    ScheduleRecommendation, WeatherAssessment, WeeklyPlan,
};

/// Entry point for presentation code: every operation runs against one
/// injected impact table.
#[derive(Debug, Clone, Copy)]
pub struct SchedulingEngine<'a> {
    table: &'a WeatherImpactTable,
}

impl<'a> SchedulingEngine<'a> {
    pub fn new(table: &'a WeatherImpactTable) -> Self {
        Self { table }
    }

    pub fn analyze_weather_impact(&self, reading: Option<&CurrentWeatherReading>) -> WeatherAssessment {
        analyze_weather_impact(self.table, reading)
    }

    pub fn aggregate_forecast(&self, entries: &[ForecastEntry]) -> Vec<DailyForecastSummary> {
        aggregate_forecast(self.table, entries)
    }

    pub fn schedule_day(&self, summary: &DailyForecastSummary, labor_availability: i32) -> DailySchedule {
        schedule_day(summary, labor_availability)
    }

    pub fn schedule_week(
        &self,
        summaries: &[DailyForecastSummary],
        labor_availability: i32,
        adjustment: &mut dyn LaborAdjustment,
    ) -> WeeklyPlan {
        schedule_week(summaries, labor_availability, adjustment)
    }

    /// Aggregate raw entries and schedule the resulting days in one step
    pub fn plan_forecast(
        &self,
        entries: &[ForecastEntry],
        labor_availability: i32,
        adjustment: &mut dyn LaborAdjustment,
    ) -> WeeklyPlan {
        let days = self.aggregate_forecast(entries);
        schedule_week(&days, labor_availability, adjustment)
    }

    pub fn recommend(&self, forecast: &[DailyForecastSummary]) -> Vec<ScheduleRecommendation> {
        recommend(forecast, &ActivityKind::ALL)
    }
}

impl Default for SchedulingEngine<'static> {
    fn default() -> Self {
        Self::new(WeatherImpactTable::standard())
    }
}
