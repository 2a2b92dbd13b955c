//! Plain-text rendering of assessments, forecasts and schedules.

use crate::models::{
    format_amount, format_day, ActivityKind, DailyForecastSummary, DailySchedule,
    ScheduleRecommendation, WeatherAssessment, WeeklyPlan,
};
use std::fmt::Write;

pub fn render_assessment(assessment: &WeatherAssessment) -> String {
    let mut out = String::new();

    match assessment.reading {
        Some(ref r) => {
            let _ = writeln!(
                out,
                "Current Weather: {} {} ({})",
                r.condition.symbol(),
                r.condition,
                r.description
            );
            let _ = writeln!(
                out,
                "  {:.1}°C  humidity {:.0}%  wind {:.1} m/s",
                r.temperature_celsius, r.humidity_percent, r.wind_speed_ms
            );
        }
        None => {
            let _ = writeln!(out, "Current Weather: unavailable");
        }
    }

    let _ = writeln!(out, "Impact: {}", assessment.profile.impact_level);
    for kind in ActivityKind::ALL {
        let impact = assessment.profile.activity(kind);
        let _ = writeln!(
            out,
            "  {} {:<12} {:<8} (delay {})",
            impact.status().symbol(),
            kind,
            impact.status(),
            impact.delay_units()
        );
    }
    out
}

pub fn render_forecast(days: &[DailyForecastSummary]) -> String {
    if days.is_empty() {
        return "No forecast data available\n".to_string();
    }

    let mut out = String::from("Forecast\n");
    for day in days {
        let _ = writeln!(
            out,
            "  {:<12} {} {:<13} {:<8} {:>5.1}-{:<5.1}°C  wind {:.1} m/s",
            format_day(day.date),
            day.condition.symbol(),
            day.condition,
            day.impact_level,
            day.temperature.min,
            day.temperature.max,
            day.max_wind_speed_ms
        );
    }
    out
}

pub fn render_day(day: &DailySchedule) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} - {} ({} impact), {} workers",
        format_day(day.date),
        day.weather_condition,
        day.impact_level,
        day.labor_availability
    );

    if day.is_idle() {
        let _ = writeln!(out, "  No activities scheduled");
    } else {
        let _ = writeln!(
            out,
            "  {} h scheduled, {} labor-hours",
            day.scheduled_hours(),
            day.labor_hours()
        );
    }
    for item in &day.activities {
        let slot = item
            .time_slot
            .map(|s| s.to_string())
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "  {:<15} {:<24} {:<8} {} workers",
            slot, item.activity.name, item.activity.priority, item.activity.labor_needed
        );
    }
    for item in &day.postponed {
        let _ = writeln!(out, "  {:<15} {:<24} {}", "-", item.activity.name, item.status);
    }
    out
}

pub fn render_plan(plan: &WeeklyPlan) -> String {
    let mut out = String::new();
    for day in &plan.schedule {
        out.push_str(&render_day(day));
        out.push('\n');
    }

    let costs = &plan.costs;
    let _ = writeln!(out, "Cost Implications");
    let _ = writeln!(out, "  Potential Savings: {}", format_amount(costs.total_savings));
    let _ = writeln!(
        out,
        "  Additional Costs:  {}",
        format_amount(costs.total_additional_costs)
    );
    let _ = writeln!(
        out,
        "  Net Impact:        {} ({})",
        format_amount(costs.net_impact),
        if costs.is_net_positive() { "savings" } else { "overrun" }
    );
    let _ = writeln!(out, "  Project Delay:     {} days", costs.delayed_days);
    out
}

pub fn render_recommendations(recommendations: &[ScheduleRecommendation]) -> String {
    if recommendations.is_empty() {
        return "No recommendations\n".to_string();
    }

    let mut out = String::new();
    for rec in recommendations {
        let _ = writeln!(out, "{} {}", rec.kind.symbol(), rec.message);
    }
    out
}
