//! Weather-driven construction scheduling.
//!
//! Classifies weather into construction impact, aggregates forecasts into
//! daily summaries, and builds labor-constrained daily and weekly schedules
//! with their cost implications.

pub mod config;
pub mod datasources;
pub mod error;
pub mod logic;
pub mod models;
pub mod report;

pub use error::{Result, SiteCastError};
pub use logic::{SchedulingEngine, WeatherImpactTable};
