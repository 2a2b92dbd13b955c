pub mod aggregator;
pub mod analyzer;
pub mod engine;
pub mod impact_table;
pub mod recommendations;
pub mod scheduler;
pub mod weather_sync;
pub mod weekly;

pub use engine::SchedulingEngine;
pub use impact_table::WeatherImpactTable;
pub use weather_sync::WeatherService;
pub use weekly::{LaborAdjustment, NoAdjustment, RandomJitter};
