pub mod activity;
pub mod cost;
pub mod forecast;
pub mod impact;
pub mod recommendation;
pub mod weather;

pub use activity::*;
pub use cost::*;
pub use forecast::*;
pub use impact::*;
pub use recommendation::*;
pub use weather::*;
