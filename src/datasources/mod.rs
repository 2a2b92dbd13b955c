pub mod demo;
pub mod openweathermap;

pub use demo::DemoWeather;
pub use openweathermap::OpenWeatherMapClient;
