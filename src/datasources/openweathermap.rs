use crate::config::OpenWeatherMapConfig;
use crate::error::{Result, SiteCastError};
use crate::models::{CurrentWeatherReading, ForecastEntry, WeatherCondition};
use serde::Deserialize;

const API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

pub struct OpenWeatherMapClient {
    client: reqwest::Client,
    config: OpenWeatherMapConfig,
    base_url: String,
}

// OpenWeatherMap API response structures
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    #[serde(default)]
    weather: Vec<OwmWeather>,
    main: OwmMain,
    wind: OwmWind,
}

#[derive(Debug, Deserialize)]
struct OwmForecastResponse {
    #[serde(default)]
    list: Vec<OwmForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OwmForecastItem {
    dt: i64,
    main: OwmMain,
    #[serde(default)]
    weather: Vec<OwmWeather>,
    wind: OwmWind,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    #[serde(default)]
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    main: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

impl OpenWeatherMapClient {
    pub fn new(config: OpenWeatherMapConfig) -> Self {
        Self::with_base_url(config, API_BASE_URL)
    }

    pub fn with_base_url(config: OpenWeatherMapConfig, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            base_url: base_url.into(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}?lat={}&lon={}&appid={}&units=metric",
            self.base_url, endpoint, self.config.latitude, self.config.longitude, self.config.api_key
        )
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let response = self
            .client
            .get(self.url(endpoint))
            .send()
            .await
            .map_err(|e| SiteCastError::DataSourceUnavailable(format!("OpenWeatherMap: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SiteCastError::DataSourceUnavailable(format!(
                "OpenWeatherMap returned {}: {}",
                status, body
            )));
        }

        response.json::<T>().await.map_err(|e| {
            SiteCastError::InvalidData(format!("Failed to parse OpenWeatherMap response: {}", e))
        })
    }

    /// Fetch current conditions. `None` when the payload carries no condition entry.
    pub async fn fetch_current(&self) -> Result<Option<CurrentWeatherReading>> {
        let response: OwmCurrentResponse = self.get_json("weather").await?;
        Ok(convert_current(response))
    }

    /// Fetch the 5-day/3-hour forecast as normalized entries
    pub async fn fetch_forecast(&self) -> Result<Vec<ForecastEntry>> {
        let response: OwmForecastResponse = self.get_json("forecast").await?;
        Ok(response.list.iter().map(convert_forecast_item).collect())
    }

    /// Test connection to OpenWeatherMap API
    pub async fn test_connection(&self) -> Result<bool> {
        let response = self.client.get(self.url("weather")).send().await?;

        Ok(response.status().is_success())
    }
}

fn convert_current(response: OwmCurrentResponse) -> Option<CurrentWeatherReading> {
    let weather = response.weather.into_iter().next()?;
    Some(CurrentWeatherReading {
        condition: WeatherCondition::from_name(&weather.main),
        temperature_celsius: response.main.temp,
        humidity_percent: response.main.humidity,
        wind_speed_ms: response.wind.speed,
        description: weather.description,
    })
}

fn convert_forecast_item(item: &OwmForecastItem) -> ForecastEntry {
    let condition = item
        .weather
        .first()
        .map(|w| WeatherCondition::from_name(&w.main))
        .unwrap_or(WeatherCondition::Other);

    ForecastEntry {
        timestamp_seconds: item.dt,
        temperature_celsius: item.main.temp,
        condition,
        wind_speed_ms: item.wind.speed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_config() -> OpenWeatherMapConfig {
        OpenWeatherMapConfig {
            api_key: "test_key".to_string(),
            latitude: 19.0144,
            longitude: 72.8479,
            enabled: true,
        }
    }

    #[test]
    fn url_requests_metric_units() {
        let client = OpenWeatherMapClient::with_base_url(sample_config(), "http://owm.test");
        let url = client.url("forecast");
        assert!(url.starts_with("http://owm.test/forecast?"));
        assert!(url.contains("units=metric"));
        assert!(url.contains("appid=test_key"));
    }

    #[tokio::test]
    async fn fetch_current_normalizes_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "weather": [{ "id": 721, "main": "Haze", "description": "haze", "icon": "50d" }],
                "main": { "temp": 33.4, "humidity": 58 },
                "wind": { "speed": 4.1 },
                "name": "Mumbai"
            })))
            .mount(&server)
            .await;

        let client = OpenWeatherMapClient::with_base_url(sample_config(), server.uri());
        let reading = client.fetch_current().await.unwrap().unwrap();

        assert_eq!(reading.condition, WeatherCondition::Haze);
        assert_eq!(reading.temperature_celsius, 33.4);
        assert_eq!(reading.humidity_percent, 58.0);
        assert_eq!(reading.wind_speed_ms, 4.1);
        assert_eq!(reading.description, "haze");
    }

    #[tokio::test]
    async fn fetch_current_without_conditions_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "weather": [],
                "main": { "temp": 20.0, "humidity": 40 },
                "wind": { "speed": 1.0 }
            })))
            .mount(&server)
            .await;

        let client = OpenWeatherMapClient::with_base_url(sample_config(), server.uri());
        assert!(client.fetch_current().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn fetch_forecast_normalizes_entries() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "cod": "200",
                "list": [
                    {
                        "dt": 1717372800,
                        "main": { "temp": 29.0, "humidity": 70 },
                        "weather": [{ "main": "Rain", "description": "light rain" }],
                        "wind": { "speed": 5.5 }
                    },
                    {
                        "dt": 1717383600,
                        "main": { "temp": 31.0, "humidity": 65 },
                        "weather": [{ "main": "Squall", "description": "squalls" }],
                        "wind": { "speed": 9.0 }
                    }
                ]
            })))
            .mount(&server)
            .await;

        let client = OpenWeatherMapClient::with_base_url(sample_config(), server.uri());
        let entries = client.fetch_forecast().await.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].condition, WeatherCondition::Rain);
        assert_eq!(entries[0].timestamp_seconds, 1_717_372_800);
        assert_eq!(entries[1].condition, WeatherCondition::Other);
        assert_eq!(entries[1].wind_speed_ms, 9.0);
    }

    #[tokio::test]
    async fn error_status_is_reported_as_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
            .mount(&server)
            .await;

        let client = OpenWeatherMapClient::with_base_url(sample_config(), server.uri());
        let err = client.fetch_forecast().await.unwrap_err();
        assert!(matches!(err, SiteCastError::DataSourceUnavailable(_)));
        assert!(err.to_string().contains("401"));
    }

    #[tokio::test]
    async fn unparseable_body_is_invalid_data() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = OpenWeatherMapClient::with_base_url(sample_config(), server.uri());
        let err = client.fetch_forecast().await.unwrap_err();
        assert!(matches!(err, SiteCastError::InvalidData(_)));
    }
}
