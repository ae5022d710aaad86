//! Current conditions for the dashboard's home city, fetched once when the
//! dashboard mounts.

use serde::Deserialize;

use crate::ProviderError;

const API_BASE: &str = "https://api.openweathermap.org/data/2.5/weather";

pub const HOME_CITY: &str = "Patiala";

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CurrentWeather {
    pub name: String,
    pub main: Readings,
    pub weather: Vec<Condition>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Readings {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Condition {
    pub description: String,
    pub icon: String,
}

impl CurrentWeather {
    pub fn condition(&self) -> Result<&Condition, ProviderError> {
        self.weather
            .first()
            .ok_or_else(|| ProviderError::upstream("Invalid data received from weather API."))
    }

    pub fn icon_url(icon: &str) -> String {
        format!("https://openweathermap.org/img/wn/{icon}@4x.png")
    }
}

#[derive(Debug)]
pub struct WeatherClient {
    http: reqwest::Client,
    api_key: String,
}

impl WeatherClient {
    pub fn new(api_key: Option<&str>) -> Result<Self, ProviderError> {
        let api_key = api_key
            .filter(|key| !key.is_empty())
            .ok_or(ProviderError::MissingKey("OPENWEATHER_API_KEY"))?;
        Ok(Self { http: reqwest::Client::new(), api_key: api_key.to_string() })
    }

    pub async fn current(&self, city: &str) -> Result<CurrentWeather, ProviderError> {
        tracing::debug!(city, "fetching weather");
        let response = self
            .http
            .get(API_BASE)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Upstream(format!("Weather API Error: {status}")));
        }
        let weather: CurrentWeather = response.json().await?;
        // Surface a decode-shaped failure before the card tries to render.
        weather.condition()?;
        Ok(weather)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_decodes_expected_fields() {
        let weather: CurrentWeather = serde_json::from_str(
            r#"{
                "name": "Patiala",
                "main": {"temp": 31.4, "feels_like": 33.0, "humidity": 40},
                "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}]
            }"#,
        )
        .unwrap();
        assert_eq!(weather.name, "Patiala");
        assert_eq!(weather.main.temp, 31.4);
        assert_eq!(weather.condition().unwrap().icon, "01d");
    }

    #[test]
    fn empty_conditions_are_invalid() {
        let weather = CurrentWeather {
            name: "Nowhere".into(),
            main: Readings { temp: 0.0, feels_like: 0.0, humidity: 0 },
            weather: vec![],
        };
        assert!(weather.condition().is_err());
    }

    #[test]
    fn icon_url_uses_the_large_variant() {
        assert_eq!(
            CurrentWeather::icon_url("01d"),
            "https://openweathermap.org/img/wn/01d@4x.png"
        );
    }
}
