use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Unit system sent to the API and used for display suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn api_value(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }

    pub fn wind_speed_suffix(&self) -> &'static str {
        match self {
            Units::Metric => " ms⁻¹",
            Units::Imperial => " mph",
        }
    }
}

// Wire format of the current-weather endpoint. Only the fields the window
// displays are deserialized.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub name: String,
    pub sys: ApiSys,
    pub main: ApiMain,
    pub wind: ApiWind,
    pub weather: Vec<ApiCondition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSys {
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiMain {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiWind {
    pub speed: f64,
    pub deg: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiCondition {
    pub description: String,
    pub icon: String,
}

/// Fetch failures, classified for the error dialog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("no internet connection")]
    Connection,
    #[error("location not found")]
    LocationNotFound,
    #[error("weather service error: {0}")]
    Api(String),
}

/// Current weather for the configured location, rounded and ready to
/// render. Rebuilt from scratch on every successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentConditions {
    pub location: String,
    pub temperature: i64,
    pub feels_like: i64,
    pub humidity: i64,
    pub wind_speed: i64,
    pub wind_deg: i64,
    pub description: String,
    pub icon: String,
}

impl CurrentConditions {
    fn from_api(raw: ApiResponse) -> Result<Self, FetchError> {
        let condition = raw
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::Api("response carried no weather condition".into()))?;

        let location = match raw.sys.country {
            Some(country) => format!("{}, {}", raw.name, country),
            None => raw.name,
        };

        Ok(Self {
            location,
            temperature: raw.main.temp.round() as i64,
            feels_like: raw.main.feels_like.round() as i64,
            humidity: raw.main.humidity.round() as i64,
            wind_speed: raw.wind.speed.round() as i64,
            wind_deg: raw.wind.deg.round() as i64,
            description: title_case(&condition.description),
            icon: condition.icon,
        })
    }

    pub fn temperature_label(&self, units: Units) -> String {
        format!("{}{}", self.temperature, units.temperature_suffix())
    }

    pub fn feels_like_label(&self, units: Units) -> String {
        format!("{}{}", self.feels_like, units.temperature_suffix())
    }

    pub fn humidity_label(&self) -> String {
        format!("{}%", self.humidity)
    }

    pub fn wind_speed_label(&self, units: Units) -> String {
        format!("{}{}", self.wind_speed, units.wind_speed_suffix())
    }

    pub fn wind_deg_label(&self) -> String {
        format!("{}°", self.wind_deg)
    }
}

/// Capitalize the first letter of each whitespace-separated word.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Fetch current weather for `location`. One GET per call; the caller
/// schedules retries via the refresh timer.
pub async fn fetch_current(
    base_url: String,
    api_key: String,
    location: String,
    units: Units,
) -> Result<CurrentConditions, FetchError> {
    let url = format!(
        "{}?appid={}&q={}&units={}",
        base_url,
        api_key,
        urlencoding::encode(&location),
        units.api_value()
    );

    tracing::debug!(%location, "fetching current weather");

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| FetchError::Api(e.to_string()))?;

    let response = client.get(&url).send().await.map_err(|e| {
        tracing::warn!("weather request failed: {e}");
        if e.is_connect() || e.is_timeout() {
            FetchError::Connection
        } else {
            FetchError::Api(e.to_string())
        }
    })?;

    match response.status() {
        reqwest::StatusCode::NOT_FOUND => return Err(FetchError::LocationNotFound),
        reqwest::StatusCode::UNAUTHORIZED => {
            return Err(FetchError::Api("invalid API key".into()));
        }
        status if !status.is_success() => {
            return Err(FetchError::Api(format!("unexpected status {status}")));
        }
        _ => {}
    }

    let body: ApiResponse = response
        .json()
        .await
        .map_err(|e| FetchError::Api(e.to_string()))?;

    let conditions = CurrentConditions::from_api(body)?;
    tracing::debug!(
        location = %conditions.location,
        temperature = conditions.temperature,
        icon = %conditions.icon,
        "current weather fetched"
    );
    Ok(conditions)
}
