use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::utils::api::{Api, ApiError};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

const fn city(name: &'static str, lat: f64, lon: f64) -> City {
    City { name, lat, lon }
}

pub const CITIES: [City; 20] = [
    city("Delhi", 28.66, 77.23),
    city("Mumbai", 19.07, 72.87),
    city("Kolkata", 22.57, 88.36),
    city("Chennai", 13.08, 80.27),
    city("Bengaluru", 12.97, 77.59),
    city("Hyderabad", 17.38, 78.48),
    city("Ahmedabad", 23.02, 72.57),
    city("Pune", 18.52, 73.85),
    city("Jaipur", 26.91, 75.79),
    city("Lucknow", 26.85, 80.95),
    city("Patna", 25.59, 85.14),
    city("Bhopal", 23.26, 77.40),
    city("Indore", 22.72, 75.86),
    city("Nagpur", 21.14, 79.08),
    city("Surat", 21.17, 72.83),
    city("Vadodara", 22.30, 73.19),
    city("Guwahati", 26.14, 91.74),
    city("Ranchi", 23.36, 85.33),
    city("Chandigarh", 30.73, 76.78),
    city("Thiruvananthapuram", 8.52, 76.93),
];

#[derive(Deserialize, Debug)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
    pub weathercode: u32,
}

#[derive(Deserialize, Debug, Default)]
pub struct Hourly {
    #[serde(default)]
    pub precipitation: Vec<Option<f64>>,
}

#[derive(Deserialize, Debug)]
pub struct Forecast {
    pub current_weather: CurrentWeather,
    #[serde(default)]
    pub hourly: Hourly,
}

impl Forecast {
    /// Precipitation for the first forecast hour, 0 when missing.
    pub fn rain(&self) -> f64 {
        self.hourly
            .precipitation
            .first()
            .copied()
            .flatten()
            .unwrap_or(0.0)
    }
}

pub fn forecast_url(city: &City) -> String {
    format!(
        "{}?latitude={}&longitude={}&current_weather=true&hourly=precipitation&forecast_days=1",
        config::get_weather_url(),
        city.lat,
        city.lon
    )
}

/// WMO weather code to emoji. Heat and heavy rain override the code.
pub fn weather_emoji(code: u32, temperature: f64, rain: f64) -> &'static str {
    let mut emoji = match code {
        0 => "☀️",
        1..=3 => "☁️",
        4..=67 => "🌧️",
        68..=79 => "❄️",
        _ => "⛈️",
    };
    if temperature >= 38.0 {
        emoji = "🔥";
    }
    if rain >= 5.0 {
        emoji = "🌧️🌧️";
    }
    emoji
}

pub fn ticker_line(city: &City, forecast: &Forecast) -> String {
    let now = &forecast.current_weather;
    let rain = forecast.rain();
    format!(
        "{} {} — 🌡️ {}°C | 💨 {} km/h | 🌧️ {}mm",
        weather_emoji(now.weathercode, now.temperature, rain),
        city.name,
        now.temperature,
        now.windspeed,
        rain
    )
}

async fn fetch_forecast(city: &City) -> Result<Forecast, ApiError> {
    let response = Api::get_url(forecast_url(city)).send().await?;
    Ok(response.json().await?)
}

async fn fetch_line(city: &City) -> String {
    match fetch_forecast(city).await {
        Ok(forecast) => ticker_line(city, &forecast),
        Err(e) => {
            log::warn!("Weather for {} unavailable: {}", city.name, e);
            format!("{} — Weather unavailable", city.name)
        }
    }
}

/// Rotating one-line weather report for the cities above.
#[function_component]
pub fn WeatherTicker() -> Html {
    let line = use_state(String::new);
    let fading = use_state(|| false);
    let next_city = use_mut_ref(|| 0usize);

    {
        let line = line.clone();
        let fading = fading.clone();
        use_effect_with_deps(
            move |_| {
                let alive = Rc::new(Cell::new(true));
                let rotate = {
                    let alive = alive.clone();
                    move || {
                        let idx = {
                            let mut next = next_city.borrow_mut();
                            let idx = *next;
                            *next = (idx + 1) % CITIES.len();
                            idx
                        };
                        fading.set(true);
                        let line = line.clone();
                        let fading = fading.clone();
                        let alive = alive.clone();
                        spawn_local(async move {
                            TimeoutFuture::new(config::WEATHER_FADE_MS).await;
                            let text = fetch_line(&CITIES[idx]).await;
                            if alive.get() {
                                line.set(text);
                                fading.set(false);
                            }
                        });
                    }
                };
                rotate();
                let interval = Interval::new(config::WEATHER_ROTATE_MS, rotate);
                move || {
                    alive.set(false);
                    drop(interval);
                }
            },
            (),
        );
    }

    html! {
        <div class="weather-ticker">
            <div class={classes!("weather-slide", if *fading { "fade-out" } else { "fade-in" })}>
                { (*line).clone() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_follows_weather_code() {
        assert_eq!(weather_emoji(0, 25.0, 0.0), "☀️");
        assert_eq!(weather_emoji(3, 25.0, 0.0), "☁️");
        assert_eq!(weather_emoji(61, 25.0, 0.0), "🌧️");
        assert_eq!(weather_emoji(67, 25.0, 0.0), "🌧️");
        assert_eq!(weather_emoji(71, 5.0, 0.0), "❄️");
        assert_eq!(weather_emoji(95, 25.0, 0.0), "⛈️");
    }

    #[test]
    fn heat_then_heavy_rain_override() {
        assert_eq!(weather_emoji(0, 38.0, 0.0), "🔥");
        assert_eq!(weather_emoji(0, 41.0, 5.0), "🌧️🌧️");
        assert_eq!(weather_emoji(2, 30.0, 4.9), "☁️");
    }

    #[test]
    fn line_from_open_meteo_payload() {
        let body = r#"{
            "latitude": 28.625,
            "current_weather": {"temperature": 31.4, "windspeed": 9.0, "winddirection": 270, "weathercode": 1},
            "hourly": {"time": ["2026-10-18T00:00"], "precipitation": [0.2, 0.0]}
        }"#;
        let forecast: Forecast = serde_json::from_str(body).unwrap();
        assert_eq!(
            ticker_line(&CITIES[0], &forecast),
            "☁️ Delhi — 🌡️ 31.4°C | 💨 9 km/h | 🌧️ 0.2mm"
        );

        let no_hourly: Forecast = serde_json::from_str(
            r#"{"current_weather": {"temperature": 20, "windspeed": 3.5, "weathercode": 0}}"#,
        )
        .unwrap();
        assert_eq!(no_hourly.rain(), 0.0);
    }

    #[test]
    fn url_asks_for_current_weather_and_rain() {
        let url = forecast_url(&CITIES[1]);
        assert!(url.ends_with(
            "?latitude=19.07&longitude=72.87&current_weather=true&hourly=precipitation&forecast_days=1"
        ));
    }
}
