use serde::{Deserialize, Serialize};

use super::wizard::{Field, SurveyForm};
use crate::components::notification::Notifier;
use crate::utils::api::{Api, ApiError};

pub const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// How many months past the current one a sowing month may lie.
const SOWING_WINDOW: usize = 3;

/// `current_month` is zero based, as `Date.getMonth()` returns it.
pub fn sowing_month_allowed(month: &str, current_month: u32) -> bool {
    let month = month.trim().to_lowercase();
    (0..=SOWING_WINDOW).any(|ahead| MONTHS[(current_month as usize + ahead) % 12] == month)
}

#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("❌ Form fields missing! Check input IDs in HTML.")]
    MissingField(Field),
    #[error("⚠️ Please select sowing month within the next 3 months only for accurate prediction.")]
    OutOfWindow,
    #[error("❌ Server not responding")]
    Transport(#[from] ApiError),
    #[error("{0}")]
    Rejected(String),
}

impl PredictionError {
    /// Second line of the error card on the result step.
    pub fn detail(&self) -> String {
        match self {
            PredictionError::Transport(_) => "Server not responding".to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "P")]
    pub p: f64,
    #[serde(rename = "K")]
    pub k: f64,
    pub ph: f64,
    pub land_size: f64,
    pub state: String,
    pub district: String,
    pub sowing_month: String,
}

fn number(form: &SurveyForm, field: Field) -> Result<f64, PredictionError> {
    let raw = form.get(field).trim();
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            log::error!("Survey field {} is not a number: {:?}", field.id(), raw);
            PredictionError::MissingField(field)
        })
}

fn text(form: &SurveyForm, field: Field) -> Result<String, PredictionError> {
    let raw = form.get(field).trim();
    if raw.is_empty() {
        log::error!("Survey field {} is empty", field.id());
        return Err(PredictionError::MissingField(field));
    }
    Ok(raw.to_string())
}

impl PredictionRequest {
    /// Read the form and apply the sowing window. Nothing is sent when this
    /// fails.
    pub fn from_form(form: &SurveyForm, current_month: u32) -> Result<Self, PredictionError> {
        let request = Self {
            n: number(form, Field::N)?,
            p: number(form, Field::P)?,
            k: number(form, Field::K)?,
            ph: number(form, Field::Ph)?,
            land_size: number(form, Field::LandSize)?,
            state: text(form, Field::State)?,
            district: text(form, Field::District)?,
            sowing_month: text(form, Field::SowingMonth)?,
        };
        if !sowing_month_allowed(&request.sowing_month, current_month) {
            return Err(PredictionError::OutOfWindow);
        }
        Ok(request)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CropRecommendation {
    pub crop: String,
    #[serde(default)]
    pub price_per_quintal: f64,
    #[serde(default)]
    pub yield_per_acre: f64,
    #[serde(default)]
    pub total_profit: f64,
    #[serde(default)]
    pub season_match: bool,
    pub total_revenue: Option<f64>,
    pub total_cost: Option<f64>,
    pub net_profit: Option<f64>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WeatherUsed {
    #[serde(default)]
    pub temperature: f64,
    #[serde(default)]
    pub humidity: f64,
    #[serde(default)]
    pub rainfall: f64,
}

#[derive(Deserialize, Debug)]
pub struct PredictionResponse {
    #[serde(default)]
    pub status: String,
    pub message: Option<String>,
    #[serde(default)]
    pub top_3: Vec<CropRecommendation>,
    #[serde(default)]
    pub weather_used: WeatherUsed,
    #[serde(default)]
    pub location_used: String,
    #[serde(default)]
    pub season_detected: String,
}

/// A successful prediction, ready for the result card.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub crops: Vec<CropRecommendation>,
    pub weather: WeatherUsed,
    pub location: String,
    pub season: String,
}

impl PredictionResponse {
    pub fn into_prediction(self) -> Result<Prediction, PredictionError> {
        if self.status != "success" {
            let message = self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "Prediction failed".to_string());
            return Err(PredictionError::Rejected(message));
        }
        let mut crops = self.top_3;
        crops.truncate(3);
        Ok(Prediction {
            crops,
            weather: self.weather_used,
            location: self.location_used,
            season: self.season_detected,
        })
    }
}

/// Numbers each submission so only the newest one may report back.
#[derive(Debug, Default)]
pub struct Submissions {
    latest: u32,
}

impl Submissions {
    pub fn begin(&mut self) -> u32 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    pub fn is_current(&self, ticket: u32) -> bool {
        self.latest == ticket
    }
}

pub async fn request_prediction(
    request: &PredictionRequest,
    notifier: &Notifier,
) -> Result<Prediction, PredictionError> {
    let response = Api::post("/predict-crop")
        .json(request)?
        .wake_notice(notifier)
        .send()
        .await?;
    if !response.ok() {
        log::error!("/predict-crop answered {}", response.status());
        return Err(ApiError::Status(response.status()).into());
    }
    let body: PredictionResponse = response.json().await.map_err(ApiError::from)?;
    log::debug!("Prediction response: {:?}", body);
    body.into_prediction()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SurveyForm {
        SurveyForm {
            state: " Punjab ".into(),
            district: "Ludhiana".into(),
            sowing_month: "November".into(),
            soil_type: "Alluvial".into(),
            ph: "7.1".into(),
            n: "80".into(),
            p: "40".into(),
            k: "40".into(),
            land_size: "3".into(),
        }
    }

    #[test]
    fn sowing_window_covers_current_and_next_three_months() {
        // January
        for month in ["january", "February", "march", "APRIL"] {
            assert!(sowing_month_allowed(month, 0), "{month}");
        }
        assert!(!sowing_month_allowed("may", 0));
        assert!(!sowing_month_allowed("december", 0));

        // October wraps into the new year
        assert!(sowing_month_allowed("january", 9));
        assert!(!sowing_month_allowed("february", 9));
        assert!(!sowing_month_allowed("september", 9));
    }

    #[test]
    fn request_uses_backend_field_names() {
        let request = PredictionRequest::from_form(&form(), 9).unwrap();
        assert_eq!(request.state, "Punjab");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["N"], 80.0);
        assert_eq!(json["ph"], 7.1);
        assert_eq!(json["land_size"], 3.0);
        assert_eq!(json["sowing_month"], "November");
        assert!(json.get("soil_type").is_none());
    }

    #[test]
    fn unreadable_numbers_abort_before_the_window_check() {
        let mut bad = form();
        bad.k = "lots".into();
        bad.sowing_month = "may".into();
        assert!(matches!(
            PredictionRequest::from_form(&bad, 0),
            Err(PredictionError::MissingField(Field::K))
        ));

        let mut far = form();
        far.sowing_month = "may".into();
        let err = PredictionRequest::from_form(&far, 0).unwrap_err();
        assert!(matches!(err, PredictionError::OutOfWindow));
        assert!(err.to_string().starts_with("⚠️ Please select sowing month"));
    }

    #[test]
    fn success_keeps_at_most_three_crops() {
        let body = r#"{
            "status": "success",
            "location_used": "Ludhiana, Punjab",
            "season_detected": "RABI",
            "weather_used": {"temperature": 18.5, "humidity": 61.0, "rainfall": 4.2},
            "top_3": [
                {"crop": "wheat", "price_per_quintal": 2275, "yield_per_acre": 18,
                 "total_profit": 61200, "season_match": true,
                 "total_revenue": 122850, "total_cost": 61650},
                {"crop": "mustard", "price_per_quintal": 5650, "yield_per_acre": 7,
                 "total_profit": 40000, "season_match": true},
                {"crop": "chickpea", "price_per_quintal": 5440, "yield_per_acre": 6,
                 "total_profit": 30000, "season_match": false},
                {"crop": "maize", "price_per_quintal": 2090, "yield_per_acre": 20,
                 "total_profit": 20000, "season_match": false}
            ]
        }"#;
        let response: PredictionResponse = serde_json::from_str(body).unwrap();
        let prediction = response.into_prediction().unwrap();
        assert_eq!(prediction.crops.len(), 3);
        assert_eq!(prediction.crops[0].total_revenue, Some(122_850.0));
        assert_eq!(prediction.crops[1].total_cost, None);
        assert_eq!(prediction.season, "RABI");
    }

    #[test]
    fn rejection_carries_server_message_or_fallback() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{"status":"error","message":"Invalid district/state"}"#).unwrap();
        let err = response.into_prediction().unwrap_err();
        assert_eq!(err.to_string(), "Invalid district/state");
        assert_eq!(err.detail(), "Invalid district/state");

        let response: PredictionResponse = serde_json::from_str(r#"{"status":"error"}"#).unwrap();
        assert_eq!(response.into_prediction().unwrap_err().to_string(), "Prediction failed");
    }

    #[test]
    fn too_far_rejection_is_shown_in_hindi() {
        use crate::i18n::{tr, Language};

        let body = r#"{"status":"error","message":"Sowing month is too far for accurate 90-day prediction."}"#;
        let response: PredictionResponse = serde_json::from_str(body).unwrap();
        let err = response.into_prediction().unwrap_err();
        assert!(matches!(err, PredictionError::Rejected(_)));
        let detail = err.detail();
        assert_eq!(detail, "Sowing month is too far for accurate 90-day prediction.");
        assert_ne!(tr(Language::Hindi, &detail), detail);
    }

    #[test]
    fn net_profit_is_read_when_present() {
        let body = r#"{"crop": "rice", "total_profit": 50000, "net_profit": 50000, "confidence": 0.8}"#;
        let crop: CropRecommendation = serde_json::from_str(body).unwrap();
        assert_eq!(crop.net_profit, Some(50_000.0));
        assert!(!crop.season_match);
    }

    #[test]
    fn only_the_newest_submission_reports_back() {
        let mut submissions = Submissions::default();
        let first = submissions.begin();
        assert!(submissions.is_current(first));

        let second = submissions.begin();
        assert!(!submissions.is_current(first));
        assert!(submissions.is_current(second));
    }

    #[test]
    fn transport_failures_read_as_server_not_responding() {
        let err = PredictionError::from(ApiError::Status(502));
        assert_eq!(err.to_string(), "❌ Server not responding");
        assert_eq!(err.detail(), "Server not responding");
    }
}
