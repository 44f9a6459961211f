use yew::prelude::*;

use super::prediction::{CropRecommendation, Prediction};
use crate::i18n::{tr, tr_name, Language};
use crate::utils::format::group_thousands;

#[derive(Properties, PartialEq)]
pub struct ResultCardProps {
    pub prediction: Prediction,
    pub lang: Language,
}

fn crop_row(lang: Language, index: usize, item: &CropRecommendation) -> Html {
    let badge = if item.season_match {
        "✅ Best for season"
    } else {
        "⚠️ Off-season"
    };
    let money = |label: &str, amount: f64| {
        html! { <div>{ format!("💵 ₹ {} {}", group_thousands(amount), tr(lang, label)) }</div> }
    };

    html! {
        <div class="result-row">
            <span class="result-crop">{ format!("🌾 {}. {}", index + 1, tr_name(lang, &item.crop)) }</span>
            <span class="result-badge">{ tr(lang, badge) }</span>
            <div class="result-figures">
                <div>{ format!("💰 ₹ {} {}", group_thousands(item.price_per_quintal), tr(lang, "/ qtl")) }</div>
                <div>{ format!("🌾 {} qtl {}", group_thousands(item.yield_per_acre), tr(lang, "per acre")) }</div>
                if let Some(revenue) = item.total_revenue {
                    { money("Revenue", revenue) }
                }
                if let Some(cost) = item.total_cost {
                    { money("Cost", cost) }
                }
                if let Some(net) = item.net_profit {
                    { money("Net Profit", net) }
                }
                <div>{ format!("✅ ₹ {} {}", group_thousands(item.total_profit), tr(lang, "Total Profit")) }</div>
            </div>
        </div>
    }
}

/// Top three crops with the context the backend used to pick them.
#[function_component]
pub fn ResultCard(props: &ResultCardProps) -> Html {
    let lang = props.lang;
    let p = &props.prediction;
    let weather = &p.weather;

    html! {
        <div class="result-card">
            <h3>{ tr(lang, "✅ AI Crop Recommendations") }</h3>
            <p class="result-meta">{ format!("{} {}", tr(lang, "📍 Location:"), p.location) }</p>
            <p class="result-meta">{ format!("{} {}", tr(lang, "🌱 Season Detected:"), p.season) }</p>
            <p class="result-meta">
                { format!(
                    "{} {}°C | 💧 {}% | 🌧️ {} mm",
                    tr(lang, "🌦️ Climate Used:"),
                    weather.temperature,
                    weather.humidity,
                    weather.rainfall,
                ) }
            </p>
            <div class="result-list">
                { for p.crops.iter().enumerate().map(|(i, item)| crop_row(lang, i, item)) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorCardProps {
    pub detail: String,
    pub lang: Language,
}

#[function_component]
pub fn ErrorCard(props: &ErrorCardProps) -> Html {
    html! {
        <div class="result-card error-card">
            <h3>{"⚠️ "}{ tr(props.lang, "Uh, oh something went wrong") }</h3>
            <p>{ tr(props.lang, &props.detail).to_string() }</p>
        </div>
    }
}
