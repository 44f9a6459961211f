use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent as DomMouseEvent, WheelEvent};
use yew::prelude::*;

use crate::context::UiContext;
use crate::i18n::{tr, Language};
use crate::utils::dom::Listener;
use crate::utils::scroll::animate;

pub struct CropInfo {
    pub name: &'static str,
    pub key: &'static str,
    pub duration: &'static str,
    pub temp: &'static str,
    pub rain: &'static str,
    pub soil: &'static str,
    pub profit: &'static str,
}

pub const CROPS: [CropInfo; 10] = [
    CropInfo {
        name: "Wheat",
        key: "wheat",
        duration: "110–130 days",
        temp: "10–25°C",
        rain: "300–900 mm",
        soil: "Loamy / Clayey",
        profit: "High",
    },
    CropInfo {
        name: "Rice (Paddy)",
        key: "paddy",
        duration: "120–150 days",
        temp: "20–35°C",
        rain: "1000–1500 mm",
        soil: "Clay / Silty",
        profit: "High",
    },
    CropInfo {
        name: "Maize",
        key: "maize",
        duration: "90–110 days",
        temp: "18–27°C",
        rain: "500–800 mm",
        soil: "Well-drained loamy",
        profit: "Medium",
    },
    CropInfo {
        name: "Soybean",
        key: "soybean",
        duration: "90–110 days",
        temp: "18–30°C",
        rain: "600–1000 mm",
        soil: "Black / Loamy",
        profit: "High",
    },
    CropInfo {
        name: "Cotton",
        key: "cotton",
        duration: "150–180 days",
        temp: "20–35°C",
        rain: "600–800 mm",
        soil: "Black soil",
        profit: "High",
    },
    CropInfo {
        name: "Groundnut",
        key: "groundnut",
        duration: "100–120 days",
        temp: "21–27°C",
        rain: "500–1000 mm",
        soil: "Sandy loam",
        profit: "Medium",
    },
    CropInfo {
        name: "Mustard",
        key: "mustard",
        duration: "90–110 days",
        temp: "10–25°C",
        rain: "400–500 mm",
        soil: "Loam / Clay loam",
        profit: "Medium",
    },
    CropInfo {
        name: "Potato",
        key: "potato",
        duration: "90–120 days",
        temp: "15–25°C",
        rain: "500–700 mm",
        soil: "Well-drained loam",
        profit: "High",
    },
    CropInfo {
        name: "Sugarcane",
        key: "sugarcane",
        duration: "10–18 months",
        temp: "20–35°C",
        rain: "1200–1500 mm",
        soil: "Deep rich loam",
        profit: "High",
    },
    CropInfo {
        name: "Chana",
        key: "chana",
        duration: "100–120 days",
        temp: "10–30°C",
        rain: "400–600 mm",
        soil: "Well-drained loam",
        profit: "Medium",
    },
];

pub const MANDI_CITIES: [&str; 10] = [
    "Delhi", "Mumbai", "Pune", "Jaipur", "Nagpur", "Ahmedabad", "Kolkata", "Hyderabad", "Indore",
    "Bengaluru",
];

/// Pixels the track moves per animation frame.
const AUTO_SPEED: f64 = 0.8;
const WHEEL_FACTOR: f64 = 1.2;
/// Prices wander up to this fraction either side of the base.
const PRICE_SPREAD: f64 = 0.08;

/// Base mandi price in ₹ per quintal.
pub fn base_price(key: &str) -> f64 {
    match key {
        "wheat" => 2400.0,
        "paddy" => 2300.0,
        "maize" => 2100.0,
        "soybean" => 4200.0,
        "cotton" => 6500.0,
        "groundnut" => 5200.0,
        "mustard" => 5400.0,
        "potato" => 1400.0,
        "sugarcane" => 320.0,
        "chana" => 5200.0,
        _ => 3000.0,
    }
}

/// Illustrative per-city prices. `random` yields values in `[0, 1)`.
pub fn mock_prices(key: &str, mut random: impl FnMut() -> f64) -> Vec<(&'static str, i64)> {
    let base = base_price(key);
    MANDI_CITIES
        .iter()
        .map(|city| {
            let jitter = (random() * 2.0 * PRICE_SPREAD - PRICE_SPREAD) * base;
            (*city, (base + jitter).round() as i64)
        })
        .collect()
}

pub fn price_ticker(prices: &[(&str, i64)]) -> String {
    prices
        .iter()
        .map(|(city, price)| format!("{}: ₹{}/qtl", city, price))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Keep the offset inside one copy of the duplicated track so the loop is
/// seamless in both directions.
pub fn wrap_offset(pos: f64, half: f64) -> f64 {
    if half <= 0.0 {
        return pos;
    }
    let mut pos = pos;
    if pos <= -half {
        pos += half;
    }
    if pos >= 0.0 {
        pos -= half;
    }
    pos
}

fn half_width(track: &Element) -> f64 {
    f64::from(track.scroll_width()) / 2.0
}

fn place(track: &Element, pos: f64) {
    let _ = track.set_attribute("style", &format!("transform: translateX({}px)", pos));
}

fn crop_card(lang: Language, crop: &CropInfo, ticker: &str, copy: bool) -> Html {
    html! {
        <div class="crop-card">
            <div class="price-ticker-bar">
                <div class={classes!("price-ticker-inner", copy.then_some("still"))}>{ ticker.to_string() }</div>
            </div>
            <img src={format!("images/{}.jpg", crop.key)} class="crop-image" alt={crop.name} />
            <div class="crop-body">
                <h3>{ tr(lang, crop.name) }</h3>
                <p><strong>{ tr(lang, "Duration:") }</strong>{" "}{ crop.duration }</p>
                <p><strong>{ tr(lang, "Temp:") }</strong>{" "}{ crop.temp }</p>
                <p><strong>{ tr(lang, "Rainfall:") }</strong>{" "}{ crop.rain }</p>
                <p><strong>{ tr(lang, "Soil:") }</strong>{" "}{ crop.soil }</p>
                <span class="profit-tag">{ format!("{} {}", tr(lang, "Profit:"), tr(lang, crop.profit)) }</span>
            </div>
        </div>
    }
}

#[function_component]
pub fn CropCarousel() -> Html {
    let ctx = use_context::<UiContext>().expect("UiContext missing");
    let lang = ctx.site_language();
    let carousel_ref = use_node_ref();
    let track_ref = use_node_ref();
    let tickers = use_memo(
        |_| {
            CROPS
                .iter()
                .map(|crop| price_ticker(&mock_prices(crop.key, js_sys::Math::random)))
                .collect::<Vec<_>>()
        },
        (),
    );

    {
        let carousel_ref = carousel_ref.clone();
        let track_ref = track_ref.clone();
        use_effect_with_deps(
            move |_| {
                let pos = Rc::new(Cell::new(0.0_f64));
                let drag: Rc<Cell<Option<(f64, f64)>>> = Rc::new(Cell::new(None));
                let alive = Rc::new(Cell::new(true));

                {
                    let (pos, alive, track_ref) = (pos.clone(), alive.clone(), track_ref.clone());
                    animate(move |_| {
                        let Some(track) = track_ref.cast::<Element>() else {
                            return alive.get();
                        };
                        pos.set(wrap_offset(pos.get() - AUTO_SPEED, half_width(&track)));
                        place(&track, pos.get());
                        alive.get()
                    });
                }

                let wheel = carousel_ref.cast::<HtmlElement>().and_then(|carousel| {
                    let pos = pos.clone();
                    Listener::new(carousel.as_ref(), "wheel", move |e| {
                        let Some(wheel) = e.dyn_ref::<WheelEvent>() else {
                            return;
                        };
                        if wheel.delta_x().abs() > wheel.delta_y().abs() {
                            e.prevent_default();
                            pos.set(pos.get() - wheel.delta_x() * WHEEL_FACTOR);
                        }
                    })
                });

                let press = carousel_ref.cast::<HtmlElement>().and_then(|carousel| {
                    let (pos, drag) = (pos.clone(), drag.clone());
                    Listener::new(carousel.as_ref(), "mousedown", move |e| {
                        if let Some(mouse) = e.dyn_ref::<DomMouseEvent>() {
                            drag.set(Some((f64::from(mouse.client_x()), pos.get())));
                        }
                    })
                });

                let moving = {
                    let (pos, drag, track_ref) = (pos.clone(), drag.clone(), track_ref.clone());
                    Listener::window("mousemove", move |e| {
                        let (Some((start_x, start_pos)), Some(mouse), Some(track)) = (
                            drag.get(),
                            e.dyn_ref::<DomMouseEvent>(),
                            track_ref.cast::<Element>(),
                        ) else {
                            return;
                        };
                        let dragged = start_pos + f64::from(mouse.client_x()) - start_x;
                        pos.set(wrap_offset(dragged, half_width(&track)));
                    })
                };

                let release = Listener::window("mouseup", move |_| drag.set(None));

                move || {
                    alive.set(false);
                    drop((wheel, press, moving, release));
                }
            },
            (),
        );
    }

    let cards = |copy: bool| -> Html {
        CROPS
            .iter()
            .zip(tickers.iter())
            .map(|(crop, ticker)| crop_card(lang, crop, ticker, copy))
            .collect()
    };

    html! {
        <section id="crops" class="crops-section">
            <h2>{ tr(lang, "Live Market Crops") }</h2>
            <p class="crops-subtitle">
                { tr(lang, "See real-time mandi prices & key growing conditions for major Indian crops.") }
            </p>
            <div id="cropCarousel" class="crop-carousel" ref={carousel_ref}>
                <div id="cropTrack" class="crop-track" ref={track_ref}>
                    { cards(false) }
                    { cards(true) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_stay_within_eight_percent() {
        let low = mock_prices("wheat", || 0.0);
        let high = mock_prices("wheat", || 0.999_999);
        assert_eq!(low.len(), MANDI_CITIES.len());
        assert!(low.iter().all(|(_, p)| *p == 2208));
        assert!(high.iter().all(|(_, p)| *p == 2592));
        assert_eq!(mock_prices("unknown", || 0.5)[0], ("Delhi", 3000));
    }

    #[test]
    fn ticker_lists_every_city() {
        let text = price_ticker(&mock_prices("sugarcane", || 0.5));
        assert!(text.starts_with("Delhi: ₹320/qtl | Mumbai: ₹320/qtl"));
        assert_eq!(text.matches(" | ").count(), MANDI_CITIES.len() - 1);
    }

    #[test]
    fn offset_wraps_within_half_the_track() {
        assert_eq!(wrap_offset(-0.8, 1000.0), -0.8);
        assert_eq!(wrap_offset(-1000.0, 1000.0), -1000.0);
        assert_eq!(wrap_offset(-1200.0, 1000.0), -200.0);
        assert_eq!(wrap_offset(150.0, 1000.0), -850.0);
        assert_eq!(wrap_offset(-5.0, 0.0), -5.0);
    }

    #[test]
    fn every_crop_has_a_price_and_hindi_name() {
        for crop in &CROPS {
            assert_ne!(base_price(crop.key), 3000.0, "{}", crop.key);
            assert_ne!(tr(Language::Hindi, crop.name), crop.name);
        }
    }
}
