use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::crops::CropCarousel;
use super::timeline::Timeline;
use super::weather::WeatherTicker;
use crate::auth::signup::NavAuthButton;
use crate::config;
use crate::context::UiContext;
use crate::i18n::tr;
use crate::survey::view::Survey;
use crate::utils::scroll::{
    active_section, entered, scroll_to_section, smooth_scroll_to, use_viewport, SectionBox,
    REVEAL_MARGIN_PX,
};

/// Nav entries: section id and label.
const NAV: [(&str, &str); 5] = [
    ("home", "Home"),
    ("how-it-works", "How It Works"),
    ("weather-advisory", "Weather AI"),
    ("crops", "Crops"),
    ("footer", "Contact"),
];

const FOOTER_ID: &str = "footer";
/// Sections that never get the reveal animation.
const NO_REVEAL: &str = "weather-advisory";
const RIPPLE_MS: u32 = 600;

/// Click ripples on the call-to-action button, keyed by id.
#[derive(Clone, Debug, Default, PartialEq)]
struct Ripples {
    spots: Vec<(u32, i32, i32)>,
}

enum RippleAction {
    Add(u32, i32, i32),
    Remove(u32),
}

impl Reducible for Ripples {
    type Action = RippleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut spots = self.spots.clone();
        match action {
            RippleAction::Add(id, x, y) => spots.push((id, x, y)),
            RippleAction::Remove(id) => spots.retain(|(r, _, _)| *r != id),
        }
        Rc::new(Ripples { spots })
    }
}

const LANDING_CSS: &str = r#"
    body.modal-open { overflow: hidden; }
    .progress-bar { position: fixed; top: 0; left: 0; height: 3px; background: #2e7d32; z-index: 1000; }
    .cta { position: relative; overflow: hidden; }
    .cta .ripple {
        position: absolute;
        width: 12px;
        height: 12px;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.6);
        transform: translate(-50%, -50%) scale(0);
        animation: ripple 0.6s ease-out;
        pointer-events: none;
    }
    @keyframes ripple {
        to { transform: translate(-50%, -50%) scale(25); opacity: 0; }
    }
    .back-to-top { position: fixed; right: 24px; bottom: 96px; transition: opacity 0.3s; }
"#;

/// Offset for the fixed nav. The crops section sits a little lower.
fn landing_extra(id: &str) -> f64 {
    if id == "crops" {
        config::CROPS_EXTRA_OFFSET_PX
    } else {
        0.0
    }
}

#[function_component]
pub fn Landing() -> Html {
    let ctx = use_context::<UiContext>().expect("UiContext missing");
    let lang = ctx.site_language();
    let viewport = use_viewport();
    let section_refs = use_memo(|_| NAV.iter().map(|_| NodeRef::default()).collect::<Vec<_>>(), ());
    let active = use_state_eq(|| None::<&'static str>);
    let revealed = use_state_eq(|| vec![false; NAV.len()]);
    let ripples = use_reducer(Ripples::default);
    let ripple_seq = use_mut_ref(|| 0u32);

    // scroll spy and reveal
    {
        let section_refs = section_refs.clone();
        let active = active.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |view| {
                let elements: Vec<Option<HtmlElement>> =
                    section_refs.iter().map(|r| r.cast::<HtmlElement>()).collect();
                let boxes: Vec<SectionBox> = NAV
                    .iter()
                    .zip(&elements)
                    .filter_map(|((id, _), el)| {
                        el.as_ref().map(|el| SectionBox {
                            id: *id,
                            top: f64::from(el.offset_top()),
                            height: f64::from(el.offset_height()),
                        })
                    })
                    .collect();
                active.set(active_section(&boxes, view, FOOTER_ID));

                let next: Vec<bool> = NAV
                    .iter()
                    .zip(&elements)
                    .zip(revealed.iter())
                    .map(|(((id, _), el), was)| {
                        *was || (*id != NO_REVEAL
                            && el.as_ref().map_or(false, |el| {
                                entered(el.get_bounding_client_rect().top(), view.height, REVEAL_MARGIN_PX)
                            }))
                    })
                    .collect();
                revealed.set(next);
                || ()
            },
            viewport,
        );
    }

    let nav_click = |id: &'static str| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(id, landing_extra(id));
        })
    };

    let on_cta = {
        let ripples = ripples.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let id = {
                let mut seq = ripple_seq.borrow_mut();
                *seq = seq.wrapping_add(1);
                *seq
            };
            ripples.dispatch(RippleAction::Add(id, e.offset_x(), e.offset_y()));
            let ripples = ripples.dispatcher();
            Timeout::new(RIPPLE_MS, move || ripples.dispatch(RippleAction::Remove(id)))
            .forget();
            scroll_to_section("weather-advisory", 0.0);
        })
    };

    let back_to_top = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        smooth_scroll_to(0.0);
    });

    let section_class = |idx: usize, base: &'static str| {
        classes!("section", base, revealed.get(idx).copied().unwrap_or(false).then_some("active"))
    };

    html! {
        <div class="landing-page">
            <style>{ LANDING_CSS }</style>
            <div id="progressBar" class="progress-bar" style={format!("width: {}%", viewport.progress())}></div>
            <nav class="navbar">
                <a href="#home" class="logo" onclick={nav_click("home")}>{"🌱 Smart Kisan"}</a>
                <div class="nav-links">
                    { for NAV.iter().map(|(id, label)| html! {
                        <a
                            href={format!("#{}", id)}
                            class={classes!((*active == Some(*id)).then_some("active"))}
                            onclick={nav_click(*id)}
                        >
                            { tr(lang, label) }
                        </a>
                    }) }
                </div>
                <NavAuthButton />
            </nav>

            <header id="home" ref={section_refs[0].clone()} class={section_class(0, "hero")}>
                <div class="hero-content">
                    <h1>{ tr(lang, "Grow the Right Crop This Season") }</h1>
                    <p>{ tr(lang, "AI-powered recommendations based on climate, soil & profitability.") }</p>
                    <a href="#weather-advisory" class="cta" onclick={on_cta}>
                        { tr(lang, "Get Started") }
                        { for ripples.spots.iter().map(|(id, x, y)| html! {
                            <span key={*id} class="ripple" style={format!("left: {}px; top: {}px", x, y)}></span>
                        }) }
                    </a>
                </div>
            </header>

            <div ref={section_refs[1].clone()} class={section_class(1, "timeline-wrap")}>
                <Timeline viewport={viewport} lang={lang} />
            </div>

            <section id="weather-advisory" ref={section_refs[2].clone()} class="section weather-section">
                <WeatherTicker />
                <Survey />
            </section>

            <div ref={section_refs[3].clone()} class={section_class(3, "crops-wrap")}>
                <CropCarousel />
            </div>

            <footer id="footer" ref={section_refs[4].clone()} class={section_class(4, "footer")}>
                <div class="footer-brand">
                    <h3>{"🌱 Smart Kisan"}</h3>
                    <p>{ tr(lang, "Smart agriculture insights, weather, and crop advisory.") }</p>
                </div>
                <div class="footer-links">
                    <h4>{ tr(lang, "Quick Links") }</h4>
                    { for NAV.iter().take(4).map(|(id, label)| html! {
                        <a href={format!("#{}", id)} onclick={nav_click(*id)}>{ tr(lang, label) }</a>
                    }) }
                </div>
                <p class="footer-copy">{"© 2025 Smart Kisan"}</p>
            </footer>

            <a
                id="backToTop"
                href="#home"
                class="back-to-top"
                style={if viewport.show_back_to_top() {
                    "opacity: 1; pointer-events: auto"
                } else {
                    "opacity: 0; pointer-events: none"
                }}
                onclick={back_to_top}
            >
                {"⬆"}
            </a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiring_ripple_keeps_newer_ones() {
        let ripples = Rc::new(Ripples::default())
            .reduce(RippleAction::Add(1, 10, 12))
            .reduce(RippleAction::Add(2, 40, 8));
        let ripples = ripples.reduce(RippleAction::Remove(1));
        assert_eq!(ripples.spots, vec![(2, 40, 8)]);

        let ripples = ripples.reduce(RippleAction::Remove(2));
        assert!(ripples.spots.is_empty());
    }
}
