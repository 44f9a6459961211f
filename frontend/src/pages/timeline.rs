use web_sys::Element;
use yew::prelude::*;

use crate::i18n::{tr, Language};
use crate::utils::scroll::{connector_path, entered, glow_index, Anchor, Viewport, TIMELINE_MARGIN_PX};

const STEPS: [(&str, &str, &str); 4] = [
    (
        "📍",
        "Select Month & Location",
        "You enter your sowing month and region, Smart Kisan adapts to local climate.",
    ),
    (
        "🌦️",
        "AI Weather Understanding",
        "We analyze rainfall, soil moisture, humidity & temperature to avoid crop failure.",
    ),
    (
        "🌾",
        "Recommended Crops",
        "Get 3 ranked crops optimized for yield, climate & season.",
    ),
    (
        "💰",
        "Profit & Growth",
        "See estimated profit per acre, harvest time & risk factors.",
    ),
];

#[derive(Properties, PartialEq)]
pub struct TimelineProps {
    pub viewport: Viewport,
    pub lang: Language,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Layout {
    active: Vec<bool>,
    glow: Option<usize>,
    paths: Vec<String>,
}

fn measure(cards: &[NodeRef], view: &Viewport, previous: &Layout) -> Layout {
    let rects: Vec<_> = cards
        .iter()
        .map(|r| r.cast::<Element>().map(|el| el.get_bounding_client_rect()))
        .collect();

    // activation is sticky
    let active = rects
        .iter()
        .enumerate()
        .map(|(i, rect)| {
            previous.active.get(i).copied().unwrap_or(false)
                || rect
                    .as_ref()
                    .map_or(false, |r| entered(r.top(), view.height, TIMELINE_MARGIN_PX))
        })
        .collect();

    let midpoints: Vec<f64> = rects
        .iter()
        .map(|rect| rect.as_ref().map_or(f64::NAN, |r| r.top() + r.height() / 2.0))
        .collect();

    let anchors: Vec<Option<Anchor>> = rects
        .iter()
        .enumerate()
        .map(|(i, rect)| {
            rect.as_ref().map(|r| Anchor {
                left: r.left(),
                right: r.right(),
                mid_y: r.top() + r.height() / 2.0 + view.scroll_y,
                left_column: i % 2 == 0,
            })
        })
        .collect();
    let paths = anchors
        .windows(2)
        .filter_map(|pair| match pair {
            [Some(a), Some(b)] => Some(connector_path(a, b)),
            _ => None,
        })
        .collect();

    Layout {
        active,
        glow: glow_index(&midpoints, view.height),
        paths,
    }
}

/// "How it works" timeline: cards grow in as they scroll into view, the one
/// in the middle of the screen glows, and dashed vines link them.
#[function_component]
pub fn Timeline(props: &TimelineProps) -> Html {
    let cards = use_memo(|_| STEPS.iter().map(|_| NodeRef::default()).collect::<Vec<_>>(), ());
    let layout = use_state_eq(Layout::default);
    let lang = props.lang;

    {
        let cards = cards.clone();
        let layout = layout.clone();
        use_effect_with_deps(
            move |view| {
                layout.set(measure(&cards, view, &layout));
                || ()
            },
            props.viewport,
        );
    }

    let is_active = |i: usize| layout.active.get(i).copied().unwrap_or(false);

    html! {
        <section id="how-it-works" class="timeline-section">
            <h2>{ tr(lang, "How It Works") }</h2>
            <svg id="timelineSVG" class="timeline-svg">
                { for layout.paths.iter().map(|d| html! {
                    <path
                        d={d.clone()}
                        stroke="#2e7d32"
                        stroke-width="4"
                        fill="none"
                        stroke-dasharray="12 8"
                        stroke-linecap="round"
                    />
                }) }
            </svg>
            <div class="timeline">
                { for STEPS.iter().enumerate().map(|(i, (icon, title, text))| html! {
                    <div
                        class={classes!("timeline-item", if i % 2 == 0 { "left" } else { "right" })}
                        data-step={(i + 1).to_string()}
                    >
                        <div class={classes!("timeline-bubble", (layout.glow == Some(i)).then_some("active"))}>
                            { *icon }
                        </div>
                        <div class={classes!("vine", is_active(i).then_some("active"))}></div>
                        <div
                            ref={cards[i].clone()}
                            class={classes!("timeline-card", is_active(i).then_some("active"))}
                        >
                            <h3>{ tr(lang, title) }</h3>
                            <p>{ tr(lang, text) }</p>
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}
