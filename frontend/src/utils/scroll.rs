//! Scroll math for the page chrome plus the small amount of browser glue it
//! needs (a requestAnimationFrame loop and a scroll/resize hook).

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::dom::Listener;
use crate::config;

/// Nav link whose section contains `scrollY + SPY_LINE_PX` is active.
pub const SPY_LINE_PX: f64 = 120.0;
pub const BACK_TO_TOP_AFTER_PX: f64 = 350.0;
pub const REVEAL_MARGIN_PX: f64 = 150.0;
pub const TIMELINE_MARGIN_PX: f64 = 120.0;
/// Horizontal gap between a timeline card and its connector.
pub const CONNECTOR_GAP_PX: f64 = 18.0;

pub fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Position of a smooth scroll `elapsed` ms in, and whether it has finished.
pub fn scroll_step(start: f64, target: f64, elapsed: f64, duration: f64) -> (f64, bool) {
    let progress = if duration <= 0.0 {
        1.0
    } else {
        (elapsed / duration).clamp(0.0, 1.0)
    };
    (start + (target - start) * ease_in_out_quad(progress), progress >= 1.0)
}

/// Viewport measurements taken on every scroll and resize.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
    pub doc_height: f64,
}

impl Viewport {
    pub fn measure() -> Option<Self> {
        let window = web_sys::window()?;
        let body = window.document()?.body()?;
        Some(Self {
            scroll_y: window.scroll_y().ok()?,
            height: window.inner_height().ok()?.as_f64()?,
            doc_height: f64::from(body.scroll_height()),
        })
    }

    /// Reading progress in percent, for the bar under the nav.
    pub fn progress(&self) -> f64 {
        let max = self.doc_height - self.height;
        if max <= 0.0 {
            return 0.0;
        }
        (self.scroll_y / max * 100.0).clamp(0.0, 100.0)
    }

    pub fn show_back_to_top(&self) -> bool {
        self.scroll_y > BACK_TO_TOP_AFTER_PX
    }

    pub fn at_bottom(&self) -> bool {
        self.scroll_y + self.height >= self.doc_height - 10.0
    }
}

/// A page section's document offset and height.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBox {
    pub id: &'static str,
    pub top: f64,
    pub height: f64,
}

/// Scroll spy. At the very bottom of the page `footer_id` wins even if its
/// section is too short to reach the spy line.
pub fn active_section(
    sections: &[SectionBox],
    view: &Viewport,
    footer_id: &'static str,
) -> Option<&'static str> {
    if view.at_bottom() && sections.iter().any(|s| s.id == footer_id) {
        return Some(footer_id);
    }
    let line = view.scroll_y + SPY_LINE_PX;
    sections
        .iter()
        .filter(|s| line >= s.top && line < s.top + s.height)
        .map(|s| s.id)
        .last()
}

/// Whether an element whose viewport top is `top` has scrolled far enough
/// into view to reveal.
pub fn entered(top: f64, viewport_height: f64, margin: f64) -> bool {
    top < viewport_height - margin
}

/// Index of the last timeline card whose midpoint sits in the middle band
/// of the viewport.
pub fn glow_index(midpoints: &[f64], viewport_height: f64) -> Option<usize> {
    let (low, high) = (viewport_height * 0.25, viewport_height * 0.65);
    midpoints.iter().rposition(|mid| *mid > low && *mid < high)
}

/// One side of a connector: the card's rect in document coordinates and
/// which column it sits in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub left: f64,
    pub right: f64,
    pub mid_y: f64,
    pub left_column: bool,
}

impl Anchor {
    fn x(&self) -> f64 {
        if self.left_column {
            self.right + CONNECTOR_GAP_PX
        } else {
            self.left - CONNECTOR_GAP_PX
        }
    }
}

/// Cubic bezier between two consecutive timeline cards.
pub fn connector_path(a: &Anchor, b: &Anchor) -> String {
    let (x1, y1, x2, y2) = (a.x(), a.mid_y, b.x(), b.mid_y);
    let mid = (y1 + y2) / 2.0;
    format!("M {x1},{y1} C {x1},{mid} {x2},{mid} {x2},{y2}")
}

/// Run `frame` on every animation frame until it returns false.
pub fn animate<F>(mut frame: F)
where
    F: FnMut(f64) -> bool + 'static,
{
    let Some(window) = web_sys::window() else {
        return;
    };
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    *slot.borrow_mut() = Some(Closure::new(move |now: f64| {
        if !frame(now) {
            // breaks the cycle so the closure is freed
            next.borrow_mut().take();
            return;
        }
        if let (Some(window), Some(cb)) = (web_sys::window(), next.borrow().as_ref()) {
            let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }));
    if let Some(cb) = slot.borrow().as_ref() {
        if let Err(e) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    };
}

/// Ease the window to `target_y` over [`config::SMOOTH_SCROLL_MS`].
pub fn smooth_scroll_to(target_y: f64) {
    let Some(start) = web_sys::window().and_then(|w| w.scroll_y().ok()) else {
        return;
    };
    let mut began: Option<f64> = None;
    animate(move |now| {
        let t0 = *began.get_or_insert(now);
        let (y, done) = scroll_step(start, target_y, now - t0, config::SMOOTH_SCROLL_MS);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, y);
        }
        !done
    });
}

/// Smooth scroll so the element with `id` sits below the fixed nav.
/// `extra` is added to the landing offset.
pub fn scroll_to_section(id: &str, extra: f64) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let Some(target) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        log::warn!("No section #{} to scroll to", id);
        return;
    };
    let scroll_y = window.scroll_y().unwrap_or_default();
    let top = target.get_bounding_client_rect().top();
    smooth_scroll_to(top + scroll_y - config::NAV_OFFSET_PX + extra);
}

/// Current viewport, re-measured on every scroll and resize.
#[hook]
pub fn use_viewport() -> Viewport {
    let viewport = use_state(|| Viewport::measure().unwrap_or_default());
    {
        let viewport = viewport.clone();
        use_effect_with_deps(
            move |_| {
                let update = move |_: web_sys::Event| {
                    if let Some(measured) = Viewport::measure() {
                        viewport.set(measured);
                    }
                };
                let listeners = [
                    Listener::window("scroll", update.clone()),
                    Listener::window("resize", update),
                ];
                move || drop(listeners)
            },
            (),
        );
    }
    *viewport
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(scroll_y: f64) -> Viewport {
        Viewport {
            scroll_y,
            height: 800.0,
            doc_height: 4800.0,
        }
    }

    fn sections() -> Vec<SectionBox> {
        vec![
            SectionBox {
                id: "home",
                top: 0.0,
                height: 900.0,
            },
            SectionBox {
                id: "how-it-works",
                top: 900.0,
                height: 1200.0,
            },
            SectionBox {
                id: "survey",
                top: 2100.0,
                height: 1100.0,
            },
            SectionBox {
                id: "crops",
                top: 3200.0,
                height: 1300.0,
            },
            SectionBox {
                id: "footer",
                top: 4500.0,
                height: 300.0,
            },
        ]
    }

    #[test]
    fn easing_is_symmetric_and_pinned_at_the_ends() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(0.5), 0.5);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        let a = ease_in_out_quad(0.2);
        let b = ease_in_out_quad(0.8);
        assert!((a + b - 1.0).abs() < 1e-12);
        assert!(a < 0.2);
    }

    #[test]
    fn scroll_step_finishes_on_time() {
        assert_eq!(scroll_step(100.0, 500.0, 0.0, 1000.0), (100.0, false));
        assert_eq!(scroll_step(100.0, 500.0, 500.0, 1000.0), (300.0, false));
        assert_eq!(scroll_step(100.0, 500.0, 1500.0, 1000.0), (500.0, true));
        assert_eq!(scroll_step(800.0, 0.0, 0.0, 0.0), (0.0, true));
    }

    #[test]
    fn scroll_spy_uses_a_line_below_the_nav() {
        assert_eq!(active_section(&sections(), &view(0.0), "footer"), Some("home"));
        // 780 + 120 lands exactly on the second section
        assert_eq!(active_section(&sections(), &view(780.0), "footer"), Some("how-it-works"));
        assert_eq!(active_section(&sections(), &view(3100.0), "footer"), Some("crops"));
    }

    #[test]
    fn bottom_of_page_selects_footer() {
        assert_eq!(active_section(&sections(), &view(3995.0), "footer"), Some("footer"));
        assert_eq!(active_section(&sections(), &view(3980.0), "footer"), Some("crops"));
    }

    #[test]
    fn progress_and_back_to_top() {
        assert_eq!(view(0.0).progress(), 0.0);
        assert_eq!(view(2000.0).progress(), 50.0);
        assert_eq!(view(4000.0).progress(), 100.0);
        let short = Viewport {
            scroll_y: 0.0,
            height: 900.0,
            doc_height: 600.0,
        };
        assert_eq!(short.progress(), 0.0);

        assert!(!view(350.0).show_back_to_top());
        assert!(view(351.0).show_back_to_top());
    }

    #[test]
    fn glow_picks_the_last_card_in_the_band() {
        // band is (200, 520) for an 800px viewport
        assert_eq!(glow_index(&[-300.0, 150.0, 600.0], 800.0), None);
        assert_eq!(glow_index(&[100.0, 250.0, 500.0, 900.0], 800.0), Some(2));
        assert!(entered(640.0, 800.0, REVEAL_MARGIN_PX));
        assert!(!entered(650.0, 800.0, REVEAL_MARGIN_PX));
    }

    #[test]
    fn connector_leaves_from_the_inner_edges() {
        let a = Anchor {
            left: 100.0,
            right: 400.0,
            mid_y: 1000.0,
            left_column: true,
        };
        let b = Anchor {
            left: 600.0,
            right: 900.0,
            mid_y: 1400.0,
            left_column: false,
        };
        assert_eq!(
            connector_path(&a, &b),
            "M 418,1000 C 418,1200 582,1200 582,1400"
        );
    }
}
