use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::config;
use crate::context::UiContext;
use crate::i18n::tr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupKind {
    Success,
    Error,
    Warn,
}

impl PopupKind {
    fn class(self) -> &'static str {
        match self {
            PopupKind::Success => "success",
            PopupKind::Error => "error",
            PopupKind::Warn => "warn",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Popup {
    pub id: u32,
    pub message: String,
    pub kind: PopupKind,
}

/// Everything that floats above the page: one transient popup, the
/// "server waking up" notice and the plant loader.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationState {
    pub popup: Option<Popup>,
    pub waking: bool,
    pub loader: bool,
    next_id: u32,
}

pub enum NotificationAction {
    Show(String, PopupKind),
    Expire(u32),
    WakeShow,
    WakeHide,
    LoaderShow,
    LoaderHide,
}

impl Reducible for NotificationState {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NotificationAction::Show(message, kind) => {
                // the wake notice owns the screen while it is up
                if self.waking {
                    log::warn!("Popup suppressed while wake notice is visible: {}", message);
                    return self;
                }
                let id = self.next_id.wrapping_add(1);
                Rc::new(Self {
                    popup: Some(Popup { id, message, kind }),
                    next_id: id,
                    ..(*self).clone()
                })
            }
            NotificationAction::Expire(id) => match &self.popup {
                Some(popup) if popup.id == id => Rc::new(Self {
                    popup: None,
                    ..(*self).clone()
                }),
                _ => self,
            },
            NotificationAction::WakeShow => {
                if self.waking {
                    return self;
                }
                Rc::new(Self {
                    waking: true,
                    ..(*self).clone()
                })
            }
            NotificationAction::WakeHide => {
                if !self.waking {
                    return self;
                }
                Rc::new(Self {
                    waking: false,
                    ..(*self).clone()
                })
            }
            NotificationAction::LoaderShow => {
                if self.waking || self.loader {
                    return self;
                }
                Rc::new(Self {
                    loader: true,
                    ..(*self).clone()
                })
            }
            NotificationAction::LoaderHide => {
                if !self.loader {
                    return self;
                }
                Rc::new(Self {
                    loader: false,
                    ..(*self).clone()
                })
            }
        }
    }
}

/// Handle components use to raise notifications.
#[derive(Clone, PartialEq)]
pub struct Notifier(UseReducerHandle<NotificationState>);

impl Notifier {
    pub fn new(handle: UseReducerHandle<NotificationState>) -> Self {
        Self(handle)
    }

    pub fn state(&self) -> &NotificationState {
        &self.0
    }

    pub fn popup(&self, message: impl Into<String>, kind: PopupKind) {
        self.0.dispatch(NotificationAction::Show(message.into(), kind));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.popup(message, PopupKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.popup(message, PopupKind::Error);
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.popup(message, PopupKind::Warn);
    }

    pub fn show_wake(&self) {
        self.0.dispatch(NotificationAction::WakeShow);
    }

    pub fn hide_wake(&self) {
        self.0.dispatch(NotificationAction::WakeHide);
    }

    pub fn show_loader(&self) {
        self.0.dispatch(NotificationAction::LoaderShow);
    }

    pub fn hide_loader(&self) {
        self.0.dispatch(NotificationAction::LoaderHide);
    }

    fn expire(&self, id: u32) {
        self.0.dispatch(NotificationAction::Expire(id));
    }
}

/// Page-lifetime countdown shown in the wake notice. It is not tied to any
/// request: it counts down and starts over at the top.
#[derive(Clone, Debug, PartialEq)]
pub struct WakeCountdown {
    total: u32,
    remaining: u32,
}

impl WakeCountdown {
    pub fn new(total: u32) -> Self {
        Self {
            total,
            remaining: total,
        }
    }

    pub fn message(&self) -> String {
        format!(
            "⚠️ Our AI server is waking up... Please wait {}s",
            self.remaining
        )
    }

    fn ticked(&self) -> Self {
        let remaining = match self.remaining.saturating_sub(1) {
            0 => self.total,
            n => n,
        };
        Self {
            total: self.total,
            remaining,
        }
    }
}

impl Reducible for WakeCountdown {
    type Action = ();

    fn reduce(self: Rc<Self>, _tick: ()) -> Rc<Self> {
        Rc::new(self.ticked())
    }
}

#[function_component]
pub fn PopupHost() -> Html {
    let ctx = use_context::<UiContext>().expect("UiContext missing");
    let popup = ctx.notifier.state().popup.clone();
    let lang = ctx.language.message_language();

    {
        let notifier = ctx.notifier.clone();
        let id = popup.as_ref().map(|p| p.id);
        use_effect_with_deps(
            move |id| {
                let timeout = id.map(|id| {
                    Timeout::new(config::POPUP_VISIBLE_MS, move || notifier.expire(id))
                });
                move || drop(timeout)
            },
            id,
        );
    }

    match popup {
        Some(popup) => html! {
            <div id="customPopup" class={classes!("custom-popup", popup.kind.class(), "show")}>
                <span id="popupMessage">{ tr(lang, &popup.message).to_string() }</span>
            </div>
        },
        None => html! {
            <div id="customPopup" class="custom-popup"></div>
        },
    }
}

#[function_component]
pub fn WakePopup() -> Html {
    let ctx = use_context::<UiContext>().expect("UiContext missing");
    let countdown = use_reducer(|| WakeCountdown::new(config::WAKE_COUNTDOWN_SECS));
    let waking = ctx.notifier.state().waking;

    // runs for the whole page life, visible or not
    {
        let countdown = countdown.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(1_000, move || countdown.dispatch(()));
                move || drop(interval)
            },
            (),
        );
    }

    {
        let notifier = ctx.notifier.clone();
        use_effect_with_deps(
            move |waking| {
                let failsafe = waking.then(|| {
                    Timeout::new(config::WAKE_NOTICE_FAILSAFE_MS, move || {
                        log::info!("Wake notice failsafe fired");
                        notifier.hide_wake();
                    })
                });
                move || drop(failsafe)
            },
            waking,
        );
    }

    html! {
        <div id="renderPopup" class={classes!("render-popup", waking.then_some("show"))}>
            if waking {
                <span id="renderPopupMessage">{ countdown.message() }</span>
            }
        </div>
    }
}

#[function_component]
pub fn PlantLoader() -> Html {
    let ctx = use_context::<UiContext>().expect("UiContext missing");
    let visible = ctx.notifier.state().loader;

    {
        let notifier = ctx.notifier.clone();
        use_effect_with_deps(
            move |visible| {
                let failsafe = visible.then(|| {
                    Timeout::new(config::PLANT_LOADER_FAILSAFE_MS, move || notifier.hide_loader())
                });
                move || drop(failsafe)
            },
            visible,
        );
    }

    html! {
        <div id="globalPlantLoader" class={classes!("plant-loader", visible.then_some("show"))}>
            <div class="plant-stem"></div>
            <div class="plant-leaf left"></div>
            <div class="plant-leaf right"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: NotificationState, action: NotificationAction) -> NotificationState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn popups_replace_each_other_and_expire_by_id() {
        let state = reduce(
            NotificationState::default(),
            NotificationAction::Show("first".into(), PopupKind::Success),
        );
        let first = state.popup.clone().map(|p| p.id);
        let state = reduce(state, NotificationAction::Show("second".into(), PopupKind::Error));
        assert_eq!(state.popup.as_ref().map(|p| p.message.as_str()), Some("second"));

        // a stale expiry from the first popup must not hide the second
        let state = reduce(state, NotificationAction::Expire(first.unwrap_or_default()));
        assert!(state.popup.is_some());

        let second = state.popup.as_ref().map(|p| p.id).unwrap_or_default();
        let state = reduce(state, NotificationAction::Expire(second));
        assert!(state.popup.is_none());
    }

    #[test]
    fn wake_notice_suppresses_popups_and_loader() {
        let state = reduce(NotificationState::default(), NotificationAction::WakeShow);
        let state = reduce(state, NotificationAction::Show("hidden".into(), PopupKind::Warn));
        assert!(state.popup.is_none());
        let state = reduce(state, NotificationAction::LoaderShow);
        assert!(!state.loader);

        let state = reduce(state, NotificationAction::WakeHide);
        let state = reduce(state, NotificationAction::Show("visible".into(), PopupKind::Warn));
        assert!(state.popup.is_some());
    }

    #[test]
    fn only_one_wake_notice() {
        let shown = Rc::new(NotificationState::default()).reduce(NotificationAction::WakeShow);
        let again = shown.clone().reduce(NotificationAction::WakeShow);
        assert!(Rc::ptr_eq(&shown, &again));
    }

    #[test]
    fn countdown_wraps_back_to_the_top() {
        let mut countdown = WakeCountdown::new(60);
        for _ in 0..59 {
            countdown = countdown.ticked();
        }
        assert!(countdown.message().ends_with("Please wait 1s"));
        countdown = countdown.ticked();
        assert!(countdown.message().ends_with("Please wait 60s"));
    }
}
