use yew::prelude::*;

mod auth;
mod chatbot;
mod components;
mod config;
mod context;
mod i18n;
mod pages;
mod survey;
mod utils;

use auth::flow::{AuthState, AuthView};
use auth::session::load_session;
use auth::signup::{SignInModal, SignUpModal};
use auth::verify::OtpModal;
use chatbot::widget::Chatbot;
use components::notification::{NotificationState, Notifier, PlantLoader, PopupHost, WakePopup};
use context::UiContext;
use i18n::{set_document_language, LanguageState};
use pages::landing::Landing;

fn set_body_class(class: &str, on: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let classes = body.class_list();
    let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
    if let Err(e) = result {
        log::warn!("Could not toggle body class {}: {:?}", class, e);
    }
}

#[function_component]
fn App() -> Html {
    let auth = use_reducer(|| AuthState {
        session: load_session(),
        ..Default::default()
    });
    let language = use_reducer(LanguageState::default);
    let notifications = use_reducer(NotificationState::default);

    let ctx = UiContext {
        auth: auth.clone(),
        language: language.clone(),
        notifier: Notifier::new(notifications),
    };

    // page scroll is locked while any auth modal is up
    use_effect_with_deps(
        |view| {
            set_body_class("modal-open", *view != AuthView::Closed);
            || ()
        },
        auth.view,
    );

    use_effect_with_deps(
        |site| {
            set_document_language(*site);
            || ()
        },
        language.site,
    );

    html! {
        <ContextProvider<UiContext> context={ctx}>
            <Landing />
            <SignInModal />
            <SignUpModal />
            <OtpModal />
            <PopupHost />
            <WakePopup />
            <PlantLoader />
            <Chatbot />
        </ContextProvider<UiContext>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("Smart Kisan starting");
    yew::Renderer::<App>::new().render();
}
