use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::flow::{
    validate_sign_in, validate_signup, AuthAction, AuthView, LoginRequest, LoginResponse,
    SendOtpOutcome, SendOtpRequest, SignInOutcome, StatusResponse, MSG_ACCOUNT_EXISTS,
    MSG_NETWORK, MSG_NOT_FOUND, MSG_OTP_SEND_FAILED, MSG_WRONG_PASSWORD,
};
use super::session::{clear_session, save_session, PendingSignup};
use crate::components::notification::Notifier;
use crate::context::UiContext;
use crate::i18n::tr;
use crate::utils::api::{Api, ApiError};

async fn request_otp(email: &str, notifier: &Notifier) -> Result<SendOtpOutcome, ApiError> {
    let response = Api::post("/auth/send-otp")
        .json(&SendOtpRequest { email })?
        .wake_notice(notifier)
        .send()
        .await?;
    let body: StatusResponse = response.json().await?;
    Ok(SendOtpOutcome::from_status(&body.status))
}

async fn sign_in(email: &str, password: &str, notifier: &Notifier) -> Result<SignInOutcome, ApiError> {
    let response = Api::post("/auth/login")
        .json(&LoginRequest { email, password })?
        .wake_notice(notifier)
        .send()
        .await?;
    let body: LoginResponse = response.json().await?;
    Ok(SignInOutcome::from_response(body, email))
}

fn bind(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

fn dispatch_on_click(ctx: &UiContext, action: fn() -> AuthAction) -> Callback<MouseEvent> {
    let auth = ctx.auth.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        auth.dispatch(action());
    })
}

#[function_component]
pub fn NavAuthButton() -> Html {
    let ctx = use_context::<UiContext>().expect("UiContext missing");
    let signed_in = ctx.is_signed_in();
    let lang = ctx.site_language();

    let onclick = {
        let auth = ctx.auth.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            // no confirmation for logout
            if signed_in {
                clear_session();
                log::info!("Signed out");
            }
            auth.dispatch(AuthAction::NavButton);
        })
    };

    html! {
        <button
            id="signInNavBtn"
            class={if signed_in { "logout-btn" } else { "signin-btn" }}
            {onclick}
        >
            if signed_in {
                <>
                    {"Logout"}
                    <svg>
                        <rect x="1.5" y="1.5" width="calc(100% - 3px)" height="calc(100% - 3px)" rx="10" ry="10"/>
                    </svg>
                </>
            } else {
                { tr(lang, "Sign In") }
            }
        </button>
    }
}

#[function_component]
pub fn SignInModal() -> Html {
    let ctx = use_context::<UiContext>().expect("UiContext missing");
    let email = use_state(String::new);
    let password = use_state(String::new);
    let busy = use_state(|| false);
    let lang = ctx.site_language();

    let onsubmit = {
        let ctx = ctx.clone();
        let email = email.clone();
        let password = password.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            let email = email.trim().to_string();
            let password = password.trim().to_string();
            if let Err(err) = validate_sign_in(&email, &password) {
                ctx.notifier.error(err.to_string());
                return;
            }
            busy.set(true);
            let ctx = ctx.clone();
            let busy = busy.clone();
            spawn_local(async move {
                let outcome = sign_in(&email, &password, &ctx.notifier).await;
                busy.set(false);
                match outcome {
                    Ok(SignInOutcome::Ok(session)) => {
                        log::info!("Signed in as {}", session.email);
                        save_session(&session);
                        ctx.auth.dispatch(AuthAction::SignedIn(session));
                    }
                    Ok(SignInOutcome::WrongPassword) => ctx.notifier.error(MSG_WRONG_PASSWORD),
                    Ok(SignInOutcome::NotFound) => ctx.notifier.error(MSG_NOT_FOUND),
                    Ok(SignInOutcome::Failed) => {
                        log::warn!("Login returned an unexpected status");
                        ctx.notifier.error(MSG_NETWORK);
                    }
                    Err(e) => {
                        log::error!("Login error: {}", e);
                        ctx.notifier.error(MSG_NETWORK);
                    }
                }
            });
        })
    };

    if ctx.auth.view != AuthView::SignIn {
        return html! {};
    }

    let close = dispatch_on_click(&ctx, || AuthAction::Close);
    let to_signup = dispatch_on_click(&ctx, || AuthAction::OpenSignUp);

    html! {
        <div id="signinModal" class="modal" onclick={close.clone()}>
            <div class="modal-box" onclick={|e: MouseEvent| e.stop_propagation()}>
                <button type="button" id="closeModal" class="close-btn" onclick={close}>{"×"}</button>
                <h2>{ tr(lang, "Sign In") }</h2>
                <form id="signinForm" {onsubmit}>
                    <input
                        id="loginEmail"
                        type="email"
                        placeholder="Email"
                        value={(*email).clone()}
                        oninput={bind(&email)}
                    />
                    <input
                        id="loginPassword"
                        type="password"
                        placeholder="Password"
                        value={(*password).clone()}
                        oninput={bind(&password)}
                    />
                    <button type="submit" disabled={*busy}>{ tr(lang, "Sign In") }</button>
                </form>
                <div class="auth-redirect">
                    {"Don't have an account? "}
                    <a href="#" id="goSignup" onclick={to_signup}>{"Sign up"}</a>
                </div>
            </div>
        </div>
    }
}

#[function_component]
pub fn SignUpModal() -> Html {
    let ctx = use_context::<UiContext>().expect("UiContext missing");
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let busy = use_state(|| false);

    let onsubmit = {
        let ctx = ctx.clone();
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            let pending = PendingSignup {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                password: password.trim().to_string(),
            };
            if let Err(err) = validate_signup(&pending.name, &pending.email, &pending.password) {
                ctx.notifier.error(err.to_string());
                return;
            }
            busy.set(true);
            let ctx = ctx.clone();
            let busy = busy.clone();
            spawn_local(async move {
                let outcome = request_otp(&pending.email, &ctx.notifier).await;
                busy.set(false);
                match outcome {
                    Ok(SendOtpOutcome::Exists) => {
                        ctx.notifier.error(MSG_ACCOUNT_EXISTS);
                        ctx.auth.dispatch(AuthAction::AccountExists);
                    }
                    Ok(SendOtpOutcome::Sent) => {
                        log::info!("OTP sent to {}", pending.email);
                        ctx.auth.dispatch(AuthAction::OtpSent(pending));
                    }
                    Ok(SendOtpOutcome::Failed) => ctx.notifier.error(MSG_OTP_SEND_FAILED),
                    Err(e) => {
                        log::error!("send-otp error: {}", e);
                        ctx.notifier.error(MSG_OTP_SEND_FAILED);
                    }
                }
            });
        })
    };

    if ctx.auth.view != AuthView::SignUp {
        return html! {};
    }

    let close = dispatch_on_click(&ctx, || AuthAction::Close);
    let to_signin = dispatch_on_click(&ctx, || AuthAction::OpenSignIn);

    html! {
        <div id="signupModal" class="modal" onclick={close.clone()}>
            <div class="modal-box" onclick={|e: MouseEvent| e.stop_propagation()}>
                <button type="button" id="closeSignup" class="close-btn" onclick={close}>{"×"}</button>
                <h2>{"Create Account"}</h2>
                <form id="signupForm" {onsubmit}>
                    <input
                        id="signupName"
                        type="text"
                        placeholder="Full name"
                        value={(*name).clone()}
                        oninput={bind(&name)}
                    />
                    <input
                        id="signupEmail"
                        type="email"
                        placeholder="Email"
                        value={(*email).clone()}
                        oninput={bind(&email)}
                    />
                    <input
                        id="signupPassword"
                        type="password"
                        placeholder="Password (min 6 characters)"
                        value={(*password).clone()}
                        oninput={bind(&password)}
                    />
                    <button type="submit" disabled={*busy}>
                        { if *busy { "Sending OTP..." } else { "Sign Up" } }
                    </button>
                </form>
                <div class="auth-redirect">
                    {"Already have an account? "}
                    <a href="#" id="swapToSignin" onclick={to_signin}>{ tr(ctx.site_language(), "Sign In") }</a>
                </div>
            </div>
        </div>
    }
}
