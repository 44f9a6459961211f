use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, HtmlInputElement};
use yew::prelude::*;

use super::flow::{
    AuthAction, AuthView, SendOtpRequest, StatusResponse, VerifyOutcome, VerifyRequest, MSG_NETWORK,
    MSG_OTP_EXPIRED, MSG_OTP_INCOMPLETE, MSG_OTP_INVALID, MSG_OTP_RESENT, MSG_REGISTERED,
    MSG_RESEND_FAILED, MSG_RESEND_NETWORK, MSG_SESSION_EXPIRED,
};
use super::otp::{OtpEntry, Resend, ResendAction, ResendTimer, OTP_LEN};
use super::session::{save_session, PendingSignup, Session};
use crate::components::notification::Notifier;
use crate::config;
use crate::context::UiContext;
use crate::i18n::tr;
use crate::utils::api::{Api, ApiError};

async fn verify_otp(
    pending: &PendingSignup,
    otp: &str,
    notifier: &Notifier,
) -> Result<VerifyOutcome, ApiError> {
    let response = Api::post("/auth/verify")
        .json(&VerifyRequest {
            name: &pending.name,
            email: &pending.email,
            password: &pending.password,
            otp,
        })?
        .wake_notice(notifier)
        .send()
        .await?;
    let body: StatusResponse = response.json().await?;
    Ok(VerifyOutcome::from_status(&body.status))
}

/// Resend only cares whether the backend accepted the request.
async fn resend_otp(email: &str, notifier: &Notifier) -> Result<bool, ApiError> {
    let response = Api::post("/auth/send-otp")
        .json(&SendOtpRequest { email })?
        .wake_notice(notifier)
        .send()
        .await?;
    Ok(response.ok())
}

fn focus(cells: &[NodeRef], idx: usize) {
    if let Some(input) = cells.get(idx).and_then(|r| r.cast::<HtmlInputElement>()) {
        let _ = input.focus();
    }
}

#[function_component]
pub fn OtpModal() -> Html {
    let ctx = use_context::<UiContext>().expect("UiContext missing");
    let entry = use_state(OtpEntry::default);
    let shaking = use_state(|| false);
    let busy = use_state(|| false);
    let resend = use_reducer(ResendTimer::default);
    let ticker = use_mut_ref(|| None::<Interval>);
    let cells = use_state(|| (0..OTP_LEN).map(|_| NodeRef::default()).collect::<Vec<_>>());
    let open = ctx.auth.view == AuthView::Otp;

    let start_cooldown: Rc<dyn Fn()> = {
        let resend = resend.clone();
        let ticker = ticker.clone();
        Rc::new(move || {
            resend.dispatch(ResendAction::Start(config::OTP_RESEND_COOLDOWN_SECS));
            let tick = resend.clone();
            // replacing the handle drops (and clears) the previous interval
            *ticker.borrow_mut() = Some(Interval::new(1_000, move || {
                tick.dispatch(ResendAction::Tick)
            }));
        })
    };

    // fresh cells and a new cooldown every time the view opens
    {
        let entry = entry.clone();
        let cells = cells.clone();
        let ticker = ticker.clone();
        let start_cooldown = start_cooldown.clone();
        use_effect_with_deps(
            move |open| {
                if *open {
                    entry.set(OtpEntry::default());
                    start_cooldown();
                    focus(&cells, 0);
                }
                move || stop(&ticker)
            },
            open,
        );
    }

    {
        let ticker = ticker.clone();
        use_effect_with_deps(
            move |state| {
                if *state == Resend::Ready {
                    stop(&ticker);
                }
                || ()
            },
            resend.state.clone(),
        );
    }

    let onsubmit = {
        let ctx = ctx.clone();
        let entry = entry.clone();
        let shaking = shaking.clone();
        let busy = busy.clone();
        let cells = cells.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            let Some(pending) = ctx.auth.pending.clone() else {
                ctx.notifier.warn(MSG_SESSION_EXPIRED);
                return;
            };
            if !entry.is_complete() {
                ctx.notifier.warn(MSG_OTP_INCOMPLETE);
                return;
            }
            let code = entry.code();
            busy.set(true);

            let ctx = ctx.clone();
            let entry = entry.clone();
            let shaking = shaking.clone();
            let busy = busy.clone();
            let cells = cells.clone();
            spawn_local(async move {
                let outcome = verify_otp(&pending, &code, &ctx.notifier).await;
                busy.set(false);
                match outcome {
                    Ok(VerifyOutcome::Registered) => {
                        let session = Session {
                            name: pending.name.clone(),
                            email: pending.email.clone(),
                        };
                        log::info!("Registered {}", session.email);
                        save_session(&session);
                        ctx.auth.dispatch(AuthAction::Registered(session));
                        ctx.notifier.success(MSG_REGISTERED);
                    }
                    Ok(VerifyOutcome::Expired) => {
                        ctx.auth.dispatch(AuthAction::OtpExpired);
                        ctx.notifier.warn(MSG_OTP_EXPIRED);
                    }
                    Ok(VerifyOutcome::Rejected) => {
                        shaking.set(true);
                        ctx.notifier.error(MSG_OTP_INVALID);
                        Timeout::new(config::OTP_SHAKE_MS, move || {
                            shaking.set(false);
                            entry.set(OtpEntry::default());
                            focus(&cells, 0);
                        })
                        .forget();
                    }
                    Err(e) => {
                        log::error!("OTP verification error: {}", e);
                        ctx.notifier.warn(MSG_NETWORK);
                    }
                }
            });
        })
    };

    let on_resend = {
        let ctx = ctx.clone();
        let resend = resend.clone();
        let start_cooldown = start_cooldown.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let Some(pending) = ctx.auth.pending.clone() else {
                ctx.notifier.warn(MSG_SESSION_EXPIRED);
                return;
            };
            resend.dispatch(ResendAction::Sending);
            let notifier = ctx.notifier.clone();
            let resend = resend.clone();
            let start_cooldown = start_cooldown.clone();
            spawn_local(async move {
                match resend_otp(&pending.email, &notifier).await {
                    Ok(true) => {
                        notifier.success(MSG_OTP_RESENT);
                        start_cooldown();
                    }
                    Ok(false) => resend.dispatch(ResendAction::Failed(MSG_RESEND_FAILED)),
                    Err(e) => {
                        log::error!("Resend error: {}", e);
                        resend.dispatch(ResendAction::Failed(MSG_RESEND_NETWORK));
                    }
                }
            });
        })
    };

    if !open {
        return html! {};
    }

    let close = {
        let auth = ctx.auth.clone();
        Callback::from(move |_: MouseEvent| auth.dispatch(AuthAction::Close))
    };

    let inputs = cells
        .iter()
        .enumerate()
        .map(|(idx, node)| {
            let oninput = {
                let entry = entry.clone();
                let cells = cells.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    let mut next = (*entry).clone();
                    let focus_to = next.input(idx, &input.value());
                    input.set_value(next.cell(idx));
                    entry.set(next);
                    if let Some(to) = focus_to {
                        focus(&cells, to);
                    }
                })
            };
            let onkeydown = {
                let entry = entry.clone();
                let cells = cells.clone();
                Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
                    "Enter" => {
                        e.prevent_default();
                        e.stop_propagation();
                    }
                    "Backspace" => {
                        if let Some(to) = entry.backspace_target(idx) {
                            focus(&cells, to);
                        }
                    }
                    _ => {}
                })
            };
            let onpaste = {
                let entry = entry.clone();
                Callback::from(move |e: Event| {
                    e.prevent_default();
                    let pasted = e
                        .dyn_ref::<ClipboardEvent>()
                        .and_then(|c| c.clipboard_data())
                        .and_then(|data| data.get_data("text").ok());
                    if let Some(text) = pasted {
                        let mut next = (*entry).clone();
                        next.paste(&text);
                        entry.set(next);
                    }
                })
            };
            html! {
                <input
                    ref={node.clone()}
                    class={classes!("otp-cell", shaking.then_some("shake"))}
                    type="text"
                    inputmode="numeric"
                    maxlength="1"
                    value={entry.cell(idx).to_string()}
                    {oninput}
                    {onkeydown}
                    {onpaste}
                />
            }
        })
        .collect::<Html>();

    html! {
        <div id="otpModal" class="modal otp-modal" onclick={close.clone()}>
            <div class="modal-box" onclick={|e: MouseEvent| e.stop_propagation()}>
                <button type="button" id="closeOtpModal" class="close-btn" onclick={close}>{"×"}</button>
                <h2>{"Verify your email"}</h2>
                <p class="otp-hint">
                    {"Enter the 6-digit code sent to "}
                    <strong>{ ctx.auth.pending.as_ref().map(|p| p.email.clone()).unwrap_or_default() }</strong>
                </p>
                <form id="otpForm" {onsubmit}>
                    <div id="otpInputs" class="otp-inputs">{ inputs }</div>
                    <button type="submit" id="verifyBtn" disabled={!entry.is_complete() || *busy}>
                        { if *busy { "Verifying..." } else { "Verify" } }
                    </button>
                </form>
                <div class="otp-resend">
                    if let Some(label) = resend.state.label() {
                        <span id="timerText">{ tr(ctx.message_language(), &label).to_string() }</span>
                    }
                    if resend.state.can_resend() {
                        <button type="button" id="resendBtn" onclick={on_resend}>{"Resend OTP"}</button>
                    }
                </div>
            </div>
        </div>
    }
}

fn stop(ticker: &Rc<RefCell<Option<Interval>>>) {
    ticker.borrow_mut().take();
}
