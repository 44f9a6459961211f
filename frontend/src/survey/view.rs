use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::prediction::{
    request_prediction, Prediction, PredictionError, PredictionRequest, Submissions, MONTHS,
};
use super::results::{ErrorCard, ResultCard};
use super::wizard::{step_fields, Direction, Field, NextOutcome, SurveyWizard, RESULT_STEP};
use crate::auth::flow::AuthAction;
use crate::context::UiContext;
use crate::i18n::{tr, Language};

const SOIL_TYPES: [&str; 7] = ["Alluvial", "Black", "Red", "Laterite", "Sandy", "Loamy", "Clayey"];

/// What the result step currently shows.
#[derive(Clone, Debug, PartialEq)]
enum Outcome {
    Pending,
    Ready(Prediction),
    Failed(String),
}

fn step_title(step: u8) -> &'static str {
    match step {
        1 => "Where is your farm located?",
        2 => "When will you sow?",
        3 => "Soil Information",
        4 => "Soil Nutrient Levels",
        _ => "Land Details",
    }
}

fn capitalised(month: &str) -> String {
    let mut chars = month.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

fn field_control(field: Field, value: &str, lang: Language, on_change: Callback<(Field, String)>) -> Html {
    let label = html! { <label for={field.id()}>{ tr(lang, field.label()) }</label> };
    match field {
        Field::SowingMonth | Field::SoilType => {
            let onchange = Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                on_change.emit((field, select.value()));
            });
            let options: Vec<(String, String)> = if field == Field::SowingMonth {
                MONTHS.iter().map(|m| (m.to_string(), capitalised(m))).collect()
            } else {
                SOIL_TYPES.iter().map(|s| (s.to_string(), s.to_string())).collect()
            };
            html! {
                <div class="survey-field">
                    { label }
                    <select id={field.id()} {onchange}>
                        <option value="" selected={value.is_empty()}>{"Select"}</option>
                        { for options.into_iter().map(|(v, text)| html! {
                            <option value={v.clone()} selected={v == value}>{ text }</option>
                        }) }
                    </select>
                </div>
            }
        }
        _ => {
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_change.emit((field, input.value()));
            });
            let (kind, step) = match field {
                Field::State | Field::District => ("text", None),
                Field::Ph | Field::LandSize => ("number", Some("0.1")),
                _ => ("number", Some("1")),
            };
            html! {
                <div class="survey-field">
                    { label }
                    <input id={field.id()} type={kind} step={step} value={value.to_string()} {oninput} />
                </div>
            }
        }
    }
}

#[function_component]
pub fn Survey() -> Html {
    let ctx = use_context::<UiContext>().expect("UiContext missing");
    let wizard = use_state(SurveyWizard::default);
    let outcome = use_state(|| Outcome::Pending);
    let submissions = use_mut_ref(Submissions::default);
    let lang = ctx.site_language();

    let on_change = {
        let wizard = wizard.clone();
        Callback::from(move |(field, value): (Field, String)| {
            let mut next = (*wizard).clone();
            next.form.set(field, value);
            wizard.set(next);
        })
    };

    let submit = {
        let ctx = ctx.clone();
        let outcome = outcome.clone();
        let submissions = submissions.clone();
        move |wizard: &SurveyWizard| {
            let ticket = submissions.borrow_mut().begin();
            ctx.notifier.show_loader();
            outcome.set(Outcome::Pending);
            let month = js_sys::Date::new_0().get_month();
            let request = match PredictionRequest::from_form(&wizard.form, month) {
                Ok(request) => request,
                Err(e) => {
                    ctx.notifier.hide_loader();
                    match e {
                        PredictionError::OutOfWindow => ctx.notifier.warn(e.to_string()),
                        _ => ctx.notifier.error(e.to_string()),
                    }
                    outcome.set(Outcome::Failed(e.detail()));
                    return;
                }
            };
            log::info!("Requesting prediction for {}, {}", request.district, request.state);
            let ctx = ctx.clone();
            let outcome = outcome.clone();
            let submissions = submissions.clone();
            spawn_local(async move {
                let result = request_prediction(&request, &ctx.notifier).await;
                if !submissions.borrow().is_current(ticket) {
                    log::debug!("Dropping prediction #{} superseded by a newer submission", ticket);
                    return;
                }
                ctx.notifier.hide_loader();
                match result {
                    Ok(prediction) => outcome.set(Outcome::Ready(prediction)),
                    Err(e) => {
                        log::error!("Prediction failed: {:?}", e);
                        ctx.notifier.error(e.to_string());
                        outcome.set(Outcome::Failed(e.detail()));
                    }
                }
            });
        }
    };

    let on_next = {
        let ctx = ctx.clone();
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            match next.next(ctx.is_signed_in()) {
                NextOutcome::NeedsSignIn => ctx.auth.dispatch(AuthAction::OpenSignIn),
                NextOutcome::Invalid => {}
                NextOutcome::Advanced => wizard.set(next),
                NextOutcome::Submit => {
                    submit(&next);
                    wizard.set(next);
                }
            }
        })
    };

    let on_back = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            next.back();
            wizard.set(next);
        })
    };

    let step = wizard.step;
    let valid = wizard.current_valid();
    let card_class = classes!(
        "survey-card",
        "active",
        (wizard.direction == Direction::Back).then_some("slide-back")
    );

    let body = if step == RESULT_STEP {
        match &*outcome {
            Outcome::Ready(prediction) => html! {
                <ResultCard prediction={prediction.clone()} lang={ctx.message_language()} />
            },
            Outcome::Failed(detail) => html! {
                <ErrorCard detail={detail.clone()} lang={ctx.message_language()} />
            },
            Outcome::Pending => html! {
                <p class="result-pending">{"🌱 ..."}</p>
            },
        }
    } else {
        html! {
            <>
                <h3>{ tr(lang, step_title(step)) }</h3>
                { for step_fields(step).iter().map(|field| {
                    field_control(*field, wizard.form.get(*field), lang, on_change.clone())
                }) }
            </>
        }
    };

    html! {
        <section id="survey" class="survey-section">
            <h2>{ tr(lang, "Weather-Based Crop Advisory") }</h2>
            <p class="survey-subtitle">
                { tr(lang, "Answer a few simple questions. Smart Kisan will predict the best crops.") }
            </p>
            <div class="survey-progress">
                <div class="survey-progress-bar" style={format!("width: {}%", wizard.progress())}></div>
            </div>
            <div class={classes!("survey-container", (step == RESULT_STEP).then_some("result"))}>
                <div class={card_class} data-step={step.to_string()}>
                    { body }
                    <div class="survey-actions">
                        if step > 1 {
                            <button type="button" class="back-btn" onclick={on_back}>{"Back"}</button>
                        }
                        if step < RESULT_STEP - 1 {
                            <button type="button" class="next-btn" disabled={!valid} onclick={on_next}>{"Next"}</button>
                        } else if step == RESULT_STEP - 1 {
                            <button type="button" id="submitSurvey" disabled={!valid} onclick={on_next}>{"Submit"}</button>
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}
