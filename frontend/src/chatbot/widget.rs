use web_sys::{Element, HtmlInputElement};
use yew::prelude::*;

use super::conversation::{ChatAction, ChatEntry, ChatState, Cue, Script, BOT_NAME};
use super::faq;
use super::sequencer::Sequencer;
use crate::context::UiContext;
use crate::i18n::{Language, LanguageAction};
use crate::utils::dom::Listener;

#[function_component]
pub fn Chatbot() -> Html {
    let ctx = use_context::<UiContext>().expect("UiContext missing");
    let chat = use_reducer(ChatState::default);
    let input = use_state(String::new);
    let messages_ref = use_node_ref();
    // set by clicks on the panel or toggle before they bubble up to document
    let inside = use_mut_ref(|| false);

    let sequencer = {
        let chat = chat.clone();
        let notifier = ctx.notifier.clone();
        let language = ctx.language.clone();
        use_memo(
            move |_| {
                Sequencer::new(Callback::from(move |cue: Cue| match cue {
                    Cue::Post(entry) => chat.dispatch(ChatAction::Post(entry)),
                    Cue::ShowLoader => notifier.show_loader(),
                    Cue::HideLoader => notifier.hide_loader(),
                    Cue::ApplySiteLanguage(lang) => {
                        language.dispatch(LanguageAction::ApplySite(lang))
                    }
                }))
            },
            (),
        )
    };

    {
        let open = chat.open;
        let chat = chat.clone();
        let sequencer = sequencer.clone();
        let inside = inside.clone();
        use_effect_with_deps(
            move |open| {
                let listener = if *open {
                    Listener::document("click", move |_| {
                        if inside.replace(false) {
                            return;
                        }
                        sequencer.flush();
                        chat.dispatch(ChatAction::Close);
                    })
                } else {
                    None
                };
                move || drop(listener)
            },
            open,
        );
    }

    {
        let messages_ref = messages_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(list) = messages_ref.cast::<Element>() {
                    list.set_scroll_top(list.scroll_height());
                }
                || ()
            },
            (chat.entries.len(), chat.open),
        );
    }

    let mark_inside = {
        let inside = inside.clone();
        Callback::from(move |_: MouseEvent| *inside.borrow_mut() = true)
    };

    let on_toggle = {
        let chat = chat.clone();
        let sequencer = sequencer.clone();
        let inside = inside.clone();
        Callback::from(move |_: MouseEvent| {
            *inside.borrow_mut() = true;
            if chat.open {
                sequencer.flush();
            }
            let first = chat.first_open();
            chat.dispatch(ChatAction::Toggle);
            if first {
                sequencer.play(Script::greeting());
            }
        })
    };

    let pick_language = {
        let chat = chat.clone();
        let sequencer = sequencer.clone();
        let language = ctx.language.clone();
        move |lang: Language| {
            let chat = chat.clone();
            let sequencer = sequencer.clone();
            let language = language.clone();
            Callback::from(move |_: MouseEvent| {
                if chat.language.is_some() {
                    return;
                }
                log::info!("Chat language picked: {}", lang.html_lang());
                chat.dispatch(ChatAction::PickLanguage(lang));
                language.dispatch(LanguageAction::PickChat(lang));
                sequencer.play(Script::language_picked(lang));
            })
        }
    };

    let answer_site = {
        let chat = chat.clone();
        let sequencer = sequencer.clone();
        move |yes: bool| {
            let chat = chat.clone();
            let sequencer = sequencer.clone();
            Callback::from(move |_: MouseEvent| {
                if chat.site_answered {
                    return;
                }
                chat.dispatch(ChatAction::AnswerSite);
                sequencer.play(if yes { Script::site_yes() } else { Script::site_no() });
            })
        }
    };

    let ask = {
        let sequencer = sequencer.clone();
        move |lang: Language, index: usize| {
            let sequencer = sequencer.clone();
            Callback::from(move |_: MouseEvent| sequencer.play(Script::faq(lang, index)))
        }
    };

    let send = {
        let chat = chat.clone();
        let input = input.clone();
        let sequencer = sequencer.clone();
        move || {
            let Some(lang) = chat.accepts_text(&input) else {
                return;
            };
            sequencer.play(Script::free_text(lang, input.trim()));
            input.set(String::new());
        }
    };

    let on_send = {
        let send = send.clone();
        Callback::from(move |_: MouseEvent| send())
    };

    let on_keydown = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            e.prevent_default();
            send();
        }
    });

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let el: HtmlInputElement = e.target_unchecked_into();
            input.set(el.value());
        })
    };

    let entry_html = |entry: &ChatEntry| -> Html {
        match entry {
            ChatEntry::Bot(text) => html! { <div class="ai-msg ai-bot">{ text.clone() }</div> },
            ChatEntry::User(text) => html! { <div class="ai-msg ai-user">{ text.clone() }</div> },
            ChatEntry::LanguageChoice => html! {
                <div class="ai-choices">
                    <button class="ai-choice" onclick={pick_language(Language::English)}>{"English"}</button>
                    <button class="ai-choice" onclick={pick_language(Language::Hindi)}>{"हिंदी"}</button>
                </div>
            },
            ChatEntry::SiteChoice => html! {
                <div class="ai-choices">
                    <button class="ai-choice" onclick={answer_site(true)}>{"✅ हाँ"}</button>
                    <button class="ai-choice" onclick={answer_site(false)}>{"❌ नहीं"}</button>
                </div>
            },
            ChatEntry::Questions(lang) => html! {
                <div class="ai-choices">
                    { for faq::entries(*lang).iter().enumerate().map(|(i, item)| html! {
                        <button class="ai-choice" onclick={ask(*lang, i)}>{ item.question }</button>
                    }) }
                </div>
            },
        }
    };

    html! {
        <>
            <button id="aiToggle" class="ai-toggle" title={BOT_NAME} onclick={on_toggle}>{"🌱"}</button>
            <div
                id="aiBot"
                class={classes!("ai-bot", chat.open.then_some("open"))}
                style={if chat.open { "display: flex" } else { "display: none" }}
                onclick={mark_inside}
            >
                <div class="ai-header">{ BOT_NAME }</div>
                <div id="aiMessages" class="ai-messages" ref={messages_ref}>
                    { for chat.entries.iter().map(entry_html) }
                </div>
                <div class="ai-input-row">
                    <input
                        id="aiInput"
                        type="text"
                        placeholder="Type your question..."
                        value={(*input).clone()}
                        oninput={on_input}
                        onkeydown={on_keydown}
                    />
                    <button id="aiSend" onclick={on_send}>{"➤"}</button>
                </div>
            </div>
        </>
    }
}
