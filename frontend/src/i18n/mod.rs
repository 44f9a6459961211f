//! Site localisation.
//!
//! Components render every visible literal through [`tr`], so switching the
//! site language is a state change followed by a normal re-render. Lookups are
//! exact-match on the English phrase, which makes them idempotent: translating
//! an already translated string returns it unchanged.

mod dictionary;

use std::collections::HashMap;
use std::rc::Rc;

use once_cell::sync::Lazy;
use yew::Reducible;

static HINDI: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| dictionary::HINDI.iter().copied().collect());

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    /// Value for the document's `lang` attribute.
    pub fn html_lang(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
        }
    }
}

/// Localise `phrase`. Unknown phrases come back untouched.
pub fn tr(lang: Language, phrase: &str) -> &str {
    match lang {
        Language::English => phrase,
        Language::Hindi => HINDI.get(phrase).copied().unwrap_or(phrase),
    }
}

/// Like [`tr`] for names that arrive from the backend in lower case
/// ("wheat", "maize").
pub fn tr_name(lang: Language, name: &str) -> String {
    let direct = tr(lang, name);
    if direct != name {
        return direct.to_string();
    }
    let mut chars = name.chars();
    let capitalised = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => return String::new(),
    };
    match lang {
        Language::Hindi => HINDI
            .get(capitalised.as_str())
            .map(|hindi| hindi.to_string())
            .unwrap_or_else(|| name.to_string()),
        Language::English => name.to_string(),
    }
}

/// Which languages are in effect. The chat language drives popups and the
/// dynamically rendered result cards; the site language drives static page
/// text and only changes when the visitor confirms it in the chatbot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LanguageState {
    pub chat: Option<Language>,
    pub site: Language,
}

impl LanguageState {
    pub fn message_language(&self) -> Language {
        match (self.chat, self.site) {
            (Some(Language::Hindi), _) | (_, Language::Hindi) => Language::Hindi,
            _ => Language::English,
        }
    }
}

pub enum LanguageAction {
    /// First pick wins for the lifetime of the page.
    PickChat(Language),
    ApplySite(Language),
}

impl Reducible for LanguageState {
    type Action = LanguageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LanguageAction::PickChat(lang) => {
                if self.chat.is_some() {
                    return self;
                }
                Rc::new(Self {
                    chat: Some(lang),
                    ..(*self).clone()
                })
            }
            LanguageAction::ApplySite(lang) => {
                if self.site == lang {
                    return self;
                }
                log::info!("Site language set to {}", lang.html_lang());
                Rc::new(Self {
                    site: lang,
                    ..(*self).clone()
                })
            }
        }
    }
}

/// Mirror the site language onto `<html lang>`.
pub fn set_document_language(lang: Language) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        if let Err(e) = root.set_attribute("lang", lang.html_lang()) {
            log::warn!("Could not set document language: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_dictionary_key_translates_to_hindi() {
        for (english, hindi) in dictionary::HINDI {
            assert_eq!(tr(Language::Hindi, english), *hindi, "key {english}");
            assert_eq!(tr(Language::English, english), *english);
        }
    }

    #[test]
    fn auth_popups_have_hindi_text() {
        use crate::auth::flow::*;

        let messages = [
            SignInError::Both.to_string(),
            SignInError::Email.to_string(),
            SignInError::Password.to_string(),
            SignupError::Name.to_string(),
            MSG_ACCOUNT_EXISTS.to_string(),
            MSG_OTP_INCOMPLETE.to_string(),
            MSG_SESSION_EXPIRED.to_string(),
            MSG_OTP_RESENT.to_string(),
            MSG_RESEND_FAILED.to_string(),
            MSG_RESEND_NETWORK.to_string(),
        ];
        for message in &messages {
            assert_ne!(tr(Language::Hindi, message), message.as_str(), "{message}");
        }
    }

    #[test]
    fn unknown_text_is_left_alone() {
        assert_eq!(tr(Language::Hindi, "Bajra"), "Bajra");
        assert_eq!(tr(Language::Hindi, ""), "");
    }

    #[test]
    fn lookup_is_idempotent() {
        let once = tr(Language::Hindi, "Sign In");
        assert_eq!(tr(Language::Hindi, once), once);
        let once = tr(Language::Hindi, "Wheat");
        assert_eq!(tr(Language::Hindi, once), once);
    }

    #[test]
    fn keys_are_unique() {
        assert_eq!(HINDI.len(), dictionary::HINDI.len());
    }

    #[test]
    fn backend_names_match_on_capitalised_form() {
        assert_eq!(tr_name(Language::Hindi, "wheat"), "गेहूं");
        assert_eq!(tr_name(Language::Hindi, "Maize"), "मक्का");
        assert_eq!(tr_name(Language::Hindi, "kidneybeans"), "kidneybeans");
        assert_eq!(tr_name(Language::English, "wheat"), "wheat");
        assert_eq!(tr_name(Language::Hindi, ""), "");
    }

    #[test]
    fn chat_language_is_chosen_once() {
        let state = Rc::new(LanguageState::default());
        let state = state.reduce(LanguageAction::PickChat(Language::English));
        let state = state.reduce(LanguageAction::PickChat(Language::Hindi));
        assert_eq!(state.chat, Some(Language::English));
        assert_eq!(state.site, Language::English);
    }

    #[test]
    fn hindi_chat_localises_messages_without_touching_site() {
        let state = Rc::new(LanguageState::default());
        let state = state.reduce(LanguageAction::PickChat(Language::Hindi));
        assert_eq!(state.message_language(), Language::Hindi);
        assert_eq!(state.site, Language::English);

        let state = state.reduce(LanguageAction::ApplySite(Language::Hindi));
        assert_eq!(state.site, Language::Hindi);
    }
}
