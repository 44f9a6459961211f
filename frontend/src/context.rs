use yew::prelude::*;

use crate::auth::flow::AuthState;
use crate::components::notification::Notifier;
use crate::i18n::{Language, LanguageState};

/// Shared UI state, built once by `App` and handed down through a
/// `ContextProvider`. Nothing in the crate keeps page state in globals.
#[derive(Clone, PartialEq)]
pub struct UiContext {
    pub auth: UseReducerHandle<AuthState>,
    pub language: UseReducerHandle<LanguageState>,
    pub notifier: Notifier,
}

impl UiContext {
    pub fn site_language(&self) -> Language {
        self.language.site
    }

    pub fn message_language(&self) -> Language {
        self.language.message_language()
    }

    pub fn is_signed_in(&self) -> bool {
        self.auth.session.is_some()
    }
}
