use std::rc::Rc;

use yew::Reducible;

use super::faq;
use crate::i18n::Language;

pub const BOT_NAME: &str = "Kisan AI 🌱";

#[derive(Clone, Debug, PartialEq)]
pub enum ChatEntry {
    Bot(String),
    User(String),
    /// English / हिंदी buttons.
    LanguageChoice,
    /// Yes / no on switching the whole site to Hindi.
    SiteChoice,
    /// Quick question buttons for the given language.
    Questions(Language),
}

/// One thing a script does when its time comes.
#[derive(Clone, Debug, PartialEq)]
pub enum Cue {
    Post(ChatEntry),
    ShowLoader,
    HideLoader,
    ApplySiteLanguage(Language),
}

/// Cues with their offset in milliseconds from the start of the script,
/// in non-decreasing order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Script {
    pub steps: Vec<(u32, Cue)>,
}

impl Script {
    fn at(mut self, at_ms: u32, cue: Cue) -> Self {
        debug_assert!(self.steps.last().map_or(true, |(last, _)| *last <= at_ms));
        self.steps.push((at_ms, cue));
        self
    }

    fn bot(self, at_ms: u32, text: impl Into<String>) -> Self {
        self.at(at_ms, Cue::Post(ChatEntry::Bot(text.into())))
    }

    fn user(self, at_ms: u32, text: impl Into<String>) -> Self {
        self.at(at_ms, Cue::Post(ChatEntry::User(text.into())))
    }

    /// Instruction line followed by the question buttons.
    fn quick_questions(self, from_ms: u32, lang: Language) -> Self {
        self.bot(from_ms + 300, faq::instruction(lang))
            .at(from_ms + 900, Cue::Post(ChatEntry::Questions(lang)))
    }

    pub fn greeting() -> Self {
        Self::default()
            .bot(400, format!("Hello! I am {}.", BOT_NAME))
            .bot(1300, "Please choose your preferred language to start the conversation.")
            .bot(2400, "कृपया बातचीत शुरू करने के लिए अपनी भाषा चुनें।")
            .at(3600, Cue::Post(ChatEntry::LanguageChoice))
    }

    pub fn language_picked(lang: Language) -> Self {
        match lang {
            Language::Hindi => Self::default()
                .bot(400, "क्या आप पूरी वेबसाइट की भाषा हिंदी में बदलना चाहते हैं?")
                .at(1400, Cue::Post(ChatEntry::SiteChoice)),
            Language::English => Self::default().quick_questions(400, Language::English),
        }
    }

    pub fn site_yes() -> Self {
        Self::default()
            .at(0, Cue::ShowLoader)
            .at(1600, Cue::ApplySiteLanguage(Language::Hindi))
            .at(1600, Cue::HideLoader)
            .quick_questions(1600, Language::Hindi)
    }

    pub fn site_no() -> Self {
        Self::default().quick_questions(500, Language::Hindi)
    }

    pub fn faq(lang: Language, index: usize) -> Self {
        match faq::entries(lang).get(index) {
            Some(entry) => Self::default().user(0, entry.question).bot(500, entry.answer),
            None => Self::default(),
        }
    }

    pub fn free_text(lang: Language, message: &str) -> Self {
        Self::default()
            .user(0, message)
            .bot(600, faq::reply(lang, message))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub open: bool,
    /// Set the first time the panel opens; the greeting never repeats.
    pub greeted: bool,
    pub language: Option<Language>,
    pub site_answered: bool,
    pub entries: Vec<ChatEntry>,
}

impl ChatState {
    /// Whether toggling now would open the panel for the first time.
    pub fn first_open(&self) -> bool {
        !self.open && !self.greeted
    }

    /// Free text is only answered once a language is known.
    pub fn accepts_text(&self, text: &str) -> Option<Language> {
        self.language.filter(|_| !text.trim().is_empty())
    }
}

pub enum ChatAction {
    Toggle,
    Close,
    Post(ChatEntry),
    PickLanguage(Language),
    AnswerSite,
}

impl Reducible for ChatState {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ChatAction::Toggle => {
                next.open = !next.open;
                next.greeted |= next.open;
            }
            ChatAction::Close => {
                if !next.open {
                    return self;
                }
                next.open = false;
            }
            ChatAction::Post(entry) => next.entries.push(entry),
            ChatAction::PickLanguage(lang) => {
                if next.language.is_some() {
                    return self;
                }
                next.language = Some(lang);
            }
            ChatAction::AnswerSite => {
                if next.site_answered {
                    return self;
                }
                next.site_answered = true;
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posts(script: &Script) -> Vec<&ChatEntry> {
        script
            .steps
            .iter()
            .filter_map(|(_, cue)| match cue {
                Cue::Post(entry) => Some(entry),
                _ => None,
            })
            .collect()
    }

    fn reduce(state: ChatState, action: ChatAction) -> ChatState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn greeting_ends_with_language_buttons() {
        let script = Script::greeting();
        let times: Vec<u32> = script.steps.iter().map(|(at, _)| *at).collect();
        assert_eq!(times, vec![400, 1300, 2400, 3600]);
        assert_eq!(posts(&script)[0], &ChatEntry::Bot("Hello! I am Kisan AI 🌱.".into()));
        assert_eq!(posts(&script)[3], &ChatEntry::LanguageChoice);
    }

    #[test]
    fn hindi_asks_about_the_site_english_goes_to_questions() {
        let hindi = Script::language_picked(Language::Hindi);
        assert_eq!(hindi.steps.last(), Some(&(1400, Cue::Post(ChatEntry::SiteChoice))));

        let english = Script::language_picked(Language::English);
        assert_eq!(
            english.steps.last(),
            Some(&(1300, Cue::Post(ChatEntry::Questions(Language::English))))
        );
    }

    #[test]
    fn site_yes_switches_language_under_the_loader() {
        let cues: Vec<Cue> = Script::site_yes().steps.into_iter().map(|(_, c)| c).collect();
        let apply = cues
            .iter()
            .position(|c| *c == Cue::ApplySiteLanguage(Language::Hindi));
        let shown = cues.iter().position(|c| *c == Cue::ShowLoader);
        let hidden = cues.iter().position(|c| *c == Cue::HideLoader);
        assert!(shown < apply && apply < hidden);
        assert_eq!(
            cues.last(),
            Some(&Cue::Post(ChatEntry::Questions(Language::Hindi)))
        );

        let no = Script::site_no();
        assert!(no.steps.iter().all(|(_, c)| !matches!(c, Cue::ApplySiteLanguage(_))));
        assert_eq!(no.steps[0].0, 800);
    }

    #[test]
    fn free_text_echoes_then_answers() {
        let script = Script::free_text(Language::English, "what are rabi crops");
        assert_eq!(script.steps[0], (0, Cue::Post(ChatEntry::User("what are rabi crops".into()))));
        match &script.steps[1] {
            (600, Cue::Post(ChatEntry::Bot(answer))) => assert!(answer.starts_with("Rabi crops")),
            other => panic!("unexpected step {:?}", other),
        }
        assert!(Script::faq(Language::Hindi, 99).steps.is_empty());
    }

    #[test]
    fn greeting_happens_once_and_closing_keeps_history() {
        let state = ChatState::default();
        assert!(state.first_open());
        let state = reduce(state, ChatAction::Toggle);
        let state = reduce(state, ChatAction::Post(ChatEntry::Bot("hi".into())));
        let state = reduce(state, ChatAction::PickLanguage(Language::Hindi));
        let state = reduce(state, ChatAction::Close);
        assert!(!state.open);
        assert!(!state.first_open());
        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.language, Some(Language::Hindi));

        let state = reduce(state, ChatAction::PickLanguage(Language::English));
        assert_eq!(state.language, Some(Language::Hindi));
    }

    #[test]
    fn text_needs_a_language_and_content() {
        let mut state = ChatState::default();
        assert_eq!(state.accepts_text("kharif crops"), None);
        state.language = Some(Language::English);
        assert_eq!(state.accepts_text("   "), None);
        assert_eq!(state.accepts_text("kharif crops"), Some(Language::English));
    }
}
