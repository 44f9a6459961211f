use std::rc::Rc;

use yew::Reducible;

pub const OTP_LEN: usize = 6;

/// The six single-digit OTP cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OtpEntry {
    cells: [String; OTP_LEN],
}

impl OtpEntry {
    pub fn cell(&self, idx: usize) -> &str {
        self.cells.get(idx).map(String::as_str).unwrap_or("")
    }

    /// Store what was typed into cell `idx`, keeping only its last digit.
    /// Returns the cell that should take focus next.
    pub fn input(&mut self, idx: usize, raw: &str) -> Option<usize> {
        let cell = self.cells.get_mut(idx)?;
        *cell = raw
            .chars()
            .filter(char::is_ascii_digit)
            .last()
            .map(String::from)
            .unwrap_or_default();
        (!cell.is_empty() && idx + 1 < OTP_LEN).then_some(idx + 1)
    }

    /// Backspace in an empty cell moves focus to the previous one.
    pub fn backspace_target(&self, idx: usize) -> Option<usize> {
        (idx > 0 && self.cell(idx).is_empty()).then(|| idx - 1)
    }

    /// Spread pasted digits across the cells from the first one.
    pub fn paste(&mut self, text: &str) {
        for (cell, digit) in self
            .cells
            .iter_mut()
            .zip(text.chars().filter(char::is_ascii_digit))
        {
            *cell = digit.to_string();
        }
    }

    pub fn code(&self) -> String {
        self.cells.concat()
    }

    /// True iff all six cells hold a digit.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| c.len() == 1)
    }
}

/// Resend control state below the OTP cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resend {
    Counting(u32),
    Sending,
    Ready,
    Failed(&'static str),
}

impl Resend {
    pub fn can_resend(&self) -> bool {
        matches!(self, Resend::Ready | Resend::Failed(_))
    }

    /// Text shown in place of the resend button, if any.
    pub fn label(&self) -> Option<String> {
        match self {
            Resend::Counting(secs) => Some(format!("Resend in {}s", secs)),
            Resend::Sending => Some("Sending...".to_string()),
            Resend::Failed(msg) => Some((*msg).to_string()),
            Resend::Ready => None,
        }
    }
}

pub enum ResendAction {
    Start(u32),
    Tick,
    Sending,
    Failed(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResendTimer {
    pub state: Resend,
}

impl Default for ResendTimer {
    fn default() -> Self {
        Self {
            state: Resend::Ready,
        }
    }
}

impl Reducible for ResendTimer {
    type Action = ResendAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let state = match (action, &self.state) {
            (ResendAction::Start(secs), _) => Resend::Counting(secs),
            (ResendAction::Tick, Resend::Counting(secs)) if *secs <= 1 => Resend::Ready,
            (ResendAction::Tick, Resend::Counting(secs)) => Resend::Counting(secs - 1),
            (ResendAction::Tick, _) => return self,
            (ResendAction::Sending, _) => Resend::Sending,
            (ResendAction::Failed(msg), _) => Resend::Failed(msg),
        };
        Rc::new(Self { state })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(code: &str) -> OtpEntry {
        let mut entry = OtpEntry::default();
        for (idx, ch) in code.chars().enumerate() {
            entry.input(idx, &ch.to_string());
        }
        entry
    }

    #[test]
    fn verify_is_enabled_only_with_six_digits() {
        assert!(!typed("").is_complete());
        assert!(!typed("12345").is_complete());
        assert!(typed("123456").is_complete());
        assert!(!typed("12a456").is_complete());

        let mut entry = typed("123456");
        entry.input(3, "");
        assert!(!entry.is_complete());
        assert_eq!(entry.code(), "12356");
    }

    #[test]
    fn typing_advances_focus_and_drops_non_digits() {
        let mut entry = OtpEntry::default();
        assert_eq!(entry.input(0, "7"), Some(1));
        assert_eq!(entry.input(1, "x"), None);
        assert_eq!(entry.cell(1), "");
        assert_eq!(entry.input(1, "89"), Some(2));
        assert_eq!(entry.cell(1), "9");
        assert_eq!(entry.input(5, "1"), None);
        assert_eq!(entry.input(9, "1"), None);
    }

    #[test]
    fn backspace_walks_back_from_empty_cells() {
        let entry = typed("12");
        assert_eq!(entry.backspace_target(2), Some(1));
        assert_eq!(entry.backspace_target(1), None);
        assert_eq!(entry.backspace_target(0), None);
    }

    #[test]
    fn paste_fills_from_the_start() {
        let mut entry = OtpEntry::default();
        entry.paste("Your code: 482 913 (valid 10 min)");
        assert_eq!(entry.code(), "482913");
        assert!(entry.is_complete());

        let mut entry = OtpEntry::default();
        entry.paste("12");
        assert_eq!(entry.code(), "12");
    }

    #[test]
    fn resend_counts_down_to_ready() {
        let mut timer = Rc::new(ResendTimer::default());
        assert!(timer.state.can_resend());
        timer = timer.reduce(ResendAction::Start(3));
        assert_eq!(timer.state.label().as_deref(), Some("Resend in 3s"));
        timer = timer.reduce(ResendAction::Tick);
        timer = timer.reduce(ResendAction::Tick);
        assert_eq!(timer.state, Resend::Counting(1));
        timer = timer.reduce(ResendAction::Tick);
        assert_eq!(timer.state, Resend::Ready);
        assert!(timer.state.label().is_none());

        let idle = timer.clone().reduce(ResendAction::Tick);
        assert!(Rc::ptr_eq(&idle, &timer));
    }

    #[test]
    fn failed_resend_can_be_retried() {
        let timer = Rc::new(ResendTimer::default())
            .reduce(ResendAction::Sending)
            .reduce(ResendAction::Failed("Failed to send. Try again."));
        assert!(timer.state.can_resend());
        assert_eq!(timer.state.label().as_deref(), Some("Failed to send. Try again."));
    }
}
