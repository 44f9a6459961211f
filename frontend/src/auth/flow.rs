//! Auth state machine and the validation/outcome rules around it. The modal
//! components perform the requests and feed outcomes back in as actions.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yew::Reducible;

use super::session::{PendingSignup, Session};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthView {
    #[default]
    Closed,
    SignIn,
    SignUp,
    Otp,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub view: AuthView,
    pub pending: Option<PendingSignup>,
    pub session: Option<Session>,
}

pub enum AuthAction {
    OpenSignIn,
    OpenSignUp,
    Close,
    /// send-otp answered `otp_sent`
    OtpSent(PendingSignup),
    /// send-otp answered `exists`
    AccountExists,
    /// verify answered `registered`
    Registered(Session),
    /// verify answered `expired`
    OtpExpired,
    SignedIn(Session),
    /// Nav button: log out when signed in, otherwise open sign-in.
    NavButton,
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AuthAction::OpenSignIn => next.view = AuthView::SignIn,
            AuthAction::OpenSignUp => next.view = AuthView::SignUp,
            AuthAction::Close => {
                if next.view == AuthView::Otp {
                    next.pending = None;
                }
                next.view = AuthView::Closed;
            }
            AuthAction::OtpSent(pending) => {
                next.pending = Some(pending);
                next.view = AuthView::Otp;
            }
            AuthAction::AccountExists => {
                next.pending = None;
                next.view = AuthView::SignIn;
            }
            AuthAction::Registered(session) => {
                next.session = Some(session);
                next.pending = None;
                next.view = AuthView::Closed;
            }
            AuthAction::OtpExpired => {
                next.pending = None;
                next.view = AuthView::SignUp;
            }
            AuthAction::SignedIn(session) => {
                next.session = Some(session);
                next.view = AuthView::Closed;
            }
            AuthAction::NavButton => {
                if next.session.is_some() {
                    next.session = None;
                    next.pending = None;
                } else {
                    next.view = AuthView::SignIn;
                }
            }
        }
        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error("Enter your name")]
    Name,
    #[error("Enter a valid email")]
    Email,
    #[error("Password must be at least 6 characters")]
    Password,
}

/// Cheap client-side checks; the backend does the real validation.
pub fn validate_signup(name: &str, email: &str, password: &str) -> Result<(), SignupError> {
    if name.trim().chars().count() < 2 {
        return Err(SignupError::Name);
    }
    let email = email.trim();
    if !email.contains('@') || !email.contains('.') {
        return Err(SignupError::Email);
    }
    if password.trim().chars().count() < 6 {
        return Err(SignupError::Password);
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignInError {
    #[error("Please enter email and password")]
    Both,
    #[error("Please enter your email")]
    Email,
    #[error("Please enter your password")]
    Password,
}

pub fn validate_sign_in(email: &str, password: &str) -> Result<(), SignInError> {
    match (email.trim().is_empty(), password.trim().is_empty()) {
        (true, true) => Err(SignInError::Both),
        (true, false) => Err(SignInError::Email),
        (false, true) => Err(SignInError::Password),
        (false, false) => Ok(()),
    }
}

#[derive(Serialize)]
pub struct SendOtpRequest<'a> {
    pub email: &'a str,
}

#[derive(Serialize)]
pub struct VerifyRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub otp: &'a str,
}

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize, Debug)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: String,
}

#[derive(Deserialize, Debug)]
pub struct LoginResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub user: Option<Session>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOtpOutcome {
    Exists,
    Sent,
    Failed,
}

impl SendOtpOutcome {
    pub fn from_status(status: &str) -> Self {
        match status {
            "exists" => Self::Exists,
            "otp_sent" => Self::Sent,
            _ => Self::Failed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerifyOutcome {
    Registered,
    Expired,
    Rejected,
}

impl VerifyOutcome {
    pub fn from_status(status: &str) -> Self {
        match status {
            "registered" => Self::Registered,
            "expired" => Self::Expired,
            _ => Self::Rejected,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignInOutcome {
    Ok(Session),
    WrongPassword,
    NotFound,
    Failed,
}

impl SignInOutcome {
    /// `email` fills in the session when the backend omits `user`.
    pub fn from_response(response: LoginResponse, email: &str) -> Self {
        match response.status.as_str() {
            "ok" => Self::Ok(response.user.unwrap_or_else(|| Session {
                name: String::new(),
                email: email.to_string(),
            })),
            "wrong_password" => Self::WrongPassword,
            "not_found" => Self::NotFound,
            _ => Self::Failed,
        }
    }
}

pub const MSG_ACCOUNT_EXISTS: &str = "Account already exists. Please sign in.";
pub const MSG_OTP_SEND_FAILED: &str = "Could not send OTP. Try again.";
pub const MSG_SESSION_EXPIRED: &str = "Session expired. Please sign up again.";
pub const MSG_OTP_INCOMPLETE: &str = "Please enter 6-digit OTP";
pub const MSG_REGISTERED: &str = "Account created successfully! 🎉";
pub const MSG_OTP_EXPIRED: &str = "OTP expired! Please try again.";
pub const MSG_OTP_INVALID: &str = "Invalid OTP. Try again.";
pub const MSG_NETWORK: &str = "Network error. Please try again.";
pub const MSG_WRONG_PASSWORD: &str = "Incorrect password.";
pub const MSG_NOT_FOUND: &str = "User not found. Please sign up.";
pub const MSG_OTP_RESENT: &str = "OTP sent! Check your email.";
pub const MSG_RESEND_FAILED: &str = "Failed to send. Try again.";
pub const MSG_RESEND_NETWORK: &str = "Network error. Try again.";

#[cfg(test)]
mod tests {
    use super::*;

    fn pending() -> PendingSignup {
        PendingSignup {
            name: "Ravi".into(),
            email: "ravi@example.in".into(),
            password: "secret1".into(),
        }
    }

    fn session() -> Session {
        Session {
            name: "Ravi".into(),
            email: "ravi@example.in".into(),
        }
    }

    fn run(state: AuthState, actions: Vec<AuthAction>) -> AuthState {
        let mut state = Rc::new(state);
        for action in actions {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    #[test]
    fn short_names_are_rejected_before_anything_else() {
        for name in ["", "A", " B ", "अ"] {
            assert_eq!(
                validate_signup(name, "bad", "1"),
                Err(SignupError::Name),
                "name {name:?}"
            );
        }
        assert_eq!(SignupError::Name.to_string(), "Enter your name");
    }

    #[test]
    fn signup_checks_email_then_password() {
        assert_eq!(validate_signup("Ravi", "ravi@example", "secret1"), Err(SignupError::Email));
        assert_eq!(validate_signup("Ravi", "ravi.example.in", "secret1"), Err(SignupError::Email));
        assert_eq!(validate_signup("Ravi", "ravi@example.in", "12345"), Err(SignupError::Password));
        assert_eq!(validate_signup("Ravi", "ravi@example.in", "123456"), Ok(()));
    }

    #[test]
    fn sign_in_reports_which_field_is_missing() {
        assert_eq!(validate_sign_in("", " "), Err(SignInError::Both));
        assert_eq!(validate_sign_in("", "pw"), Err(SignInError::Email));
        assert_eq!(validate_sign_in("a@b.c", ""), Err(SignInError::Password));
        assert_eq!(validate_sign_in("a@b.c", "pw"), Ok(()));
    }

    #[test]
    fn existing_account_goes_to_sign_in_without_pending_signup() {
        let state = run(
            AuthState::default(),
            vec![AuthAction::OpenSignUp, AuthAction::AccountExists],
        );
        assert_eq!(state.view, AuthView::SignIn);
        assert!(state.pending.is_none());
    }

    #[test]
    fn registration_stores_session_and_closes_everything() {
        let state = run(
            AuthState::default(),
            vec![
                AuthAction::OpenSignUp,
                AuthAction::OtpSent(pending()),
                AuthAction::Registered(session()),
            ],
        );
        assert_eq!(state.view, AuthView::Closed);
        assert_eq!(state.session, Some(session()));
        assert!(state.pending.is_none());
    }

    #[test]
    fn expired_otp_returns_to_sign_up() {
        let state = run(
            AuthState::default(),
            vec![AuthAction::OtpSent(pending()), AuthAction::OtpExpired],
        );
        assert_eq!(state.view, AuthView::SignUp);
        assert!(state.pending.is_none());
    }

    #[test]
    fn closing_otp_view_discards_pending_signup() {
        let state = run(
            AuthState::default(),
            vec![AuthAction::OtpSent(pending()), AuthAction::Close],
        );
        assert_eq!(state.view, AuthView::Closed);
        assert!(state.pending.is_none());
    }

    #[test]
    fn nav_button_logs_out_or_opens_sign_in() {
        let signed_in = AuthState {
            session: Some(session()),
            ..AuthState::default()
        };
        let state = run(signed_in, vec![AuthAction::NavButton]);
        assert!(state.session.is_none());
        assert_eq!(state.view, AuthView::Closed);

        let state = run(state, vec![AuthAction::NavButton]);
        assert_eq!(state.view, AuthView::SignIn);
    }

    #[test]
    fn status_strings_map_to_outcomes() {
        assert_eq!(SendOtpOutcome::from_status("exists"), SendOtpOutcome::Exists);
        assert_eq!(SendOtpOutcome::from_status("otp_sent"), SendOtpOutcome::Sent);
        assert_eq!(SendOtpOutcome::from_status("smtp_error"), SendOtpOutcome::Failed);
        assert_eq!(VerifyOutcome::from_status("registered"), VerifyOutcome::Registered);
        assert_eq!(VerifyOutcome::from_status("expired"), VerifyOutcome::Expired);
        assert_eq!(VerifyOutcome::from_status("wrong"), VerifyOutcome::Rejected);
    }

    #[test]
    fn login_response_carries_user() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"status":"ok","user":{"name":"Ravi","email":"ravi@example.in"}}"#,
        )
        .unwrap();
        assert_eq!(
            SignInOutcome::from_response(response, "typed@example.in"),
            SignInOutcome::Ok(session())
        );

        let response: LoginResponse = serde_json::from_str(r#"{"status":"not_found"}"#).unwrap();
        assert_eq!(
            SignInOutcome::from_response(response, "x@y.z"),
            SignInOutcome::NotFound
        );
    }
}
