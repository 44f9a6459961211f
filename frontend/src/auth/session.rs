use std::fmt;

use serde::{Deserialize, Serialize};
use web_sys::Storage;

use crate::config::AUTH_STORAGE_KEY;

/// Signed-in user as stored in localStorage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Signup details held between OTP issue and OTP verification. Never
/// persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct PendingSignup {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for PendingSignup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingSignup")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Having the key at all means "signed in"; a value we cannot read still
/// counts.
pub(crate) fn parse_session(raw: &str) -> Session {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        log::warn!("Stored session is not valid JSON ({}), keeping it anyway", e);
        Session::default()
    })
}

pub fn load_session() -> Option<Session> {
    let raw = storage()?.get_item(AUTH_STORAGE_KEY).ok().flatten()?;
    Some(parse_session(&raw))
}

pub fn save_session(session: &Session) {
    let Some(storage) = storage() else {
        log::warn!("localStorage unavailable, session not persisted");
        return;
    };
    match serde_json::to_string(session) {
        Ok(json) => {
            if let Err(e) = storage.set_item(AUTH_STORAGE_KEY, &json) {
                log::error!("Failed to persist session: {:?}", e);
            }
        }
        Err(e) => log::error!("Failed to encode session: {}", e),
    }
}

pub fn clear_session() {
    if let Some(storage) = storage() {
        if let Err(e) = storage.remove_item(AUTH_STORAGE_KEY) {
            log::error!("Failed to clear session: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_login_user_payload() {
        let session = parse_session(r#"{"name":"Asha","email":"asha@example.in"}"#);
        assert_eq!(session.name, "Asha");
        assert_eq!(session.email, "asha@example.in");
    }

    #[test]
    fn garbage_still_counts_as_signed_in() {
        assert_eq!(parse_session("not json"), Session::default());
        assert_eq!(parse_session(r#"{"email":"x@y.z"}"#).email, "x@y.z");
    }

    #[test]
    fn pending_signup_debug_hides_password() {
        let pending = PendingSignup {
            name: "Asha".into(),
            email: "asha@example.in".into(),
            password: "hunter22".into(),
        };
        let printed = format!("{:?}", pending);
        assert!(!printed.contains("hunter22"));
        assert!(printed.contains("asha@example.in"));
    }
}
