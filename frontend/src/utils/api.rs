use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use serde::Serialize;

use crate::components::notification::Notifier;
use crate::config;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("could not encode request body: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("unexpected status {0}")]
    Status(u16),
}

/// Entry point for outbound HTTP calls.
pub struct Api;

/// Request wrapper that raises the "server waking up" notice when the backend
/// is slow to answer (it sleeps when idle and takes a while to cold start).
pub struct RequestWrapper {
    request: Request,
    url: String,
    wake: Option<Notifier>,
}

impl RequestWrapper {
    fn new(url: String, method: &str) -> Self {
        let request = match method {
            "POST" => Request::post(&url),
            _ => Request::get(&url),
        };

        Self {
            request,
            url,
            wake: None,
        }
    }

    /// Set the request body as JSON
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(data)?;
        self.request = self
            .request
            .header("Content-Type", "application/json")
            .body(body);
        Ok(self)
    }

    /// Show the wake notice through `notifier` if the response takes longer
    /// than [`config::WAKE_NOTICE_DELAY_MS`].
    pub fn wake_notice(mut self, notifier: &Notifier) -> Self {
        self.wake = Some(notifier.clone());
        self
    }

    /// Send the request. The response (or transport error) is returned as is;
    /// the wake notice never changes the outcome.
    pub async fn send(self) -> Result<Response, ApiError> {
        let phase = Rc::new(Cell::new(WakePhase::default()));
        let wake_timer = self.wake.clone().map(|notifier| {
            let phase = phase.clone();
            Timeout::new(config::WAKE_NOTICE_DELAY_MS, move || {
                let mut current = phase.get();
                if current.on_timer() {
                    gloo_console::log!("Backend slow to answer, showing wake notice");
                    notifier.show_wake();
                }
                phase.set(current);
            })
        });

        let result = self.request.send().await;

        drop(wake_timer);
        let mut current = phase.get();
        let raised = current.on_response();
        phase.set(current);
        if raised {
            if let Some(notifier) = &self.wake {
                notifier.hide_wake();
            }
        }

        match result {
            Ok(response) => {
                log::debug!("{} -> {}", self.url, response.status());
                Ok(response)
            }
            Err(e) => {
                log::error!("{} failed: {}", self.url, e);
                Err(e.into())
            }
        }
    }
}

/// Where a single request stands with respect to the wake notice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum WakePhase {
    #[default]
    Waiting,
    Raised,
    Settled,
}

impl WakePhase {
    /// The delay elapsed. True when this request should raise the notice.
    pub(crate) fn on_timer(&mut self) -> bool {
        if *self == WakePhase::Waiting {
            *self = WakePhase::Raised;
            true
        } else {
            false
        }
    }

    /// The response arrived. True when this request raised the notice and
    /// must hide it again.
    pub(crate) fn on_response(&mut self) -> bool {
        let raised = *self == WakePhase::Raised;
        *self = WakePhase::Settled;
        raised
    }
}

impl Api {
    /// POST to a backend path such as `/auth/login`.
    pub fn post(path: &str) -> RequestWrapper {
        RequestWrapper::new(format!("{}{}", config::get_backend_url(), path), "POST")
    }

    /// GET an absolute third-party URL.
    pub fn get_url(url: impl Into<String>) -> RequestWrapper {
        RequestWrapper::new(url.into(), "GET")
    }
}

#[cfg(test)]
mod tests {
    use super::WakePhase;

    #[test]
    fn fast_response_never_shows_the_notice() {
        let mut phase = WakePhase::default();
        assert!(!phase.on_response());
        assert!(!phase.on_timer());
        assert_eq!(phase, WakePhase::Settled);
    }

    #[test]
    fn slow_response_hides_the_notice_it_raised() {
        let mut phase = WakePhase::default();
        assert!(phase.on_timer());
        assert!(!phase.on_timer());
        assert!(phase.on_response());
        assert!(!phase.on_response());
    }
}
