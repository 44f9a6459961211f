//! Build-time configuration. Every value can be overridden when building with
//! trunk by exporting the matching environment variable.

/// Base URL of the auth + prediction backend.
pub fn get_backend_url() -> &'static str {
    option_env!("SMART_KISAN_BACKEND_URL").unwrap_or("https://smart-kisan-jznw.onrender.com")
}

/// open-meteo forecast endpoint used by the weather ticker.
pub fn get_weather_url() -> &'static str {
    option_env!("SMART_KISAN_WEATHER_URL").unwrap_or("https://api.open-meteo.com/v1/forecast")
}

/// Console log level, `SMART_KISAN_LOG=debug` etc. Defaults to info.
pub fn log_level() -> log::Level {
    match option_env!("SMART_KISAN_LOG") {
        Some(level) => parse_level(level),
        None => log::Level::Info,
    }
}

fn parse_level(level: &str) -> log::Level {
    level.parse().unwrap_or(log::Level::Info)
}

/// localStorage key holding the signed-in user as `{name, email}` JSON.
pub const AUTH_STORAGE_KEY: &str = "AUTH_USER";

// Request gateway
pub const WAKE_NOTICE_DELAY_MS: u32 = 8_000;
pub const WAKE_NOTICE_FAILSAFE_MS: u32 = 10_000;
pub const WAKE_COUNTDOWN_SECS: u32 = 60;

// Notifications
pub const POPUP_VISIBLE_MS: u32 = 2_500;
pub const PLANT_LOADER_FAILSAFE_MS: u32 = 5_000;

// Auth
pub const OTP_RESEND_COOLDOWN_SECS: u32 = 30;
pub const OTP_SHAKE_MS: u32 = 400;

// Page chrome
pub const WEATHER_ROTATE_MS: u32 = 5_000;
pub const WEATHER_FADE_MS: u32 = 350;
pub const NAV_OFFSET_PX: f64 = 70.0;
pub const CROPS_EXTRA_OFFSET_PX: f64 = 75.0;
pub const SMOOTH_SCROLL_MS: f64 = 1_000.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_falls_back_to_info() {
        assert_eq!(parse_level("debug"), log::Level::Debug);
        assert_eq!(parse_level("WARN"), log::Level::Warn);
        assert_eq!(parse_level("loud"), log::Level::Info);
    }
}
