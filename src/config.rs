use dioxus::logger::tracing::warn;

pub const API_PREFIX: &str = "/api";
pub const HEALTH_PATH: &str = "/health";
pub const CALENDAR_AUTH_PATH: &str = "/api/calendar/auth";

pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8000";
pub const DEFAULT_REFRESH_MS: u32 = 60_000;
pub const HEALTH_REFRESH_MS: u32 = 60_000;
pub const CLOCK_TICK_MS: u32 = 1_000;

const ORIGIN_VAR: &str = "DASHBOARD_API_ORIGIN";
const REFRESH_VAR: &str = "DASHBOARD_REFRESH_MS";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Scheme + host (+ port) of the backend, without a trailing slash.
    pub api_origin: String,
    /// Cadence of every polling hook.
    pub refresh_ms: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_origin: DEFAULT_API_ORIGIN.to_string(),
            refresh_ms: DEFAULT_REFRESH_MS,
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
        }
        let mut config = Self::from_lookup(|key| std::env::var(key).ok());
        if std::env::var(ORIGIN_VAR).is_err() {
            if let Some(origin) = option_env!("DASHBOARD_API_ORIGIN") {
                config.api_origin = normalize_origin(origin);
            } else if let Some(origin) = browser_origin() {
                config.api_origin = normalize_origin(&origin);
            }
        }
        config
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_origin = lookup(ORIGIN_VAR)
            .map(|o| normalize_origin(&o))
            .filter(|o| !o.is_empty())
            .unwrap_or_else(|| DEFAULT_API_ORIGIN.to_string());

        let refresh_ms = match lookup(REFRESH_VAR) {
            None => DEFAULT_REFRESH_MS,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(ms) if ms > 0 => ms,
                _ => {
                    warn!("[config] ignoring {REFRESH_VAR}={raw:?}; using {DEFAULT_REFRESH_MS} ms");
                    DEFAULT_REFRESH_MS
                }
            },
        };

        Self {
            api_origin,
            refresh_ms,
        }
    }

    pub fn api_base(&self) -> String {
        format!("{}{}", self.api_origin, API_PREFIX)
    }

    pub fn health_url(&self) -> String {
        format!("{}{}", self.api_origin, HEALTH_PATH)
    }

    pub fn calendar_auth_url(&self) -> String {
        format!("{}{}", self.api_origin, CALENDAR_AUTH_PATH)
    }
}

fn normalize_origin(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(feature = "web")]
fn browser_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

#[cfg(not(feature = "web"))]
fn browser_origin() -> Option<String> {
    None
}
