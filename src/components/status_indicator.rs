use chrono::{DateTime, Local};
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::config::HEALTH_REFRESH_MS;
use crate::hooks::use_interval;
use crate::shared::types::HealthDto;
use crate::utils::format::format_time_with_seconds;

#[allow(non_snake_case)]
#[component]
pub fn StatusIndicator() -> Element {
    let client = use_context::<ApiClient>();
    let mut health = use_signal(HealthDto::default);
    let mut last_update = use_signal(|| Option::<DateTime<Local>>::None);

    let check = use_callback(move |()| {
        let client = client.clone();
        spawn(async move {
            match client.health().await {
                Ok(h) => {
                    health.set(h);
                    last_update.set(Some(Local::now()));
                }
                // The backend may simply not be up yet; keep the old dots.
                Err(e) => debug!("[health] {e:#}"),
            }
        });
    });
    use_hook(move || check.call(()));
    use_interval(HEALTH_REFRESH_MS, move || check.call(()));

    let status = health.read();
    rsx! {
        div { class: "flex items-center gap-4 text-sm",
            StatusDot { label: "Telegram".to_string(), up: status.telegram_bot }
            StatusDot { label: "Calendar".to_string(), up: status.google_calendar }
            if let Some(at) = *last_update.read() {
                span { class: "text-slate-600 text-xs", "Updated {format_time_with_seconds(&at)}" }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn StatusDot(label: String, up: bool) -> Element {
    let dot = if up { "bg-green-500" } else { "bg-slate-600" };
    rsx! {
        div { class: "flex items-center gap-2",
            span { class: "w-2 h-2 rounded-full {dot}" }
            span { class: "text-slate-400", "{label}" }
        }
    }
}
