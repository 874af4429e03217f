use dioxus::prelude::*;

use crate::components::{CalendarView, Clock, StatusIndicator, TodoList};
use crate::hooks::use_today_events;
use crate::utils::format::count_label;

#[allow(non_snake_case)]
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div { class: "min-h-screen bg-slate-950 p-6",
            div { class: "max-w-7xl mx-auto",
                // Header
                header { class: "flex flex-col md:flex-row md:items-center justify-between gap-4 mb-8",
                    Clock {}
                    div { class: "flex flex-col items-start md:items-end gap-1",
                        StatusIndicator {}
                        TodaySummary {}
                    }
                }
                // Panels
                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-6", style: "height: calc(100vh - 180px)",
                    div { class: "min-h-[400px]", CalendarView {} }
                    div { class: "min-h-[400px]", TodoList {} }
                }
                footer { class: "mt-6 text-center text-slate-600 text-sm",
                    p { "Add todos via Telegram or the form above" }
                }
            }
        }
    }
}

/// Count of today's events; hidden until the calendar is linked.
#[allow(non_snake_case)]
#[component]
fn TodaySummary() -> Element {
    let today = use_today_events().snapshot();
    if !today.calendar_connected {
        return rsx!( Fragment {} );
    }
    let label = match today.events.len() {
        1 => "1 event today".to_string(),
        n => count_label(n, "events today"),
    };
    rsx! {
        span { class: "text-xs text-slate-500", "{label}" }
    }
}
