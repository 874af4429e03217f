use chrono::{DateTime, Local};
use dioxus::prelude::*;

use crate::config::DashboardConfig;
use crate::hooks::{use_calendar_events, CalendarSnapshot};
use crate::shared::types::CalendarEvent;
use crate::utils::calendar::{classify, group_by_day, DayGroup, EventTiming, TODAY};
use crate::utils::format::format_time;

const CALENDAR_ICON: &str = "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z";

/// Which face the calendar panel shows.
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarPanel {
    Loading,
    NotConnected,
    Failed,
    Empty,
    Days(Vec<DayGroup>),
}

impl CalendarPanel {
    pub fn from_snapshot(snap: &CalendarSnapshot, now: &DateTime<Local>) -> Self {
        if snap.loading {
            return Self::Loading;
        }
        // Nothing ever loaded: an error here is not a missing account.
        if !snap.loaded && snap.error.is_some() {
            return Self::Failed;
        }
        if !snap.calendar_connected {
            return Self::NotConnected;
        }
        if snap.error.is_some() {
            return Self::Failed;
        }
        let groups = group_by_day(&snap.events, now);
        if groups.is_empty() {
            Self::Empty
        } else {
            Self::Days(groups)
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn CalendarView() -> Element {
    let calendar = use_calendar_events();
    let config = use_context::<DashboardConfig>();
    let now = Local::now();
    let panel = CalendarPanel::from_snapshot(&calendar.snapshot(), &now);

    rsx! {
        CalendarBody { panel, now, connect_href: config.calendar_auth_url() }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn CalendarBody(panel: CalendarPanel, now: DateTime<Local>, connect_href: String) -> Element {
    let body = match panel {
        CalendarPanel::Loading => rsx! {
            div { class: "space-y-4",
                for i in 0..3 {
                    div { key: "{i}", class: "h-16 bg-slate-800 rounded-lg animate-pulse" }
                }
            }
        },
        CalendarPanel::NotConnected => rsx! {
            div { class: "flex flex-col items-center justify-center py-12 text-center",
                div { class: "w-16 h-16 bg-slate-800 rounded-full flex items-center justify-center mb-4",
                    svg { class: "w-8 h-8 text-slate-500", fill: "none", stroke: "currentColor", view_box: "0 0 24 24",
                        path { stroke_linecap: "round", stroke_linejoin: "round", stroke_width: "2", d: CALENDAR_ICON }
                    }
                }
                h3 { class: "text-lg font-medium text-white mb-2", "Connect Google Calendar" }
                p { class: "text-slate-400 mb-4 max-w-sm", "Link your Google Calendar to see your events here." }
                a { class: "px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors",
                    href: "{connect_href}",
                    "Connect Calendar"
                }
            }
        },
        CalendarPanel::Failed => rsx! {
            div { class: "text-red-400 text-center py-8", "Failed to load calendar events" }
        },
        CalendarPanel::Empty => rsx! {
            div { class: "text-center py-12 text-slate-400",
                svg { class: "w-12 h-12 mx-auto mb-4 text-slate-600", fill: "none", stroke: "currentColor", view_box: "0 0 24 24",
                    path { stroke_linecap: "round", stroke_linejoin: "round", stroke_width: "2", d: CALENDAR_ICON }
                }
                p { "No upcoming events" }
            }
        },
        CalendarPanel::Days(groups) => rsx! {
            div { class: "flex-1 overflow-y-auto pr-2 -mr-2",
                for group in groups {
                    DaySection { key: "{group.label}", group: group.clone(), now }
                }
            }
        },
    };

    rsx! {
        div { class: "bg-slate-900 rounded-xl p-6 h-full flex flex-col",
            div { class: "flex items-center justify-between mb-6",
                h2 { class: "text-xl font-semibold text-white", "Calendar" }
                span { class: "text-xs text-slate-500", "Next 7 days" }
            }
            {body}
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn DaySection(group: DayGroup, now: DateTime<Local>) -> Element {
    let heading = if group.label == TODAY {
        "text-blue-400"
    } else {
        "text-slate-400"
    };
    rsx! {
        div { class: "mb-6 last:mb-0",
            h3 { class: "text-sm font-semibold mb-3 {heading}", "{group.label}" }
            div { class: "space-y-2",
                for event in group.events {
                    EventCard { key: "{event.id}", event: event.clone(), now }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn EventCard(event: CalendarEvent, now: DateTime<Local>) -> Element {
    let timing = classify(&event, &now);
    let live = timing == EventTiming::HappeningNow;
    let past = timing == EventTiming::Past;

    let card = match timing {
        EventTiming::HappeningNow => "bg-blue-900/50 border-blue-500 shadow-lg shadow-blue-500/20",
        EventTiming::Past => "bg-slate-800/50 border-slate-700 opacity-60",
        _ => "bg-slate-800 border-slate-700 hover:border-slate-600",
    };
    let title_class = if past { "text-slate-400" } else { "text-white" };
    let start_class = if live {
        "text-blue-400 font-medium"
    } else {
        "text-slate-300"
    };

    rsx! {
        div { class: "p-3 rounded-lg border transition-all {card}",
            div { class: "flex items-start justify-between gap-2",
                div { class: "flex-1 min-w-0",
                    h4 { class: "font-medium truncate {title_class}", "{event.title}" }
                    if let Some(location) = &event.location {
                        p { class: "text-sm text-slate-400 truncate mt-1", "{location}" }
                    }
                }
                div { class: "text-right text-sm shrink-0",
                    if event.all_day {
                        span { class: "text-slate-400", "All day" }
                    } else {
                        span { class: "{start_class}", "{format_time(&event.start)}" }
                        span { class: "text-slate-500", " - " }
                        span { class: "text-slate-400", "{format_time(&event.end)}" }
                    }
                }
            }
            if live {
                div { class: "mt-2 flex items-center gap-2",
                    span { class: "w-2 h-2 bg-blue-500 rounded-full animate-pulse" }
                    span { class: "text-xs text-blue-400 font-medium", "Happening now" }
                }
            }
        }
    }
}
