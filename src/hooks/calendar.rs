use dioxus::prelude::*;

use crate::api::{HttpTransport, CALENDAR_EVENTS_PATH, CALENDAR_TODAY_PATH};
use crate::config::DashboardConfig;
use crate::hooks::poll::{use_api_data, ApiData, PollState};
use crate::shared::types::{CalendarEvent, CalendarEventsDto};

#[derive(Clone, Copy, PartialEq)]
pub struct UseCalendar {
    poll: ApiData<CalendarEventsDto>,
}

/// Events for the next 7 days.
pub fn use_calendar_events() -> UseCalendar {
    let config = use_context::<DashboardConfig>();
    UseCalendar {
        poll: use_api_data::<_, HttpTransport>(CALENDAR_EVENTS_PATH, config.refresh_ms),
    }
}

pub fn use_today_events() -> UseCalendar {
    let config = use_context::<DashboardConfig>();
    UseCalendar {
        poll: use_api_data::<_, HttpTransport>(CALENDAR_TODAY_PATH, config.refresh_ms),
    }
}

impl UseCalendar {
    pub fn snapshot(&self) -> CalendarSnapshot {
        CalendarSnapshot::from(&self.poll.snapshot())
    }
}

/// Flattened view of a calendar poll with the defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarSnapshot {
    pub events: Vec<CalendarEvent>,
    /// False both when the backend has no linked account and when nothing loaded yet.
    pub calendar_connected: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub loaded: bool,
}

impl From<&PollState<CalendarEventsDto>> for CalendarSnapshot {
    fn from(state: &PollState<CalendarEventsDto>) -> Self {
        let (events, calendar_connected) = match &state.data {
            Some(dto) => (dto.events.clone(), dto.calendar_connected),
            None => (Vec::new(), false),
        };
        Self {
            events,
            calendar_connected,
            loading: state.loading,
            error: state.error.clone(),
            loaded: state.data.is_some(),
        }
    }
}
