pub mod calendar;
pub mod poll;
pub mod todos;

pub use calendar::{use_calendar_events, use_today_events, CalendarSnapshot};
pub use poll::{use_interval, PollState};
pub use todos::{use_todos, UseTodos};
