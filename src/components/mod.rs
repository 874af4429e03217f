pub mod calendar_view;
pub mod clock;
pub mod dashboard;
pub mod status_indicator;
pub mod todo_list;

pub use calendar_view::CalendarView;
pub use clock::Clock;
pub use dashboard::Dashboard;
pub use status_indicator::StatusIndicator;
pub use todo_list::TodoList;
