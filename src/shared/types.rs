use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use dioxus::logger::tracing::warn;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodoCreate {
    pub title: String,
    pub created_by: String,
}

/// Partial update; unset fields are left out of the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TodoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "local_timestamp")]
    pub start: DateTime<Local>,
    #[serde(deserialize_with = "local_timestamp")]
    pub end: DateTime<Local>,
    #[serde(default)]
    pub all_day: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CalendarEventsDto {
    #[serde(default, deserialize_with = "lenient_events")]
    pub events: Vec<CalendarEvent>,
    #[serde(default)]
    pub calendar_connected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HealthDto {
    #[allow(dead_code)]
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub telegram_bot: bool,
    #[serde(default)]
    pub google_calendar: bool,
}

/// Accepts RFC 3339, naive date-times (local wall clock) and bare dates (local midnight).
pub fn parse_local_timestamp(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;
    Local.from_local_datetime(&naive).earliest()
}

fn local_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Local>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_local_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized timestamp {raw:?}")))
}

/// Drops events that fail to decode instead of failing the whole payload.
fn lenient_events<'de, D>(deserializer: D) -> Result<Vec<CalendarEvent>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<CalendarEvent>(value) {
            Ok(event) => Some(event),
            Err(e) => {
                warn!("[calendar] skipping event: {e}");
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Timelike, Utc};

    #[test]
    fn naive_timestamps_are_local_wall_clock() {
        let dt = parse_local_timestamp("2026-10-16T09:30:00").unwrap();
        assert_eq!((dt.hour(), dt.minute()), (9, 30));

        let midnight = parse_local_timestamp("2026-10-16").unwrap();
        assert_eq!(midnight.hour(), 0);
        assert_eq!(midnight.date_naive().to_string(), "2026-10-16");
    }

    #[test]
    fn offset_timestamps_keep_the_instant() {
        let dt = parse_local_timestamp("2026-10-16T09:30:00Z").unwrap();
        let expected = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
        assert_eq!(dt.with_timezone(&Utc), expected);
        assert!(parse_local_timestamp("next tuesday").is_none());
    }

    #[test]
    fn events_payload_defaults_missing_fields() {
        let dto: CalendarEventsDto = serde_json::from_str(r#"{"calendar_connected": false}"#).unwrap();
        assert!(dto.events.is_empty());
        assert!(!dto.calendar_connected);

        let dto: CalendarEventsDto = serde_json::from_str(
            r#"{"events":[{"id":"a1","title":"Dentist","start":"2026-10-16T09:00:00+00:00","end":"2026-10-16T10:00:00+00:00"}],"calendar_connected":true}"#,
        )
        .unwrap();
        assert_eq!(dto.events.len(), 1);
        assert!(!dto.events[0].all_day);
        assert_eq!(dto.events[0].location, None);
    }

    #[test]
    fn one_bad_event_does_not_sink_the_payload() {
        let dto: CalendarEventsDto = serde_json::from_str(
            r#"{"events":[
                {"id":"a1","title":"Dentist","start":"2026-10-16T09:00:00","end":"2026-10-16T10:00:00"},
                {"id":"a2","title":"Broken","start":"sometime","end":"later"},
                {"id":"a3","title":"Dinner","start":"2026-10-16T19:00:00","end":"2026-10-16T21:00:00"}
            ],"calendar_connected":true}"#,
        )
        .unwrap();
        let titles: Vec<&str> = dto.events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Dentist", "Dinner"]);
        assert!(dto.calendar_connected);

        assert!(serde_json::from_str::<CalendarEventsDto>(r#"{"events":{}}"#).is_err());
    }

    #[test]
    fn todo_ignores_backend_bookkeeping_fields() {
        let todos: Vec<Todo> = serde_json::from_str(
            r#"[{"id":1,"title":"Buy milk","completed":false,"created_by":"alice","created_at":"2026-10-16T08:00:00","updated_at":"2026-10-16T08:00:00"}]"#,
        )
        .unwrap();
        assert_eq!(todos[0].title, "Buy milk");
        assert_eq!(todos[0].created_by, "alice");
    }

    #[test]
    fn partial_update_omits_unset_fields() {
        let body = serde_json::to_value(TodoUpdate {
            completed: Some(true),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "completed": true }));
    }
}
