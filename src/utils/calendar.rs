use chrono::{DateTime, Local};

use crate::shared::types::CalendarEvent;
use crate::utils::format::format_short_date;

pub const TODAY: &str = "Today";
pub const TOMORROW: &str = "Tomorrow";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTiming {
    AllDay,
    HappeningNow,
    Past,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub label: String,
    pub events: Vec<CalendarEvent>,
}

impl AsRef<str> for DayGroup {
    fn as_ref(&self) -> &str {
        &self.label
    }
}

pub fn date_label(start: &DateTime<Local>, now: &DateTime<Local>) -> String {
    let day = start.date_naive();
    let today = now.date_naive();
    if day == today {
        TODAY.to_string()
    } else if today.succ_opt() == Some(day) {
        TOMORROW.to_string()
    } else {
        format_short_date(start)
    }
}

fn label_rank(label: &str) -> u8 {
    match label {
        TODAY => 0,
        TOMORROW => 1,
        _ => 2,
    }
}

/// Moves "Today" and "Tomorrow" to the front. Every other label keeps its
/// encounter order; this is not a chronological sort.
pub fn sort_labels<S: AsRef<str>>(labels: &mut [S]) {
    labels.sort_by_key(|l| label_rank(l.as_ref()));
}

/// Buckets events by day label. Events keep backend order inside a bucket.
pub fn group_by_day(events: &[CalendarEvent], now: &DateTime<Local>) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    for event in events {
        let label = date_label(&event.start, now);
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.events.push(event.clone()),
            None => groups.push(DayGroup {
                label,
                events: vec![event.clone()],
            }),
        }
    }
    sort_labels(&mut groups);
    groups
}

/// Dimming predicate; an in-progress event also counts as past.
pub fn is_past(event: &CalendarEvent, now: &DateTime<Local>) -> bool {
    !event.all_day && event.start < *now
}

pub fn is_happening_now(event: &CalendarEvent, now: &DateTime<Local>) -> bool {
    !event.all_day && event.start <= *now && event.end > *now
}

pub fn classify(event: &CalendarEvent, now: &DateTime<Local>) -> EventTiming {
    if event.all_day {
        EventTiming::AllDay
    } else if is_happening_now(event, now) {
        EventTiming::HappeningNow
    } else if is_past(event, now) {
        EventTiming::Past
    } else {
        EventTiming::Upcoming
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn noon() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2026, 10, 16, 12, 0, 0)
            .single()
            .unwrap()
    }

    fn event(id: &str, start: DateTime<Local>, hours: i64) -> CalendarEvent {
        CalendarEvent {
            id: id.to_string(),
            title: format!("event {id}"),
            location: None,
            description: None,
            start,
            end: start + Duration::hours(hours),
            all_day: false,
        }
    }

    #[test]
    fn labels_today_tomorrow_and_later() {
        let now = noon();
        assert_eq!(date_label(&(now - Duration::hours(3)), &now), "Today");
        assert_eq!(date_label(&(now + Duration::days(1)), &now), "Tomorrow");
        let later = now + Duration::days(3);
        assert_eq!(date_label(&later, &now), format_short_date(&later));
        assert_eq!(date_label(&later, &now), "Mon, Oct 19");
    }

    #[test]
    fn special_labels_first_others_in_encounter_order() {
        let mut labels = vec!["Wed, Jan 7", "Tomorrow", "Mon, Jan 5", "Today"];
        sort_labels(&mut labels);
        assert_eq!(labels, ["Today", "Tomorrow", "Wed, Jan 7", "Mon, Jan 5"]);
    }

    #[test]
    fn day_groups_sort_by_their_label() {
        let group = |label: &str| DayGroup {
            label: label.to_string(),
            events: vec![],
        };
        let mut groups = vec![group("Sat, Oct 17"), group("Tomorrow"), group("Today")];
        sort_labels(&mut groups);
        let labels: Vec<&str> = groups.iter().map(AsRef::as_ref).collect();
        assert_eq!(labels, ["Today", "Tomorrow", "Sat, Oct 17"]);
    }

    #[test]
    fn groups_follow_label_order_and_backend_order() {
        let now = noon();
        let events = vec![
            event("later", now + Duration::days(4), 1),
            event("tmrw", now + Duration::days(1), 1),
            event("sooner", now + Duration::days(2), 1),
            event("today-b", now + Duration::hours(2), 1),
            event("today-a", now - Duration::hours(2), 1),
        ];
        let groups = group_by_day(&events, &now);
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels[..2], ["Today", "Tomorrow"]);
        // out-of-order fallback labels stay as encountered
        assert_eq!(labels[2], format_short_date(&(now + Duration::days(4))));
        assert_eq!(labels[3], format_short_date(&(now + Duration::days(2))));

        let today: Vec<&str> = groups[0].events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(today, ["today-b", "today-a"]);
    }

    #[test]
    fn grouping_is_idempotent() {
        let now = noon();
        let events: Vec<CalendarEvent> = (0..6)
            .map(|i| event(&i.to_string(), now + Duration::hours(i * 11), 1))
            .collect();
        assert_eq!(group_by_day(&events, &now), group_by_day(&events, &now));
        assert!(group_by_day(&[], &now).is_empty());
    }

    #[test]
    fn timing_boundaries() {
        let now = noon();
        let starting = event("s", now, 1);
        assert!(is_happening_now(&starting, &now));
        assert!(!is_past(&starting, &now));
        assert_eq!(classify(&starting, &now), EventTiming::HappeningNow);

        let ending = event("e", now - Duration::hours(1), 1);
        assert!(!is_happening_now(&ending, &now));
        assert_eq!(classify(&ending, &now), EventTiming::Past);

        let running = event("r", now - Duration::minutes(30), 1);
        assert!(is_past(&running, &now));
        assert_eq!(classify(&running, &now), EventTiming::HappeningNow);

        let later = event("l", now + Duration::minutes(1), 1);
        assert_eq!(classify(&later, &now), EventTiming::Upcoming);
    }

    #[test]
    fn all_day_is_never_past_or_live() {
        let now = noon();
        let mut holiday = event("h", now - Duration::hours(12), 24);
        holiday.all_day = true;
        assert!(!is_past(&holiday, &now));
        assert!(!is_happening_now(&holiday, &now));
        assert_eq!(classify(&holiday, &now), EventTiming::AllDay);
    }

    #[test]
    fn happening_now_implies_window() {
        let now = noon();
        for offset in -180..180i64 {
            let e = event("x", now + Duration::minutes(offset), 1);
            if is_happening_now(&e, &now) {
                assert!(e.start <= now && now < e.end, "offset {offset}");
            }
        }
    }
}
