//! Marketing/preview summary of a weekly schedule ("Weekdays, 8am–6pm").

use serde::{Deserialize, Serialize};

use crate::duration::hour_label_12;
use crate::models::day::Weekday;
use crate::models::schedule::WeeklySchedule;

/// Human-readable projection of a [`WeeklySchedule`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub days_text: String,
    pub hours_text: Option<String>,
}

/// Projects a schedule into display text, or `None` when no day has any
/// range.
///
/// The hour window deliberately reads **only each active day's first range**
/// (min start, max end across days), so a day with a second evening range
/// does not widen the text. That undercount matches the behavior consumers
/// already render; widening it here would change published listings.
pub fn summarize(schedule: &WeeklySchedule) -> Option<ScheduleSummary> {
    let active = schedule.active_days();
    if active.is_empty() {
        return None;
    }

    let days_text = days_text(&active);

    let first_ranges: Vec<_> = active
        .iter()
        .filter_map(|day| schedule.ranges_for(*day).first())
        .collect();
    let hours_text = match (
        first_ranges.iter().map(|r| r.start).min(),
        first_ranges.iter().map(|r| r.end).max(),
    ) {
        (Some(start), Some(end)) => Some(format!(
            "{}–{}",
            hour_label_12(u32::from(start)),
            hour_label_12(u32::from(end))
        )),
        _ => None,
    };

    Some(ScheduleSummary {
        days_text,
        hours_text,
    })
}

fn days_text(active: &[Weekday]) -> String {
    if active.len() == 7 {
        return String::from("Every day");
    }
    if active == Weekday::WEEKDAYS {
        return String::from("Weekdays");
    }
    if active == Weekday::WEEKEND {
        return String::from("Weekends");
    }
    if active.len() <= 3 {
        return active
            .iter()
            .map(|d| d.abbrev())
            .collect::<Vec<_>>()
            .join(", ");
    }
    format!("{} days", active.len())
}
