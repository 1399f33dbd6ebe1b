//! Display formatting for finalized bookings: duration strings for
//! confirmations ("11am - 2pm (3h)", "3 days") and compact date-range
//! labels ("Apr 1 - Apr 3, 2025").

use crate::models::booking::BookingRecord;

/// 12-hour clock label with no leading zero and lowercase am/pm. Hour 24 is
/// the midnight boundary at the end of a day.
pub(crate) fn hour_label_12(hour: u32) -> String {
    match hour {
        0 | 24 => String::from("12am"),
        12 => String::from("12pm"),
        h if h < 12 => format!("{}am", h),
        h => format!("{}pm", h - 12),
    }
}

fn parse_hour(label: &str) -> Option<u32> {
    label.split(':').next()?.parse().ok()
}

/// Renders a booking's duration for a confirmation surface.
///
/// Hourly bookings on a single day render as an hour span with a total
/// ("11am - 2pm (3h)"); hourly bookings across several days as a total over
/// days ("5 hours over 2 days"); whole-day bookings as a day count.
pub fn describe_duration(booking: &BookingRecord) -> String {
    if booking.is_hourly {
        if let Some(slots) = booking.hourly_slots.as_deref().filter(|s| !s.is_empty()) {
            if slots.len() == 1 {
                let mut hours: Vec<u32> =
                    slots[0].hours.iter().filter_map(|h| parse_hour(h)).collect();
                hours.sort_unstable();
                if let (Some(first), Some(last)) = (hours.first(), hours.last()) {
                    return format!(
                        "{} - {} ({}h)",
                        hour_label_12(*first),
                        hour_label_12(*last + 1),
                        hours.len()
                    );
                }
            } else {
                let total: usize = slots.iter().map(|day| day.hours.len()).sum();
                return format!("{} hours over {} days", total, slots.len());
            }
        }
    }

    let days = (booking.end_date - booking.start_date).num_days() + 1;
    if days <= 1 {
        String::from("1 day")
    } else {
        format!("{} days", days)
    }
}

/// Renders a booking's date span ("Apr 1 - Apr 3, 2025", or a single date
/// label for one-day bookings).
pub fn describe_date_range(booking: &BookingRecord) -> String {
    let single_hourly_day = booking.is_hourly
        && booking
            .hourly_slots
            .as_deref()
            .map(|slots| slots.len() == 1)
            .unwrap_or(false);

    if single_hourly_day || booking.start_date == booking.end_date {
        let date = booking
            .hourly_slots
            .as_deref()
            .and_then(|slots| slots.first())
            .map(|slot| slot.date)
            .filter(|_| single_hourly_day)
            .unwrap_or(booking.start_date);
        return date.format("%b %-d, %Y").to_string();
    }

    format!(
        "{} - {}",
        booking.start_date.format("%b %-d"),
        booking.end_date.format("%b %-d, %Y")
    )
}
