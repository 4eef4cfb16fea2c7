use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};

use crate::labels::Labels;

/// Render an elapsed duration using only its one or two most significant
/// non-zero units. The finer unit is dropped once the coarser count
/// reaches 4, so long durations stay short.
pub fn time_interval(seconds: u64, labels: &Labels) -> String {
    let days    = seconds / 86_400;
    let hours   = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;
    let secs    = seconds % 60;
    let t = &labels.time;

    if days > 0 {
        if days >= 4 || hours == 0 {
            return format!("{}{}", days, t.day);
        }
        return format!("{}{}{}{}", days, t.day, hours, t.hour);
    }
    if hours > 0 {
        if hours >= 4 || minutes == 0 {
            return format!("{}{}", hours, t.hour);
        }
        return format!("{}{}{}{}", hours, t.hour, minutes, t.minute);
    }
    if minutes > 0 {
        if minutes >= 4 || secs == 0 {
            return format!("{}{}", minutes, t.minute);
        }
        return format!("{}{}{}{}", minutes, t.minute, secs, t.second);
    }
    format!("{}{}", secs, t.second)
}

/// Render a unix timestamp against the current wall clock.
pub fn timestamp(seconds: i64, labels: &Labels) -> String {
    timestamp_at(seconds, &Local::now(), labels)
}

/// Render a unix timestamp against an explicit "now". A timestamp within a
/// day of `now` in the same month uses the today/yesterday/tomorrow words;
/// anything else falls back to a long date. Zero and unrepresentable
/// timestamps yield the unavailable marker.
pub fn timestamp_at<Tz>(seconds: i64, now: &DateTime<Tz>, labels: &Labels) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let d = &labels.date;
    if seconds == 0 {
        return d.unavailable.clone();
    }
    let when = match now.timezone().timestamp_opt(seconds, 0).single() {
        Some(w) => w,
        None => return d.unavailable.clone(),
    };

    let same_year  = now.year() == when.year();
    let same_month = now.month() == when.month();
    let day_diff   = now.day() as i32 - when.day() as i32;

    let date = if same_year && same_month && day_diff.abs() <= 1 {
        match day_diff {
            0 => d.today.clone(),
            1 => d.yesterday.clone(),
            _ => d.tomorrow.clone(),
        }
    } else {
        when.format("%a %b %d %Y").to_string()
    };

    // The subtract-12 adjustment and the period glyph are two separate
    // checks against the raw hour; 12:xx keeps "12" with the morning glyph.
    let raw_hour = when.hour();
    let hour = if raw_hour > 12 { raw_hour - 12 } else { raw_hour };
    let period = if raw_hour > 12 { &d.pm } else { &d.am };
    let hour = if hour == 0 { 12 } else { hour };

    format!(
        "{} {:02}:{:02}:{:02} {}",
        date,
        hour,
        when.minute(),
        when.second(),
        period
    )
}
