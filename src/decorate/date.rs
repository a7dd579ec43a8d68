//! Modification date column

use std::time::{Duration, SystemTime};

use chrono::{DateTime, Local};

use crate::config::{DateColors, RESET};

pub const HOUR: Duration = Duration::from_secs(60 * 60);
pub const DAY: Duration = Duration::from_secs(24 * 60 * 60);
pub const WEEK: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Local-time format of the date column, e.g. `14 Oct 09:30`.
pub const DATE_FORMAT: &str = "%d %b %H:%M";

/// Color class of an entry's age: `< 1h`, `< 1d`, `< 1w`, older.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBucket {
    Seconds,
    Hours,
    Days,
    Weeks,
}

impl AgeBucket {
    pub fn of(age: Duration) -> Self {
        if age < HOUR {
            AgeBucket::Seconds
        } else if age < DAY {
            AgeBucket::Hours
        } else if age < WEEK {
            AgeBucket::Days
        } else {
            AgeBucket::Weeks
        }
    }

    pub fn color(self, colors: &DateColors) -> &str {
        match self {
            AgeBucket::Seconds => &colors.seconds,
            AgeBucket::Hours => &colors.hours,
            AgeBucket::Days => &colors.days,
            AgeBucket::Weeks => &colors.weeks,
        }
    }
}

/// Age of `modified` at `now`; timestamps in the future count as brand new.
pub fn age(modified: SystemTime, now: SystemTime) -> Duration {
    now.duration_since(modified).unwrap_or(Duration::ZERO)
}

pub fn format_date(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format(DATE_FORMAT).to_string()
}

pub fn date_fragment(modified: SystemTime, now: SystemTime, colors: &DateColors) -> String {
    let bucket = AgeBucket::of(age(modified, now));
    format!("{}{}{}", bucket.color(colors), format_date(modified), RESET)
}
