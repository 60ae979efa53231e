//! Wall-clock snapshots and the date/time labels shown by the menu bar and lock screen.

use std::cell::Cell;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

thread_local! {
    static LAST_WINDOW_TIMESTAMP_MS: Cell<u64> = const { Cell::new(0) };
}

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Current unix time in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Millisecond stamp for window creation that never repeats within the page.
pub fn next_monotonic_timestamp_ms() -> u64 {
    let now = unix_time_ms_now();
    LAST_WINDOW_TIMESTAMP_MS.with(|last| {
        let next = now.max(last.get().saturating_add(1));
        last.set(next);
        next
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot {
    /// `0` is Sunday.
    pub weekday: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl ClockSnapshot {
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                weekday: date.get_day(),
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                weekday: 4,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }

    fn weekday_name(&self) -> &'static str {
        WEEKDAYS[(self.weekday % 7) as usize]
    }

    fn month_name(&self) -> &'static str {
        MONTHS[(self.month.clamp(1, 12) - 1) as usize]
    }

    /// Menu bar date, e.g. `Mon Oct 19`.
    pub fn short_date_label(&self) -> String {
        format!(
            "{} {} {}",
            &self.weekday_name()[..3],
            &self.month_name()[..3],
            self.day
        )
    }

    /// Menu bar time, e.g. `3:04 PM`.
    pub fn twelve_hour_label(&self) -> String {
        let suffix = if self.hour < 12 { "AM" } else { "PM" };
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{hour}:{:02} {suffix}", self.minute)
    }

    /// Lock screen time, e.g. `15:04`.
    pub fn twenty_four_hour_label(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// Lock screen date, e.g. `Monday, October 19`.
    pub fn long_date_label(&self) -> String {
        format!("{}, {} {}", self.weekday_name(), self.month_name(), self.day)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn afternoon() -> ClockSnapshot {
        ClockSnapshot {
            weekday: 1,
            month: 10,
            day: 19,
            hour: 15,
            minute: 4,
        }
    }

    #[test]
    fn menu_bar_labels() {
        let clock = afternoon();
        assert_eq!(clock.short_date_label(), "Mon Oct 19");
        assert_eq!(clock.twelve_hour_label(), "3:04 PM");
    }

    #[test]
    fn lock_screen_labels() {
        let clock = afternoon();
        assert_eq!(clock.twenty_four_hour_label(), "15:04");
        assert_eq!(clock.long_date_label(), "Monday, October 19");
    }

    #[test]
    fn midnight_and_noon_render_as_twelve() {
        let midnight = ClockSnapshot {
            hour: 0,
            minute: 0,
            ..afternoon()
        };
        let noon = ClockSnapshot {
            hour: 12,
            minute: 30,
            ..afternoon()
        };
        assert_eq!(midnight.twelve_hour_label(), "12:00 AM");
        assert_eq!(noon.twelve_hour_label(), "12:30 PM");
    }

    #[test]
    fn monotonic_timestamps_strictly_increase() {
        let first = next_monotonic_timestamp_ms();
        let second = next_monotonic_timestamp_ms();
        assert!(second > first);
    }
}
