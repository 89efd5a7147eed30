//! Time context resolution and the open-now filter
//!
//! Everything here works on explicit clock readings; the shell is the only
//! place that looks at the system clock.

use chrono::{DateTime, Datelike, TimeZone, Timelike};
use std::fmt;
use std::str::FromStr;

use crate::listing::TruckListing;

/// Map a weekday ordinal (Sunday = 1 .. Saturday = 7) to its English name
///
/// Ordinals outside 1..=6 fall through to "Saturday".
pub fn day_name(ordinal: u32) -> &'static str {
    match ordinal {
        1 => "Sunday",
        2 => "Monday",
        3 => "Tuesday",
        4 => "Wednesday",
        5 => "Thursday",
        6 => "Friday",
        _ => "Saturday",
    }
}

/// The day, hour and minute that listings are checked against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeContext {
    pub day: String,
    pub hour: u32,
    pub minute: u32,
}

impl TimeContext {
    pub fn new(day: impl Into<String>, hour: u32, minute: u32) -> Self {
        Self {
            day: day.into(),
            hour,
            minute,
        }
    }

    /// The hour and minute of the context
    pub fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::new(self.hour, self.minute)
    }

    /// Resolve the context from a clock reading in any time zone
    pub fn from_datetime<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        Self::new(
            day_name(now.weekday().number_from_sunday()),
            now.hour(),
            now.minute(),
        )
    }
}

/// Hour and minute parsed from an `H:MM` / `HH:MM` string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = String;

    /// Splits on `:` and parses the first two components. Anything after the
    /// second component (seconds) is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let (hour, minute) = match (parts.next(), parts.next()) {
            (Some(hour), Some(minute)) => (hour, minute),
            _ => return Err(format!("Expected HH:MM, got '{s}'")),
        };

        let hour = hour
            .parse::<u32>()
            .map_err(|_| format!("Invalid hour '{hour}' in '{s}'"))?;
        let minute = minute
            .parse::<u32>()
            .map_err(|_| format!("Invalid minute '{minute}' in '{s}'"))?;

        Ok(Self { hour, minute })
    }
}

/// Same-day opening window of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl OpenWindow {
    /// Extract the window of a listing that is usable for `day`
    ///
    /// Returns `None` when any of the five fields is missing, the listing is
    /// for another day, or either time does not parse.
    pub fn for_listing(listing: &TruckListing, day: &str) -> Option<Self> {
        let start = listing.start_time.as_deref()?;
        let end = listing.end_time.as_deref()?;
        let listing_day = listing.day_of_week.as_deref()?;
        listing.vendor_name.as_ref()?;
        listing.address.as_ref()?;

        if listing_day != day {
            return None;
        }

        Some(Self {
            start: start.parse().ok()?,
            end: end.parse().ok()?,
        })
    }

    /// Whether the window contains `hour:minute`
    ///
    /// Windows never wrap past midnight. When start and end share an hour the
    /// minute checks below are the whole rule, including for zero-length
    /// windows.
    pub fn contains(&self, hour: u32, minute: u32) -> bool {
        let (start, end) = (self.start, self.end);

        if hour > start.hour && hour < end.hour {
            true
        } else if hour == start.hour {
            minute >= start.minute && (start.hour != end.hour || minute < end.minute)
        } else if hour == end.hour {
            minute < end.minute && (start.hour != end.hour || minute > start.minute)
        } else {
            false
        }
    }
}

/// Whether a single listing is valid for the context's day and open right now
pub fn is_open_now(listing: &TruckListing, now: &TimeContext) -> bool {
    OpenWindow::for_listing(listing, &now.day)
        .is_some_and(|window| window.contains(now.hour, now.minute))
}

/// Keep the listings that are open at `now`, in their original order
pub fn open_now(listings: Vec<TruckListing>, now: &TimeContext) -> Vec<TruckListing> {
    listings
        .into_iter()
        .filter(|listing| is_open_now(listing, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, Utc};

    fn create_test_listing(day: &str, start: &str, end: &str, name: &str) -> TruckListing {
        TruckListing {
            start_time: Some(start.to_string()),
            end_time: Some(end.to_string()),
            day_of_week: Some(day.to_string()),
            vendor_name: Some(name.to_string()),
            address: Some("Main St".to_string()),
        }
    }

    fn window(start: &str, end: &str) -> OpenWindow {
        OpenWindow {
            start: start.parse().unwrap(),
            end: end.parse().unwrap(),
        }
    }

    // ============================================================================
    // day_name / TimeContext tests
    // ============================================================================

    #[test]
    fn test_day_name_all_ordinals() {
        let names: Vec<&str> = (1..=7).map(day_name).collect();
        assert_eq!(
            names,
            vec![
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday"
            ]
        );
    }

    #[test]
    fn test_day_name_unknown_ordinal_is_saturday() {
        assert_eq!(day_name(0), "Saturday");
        assert_eq!(day_name(8), "Saturday");
    }

    #[test]
    fn test_time_context_from_datetime() {
        // 2024-01-01 was a Monday
        let dt = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 34, 56)
            .unwrap()
            .and_utc();

        let ctx = TimeContext::from_datetime(&dt);

        assert_eq!(ctx, TimeContext::new("Monday", 12, 34));
    }

    #[test]
    fn test_time_context_uses_local_offset() {
        // 2024-01-07 23:30 UTC is already Monday in UTC+2
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let dt = NaiveDate::from_ymd_opt(2024, 1, 7)
            .unwrap()
            .and_hms_opt(23, 30, 0)
            .unwrap()
            .and_utc()
            .with_timezone(&offset);

        let ctx = TimeContext::from_datetime(&dt);

        assert_eq!(ctx, TimeContext::new("Monday", 1, 30));
    }

    #[test]
    fn test_time_context_sunday() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 7, 8, 0, 0).unwrap();
        assert_eq!(TimeContext::from_datetime(&dt).day, "Sunday");
    }

    // ============================================================================
    // TimeOfDay parsing tests
    // ============================================================================

    #[test]
    fn test_parse_time_of_day() {
        assert_eq!("07:00".parse::<TimeOfDay>(), Ok(TimeOfDay::new(7, 0)));
        assert_eq!("9:30".parse::<TimeOfDay>(), Ok(TimeOfDay::new(9, 30)));
        assert_eq!("23:59".parse::<TimeOfDay>(), Ok(TimeOfDay::new(23, 59)));
    }

    #[test]
    fn test_parse_time_of_day_ignores_seconds() {
        assert_eq!("10:15:30".parse::<TimeOfDay>(), Ok(TimeOfDay::new(10, 15)));
    }

    #[test]
    fn test_parse_time_of_day_rejects_malformed() {
        assert!("0700".parse::<TimeOfDay>().is_err());
        assert!("".parse::<TimeOfDay>().is_err());
        assert!("7:".parse::<TimeOfDay>().is_err());
        assert!("7AM:00".parse::<TimeOfDay>().is_err());
        assert!("ab:cd".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_time_context_time_of_day() {
        let ctx = TimeContext::new("Friday", 14, 5);
        assert_eq!(ctx.time_of_day(), TimeOfDay::new(14, 5));
        assert_eq!(ctx.time_of_day().to_string(), "14:05");
    }

    #[test]
    fn test_time_of_day_display() {
        assert_eq!(TimeOfDay::new(7, 5).to_string(), "7:05");
    }

    // ============================================================================
    // OpenWindow::contains tests
    // ============================================================================

    #[test]
    fn test_contains_boundaries() {
        let w = window("9:00", "17:00");

        assert!(w.contains(9, 0));
        assert!(!w.contains(17, 0));
        assert!(!w.contains(8, 59));
        assert!(w.contains(16, 59));
        assert!(w.contains(12, 0));
    }

    #[test]
    fn test_contains_partial_hours() {
        let w = window("10:30", "14:15");

        assert!(!w.contains(10, 29));
        assert!(w.contains(10, 30));
        assert!(w.contains(14, 14));
        assert!(!w.contains(14, 15));
        assert!(!w.contains(15, 0));
    }

    #[test]
    fn test_contains_same_hour_window() {
        let w = window("10:10", "10:40");

        assert!(!w.contains(10, 9));
        assert!(w.contains(10, 10));
        assert!(w.contains(10, 39));
        assert!(!w.contains(10, 40));
        assert!(!w.contains(11, 0));
    }

    #[test]
    fn test_contains_zero_length_window_is_closed() {
        let w = window("10:10", "10:10");

        assert!(!w.contains(10, 9));
        assert!(!w.contains(10, 10));
        assert!(!w.contains(10, 11));
    }

    #[test]
    fn test_contains_overnight_window_is_not_supported() {
        // 22:00-02:00 only matches the literal start and end hours
        let w = window("22:00", "2:00");

        assert!(w.contains(22, 30));
        assert!(!w.contains(23, 0));
        assert!(!w.contains(2, 0));
        assert!(!w.contains(1, 0));
    }

    // ============================================================================
    // Validity and filter tests
    // ============================================================================

    #[test]
    fn test_for_listing_requires_all_fields() {
        let complete = create_test_listing("Monday", "9:00", "17:00", "Taco Spot");
        assert!(OpenWindow::for_listing(&complete, "Monday").is_some());

        let mut no_address = complete.clone();
        no_address.address = None;
        assert!(OpenWindow::for_listing(&no_address, "Monday").is_none());

        let mut no_name = complete.clone();
        no_name.vendor_name = None;
        assert!(OpenWindow::for_listing(&no_name, "Monday").is_none());

        let mut no_start = complete.clone();
        no_start.start_time = None;
        assert!(OpenWindow::for_listing(&no_start, "Monday").is_none());

        let mut no_end = complete.clone();
        no_end.end_time = None;
        assert!(OpenWindow::for_listing(&no_end, "Monday").is_none());

        let mut no_day = complete;
        no_day.day_of_week = None;
        assert!(OpenWindow::for_listing(&no_day, "Monday").is_none());
    }

    #[test]
    fn test_for_listing_day_must_match_exactly() {
        let listing = create_test_listing("monday", "9:00", "17:00", "Taco Spot");
        assert!(OpenWindow::for_listing(&listing, "Monday").is_none());
    }

    #[test]
    fn test_for_listing_malformed_times_are_skipped() {
        let no_colon = create_test_listing("Monday", "0900", "17:00", "A");
        let not_numeric = create_test_listing("Monday", "9am:00", "17:00", "B");

        assert!(OpenWindow::for_listing(&no_colon, "Monday").is_none());
        assert!(OpenWindow::for_listing(&not_numeric, "Monday").is_none());
    }

    #[test]
    fn test_open_now_drops_other_days() {
        let listings = vec![
            create_test_listing("Monday", "9:00", "17:00", "Monday Truck"),
            create_test_listing("Tuesday", "9:00", "17:00", "Tuesday Truck"),
        ];

        let open = open_now(listings, &TimeContext::new("Monday", 12, 0));

        assert_eq!(open.len(), 1);
        assert_eq!(open[0].vendor_name.as_deref(), Some("Monday Truck"));
    }

    #[test]
    fn test_open_now_keeps_order_and_drops_closed() {
        let listings = vec![
            create_test_listing("Monday", "11:00", "13:00", "Zeta"),
            create_test_listing("Monday", "6:00", "10:00", "Breakfast"),
            create_test_listing("Monday", "12:00", "12:30", "alpha"),
            TruckListing::default(),
        ];

        let open = open_now(listings, &TimeContext::new("Monday", 12, 0));
        let names: Vec<&str> = open
            .iter()
            .filter_map(|l| l.vendor_name.as_deref())
            .collect();

        assert_eq!(names, vec!["Zeta", "alpha"]);
    }

    #[test]
    fn test_open_now_empty() {
        assert!(open_now(vec![], &TimeContext::new("Monday", 12, 0)).is_empty());
    }

    #[test]
    fn test_is_open_now_taco_spot() {
        let listing = create_test_listing("Monday", "07:00", "15:00", "Taco Spot");

        assert!(is_open_now(&listing, &TimeContext::new("Monday", 12, 0)));
        assert!(!is_open_now(&listing, &TimeContext::new("Monday", 16, 0)));
    }
}
