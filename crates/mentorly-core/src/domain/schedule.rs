use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::DomainError;

/// First and last bookable hour of a mentoring day.
const FIRST_SLOT_HOUR: u32 = 10;
const LAST_SLOT_HOUR: u32 = 22;

const DAY_FORMAT: &str = "%Y-%m-%d";
const SLOT_FORMAT: &str = "%H:%M";

/// A bookable time of day, written `HH:mm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(NaiveTime);

impl TimeSlot {
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl FromStr for TimeSlot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), SLOT_FORMAT)
            .map(Self)
            .map_err(|_| DomainError::InvalidTimeSlot(s.to_string()))
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(SLOT_FORMAT))
    }
}

/// Hourly slots offered by the calendar, 10:00 through 22:00.
pub fn default_time_slots() -> Vec<TimeSlot> {
    (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR)
        .filter_map(|hour| TimeSlot::from_hm(hour, 0))
        .collect()
}

/// The day and time a mentor picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSelection {
    pub day: NaiveDate,
    pub time: Option<TimeSlot>,
}

impl ScheduleSelection {
    /// A selection on `today` with no time picked yet.
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            day: today,
            time: None,
        }
    }

    /// The selected moment, if a time was picked.
    pub fn moment(&self) -> Option<NaiveDateTime> {
        self.time.map(|slot| self.day.and_time(slot.time()))
    }

    /// Whether a time was picked and the selected moment is before `now`.
    pub fn is_past(&self, now: NaiveDateTime) -> bool {
        self.moment().is_some_and(|moment| moment < now)
    }

    /// `YYYY-MM-DD HH:mm`, the value the schedule endpoint expects.
    ///
    /// With no time picked this is the day followed by a single space.
    pub fn to_request_value(&self) -> String {
        let time = self.time.map(|slot| slot.to_string()).unwrap_or_default();
        format!("{} {}", self.day.format(DAY_FORMAT), time)
    }

    /// Heading shown above the slot picker, e.g. `📅 2026년 10월 16일`.
    pub fn day_label(&self) -> String {
        format!("📅 {}", self.day.format("%Y년 %m월 %d일"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_and_prints_hh_mm() {
        let slot: TimeSlot = "09:30".parse().unwrap();
        assert_eq!(slot.to_string(), "09:30");
    }

    #[test]
    fn rejects_garbage_slot() {
        let err = "9시".parse::<TimeSlot>().unwrap_err();
        assert_eq!(err, DomainError::InvalidTimeSlot("9시".to_string()));
    }

    #[test]
    fn default_slots_are_hourly() {
        let slots = default_time_slots();
        assert_eq!(slots.len(), 13);
        assert_eq!(slots[0].to_string(), "10:00");
        assert_eq!(slots[12].to_string(), "22:00");
    }

    #[test]
    fn request_value_joins_day_and_time() {
        let mut selection = ScheduleSelection::starting(day(2026, 10, 16));
        assert_eq!(selection.to_request_value(), "2026-10-16 ");
        selection.time = Some("14:00".parse().unwrap());
        assert_eq!(selection.to_request_value(), "2026-10-16 14:00");
    }

    #[test]
    fn past_covers_earlier_days() {
        let now = day(2026, 10, 16).and_hms_opt(15, 0, 0).unwrap();
        let mut selection = ScheduleSelection::starting(day(2026, 10, 16));
        assert!(!selection.is_past(now));

        selection.time = Some("14:00".parse().unwrap());
        assert!(selection.is_past(now));

        selection.time = Some("16:00".parse().unwrap());
        assert!(!selection.is_past(now));

        selection.day = day(2026, 10, 15);
        selection.time = Some("14:00".parse().unwrap());
        assert!(selection.is_past(now));

        selection.time = Some("22:00".parse().unwrap());
        assert!(selection.is_past(now));

        selection.day = day(2026, 10, 17);
        selection.time = Some("10:00".parse().unwrap());
        assert!(!selection.is_past(now));
    }

    #[test]
    fn day_label_is_korean() {
        let selection = ScheduleSelection::starting(day(2026, 1, 5));
        assert_eq!(selection.day_label(), "📅 2026년 01월 05일");
    }
}
