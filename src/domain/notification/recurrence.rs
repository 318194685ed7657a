//! Recurrence descriptor value object

use chrono::{DateTime, Duration as ChronoDuration, Months, Utc};
use serde::{Deserialize, Serialize};

use super::repeat_interval::RepeatInterval;

/// Calendar units after which a scheduled notification is delivered again.
///
/// Mirrors the date-components object the notification center consumes:
/// unset units are `None`, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecurrenceDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub months: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds: Option<u32>,
}

impl RecurrenceDescriptor {
    /// Units in order: years, months, days, hours, minutes, seconds
    pub const fn fields(&self) -> [Option<u32>; 6] {
        [
            self.years,
            self.months,
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
        ]
    }

    /// True when no unit is set
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(Option::is_none)
    }

    /// Recover the repeat interval this descriptor was built from.
    ///
    /// Only descriptors with exactly one unit equal to 1 map back.
    pub fn repeat_interval(&self) -> Option<RepeatInterval> {
        let set: Vec<(usize, u32)> = self
            .fields()
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| (i, v)))
            .collect();

        match set.as_slice() {
            [(index, 1)] => Some(match index {
                0 => RepeatInterval::Year,
                1 => RepeatInterval::Month,
                2 => RepeatInterval::Day,
                3 => RepeatInterval::Hour,
                4 => RepeatInterval::Minute,
                _ => RepeatInterval::Second,
            }),
            _ => None,
        }
    }

    /// Next delivery after `at`, or `None` for an empty descriptor or on overflow.
    pub fn next_after(&self, at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        if self.is_empty() {
            return None;
        }

        let months = self.calendar_months()?;
        let mut next = if months > 0 {
            at.checked_add_months(Months::new(months))?
        } else {
            at
        };
        next = next.checked_add_signed(self.fixed_span())?;

        (next > at).then_some(next)
    }

    /// First delivery strictly after `now` for a series starting at `from`.
    ///
    /// Fixed-span series jump straight there. Calendar series step one
    /// occurrence at a time, at most twelve per elapsed year.
    pub fn first_after(&self, from: DateTime<Utc>, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let mut next = self.next_after(from)?;
        if next > now {
            return Some(next);
        }

        if self.calendar_months()? == 0 {
            let step = self.fixed_span().num_milliseconds();
            if step <= 0 {
                return None;
            }
            let missed = (now - next).num_milliseconds() / step + 1;
            let jump = ChronoDuration::milliseconds(step.checked_mul(missed)?);
            return next.checked_add_signed(jump);
        }

        while next <= now {
            next = self.next_after(next)?;
        }
        Some(next)
    }

    fn calendar_months(&self) -> Option<u32> {
        self.years
            .unwrap_or(0)
            .checked_mul(12)?
            .checked_add(self.months.unwrap_or(0))
    }

    fn fixed_span(&self) -> ChronoDuration {
        ChronoDuration::days(i64::from(self.days.unwrap_or(0)))
            + ChronoDuration::hours(i64::from(self.hours.unwrap_or(0)))
            + ChronoDuration::minutes(i64::from(self.minutes.unwrap_or(0)))
            + ChronoDuration::seconds(i64::from(self.seconds.unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn empty_descriptor() {
        assert!(RecurrenceDescriptor::default().is_empty());
        assert!(RecurrenceDescriptor::default().repeat_interval().is_none());
        assert!(RecurrenceDescriptor::default().next_after(at(2026, 1, 1, 0)).is_none());
    }

    #[test]
    fn multi_unit_descriptor_has_no_interval() {
        let descriptor = RecurrenceDescriptor {
            days: Some(1),
            hours: Some(1),
            ..Default::default()
        };
        assert!(descriptor.repeat_interval().is_none());
    }

    #[test]
    fn non_unit_value_has_no_interval() {
        let descriptor = RecurrenceDescriptor {
            hours: Some(2),
            ..Default::default()
        };
        assert!(descriptor.repeat_interval().is_none());
    }

    #[test]
    fn next_after_hour() {
        let next = RepeatInterval::Hour.recurrence().unwrap().next_after(at(2026, 3, 1, 10));
        assert_eq!(next, Some(at(2026, 3, 1, 11)));
    }

    #[test]
    fn next_after_month_clamps_to_month_end() {
        let jan_31 = Utc.with_ymd_and_hms(2026, 1, 31, 8, 0, 0).unwrap();
        let next = RepeatInterval::Month.recurrence().unwrap().next_after(jan_31);
        assert_eq!(next, Some(Utc.with_ymd_and_hms(2026, 2, 28, 8, 0, 0).unwrap()));
    }

    #[test]
    fn next_after_year() {
        let next = RepeatInterval::Year.recurrence().unwrap().next_after(at(2026, 6, 1, 0));
        assert_eq!(next, Some(at(2027, 6, 1, 0)));
    }

    #[test]
    fn first_after_skips_years_of_missed_seconds() {
        let every_second = RepeatInterval::Second.recurrence().unwrap();
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();

        let next = every_second.first_after(at(2016, 1, 1, 0), now);
        assert_eq!(next, Some(now + ChronoDuration::seconds(1)));
    }

    #[test]
    fn first_after_keeps_phase_of_series() {
        let hourly = RepeatInterval::Hour.recurrence().unwrap();
        let start = Utc.with_ymd_and_hms(2020, 5, 1, 9, 15, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();

        let next = hourly.first_after(start, now);
        assert_eq!(next, Some(Utc.with_ymd_and_hms(2026, 10, 16, 12, 15, 0).unwrap()));
    }

    #[test]
    fn first_after_on_exact_occurrence_moves_past_it() {
        let daily = RepeatInterval::Day.recurrence().unwrap();
        let now = at(2026, 3, 5, 0);

        assert_eq!(daily.first_after(at(2026, 3, 1, 0), now), Some(at(2026, 3, 6, 0)));
    }

    #[test]
    fn first_after_steps_calendar_months() {
        let monthly = RepeatInterval::Month.recurrence().unwrap();
        let now = at(2026, 10, 16, 12);

        assert_eq!(monthly.first_after(at(2016, 1, 20, 8), now), Some(at(2026, 10, 20, 8)));
    }

    #[test]
    fn first_after_future_start_is_next_occurrence() {
        let daily = RepeatInterval::Day.recurrence().unwrap();
        let now = at(2026, 1, 1, 0);

        assert_eq!(daily.first_after(at(2026, 2, 1, 0), now), Some(at(2026, 2, 2, 0)));
    }

    #[test]
    fn serializes_only_set_units() {
        let json = serde_json::to_string(&RepeatInterval::Day.recurrence().unwrap()).unwrap();
        assert_eq!(json, r#"{"days":1}"#);
    }
}
