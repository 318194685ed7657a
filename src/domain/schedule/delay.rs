//! Delay value object

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration as ChronoDuration, Utc};

use crate::domain::error::DelayParseError;

/// Relative offset from now at which a notification is delivered.
/// Immutable and validated on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Delay {
    seconds: u64,
}

impl Delay {
    /// Create a Delay from seconds
    pub const fn from_secs(secs: u64) -> Self {
        Self { seconds: secs }
    }

    /// Get delay in seconds
    pub const fn as_secs(&self) -> u64 {
        self.seconds
    }

    /// Delivery instant this delay points to, counted from `now`
    pub fn after(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let secs = i64::try_from(self.seconds).unwrap_or(i64::MAX);
        ChronoDuration::try_seconds(secs)
            .and_then(|span| now.checked_add_signed(span))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

impl FromStr for Delay {
    type Err = DelayParseError;

    /// Parse a delay string into a Delay value object.
    /// Supported formats: "30s", "5m", "2h", "1h30m", "1h5m10s"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        let err = || DelayParseError { input: s.to_string() };

        let mut total: u64 = 0;
        let mut current_num = String::new();
        let mut found_any = false;
        // Units must appear in h, m, s order and at most once each
        let mut last_rank = 0;

        for ch in input.chars() {
            if ch.is_ascii_digit() {
                current_num.push(ch);
                continue;
            }

            let (rank, multiplier) = match ch {
                'h' => (1, 3600),
                'm' => (2, 60),
                's' => (3, 1),
                _ => return Err(err()),
            };

            if current_num.is_empty() || rank <= last_rank {
                return Err(err());
            }

            let value: u64 = current_num.parse().map_err(|_| err())?;
            total = value
                .checked_mul(multiplier)
                .and_then(|v| total.checked_add(v))
                .ok_or_else(err)?;
            current_num.clear();
            last_rank = rank;
            found_any = true;
        }

        // Leftover digits without a unit
        if !current_num.is_empty() || !found_any || total == 0 {
            return Err(err());
        }

        Ok(Self { seconds: total })
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.seconds / 3600;
        let minutes = (self.seconds % 3600) / 60;
        let seconds = self.seconds % 60;

        if hours > 0 {
            write!(f, "{}h", hours)?;
        }
        if minutes > 0 {
            write!(f, "{}m", minutes)?;
        }
        if seconds > 0 || self.seconds == 0 {
            write!(f, "{}s", seconds)?;
        }
        Ok(())
    }
}
