//! Calendar dimensions the rentals can be grouped by.

use crate::types::columns::{COL_DAY_OF_WEEK, COL_HOUR, COL_MONTH};
use serde::Serialize;
use std::fmt;

const DAY_NAMES: [&str; 7] = ["Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu"];
const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Ags", "Sep", "Okt", "Nov", "Des",
];

/// A grouping key derived from the date and hour of a rental row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TemporalKey {
    /// Hour of day, 0 to 23.
    Hour,
    /// Day of week, 0 (Monday) to 6 (Sunday).
    DayOfWeek,
    /// Month of year, 1 to 12.
    Month,
}

impl TemporalKey {
    pub const ALL: [TemporalKey; 3] = [TemporalKey::Hour, TemporalKey::DayOfWeek, TemporalKey::Month];

    /// The derived column holding this key.
    pub fn column(&self) -> &'static str {
        match self {
            TemporalKey::Hour => COL_HOUR,
            TemporalKey::DayOfWeek => COL_DAY_OF_WEEK,
            TemporalKey::Month => COL_MONTH,
        }
    }

    /// Inclusive range of valid key values.
    pub fn key_range(&self) -> (i32, i32) {
        match self {
            TemporalKey::Hour => (0, 23),
            TemporalKey::DayOfWeek => (0, 6),
            TemporalKey::Month => (1, 12),
        }
    }

    /// Maximum number of distinct keys a grouping can produce.
    pub fn max_keys(&self) -> usize {
        let (lo, hi) = self.key_range();
        (hi - lo + 1) as usize
    }

    /// Axis label for a key value, e.g. `"17:00"`, `"Senin"` or `"Jan"`.
    ///
    /// Values outside [`TemporalKey::key_range`] fall back to the plain number.
    pub fn display_key(&self, key: i32) -> String {
        let named = match self {
            TemporalKey::Hour => return format!("{:02}:00", key),
            TemporalKey::DayOfWeek => usize::try_from(key).ok().and_then(|i| DAY_NAMES.get(i)),
            TemporalKey::Month => usize::try_from(key - 1).ok().and_then(|i| MONTH_NAMES.get(i)),
        };
        named.map_or_else(|| key.to_string(), |name| name.to_string())
    }

    /// Tab title on the dashboard.
    pub fn title(&self) -> &'static str {
        match self {
            TemporalKey::Hour => "Per Jam",
            TemporalKey::DayOfWeek => "Per Hari",
            TemporalKey::Month => "Per Bulan",
        }
    }
}

impl fmt::Display for TemporalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bounds() {
        assert_eq!(TemporalKey::Hour.max_keys(), 24);
        assert_eq!(TemporalKey::DayOfWeek.max_keys(), 7);
        assert_eq!(TemporalKey::Month.max_keys(), 12);
    }

    #[test]
    fn test_display_keys() {
        assert_eq!(TemporalKey::Hour.display_key(7), "07:00");
        assert_eq!(TemporalKey::DayOfWeek.display_key(0), "Senin");
        assert_eq!(TemporalKey::DayOfWeek.display_key(6), "Minggu");
        assert_eq!(TemporalKey::Month.display_key(1), "Jan");
        assert_eq!(TemporalKey::Month.display_key(12), "Des");
        assert_eq!(TemporalKey::Month.display_key(13), "13");
        assert_eq!(TemporalKey::DayOfWeek.display_key(-1), "-1");
    }
}
