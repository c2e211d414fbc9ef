//! Windows FILETIME values as stored in a Thread-Index header block

use chrono::{DateTime, Utc};

/// Number of FILETIME ticks (100ns intervals) in one second
pub const TICKS_PER_SECOND: u64 = 10_000_000;

/// Seconds between the FILETIME epoch (1601-01-01) and the unix epoch
pub const UNIX_EPOCH_OFFSET_SECONDS: i64 = 11_644_473_600;

const UNIX_EPOCH_TICKS: u64 = UNIX_EPOCH_OFFSET_SECONDS as u64 * TICKS_PER_SECOND;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A count of 100 nanosecond ticks since 1601-01-01 00:00:00 UTC
pub struct FileTime(u64);

impl FileTime {
    /// Create a FILETIME from a raw tick count
    pub fn from_ticks(ticks: u64) -> FileTime {
        FileTime(ticks)
    }

    /// Build a FILETIME from its most significant bytes.
    ///
    /// Thread-Index headers only store the top 5 (or, for old Outlook
    /// versions, 6) bytes of the time. The missing low order bytes are zero,
    /// and anything past 8 bytes is ignored.
    pub fn from_high_bytes(high: &[u8]) -> FileTime {
        let mut bytes = [0u8; 8];
        let copy_size = usize::min(bytes.len(), high.len());
        bytes[..copy_size].copy_from_slice(&high[..copy_size]);
        FileTime(u64::from_be_bytes(bytes))
    }

    /// Raw tick count
    pub fn ticks(self) -> u64 {
        self.0
    }

    /// Seconds since the unix epoch, truncated toward zero
    pub fn unix_timestamp(self) -> i64 {
        // ticks / TICKS_PER_SECOND is at most ~1.8e12, well inside i64
        let whole = (self.0 / TICKS_PER_SECOND) as i64 - UNIX_EPOCH_OFFSET_SECONDS;
        let has_fraction = self.0 % TICKS_PER_SECOND != 0;
        if whole < 0 && has_fraction {
            whole + 1
        } else {
            whole
        }
    }

    /// Whether this time is strictly before 1970-01-01 00:00:00 UTC
    pub fn is_before_unix_epoch(self) -> bool {
        self.0 < UNIX_EPOCH_TICKS
    }

    /// Whether this time is strictly later than `unix_seconds`, including
    /// any sub-second part
    pub fn is_after_unix(self, unix_seconds: i64) -> bool {
        let limit =
            (i128::from(unix_seconds) + i128::from(UNIX_EPOCH_OFFSET_SECONDS))
                * i128::from(TICKS_PER_SECOND);
        i128::from(self.0) > limit
    }

    /// This time as a UTC datetime, if chrono can represent it
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        let seconds = (self.0 / TICKS_PER_SECOND) as i64 - UNIX_EPOCH_OFFSET_SECONDS;
        let nanos = (self.0 % TICKS_PER_SECOND) as u32 * 100;
        DateTime::from_timestamp(seconds, nanos)
    }
}

impl From<u64> for FileTime {
    fn from(ticks: u64) -> FileTime {
        FileTime(ticks)
    }
}
