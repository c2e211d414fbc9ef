//! Thread-Index header decoding

use crate::clock::{Clock, SystemClock};
use crate::errors::DecodeError;
use crate::filetime::FileTime;
use crate::thread_index::{Layout, ThreadIndex};
use crate::utils;
use chrono::Duration;
use log::warn;

type Result<T> = std::result::Result<T, DecodeError>;

/// Length of the header block: reserved byte, FILETIME and GUID
pub const HEADER_BLOCK_LEN: usize = 22;
/// Length of each child block appended for replies and forwards
pub const CHILD_BLOCK_LEN: usize = 5;
/// Default limit on how far in the future a timestamp may be (ten 365 day years)
pub const DEFAULT_FUTURE_HORIZON_SECONDS: i64 = 60 * 60 * 24 * 365 * 10;

const GUID_OFFSET: usize = 6;

#[derive(Debug, Clone)]
/// Decodes Outlook `Thread-Index` headers
///
/// Newer Outlook versions store the creation time in bytes 1-5 of the header
/// block, older ones in bytes 0-5. The decoder tries the newer layout first
/// and falls back to the older one when the result is before 1970 or further
/// in the future than the configured horizon.
///
/// ```
/// use thread_index::{FixedClock, Layout, ThreadIndexDecoder};
///
/// let clock = FixedClock::from_timestamp(1_792_368_000).unwrap();
/// let decoder = ThreadIndexDecoder::new().with_clock(clock);
///
/// let index = decoder.decode("AcHVhS4wvQ2Kj8x0TiKUr1ML6wYxJA==").unwrap();
/// assert_eq!(index.id, "bd0d8a8fcc744e2294af530beb063124");
/// assert_eq!(index.ts, 1_017_229_652);
/// assert_eq!(index.layout(), Layout::Legacy);
/// ```
pub struct ThreadIndexDecoder<C = SystemClock> {
    clock: C,
    future_horizon: Duration,
}

impl ThreadIndexDecoder<SystemClock> {
    /// Create a decoder using the system clock and a ten year horizon
    pub fn new() -> ThreadIndexDecoder<SystemClock> {
        ThreadIndexDecoder {
            clock: SystemClock,
            future_horizon: Duration::seconds(DEFAULT_FUTURE_HORIZON_SECONDS),
        }
    }
}

impl Default for ThreadIndexDecoder<SystemClock> {
    fn default() -> Self {
        ThreadIndexDecoder::new()
    }
}

impl<C: Clock> ThreadIndexDecoder<C> {
    /// Use a different source for the current time
    pub fn with_clock<D: Clock>(self, clock: D) -> ThreadIndexDecoder<D> {
        ThreadIndexDecoder {
            clock,
            future_horizon: self.future_horizon,
        }
    }

    /// Change how far past the current time a timestamp may be before
    /// the legacy layout is used instead
    pub fn with_future_horizon(mut self, horizon: Duration) -> Self {
        self.future_horizon = horizon;
        self
    }

    /// How far past the current time a timestamp may be
    pub fn future_horizon(&self) -> Duration {
        self.future_horizon
    }

    /// Decode a header, returning `None` if it isn't a usable Thread-Index.
    ///
    /// Headers that decode to less than a full header block are logged.
    pub fn decode(&self, header: &str) -> Option<ThreadIndex> {
        match self.try_decode(header) {
            Ok(index) => Some(index),
            Err(err @ DecodeError::Truncated(_)) => {
                warn!("Error decoding thread index: {}", err);
                None
            }
            Err(_) => None,
        }
    }

    /// Decode a header, reporting why it couldn't be decoded
    pub fn try_decode(&self, header: &str) -> Result<ThreadIndex> {
        let data = utils::decode_header_base64(header)?;
        let guid: [u8; 16] = data
            .get(GUID_OFFSET..HEADER_BLOCK_LEN)
            .and_then(|bytes| bytes.try_into().ok())
            .ok_or(DecodeError::Truncated(data.len()))?;

        let (layout, filetime) = self.read_filetime(&data);
        let child_blocks = (data.len() - HEADER_BLOCK_LEN) / CHILD_BLOCK_LEN;
        Ok(ThreadIndex::new(guid, filetime, layout, child_blocks))
    }

    fn read_filetime(&self, data: &[u8]) -> (Layout, FileTime) {
        let current = Layout::Current.filetime(data);
        if self.is_plausible(current) {
            return (Layout::Current, current);
        }

        warn!(
            "Thread index timestamp is out of range: {}",
            current.unix_timestamp()
        );
        // Old Outlook versions don't reserve the first byte; the result is used as is
        (Layout::Legacy, Layout::Legacy.filetime(data))
    }

    fn is_plausible(&self, time: FileTime) -> bool {
        let latest = self
            .clock
            .now()
            .timestamp()
            .saturating_add(self.future_horizon.num_seconds());
        !time.is_before_unix_epoch() && !time.is_after_unix(latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    const NOW: i64 = 1_792_368_000;
    const CURRENT_HEADER: &str = "AQHZ8Jw8G2eP0wEjTk2gG9G5g8f0vQ==";

    fn decoder() -> ThreadIndexDecoder<FixedClock> {
        ThreadIndexDecoder::new().with_clock(FixedClock::from_timestamp(NOW).unwrap())
    }

    #[test]
    fn default_horizon_is_ten_years() {
        let decoder = ThreadIndexDecoder::default();
        assert_eq!(decoder.future_horizon().num_seconds(), 315_360_000);
    }

    #[test]
    fn horizon_survives_clock_change() {
        let decoder = ThreadIndexDecoder::new()
            .with_future_horizon(Duration::seconds(5))
            .with_clock(FixedClock::from_timestamp(NOW).unwrap());
        assert_eq!(decoder.future_horizon().num_seconds(), 5);
    }

    #[test]
    fn plausibility_window() {
        let decoder = decoder();
        assert!(decoder.is_plausible(FileTime::from_high_bytes(&[0x01, 0xd9, 0xf0, 0x9c, 0x3c])));
        assert!(!decoder.is_plausible(FileTime::from_ticks(0)));
        assert!(!decoder.is_plausible(FileTime::from_ticks(u64::MAX)));
    }

    #[test]
    fn counts_child_blocks() {
        let index = decoder()
            .try_decode("AQHZ8Jw8G2eP0wEjTk2gG9G5g8f0vREiM0RVESIzRFUBAgM=")
            .unwrap();
        assert_eq!(index.child_blocks(), 2);
        assert_eq!(index.id, "1b678fd301234e4da01bd1b983c7f4bd");
    }

    #[test]
    fn errors() {
        let decoder = decoder();
        assert_eq!(decoder.try_decode(""), Err(DecodeError::Empty));
        assert_eq!(
            decoder.try_decode("AQHZ8Jw8G2eP0wEjTk2gG9G5g8f0"),
            Err(DecodeError::Truncated(21))
        );
        assert!(matches!(
            decoder.try_decode("%%%"),
            Err(DecodeError::Base64(_))
        ));
        assert_eq!(decoder.try_decode(CURRENT_HEADER).unwrap().layout(), Layout::Current);
    }
}
