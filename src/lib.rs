#![deny(missing_docs)]

//! Decode Microsoft Outlook `Thread-Index` message headers.
//!
//! Outlook tags each message with a base64 encoded `Thread-Index` header.
//! Its first 22 bytes (the header block) hold the approximate time the
//! conversation started and a GUID shared by every message in the
//! conversation. Each reply or forward appends a further 5 byte child block.
//!
//! The main types in this crate are:
//!
//! * [`ThreadIndexDecoder`] which decodes header values
//! * [`ThreadIndex`] which holds the decoded conversation id and time
//!
//! # Decoding a header
//!
//! The [`decode`] function decodes a header with the default settings,
//! returning `None` for anything that isn't a usable Thread-Index.
//!
//! ```
//! let index = thread_index::decode("AQHZ8Jw8G2eP0wEjTk2gG9G5g8f0vQ==").unwrap();
//!
//! assert_eq!(index.id, "1b678fd301234e4da01bd1b983c7f4bd");
//! assert_eq!(index.ts, 1_695_748_179);
//! assert!(thread_index::decode("").is_none());
//! ```
//!
//! Use [`try_decode`] to find out why a header was rejected.
//!
//! # Older Outlook versions
//!
//! Older versions of Outlook store one more byte of the creation time,
//! where newer versions leave a reserved byte. Both look the same, so a
//! decoded time before 1970 or more than ten years in the future is taken
//! as a sign of the older layout and the time is read again that way.
//! A warning is logged through the [`log`](https://docs.rs/log) facade when
//! this happens.
//!
//! The current time used for that check comes from a [`Clock`], which can be
//! replaced with [`ThreadIndexDecoder::with_clock`]:
//!
//! ```
//! use thread_index::{FixedClock, ThreadIndexDecoder};
//!
//! let clock = FixedClock::from_timestamp(1_792_368_000).unwrap();
//! let decoder = ThreadIndexDecoder::new().with_clock(clock);
//! let index = decoder.decode("AdcN4yK1u0Qx2nQqRkKlFm2P0eA3Bw==").unwrap();
//!
//! assert_eq!(index.ts, 1_614_524_722);
//! ```
//!
//! [`Clock`]: crate::Clock
//! [`decode`]: crate::decode
//! [`try_decode`]: crate::try_decode
//! [`ThreadIndex`]: crate::ThreadIndex
//! [`ThreadIndexDecoder`]: crate::ThreadIndexDecoder
//! [`ThreadIndexDecoder::with_clock`]: crate::ThreadIndexDecoder#method.with_clock

pub mod clock;
mod decoder;
pub mod errors;
pub mod filetime;
mod thread_index;
mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use decoder::{
    ThreadIndexDecoder, CHILD_BLOCK_LEN, DEFAULT_FUTURE_HORIZON_SECONDS, HEADER_BLOCK_LEN,
};
pub use errors::DecodeError;
pub use filetime::FileTime;
pub use thread_index::{Layout, ThreadIndex};

/// Decode a Thread-Index header using the system clock
///
/// Returns `None` if the header is empty, not base64, or too short.
pub fn decode(header: &str) -> Option<ThreadIndex> {
    ThreadIndexDecoder::new().decode(header)
}

/// Decode a Thread-Index header using the system clock, reporting why
/// decoding failed
pub fn try_decode(header: &str) -> Result<ThreadIndex, DecodeError> {
    ThreadIndexDecoder::new().try_decode(header)
}
