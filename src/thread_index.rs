//! Decoded Thread-Index values

use crate::filetime::FileTime;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Byte layout the header block's timestamp was read with
pub enum Layout {
    /// Documented layout: byte 0 is reserved, bytes 1-5 are the top of the FILETIME
    Current,
    /// Older Outlook versions: bytes 0-5 are the top of the FILETIME
    Legacy,
}

impl Layout {
    /// Read the FILETIME stored in a header block using this layout
    pub fn filetime(self, data: &[u8]) -> FileTime {
        let range = match self {
            Layout::Current => 1..6,
            Layout::Legacy => 0..6,
        };
        FileTime::from_high_bytes(data.get(range).unwrap_or_default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Conversation identifier and creation time from a Thread-Index header
pub struct ThreadIndex {
    /// Conversation GUID as 32 lowercase hex characters
    pub id: String,
    /// Approximate creation time of the conversation, in unix seconds
    pub ts: i64,
    guid: [u8; 16],
    layout: Layout,
    child_blocks: usize,
}

impl ThreadIndex {
    pub(crate) fn new(
        guid: [u8; 16],
        filetime: FileTime,
        layout: Layout,
        child_blocks: usize,
    ) -> ThreadIndex {
        ThreadIndex {
            id: hex::encode(guid),
            ts: filetime.unix_timestamp(),
            guid,
            layout,
            child_blocks,
        }
    }

    /// The conversation GUID, in the byte order it appears in the header
    pub fn guid(&self) -> Uuid {
        Uuid::from_bytes(self.guid)
    }

    /// Creation time as a UTC datetime
    pub fn created(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.ts, 0)
    }

    /// Which layout the creation time was read with
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Number of complete child blocks after the header block.
    ///
    /// Outlook appends one block per reply or forward.
    pub fn child_blocks(&self) -> usize {
        self.child_blocks
    }
}
