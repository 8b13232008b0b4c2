//! # Storage Layer
//!
//! A record collection lives as one JSON array inside one backing medium. The
//! [`RecordBackend`] trait covers the raw byte access; [`RecordStore`] sits on top
//! and owns the JSON codec, so the commands never see bytes except for `list`.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: an open read-write file handle, released on drop
//! - [`memory::MemBackend`]: a byte buffer for tests, with write-failure injection
//!
//! ## Storage Format
//!
//! ```text
//! [{"id":"1","email":"a@b.com","age":30},{"id":"2"}]
//! ```
//!
//! Compact JSON with no trailing newline. A zero-length medium is an empty
//! collection. Only the first JSON value is decoded; anything after it is
//! ignored, and a leading `null` reads as an empty collection. A `null`
//! element reads as an empty record.
//!
//! There is no locking. Two processes mutating the same file at once can lose
//! one of the writes.

use crate::error::{RecordStoreError, Result};
use crate::model::{Record, RecordCollection};
use serde::de::Error as _;
use tracing::debug;

pub mod fs;
pub mod memory;

/// Raw byte access to wherever the collection is kept.
pub trait RecordBackend {
    /// Size of the stored content in bytes.
    fn len(&self) -> Result<u64>;

    /// Read the whole content from the start.
    fn read_all(&mut self) -> Result<Vec<u8>>;

    /// Replace the whole content: truncate, rewind, write.
    fn overwrite(&mut self, bytes: &[u8]) -> Result<()>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

pub struct RecordStore<B: RecordBackend> {
    backend: B,
}

impl<B: RecordBackend> RecordStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The stored bytes, unparsed.
    pub fn raw(&mut self) -> Result<Vec<u8>> {
        self.backend.read_all()
    }

    pub fn load(&mut self) -> Result<RecordCollection> {
        if self.backend.is_empty()? {
            debug!("store is empty");
            return Ok(RecordCollection::new());
        }

        let bytes = self.backend.read_all()?;
        let records = decode_collection(&bytes)?;
        debug!(count = records.len(), "loaded records");
        Ok(records)
    }

    pub fn save(&mut self, records: &[Record]) -> Result<()> {
        let bytes =
            serde_json::to_vec(records).map_err(|e| RecordStoreError::StoreWrite(e.into()))?;
        self.backend.overwrite(&bytes)?;
        debug!(count = records.len(), bytes = bytes.len(), "saved records");
        Ok(())
    }
}

fn decode_collection(bytes: &[u8]) -> Result<RecordCollection> {
    let mut values =
        serde_json::Deserializer::from_slice(bytes).into_iter::<Option<RecordCollection>>();

    match values.next() {
        Some(Ok(records)) => Ok(records.unwrap_or_default()),
        Some(Err(e)) => Err(RecordStoreError::CorruptStore(e)),
        None => Err(RecordStoreError::CorruptStore(serde_json::Error::custom(
            "EOF while parsing a value",
        ))),
    }
}
