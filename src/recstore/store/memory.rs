use super::RecordBackend;
use crate::error::{RecordStoreError, Result};
use std::io;

/// In-memory backend for tests. Can be told to fail every write.
#[derive(Debug, Default, Clone)]
pub struct MemBackend {
    data: Vec<u8>,
    fail_writes: bool,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<Vec<u8>>) -> Self {
        Self {
            data: content.into(),
            fail_writes: false,
        }
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn content(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

impl RecordBackend for MemBackend {
    fn len(&self) -> Result<u64> {
        Ok(self.data.len() as u64)
    }

    fn read_all(&mut self) -> Result<Vec<u8>> {
        Ok(self.data.clone())
    }

    fn overwrite(&mut self, bytes: &[u8]) -> Result<()> {
        if self.fail_writes {
            return Err(RecordStoreError::StoreWrite(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "writes disabled",
            )));
        }
        self.data.clear();
        self.data.extend_from_slice(bytes);
        Ok(())
    }
}

// --- Test Fixtures ---
