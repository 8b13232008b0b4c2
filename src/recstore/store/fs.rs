use super::RecordBackend;
use crate::error::{RecordStoreError, Result};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use tracing::debug;

/// A backing file held open for read-write access. The handle is closed when
/// the backend is dropped.
pub struct FileBackend {
    file: File,
}

impl FileBackend {
    /// Open `path` for reading and writing, creating it empty if it does not exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(RecordStoreError::FileAccess)?;
        debug!(path = %path.display(), "opened store file");
        Ok(Self { file })
    }
}

impl RecordBackend for FileBackend {
    fn len(&self) -> Result<u64> {
        let meta = self.file.metadata().map_err(RecordStoreError::FileAccess)?;
        Ok(meta.len())
    }

    fn read_all(&mut self) -> Result<Vec<u8>> {
        self.file
            .seek(SeekFrom::Start(0))
            .map_err(RecordStoreError::FileAccess)?;
        let mut bytes = Vec::new();
        self.file
            .read_to_end(&mut bytes)
            .map_err(RecordStoreError::FileAccess)?;
        Ok(bytes)
    }

    fn overwrite(&mut self, bytes: &[u8]) -> Result<()> {
        self.file.set_len(0).map_err(RecordStoreError::StoreWrite)?;
        self.file
            .seek(SeekFrom::Start(0))
            .map_err(RecordStoreError::StoreWrite)?;
        self.file
            .write_all(bytes)
            .map_err(RecordStoreError::StoreWrite)?;
        Ok(())
    }
}
