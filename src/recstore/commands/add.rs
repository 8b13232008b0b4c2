use crate::commands::CmdResult;
use crate::error::{RecordStoreError, Result};
use crate::model::Record;
use crate::store::{RecordBackend, RecordStore};
use tracing::debug;

/// Parse `item` as a record and append it to the end of the collection.
/// Duplicate ids are not checked.
pub fn run<B: RecordBackend>(store: &mut RecordStore<B>, item: &str) -> Result<CmdResult> {
    let record: Record =
        serde_json::from_str(item).map_err(RecordStoreError::InvalidRecordFormat)?;

    let mut records = store.load()?;
    debug!(id = %record.id, "record added");
    records.push(record);
    store.save(&records)?;

    Ok(CmdResult::default())
}
