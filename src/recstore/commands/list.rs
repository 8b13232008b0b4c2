use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{RecordBackend, RecordStore};

/// The store content exactly as stored. Nothing is parsed, so a corrupt file
/// is echoed too.
pub fn run<B: RecordBackend>(store: &mut RecordStore<B>) -> Result<CmdResult> {
    let raw = store.raw()?;
    Ok(CmdResult::default().with_raw(raw))
}
