use crate::commands::{position_of, CmdResult};
use crate::error::Result;
use crate::store::{RecordBackend, RecordStore};
use tracing::debug;

/// Look up the first record with `id`. A miss yields an empty listing, not an error.
pub fn run<B: RecordBackend>(store: &mut RecordStore<B>, id: &str) -> Result<CmdResult> {
    let mut records = store.load()?;

    let listed = match position_of(&records, id) {
        Some(pos) => vec![records.swap_remove(pos)],
        None => {
            debug!(%id, "no record with this id");
            Vec::new()
        }
    };

    Ok(CmdResult::default().with_listed_records(listed))
}
