use crate::commands::{position_of, CmdResult};
use crate::error::Result;
use crate::store::{RecordBackend, RecordStore};
use tracing::{debug, warn};

/// Remove the first record with `id`, keeping the order of the rest.
///
/// A failed write after a successful removal is logged and otherwise ignored;
/// the command still succeeds. A missing id is reported as a message, and the
/// store is left untouched.
pub fn run<B: RecordBackend>(store: &mut RecordStore<B>, id: &str) -> Result<CmdResult> {
    let mut records = store.load()?;
    let mut result = CmdResult::default();

    match position_of(&records, id) {
        Some(pos) => {
            records.remove(pos);
            if let Err(e) = store.save(&records) {
                warn!(%id, error = %e, "record removed but store was not rewritten");
            } else {
                debug!(%id, remaining = records.len(), "record removed");
            }
        }
        None => result.add_message(format!("Item with id {} not found", id)),
    }

    Ok(result)
}
