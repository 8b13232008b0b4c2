//! # API Facade
//!
//! Single entry point for running one operation against a record store.
//!
//! [`RecordApi`] is a thin dispatcher over `commands/*.rs`, generic over the
//! [`RecordBackend`] so it runs the same against a file or a memory buffer.
//! [`perform`] is what the binary calls: validate the raw arguments, open the
//! backing file, run the operation, then render the [`CmdResult`] onto the
//! output sink.
//!
//! ## Output
//!
//! | operation  | written to the sink                                  |
//! |------------|------------------------------------------------------|
//! | `list`     | the raw file bytes                                   |
//! | `add`      | nothing                                              |
//! | `findById` | the matching record as a JSON object, or nothing     |
//! | `remove`   | nothing, or `Item with id <id> not found`            |
//!
//! Nothing is followed by a newline.

use crate::commands::{self, CmdResult};
use crate::config::{Arguments, StoreConfig};
use crate::error::{RecordStoreError, Result};
use crate::model::Operation;
use crate::store::fs::FileBackend;
use crate::store::{RecordBackend, RecordStore};
use std::io::Write;
use tracing::debug;

pub struct RecordApi<B: RecordBackend> {
    store: RecordStore<B>,
}

impl<B: RecordBackend> RecordApi<B> {
    pub fn new(backend: B) -> Self {
        Self {
            store: RecordStore::new(backend),
        }
    }

    pub fn add(&mut self, item: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.store, item)
    }

    pub fn list(&mut self) -> Result<CmdResult> {
        commands::list::run(&mut self.store)
    }

    pub fn find_by_id(&mut self, id: &str) -> Result<CmdResult> {
        commands::find::run(&mut self.store, id)
    }

    pub fn remove(&mut self, id: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    /// Run whichever operation `config` names.
    pub fn dispatch(&mut self, config: &StoreConfig) -> Result<CmdResult> {
        debug!(operation = %config.operation, "dispatching");
        match config.operation {
            Operation::Add => self.add(&config.item),
            Operation::List => self.list(),
            Operation::FindById => self.find_by_id(&config.id),
            Operation::Remove => self.remove(&config.id),
        }
    }
}

/// Validate `args`, run the operation against the named file and write its
/// output to `out`. The file is closed before this returns.
pub fn perform<W: Write>(args: &Arguments, out: &mut W) -> Result<()> {
    let config = args.validate()?;
    let backend = FileBackend::open(&config.file_name)?;
    let result = RecordApi::new(backend).dispatch(&config)?;
    render(&result, out)
}

/// Write a command's output to the sink.
pub fn render<W: Write>(result: &CmdResult, out: &mut W) -> Result<()> {
    if let Some(raw) = &result.raw {
        out.write_all(raw).map_err(RecordStoreError::Output)?;
    }

    for record in &result.listed_records {
        serde_json::to_writer(&mut *out, record)
            .map_err(|e| RecordStoreError::Output(e.into()))?;
    }

    for message in &result.messages {
        out.write_all(message.as_bytes())
            .map_err(RecordStoreError::Output)?;
    }

    out.flush().map_err(RecordStoreError::Output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crate::store::memory::MemBackend;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn run_op(operation: &str, file: &Path, item: &str, id: &str) -> Result<String> {
        let args = Arguments::new(operation, file.to_string_lossy(), item, id);
        let mut out = Vec::new();
        perform(&args, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn dispatch_routes_each_operation() {
        let mut api = RecordApi::new(MemBackend::new());
        let config = |operation: Operation, item: &str, id: &str| StoreConfig {
            operation,
            file_name: "unused".into(),
            item: item.to_string(),
            id: id.to_string(),
        };

        let added = api
            .dispatch(&config(Operation::Add, r#"{"id":"1"}"#, ""))
            .unwrap();
        assert!(added.raw.is_none() && added.listed_records.is_empty());

        let listed = api.dispatch(&config(Operation::List, "", "")).unwrap();
        assert_eq!(listed.raw.as_deref(), Some(&br#"[{"id":"1"}]"#[..]));

        let found = api.dispatch(&config(Operation::FindById, "", "1")).unwrap();
        assert_eq!(found.listed_records, vec![Record::new("1", "", 0)]);

        let removed = api.dispatch(&config(Operation::Remove, "", "1")).unwrap();
        assert!(removed.messages.is_empty());

        let listed = api.dispatch(&config(Operation::List, "", "")).unwrap();
        assert_eq!(listed.raw.as_deref(), Some(&b"[]"[..]));
    }

    #[test]
    fn render_writes_record_as_object() {
        let result =
            CmdResult::default().with_listed_records(vec![Record::new("1", "a@b.com", 30)]);
        let mut out = Vec::new();
        render(&result, &mut out).unwrap();
        assert_eq!(out, br#"{"id":"1","email":"a@b.com","age":30}"#);
    }

    #[test]
    fn render_of_empty_result_writes_nothing() {
        let mut out = Vec::new();
        render(&CmdResult::default(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn validation_happens_before_file_is_created() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("db.json");

        let err = run_op("add", &file, "", "").unwrap_err();
        assert!(matches!(err, RecordStoreError::MissingItem));
        assert!(!file.exists());

        let err = run_op("purge", &file, "", "").unwrap_err();
        assert!(matches!(err, RecordStoreError::UnknownOperation(_)));
        assert!(!file.exists());
    }

    #[test]
    fn add_then_find_returns_equal_record() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("db.json");

        let added = run_op("add", &file, r#"{"id":"1","email":"a@b.com","age":30}"#, "").unwrap();
        assert!(added.is_empty());
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            r#"[{"id":"1","email":"a@b.com","age":30}]"#
        );

        let found = run_op("findById", &file, "", "1").unwrap();
        assert_eq!(found, r#"{"id":"1","email":"a@b.com","age":30}"#);
    }

    #[test]
    fn list_on_fresh_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("fresh.json");

        assert_eq!(run_op("list", &file, "", "").unwrap(), "");
        assert!(file.exists());
    }

    #[test]
    fn remove_missing_id_reports_and_keeps_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("db.json");
        run_op("add", &file, r#"{"id":"1","email":"a@b.com","age":30}"#, "").unwrap();
        let before = fs::read(&file).unwrap();

        let out = run_op("remove", &file, "", "2").unwrap();
        assert_eq!(out, "Item with id 2 not found");
        assert_eq!(fs::read(&file).unwrap(), before);
    }

    #[test]
    fn remove_then_find_is_empty() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("db.json");
        run_op("add", &file, r#"{"id":"1"}"#, "").unwrap();
        run_op("add", &file, r#"{"id":"2"}"#, "").unwrap();

        assert_eq!(run_op("remove", &file, "", "1").unwrap(), "");
        assert_eq!(run_op("findById", &file, "", "1").unwrap(), "");
        assert_eq!(fs::read_to_string(&file).unwrap(), r#"[{"id":"2"}]"#);
    }

    #[test]
    fn unopenable_file_is_file_access_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("no-such-dir").join("db.json");

        let err = run_op("list", &file, "", "").unwrap_err();
        assert!(matches!(err, RecordStoreError::FileAccess(_)));
    }
}
