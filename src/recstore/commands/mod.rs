use crate::model::Record;

pub mod add;
pub mod find;
pub mod list;
pub mod remove;

/// What a command produced. The API layer decides how it reaches the output sink.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Unparsed store content, echoed as-is.
    pub raw: Option<Vec<u8>>,
    pub listed_records: Vec<Record>,
    pub messages: Vec<String>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn with_raw(mut self, raw: Vec<u8>) -> Self {
        self.raw = Some(raw);
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }
}

/// Position of the first record with the given id.
pub(crate) fn position_of(records: &[Record], id: &str) -> Option<usize> {
    records.iter().position(|record| record.id == id)
}
