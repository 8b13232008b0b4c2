use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordStoreError {
    #[error("-fileName flag has to be specified")]
    MissingFileName,

    #[error("-operation flag has to be specified")]
    MissingOperation,

    #[error("Operation {0} not allowed!")]
    UnknownOperation(String),

    #[error("-item flag has to be specified")]
    MissingItem,

    #[error("-id flag has to be specified")]
    MissingId,

    #[error("Cannot access store file: {0}")]
    FileAccess(#[source] std::io::Error),

    #[error("Invalid record: {0}")]
    InvalidRecordFormat(#[source] serde_json::Error),

    #[error("Store file is not a valid record array: {0}")]
    CorruptStore(#[source] serde_json::Error),

    #[error("Failed to write store file: {0}")]
    StoreWrite(#[source] std::io::Error),

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RecordStoreError>;
