use crate::error::{RecordStoreError, Result};
use crate::model::Operation;
use std::path::PathBuf;

/// Raw flag values as they come off the command line. Absent flags are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    pub operation: String,
    pub file_name: String,
    pub item: String,
    pub id: String,
}

/// A checked set of arguments, ready to run against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub operation: Operation,
    pub file_name: PathBuf,
    pub item: String,
    pub id: String,
}

impl Arguments {
    pub fn new(
        operation: impl Into<String>,
        file_name: impl Into<String>,
        item: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            operation: operation.into(),
            file_name: file_name.into(),
            item: item.into(),
            id: id.into(),
        }
    }

    /// Checks the flag combination. The first failing rule wins, in this order:
    /// file name, operation present, operation known, then the per-operation
    /// `item` / `id` requirement.
    pub fn validate(&self) -> Result<StoreConfig> {
        if self.file_name.is_empty() {
            return Err(RecordStoreError::MissingFileName);
        }

        if self.operation.is_empty() {
            return Err(RecordStoreError::MissingOperation);
        }

        let operation: Operation = self
            .operation
            .parse()
            .map_err(RecordStoreError::UnknownOperation)?;

        match operation {
            Operation::Add if self.item.is_empty() => return Err(RecordStoreError::MissingItem),
            Operation::Remove | Operation::FindById if self.id.is_empty() => {
                return Err(RecordStoreError::MissingId)
            }
            _ => {}
        }

        Ok(StoreConfig {
            operation,
            file_name: PathBuf::from(&self.file_name),
            item: self.item.clone(),
            id: self.id.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(operation: &str, file_name: &str, item: &str, id: &str) -> Arguments {
        Arguments::new(operation, file_name, item, id)
    }

    #[test]
    fn missing_file_name_is_checked_first() {
        let err = Arguments::default().validate().unwrap_err();
        assert!(matches!(err, RecordStoreError::MissingFileName));

        let err = args("bogus", "", "", "").validate().unwrap_err();
        assert!(matches!(err, RecordStoreError::MissingFileName));
    }

    #[test]
    fn missing_operation_comes_before_item_and_id() {
        let err = args("", "db.json", "", "").validate().unwrap_err();
        assert!(matches!(err, RecordStoreError::MissingOperation));
        assert_eq!(err.to_string(), "-operation flag has to be specified");
    }

    #[test]
    fn rejects_unknown_operation_with_its_name() {
        let err = args("drop", "db.json", "", "").validate().unwrap_err();
        match err {
            RecordStoreError::UnknownOperation(ref op) => assert_eq!(op, "drop"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.to_string(), "Operation drop not allowed!");
    }

    #[test]
    fn add_requires_item() {
        let err = args("add", "db.json", "", "1").validate().unwrap_err();
        assert!(matches!(err, RecordStoreError::MissingItem));
    }

    #[test]
    fn find_and_remove_require_id() {
        for op in ["findById", "remove"] {
            let err = args(op, "db.json", "{}", "").validate().unwrap_err();
            assert!(matches!(err, RecordStoreError::MissingId), "{op}");
        }
    }

    #[test]
    fn item_json_is_not_checked_here() {
        let config = args("add", "db.json", "not json", "").validate().unwrap();
        assert_eq!(config.operation, Operation::Add);
        assert_eq!(config.item, "not json");
    }

    #[test]
    fn list_needs_only_file_name() {
        let config = args("list", "db.json", "", "").validate().unwrap();
        assert_eq!(config.operation, Operation::List);
        assert_eq!(config.file_name, PathBuf::from("db.json"));
    }
}
