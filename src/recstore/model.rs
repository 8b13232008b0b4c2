use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single user entry.
///
/// Every field is optional on the wire: empty strings and a zero age are left
/// out when encoding. Decoding is lenient, see the `Deserialize` impl.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,

    #[serde(skip_serializing_if = "is_zero")]
    pub age: i64,
}

impl Record {
    pub fn new(id: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            age,
        }
    }
}

fn is_zero(n: &i64) -> bool {
    *n == 0
}

/// Decodes a record the forgiving way:
///
/// - `null` is an empty record
/// - keys match case-insensitively, unknown keys are skipped
/// - a repeated key overwrites the earlier value
/// - a `null` value leaves the field as it was
impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a record object or null")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Record, E> {
        Ok(Record::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Record, E> {
        Ok(Record::default())
    }

    fn visit_map<A>(self, mut map: A) -> Result<Record, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut record = Record::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("id") {
                if let Some(id) = map.next_value()? {
                    record.id = id;
                }
            } else if key.eq_ignore_ascii_case("email") {
                if let Some(email) = map.next_value()? {
                    record.email = email;
                }
            } else if key.eq_ignore_ascii_case("age") {
                if let Some(age) = map.next_value()? {
                    record.age = age;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(record)
    }
}

/// The ordered set of records held in one backing file.
pub type RecordCollection = Vec<Record>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    List,
    FindById,
    Remove,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::List,
        Operation::FindById,
        Operation::Remove,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::List => "list",
            Operation::FindById => "findById",
            Operation::Remove => "remove",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}
