//! Record model for rowsync.
//!
//! A record is one row of a param table: a numeric row ID and the
//! human-readable name attached to it. Both stores reduce to ordered
//! sequences of records before any merging happens.

use serde::{Deserialize, Serialize};

/// A single named row of a param table.
///
/// Row IDs are not unique within a table: the games sometimes repeat an ID
/// for consecutive distinct rows, so records are always handled as ordered
/// sequences and compared by position.
///
/// Serializes with Smithbox's field names (`Index`, `ID`, `Name`) since the
/// aggregate row-name document is the only place records are stored as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Position of the row in the Smithbox document.
    ///
    /// Only meaningful for the aggregate format; line-format rows carry 0.
    #[serde(rename = "Index", default)]
    pub index: i64,

    /// The row ID
    #[serde(rename = "ID")]
    pub id: i64,

    /// The row name. Empty means no name has been assigned.
    #[serde(rename = "Name", default)]
    pub name: String,
}

impl Record {
    /// Create a record without an ordering index.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            index: 0,
            id,
            name: name.into(),
        }
    }

    /// Create a record at a specific position of an aggregate table.
    pub fn with_index(index: i64, id: i64, name: impl Into<String>) -> Self {
        Self {
            index,
            id,
            name: name.into(),
        }
    }

    /// Whether this row has no name assigned.
    #[must_use]
    pub fn is_unnamed(&self) -> bool {
        self.name.is_empty()
    }
}

/// Whether any record in the sequence carries a name.
///
/// Tables without a single name are never written to disk.
#[must_use]
pub fn has_any_name(records: &[Record]) -> bool {
    records.iter().any(|r| !r.is_unnamed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_smithbox_field_names() {
        let record = Record::with_index(3, 1000, "Dagger");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"Index":3,"ID":1000,"Name":"Dagger"}"#);
    }

    #[test]
    fn test_record_deserializes_missing_name_as_empty() {
        let record: Record = serde_json::from_str(r#"{"Index":0,"ID":7}"#).unwrap();
        assert_eq!(record.id, 7);
        assert!(record.is_unnamed());
    }

    #[test]
    fn test_has_any_name() {
        assert!(!has_any_name(&[]));
        assert!(!has_any_name(&[Record::new(1, ""), Record::new(2, "")]));
        assert!(has_any_name(&[Record::new(1, ""), Record::new(2, "Club")]));
    }
}
