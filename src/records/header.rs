//! The leading header line of an LJSON download.
//!
//! ```text
//! {"type":"header","version":{"major":1,"minor":0,"patch":0,"dateOfCreation":"2024-01-01"},"records":1,"format":"full"}
//! ```
//!
//! Exactly one header must appear, and it must be the first non-empty line.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::records::schema::{
    integer_at_least, nonempty_string, string, ObjectView, SchemaError, SchemaResult,
};

/// Whether the download replaces the database or patches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadFormat {
    Patch,
    Full,
}

impl DownloadFormat {
    fn from_value(value: &Value, path: &str) -> SchemaResult<Self> {
        match value.as_str() {
            Some("patch") => Ok(DownloadFormat::Patch),
            Some("full") => Ok(DownloadFormat::Full),
            _ => Err(SchemaError::new(
                path,
                format!("Expected one of `\"patch\", \"full\"`, but received: {value}"),
            )),
        }
    }
}

/// Semantic version of the database the download was generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_version: Option<String>,
    pub date_of_creation: String,
}

impl DatabaseVersion {
    fn from_value(value: &Value, path: &str) -> SchemaResult<Self> {
        let object = ObjectView::new(value, path)?;
        Ok(Self {
            major: object.required("major", |v, p| integer_at_least(v, p, 1))?,
            minor: object.required("minor", |v, p| integer_at_least(v, p, 0))?,
            patch: object.required("patch", |v, p| integer_at_least(v, p, 0))?,
            database_version: object.optional("databaseVersion", string)?,
            date_of_creation: object.required("dateOfCreation", nonempty_string)?,
        })
    }

    /// Parses `dateOfCreation` when it is a plain `YYYY-MM-DD` date.
    pub fn creation_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date_of_creation, "%Y-%m-%d").ok()
    }
}

impl std::fmt::Display for DatabaseVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(database_version) = &self.database_version {
            write!(f, " ({database_version})")?;
        }
        Ok(())
    }
}

/// Format and version metadata carried by the first line of a download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "header")]
pub struct HeaderLine {
    pub version: DatabaseVersion,
    /// Number of word records that follow.
    pub records: u64,
    /// Part number for multi-part downloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part: Option<u64>,
    pub format: DownloadFormat,
}

impl HeaderLine {
    /// Validates `value` as a header line.
    pub fn from_value(value: &Value) -> SchemaResult<Self> {
        let object = ObjectView::new(value, "")?;
        object.required("type", |v, p| match v.as_str() {
            Some("header") => Ok(()),
            _ => Err(SchemaError::new(p, format!("Expected the literal `\"header\"`, but received: {v}"))),
        })?;
        Ok(Self {
            version: object.required("version", DatabaseVersion::from_value)?,
            records: object.required("records", |v, p| integer_at_least(v, p, 0))?,
            part: object.optional("part", |v, p| integer_at_least(v, p, 0))?,
            format: object.required("format", DownloadFormat::from_value)?,
        })
    }

    /// Returns the header if `value` is a valid header line, `None` otherwise.
    pub fn recognize(value: &Value) -> Option<Self> {
        if value.get("type").and_then(Value::as_str) != Some("header") {
            return None;
        }
        Self::from_value(value).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_header() -> Value {
        json!({
            "type": "header",
            "version": {
                "major": 1,
                "minor": 2,
                "patch": 3,
                "databaseVersion": "2024-01-15",
                "dateOfCreation": "2024-01-16"
            },
            "records": 212_000,
            "part": 2,
            "format": "patch"
        })
    }

    #[test]
    fn test_header_parsing() {
        let header = HeaderLine::from_value(&sample_header()).unwrap();
        assert_eq!(header.version.major, 1);
        assert_eq!(header.version.minor, 2);
        assert_eq!(header.version.patch, 3);
        assert_eq!(header.version.database_version.as_deref(), Some("2024-01-15"));
        assert_eq!(header.records, 212_000);
        assert_eq!(header.part, Some(2));
        assert_eq!(header.format, DownloadFormat::Patch);
        assert_eq!(header.version.to_string(), "1.2.3 (2024-01-15)");
        assert_eq!(header.version.creation_date(), NaiveDate::from_ymd_opt(2024, 1, 16));
    }

    #[test]
    fn test_minimal_header() {
        let value = json!({
            "type": "header",
            "version": { "major": 1, "minor": 0, "patch": 0, "dateOfCreation": "2024-01-01" },
            "records": 1,
            "format": "full"
        });
        let header = HeaderLine::recognize(&value).unwrap();
        assert_eq!(header.part, None);
        assert_eq!(header.version.database_version, None);
        assert_eq!(header.format, DownloadFormat::Full);
    }

    #[test]
    fn test_header_constraints() {
        let mut value = sample_header();
        value["version"]["major"] = json!(0);
        let err = HeaderLine::from_value(&value).unwrap_err();
        assert_eq!(err.path, "version.major");

        let mut value = sample_header();
        value["format"] = json!("delta");
        assert_eq!(HeaderLine::from_value(&value).unwrap_err().path, "format");

        let mut value = sample_header();
        value["version"]["dateOfCreation"] = json!("");
        assert!(HeaderLine::from_value(&value).is_err());

        let mut value = sample_header();
        value["records"] = json!(-1);
        assert!(HeaderLine::recognize(&value).is_none());

        let mut value = sample_header();
        value["part"] = json!(-1);
        assert_eq!(HeaderLine::from_value(&value).unwrap_err().path, "part");
        assert!(HeaderLine::recognize(&value).is_none());
    }

    #[test]
    fn test_non_header_values_are_not_recognized() {
        assert!(HeaderLine::recognize(&json!({ "id": 1, "r": ["あ"] })).is_none());
        assert!(HeaderLine::recognize(&json!("header")).is_none());
        assert!(HeaderLine::recognize(&json!({ "type": "footer" })).is_none());
    }

    #[test]
    fn test_free_form_creation_date() {
        let mut value = sample_header();
        value["version"]["dateOfCreation"] = json!("January 2024");
        let header = HeaderLine::from_value(&value).unwrap();
        assert_eq!(header.version.creation_date(), None);
    }

    #[test]
    fn test_serialized_header_is_recognized() {
        let header = HeaderLine::from_value(&sample_header()).unwrap();
        let value = serde_json::to_value(&header).unwrap();
        assert_eq!(value["type"], json!("header"));
        assert_eq!(HeaderLine::recognize(&value), Some(header));
    }
}
