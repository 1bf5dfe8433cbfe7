//! Typed scheme metadata (`info.json`).
//!
//! Each metadata type implements [`Validate`] with field-level checks.
//! Unknown fields are rejected at deserialization time.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::Checksum;
use crate::utils::validation::is_valid_identifier;

#[derive(Error, Debug)]
pub enum InfoError {
    #[error("Failed to read scheme metadata: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse scheme metadata: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid metadata field '{field}': {message}")]
    InvalidField { field: String, message: String },
}

impl InfoError {
    fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Field-level validation of a metadata value
pub trait Validate {
    /// # Errors
    ///
    /// Returns `InfoError::InvalidField` naming the first offending field.
    fn validate(&self) -> Result<(), InfoError>;
}

/// Publication status of a scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemeStatus {
    #[default]
    Published,
    Deprecated,
    Draft,
}

/// Supplier of the primers or a kit containing them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Vendor {
    pub organisation_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_page: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kit_name: Option<String>,
}

impl Validate for Vendor {
    fn validate(&self) -> Result<(), InfoError> {
        if self.organisation_name.trim().is_empty() {
            return Err(InfoError::invalid(
                "vendors.organisation_name",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

/// A reference region to mask, zero-based half-open
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Mask {
    pub reference: String,
    pub name: String,
    pub start: u64,
    pub end: u64,
}

impl Validate for Mask {
    fn validate(&self) -> Result<(), InfoError> {
        if self.reference.trim().is_empty() {
            return Err(InfoError::invalid("masks.reference", "must not be empty"));
        }
        if self.start < 1 || self.end < 1 {
            return Err(InfoError::invalid(
                "masks",
                format!("'{}' coordinates must be at least 1", self.name),
            ));
        }
        if self.end <= self.start {
            return Err(InfoError::invalid(
                "masks",
                format!("'{}' end must be greater than start", self.name),
            ));
        }
        Ok(())
    }
}

/// Descriptive metadata for one primer scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemeInfo {
    pub schema_version: String,
    pub name: String,
    pub amplicon_size: u64,
    pub version: String,
    pub organism: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition_url: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    #[serde(default)]
    pub status: SchemeStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derived_from: Option<String>,

    #[serde(default)]
    pub developers: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vendors: Vec<Vendor>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub masks: Vec<Mask>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primer_checksum: Option<Checksum>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_checksum: Option<Checksum>,
}

impl SchemeInfo {
    /// Bundle directory name, `{name}-{version}`
    #[must_use]
    pub fn bundle_name(&self) -> String {
        format!("{}-{}", self.name, self.version)
    }
}

impl Validate for SchemeInfo {
    fn validate(&self) -> Result<(), InfoError> {
        if self.schema_version.trim().is_empty() {
            return Err(InfoError::invalid("schema_version", "must not be empty"));
        }
        if !is_valid_identifier(&self.name) {
            return Err(InfoError::invalid(
                "name",
                format!("'{}' must match [a-z0-9_.-]+", self.name),
            ));
        }
        if !is_valid_identifier(&self.version) {
            return Err(InfoError::invalid(
                "version",
                format!("'{}' must match [a-z0-9_.-]+", self.version),
            ));
        }
        if self.amplicon_size < 1 {
            return Err(InfoError::invalid("amplicon_size", "must be at least 1"));
        }
        if self.organism.trim().is_empty() {
            return Err(InfoError::invalid("organism", "must not be empty"));
        }
        for vendor in &self.vendors {
            vendor.validate()?;
        }
        for mask in &self.masks {
            mask.validate()?;
        }
        Ok(())
    }
}

/// Parse and validate scheme metadata from JSON text.
///
/// # Errors
///
/// Returns `InfoError::Json` for malformed JSON, missing required fields or
/// unknown fields, and `InfoError::InvalidField` for failed field checks.
pub fn parse_info_json(text: &str) -> Result<SchemeInfo, InfoError> {
    let info: SchemeInfo = serde_json::from_str(text)?;
    info.validate()?;
    Ok(info)
}

/// Read, parse and validate an `info.json` file.
///
/// # Errors
///
/// Returns `InfoError::Io` if the file cannot be read, or any error from
/// [`parse_info_json`].
pub fn load_info_file(path: &Path) -> Result<SchemeInfo, InfoError> {
    let content = std::fs::read_to_string(path)?;
    parse_info_json(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INFO: &str = r#"{
        "schema_version": "1.0.0-alpha",
        "name": "artic-sars-cov-2",
        "amplicon_size": 400,
        "version": "v4.1",
        "organism": "sars-cov-2",
        "developers": ["ARTIC network"],
        "vendors": [{"organisation_name": "IDT", "kit_name": "ARTIC v4.1"}],
        "masks": [{"reference": "MN908947.3", "name": "ends", "start": 1, "end": 54}]
    }"#;

    #[test]
    fn test_parse_info() {
        let info = parse_info_json(INFO).unwrap();
        assert_eq!(info.name, "artic-sars-cov-2");
        assert_eq!(info.amplicon_size, 400);
        assert_eq!(info.status, SchemeStatus::Published);
        assert_eq!(info.vendors[0].kit_name.as_deref(), Some("ARTIC v4.1"));
        assert_eq!(info.bundle_name(), "artic-sars-cov-2-v4.1");
        assert!(info.primer_checksum.is_none());
    }

    #[test]
    fn test_missing_field() {
        let text = INFO.replace("\"organism\": \"sars-cov-2\",", "");
        assert!(matches!(parse_info_json(&text), Err(InfoError::Json(_))));
    }

    #[test]
    fn test_extra_field() {
        let text = INFO.replace("\"amplicon_size\"", "\"colour\": \"red\", \"amplicon_size\"");
        assert!(matches!(parse_info_json(&text), Err(InfoError::Json(_))));
    }

    #[test]
    fn test_invalid_name() {
        let text = INFO.replace("artic-sars-cov-2", "ARTIC SARS-CoV-2");
        assert!(matches!(
            parse_info_json(&text),
            Err(InfoError::InvalidField { field, .. }) if field == "name"
        ));
    }

    #[test]
    fn test_invalid_amplicon_size() {
        let text = INFO.replace("400", "0");
        assert!(matches!(
            parse_info_json(&text),
            Err(InfoError::InvalidField { field, .. }) if field == "amplicon_size"
        ));
    }

    #[test]
    fn test_invalid_mask() {
        let text = INFO.replace("\"start\": 1", "\"start\": 60");
        assert!(matches!(
            parse_info_json(&text),
            Err(InfoError::InvalidField { field, .. }) if field == "masks"
        ));
    }

    #[test]
    fn test_invalid_checksum() {
        let text = INFO.replace(
            "\"version\"",
            "\"primer_checksum\": \"primaschema:1234\", \"version\"",
        );
        assert!(matches!(parse_info_json(&text), Err(InfoError::Json(_))));
    }

    #[test]
    fn test_status() {
        let text = INFO.replace("\"version\"", "\"status\": \"DEPRECATED\", \"version\"");
        assert_eq!(
            parse_info_json(&text).unwrap().status,
            SchemeStatus::Deprecated
        );
    }
}
