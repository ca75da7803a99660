//! Custard root document, metadata, and the serialization entry points.

use crate::error::{CustardError, Result};
use crate::models::interface::Interface;
use crate::models::tokens::{InputStyle, Language};
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};

/// Document metadata.
///
/// # Validation
///
/// - `custard_version` must be a `major.minor` token such as "1.0"
/// - `display_name` must be non-empty
/// - extension keys must be non-empty and may not shadow the fixed fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    custard_version: String,
    display_name: String,
    #[serde(flatten)]
    extensions: BTreeMap<String, Value>,
}

impl Metadata {
    /// Schema version targeted by default.
    pub const CURRENT_VERSION: &'static str = "1.0";

    const RESERVED_FIELDS: [&'static str; 2] = ["custard_version", "display_name"];

    /// Creates metadata targeting `custard_version`.
    pub fn new(custard_version: impl Into<String>, display_name: impl Into<String>) -> Result<Self> {
        let custard_version = custard_version.into();
        let display_name = display_name.into();

        Self::validate_version(&custard_version)?;
        if display_name.trim().is_empty() {
            return Err(invalid_metadata("display_name", "cannot be empty"));
        }

        Ok(Self {
            custard_version,
            display_name,
            extensions: BTreeMap::new(),
        })
    }

    /// Creates metadata targeting [`Metadata::CURRENT_VERSION`].
    pub fn current(display_name: impl Into<String>) -> Result<Self> {
        Self::new(Self::CURRENT_VERSION, display_name)
    }

    fn validate_version(version: &str) -> Result<()> {
        let well_formed = version.split_once('.').is_some_and(|(major, minor)| {
            !major.is_empty()
                && !minor.is_empty()
                && major.chars().all(|c| c.is_ascii_digit())
                && minor.chars().all(|c| c.is_ascii_digit())
        });

        if !well_formed {
            return Err(invalid_metadata(
                "custard_version",
                format!("'{version}' is not a major.minor version"),
            ));
        }
        Ok(())
    }

    /// Adds an extension field, emitted after the fixed fields in key order.
    pub fn with_extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        let key = key.into();

        if key.is_empty() {
            return Err(invalid_metadata("extension", "key cannot be empty"));
        }
        if Self::RESERVED_FIELDS.contains(&key.as_str()) {
            return Err(invalid_metadata(
                key.clone(),
                "reserved field cannot be set as an extension",
            ));
        }

        self.extensions.insert(key, value.into());
        Ok(self)
    }

    /// Targeted schema version.
    pub fn custard_version(&self) -> &str {
        &self.custard_version
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Extension fields.
    pub const fn extensions(&self) -> &BTreeMap<String, Value> {
        &self.extensions
    }
}

fn invalid_metadata(field: impl Into<String>, reason: impl Into<String>) -> CustardError {
    CustardError::InvalidMetadata {
        field: field.into(),
        reason: reason.into(),
    }
}

/// Serialized custard bytes tagged with the identity they are stored under.
///
/// This is what gets handed to a [`crate::services::DocumentStore`]. The
/// identifier is checked on construction, so a store can use it as a file stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    identifier: String,
    bytes: Vec<u8>,
}

impl Document {
    /// Wraps already serialized bytes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` if the identifier is empty or not usable as
    /// a file name.
    pub fn new(identifier: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let identifier = identifier.into();
        validate_identifier(&identifier)?;

        Ok(Self {
            identifier,
            bytes: bytes.into(),
        })
    }

    /// Document identity (file stem).
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// UTF-8 JSON.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Converts a model value to JSON.
///
/// Model types only serialize strings, integers, sequences and string-keyed
/// maps, so `to_value` has no failing path here.
fn to_value<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_default()
}

/// Renders a JSON value compactly or with two-space indentation.
fn render(value: &Value, pretty: bool) -> String {
    if pretty {
        format!("{value:#}")
    } else {
        value.to_string()
    }
}

/// Checks that an identifier can serve as a file stem and JSON key.
fn validate_identifier(identifier: &str) -> Result<()> {
    let reason = if identifier.is_empty() {
        Some("cannot be empty")
    } else if identifier == "." || identifier == ".." {
        Some("cannot be a relative path component")
    } else if identifier.contains(&['/', '\\'][..]) {
        Some("cannot contain path separators")
    } else if identifier.chars().any(char::is_control) {
        Some("cannot contain control characters")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(CustardError::InvalidIdentifier {
            identifier: identifier.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

/// A complete custom keyboard.
///
/// Built once with every field supplied; serialization never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Custard {
    identifier: String,
    language: Language,
    input_style: InputStyle,
    metadata: Metadata,
    interface: Interface,
}

impl Custard {
    /// Creates a custard.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` if the identifier is empty or not usable as
    /// a file name.
    pub fn new(
        identifier: impl Into<String>,
        language: Language,
        input_style: InputStyle,
        metadata: Metadata,
        interface: Interface,
    ) -> Result<Self> {
        let identifier = identifier.into();
        validate_identifier(&identifier)?;

        Ok(Self {
            identifier,
            language,
            input_style,
            metadata,
            interface,
        })
    }

    /// Document identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Conversion language.
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Input style.
    pub const fn input_style(&self) -> InputStyle {
        self.input_style
    }

    /// Metadata block.
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Interface.
    pub const fn interface(&self) -> &Interface {
        &self.interface
    }

    /// Serializes to a JSON value with fields in schema order.
    pub fn to_json_value(&self) -> Value {
        to_value(self)
    }

    /// Serializes to compact JSON.
    pub fn to_json_string(&self) -> String {
        render(&self.to_json_value(), false)
    }

    /// Serializes to JSON indented by two spaces.
    pub fn to_json_pretty(&self) -> String {
        render(&self.to_json_value(), true)
    }

    /// Packages the serialized custard for storage under its identifier.
    pub fn to_document(&self, pretty: bool) -> Document {
        Document {
            identifier: self.identifier.clone(),
            bytes: render(&self.to_json_value(), pretty).into_bytes(),
        }
    }
}

/// Several custards shipped as one JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CustardList {
    custards: Vec<Custard>,
}

impl CustardList {
    /// Creates a list.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateIdentifier` if two custards share an identifier.
    pub fn new(custards: Vec<Custard>) -> Result<Self> {
        let mut seen = HashSet::new();
        for custard in &custards {
            if !seen.insert(custard.identifier()) {
                return Err(CustardError::DuplicateIdentifier {
                    identifier: custard.identifier().to_string(),
                });
            }
        }

        Ok(Self { custards })
    }

    /// Custards in document order.
    pub fn custards(&self) -> &[Custard] {
        &self.custards
    }

    /// Serializes to a JSON array.
    pub fn to_json_value(&self) -> Value {
        to_value(self)
    }

    /// Packages the list for storage under `identifier`.
    pub fn to_document(&self, identifier: impl Into<String>, pretty: bool) -> Result<Document> {
        Document::new(identifier, render(&self.to_json_value(), pretty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::layout::GridFitLayout;
    use crate::models::tokens::KeyStyle;
    use serde_json::json;

    fn empty_interface() -> Interface {
        Interface::new(
            KeyStyle::TenkeyStyle,
            GridFitLayout::new(1, 1).unwrap(),
            vec![],
        )
        .unwrap()
    }

    fn custard(identifier: &str) -> Custard {
        Custard::new(
            identifier,
            Language::JaJp,
            InputStyle::Direct,
            Metadata::current("テスト").unwrap(),
            empty_interface(),
        )
        .unwrap()
    }

    #[test]
    fn test_metadata_validation() {
        assert!(Metadata::new("1.0", "Mine").is_ok());
        assert!(Metadata::new("12.34", "Mine").is_ok());
        assert!(Metadata::new("", "Mine").is_err());
        assert!(Metadata::new("1", "Mine").is_err());
        assert!(Metadata::new("v1.0", "Mine").is_err());
        assert!(Metadata::new("1.0", "").is_err());
        assert!(Metadata::new("1.0", "   ").is_err());
    }

    #[test]
    fn test_metadata_extensions() {
        let metadata = Metadata::current("Mine")
            .unwrap()
            .with_extension("zeta", 1)
            .unwrap()
            .with_extension("author", "someone")
            .unwrap();

        let value = serde_json::to_value(&metadata).unwrap();
        let fields: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(fields, vec!["custard_version", "display_name", "author", "zeta"]);

        let err = Metadata::current("Mine")
            .unwrap()
            .with_extension("display_name", "shadow")
            .unwrap_err();
        assert!(matches!(err, CustardError::InvalidMetadata { .. }));
        assert!(Metadata::current("Mine").unwrap().with_extension("", 1).is_err());
    }

    #[test]
    fn test_identifier_validation() {
        for bad in ["", ".", "..", "a/b", "a\\b", "line\nbreak"] {
            let result = Custard::new(
                bad,
                Language::None,
                InputStyle::Direct,
                Metadata::current("x").unwrap(),
                empty_interface(),
            );
            assert!(
                matches!(result, Err(CustardError::InvalidIdentifier { .. })),
                "{bad:?} should be rejected"
            );
        }
        assert_eq!(custard("my_custard").identifier(), "my_custard");
    }

    #[test]
    fn test_top_level_field_order() {
        let value = custard("my_custard").to_json_value();
        let fields: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            fields,
            vec!["identifier", "language", "input_style", "metadata", "interface"]
        );
        assert_eq!(
            value["metadata"],
            json!({"custard_version": "1.0", "display_name": "テスト"})
        );
    }

    #[test]
    fn test_rendering() {
        let custard = custard("my_custard");
        let compact = custard.to_json_string();
        let pretty = custard.to_json_pretty();

        assert!(compact.starts_with("{\"identifier\":\"my_custard\""));
        assert!(compact.contains("テスト"));
        assert!(pretty.starts_with("{\n  \"identifier\": \"my_custard\""));
        assert_eq!(
            serde_json::from_str::<Value>(&compact).unwrap(),
            serde_json::from_str::<Value>(&pretty).unwrap()
        );

        let document = custard.to_document(true);
        assert_eq!(document.identifier(), "my_custard");
        assert_eq!(document.bytes(), pretty.as_bytes());
    }

    #[test]
    fn test_document_rejects_unusable_identifiers() {
        for bad in ["", "..", "../escaped", "a/b", "a\\b"] {
            assert!(
                matches!(
                    Document::new(bad, b"{}".to_vec()),
                    Err(CustardError::InvalidIdentifier { .. })
                ),
                "{bad:?} should be rejected"
            );
        }

        let document = Document::new("bundle", "[]").unwrap();
        assert_eq!(document.identifier(), "bundle");
        assert_eq!(document.bytes(), b"[]");
    }

    #[test]
    fn test_custard_list() {
        let list = CustardList::new(vec![custard("a"), custard("b")]).unwrap();
        let value = list.to_json_value();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[1]["identifier"], "b");

        let document = list.to_document("bundle", false).unwrap();
        assert_eq!(document.identifier(), "bundle");
        assert!(list.to_document("", false).is_err());

        let err = CustardList::new(vec![custard("a"), custard("a")]).unwrap_err();
        assert_eq!(
            err,
            CustardError::DuplicateIdentifier {
                identifier: "a".to_string()
            }
        );
    }
}
