//! Identifier naming rules for generated artifacts

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Suffix Salesforce appends to organization-defined fields and objects.
pub const CUSTOM_FIELD_SUFFIX: &str = "__c";

const ENUM_SUFFIX: &str = "Enum";
const QUERY_RECORDS_PREFIX: &str = "QueryRecords";

/// Name of the enum generated for a picklist field.
///
/// `Status__c` → `StatusEnum`, `Region` → `RegionEnum`.
pub fn enum_type_name(field_name: &str) -> String {
    let base = field_name
        .strip_suffix(CUSTOM_FIELD_SUFFIX)
        .unwrap_or(field_name);
    format!("{}{}", base, ENUM_SUFFIX)
}

/// Java constant name for a picklist value.
///
/// Characters that cannot appear in a Java identifier become `_`, a leading
/// character that cannot start one gets a `_` prefix, and the result is
/// upper-cased: `Not Started` → `NOT_STARTED`, `3rd Tier` → `_3RD_TIER`.
pub fn enum_constant_name(value: &str) -> String {
    let mut sanitized = String::with_capacity(value.len() + 1);

    if !value.chars().next().is_some_and(is_identifier_start) {
        sanitized.push('_');
    }
    for c in value.chars() {
        sanitized.push(if is_identifier_part(c) { c } else { '_' });
    }

    sanitized.to_uppercase()
}

/// Whether `name` can be used verbatim as a Java identifier and file stem.
pub fn is_java_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(is_identifier_start) && chars.all(is_identifier_part)
}

/// ASCII and Latin-1 / Latin Extended letters, `_` and `$`.
///
/// `×` and `÷` are the only non-letters in U+00C0..=U+024F.
fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic()
        || c == '_'
        || c == '$'
        || (('\u{00C0}'..='\u{024F}').contains(&c) && c != '\u{00D7}' && c != '\u{00F7}')
}

fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}

/// The artifacts generated for one SObject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind<'a> {
    /// The DTO class of the SObject itself
    Pojo { entity: &'a str },
    /// The `QueryRecords` wrapper holding a page of records
    QueryRecords { entity: &'a str },
    /// The enum of one picklist field
    Enum { field: &'a str },
}

/// File stem of an artifact; the extension comes from the generator configuration.
pub fn artifact_file_name(kind: ArtifactKind<'_>) -> String {
    match kind {
        ArtifactKind::Pojo { entity } => entity.to_string(),
        ArtifactKind::QueryRecords { entity } => format!("{}{}", QUERY_RECORDS_PREFIX, entity),
        ArtifactKind::Enum { field } => enum_type_name(field),
    }
}

/// Fields declared by the runtime `AbstractSObjectBase` class, as of manifest version 1.
const BASE_FIELDS_V1: &[&str] = &[
    "Id",
    "OwnerId",
    "IsDeleted",
    "Name",
    "CreatedDate",
    "CreatedById",
    "LastModifiedDate",
    "LastModifiedById",
    "SystemModstamp",
    "LastActivityDate",
    "LastViewedDate",
    "LastReferencedDate",
];

/// Explicit list of fields every generated DTO inherits from its base class.
///
/// Generated classes skip these in their own field list; templates still see
/// them, flagged as inherited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseFieldManifest {
    /// Manifest revision, bumped whenever the runtime base class changes
    pub version: String,
    /// Field names declared by the base class
    pub fields: BTreeSet<String>,
}

impl BaseFieldManifest {
    pub fn new(version: impl Into<String>, fields: impl IntoIterator<Item = String>) -> Self {
        Self {
            version: version.into(),
            fields: fields.into_iter().collect(),
        }
    }

    /// Load a manifest from a JSON file of the form `{"version": "...", "fields": [...]}`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let manifest: Self = serde_json::from_str(&raw).map_err(|e| {
            Error::Configuration(format!(
                "invalid base field manifest {}: {}",
                path.display(),
                e
            ))
        })?;

        if let Some(blank) = manifest.fields.iter().find(|f| f.trim().is_empty()) {
            return Err(Error::Configuration(format!(
                "invalid empty field name {:?} in base field manifest {}",
                blank,
                path.display()
            )));
        }

        Ok(manifest)
    }

    pub fn is_inherited_field(&self, name: &str) -> bool {
        self.fields.contains(name)
    }
}

impl Default for BaseFieldManifest {
    fn default() -> Self {
        Self::new("1", BASE_FIELDS_V1.iter().map(|f| f.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_type_name() {
        assert_eq!(enum_type_name("Status__c"), "StatusEnum");
        assert_eq!(enum_type_name("Region"), "RegionEnum");
        assert_eq!(enum_type_name("Industry__c"), "IndustryEnum");
        // Only a trailing suffix is stripped
        assert_eq!(enum_type_name("My__cField"), "My__cFieldEnum");
        assert_eq!(enum_type_name("ns__Tier__c"), "ns__TierEnum");
    }

    #[test]
    fn test_enum_constant_name() {
        assert_eq!(enum_constant_name("Not Started"), "NOT_STARTED");
        assert_eq!(enum_constant_name("3rd Tier"), "_3RD_TIER");
        assert_eq!(enum_constant_name("GOLD"), "GOLD");
        assert_eq!(enum_constant_name("Agriculture"), "AGRICULTURE");
        assert_eq!(enum_constant_name("Closed - Won"), "CLOSED___WON");
        assert_eq!(enum_constant_name("50%"), "_50_");
        assert_eq!(enum_constant_name("_internal"), "_INTERNAL");
    }

    #[test]
    fn test_enum_constant_name_edge_cases() {
        assert_eq!(enum_constant_name(""), "_");
        assert_eq!(enum_constant_name(" "), "__");
        assert_eq!(enum_constant_name("Müller"), "MÜLLER");
        assert_eq!(enum_constant_name("a.b/c"), "A_B_C");
    }

    #[test]
    fn test_enum_constant_name_replaces_non_java_characters() {
        assert_eq!(enum_constant_name("Area m²"), "AREA_M_");
        assert_eq!(enum_constant_name("½ off"), "___OFF");
        assert_eq!(enum_constant_name("٣ tier"), "___TIER");
        assert_eq!(enum_constant_name("Größe × 2"), "GRÖSSE___2");
        assert_eq!(enum_constant_name("日本"), "___");
        for value in ["Area m²", "½ off", "Ⓐ", "x\u{0345}", "Größe × 2", "日本"] {
            let name = enum_constant_name(value);
            assert!(is_java_identifier(&name), "{} -> {}", value, name);
        }
    }

    #[test]
    fn test_is_java_identifier() {
        for valid in ["Account", "Industry__c", "ns__Tier__c", "_x", "$y", "Müller", "A1"] {
            assert!(is_java_identifier(valid), "{}", valid);
        }
        for invalid in ["", " ", "1A", "../../Escaped", "a b", "a.b", "m²", "a/b", "Acc-ount"] {
            assert!(!is_java_identifier(invalid), "{:?}", invalid);
        }
    }

    #[test]
    fn test_artifact_file_names() {
        assert_eq!(
            artifact_file_name(ArtifactKind::Pojo { entity: "Account" }),
            "Account"
        );
        assert_eq!(
            artifact_file_name(ArtifactKind::QueryRecords { entity: "Account" }),
            "QueryRecordsAccount"
        );
        assert_eq!(
            artifact_file_name(ArtifactKind::Enum {
                field: "Industry__c"
            }),
            "IndustryEnum"
        );
    }

    #[test]
    fn test_default_manifest() {
        let manifest = BaseFieldManifest::default();
        assert_eq!(manifest.version, "1");
        assert!(manifest.is_inherited_field("Id"));
        assert!(manifest.is_inherited_field("SystemModstamp"));
        assert!(!manifest.is_inherited_field("Industry__c"));
        assert!(!manifest.is_inherited_field("id"));
    }

    #[test]
    fn test_manifest_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("base-fields.json");
        fs::write(&path, r#"{"version": "2", "fields": ["Id", "Name"]}"#).unwrap();

        let manifest = BaseFieldManifest::from_file(&path).unwrap();
        assert_eq!(manifest.version, "2");
        assert!(manifest.is_inherited_field("Name"));
        assert!(!manifest.is_inherited_field("OwnerId"));
    }

    #[test]
    fn test_manifest_from_invalid_file() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            BaseFieldManifest::from_file(&missing),
            Err(Error::Io { .. })
        ));

        let malformed = dir.path().join("malformed.json");
        fs::write(&malformed, r#"{"fields": "Id"}"#).unwrap();
        assert!(matches!(
            BaseFieldManifest::from_file(&malformed),
            Err(Error::Configuration(_))
        ));

        let blank = dir.path().join("blank.json");
        fs::write(&blank, r#"{"version": "1", "fields": ["Id", " "]}"#).unwrap();
        assert!(matches!(
            BaseFieldManifest::from_file(&blank),
            Err(Error::Configuration(_))
        ));
    }
}
