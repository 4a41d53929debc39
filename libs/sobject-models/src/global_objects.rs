//! Global objects (catalog) payload

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::Catalog;

/// Response of the "describe global" call
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GlobalObjects {
    /// Character encoding of the organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,

    /// Maximum number of records per batch call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_batch_size: Option<u32>,

    /// Every SObject visible to the session
    #[serde(default)]
    pub sobjects: Vec<SObject>,
}

impl GlobalObjects {
    /// Collect the SObject names into a catalog.
    ///
    /// Blank names are dropped; duplicates collapse.
    pub fn catalog(&self) -> Catalog {
        self.sobjects
            .iter()
            .map(|s| s.name.trim())
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect()
    }
}

/// Summary entry of one SObject in the global catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SObject {
    /// API name (e.g. "Account", "Invoice__c")
    pub name: String,

    /// Singular label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Plural label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_plural: Option<String>,

    /// Organization-defined object
    #[serde(default)]
    pub custom: bool,

    /// Object can be queried with SOQL
    #[serde(default)]
    pub queryable: bool,

    /// Three character key prefix of record ids
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_prefix: Option<String>,

    /// Additional attributes
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}
