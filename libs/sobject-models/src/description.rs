//! SObject describe payload

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Full description of one SObject
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SObjectDescription {
    /// API name
    pub name: String,

    /// Singular label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Organization-defined object
    #[serde(default)]
    pub custom: bool,

    /// Fields in the order the API returned them
    #[serde(default)]
    pub fields: Vec<SObjectField>,

    /// Additional attributes
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

impl SObjectDescription {
    /// Look up a field by API name
    pub fn field(&self, name: &str) -> Option<&SObjectField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields that carry a picklist
    pub fn enumerated_fields(&self) -> impl Iterator<Item = &SObjectField> {
        self.fields.iter().filter(|f| f.is_enumerated())
    }
}

/// One field of an SObject
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SObjectField {
    /// API name (e.g. "Name", "Industry__c")
    pub name: String,

    /// Label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Salesforce display type (e.g. "string", "picklist", "reference")
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,

    /// Namespace-qualified SOAP type (e.g. "xsd:string", "tns:ID")
    pub soap_type: String,

    /// Organization-defined field
    #[serde(default)]
    pub custom: bool,

    /// Field accepts null
    #[serde(default)]
    pub nillable: bool,

    /// Maximum length for text fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,

    /// Picklist entries; empty or absent for non-picklist fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picklist_values: Option<Vec<PickListValue>>,

    /// Additional attributes
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

impl SObjectField {
    /// A field is enumerated when it carries at least one picklist value.
    pub fn is_enumerated(&self) -> bool {
        self.picklist_values
            .as_ref()
            .is_some_and(|values| !values.is_empty())
    }

    /// Picklist entries, empty for non-enumerated fields
    pub fn picklist(&self) -> &[PickListValue] {
        self.picklist_values.as_deref().unwrap_or_default()
    }
}

/// One picklist entry
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PickListValue {
    /// Raw API value
    pub value: String,

    /// Display label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Selected by default on new records
    #[serde(default)]
    pub default_value: bool,

    /// Entry is active
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}
