//! Typed template bindings, one structure per artifact kind

use crate::error::Result;
use crate::naming::{self, BaseFieldManifest};
use crate::type_map::TypeMapper;
use serde::Serialize;
use sfgen_models::{SObjectDescription, SObjectField};
use std::collections::HashSet;

/// A field as seen by the DTO templates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldBinding {
    /// API name, also used as the Java property name
    pub name: String,
    pub label: Option<String>,
    /// Resolved Java type (enum name for picklists)
    pub java_type: String,
    pub enumerated: bool,
    /// Declared by the runtime base class; templates skip it in the field list
    pub inherited: bool,
}

/// An SObject with every field type already resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptionBinding {
    pub name: String,
    pub label: Option<String>,
    pub fields: Vec<FieldBinding>,
}

impl DescriptionBinding {
    /// Resolve every field of `description`.
    ///
    /// Fails on the first field whose SOAP type has no Java mapping.
    pub fn build(
        description: &SObjectDescription,
        types: &TypeMapper,
        base_fields: &BaseFieldManifest,
    ) -> Result<Self> {
        let fields = description
            .fields
            .iter()
            .map(|field| {
                Ok(FieldBinding {
                    name: field.name.clone(),
                    label: field.label.as_deref().map(comment_text),
                    java_type: types.resolve(field)?,
                    enumerated: field.is_enumerated(),
                    inherited: base_fields.is_inherited_field(&field.name),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: description.name.clone(),
            label: description.label.as_deref().map(comment_text),
            fields,
        })
    }

    /// Fields the generated class declares itself
    pub fn own_fields(&self) -> impl Iterator<Item = &FieldBinding> {
        self.fields.iter().filter(|f| !f.inherited)
    }
}

/// One picklist entry as a Java enum constant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumConstantBinding {
    /// Java constant name
    pub name: String,
    /// Raw picklist value
    pub value: String,
    /// `value` escaped for use inside a Java string literal
    pub literal: String,
    pub label: String,
    pub default: bool,
}

/// A picklist field and its constants
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumFieldBinding {
    /// API name of the field
    pub name: String,
    pub label: Option<String>,
    /// Name of the generated enum
    pub enum_name: String,
    pub constants: Vec<EnumConstantBinding>,
}

impl EnumFieldBinding {
    /// Build the constants of a picklist field.
    ///
    /// Distinct values can sanitize to the same constant name (`A-B`, `A B`);
    /// later ones get a numeric suffix in picklist order.
    pub fn build(field: &SObjectField) -> Self {
        let mut taken: HashSet<String> = HashSet::new();

        let constants = field
            .picklist()
            .iter()
            .map(|entry| {
                let base = naming::enum_constant_name(&entry.value);
                let mut name = base.clone();
                let mut suffix = 1;
                while taken.contains(&name) {
                    suffix += 1;
                    name = format!("{}_{}", base, suffix);
                }
                taken.insert(name.clone());

                EnumConstantBinding {
                    name,
                    value: entry.value.clone(),
                    literal: java_string_literal(&entry.value),
                    label: comment_text(entry.label.as_deref().unwrap_or(&entry.value)),
                    default: entry.default_value,
                }
            })
            .collect();

        Self {
            name: field.name.clone(),
            label: field.label.as_deref().map(comment_text),
            enum_name: naming::enum_type_name(&field.name),
            constants,
        }
    }
}

/// Bindings of the SObject DTO template
#[derive(Debug, Serialize)]
pub struct PojoBindings<'a> {
    pub package_name: &'a str,
    pub base_package: &'a str,
    pub generated_at: &'a str,
    pub description: &'a DescriptionBinding,
}

/// Bindings of the picklist enum template
#[derive(Debug, Serialize)]
pub struct EnumBindings<'a> {
    pub package_name: &'a str,
    pub generated_at: &'a str,
    pub field: &'a EnumFieldBinding,
}

/// Bindings of the query records wrapper template
#[derive(Debug, Serialize)]
pub struct QueryRecordsBindings<'a> {
    pub package_name: &'a str,
    pub base_package: &'a str,
    pub generated_at: &'a str,
    pub description: &'a DescriptionBinding,
}

/// Bindings for one artifact, tagged with its kind
#[derive(Debug)]
pub enum Bindings<'a> {
    Pojo(&'a PojoBindings<'a>),
    Enum(&'a EnumBindings<'a>),
    QueryRecords(&'a QueryRecordsBindings<'a>),
}

/// Escape a value for the inside of a Java string literal
pub fn java_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Single-line text that cannot close a Java comment
pub fn comment_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace("*/", "* /")
}
