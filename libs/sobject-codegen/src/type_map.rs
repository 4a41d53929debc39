//! SOAP type to Java type mapping
//!
//! Salesforce reports the wire type of every field as a namespace-qualified
//! SOAP type (`xsd:string`, `tns:ID`, ...). The table below follows the JAXB
//! defaults, with every temporal type mapped to `String` so that generated
//! DTOs carry the raw ISO-8601 text.

use crate::error::{Error, Result};
use crate::naming;
use sfgen_models::SObjectField;
use std::collections::HashMap;

const TYPE_TABLE: &[(&str, &str)] = &[
    ("ID", "String"),
    ("string", "String"),
    ("integer", "java.math.BigInteger"),
    ("int", "Integer"),
    ("long", "Long"),
    ("short", "Short"),
    ("decimal", "java.math.BigDecimal"),
    ("float", "Float"),
    ("double", "Double"),
    ("boolean", "Boolean"),
    ("byte", "Byte"),
    ("unsignedInt", "Long"),
    ("unsignedShort", "Integer"),
    ("unsignedByte", "Short"),
    ("dateTime", "String"),
    ("date", "String"),
    ("time", "String"),
    ("g", "String"),
];

/// Immutable SOAP type → Java type table.
///
/// Build it once and pass it by reference to whoever needs it.
#[derive(Debug, Clone)]
pub struct TypeMapper {
    table: HashMap<&'static str, &'static str>,
}

impl TypeMapper {
    pub fn new() -> Self {
        Self {
            table: TYPE_TABLE.iter().copied().collect(),
        }
    }

    /// Java type for a field.
    ///
    /// Picklist fields resolve to their generated enum; everything else goes
    /// through the table after the namespace prefix is stripped.
    pub fn resolve(&self, field: &SObjectField) -> Result<String> {
        if field.is_enumerated() {
            return Ok(naming::enum_type_name(&field.name));
        }

        self.lookup(&field.soap_type)
            .map(String::from)
            .ok_or_else(|| Error::UnsupportedFieldType {
                field: field.name.clone(),
                tag: field.soap_type.clone(),
            })
    }

    /// Table lookup for a raw tag, with or without namespace prefix.
    pub fn lookup(&self, tag: &str) -> Option<&'static str> {
        self.table.get(strip_namespace(tag)).copied()
    }

    /// Tags known to the table
    pub fn known_tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.table.keys().copied()
    }
}

impl Default for TypeMapper {
    fn default() -> Self {
        Self::new()
    }
}

/// Java type of a raw SOAP tag without building a [`TypeMapper`].
pub fn java_type(tag: &str) -> Option<&'static str> {
    let local = strip_namespace(tag);
    TYPE_TABLE
        .iter()
        .find(|(soap, _)| *soap == local)
        .map(|(_, java)| *java)
}

/// Drop everything up to and including the first `:`.
fn strip_namespace(tag: &str) -> &str {
    match tag.split_once(':') {
        Some((_, local)) => local,
        None => tag,
    }
}
