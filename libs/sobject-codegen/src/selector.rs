//! SObject selection rules
//!
//! A name is selected when it is included (listed explicitly or matching the
//! include pattern) and not excluded (listed explicitly or matching the
//! exclude pattern). Patterns must match the whole name.
//!
//! Defaults when a pattern is not configured:
//! - include pattern: everything, unless include names are given, then nothing
//!   (only the listed names are taken)
//! - exclude pattern: nothing
//!
//! With no filter configured at all every name in the catalog is selected.

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use sfgen_models::Catalog;
use std::collections::BTreeSet;

/// User-supplied selection filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionFilters {
    /// SObjects to generate
    #[serde(default)]
    pub include_names: Vec<String>,
    /// SObjects to skip
    #[serde(default)]
    pub exclude_names: Vec<String>,
    /// Generate SObjects whose name matches this regular expression
    #[serde(default)]
    pub include_pattern: Option<String>,
    /// Skip SObjects whose name matches this regular expression
    #[serde(default)]
    pub exclude_pattern: Option<String>,
}

impl SelectionFilters {
    /// Whether any of the four filters is set
    pub fn is_configured(&self) -> bool {
        !self.include_names.is_empty()
            || !self.exclude_names.is_empty()
            || configured_pattern(&self.include_pattern).is_some()
            || configured_pattern(&self.exclude_pattern).is_some()
    }
}

fn configured_pattern(pattern: &Option<String>) -> Option<&str> {
    pattern
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
}

#[derive(Debug, Clone)]
enum Matcher {
    All,
    Nothing,
    Pattern(Regex),
}

impl Matcher {
    /// Compile `pattern` for whole-name matching.
    ///
    /// The raw pattern is compiled on its own first, so an unbalanced group
    /// cannot close the anchoring group early.
    fn compile(kind: &str, pattern: &str) -> Result<Self> {
        let invalid =
            |e: regex::Error| Error::Configuration(format!("invalid {} pattern '{}': {}", kind, pattern, e));

        Regex::new(pattern).map_err(invalid)?;
        Regex::new(&format!("^(?:{})$", pattern))
            .map(Matcher::Pattern)
            .map_err(invalid)
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            Matcher::All => true,
            Matcher::Nothing => false,
            Matcher::Pattern(regex) => regex.is_match(name),
        }
    }
}

/// Compiled selection filters
#[derive(Debug, Clone)]
pub struct ObjectSelector {
    filtered: bool,
    include_names: BTreeSet<String>,
    exclude_names: BTreeSet<String>,
    include: Matcher,
    exclude: Matcher,
}

impl ObjectSelector {
    /// Normalize and compile the filters.
    ///
    /// Fails when a listed name is blank or a pattern is not a valid regular expression.
    pub fn new(filters: &SelectionFilters) -> Result<Self> {
        if !filters.is_configured() {
            return Ok(Self {
                filtered: false,
                include_names: BTreeSet::new(),
                exclude_names: BTreeSet::new(),
                include: Matcher::All,
                exclude: Matcher::Nothing,
            });
        }

        let include_names = normalize_names("includes", &filters.include_names)?;
        let exclude_names = normalize_names("excludes", &filters.exclude_names)?;

        let include = match configured_pattern(&filters.include_pattern) {
            Some(pattern) => Matcher::compile("include", pattern)?,
            None if include_names.is_empty() => Matcher::All,
            None => Matcher::Nothing,
        };
        let exclude = match configured_pattern(&filters.exclude_pattern) {
            Some(pattern) => Matcher::compile("exclude", pattern)?,
            None => Matcher::Nothing,
        };

        Ok(Self {
            filtered: true,
            include_names,
            exclude_names,
            include,
            exclude,
        })
    }

    /// Whether any filter applies
    pub fn is_filtered(&self) -> bool {
        self.filtered
    }

    /// Selection test for one name
    pub fn matches(&self, name: &str) -> bool {
        let included = self.include_names.contains(name) || self.include.matches(name);
        let excluded = self.exclude_names.contains(name) || self.exclude.matches(name);
        included && !excluded
    }

    /// Filter a catalog.
    pub fn select(&self, catalog: &Catalog) -> Catalog {
        if !self.filtered {
            tracing::warn!(
                count = catalog.len(),
                "Generating Java classes for all {} objects, this may take a while...",
                catalog.len()
            );
            return catalog.clone();
        }

        let selected: Catalog = catalog
            .iter()
            .filter(|name| self.matches(name))
            .cloned()
            .collect();

        tracing::info!(count = selected.len(), "Found {} matching objects", selected.len());
        selected
    }
}

/// Compile `filters` and apply them to `catalog` in one step.
pub fn select(catalog: &Catalog, filters: &SelectionFilters) -> Result<Catalog> {
    Ok(ObjectSelector::new(filters)?.select(catalog))
}

fn normalize_names(list: &str, names: &[String]) -> Result<BTreeSet<String>> {
    names
        .iter()
        .map(|name| {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                Err(Error::Configuration(format!("Invalid empty name in {}", list)))
            } else {
                Ok(trimmed.to_string())
            }
        })
        .collect()
}
