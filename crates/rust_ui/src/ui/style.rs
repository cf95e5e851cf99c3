//! Stylesheets
//!
//! A stylesheet is an opaque bag of named values attached to a root. The root
//! carries it for its widgets and never interprets it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single style value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Numeric value (sizes, radii, alpha)
    Number(f32),
    /// Boolean switch
    Flag(bool),
    /// Free-form text (font names, colors)
    Text(String),
}

/// Named collection of style values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stylesheet {
    name: String,
    values: BTreeMap<String, StyleValue>,
}

impl Stylesheet {
    /// Create an empty stylesheet with a name
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), values: BTreeMap::new() }
    }

    /// Add a value (builder pattern)
    pub fn with(mut self, key: impl Into<String>, value: StyleValue) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Stylesheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.values.get(key)
    }

    /// Number of values in the sheet
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sheet has no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
