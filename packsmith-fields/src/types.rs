//! Field definition types
//!
//! All types serialize to/from YAML via serde. A field definition describes
//! one named, typed attribute of a data stream's schema; while definitions
//! are still in group form the `fields` member carries nested children.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The type tag of a field.
///
/// Covers what inference emits plus what the base-field template uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Keyword,
    ConstantKeyword,
    Date,
    Long,
    Double,
    Boolean,
    Ip,
    Text,
    Object,
    Group,
}

impl FieldType {
    /// The wire name of this type, as written into field files.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Keyword => "keyword",
            FieldType::ConstantKeyword => "constant_keyword",
            FieldType::Date => "date",
            FieldType::Long => "long",
            FieldType::Double => "double",
            FieldType::Boolean => "boolean",
            FieldType::Ip => "ip",
            FieldType::Text => "text",
            FieldType::Object => "object",
            FieldType::Group => "group",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field definition — name, type, and optional documentation for one
/// attribute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Fixed value for `constant_keyword` fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Nested children while this definition is in group form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldDef>>,
}

impl FieldDef {
    /// A leaf definition with no description, value, or children.
    pub fn leaf(name: impl Into<String>, type_: FieldType) -> Self {
        Self {
            name: name.into(),
            type_,
            description: None,
            value: None,
            fields: None,
        }
    }

    /// A group definition holding nested children.
    pub fn group(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.into(),
            type_: FieldType::Group,
            description: None,
            value: None,
            fields: Some(fields),
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
