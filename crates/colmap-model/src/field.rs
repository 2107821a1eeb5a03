use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Data type declared for a marketplace template attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    #[default]
    String,
    Number,
    Enum,
    Array,
    Boolean,
}

impl AttributeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::String => "string",
            AttributeType::Number => "number",
            AttributeType::Enum => "enum",
            AttributeType::Array => "array",
            AttributeType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AttributeType {
    type Err = ModelError;

    /// Template files spell integers as `integer`; those are numbers too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "string" => Ok(AttributeType::String),
            "number" | "integer" => Ok(AttributeType::Number),
            "enum" => Ok(AttributeType::Enum),
            "array" => Ok(AttributeType::Array),
            "boolean" => Ok(AttributeType::Boolean),
            _ => Err(ModelError::UnknownAttributeType(s.trim().to_string())),
        }
    }
}

/// A named attribute of a marketplace product-data template.
///
/// Names are unique within a template and compared case-sensitively as
/// given. The matcher only looks at `name`; the remaining metadata travels
/// along for display and for the completeness check (`required`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetField {
    pub name: String,
    pub required: bool,
    #[serde(rename = "type", default)]
    pub attribute_type: AttributeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_rules: Option<String>,
}

impl TargetField {
    pub fn new(name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            required,
            attribute_type: AttributeType::default(),
            max_length: None,
            min_value: None,
            enum_values: Vec::new(),
            description: None,
            validation_rules: None,
        }
    }

    #[must_use]
    pub fn with_type(mut self, attribute_type: AttributeType) -> Self {
        self.attribute_type = attribute_type;
        self
    }

    #[must_use]
    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    #[must_use]
    pub fn with_enum_values(mut self, values: Vec<String>) -> Self {
        self.enum_values = values;
        self
    }

    /// Attach a free-form validation rule such as `>= 0`.
    ///
    /// A `>= N` clause also sets `min_value`, and the rule doubles as the
    /// description when none was given.
    #[must_use]
    pub fn with_validation_rule(mut self, rule: impl Into<String>) -> Self {
        let rule = rule.into();
        if let Some(min) = parse_min_value(&rule) {
            self.min_value = Some(min);
        }
        if self.description.is_none() {
            self.description = Some(rule.clone());
        }
        self.validation_rules = Some(rule);
        self
    }
}

fn parse_min_value(rule: &str) -> Option<i64> {
    let (_, rest) = rule.split_once(">=")?;
    let digits: String = rest
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_type_parses_integer_as_number() {
        assert_eq!("Integer".parse::<AttributeType>(), Ok(AttributeType::Number));
        assert_eq!(" enum ".parse::<AttributeType>(), Ok(AttributeType::Enum));
        assert!(matches!(
            "date".parse::<AttributeType>(),
            Err(ModelError::UnknownAttributeType(t)) if t == "date"
        ));
    }

    #[test]
    fn validation_rule_sets_min_value_and_description() {
        let field = TargetField::new("price", true)
            .with_type(AttributeType::Number)
            .with_validation_rule("value >= 10");
        assert_eq!(field.min_value, Some(10));
        assert_eq!(field.description.as_deref(), Some("value >= 10"));
        assert_eq!(field.validation_rules.as_deref(), Some("value >= 10"));
    }

    #[test]
    fn validation_rule_without_bound_leaves_min_value() {
        let field = TargetField::new("sku", true).with_validation_rule("alphanumeric");
        assert_eq!(field.min_value, None);
    }
}
