//! Marketplace template parsing.
//!
//! A template lists one attribute per row. Columns are located by header
//! keywords rather than position, so `Attribute Name`, `attribute` and
//! `name` all identify the name column.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use colmap_model::{AttributeType, TargetField};
use tracing::{info, warn};

use super::{file, header_names, reader};
use crate::error::{IngestError, Result};

/// Header positions of the template columns.
#[derive(Debug, Clone, Copy)]
struct TemplateColumns {
    name: usize,
    data_type: usize,
    required: Option<usize>,
    max_length: Option<usize>,
    allowed_values: Option<usize>,
    validation: Option<usize>,
}

impl TemplateColumns {
    fn locate(headers: &[String]) -> Result<Self> {
        let lower: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();
        let find = |keys: &[&str]| lower.iter().position(|h| keys.iter().any(|k| h.contains(k)));

        Ok(Self {
            name: find(&["attribute", "name"]).ok_or(IngestError::MissingColumn {
                column: "attribute_name",
            })?,
            data_type: find(&["type", "data_type"])
                .ok_or(IngestError::MissingColumn { column: "data_type" })?,
            required: find(&["required"]),
            max_length: find(&["max", "length"]),
            allowed_values: find(&["allowed", "enum", "values"]),
            validation: find(&["validation", "rules"]),
        })
    }
}

/// Read a template file from disk.
pub fn read_template(path: &Path) -> Result<Vec<TargetField>> {
    let input = file::open(path)?;
    let targets = parse_template(input).map_err(|e| e.in_file(path))?;
    info!(path = %path.display(), attributes = targets.len(), "template loaded");
    Ok(targets)
}

/// Parse template CSV content into target fields, in file order.
///
/// Rows without a name or a type are skipped. A template without any
/// usable row is an error.
pub fn parse_template<R: Read>(input: R) -> Result<Vec<TargetField>> {
    let mut rdr = reader(input);
    let headers = header_names(&mut rdr)?;
    let columns = TemplateColumns::locate(&headers)?;

    let mut targets = Vec::new();
    let mut seen = HashSet::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        let cell = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or("");

        let name = cell(Some(columns.name));
        let data_type = cell(Some(columns.data_type));
        if name.is_empty() || data_type.is_empty() {
            warn!(line, "skipping template row without name or type");
            continue;
        }

        let attribute_type: AttributeType =
            data_type.parse().map_err(|_| IngestError::InvalidValue {
                field: "data_type",
                value: data_type.to_string(),
                line,
            })?;
        let required = cell(columns.required).eq_ignore_ascii_case("true");

        let mut target = TargetField::new(name, required).with_type(attribute_type);
        if let Ok(max_length) = cell(columns.max_length).parse::<u32>() {
            target = target.with_max_length(max_length);
        }
        let allowed = split_values(cell(columns.allowed_values));
        if !allowed.is_empty() {
            target = target.with_enum_values(allowed);
        }
        let rule = cell(columns.validation);
        if !rule.is_empty() {
            target = target.with_validation_rule(rule);
        }

        if !seen.insert(target.name.clone()) {
            return Err(IngestError::DuplicateName {
                name: target.name,
            });
        }
        targets.push(target);
    }

    if targets.is_empty() {
        return Err(IngestError::NoAttributes);
    }
    Ok(targets)
}

/// Split an allowed-values cell on `,`, `|` or `;`.
fn split_values(cell: &str) -> Vec<String> {
    cell.split([',', '|', ';'])
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "\
attribute_name,data_type,required,max_length,allowed_values,validation_rules
item_sku,string,TRUE,64,,
item_name,string,true,200,,
standard_price,number,TRUE,,,>= 0
color_name,enum,FALSE,,\"Red|Blue; Green\",
";

    #[test]
    fn reads_attribute_metadata() {
        let targets = parse_template(TEMPLATE.as_bytes()).unwrap();
        assert_eq!(targets.len(), 4);

        assert_eq!(targets[0].name, "item_sku");
        assert!(targets[0].required);
        assert_eq!(targets[0].max_length, Some(64));

        assert!(targets[1].required);

        assert_eq!(targets[2].attribute_type, AttributeType::Number);
        assert_eq!(targets[2].min_value, Some(0));
        assert_eq!(targets[2].description.as_deref(), Some(">= 0"));

        assert!(!targets[3].required);
        assert_eq!(targets[3].enum_values, vec!["Red", "Blue", "Green"]);
    }

    #[test]
    fn headers_located_by_keyword() {
        let csv = "Type,Attribute Name,Is Required\ninteger,quantity,True\n";
        let targets = parse_template(csv.as_bytes()).unwrap();
        assert_eq!(targets[0].name, "quantity");
        assert_eq!(targets[0].attribute_type, AttributeType::Number);
        assert!(targets[0].required);
    }

    #[test]
    fn rows_without_name_or_type_are_skipped() {
        let csv = "name,type\n,string\nbrand,\nsku,string\n";
        let targets = parse_template(csv.as_bytes()).unwrap();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].name, "sku");
    }

    #[test]
    fn missing_type_column() {
        let err = parse_template("name,required\nsku,TRUE\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingColumn { column: "data_type" }
        ));
    }

    #[test]
    fn empty_template() {
        let err = parse_template("name,type\n".as_bytes()).unwrap_err();
        assert!(matches!(err, IngestError::NoAttributes));
    }

    #[test]
    fn unknown_type() {
        let err = parse_template("name,type\nlaunch,date\n".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "invalid data_type value 'date' on line 2");
    }

    #[test]
    fn duplicate_attribute() {
        let err = parse_template("name,type\nsku,string\nsku,string\n".as_bytes()).unwrap_err();
        assert!(matches!(err, IngestError::DuplicateName { name } if name == "sku"));
    }

    #[test]
    fn bom_is_ignored() {
        let csv = "\u{feff}name,type\nsku,string\n";
        let targets = parse_template(csv.as_bytes()).unwrap();
        assert_eq!(targets[0].name, "sku");
    }
}
