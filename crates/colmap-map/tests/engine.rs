use colmap_map::{
    MatchKind, check_completeness, merge_defaults, suggest, suggest_defaults, summarize,
};
use colmap_model::{Assignment, AttributeType, SourceColumn, TargetField};

fn sample_template() -> Vec<TargetField> {
    vec![
        TargetField::new("sku", true).with_max_length(64),
        TargetField::new("title", true).with_max_length(200),
        TargetField::new("brand", false).with_type(AttributeType::Enum),
    ]
}

fn sample_columns() -> Vec<SourceColumn> {
    vec![
        SourceColumn::new("SKU").with_samples(vec!["A-100".to_string()]),
        SourceColumn::new("Product Title").with_samples(vec!["Blue mug".to_string()]),
        SourceColumn::new("Manufacturer").with_samples(vec!["Acme".to_string()]),
    ]
}

#[test]
fn suggests_exact_and_substring_matches() {
    let suggestions = suggest(&sample_template(), &sample_columns());

    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].target_field, "sku");
    assert_eq!(suggestions[0].source_column, "SKU");
    assert_eq!(suggestions[0].kind, MatchKind::Exact);
    assert_eq!(suggestions[1].target_field, "title");
    assert_eq!(suggestions[1].source_column, "Product Title");
    assert_eq!(suggestions[1].kind, MatchKind::Similar);
    assert_eq!(suggestions[1].score, 0.85);
}

#[test]
fn unrelated_optional_field_stays_unmapped() {
    let template = sample_template();
    let assignment = suggest_defaults(&template, &sample_columns());

    assert_eq!(assignment.get("brand"), None);

    let summary = summarize(&template, &assignment);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.mapped, 2);
    assert_eq!(summary.required_total, 2);
    assert_eq!(summary.required_mapped, 2);

    let report = check_completeness(&template, &assignment);
    assert!(!report.is_blocked());
    assert_eq!(report.unmapped_optional, vec!["brand"]);
}

#[test]
fn threshold_boundary_decides_mapping() {
    let accepted = suggest_defaults(
        &[TargetField::new("abcdefghij", false)],
        &[SourceColumn::new("abcdefgxyz")],
    );
    assert_eq!(accepted.get("abcdefghij"), Some("abcdefgxyz"));

    let rejected = suggest_defaults(
        &[TargetField::new("abcdefghijklm", false)],
        &[SourceColumn::new("abcdefghiwxyz")],
    );
    assert!(rejected.is_empty());
}

#[test]
fn rerun_after_manual_edit_keeps_manual_choice() {
    let template = sample_template();
    let mut columns = sample_columns();
    columns.push(SourceColumn::new("Brand Name"));

    let mut current = Assignment::new();
    current.set("title", "Manufacturer");

    let defaults = suggest_defaults(&template, &columns);
    assert_eq!(defaults.get("title"), Some("Product Title"));

    let merged = merge_defaults(&current, &defaults, &template);
    assert_eq!(merged.get("title"), Some("Manufacturer"));
    assert_eq!(merged.get("sku"), Some("SKU"));
    assert_eq!(merged.get("brand"), Some("Brand Name"));
}

#[test]
fn larger_catalog_template() {
    let template: Vec<TargetField> = [
        ("item_sku", true),
        ("item_name", true),
        ("standard_price", true),
        ("quantity", true),
        ("main_image_url", false),
        ("color_name", false),
    ]
    .into_iter()
    .map(|(name, required)| TargetField::new(name, required))
    .collect();
    let columns: Vec<SourceColumn> = [
        "SKU",
        "Name",
        "Price",
        "Qty",
        "Image URL",
        "Colour",
        "Item Name",
    ]
    .into_iter()
    .map(SourceColumn::new)
    .collect();

    let assignment = suggest_defaults(&template, &columns);

    // exact pass reserves "Item Name" before "Name" could be considered
    assert_eq!(assignment.get("item_name"), Some("Item Name"));
    assert_eq!(assignment.get("item_sku"), Some("SKU"));
    assert_eq!(assignment.get("standard_price"), Some("Price"));
    assert_eq!(assignment.get("main_image_url"), Some("Image URL"));
    // substring rule outranks the "Colour" edit distance
    assert_eq!(assignment.get("color_name"), Some("Name"));
    // "qty" is too far from "quantity"
    assert_eq!(assignment.get("quantity"), None);

    let mut seen = std::collections::BTreeSet::new();
    for (_, source) in assignment.iter() {
        assert!(seen.insert(source), "column {source} assigned twice");
    }
}
