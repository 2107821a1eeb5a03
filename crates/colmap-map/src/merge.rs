//! Folding a fresh default assignment into a caller-held one.

use colmap_model::{Assignment, TargetField};

/// Fill the unmapped entries of `existing` from `defaults`.
///
/// A target that already has a non-empty value in `existing` keeps it, so
/// manual choices survive re-running the matcher. Only targets listed in
/// `targets` are considered. The result is a new assignment meant to
/// replace `existing` as a whole.
pub fn merge_defaults(
    existing: &Assignment,
    defaults: &Assignment,
    targets: &[TargetField],
) -> Assignment {
    let mut merged = existing.clone();
    for target in targets {
        if existing.is_mapped(&target.name) {
            continue;
        }
        if let Some(source) = defaults.get(&target.name) {
            merged.set(target.name.clone(), source);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(names: &[&str]) -> Vec<TargetField> {
        names.iter().map(|n| TargetField::new(*n, false)).collect()
    }

    #[test]
    fn keeps_manual_choice_and_adds_missing() {
        let mut existing = Assignment::new();
        existing.set("title", "product_title");
        let mut defaults = Assignment::new();
        defaults.set("title", "name");
        defaults.set("sku", "sku_code");

        let merged = merge_defaults(&existing, &defaults, &fields(&["title", "sku"]));
        assert_eq!(merged.get("title"), Some("product_title"));
        assert_eq!(merged.get("sku"), Some("sku_code"));
        assert_eq!(merged.mapped_count(), 2);
    }

    #[test]
    fn cleared_entry_is_refilled() {
        let mut existing = Assignment::new();
        existing.set("sku", "");
        let mut defaults = Assignment::new();
        defaults.set("sku", "SKU");

        let merged = merge_defaults(&existing, &defaults, &fields(&["sku"]));
        assert_eq!(merged.get("sku"), Some("SKU"));
    }

    #[test]
    fn ignores_defaults_for_unknown_targets() {
        let mut defaults = Assignment::new();
        defaults.set("color", "Colour");

        let merged = merge_defaults(&Assignment::new(), &defaults, &fields(&["sku"]));
        assert!(merged.is_empty());
    }
}
