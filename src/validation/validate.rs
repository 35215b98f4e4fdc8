//! Validation logic for loaded color catalogs.

use crate::model::{Catalog, ColorRecord, RelationKind, Rgb};
use crate::parser::LoadReport;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate a load: skipped rows plus the catalog itself.
pub fn validate_load(report: &LoadReport) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for skipped in &report.skipped {
        result.add_warning(skipped.to_string());
    }

    result.merge(validate_catalog(&report.catalog));
    result
}

/// Validate a catalog.
///
/// Only an empty catalog is an error. Dropped references, duplicate names
/// and display-text mismatches are warnings.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if catalog.is_empty() {
        result.add_error("No colors loaded");
        return result;
    }

    for dup in catalog.duplicate_names() {
        result.add_warning(format!(
            "Color {}: name '{}' already used by color {}",
            dup.duplicate_id, dup.name, dup.kept_id
        ));
    }

    for unresolved in catalog.unresolved() {
        result.add_warning(format!(
            "Color {}: '{}' entry '{}' does not match any color",
            unresolved.record_id,
            unresolved.relation.describe(),
            unresolved.name
        ));
    }

    for record in catalog.records() {
        result.merge(validate_record(record));
    }

    result
}

/// Validate a single record.
pub fn validate_record(record: &ColorRecord) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if record.name.is_empty() {
        result.add_warning(format!("Color {}: Missing name", record.id));
    }

    if let Some(rgb) = parse_rgb_text(&record.rgb_code) {
        if rgb != record.hex_code.rgb() {
            result.add_warning(format!(
                "Color {}: RGB text '{}' does not match {}",
                record.id, record.rgb_code, record.hex_code
            ));
        }
    }

    for relation in [RelationKind::Similar, RelationKind::UsedWith] {
        if record.related_ids(relation).contains(&record.id) {
            result.add_warning(format!(
                "Color {}: lists itself as '{}'",
                record.id,
                relation.describe()
            ));
        }
    }

    result
}

/// Read three 0-255 integers out of free-form RGB text such as
/// `226, 35, 26` or `R226 G35 B26`. `None` when the text has another shape.
pub fn parse_rgb_text(text: &str) -> Option<Rgb> {
    let values: Vec<u8> = text
        .split(|c: char| !c.is_ascii_digit())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u8>())
        .collect::<std::result::Result<_, _>>()
        .ok()?;

    match values.as_slice() {
        [r, g, b] => Some(Rgb::new(*r, *g, *b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HexColor;

    fn record(name: &str, hex: &str) -> ColorRecord {
        ColorRecord::new(0, name, HexColor::parse(hex).unwrap())
    }

    // ==================== ValidationResult tests ====================

    #[test]
    fn test_validation_result_ok() {
        let result = ValidationResult::ok();
        assert!(result.passed);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validation_result_merge() {
        let mut result1 = ValidationResult::ok();
        result1.add_warning("Warning 1");

        let mut result2 = ValidationResult::ok();
        result2.add_error("Error 1");
        result2.add_warning("Warning 2");

        result1.merge(result2);
        assert!(!result1.passed);
        assert_eq!(result1.warnings.len(), 2);
        assert_eq!(result1.errors.len(), 1);
    }

    // ==================== validate_catalog tests ====================

    #[test]
    fn test_validate_empty_catalog() {
        let result = validate_catalog(&Catalog::default());
        assert!(!result.passed);
        assert_eq!(result.errors, vec!["No colors loaded"]);
    }

    #[test]
    fn test_validate_reports_warnings_only() {
        let mut red = record("Red", "#FF0000");
        red.used_with = vec!["Ghost".into(), "Red".into()];
        let catalog = Catalog::from_records(vec![red, record("Red", "#EE0000")]);

        let result = validate_catalog(&catalog);
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("already used")));
        assert!(result.warnings.iter().any(|w| w.contains("'Ghost'")));
        assert!(result.warnings.iter().any(|w| w.contains("lists itself")));
    }

    // ==================== validate_record tests ====================

    #[test]
    fn test_validate_record_rgb_mismatch() {
        let mut rec = record("Red", "#FF0000");
        rec.rgb_code = "255, 0, 0".into();
        assert!(validate_record(&rec).warnings.is_empty());

        rec.rgb_code = "250, 0, 0".into();
        assert_eq!(validate_record(&rec).warnings.len(), 1);
    }

    #[test]
    fn test_validate_record_missing_name() {
        let rec = record("", "#FF0000");
        assert_eq!(validate_record(&rec).warnings.len(), 1);
    }

    // ==================== parse_rgb_text tests ====================

    #[test]
    fn test_parse_rgb_text_shapes() {
        assert_eq!(parse_rgb_text("226, 35, 26"), Some(Rgb::new(226, 35, 26)));
        assert_eq!(parse_rgb_text("R226 G35 B26"), Some(Rgb::new(226, 35, 26)));
        assert_eq!(parse_rgb_text("rgb(1,2,3)"), Some(Rgb::new(1, 2, 3)));
        assert_eq!(parse_rgb_text(""), None);
        assert_eq!(parse_rgb_text("300 0 0"), None);
        assert_eq!(parse_rgb_text("1 2"), None);
    }
}
