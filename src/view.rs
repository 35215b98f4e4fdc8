//! Renderable descriptions for the UI layer.
//!
//! Every function here is pure: catalog data in, plain serializable values
//! out. Drawing them is the caller's business.

use crate::config::Language;
use crate::error::{CatalogError, Result};
use crate::model::{Catalog, ColorRecord, RelationKind};
use crate::query::Match;
use serde::Serialize;

/// One row of a search result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResultItem {
    pub id: usize,
    pub name: String,
    pub hex: String,
    /// Distance from the reference color, for similarity results.
    pub distance: Option<f64>,
}

/// A small related-color block in the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub id: usize,
    pub name: String,
    pub hex: String,
}

/// Full detail panel for one color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorDetail {
    pub id: usize,
    pub name: String,
    pub alternative_names: Vec<String>,
    pub description: String,
    pub hex: String,
    pub rgb_code: String,
    pub pantone_code: String,
    pub similar: Vec<Swatch>,
    pub used_with: Vec<Swatch>,
}

/// One tile of the catalog grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: usize,
    pub name: String,
    pub hex: String,
    pub rgb_code: String,
    pub pantone_code: String,
}

/// Turn query hits into list rows. Ids missing from the catalog are skipped.
pub fn search_results(
    catalog: &Catalog,
    matches: &[Match],
    language: Language,
) -> Vec<SearchResultItem> {
    matches
        .iter()
        .filter_map(|m| {
            catalog.get(m.id).map(|r| SearchResultItem {
                id: r.id,
                name: r.display_name(language).to_string(),
                hex: r.hex_code.to_string(),
                distance: m.distance,
            })
        })
        .collect()
}

/// Detail panel for a color id.
pub fn color_detail(catalog: &Catalog, id: usize, language: Language) -> Result<ColorDetail> {
    let record = catalog.get(id).ok_or(CatalogError::UnknownColor { id })?;

    let swatches = |relation: RelationKind| -> Vec<Swatch> {
        catalog
            .related(record, relation)
            .map(|r| swatch(r, language))
            .collect()
    };

    Ok(ColorDetail {
        id: record.id,
        name: record.display_name(language).to_string(),
        alternative_names: record.alternative_names.clone(),
        description: record.description.clone(),
        hex: record.hex_code.to_string(),
        rgb_code: record.rgb_code.clone(),
        pantone_code: record.pantone_display().to_string(),
        similar: swatches(RelationKind::Similar),
        used_with: swatches(RelationKind::UsedWith),
    })
}

/// Catalog grid, in load order.
pub fn catalog_entries(catalog: &Catalog, language: Language) -> Vec<CatalogEntry> {
    catalog
        .records()
        .iter()
        .map(|r| CatalogEntry {
            id: r.id,
            name: r.display_name(language).to_string(),
            hex: r.hex_code.to_string(),
            rgb_code: r.rgb_code.clone(),
            pantone_code: r.pantone_display().to_string(),
        })
        .collect()
}

fn swatch(record: &ColorRecord, language: Language) -> Swatch {
    Swatch {
        id: record.id,
        name: record.display_name(language).to_string(),
        hex: record.hex_code.to_string(),
    }
}

/// Plain-text listing of search results, one per line.
pub fn format_results(items: &[SearchResultItem]) -> String {
    let mut out = String::new();
    for item in items {
        let line = match item.distance {
            Some(d) => format!("{:<4}{}  {}  ({:.2})", item.id, item.hex, item.name, d),
            None => format!("{:<4}{}  {}", item.id, item.hex, item.name),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Plain-text detail panel.
pub fn format_detail(detail: &ColorDetail) -> String {
    let names = |swatches: &[Swatch]| -> String {
        swatches
            .iter()
            .map(|s| format!("{} {}", s.name, s.hex))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut out = String::new();
    out.push_str(&format!("{}\n", detail.name));
    out.push_str(&format!("Alternative Names: {}\n", detail.alternative_names.join(", ")));
    out.push_str(&format!("Description: {}\n", detail.description));
    out.push_str(&format!("HEX Code: {}\n", detail.hex));
    out.push_str(&format!("RGB Code: {}\n", detail.rgb_code));
    out.push_str(&format!("Pantone Code: {}\n", detail.pantone_code));
    out.push_str(&format!("Similar Colors: {}\n", names(&detail.similar)));
    out.push_str(&format!("Used With: {}\n", names(&detail.used_with)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HexColor;
    use pretty_assertions::assert_eq;

    fn sample() -> Catalog {
        let mut red = ColorRecord::new(0, "Red", HexColor::parse("#FF0000").unwrap());
        red.rgb_code = "255 0 0".into();
        red.similar_colors = vec!["Crimson".into(), "Missing".into()];
        let mut crimson = ColorRecord::new(0, "Crimson", HexColor::parse("#DC143C").unwrap());
        crimson.used_with = vec!["Red".into()];
        crimson.english_name = Some("Deep Crimson".into());
        Catalog::from_records(vec![red, crimson])
    }

    #[test]
    fn test_search_results_skip_unknown_ids() {
        let catalog = sample();
        let matches = vec![
            Match { id: 1, distance: None },
            Match { id: 9, distance: None },
        ];
        let items = search_results(&catalog, &matches, Language::English);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Deep Crimson");
    }

    #[test]
    fn test_color_detail_resolves_relations() {
        let detail = color_detail(&sample(), 0, Language::Korean).unwrap();
        assert_eq!(
            detail.similar,
            vec![Swatch {
                id: 1,
                name: "Crimson".into(),
                hex: "#DC143C".into(),
            }]
        );
        assert!(detail.used_with.is_empty());
        assert_eq!(detail.pantone_code, "");
    }

    #[test]
    fn test_color_detail_unknown_id() {
        assert!(matches!(
            color_detail(&sample(), 5, Language::Korean),
            Err(CatalogError::UnknownColor { id: 5 })
        ));
    }

    #[test]
    fn test_catalog_entries_order() {
        let entries = catalog_entries(&sample(), Language::Korean);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Red", "Crimson"]);
        assert_eq!(entries[0].rgb_code, "255 0 0");
    }

    #[test]
    fn test_format_results_snapshot() {
        let items = vec![
            SearchResultItem {
                id: 0,
                name: "Red".into(),
                hex: "#FF0000".into(),
                distance: None,
            },
            SearchResultItem {
                id: 12,
                name: "Crimson".into(),
                hex: "#DC143C".into(),
                distance: Some(70.5),
            },
        ];
        insta::assert_snapshot!(format_results(&items).trim_end(), @r"
        0   #FF0000  Red
        12  #DC143C  Crimson  (70.50)
        ");
    }
}
