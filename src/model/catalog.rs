//! Catalog - The immutable record table of one load.

use super::{ColorRecord, HexColor};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Kind of named relation between two records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// Listed in `similar_colors`.
    Similar,
    /// Listed in `used_with`.
    UsedWith,
}

impl RelationKind {
    /// Human-readable relation name.
    pub fn describe(&self) -> &'static str {
        match self {
            RelationKind::Similar => "similar to",
            RelationKind::UsedWith => "used with",
        }
    }
}

/// A relation entry whose name matched no record. Dropped, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedReference {
    /// Record that lists the name.
    pub record_id: usize,
    pub relation: RelationKind,
    /// The name that did not resolve.
    pub name: String,
}

/// A name shared by more than one record. The first record keeps the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateName {
    pub name: String,
    pub kept_id: usize,
    pub duplicate_id: usize,
}

/// The records of one load plus the name index built over them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    records: Vec<ColorRecord>,
    #[serde(skip)]
    name_index: HashMap<String, usize>,
    unresolved: Vec<UnresolvedReference>,
    duplicate_names: Vec<DuplicateName>,
}

impl Catalog {
    /// Build a catalog, renumbering ids to `0..N-1` and resolving relations.
    pub fn from_records(mut records: Vec<ColorRecord>) -> Self {
        let mut name_index = HashMap::with_capacity(records.len());
        let mut duplicate_names = Vec::new();

        for (id, record) in records.iter_mut().enumerate() {
            record.id = id;
            match name_index.get(&record.name) {
                Some(&kept_id) => {
                    warn!(
                        "Duplicate color name '{}' (ids {} and {}), keeping the first",
                        record.name, kept_id, id
                    );
                    duplicate_names.push(DuplicateName {
                        name: record.name.clone(),
                        kept_id,
                        duplicate_id: id,
                    });
                }
                None => {
                    name_index.insert(record.name.clone(), id);
                }
            }
        }

        let mut unresolved = Vec::new();
        for record in records.iter_mut() {
            record.similar_ids = resolve(
                &name_index,
                record.id,
                RelationKind::Similar,
                &record.similar_colors,
                &mut unresolved,
            );
            record.used_with_ids = resolve(
                &name_index,
                record.id,
                RelationKind::UsedWith,
                &record.used_with,
                &mut unresolved,
            );
        }

        Self {
            records,
            name_index,
            unresolved,
            duplicate_names,
        }
    }

    /// All records in load order.
    pub fn records(&self) -> &[ColorRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id.
    pub fn get(&self, id: usize) -> Option<&ColorRecord> {
        self.records.get(id)
    }

    /// Look up a record by exact primary name (first match on duplicates).
    pub fn find_by_name(&self, name: &str) -> Option<&ColorRecord> {
        self.name_index.get(name).and_then(|&id| self.records.get(id))
    }

    /// First record whose hex text equals `hex` exactly.
    pub fn find_by_hex(&self, hex: &HexColor) -> Option<&ColorRecord> {
        self.records.iter().find(|r| &r.hex_code == hex)
    }

    /// Resolved records for one relation of a record.
    pub fn related<'a>(
        &'a self,
        record: &'a ColorRecord,
        relation: RelationKind,
    ) -> impl Iterator<Item = &'a ColorRecord> + 'a {
        record
            .related_ids(relation)
            .iter()
            .filter_map(move |&id| self.records.get(id))
    }

    /// Relation names that matched no record.
    pub fn unresolved(&self) -> &[UnresolvedReference] {
        &self.unresolved
    }

    /// Names shared by more than one record.
    pub fn duplicate_names(&self) -> &[DuplicateName] {
        &self.duplicate_names
    }
}

fn resolve(
    index: &HashMap<String, usize>,
    record_id: usize,
    relation: RelationKind,
    names: &[String],
    unresolved: &mut Vec<UnresolvedReference>,
) -> Vec<usize> {
    let mut ids = Vec::with_capacity(names.len());
    for name in names {
        match index.get(name) {
            Some(&id) => ids.push(id),
            None => {
                debug!(
                    "Record {}: '{}' entry '{}' does not match any color, dropped",
                    record_id,
                    relation.describe(),
                    name
                );
                unresolved.push(UnresolvedReference {
                    record_id,
                    relation,
                    name: name.clone(),
                });
            }
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(name: &str, hex: &str) -> ColorRecord {
        ColorRecord::new(99, name, HexColor::parse(hex).unwrap())
    }

    #[test]
    fn test_ids_are_renumbered() {
        let catalog = Catalog::from_records(vec![record("A", "#000000"), record("B", "#111111")]);
        let ids: Vec<usize> = catalog.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_relations_resolved_and_unresolved_recorded() {
        let mut crimson = record("Crimson", "#DC143C");
        crimson.used_with = vec!["Red".into(), "Nowhere".into()];
        crimson.similar_colors = vec!["Crimson".into()];
        let catalog = Catalog::from_records(vec![record("Red", "#FF0000"), crimson]);

        let crimson = catalog.get(1).unwrap();
        assert_eq!(crimson.used_with_ids, vec![0]);
        assert_eq!(crimson.similar_ids, vec![1]);
        assert_eq!(
            catalog.unresolved().to_vec(),
            vec![UnresolvedReference {
                record_id: 1,
                relation: RelationKind::UsedWith,
                name: "Nowhere".into(),
            }]
        );

        let names: Vec<&str> = catalog
            .related(crimson, RelationKind::UsedWith)
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Red"]);
    }

    #[test]
    fn test_duplicate_names_first_wins() {
        let mut user = record("User", "#222222");
        user.used_with = vec!["Twin".into()];
        let catalog = Catalog::from_records(vec![
            record("Twin", "#000000"),
            record("Twin", "#FFFFFF"),
            user,
        ]);

        assert_eq!(catalog.find_by_name("Twin").unwrap().id, 0);
        assert_eq!(catalog.get(2).unwrap().used_with_ids, vec![0]);
        assert_eq!(
            catalog.duplicate_names().to_vec(),
            vec![DuplicateName {
                name: "Twin".into(),
                kept_id: 0,
                duplicate_id: 1,
            }]
        );
    }

    #[test]
    fn test_find_by_hex_exact_text() {
        let catalog = Catalog::from_records(vec![record("Red", "#FF0000")]);
        assert!(catalog
            .find_by_hex(&HexColor::parse("#FF0000").unwrap())
            .is_some());
        assert!(catalog
            .find_by_hex(&HexColor::parse("#ff0000").unwrap())
            .is_none());
    }
}
