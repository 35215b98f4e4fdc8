//! Relationship graph construction.

use crate::config::{GraphOptions, Language};
use crate::model::{Catalog, RelationKind};
use serde::Serialize;

/// Label carried by `similar to` edges.
pub const SIMILAR_EDGE_LABEL: &str = "similar";

/// One color node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: usize,
    /// Display name.
    pub label: String,
    /// Tooltip text (the description).
    pub title: String,
    /// Fill color as `#RRGGBB`.
    pub color: String,
}

/// A directed relation edge. Direction is for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub relation: RelationKind,
    pub label: String,
}

/// Renderable node/edge description of a catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColorGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl ColorGraph {
    /// Edges leaving a node.
    pub fn edges_from(&self, id: usize) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.from == id)
    }

    /// Serialize as pretty JSON for an external visualizer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Build the relationship graph.
///
/// Names were resolved when the catalog was loaded, so unresolved entries
/// are already gone here. Self references never become edges: a record
/// that lists its own name is skipped even when a duplicate name resolved
/// the entry to an earlier record.
pub fn build_graph(catalog: &Catalog, options: &GraphOptions, language: Language) -> ColorGraph {
    let nodes = catalog
        .records()
        .iter()
        .map(|r| Node {
            id: r.id,
            label: r.display_name(language).to_string(),
            title: r.description.clone(),
            color: r.hex_code.to_string(),
        })
        .collect();

    let mut relations = Vec::with_capacity(2);
    if options.similar {
        relations.push(RelationKind::Similar);
    }
    if options.used_with {
        relations.push(RelationKind::UsedWith);
    }

    let mut edges = Vec::new();
    for record in catalog.records() {
        for &relation in &relations {
            for &target in record.related_ids(relation) {
                let same_name = catalog
                    .get(target)
                    .is_some_and(|t| t.name == record.name);
                if target == record.id || same_name {
                    continue;
                }
                edges.push(Edge {
                    from: record.id,
                    to: target,
                    relation,
                    label: edge_label(relation).to_string(),
                });
            }
        }
    }

    ColorGraph { nodes, edges }
}

fn edge_label(relation: RelationKind) -> &'static str {
    match relation {
        RelationKind::Similar => SIMILAR_EDGE_LABEL,
        RelationKind::UsedWith => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ColorRecord, HexColor};
    use pretty_assertions::assert_eq;

    fn record(name: &str, hex: &str, used_with: &[&str], similar: &[&str]) -> ColorRecord {
        let mut r = ColorRecord::new(0, name, HexColor::parse(hex).unwrap());
        r.used_with = used_with.iter().map(|s| s.to_string()).collect();
        r.similar_colors = similar.iter().map(|s| s.to_string()).collect();
        r
    }

    fn pairs(graph: &ColorGraph) -> Vec<(usize, usize)> {
        graph.edges.iter().map(|e| (e.from, e.to)).collect()
    }

    #[test]
    fn test_red_crimson_example() {
        let catalog = Catalog::from_records(vec![
            record("Red", "#FF0000", &[], &[]),
            record("Crimson", "#DC143C", &["Red"], &[]),
        ]);
        let graph = build_graph(&catalog, &GraphOptions::default(), Language::Korean);

        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(pairs(&graph), vec![(1, 0)]);
        assert_eq!(graph.edges[0].relation, RelationKind::UsedWith);
        assert_eq!(graph.edges[0].label, "");
        assert_eq!(graph.nodes[1].color, "#DC143C");
    }

    #[test]
    fn test_self_loops_and_unknown_names_skipped() {
        let catalog = Catalog::from_records(vec![
            record("Red", "#FF0000", &["Red", "Ghost"], &["Red"]),
            record("Blue", "#0000FF", &["Red", "Blue"], &[]),
        ]);
        let options = GraphOptions {
            used_with: true,
            similar: true,
        };
        let graph = build_graph(&catalog, &options, Language::Korean);
        assert_eq!(pairs(&graph), vec![(1, 0)]);
    }

    #[test]
    fn test_duplicate_name_self_reference_skipped() {
        let catalog = Catalog::from_records(vec![
            record("Twin", "#101010", &[], &[]),
            record("Twin", "#202020", &["Twin"], &[]),
            record("Other", "#303030", &["Twin"], &[]),
        ]);
        let graph = build_graph(&catalog, &GraphOptions::default(), Language::Korean);
        assert_eq!(pairs(&graph), vec![(2, 0)]);
    }

    #[test]
    fn test_similar_edges_only_when_enabled() {
        let catalog = Catalog::from_records(vec![
            record("Red", "#FF0000", &[], &["Crimson"]),
            record("Crimson", "#DC143C", &[], &[]),
        ]);

        let graph = build_graph(&catalog, &GraphOptions::default(), Language::Korean);
        assert!(graph.edges.is_empty());

        let options = GraphOptions {
            used_with: false,
            similar: true,
        };
        let graph = build_graph(&catalog, &options, Language::Korean);
        assert_eq!(pairs(&graph), vec![(0, 1)]);
        assert_eq!(graph.edges[0].label, SIMILAR_EDGE_LABEL);
        assert_eq!(graph.edges_from(0).count(), 1);
    }

    #[test]
    fn test_node_labels_follow_language() {
        let mut red = record("홍색", "#FF0000", &[], &[]);
        red.english_name = Some("Hongsaek".into());
        red.description = "vivid red".into();
        let catalog = Catalog::from_records(vec![red]);

        let graph = build_graph(&catalog, &GraphOptions::default(), Language::English);
        assert_eq!(graph.nodes[0].label, "Hongsaek");
        assert_eq!(graph.nodes[0].title, "vivid red");
    }

    #[test]
    fn test_graph_json_shape() {
        let catalog = Catalog::from_records(vec![
            record("Red", "#FF0000", &[], &[]),
            record("Crimson", "#DC143C", &["Red"], &[]),
        ]);
        let graph = build_graph(&catalog, &GraphOptions::default(), Language::Korean);
        let value: serde_json::Value = serde_json::from_str(&graph.to_json().unwrap()).unwrap();
        assert_eq!(value["edges"][0]["from"], 1);
        assert_eq!(value["edges"][0]["relation"], "used_with");
        assert_eq!(value["nodes"][0]["label"], "Red");
    }
}
