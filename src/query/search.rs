//! Name search and RGB similarity ranking.

use crate::error::Result;
use crate::model::{Catalog, HexColor};
use serde::Serialize;
use tracing::debug;

/// One query hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    /// Record id.
    pub id: usize,
    /// RGB distance from the reference color; `None` for name matches.
    pub distance: Option<f64>,
}

/// A user query. Name search and similarity ranking are mutually exclusive.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Case-insensitive substring search; the term is stored lowercased.
    Name(String),
    /// Nearest colors to a reference.
    Similar(HexColor),
    /// Nothing to look for; views clear.
    Empty,
}

impl Query {
    /// Build a query from raw form input.
    ///
    /// A non-blank term wins over a reference color. A blank reference is
    /// treated as absent; a malformed one is an `InvalidHex` error.
    pub fn from_input(term: &str, reference: Option<&str>) -> Result<Self> {
        let term = term.trim();
        if !term.is_empty() {
            return Ok(Query::Name(term.to_lowercase()));
        }

        match reference.map(str::trim).filter(|r| !r.is_empty()) {
            Some(hex) => Ok(Query::Similar(HexColor::parse(hex)?)),
            None => Ok(Query::Empty),
        }
    }

    /// Run the query against a catalog.
    pub fn run(&self, catalog: &Catalog, top_n: usize) -> Vec<Match> {
        match self {
            Query::Name(term) => search_by_name(catalog, term),
            Query::Similar(reference) => rank_by_similarity(catalog, reference, top_n),
            Query::Empty => Vec::new(),
        }
    }
}

/// Every record whose name or an alternative name contains `term`,
/// ignoring case, in catalog order. A blank term matches nothing.
pub fn search_by_name(catalog: &Catalog, term: &str) -> Vec<Match> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let matches: Vec<Match> = catalog
        .records()
        .iter()
        .filter(|r| r.matches_term(&needle))
        .map(|r| Match {
            id: r.id,
            distance: None,
        })
        .collect();

    debug!("Name search '{}': {} match(es)", needle, matches.len());
    matches
}

/// The `top_n` records closest to `reference`, nearest first.
///
/// Ties keep catalog order.
pub fn rank_by_similarity(catalog: &Catalog, reference: &HexColor, top_n: usize) -> Vec<Match> {
    let mut ranked: Vec<Match> = catalog
        .records()
        .iter()
        .map(|r| Match {
            id: r.id,
            distance: Some(reference.distance(&r.hex_code)),
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| {
        let da = a.distance.unwrap_or(f64::INFINITY);
        let db = b.distance.unwrap_or(f64::INFINITY);
        da.total_cmp(&db)
    });
    ranked.truncate(top_n);

    debug!("Similarity ranking for {}: {} result(s)", reference, ranked.len());
    ranked
}
