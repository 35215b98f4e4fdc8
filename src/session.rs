//! Session - Application state for one user session.
//!
//! Owns the loaded catalog, the palette and the display language. Catalog
//! data is parsed once and reused until [`Session::reload`].
//!
//! Queries are ticketed: only the most recently issued ticket for the
//! current catalog generation may publish results. An interactive front end
//! that computes results off the input path calls [`Session::issue`], runs
//! the [`PendingQuery`] and hands the result to [`Session::publish`]; a late
//! answer to a superseded query is discarded.

use crate::config::{CatalogConfig, Language};
use crate::error::{CatalogError, Result};
use crate::graph::{build_graph, ColorGraph};
use crate::model::{Catalog, HexColor};
use crate::palette::{ColorChip, Palette, PaletteChange, PaletteExport};
use crate::parser::{parse_catalog_file, LoadReport};
use crate::query::{Match, Query};
use crate::view::{self, CatalogEntry, ColorDetail, SearchResultItem};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Identifies one issued query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTicket {
    generation: u64,
    sequence: u64,
}

/// A query waiting to be run.
#[derive(Debug, Clone)]
pub struct PendingQuery {
    pub ticket: QueryTicket,
    pub query: Query,
    top_n: usize,
}

impl PendingQuery {
    /// Run against a catalog.
    pub fn run(&self, catalog: &Catalog) -> Vec<Match> {
        self.query.run(catalog, self.top_n)
    }
}

/// State for one catalog session.
#[derive(Debug)]
pub struct Session {
    source: Option<PathBuf>,
    config: CatalogConfig,
    catalog: Catalog,
    generation: u64,
    language: Language,
    palette: Palette,
    next_sequence: u64,
    latest: Option<QueryTicket>,
    results: Vec<Match>,
}

impl Session {
    /// Load a dataset file and start a session over it.
    pub fn open(path: &Path, config: CatalogConfig) -> Result<Self> {
        let report = parse_catalog_file(path, &config.loader)?;
        log_report(&report);

        let mut session = Self::from_catalog(report.catalog, config);
        session.source = Some(path.to_path_buf());
        Ok(session)
    }

    /// Start a session over an already loaded catalog.
    pub fn from_catalog(catalog: Catalog, config: CatalogConfig) -> Self {
        Self {
            source: None,
            language: config.language,
            config,
            catalog,
            generation: 0,
            palette: Palette::new(),
            next_sequence: 0,
            latest: None,
            results: Vec::new(),
        }
    }

    /// Re-read the dataset file.
    ///
    /// On failure the previous catalog stays in place and the error is
    /// returned. On success, results from the old catalog are cleared and
    /// outstanding tickets become stale. The palette is kept.
    pub fn reload(&mut self) -> Result<()> {
        if let Some(path) = &self.source {
            let report = parse_catalog_file(path, &self.config.loader)?;
            log_report(&report);
            self.catalog = report.catalog;
        }
        self.generation += 1;
        self.latest = None;
        self.results.clear();
        info!("Catalog generation {}", self.generation);
        Ok(())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of completed loads after the first.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    // ==================== Queries ====================

    /// Register a query. Any earlier ticket is superseded.
    pub fn issue(&mut self, query: Query) -> PendingQuery {
        self.next_sequence += 1;
        let ticket = QueryTicket {
            generation: self.generation,
            sequence: self.next_sequence,
        };
        self.latest = Some(ticket);
        PendingQuery {
            ticket,
            query,
            top_n: self.config.effective_top_n(),
        }
    }

    /// Accept results for a ticket. Returns `false` and drops the results
    /// when the ticket is no longer the latest.
    pub fn publish(&mut self, ticket: QueryTicket, results: Vec<Match>) -> bool {
        if self.latest != Some(ticket) {
            debug!("Discarding results of superseded query {:?}", ticket);
            return false;
        }
        self.results = results;
        true
    }

    /// Currently displayed results.
    pub fn results(&self) -> &[Match] {
        &self.results
    }

    /// Currently displayed results as list rows.
    pub fn result_items(&self) -> Vec<SearchResultItem> {
        view::search_results(&self.catalog, &self.results, self.language)
    }

    /// Run a search from form input: a term, or else a reference color.
    ///
    /// Invalid reference input clears the displayed results and returns the
    /// error. Input with neither clears the results.
    pub fn search(&mut self, term: &str, reference: Option<&str>) -> Result<Vec<SearchResultItem>> {
        let query = match Query::from_input(term, reference) {
            Ok(query) => query,
            Err(err) => {
                self.latest = None;
                self.results.clear();
                return Err(err);
            }
        };

        let pending = self.issue(query);
        let results = pending.run(&self.catalog);
        self.publish(pending.ticket, results);
        Ok(self.result_items())
    }

    /// Search by name.
    pub fn submit_search(&mut self, term: &str) -> Result<Vec<SearchResultItem>> {
        self.search(term, None)
    }

    /// Rank by similarity to a reference color.
    pub fn select_reference_color(&mut self, hex: &str) -> Result<Vec<SearchResultItem>> {
        self.search("", Some(hex))
    }

    // ==================== Views ====================

    /// Detail panel for a clicked node or result.
    pub fn click_node(&self, id: usize) -> Result<ColorDetail> {
        view::color_detail(&self.catalog, id, self.language)
    }

    pub fn graph(&self) -> ColorGraph {
        build_graph(&self.catalog, &self.config.graph, self.language)
    }

    pub fn catalog_entries(&self) -> Vec<CatalogEntry> {
        view::catalog_entries(&self.catalog, self.language)
    }

    /// Color chip for a record.
    pub fn color_chip(&self, id: usize) -> Result<ColorChip> {
        let record = self
            .catalog
            .get(id)
            .ok_or(CatalogError::UnknownColor { id })?;
        Ok(ColorChip::for_record(record, self.language))
    }

    // ==================== Palette ====================

    /// Gallery click: select or deselect.
    pub fn toggle_palette_color(&mut self, hex: &str) -> Result<PaletteChange> {
        Ok(self.palette.toggle(HexColor::parse(hex.trim())?))
    }

    /// Detail-view button: select, never deselect.
    pub fn add_to_palette(&mut self, hex: &str) -> Result<bool> {
        Ok(self.palette.add_if_absent(HexColor::parse(hex.trim())?))
    }

    pub fn remove_from_palette(&mut self, hex: &str) -> Result<bool> {
        Ok(self.palette.remove(&HexColor::parse(hex.trim())?))
    }

    /// Reorder the palette by catalog order.
    pub fn sort_palette(&mut self) {
        self.palette.sort_by_catalog(&self.catalog);
    }

    /// Export plan for the current palette; `EmptySelection` when empty.
    pub fn request_export(&self) -> Result<PaletteExport> {
        self.palette.export_plan()
    }
}

fn log_report(report: &LoadReport) {
    if !report.catalog.unresolved().is_empty() {
        warn!(
            "{} relation name(s) did not match any color and were dropped",
            report.catalog.unresolved().len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColorRecord;
    use pretty_assertions::assert_eq;

    fn session() -> Session {
        let red = ColorRecord::new(0, "Red", HexColor::parse("#FF0000").unwrap());
        let mut crimson = ColorRecord::new(0, "Crimson", HexColor::parse("#DC143C").unwrap());
        crimson.used_with = vec!["Red".into()];
        let black = ColorRecord::new(0, "Black", HexColor::parse("#000000").unwrap());
        Session::from_catalog(
            Catalog::from_records(vec![red, crimson, black]),
            CatalogConfig::default(),
        )
    }

    fn names(items: &[SearchResultItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    // ==================== search tests ====================

    #[test]
    fn test_submit_search() {
        let mut s = session();
        assert_eq!(names(&s.submit_search("re").unwrap()), vec!["Red"]);
        assert_eq!(s.results().len(), 1);
    }

    #[test]
    fn test_empty_input_clears_results() {
        let mut s = session();
        s.submit_search("r").unwrap();
        assert!(!s.results().is_empty());

        assert!(s.search("  ", None).unwrap().is_empty());
        assert!(s.results().is_empty());
    }

    #[test]
    fn test_select_reference_color() {
        let mut s = session();
        let items = s.select_reference_color("#DD143C").unwrap();
        assert_eq!(names(&items), vec!["Crimson", "Red", "Black"]);
        assert!(items[0].distance.unwrap() > 0.0);
    }

    #[test]
    fn test_invalid_reference_clears_and_errors() {
        let mut s = session();
        s.submit_search("red").unwrap();
        assert!(s.select_reference_color("#12").is_err());
        assert!(s.results().is_empty());
    }

    // ==================== supersession tests ====================

    #[test]
    fn test_only_latest_ticket_publishes() {
        let mut s = session();
        let first = s.issue(Query::Name("red".into()));
        let second = s.issue(Query::Name("black".into()));

        let second_results = second.run(s.catalog());
        let first_results = first.run(s.catalog());

        assert!(s.publish(second.ticket, second_results));
        assert!(!s.publish(first.ticket, first_results));
        assert_eq!(names(&s.result_items()), vec!["Black"]);
    }

    #[test]
    fn test_reload_invalidates_tickets() {
        let mut s = session();
        let pending = s.issue(Query::Name("red".into()));
        let results = pending.run(s.catalog());

        s.reload().unwrap();
        assert_eq!(s.generation(), 1);
        assert!(!s.publish(pending.ticket, results));
        assert!(s.results().is_empty());
    }

    // ==================== palette tests ====================

    #[test]
    fn test_palette_actions() {
        let mut s = session();
        assert_eq!(s.toggle_palette_color("#FF0000").unwrap(), PaletteChange::Added);
        assert!(!s.add_to_palette("#FF0000").unwrap());
        assert!(s.add_to_palette("#000000").unwrap());
        assert!(s.remove_from_palette("#FF0000").unwrap());
        assert_eq!(s.palette().len(), 1);
        assert!(s.toggle_palette_color("not a color").is_err());
    }

    #[test]
    fn test_request_export_empty() {
        let s = session();
        assert!(matches!(
            s.request_export(),
            Err(CatalogError::EmptySelection)
        ));
    }

    #[test]
    fn test_sort_palette() {
        let mut s = session();
        s.add_to_palette("#000000").unwrap();
        s.add_to_palette("#FF0000").unwrap();
        s.sort_palette();
        let order: Vec<&str> = s.palette().colors().iter().map(|c| c.as_str()).collect();
        assert_eq!(order, vec!["#FF0000", "#000000"]);
    }

    // ==================== view tests ====================

    #[test]
    fn test_click_node_and_graph() {
        let s = session();
        let detail = s.click_node(1).unwrap();
        assert_eq!(detail.used_with.len(), 1);
        assert!(s.click_node(42).is_err());

        let graph = s.graph();
        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(graph.edges.len(), 1);
    }

    #[test]
    fn test_language_switch() {
        let mut s = session();
        s.set_language(Language::English);
        assert_eq!(s.language(), Language::English);
        // No English names in this catalog: primary names are shown.
        assert_eq!(s.catalog_entries()[0].name, "Red");
        assert_eq!(s.color_chip(0).unwrap().name, "Red");
    }
}
