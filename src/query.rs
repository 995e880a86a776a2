// src/query.rs
//
// Query engine: one linear pass over the catalog per call.
//
// - QueryState: what the user typed/selected, read fresh from the controls.
// - CatalogView: the matching rows, as positions into the catalog.
//                Borrowed, zero-copy, always in catalog order.

use crate::catalog::{Catalog, Row};

/// Current filter inputs. `None` means the dropdown is on "All".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryState {
    pub text: String,
    pub department: Option<String>,
    pub term: Option<String>,
}

impl QueryState {
    /// Build from raw control values; an empty dropdown value means no filter.
    pub fn from_controls(text: &str, department: &str, term: &str) -> Self {
        let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self { text: text.to_string(), department: opt(department), term: opt(term) }
    }

    /// Trimmed, lowercased search text. Empty means "match everything".
    pub fn needle(&self) -> String {
        self.text.trim().to_lowercase()
    }
}

/// Compiled form of a QueryState, so the needle is lowercased once per pass.
struct Predicate<'q> {
    needle: String,
    department: Option<&'q str>,
    term: Option<&'q str>,
}

impl<'q> Predicate<'q> {
    fn new(q: &'q QueryState) -> Self {
        Self {
            needle: q.needle(),
            department: q.department.as_deref(),
            term: q.term.as_deref(),
        }
    }

    fn matches(&self, row: &Row) -> bool {
        if !self.needle.is_empty() && !row.search_text().contains(&self.needle) {
            return false;
        }
        if let Some(d) = self.department {
            if row.department != d { return false; }
        }
        if let Some(t) = self.term {
            if row.term != t { return false; }
        }
        true
    }
}

/// Rows of `catalog` that pass every active predicate, in catalog order.
pub fn filter<'a>(catalog: &'a Catalog, query: &QueryState) -> CatalogView<'a> {
    let pred = Predicate::new(query);
    let row_ix = catalog
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| pred.matches(row))
        .map(|(ix, _)| ix)
        .collect();
    CatalogView { row_ix, catalog }
}

/// Filtered view for display/export. Holds positions of kept rows.
#[derive(Clone, Debug)]
pub struct CatalogView<'a> {
    /// Positions of kept rows in the catalog, strictly increasing
    pub row_ix: Vec<usize>,
    catalog: &'a Catalog,
}

impl<'a> CatalogView<'a> {
    /// Every row, unfiltered.
    pub fn all(catalog: &'a Catalog) -> Self {
        Self { row_ix: (0..catalog.len()).collect(), catalog }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a single row by projected index (no cloning).
    pub fn row(&self, i: usize) -> Option<&'a Row> {
        self.row_ix.get(i).and_then(|&ix| self.catalog.get(ix))
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a Row> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.catalog.get(ix))
    }

    /// Materialize owned rows (for export boundaries).
    pub fn to_owned_rows(&self) -> Vec<Row> {
        self.rows().cloned().collect()
    }
}
