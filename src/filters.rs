// src/filters.rs
use std::collections::BTreeSet;

use crate::catalog::Catalog;

/// Distinct values offered in the Department and Term dropdowns.
/// Always derived from one Catalog; rebuild it whenever the catalog changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub departments: Vec<String>,
    pub terms: Vec<String>,
}

impl FilterOptions {
    /// Non-empty values only, deduplicated, sorted ascending.
    pub fn build(catalog: &Catalog) -> Self {
        let mut departments = BTreeSet::new();
        let mut terms = BTreeSet::new();
        for row in catalog.rows() {
            if !row.department.is_empty() {
                departments.insert(row.department.as_str());
            }
            if !row.term.is_empty() {
                terms.insert(row.term.as_str());
            }
        }
        Self {
            departments: departments.into_iter().map(str::to_owned).collect(),
            terms: terms.into_iter().map(str::to_owned).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty() && self.terms.is_empty()
    }
}
