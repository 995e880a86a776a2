// src/catalog.rs
//
// Canonical course data.
//
// - Row: one course record, fields named after the CSV header.
// - Catalog: the ordered, read-only set of rows currently loaded.
//            Built once per load and replaced wholesale; never edited.

use serde::Serialize;

/// Header names, in the order the dataset writes them.
pub const COLUMNS: [&str; 6] = ["Course", "Description", "Department", "Term", "Instructor", "Link"];

/// One course record. Columns missing from the file stay empty.
/// Serializes in `COLUMNS` order for CSV export.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Row {
    #[serde(rename = "Course")]
    pub course: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Term")]
    pub term: String,
    #[serde(rename = "Instructor")]
    pub instructor: String,
    #[serde(rename = "Link")]
    pub link: String,
}

impl Row {
    /// A row is kept only if it names a course or describes one.
    /// Anything else is a blank or malformed line.
    pub fn is_retained(&self) -> bool {
        !self.course.trim().is_empty() || !self.description.trim().is_empty()
    }

    /// Lowercased "Course Description Instructor", the text the search box matches against.
    pub fn search_text(&self) -> String {
        let mut s = String::with_capacity(
            self.course.len() + self.description.len() + self.instructor.len() + 2,
        );
        s.push_str(&self.course);
        s.push(' ');
        s.push_str(&self.description);
        s.push(' ');
        s.push_str(&self.instructor);
        s.to_lowercase()
    }

    pub fn has_link(&self) -> bool {
        !self.link.is_empty()
    }
}

/// Authoritative in-memory dataset. Rows always satisfy `Row::is_retained`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    rows: Vec<Row>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from raw rows, dropping the ones that fail retention.
    pub fn from_rows<I: IntoIterator<Item = Row>>(rows: I) -> Self {
        Self { rows: rows.into_iter().filter(Row::is_retained).collect() }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn get(&self, ix: usize) -> Option<&Row> {
        self.rows.get(ix)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
