// src/render.rs
//
// Presenter: turns rows into display fragments.
//
// Fragments are structured (Card/Placeholder/LoadError) so the GUI can draw
// them natively; `to_html` and `to_text` serialize them. All dataset text
// passes through `escape_html` on the way into markup. The one exception is
// the card link, written by `HtmlBuf::raw_attr` (see the note there).

use std::fmt::Write as _;

use crate::catalog::Row;
use crate::config::consts::{INSTRUCTOR_TBA, LINK_LABEL, NO_RESULTS};

/// Replace `&`, `<`, `>` with their entities. `&` goes first so the other
/// replacements are not double-escaped.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

/// One course, ready for display. Text is raw here; escaping happens on output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub course: String,
    pub description: String,
    pub department: String,
    pub term: String,
    /// Instructor name, or "TBA"
    pub instructor: String,
    /// Present only when the row has a link
    pub link: Option<String>,
}

impl Card {
    pub fn from_row(row: &Row) -> Self {
        let instructor = if row.instructor.is_empty() {
            INSTRUCTOR_TBA.to_string()
        } else {
            row.instructor.clone()
        };
        Self {
            course: row.course.clone(),
            description: row.description.clone(),
            department: row.department.clone(),
            term: row.term.clone(),
            instructor,
            link: row.has_link().then(|| row.link.clone()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fragment {
    Card(Card),
    /// "No courses found."
    Placeholder(String),
    /// Fallback shown in place of results when the dataset can't be loaded
    LoadError { file_name: String },
}

/// Display output for the results area.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rendered {
    fragments: Vec<Fragment>,
}

/// One card per row, in input order; the no-results placeholder if there are none.
pub fn render<'r, I>(rows: I) -> Rendered
where
    I: IntoIterator<Item = &'r Row>,
{
    let mut fragments: Vec<Fragment> = rows
        .into_iter()
        .map(|row| Fragment::Card(Card::from_row(row)))
        .collect();
    if fragments.is_empty() {
        fragments.push(Fragment::Placeholder(NO_RESULTS.to_string()));
    }
    Rendered { fragments }
}

impl Rendered {
    /// Results area replaced by the load-failure message.
    pub fn load_error(file_name: impl Into<String>) -> Self {
        Self { fragments: vec![Fragment::LoadError { file_name: file_name.into() }] }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.fragments.iter().filter_map(|f| match f {
            Fragment::Card(c) => Some(c),
            _ => None,
        })
    }

    pub fn card_count(&self) -> usize {
        self.cards().count()
    }

    pub fn is_no_results(&self) -> bool {
        matches!(self.fragments.as_slice(), [Fragment::Placeholder(_)])
    }

    pub fn is_load_error(&self) -> bool {
        matches!(self.fragments.as_slice(), [Fragment::LoadError { .. }])
    }

    pub fn to_html(&self) -> String {
        let mut buf = HtmlBuf::default();
        for f in &self.fragments {
            match f {
                Fragment::Card(card) => write_card(&mut buf, card),
                Fragment::Placeholder(msg) => {
                    buf.markup("<p class=\"card\">");
                    buf.text(msg);
                    buf.markup("</p>\n");
                }
                Fragment::LoadError { file_name } => {
                    buf.markup("<p class=\"card\">Error loading CSV. Ensure <code>");
                    buf.text(file_name);
                    buf.markup("</code> is present at repository root.</p>\n");
                }
            }
        }
        buf.finish()
    }

    /// Plain-text rendition for terminals.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (i, f) in self.fragments.iter().enumerate() {
            if i > 0 { out.push('\n'); }
            match f {
                Fragment::Card(c) => {
                    let _ = writeln!(out, "{}", c.course);
                    if !c.description.is_empty() {
                        let _ = writeln!(out, "  {}", c.description);
                    }
                    let _ = writeln!(out, "  Dept: {} · Term: {}", c.department, c.term);
                    let _ = writeln!(out, "  Instructor: {}", c.instructor);
                    if let Some(link) = &c.link {
                        let _ = writeln!(out, "  {}: {}", LINK_LABEL, link);
                    }
                }
                Fragment::Placeholder(msg) => {
                    let _ = writeln!(out, "{msg}");
                }
                Fragment::LoadError { file_name } => {
                    let _ = writeln!(
                        out,
                        "Error loading CSV. Ensure {file_name} is present at repository root."
                    );
                }
            }
        }
        out
    }
}

fn write_card(buf: &mut HtmlBuf, card: &Card) {
    buf.markup("<article class=\"card\">\n  <h3>");
    buf.text(&card.course);
    buf.markup("</h3>\n  <p>");
    buf.text(&card.description);
    buf.markup("</p>\n  <p><strong>Dept:</strong> ");
    buf.text(&card.department);
    buf.markup(" · <strong>Term:</strong> ");
    buf.text(&card.term);
    buf.markup("</p>\n  <p><strong>Instructor:</strong> ");
    buf.text(&card.instructor);
    buf.markup("</p>\n");
    if let Some(link) = &card.link {
        buf.markup("  <p><a href=\"");
        buf.raw_attr(link);
        buf.markup("\" target=\"_blank\">");
        buf.text(LINK_LABEL);
        buf.markup("</a></p>\n");
    }
    buf.markup("</article>\n");
}

/// `<option>` list for a dropdown: the "All …" entry (empty value) first,
/// then one entry per value. Values are escaped in both positions.
pub fn render_select_options(all_label: &str, values: &[String]) -> String {
    let mut buf = HtmlBuf::default();
    buf.markup("<option value=\"\">");
    buf.text(all_label);
    buf.markup("</option>");
    for v in values {
        buf.markup("<option value=\"");
        buf.text(v);
        buf.markup("\">");
        buf.text(v);
        buf.markup("</option>");
    }
    buf.finish()
}

/// Markup builder. Static markup goes in as-is; anything from the dataset
/// goes through `text`.
#[derive(Default)]
struct HtmlBuf(String);

impl HtmlBuf {
    fn markup(&mut self, m: &'static str) {
        self.0.push_str(m);
    }

    fn text(&mut self, s: &str) {
        self.0.push_str(&escape_html(s));
    }

    /// Unescaped attribute value. Used only for the card link.
    /// KNOWN GAP: a link containing `"` can break out of the href attribute.
    fn raw_attr(&mut self, s: &str) {
        self.0.push_str(s);
    }

    fn finish(self) -> String {
        self.0
    }
}
