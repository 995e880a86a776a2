// src/scrape.rs
//
// Builds the dataset from a class-search results page.
//
// Listings are taken from table rows when the page has a real table
// (more than MIN_TABLE_ROWS `<tr>`), otherwise from course/result cards
// (`div`/`li` whose class contains "course" or "result"). Each listing's
// text becomes one Row: Course is the text before the first " - ",
// Description the leading text; the remaining columns are left empty.

use log::{debug, info};

use crate::{
    catalog::Row,
    config::consts::{
        COURSE_MAX_CHARS, COURSE_SEPARATOR, DESCRIPTION_MAX_CHARS, MIN_TABLE_ROWS,
    },
    error::LoadError,
    html::{self, Element},
    source::{self, Source},
};

/// Which part of the page the rows came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Table,
    Cards,
    /// Neither a usable table nor any cards
    Nothing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scraped {
    pub strategy: Strategy,
    pub rows: Vec<Row>,
}

/// Fetch `page` (URL or saved HTML file) and extract its listings.
pub fn scrape(page: &Source) -> Result<Scraped, LoadError> {
    info!("Scrape: begin page={}", page);
    let doc = source::fetch_text(page)?;
    let scraped = extract(&doc);
    info!("Scrape: {:?} → {} row(s)", scraped.strategy, scraped.rows.len());
    Ok(scraped)
}

pub fn extract(doc: &str) -> Scraped {
    let texts = table_texts(doc);
    if !texts.is_empty() {
        return Scraped { strategy: Strategy::Table, rows: to_rows(texts) };
    }

    let texts = card_texts(doc);
    if !texts.is_empty() {
        return Scraped { strategy: Strategy::Cards, rows: to_rows(texts) };
    }

    Scraped { strategy: Strategy::Nothing, rows: Vec::new() }
}

/// Non-empty `<tr>` texts, or nothing if the page has too few rows to be a
/// listing table.
fn table_texts(doc: &str) -> Vec<String> {
    let rows = html::elements(doc, &["tr"]);
    if rows.len() <= MIN_TABLE_ROWS {
        debug!("Scrape: {} <tr>, not a results table", rows.len());
        return Vec::new();
    }
    non_empty_texts(&rows)
}

fn card_texts(doc: &str) -> Vec<String> {
    let cards: Vec<Element<'_>> = html::elements(doc, &["div", "li"])
        .into_iter()
        .filter(is_card)
        .collect();
    non_empty_texts(&cards)
}

fn is_card(el: &Element<'_>) -> bool {
    el.attr("class")
        .is_some_and(|c| c.contains("course") || c.contains("result"))
}

fn non_empty_texts(els: &[Element<'_>]) -> Vec<String> {
    els.iter()
        .map(Element::text)
        .filter(|t| !t.is_empty())
        .collect()
}

fn to_rows(texts: Vec<String>) -> Vec<Row> {
    texts.iter().map(|t| row_from_text(t)).collect()
}

/// One listing's flattened text → a Row with Course and Description set.
pub fn row_from_text(text: &str) -> Row {
    let head = text.split(COURSE_SEPARATOR).next().unwrap_or(text);
    Row {
        course: head.chars().take(COURSE_MAX_CHARS).collect(),
        description: text.chars().take(DESCRIPTION_MAX_CHARS).collect(),
        ..Row::default()
    }
}
