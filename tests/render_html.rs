// tests/render_html.rs
//
// Presenter output: card markup, TBA, link fragment, escaping, placeholders.
//
use ztc_catalog::catalog::Row;
use ztc_catalog::config::consts::{ALL_DEPARTMENTS, NO_RESULTS};
use ztc_catalog::render::{Fragment, Rendered, escape_html, render, render_select_options};

fn cs101() -> Row {
    Row {
        course: "CS101".into(),
        description: "Intro".into(),
        department: "CS".into(),
        term: "Fall".into(),
        instructor: String::new(),
        link: String::new(),
    }
}

#[test]
fn escape_replaces_amp_lt_gt_once() {
    assert_eq!(escape_html("a & b"), "a &amp; b");
    assert_eq!(escape_html("<script>x</script>"), "&lt;script&gt;x&lt;/script&gt;");
    assert_eq!(escape_html("&lt;"), "&amp;lt;");
    assert_eq!(escape_html("plain \"quoted\""), "plain \"quoted\"");
}

#[test]
fn empty_instructor_reads_tba() {
    let out = render([cs101()].iter());
    assert_eq!(out.card_count(), 1);
    let card = out.cards().next().unwrap();
    assert_eq!(card.instructor, "TBA");
    assert!(card.link.is_none());
    assert!(out.to_html().contains("<strong>Instructor:</strong> TBA</p>"));
}

#[test]
fn card_markup_layout() {
    let html = render([cs101()].iter()).to_html();
    let expected = "<article class=\"card\">\n  <h3>CS101</h3>\n  <p>Intro</p>\n  \
<p><strong>Dept:</strong> CS · <strong>Term:</strong> Fall</p>\n  \
<p><strong>Instructor:</strong> TBA</p>\n</article>\n";
    assert_eq!(html, expected);
}

#[test]
fn link_fragment_only_when_present() {
    let mut r = cs101();
    r.link = "https://example.edu/cs101".into();
    let html = render([r].iter()).to_html();
    assert!(html.contains("<a href=\"https://example.edu/cs101\" target=\"_blank\">Course Link</a>"));

    let html = render([cs101()].iter()).to_html();
    assert!(!html.contains("<a "));
}

#[test]
fn cards_keep_input_order() {
    let mut a = cs101();
    a.course = "B".into();
    let mut b = cs101();
    b.course = "A".into();
    let out = render([a, b].iter());
    let names: Vec<&str> = out.cards().map(|c| c.course.as_str()).collect();
    assert_eq!(names, vec!["B", "A"]);
}

#[test]
fn every_text_field_is_escaped() {
    let r = Row {
        course: "<script>alert(1)</script>".into(),
        description: "Fish & Chips".into(),
        department: "A>B".into(),
        term: "<Fall>".into(),
        instructor: "Dr. <b>Who</b>".into(),
        link: "https://example.edu/?a=1&b=<2>".into(),
    };
    let html = render([r].iter()).to_html();

    assert!(html.contains("<h3>&lt;script&gt;alert(1)&lt;/script&gt;</h3>"));
    assert!(html.contains("<p>Fish &amp; Chips</p>"));
    assert!(html.contains("</strong> A&gt;B · "));
    assert!(html.contains("</strong> &lt;Fall&gt;</p>"));
    assert!(html.contains("Dr. &lt;b&gt;Who&lt;/b&gt;"));
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<b>"));

    // The link attribute is inserted as-is
    assert!(html.contains("href=\"https://example.edu/?a=1&b=<2>\""));
}

#[test]
fn no_rows_gives_single_placeholder() {
    let out = render(std::iter::empty::<&Row>());
    assert!(out.is_no_results());
    assert_eq!(out.fragments(), &[Fragment::Placeholder(NO_RESULTS.to_string())]);
    assert_eq!(out.to_html(), "<p class=\"card\">No courses found.</p>\n");
}

#[test]
fn load_error_message_names_file() {
    let out = Rendered::load_error("ztc_live.csv");
    assert!(out.is_load_error());
    assert_eq!(
        out.to_html(),
        "<p class=\"card\">Error loading CSV. Ensure <code>ztc_live.csv</code> is present at repository root.</p>\n"
    );
    assert!(out.to_text().contains("Ensure ztc_live.csv is present"));
}

#[test]
fn text_rendition_lists_fields() {
    let mut r = cs101();
    r.link = "https://example.edu".into();
    let txt = render([r].iter()).to_text();
    assert!(txt.starts_with("CS101\n"));
    assert!(txt.contains("  Dept: CS · Term: Fall\n"));
    assert!(txt.contains("  Instructor: TBA\n"));
    assert!(txt.contains("  Course Link: https://example.edu\n"));
}

#[test]
fn select_options_start_with_all_and_escape_values() {
    let html = render_select_options(ALL_DEPARTMENTS, &["CS".into(), "R&D".into()]);
    assert_eq!(
        html,
        "<option value=\"\">All Departments</option>\
<option value=\"CS\">CS</option>\
<option value=\"R&amp;D\">R&amp;D</option>"
    );
}
