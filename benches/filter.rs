// benches/filter.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use ztc_catalog::{
    catalog::{Catalog, Row},
    query::{self, QueryState},
    render,
};

/// Synthetic catalog at the upper end of the expected size.
fn sample(n: usize) -> Catalog {
    let depts = ["CS", "Math", "English", "Biology", "Art", "History"];
    let terms = ["Fall", "Spring", "Summer", "Winter"];
    Catalog::from_rows((0..n).map(|i| Row {
        course: format!("{} {}", depts[i % depts.len()], 100 + i % 300),
        description: format!("Section {i} of an introductory survey course"),
        department: depts[i % depts.len()].to_string(),
        term: terms[i % terms.len()].to_string(),
        instructor: if i % 7 == 0 { String::new() } else { format!("Instructor {}", i % 50) },
        link: if i % 3 == 0 { format!("https://example.edu/c/{i}") } else { String::new() },
    }))
}

fn bench_filter(c: &mut Criterion) {
    let cat = sample(3_000);

    c.bench_function("filter_text", |b| {
        let q = QueryState::from_controls("intro", "", "");
        b.iter(|| black_box(query::filter(black_box(&cat), &q).len()))
    });

    c.bench_function("filter_all_predicates", |b| {
        let q = QueryState::from_controls("section 1", "CS", "Fall");
        b.iter(|| black_box(query::filter(black_box(&cat), &q).len()))
    });

    c.bench_function("filter_render_html", |b| {
        let q = QueryState::from_controls("survey", "", "");
        b.iter(|| {
            let view = query::filter(black_box(&cat), &q);
            black_box(render::render(view.rows()).to_html().len())
        })
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
