//! Search Performance Benchmarks
//!
//! Full-text extraction and search-hit location over a synthetic ALTO page.
//!
//! Run with: `cargo bench --bench search_performance`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

use alto_engine::alto::AltoDocument;
use alto_engine::search::locate_search_terms;
use alto_engine::text::extract_annotated_text;

/// Build an ALTO page with `line_count` lines of eight words each
fn create_alto_page(line_count: usize) -> String {
    let mut alto = String::new();
    alto.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    alto.push_str(r#"<alto xmlns="http://www.loc.gov/standards/alto/ns-v3#"><Tags>"#);
    alto.push_str(r#"<NamedEntityTag ID="T1" TYPE="person" LABEL="Goethe" URI="http://d-nb.info/gnd/118540238"/>"#);
    alto.push_str(r#"</Tags><Layout><Page WIDTH="2400" HEIGHT="3600"><PrintSpace><TextBlock>"#);

    let words = ["Über", "allen", "Gipfeln", "ist", "Ruh", "Goethe", "bench-", "mark"];
    for line in 0..line_count {
        let vpos = 40 + line * 30;
        alto.push_str("<TextLine>");
        for (i, word) in words.iter().enumerate() {
            let extra = match *word {
                "Goethe" => r#" TAGREFS="T1""#,
                "bench-" => r#" SUBS_TYPE="HypPart1" SUBS_CONTENT="benchmark""#,
                "mark" => r#" SUBS_TYPE="HypPart2" SUBS_CONTENT="benchmark""#,
                _ => "",
            };
            alto.push_str(&format!(
                r#"<String CONTENT="{}"{} HPOS="{}" VPOS="{}" WIDTH="80" HEIGHT="24"/><SP/>"#,
                word,
                extra,
                40 + i * 100,
                vpos
            ));
        }
        alto.push_str("</TextLine>");
    }

    alto.push_str("</TextBlock></PrintSpace></Page></Layout></alto>");
    alto
}

fn bench_annotated_text(c: &mut Criterion) {
    let alto = create_alto_page(100);

    c.bench_function("annotated_text_100_lines", |b| {
        b.iter(|| extract_annotated_text(black_box(&alto)))
    });
}

fn bench_search(c: &mut Criterion) {
    let alto = create_alto_page(100);
    let doc = AltoDocument::parse(&alto).expect("valid benchmark page");

    let mut group = c.benchmark_group("search");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("single_word", |b| {
        b.iter(|| locate_search_terms(black_box(&doc), ["gipfeln"], 90, 0))
    });

    group.bench_function("phrase", |b| {
        b.iter(|| locate_search_terms(black_box(&doc), ["uber allen gipfeln"], 0, 0))
    });

    group.bench_function("parse_document", |b| {
        b.iter(|| AltoDocument::parse(black_box(&alto)))
    });

    group.finish();
}

criterion_group!(benches, bench_annotated_text, bench_search);
criterion_main!(benches);
