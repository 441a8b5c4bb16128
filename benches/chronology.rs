// benches/chronology.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use launch_stats::scrape;

/// A synthetic chronology page with `rows` launch rows, shaped like the
/// real thing (nav table first, then the chronlist table).
fn synthetic_page(rows: usize) -> String {
    let mut body = String::with_capacity(rows * 220);
    for i in 0..rows {
        let day = i % 28 + 1;
        let month = i % 12 + 1;
        body.push_str(&format!(
            r#"<tr><td>2020-{i:03}</td><td>{day:02}.{month:02}.2020</td>
               <td><a href="sat.htm">Payload {i}</a></td><td>Falcon-9 v1.2</td>
               <td>CC SLC-40</td><td></td></tr>"#
        ));
    }
    format!(
        r#"<html><head><title>Orbital Launches of 2020</title></head><body>
           <table class="nav"><tr><td>navigation</td></tr></table>
           <table id="chronlist" class="data">
             <tr><th>ID</th><th>Date</th><th>Payload</th><th>Vehicle</th><th>Site</th><th>Remarks</th></tr>
             {body}
           </table>
           </body></html>"#
    )
}

fn bench_chronology(c: &mut Criterion) {
    let doc = synthetic_page(200);

    c.bench_function("chronology_parse_200", |b| {
        b.iter(|| {
            let launches = scrape::parse_doc(black_box(&doc), 2020).unwrap();
            black_box(launches.len())
        })
    });
}

criterion_group!(benches, bench_chronology);
criterion_main!(benches);
