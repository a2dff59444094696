use criterion::{criterion_group, criterion_main, Criterion};
use search_core::{DocumentStatus, SearchServer};

const WORDS: &[&str] = &[
    "curly", "cat", "tail", "dog", "fancy", "collar", "big", "sparrow", "white", "groomed", "eyes", "and", "in", "at",
];

fn build_server(num_docs: i32) -> SearchServer {
    let mut server = SearchServer::from_stop_words_text("and in at").expect("valid stop words");
    for id in 0..num_docs {
        let text: Vec<&str> = (0..12).map(|i| WORDS[(id as usize * 7 + i * 3) % WORDS.len()]).collect();
        server
            .add_document(id, &text.join(" "), DocumentStatus::Actual, &[id % 10, 3])
            .expect("valid document");
    }
    server
}

fn bench_index(c: &mut Criterion) {
    c.bench_function("add_1000_documents", |b| b.iter(|| build_server(1000)));
}

fn bench_search(c: &mut Criterion) {
    let server = build_server(10_000);
    c.bench_function("find_top_documents", |b| {
        b.iter(|| server.find_top_documents("curly dog -collar").expect("valid query"))
    });
}

criterion_group!(benches, bench_index, bench_search);
criterion_main!(benches);
