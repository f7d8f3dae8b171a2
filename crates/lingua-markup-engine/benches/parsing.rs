use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lingua_markup_engine::{assemble, parse};
mod common;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for paragraphs in [1, 10, 100] {
        let reply = common::generate_tutor_reply(paragraphs);
        group.bench_with_input(
            BenchmarkId::new("tutor_reply", paragraphs),
            &reply,
            |b, reply| b.iter(|| parse(std::hint::black_box(reply))),
        );
    }

    let soup = common::generate_delimiter_soup(1000);
    group.bench_function("delimiter_soup", |b| {
        b.iter(|| parse(std::hint::black_box(&soup)))
    });

    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_trip");
    group.sample_size(20);

    let lesson = common::generate_lesson(200);
    group.bench_function("assemble", |b| {
        b.iter(|| assemble(std::hint::black_box(&lesson)))
    });
    group.bench_function("assemble_then_parse", |b| {
        b.iter(|| parse(&assemble(std::hint::black_box(&lesson))))
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_round_trip);
criterion_main!(benches);
