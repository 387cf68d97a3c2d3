use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pvp_rank_engine::{Classifier, Ladder, PlayerRecord};

fn record_with_titles(n: usize) -> PlayerRecord {
    let mut record = PlayerRecord::new("Thrall-Ragnaros");
    for i in 0..n {
        record.titles.push(match i % 4 {
            0 => format!("Duelist: Season {}", i),
            1 => format!("Gladiator: Season {}", i),
            2 => format!("Challenger II: Season {}", i),
            _ => format!("the Patient {}", i),
        });
    }
    record
}

fn bench_classify(c: &mut Criterion) {
    let classifier = Classifier::new(Ladder::standard()).unwrap();

    let mut group = c.benchmark_group("classify");
    for n in [1usize, 10, 50] {
        let record = record_with_titles(n);
        group.bench_with_input(BenchmarkId::new("titles", n), &record, |b, record| {
            b.iter(|| black_box(classifier.classify(record)));
        });
    }
    group.finish();
}

fn bench_classify_empty_history(c: &mut Criterion) {
    let classifier = Classifier::new(Ladder::standard()).unwrap();
    let record = PlayerRecord::new("Peaceful-Ragnaros");

    c.bench_function("classify_empty", |b| {
        b.iter(|| black_box(classifier.classify(&record)));
    });
}

criterion_group!(benches, bench_classify, bench_classify_empty_history);
criterion_main!(benches);
