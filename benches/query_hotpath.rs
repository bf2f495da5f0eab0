use criterion::{black_box, criterion_group, criterion_main, Criterion};
use search_syntax::{clean_filter_value, tokenize, FieldTable};

const QUERY_MIN: &str = "status:unresolved";

const QUERY_MIXED: &str = "database timeout (browser:[chrome,firefox] OR !error.handled:true) \
    transaction.duration:>500 last_seen:-7d failure_rate:>50% \"connection refused\"";

fn bench_tokenize(c: &mut Criterion) {
    let fields = FieldTable::builtin();

    c.bench_function("query/tokenize_min", |b| {
        b.iter(|| {
            let tokens = tokenize(black_box(QUERY_MIN), &fields);
            black_box(tokens.len());
        });
    });

    c.bench_function("query/tokenize_mixed", |b| {
        b.iter(|| {
            let tokens = tokenize(black_box(QUERY_MIXED), &fields);
            black_box(tokens.len());
        });
    });
}

fn bench_tokenize_and_clean(c: &mut Criterion) {
    let fields = FieldTable::builtin();

    c.bench_function("query/tokenize_clean_mixed", |b| {
        b.iter(|| {
            let tokens = tokenize(black_box(QUERY_MIXED), &fields);
            let mut cleaned = 0usize;
            for token in &tokens {
                if let Some(filter) = token.filter() {
                    if let Some(value) = filter.value.as_single() {
                        if clean_filter_value(value, Some(filter.value_type), Some(filter))
                            .is_some()
                        {
                            cleaned += 1;
                        }
                    }
                }
            }
            black_box(cleaned);
        });
    });
}

criterion_group!(benches, bench_tokenize, bench_tokenize_and_clean);
criterion_main!(benches);
