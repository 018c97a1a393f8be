//! Parsing, ingestion and re-basing benchmarks.
//!
//! Run with: `cargo bench --package eurofx-bench`

use async_trait::async_trait;
use bytes::Bytes;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use eurofx_bench::{synthetic_feed, synthetic_set};
use eurofx_lib::{
    FeedFetcher, FeedKind, FetchError, Ingestor, MemoryStore, RateQuery, RateService, RateStore,
    SqliteStore, parse_feed, rebase,
};
use std::hint::black_box;
use tempfile::TempDir;

/// Document sizes: one quarter (recent feed) and roughly twenty years (full history).
const SIZES: [(&str, usize); 2] = [("90-day", 64), ("history", 5_200)];

/// Fetcher that is never called; ingestion is driven through `ingest_document`.
struct NoFetch;

#[async_trait]
impl FeedFetcher for NoFetch {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        Err(FetchError::Status {
            status: 404,
            url: url.to_string(),
        })
    }
}

fn parse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (name, days) in SIZES {
        let xml = synthetic_feed(days);
        group.throughput(Throughput::Bytes(xml.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &xml, |b, xml| {
            b.iter(|| {
                let count = parse_feed(black_box(xml.as_bytes()))
                    .filter(Result::is_ok)
                    .count();
                black_box(count)
            });
        });
    }

    group.finish();
}

fn rebase_benchmark(c: &mut Criterion) {
    let set = synthetic_set("2019-01-04");
    let mut group = c.benchmark_group("rebase");

    for base in ["EUR", "USD", "ZAR"] {
        group.bench_with_input(BenchmarkId::from_parameter(base), &base, |b, base| {
            b.iter(|| rebase(black_box(&set.quotes), Some(*base)));
        });
    }

    group.finish();
}

fn query_benchmark(c: &mut Criterion) {
    let store = MemoryStore::new();
    let xml = synthetic_feed(260);
    for entry in parse_feed(xml.as_bytes()).flatten() {
        let _ = store.find_or_create(entry.into_rate_set().with_base_quote());
    }
    let service = RateService::new(&store);
    let query = RateQuery::new().with_base("USD").with_symbols(["BRL", "JPY", "GBP"]);

    c.bench_function("query/history-year", |b| {
        b.iter(|| service.in_range("1999-01-01", "1999-12-31", black_box(&query)));
    });
}

fn ingest_benchmark(c: &mut Criterion) {
    let xml = synthetic_feed(64);
    let temp_dir = TempDir::new().expect("temp dir");
    let mut group = c.benchmark_group("ingest");
    group.sample_size(10);

    group.bench_function("sqlite/90-day", |b| {
        let store = SqliteStore::open(temp_dir.path().join("bench.db")).expect("open store");
        b.iter(|| {
            store.clear().expect("clear");
            Ingestor::new(NoFetch, &store)
                .ingest_document(FeedKind::Recent, black_box(xml.as_bytes()))
                .expect("ingest")
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    parse_benchmark,
    rebase_benchmark,
    query_benchmark,
    ingest_benchmark
);
criterion_main!(benches);
