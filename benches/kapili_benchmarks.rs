//! Kapili MCP Server Benchmarks
//!
//! Benchmarks for the handle pool and the request dispatcher, using the
//! Criterion framework for statistical analysis and regression detection.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BatchSize, BenchmarkId,
    Criterion, SamplingMode, Throughput,
};
use serde_json::json;
use std::time::Duration;

use kapili_mcp_lib::config::{HandleFormat, KapiliConfig};
use kapili_mcp_lib::pool::{HandlePool, SequentialGenerator};
use kapili_mcp_lib::protocol::jsonrpc::{create_dispatcher, Dispatcher};

fn dispatcher() -> Dispatcher {
    let mut config = KapiliConfig::default();
    config.server.handle_format = HandleFormat::Sequential;
    create_dispatcher(&config).expect("standard tools register")
}

/// Benchmark the handle pool
fn bench_handle_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("handle_pool");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [100, 1000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("insert_uuid", size), size, |b, &size| {
            b.iter(|| {
                let mut pool = HandlePool::new();
                for i in 0..size {
                    black_box(pool.insert(i).unwrap());
                }
            });
        });
        group.bench_with_input(
            BenchmarkId::new("insert_sequential", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut pool = HandlePool::with_generator(Box::new(SequentialGenerator::new("h")));
                    for i in 0..size {
                        black_box(pool.insert(i).unwrap());
                    }
                });
            },
        );
    }

    group.bench_function("get", |b| {
        b.iter_batched(
            || {
                let mut pool = HandlePool::new();
                let handles: Vec<_> = (0..1000usize).map(|i| pool.insert(i).unwrap()).collect();
                (pool, handles)
            },
            |(pool, handles)| {
                for handle in &handles {
                    black_box(pool.get::<usize>(handle).unwrap());
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

/// Benchmark the JSON-RPC dispatcher
fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    let initialize = br#"{"jsonrpc":"2.0","id":1,"method":"initialize"}"#;
    group.bench_function("initialize", |b| {
        let mut dispatcher = dispatcher();
        b.iter(|| black_box(dispatcher.handle_line(black_box(initialize))));
    });

    let unknown = br#"{"jsonrpc":"2.0","id":4,"method":"resources/list"}"#;
    group.bench_function("method_not_found", |b| {
        let mut dispatcher = dispatcher();
        b.iter(|| black_box(dispatcher.handle_line(black_box(unknown))));
    });

    let list = br#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#;
    group.bench_function("tools_list", |b| {
        let mut dispatcher = dispatcher();
        b.iter(|| black_box(dispatcher.handle_line(black_box(list))));
    });

    group.bench_function("parse_error", |b| {
        let mut dispatcher = dispatcher();
        b.iter(|| black_box(dispatcher.handle_line(black_box(b"{not json"))));
    });

    let create = json!({
        "jsonrpc": "2.0",
        "id": 3,
        "method": "tools/call",
        "params": { "name": "create_object", "arguments": { "progId": "Sheet.Application" } }
    })
    .to_string();
    group.bench_function("tools_call_create_object", |b| {
        b.iter_batched(
            dispatcher,
            |mut dispatcher| black_box(dispatcher.handle_line(create.as_bytes())),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// Group all benchmarks together
criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_handle_pool, bench_dispatch
}

criterion_main!(benches);
