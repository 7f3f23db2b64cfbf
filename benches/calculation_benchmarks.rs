//! Performance benchmarks for the Stay Engine.
//!
//! Quotes are recomputed on every change to a booking form, so both the
//! bare calculator and the `/quote` endpoint are measured:
//! - Single quote through the calculator
//! - Batch of 1000 quotes with varying stay lengths
//! - Single `/quote` request through the router
//! - Stay length scaling
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Days, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use stay_engine::api::{AppState, create_router};
use stay_engine::calculation::{FixedClock, quote_stay, validate_stay_request};
use stay_engine::config::ConfigLoader;
use stay_engine::models::StayRequest;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration and a fixed clock.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/hotel").expect("Failed to load config");
    AppState::with_clock(config, FixedClock(base_date()))
}

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 13).unwrap()
}

/// Creates a stay request of the given length starting on the base date.
fn create_stay_request(nights: u64, guests: u32) -> StayRequest {
    StayRequest {
        check_in_date: base_date(),
        check_out_date: base_date() + Days::new(nights),
        guest_count: guests,
        price_per_night: Decimal::new(499_950, 2),
        room_capacity: 4,
    }
}

/// Benchmark: Single quote.
fn bench_single_quote(c: &mut Criterion) {
    let request = create_stay_request(4, 2);

    c.bench_function("single_quote", |b| {
        b.iter(|| black_box(validate_stay_request(black_box(&request))))
    });
}

/// Benchmark: Batch of 1000 quotes, a mix of valid and invalid stays.
fn bench_batch_1000(c: &mut Criterion) {
    let requests: Vec<StayRequest> = (0..1000u64)
        .map(|i| create_stay_request(i % 30, (i % 6) as u32))
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(1000));

    group.bench_function("batch_1000", |b| {
        b.iter(|| {
            let quotes: Vec<_> = requests.iter().map(quote_stay).collect();
            black_box(quotes)
        })
    });

    group.finish();
}

/// Benchmark: Single `/quote` request through the router.
fn bench_quote_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({
        "roomId": "2",
        "checkIn": "2026-01-13",
        "checkOut": "2026-01-17",
        "guests": 2
    })
    .to_string();

    c.bench_function("quote_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/quote")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Stay lengths, to confirm quoting does not grow with nights.
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for nights in [1u64, 7, 30, 365].iter() {
        let request = create_stay_request(*nights, 2);

        group.bench_with_input(BenchmarkId::new("nights", nights), nights, |b, _| {
            b.iter(|| black_box(quote_stay(black_box(&request))))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_quote,
    bench_batch_1000,
    bench_quote_endpoint,
    bench_scaling,
);
criterion_main!(benches);
