//! Performance benchmarks for the quote engine.
//!
//! This benchmark suite verifies that the pricing engine meets performance
//! targets:
//! - Single-resource quote: < 1ms mean
//! - 20-resource roster: < 5ms mean
//! - Batch of 100 quotes: < 100ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use quote_engine::api::{AppState, QuoteRequest, create_router};
use quote_engine::config::ConfigLoader;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/rates.yaml").expect("Failed to load config");
    AppState::new(config)
}

/// Creates a quote request with a roster of the given size, alternating
/// employees and freelancers.
fn create_request_with_roster(resource_count: usize) -> QuoteRequest {
    let resources: Vec<serde_json::Value> = (0..resource_count)
        .map(|i| {
            if i % 2 == 0 {
                serde_json::json!({
                    "id": format!("res_{:03}", i + 1),
                    "name": format!("Employee {}", i + 1),
                    "contract_type": "employee",
                    "net_salary": "2000",
                    "annual_billable_hours": "1320",
                    "project_hours": "160"
                })
            } else {
                serde_json::json!({
                    "id": format!("res_{:03}", i + 1),
                    "name": format!("Freelancer {}", i + 1),
                    "contract_type": "freelancer",
                    "hourly_rate": "45",
                    "annual_billable_hours": "1500",
                    "project_hours": "120"
                })
            }
        })
        .collect();

    let request_json = serde_json::json!({
        "resources": resources,
        "fixed_costs": {
            "rent": "12000",
            "utilities": "1800",
            "software": "3600",
            "administration": "2000"
        },
        "projects": [
            {
                "id": "prj_bench",
                "name": "Benchmark Project",
                "direct_costs": "1500",
                "duration_months": "3"
            }
        ],
        "active_project_id": "prj_bench",
        "company": {
            "legal_form": "limited_company",
            "irap_rate": "3.9",
            "profit_margin": "25",
            "vat_rate": "22"
        }
    });

    serde_json::from_value(request_json).expect("Failed to create request")
}

/// Benchmark: quote for a single resource.
///
/// Target: < 1ms mean
fn bench_single_resource(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let request = create_request_with_roster(1);
    let body = serde_json::to_string(&request).unwrap();

    c.bench_function("single_resource", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
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

/// Benchmark: quote for a 20-resource roster.
///
/// Target: < 5ms mean
fn bench_roster_20(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let request = create_request_with_roster(20);
    let body = serde_json::to_string(&request).unwrap();

    c.bench_function("roster_20_resources", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
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

/// Benchmark: batch of 100 quotes.
///
/// Target: < 100ms mean
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    // Pre-create 100 different requests (vary roster sizes for a realistic mix)
    let requests: Vec<String> = (0..100)
        .map(|i| {
            let request = create_request_with_roster(1 + i % 5);
            serde_json::to_string(&request).unwrap()
        })
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: various roster sizes to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let mut group = c.benchmark_group("scaling");

    for resource_count in [1, 5, 10, 25, 50].iter() {
        let router = create_router(state.clone());
        let request = create_request_with_roster(*resource_count);
        let body = serde_json::to_string(&request).unwrap();

        group.throughput(Throughput::Elements(*resource_count as u64));
        group.bench_with_input(
            BenchmarkId::new("resources", resource_count),
            resource_count,
            |b, _| {
                b.to_async(&rt).iter(|| async {
                    let router = router.clone();
                    let response = router
                        .oneshot(
                            Request::builder()
                                .method("POST")
                                .uri("/calculate")
                                .header("Content-Type", "application/json")
                                .body(Body::from(body.clone()))
                                .unwrap(),
                        )
                        .await
                        .unwrap();
                    black_box(response)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_resource,
    bench_roster_20,
    bench_batch_100,
    bench_scaling,
);
criterion_main!(benches);
