//! Performance benchmarks for the Child Support Guideline Engine.
//!
//! This benchmark suite verifies that the calculation engine stays cheap:
//! - Single CS-42 calculation: < 10μs mean
//! - Single CS-42-S calculation: < 10μs mean
//! - Batch of 1000 direct calculations: < 10ms mean
//! - Router round-trip: < 1ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use guideline_engine::api::{AppState, create_router};
use guideline_engine::calculation::{Cs42Calculator, Cs42sCalculator, GuidelineCalculator};
use guideline_engine::catalog::CalculatorRegistry;
use guideline_engine::models::ParentData;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn seeded_plaintiff() -> ParentData {
    ParentData {
        monthly_gross_income: 4244,
        preexisting_child_support: 0,
        preexisting_alimony: 0,
        work_related_childcare_costs: 0,
        healthcare_coverage_costs: 0,
        has_primary_custody: true,
    }
}

fn seeded_defendant() -> ParentData {
    ParentData {
        monthly_gross_income: 8462,
        preexisting_child_support: 0,
        preexisting_alimony: 1000,
        work_related_childcare_costs: 0,
        healthcare_coverage_costs: 292,
        has_primary_custody: false,
    }
}

fn calculation_request_json() -> String {
    serde_json::json!({
        "plaintiff": {
            "monthly_gross_income": 4244,
            "has_primary_custody": true
        },
        "defendant": {
            "monthly_gross_income": 8462,
            "preexisting_alimony": 1000,
            "healthcare_coverage_costs": 292
        },
        "number_of_children": 4
    })
    .to_string()
}

/// Benchmarks a single direct calculation for each guideline form.
fn bench_single_calculation(c: &mut Criterion) {
    let plaintiff = seeded_plaintiff();
    let defendant = seeded_defendant();

    let mut group = c.benchmark_group("single_calculation");

    group.bench_function("cs42", |b| {
        let calculator = Cs42Calculator;
        b.iter(|| {
            calculator.calculate(
                black_box(&plaintiff),
                black_box(&defendant),
                black_box(4),
            )
        })
    });

    group.bench_function("cs42s", |b| {
        let calculator = Cs42sCalculator;
        b.iter(|| {
            calculator.calculate(
                black_box(&plaintiff),
                black_box(&defendant),
                black_box(4),
            )
        })
    });

    group.finish();
}

/// Benchmarks batches of direct calculations across varied incomes.
fn bench_calculation_batches(c: &mut Criterion) {
    let calculator = Cs42Calculator;
    let mut group = c.benchmark_group("calculation_batches");

    for batch_size in [100u64, 1000] {
        group.throughput(Throughput::Elements(batch_size));
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &batch_size,
            |b, &batch_size| {
                b.iter(|| {
                    for i in 0..batch_size {
                        let mut plaintiff = seeded_plaintiff();
                        plaintiff.monthly_gross_income = 1000 + (i as i64 * 17) % 19_000;
                        let defendant = seeded_defendant();
                        black_box(calculator.calculate(&plaintiff, &defendant, 4));
                    }
                })
            },
        );
    }

    group.finish();
}

/// Benchmarks the full HTTP round-trip through the axum router.
fn bench_router_round_trip(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let router = create_router(AppState::new(CalculatorRegistry::alabama()));
    let body = calculation_request_json();

    c.bench_function("router_round_trip", |b| {
        b.to_async(&runtime).iter(|| {
            let router = router.clone();
            let body = body.clone();
            async move {
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate/AL/CS42")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response.status())
            }
        })
    });
}

criterion_group!(
    benches,
    bench_single_calculation,
    bench_calculation_batches,
    bench_router_round_trip
);
criterion_main!(benches);
