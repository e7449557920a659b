//! Performance benchmarks for the cost engine.
//!
//! Covers the engine directly (employee costs and EBITDA at several roster
//! sizes) and the HTTP path end to end.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use cost_engine::api::{AppState, SnapshotRequest, create_router};
use cost_engine::config::ConfigLoader;
use cost_engine::engine::FinancialEngine;
use cost_engine::models::{
    BusinessSnapshot, Employee, EmploymentType, OverheadCosts, RevenueRange, SoftwareCost,
};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/engine.yaml").expect("Failed to load config");
    AppState::new(config)
}

fn create_roster(headcount: usize) -> Vec<Employee> {
    (0..headcount)
        .map(|i| Employee {
            id: format!("emp_bench_{:04}", i),
            name: format!("Employee {}", i),
            role: "Staff".to_string(),
            department: None,
            employment_type: if i % 3 == 0 {
                EmploymentType::PartTime
            } else {
                EmploymentType::FullTime
            },
            annual_salary: Decimal::new(45_000 + (i as i64 % 50) * 1_000, 0),
            annual_benefits: if i % 4 == 0 {
                Decimal::ZERO
            } else {
                Decimal::new(6_000, 0)
            },
        })
        .collect()
}

fn create_overhead() -> OverheadCosts {
    OverheadCosts {
        monthly_rent: Decimal::new(4_000, 0),
        monthly_utilities: Decimal::new(500, 0),
        monthly_insurance: Decimal::new(800, 0),
        other_monthly_costs: Decimal::new(1_500, 0),
        software_costs: vec![SoftwareCost {
            name: "Accounting".to_string(),
            monthly_cost: Decimal::new(500, 0),
        }],
        updated_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}

fn create_snapshot(headcount: usize) -> BusinessSnapshot {
    BusinessSnapshot {
        employees: create_roster(headcount),
        overhead: Some(create_overhead()),
        documents: vec![],
        revenue_range: Some(RevenueRange::From1mTo2m),
    }
}

/// Benchmark: Engine-level EBITDA at increasing roster sizes.
fn bench_ebitda_scaling(c: &mut Criterion) {
    let engine = FinancialEngine::default();
    let computed_at = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();

    let mut group = c.benchmark_group("ebitda_scaling");

    for headcount in [1, 10, 100, 1000].iter() {
        let snapshot = create_snapshot(*headcount);

        group.throughput(Throughput::Elements(*headcount as u64));
        group.bench_with_input(
            BenchmarkId::new("employees", headcount),
            headcount,
            |b, _| b.iter(|| black_box(engine.calculate_ebitda(&snapshot, computed_at))),
        );
    }

    group.finish();
}

/// Benchmark: Engine-level employee costs for a 100 person roster.
fn bench_employee_costs(c: &mut Criterion) {
    let engine = FinancialEngine::default();
    let computed_at = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
    let employees = create_roster(100);
    let overhead = create_overhead();

    c.bench_function("employee_costs_100", |b| {
        b.iter(|| {
            black_box(engine.calculate_employee_costs(&employees, Some(&overhead), computed_at))
        })
    });
}

/// Benchmark: Full HTTP round trip for POST /ebitda.
fn bench_ebitda_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let snapshot = create_snapshot(25);
    let request_json = serde_json::json!({
        "employees": snapshot.employees,
        "overhead": snapshot.overhead,
        "revenue_range": snapshot.revenue_range
    });
    let request: SnapshotRequest =
        serde_json::from_value(request_json).expect("Failed to create request");
    let body = serde_json::to_string(&request).unwrap();

    c.bench_function("ebitda_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/ebitda")
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

criterion_group!(
    benches,
    bench_ebitda_scaling,
    bench_employee_costs,
    bench_ebitda_endpoint,
);
criterion_main!(benches);
