//! Performance benchmarks for the salary rate engine.
//!
//! Covers the pure engine call for each accrual policy, a company of 1000
//! employees, and a full round trip through the HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use salary_rate::api::{AppState, create_router};
use salary_rate::calculation::SalaryRateEngine;
use salary_rate::config::ConfigLoader;
use salary_rate::models::{AccrualPolicy, Company, SalaryRecord};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 6, 10).unwrap()
}

fn create_record(id: u64, policy: AccrualPolicy) -> SalaryRecord {
    match policy {
        AccrualPolicy::Daily => SalaryRecord::new(id, Decimal::new(700, 0), policy),
        AccrualPolicy::Monthly => SalaryRecord::new(id, Decimal::new(30000, 0), policy),
        AccrualPolicy::MonthToDate => {
            SalaryRecord::new(id, Decimal::new(30000, 0), policy).with_anchor_day(25)
        }
    }
}

/// Benchmark: a single accrual per policy.
fn bench_single_accrual(c: &mut Criterion) {
    let engine = SalaryRateEngine::default();
    let mut group = c.benchmark_group("single_accrual");

    for policy in [
        AccrualPolicy::Daily,
        AccrualPolicy::Monthly,
        AccrualPolicy::MonthToDate,
    ] {
        let record = create_record(1, policy);
        group.bench_with_input(BenchmarkId::from_parameter(policy), &record, |b, record| {
            b.iter(|| black_box(engine.compute_accrual(black_box(record), today())))
        });
    }

    group.finish();
}

/// Benchmark: a company of 1000 employees with mixed policies.
fn bench_company_payroll(c: &mut Criterion) {
    let engine = SalaryRateEngine::default();
    let records: Vec<SalaryRecord> = (0..1000)
        .map(|i| {
            let policy = match i % 3 {
                0 => AccrualPolicy::Daily,
                1 => AccrualPolicy::Monthly,
                _ => AccrualPolicy::MonthToDate,
            };
            create_record(i, policy)
        })
        .collect();
    let company = Company {
        id: 1,
        name: "Bench Co".to_string(),
        address: String::new(),
    };

    let mut group = c.benchmark_group("company_payroll");
    group.throughput(Throughput::Elements(records.len() as u64));
    group.bench_function("employees_1000", |b| {
        b.iter(|| {
            black_box(engine.compute_company_payroll(company.clone(), black_box(&records), today()))
        })
    });
    group.finish();
}

/// Benchmark: POST /salary-rate through the router.
fn bench_http_round_trip(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/salary-rate.yaml").expect("Failed to load config");
    let router = create_router(AppState::new(config));
    let body = serde_json::json!({
        "employee": {
            "id": 3,
            "salary_amount": "30000",
            "accrual_policy": 3,
            "anchor_day": 25
        },
        "as_of": "2020-06-10"
    })
    .to_string();

    c.bench_function("http_salary_rate", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/salary-rate")
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
    bench_single_accrual,
    bench_company_payroll,
    bench_http_round_trip
);
criterion_main!(benches);
