// Criterion benchmarks for jobmatch

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jobmatch::core::{score_posting, token_set_ratio, Matcher};
use jobmatch::models::{Company, JobLocation, JobPosting, ScoringWeights, UserProfile};

fn create_profile() -> UserProfile {
    UserProfile::from_registration(
        "Alice",
        "alice@example.com",
        "London",
        "Data Analyst",
        "python, sql, excel, tableau",
        50000,
    )
}

fn create_posting(id: usize) -> JobPosting {
    JobPosting {
        title: Some(format!("Data Analyst {}", id)),
        company: Some(Company {
            display_name: Some("Acme Ltd".to_string()),
        }),
        location: Some(JobLocation {
            area: vec!["UK".to_string(), "London".to_string()],
        }),
        salary_min: Some(45000.0 + (id % 5) as f64 * 5000.0),
        salary_max: Some(70000.0),
        description: Some(
            "We are looking for an analyst with Python, SQL and Tableau experience \
             to join our growing data team in central London."
                .to_string(),
        ),
        redirect_url: Some(format!("https://example.com/apply/{}", id)),
    }
}

fn bench_token_set_ratio(c: &mut Criterion) {
    c.bench_function("token_set_ratio", |b| {
        b.iter(|| {
            token_set_ratio(
                black_box("Data Analyst"),
                black_box("Senior Data Analyst (SQL, Python)"),
            )
        })
    });
}

fn bench_score_posting(c: &mut Criterion) {
    let profile = create_profile();
    let posting = create_posting(0);
    let weights = ScoringWeights::default();

    c.bench_function("score_posting", |b| {
        b.iter(|| {
            score_posting(
                black_box(&profile),
                black_box("Data Analyst"),
                black_box(&posting),
                black_box(&weights),
            )
        })
    });
}

fn bench_rank_postings(c: &mut Criterion) {
    let profile = create_profile();
    let matcher = Matcher::with_defaults();

    let mut group = c.benchmark_group("rank_postings");
    for size in [20, 100, 500] {
        let postings: Vec<JobPosting> = (0..size).map(create_posting).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &postings, |b, postings| {
            b.iter(|| {
                let pool = matcher.score_postings(
                    black_box(&profile),
                    black_box("Data Analyst"),
                    black_box(postings),
                );
                matcher.select_top(pool)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_token_set_ratio,
    bench_score_posting,
    bench_rank_postings
);
criterion_main!(benches);
