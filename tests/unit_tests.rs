// Unit tests for jobmatch

use jobmatch::core::{score_posting, similarity::token_set_ratio, Matcher};
use jobmatch::models::{Company, JobLocation, JobPosting, ScoringWeights, UserProfile};

fn london_analyst() -> UserProfile {
    UserProfile::from_registration(
        "Alice",
        "alice@example.com",
        "London",
        "Data Analyst",
        "python, sql",
        50000,
    )
}

fn analyst_posting() -> JobPosting {
    JobPosting {
        title: Some("Data Analyst".to_string()),
        company: Some(Company {
            display_name: Some("Acme Ltd".to_string()),
        }),
        location: Some(JobLocation {
            area: vec!["London".to_string()],
        }),
        salary_min: Some(55000.0),
        salary_max: Some(65000.0),
        description: Some("Looking for Python and SQL experience".to_string()),
        redirect_url: Some("https://example.com/apply".to_string()),
    }
}

#[test]
fn test_worked_example_scores_about_80() {
    let user = london_analyst();
    let posting = analyst_posting();

    let (score, matched) = score_posting(
        &user,
        "Data Analyst",
        &posting,
        &ScoringWeights::default(),
    );

    // title ~30 + skills 20 + location ~20 + salary 10
    assert!(score > 75.0 && score <= 85.0, "expected ~80, got {}", score);
    assert_eq!(matched, vec!["python", "sql"]);
}

#[test]
fn test_each_missing_field_contributes_zero() {
    let user = london_analyst();
    let weights = ScoringWeights::default();
    let full = score_posting(&user, "Data Analyst", &analyst_posting(), &weights).0;

    let mut no_title = analyst_posting();
    no_title.title = None;
    assert!(
        (full - score_posting(&user, "Data Analyst", &no_title, &weights).0 - 30.0).abs() < 0.01
    );

    let mut no_description = analyst_posting();
    no_description.description = None;
    assert!(
        (full - score_posting(&user, "Data Analyst", &no_description, &weights).0 - 20.0).abs()
            < 0.01
    );

    let mut no_location = analyst_posting();
    no_location.location = None;
    assert!(
        (full - score_posting(&user, "Data Analyst", &no_location, &weights).0 - 20.0).abs() < 0.01
    );

    let mut no_salary = analyst_posting();
    no_salary.salary_min = None;
    assert!(
        (full - score_posting(&user, "Data Analyst", &no_salary, &weights).0 - 10.0).abs() < 0.01
    );
}

#[test]
fn test_scores_deterministic_for_identical_input() {
    let user = london_analyst();
    let posting = analyst_posting();
    let weights = ScoringWeights::default();

    let runs: Vec<f64> = (0..5)
        .map(|_| score_posting(&user, "Data Analyst", &posting, &weights).0)
        .collect();

    assert!(runs.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_only_strictly_above_threshold_qualifies() {
    let matcher = Matcher::with_defaults();
    let user = london_analyst();

    // 30 + 20 + 10 = 60 exactly: salary + title + location, no skills
    let mut borderline = analyst_posting();
    borderline.description = Some("nothing relevant here".to_string());

    let matches = matcher.score_postings(&user, "Data Analyst", &[borderline]);
    assert!(matches.is_empty(), "a score of exactly 60 must not qualify");
}

#[test]
fn test_at_most_five_matches_sorted_descending() {
    let matcher = Matcher::with_defaults();
    let user = london_analyst();

    // Ten qualifying postings
    let postings: Vec<JobPosting> = (0..10)
        .map(|i| {
            let mut p = analyst_posting();
            p.title = Some(format!("Data Analyst {}", i));
            p
        })
        .collect();

    let pool = matcher.score_postings(&user, "Data Analyst", &postings);
    let top = matcher.select_top(pool);

    assert!(top.len() <= 5);
    for pair in top.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_equal_scores_preserve_listing_order() {
    let matcher = Matcher::with_defaults();
    let user = london_analyst();

    let postings: Vec<JobPosting> = (0..3)
        .map(|i| {
            let mut p = analyst_posting();
            p.redirect_url = Some(format!("https://example.com/{}", i));
            p
        })
        .collect();

    let pool = matcher.score_postings(&user, "Data Analyst", &postings);
    let top = matcher.select_top(pool);

    let urls: Vec<&str> = top
        .iter()
        .map(|m| m.posting.redirect_url.as_deref().unwrap())
        .collect();
    assert_eq!(
        urls,
        vec![
            "https://example.com/0",
            "https://example.com/1",
            "https://example.com/2"
        ]
    );
}

#[test]
fn test_token_set_ratio_handles_reordered_titles() {
    assert_eq!(token_set_ratio("Data Analyst", "Analyst, Data"), 100.0);
    assert!(token_set_ratio("Data Analyst", "Senior Data Analyst") > 90.0);
    assert!(token_set_ratio("Data Analyst", "Forklift Operator") < 40.0);
}

#[test]
fn test_skill_matching_is_case_insensitive() {
    let user = london_analyst();
    let mut posting = analyst_posting();
    posting.description = Some("PYTHON and Sql welcome".to_string());

    let (_, matched) = score_posting(
        &user,
        "Data Analyst",
        &posting,
        &ScoringWeights::default(),
    );

    assert_eq!(matched, vec!["python", "sql"]);
}
