use crate::core::scoring::score_posting;
use crate::models::{JobPosting, MatchedJob, ScoringWeights, UserProfile};

/// Ranks postings for a user profile.
///
/// Postings are scored per searched role, pooled across roles, then the
/// pool is sorted by score (stable, so equal scores keep listing order)
/// and trimmed to the configured maximum.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    score_threshold: f64,
    max_matches: usize,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, score_threshold: f64, max_matches: usize) -> Self {
        Self {
            weights,
            score_threshold,
            max_matches,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(ScoringWeights::default(), 60.0, 5)
    }

    /// Score postings fetched for one searched role.
    ///
    /// Only postings scoring strictly above the threshold qualify.
    pub fn score_postings(
        &self,
        profile: &UserProfile,
        role: &str,
        postings: &[JobPosting],
    ) -> Vec<MatchedJob> {
        postings
            .iter()
            .filter_map(|posting| {
                let (score, matched_skills) =
                    score_posting(profile, role, posting, &self.weights);
                if score > self.score_threshold {
                    Some(MatchedJob {
                        posting: posting.clone(),
                        score,
                        matched_skills,
                    })
                } else {
                    None
                }
            })
            .collect()
    }

    /// Rank an aggregated pool of matches and keep the best.
    pub fn select_top(&self, mut matches: Vec<MatchedJob>) -> Vec<MatchedJob> {
        // sort_by is stable: ties keep original listing order
        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        matches.truncate(self.max_matches);
        matches
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobLocation;

    fn create_profile() -> UserProfile {
        UserProfile {
            user_id: "test_user".to_string(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            location: "London".to_string(),
            roles: vec!["Data Analyst".to_string()],
            skills: vec!["python".to_string(), "sql".to_string()],
            min_salary: 50000,
            last_notified: None,
        }
    }

    fn create_posting(title: &str, description: &str) -> JobPosting {
        JobPosting {
            title: Some(title.to_string()),
            location: Some(JobLocation {
                area: vec!["London".to_string()],
            }),
            salary_min: Some(55000.0),
            description: Some(description.to_string()),
            ..JobPosting::default()
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        let matcher = Matcher::with_defaults();
        let profile = create_profile();

        // Title + location + salary only: 30 + 20 + 10 = 60, not above 60
        let at_threshold = create_posting("Data Analyst", "no relevant keywords");
        let matches = matcher.score_postings(&profile, "Data Analyst", &[at_threshold]);
        assert!(matches.is_empty());

        // One skill pushes it to 70
        let above = create_posting("Data Analyst", "python shop");
        let matches = matcher.score_postings(&profile, "Data Analyst", &[above]);
        assert_eq!(matches.len(), 1);
        assert!(matches[0].score > 60.0);
    }

    #[test]
    fn test_unrelated_posting_filtered() {
        let matcher = Matcher::with_defaults();
        let profile = create_profile();

        let posting = JobPosting {
            title: Some("Truck Driver".to_string()),
            description: Some("long haul driving".to_string()),
            ..JobPosting::default()
        };

        let matches = matcher.score_postings(&profile, "Data Analyst", &[posting]);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_select_top_sorted_descending() {
        let matcher = Matcher::with_defaults();

        let pool: Vec<MatchedJob> = [65.0, 80.0, 72.0]
            .iter()
            .map(|&score| MatchedJob {
                posting: JobPosting::default(),
                score,
                matched_skills: vec![],
            })
            .collect();

        let top = matcher.select_top(pool);
        let scores: Vec<f64> = top.iter().map(|m| m.score).collect();
        assert_eq!(scores, vec![80.0, 72.0, 65.0]);
    }

    #[test]
    fn test_select_top_ties_keep_listing_order() {
        let matcher = Matcher::with_defaults();

        let pool: Vec<MatchedJob> = ["first", "second", "third"]
            .iter()
            .map(|&name| MatchedJob {
                posting: JobPosting {
                    title: Some(name.to_string()),
                    ..JobPosting::default()
                },
                score: 70.0,
                matched_skills: vec![],
            })
            .collect();

        let top = matcher.select_top(pool);
        let titles: Vec<&str> = top
            .iter()
            .map(|m| m.posting.title.as_deref().unwrap())
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_select_top_respects_limit() {
        let matcher = Matcher::with_defaults();

        let pool: Vec<MatchedJob> = (0..12)
            .map(|i| MatchedJob {
                posting: JobPosting::default(),
                score: 61.0 + i as f64,
                matched_skills: vec![],
            })
            .collect();

        let top = matcher.select_top(pool);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].score, 72.0);
    }
}
