use crate::core::Matcher;
use crate::models::{JobPosting, JobSummary, MatchedJob, UserProfile};
use crate::services::{AdzunaClient, CacheKey, JobCache, ResendClient, UserRegistry};
use std::fmt;
use std::sync::Arc;

const EMAIL_SUBJECT: &str = "Your Personalized Job Matches";

/// Result of a fetch through the cache layer.
///
/// Upstream failures become an empty posting list with a description; the
/// failure is not cached, so the next call retries.
#[derive(Debug, Clone)]
pub struct JobSearchResult {
    pub postings: Vec<JobPosting>,
    pub error: Option<String>,
    pub from_cache: bool,
}

/// Outcome of one notification attempt
#[derive(Debug, Clone)]
pub enum NotifyOutcome {
    NoMatches,
    Sent { email: String },
    Failed(String),
}

impl fmt::Display for NotifyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyOutcome::NoMatches => write!(f, "No matching jobs found"),
            NotifyOutcome::Sent { email } => write!(f, "Notification sent to {}", email),
            NotifyOutcome::Failed(message) => write!(f, "Notification failed: {}", message),
        }
    }
}

/// Fetch, score, notify - the shared path behind both the manual trigger
/// and the daily schedule.
pub struct MatchPipeline {
    adzuna: Arc<AdzunaClient>,
    mailer: Arc<ResendClient>,
    cache: Arc<JobCache>,
    registry: Arc<UserRegistry>,
    matcher: Matcher,
    default_country: String,
    search_limit: usize,
}

impl MatchPipeline {
    pub fn new(
        adzuna: Arc<AdzunaClient>,
        mailer: Arc<ResendClient>,
        cache: Arc<JobCache>,
        registry: Arc<UserRegistry>,
        matcher: Matcher,
        default_country: String,
        search_limit: usize,
    ) -> Self {
        Self {
            adzuna,
            mailer,
            cache,
            registry,
            matcher,
            default_country,
            search_limit,
        }
    }

    /// Fetch postings for a query, going to the upstream API only when the
    /// cache has nothing fresh under the (query, location, country) key.
    pub async fn fetch_jobs(&self, query: &str, location: &str, country: &str) -> JobSearchResult {
        let key = CacheKey::search(query, location, country);

        if let Some(payload) = self.cache.get(&key).await {
            return JobSearchResult {
                postings: payload.results,
                error: None,
                from_cache: true,
            };
        }

        match self.adzuna.search(query, location, country).await {
            Ok(response) => {
                self.cache.set(&key, response.clone()).await;
                JobSearchResult {
                    postings: response.results,
                    error: None,
                    from_cache: false,
                }
            }
            Err(e) => {
                tracing::warn!("Fetch failed for '{}' in '{}': {}", query, location, e);
                JobSearchResult {
                    postings: vec![],
                    error: Some(e.to_string()),
                    from_cache: false,
                }
            }
        }
    }

    /// Score every posting fetched for each of the user's roles and keep
    /// the best matches across all of them.
    pub async fn match_jobs_for_user(&self, user: &UserProfile) -> Vec<MatchedJob> {
        let mut pool = Vec::new();

        for role in &user.roles {
            let result = self
                .fetch_jobs(role, &user.location, &self.default_country)
                .await;
            pool.extend(self.matcher.score_postings(user, role, &result.postings));
        }

        self.matcher.select_top(pool)
    }

    /// Email the matches to the user, or report that there were none.
    ///
    /// The last-notified timestamp is only touched on successful delivery.
    pub async fn notify_user(&self, user: &UserProfile, matches: &[MatchedJob]) -> NotifyOutcome {
        if matches.is_empty() {
            return NotifyOutcome::NoMatches;
        }

        let body = render_email_body(user, matches);

        match self.mailer.send(&user.email, EMAIL_SUBJECT, &body).await {
            Ok(()) => {
                self.registry
                    .mark_notified(&user.user_id, chrono::Utc::now())
                    .await;
                NotifyOutcome::Sent {
                    email: user.email.clone(),
                }
            }
            Err(e) => NotifyOutcome::Failed(e.to_string()),
        }
    }

    /// Run matching and notification for every registered user.
    ///
    /// Returns one summary line per user; one user's failure never blocks
    /// the rest of the batch.
    pub async fn run_for_all_users(&self) -> Vec<String> {
        let users = self.registry.snapshot().await;
        tracing::info!("Running matching for {} users", users.len());

        let mut lines = Vec::with_capacity(users.len());
        for user in &users {
            let matches = self.match_jobs_for_user(user).await;
            let outcome = self.notify_user(user, &matches).await;
            tracing::info!(
                "Matching for {}: {} matches, {}",
                user.name,
                matches.len(),
                outcome
            );
            lines.push(format!("{}: {}", user.name, outcome));
        }

        lines
    }

    /// Manual search: up to `search_limit` postings formatted for display.
    pub async fn search_available_jobs(
        &self,
        query: &str,
        location: &str,
        country: &str,
    ) -> Result<Vec<JobSummary>, String> {
        let result = self.fetch_jobs(query, location, country).await;

        if let Some(error) = result.error {
            return Err(error);
        }

        Ok(result
            .postings
            .iter()
            .take(self.search_limit)
            .map(JobSummary::from_posting)
            .collect())
    }
}

/// Render the plain-text notification body.
fn render_email_body(user: &UserProfile, matches: &[MatchedJob]) -> String {
    let mut body = format!(
        "Hello {},\n\nHere are your personalized job matches:\n\n",
        user.name
    );

    for matched in matches {
        let posting = &matched.posting;
        body.push_str(&format!(
            "- {} at {}\n",
            posting.display_title(),
            posting.display_company()
        ));
        if let Some(area) = posting.area_string() {
            body.push_str(&format!("  Location: {}\n", area));
        }
        body.push_str(&format!("  Match Score: {:.1}%\n", matched.score));
        if !matched.matched_skills.is_empty() {
            body.push_str(&format!(
                "  Matched skills: {}\n",
                matched.matched_skills.join(", ")
            ));
        }
        if let Some(url) = &posting.redirect_url {
            body.push_str(&format!("  Apply here: {}\n", url));
        }
        body.push('\n');
    }

    body
}
