use serde::{Deserialize, Serialize};
use crate::models::domain::JobPosting;

/// Response for user registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub roles: usize,
    pub skills: usize,
}

/// A posting formatted for the manual search surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSummary {
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(rename = "applyUrl", skip_serializing_if = "Option::is_none")]
    pub apply_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Description snippets are clipped to this length for search output.
const DESCRIPTION_SNIPPET_LEN: usize = 150;

impl JobSummary {
    pub fn from_posting(posting: &JobPosting) -> Self {
        let salary = match (posting.salary_min, posting.salary_max) {
            (Some(min), Some(max)) => Some(format!("{:.0} - {:.0}", min, max)),
            _ => None,
        };

        let description = posting.description.as_ref().map(|d| {
            if d.chars().count() > DESCRIPTION_SNIPPET_LEN {
                let clipped: String = d.chars().take(DESCRIPTION_SNIPPET_LEN).collect();
                format!("{}...", clipped)
            } else {
                d.clone()
            }
        });

        Self {
            title: posting.display_title().to_string(),
            company: posting.display_company().to_string(),
            location: posting.area_string(),
            salary,
            apply_url: posting.redirect_url.clone(),
            description,
        }
    }
}

/// Response for the manual search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchJobsResponse {
    pub jobs: Vec<JobSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response for a matching run: one summary line per user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMatchingResponse {
    pub results: Vec<String>,
    pub users: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "registeredUsers")]
    pub registered_users: usize,
    #[serde(rename = "cachedQueries")]
    pub cached_queries: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
