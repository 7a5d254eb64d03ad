use crate::models::JobSearchResponse;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when querying the job-search API
#[derive(Debug, Error)]
pub enum AdzunaError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),
}

/// Adzuna job-search API client
///
/// Issues single-page search requests; one page of a fixed size per call.
/// Pagination beyond page 1 is out of scope.
pub struct AdzunaClient {
    base_url: String,
    app_id: String,
    app_key: String,
    results_per_page: u32,
    client: Client,
}

impl AdzunaClient {
    /// Create a new Adzuna client
    pub fn new(base_url: String, app_id: String, app_key: String, results_per_page: u32) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            app_id,
            app_key,
            results_per_page,
            client,
        }
    }

    /// Search postings for a query/location in the given country.
    ///
    /// A response without a `results` key deserializes to an empty list;
    /// that is "no results", not an error.
    pub async fn search(
        &self,
        query: &str,
        location: &str,
        country: &str,
    ) -> Result<JobSearchResponse, AdzunaError> {
        let url = format!(
            "{}/{}/search/1",
            self.base_url.trim_end_matches('/'),
            country
        );

        tracing::debug!("Fetching jobs from: {} (what={})", url, query);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("app_id", self.app_id.as_str()),
                ("app_key", self.app_key.as_str()),
                ("results_per_page", &self.results_per_page.to_string()),
                ("what", query),
                ("where", location),
                ("content-type", "application/json"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AdzunaError::ApiError(format!(
                "Job search failed: {}",
                response.status()
            )));
        }

        let body: JobSearchResponse = response.json().await?;

        tracing::debug!(
            "Job search returned {} postings (count: {:?})",
            body.results.len(),
            body.count
        );

        Ok(body)
    }
}
