// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Company, JobLocation, JobPosting, JobSearchResponse, MatchedJob, ScoringWeights, UserProfile,
};
pub use requests::{
    is_supported_country, RegisterUserRequest, SearchJobsRequest, SUPPORTED_COUNTRIES,
};
pub use responses::{
    ErrorResponse, HealthResponse, JobSummary, RegisterUserResponse, RunMatchingResponse,
    SearchJobsResponse,
};
