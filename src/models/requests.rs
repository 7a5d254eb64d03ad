use serde::{Deserialize, Serialize};
use validator::Validate;

/// Country codes the upstream search API supports.
pub const SUPPORTED_COUNTRIES: &[&str] = &[
    "gb", "us", "au", "br", "ca", "de", "fr", "in", "it", "nl", "nz", "pl", "ru", "sg", "za",
];

/// Check a country code against the supported list.
pub fn is_supported_country(code: &str) -> bool {
    SUPPORTED_COUNTRIES.contains(&code)
}

/// Request to register a subscriber
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub location: String,
    /// Comma-separated preferred roles
    #[validate(length(min = 1))]
    pub roles: String,
    /// Comma-separated skills
    #[serde(default)]
    pub skills: String,
    #[serde(alias = "min_salary", rename = "minSalary", default)]
    pub min_salary: u64,
}

/// Request to search available jobs
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchJobsRequest {
    #[validate(length(min = 1))]
    pub query: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_country() -> String {
    "gb".to_string()
}
