use serde::{Deserialize, Serialize};

/// Subscriber profile with search criteria
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub location: String,
    /// Preferred role strings, in registration order
    pub roles: Vec<String>,
    /// Lowercased skill strings
    pub skills: Vec<String>,
    #[serde(rename = "minSalary")]
    pub min_salary: u64,
    #[serde(rename = "lastNotified", default)]
    pub last_notified: Option<chrono::DateTime<chrono::Utc>>,
}

impl UserProfile {
    /// Build a profile from raw registration input.
    ///
    /// Roles and skills arrive as comma-separated strings; roles keep their
    /// casing and order, skills are lowercased. Blank segments are dropped.
    pub fn from_registration(
        name: &str,
        email: &str,
        location: &str,
        roles: &str,
        skills: &str,
        min_salary: u64,
    ) -> Self {
        Self {
            user_id: uuid::Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            location: location.trim().to_string(),
            roles: split_csv(roles),
            skills: split_csv(skills)
                .into_iter()
                .map(|s| s.to_lowercase())
                .collect(),
            min_salary,
            last_notified: None,
        }
    }
}

fn split_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// A single job posting as returned by the upstream search API.
///
/// Every field is optional; the upstream schema makes no guarantees and a
/// missing field simply contributes nothing to scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<Company>,
    #[serde(default)]
    pub location: Option<JobLocation>,
    #[serde(default)]
    pub salary_min: Option<f64>,
    #[serde(default)]
    pub salary_max: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub redirect_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobLocation {
    #[serde(default)]
    pub area: Vec<String>,
}

impl JobPosting {
    /// Display title, falling back like the upstream UI does.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled Position")
    }

    /// Company display name with fallback.
    pub fn display_company(&self) -> &str {
        self.company
            .as_ref()
            .and_then(|c| c.display_name.as_deref())
            .unwrap_or("Unknown Company")
    }

    /// Joined area string ("London, UK"), if the posting carries one.
    pub fn area_string(&self) -> Option<String> {
        self.location.as_ref().map(|l| l.area.join(", "))
    }
}

/// Raw upstream search response; absence of `results` means no results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobSearchResponse {
    #[serde(default)]
    pub results: Vec<JobPosting>,
    #[serde(default)]
    pub count: Option<u64>,
}

/// Scored match result, ephemeral per matching run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedJob {
    pub posting: JobPosting,
    pub score: f64,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
}

/// Scoring weights
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    /// Scale applied to the 0-100 title similarity
    pub title: f64,
    /// Scale applied to the 0-100 location similarity
    pub location: f64,
    /// Points per skill found in the description
    pub skill_points: f64,
    /// Cap on total skill points
    pub skill_cap: f64,
    /// Flat bonus when the posting salary meets the user's minimum
    pub salary_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            title: 0.3,
            location: 0.2,
            skill_points: 10.0,
            skill_cap: 50.0,
            salary_bonus: 10.0,
        }
    }
}
