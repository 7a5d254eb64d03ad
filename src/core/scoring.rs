use crate::core::similarity::token_set_ratio;
use crate::models::{JobPosting, ScoringWeights, UserProfile};

/// Calculate a match score for a posting against a user profile.
///
/// Scoring formula:
/// score = (
///     title_similarity * 0.3 +     # 0-100 fuzzy match on searched role, max 30
///     skill_points +               # 10 per skill in description, capped at 50
///     location_similarity * 0.2 +  # 0-100 fuzzy match on area, max 20
///     salary_bonus                 # flat 10 when salary_min >= user minimum
/// )
///
/// A component whose posting field is absent contributes 0; the posting is
/// still scored on whatever it does carry. Returns the total alongside the
/// skills that matched, for display in the notification.
pub fn score_posting(
    profile: &UserProfile,
    role: &str,
    posting: &JobPosting,
    weights: &ScoringWeights,
) -> (f64, Vec<String>) {
    let mut score = 0.0;
    let mut matched_skills = Vec::new();

    // Title relevance against the searched role
    if let Some(title) = &posting.title {
        score += token_set_ratio(role, title) * weights.title;
    }

    // Skill overlap: case-insensitive substring match in the description
    if let Some(description) = &posting.description {
        let description = description.to_lowercase();
        let mut skill_points = 0.0;
        for skill in &profile.skills {
            if description.contains(skill.as_str()) {
                skill_points += weights.skill_points;
                matched_skills.push(skill.clone());
            }
        }
        score += skill_points.min(weights.skill_cap);
    }

    // Location relevance against the posting's area list
    if let Some(area) = posting.area_string() {
        score += token_set_ratio(&profile.location, &area) * weights.location;
    }

    // Salary eligibility bonus
    if let Some(salary_min) = posting.salary_min {
        if salary_min >= profile.min_salary as f64 {
            score += weights.salary_bonus;
        }
    }

    (score, matched_skills)
}
