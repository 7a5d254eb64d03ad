use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub adzuna: AdzunaSettings,
    #[serde(default)]
    pub resend: ResendSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub schedule: ScheduleSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdzunaSettings {
    #[serde(default = "default_adzuna_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub app_key: String,
}

impl Default for AdzunaSettings {
    fn default() -> Self {
        Self {
            base_url: default_adzuna_base_url(),
            app_id: String::new(),
            app_key: String::new(),
        }
    }
}

fn default_adzuna_base_url() -> String {
    "https://api.adzuna.com/v1/api/jobs".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResendSettings {
    #[serde(default = "default_resend_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
}

impl Default for ResendSettings {
    fn default() -> Self {
        Self {
            base_url: default_resend_base_url(),
            api_key: String::new(),
            from_address: default_from_address(),
        }
    }
}

fn default_resend_base_url() -> String {
    "https://api.resend.com".to_string()
}
fn default_from_address() -> String {
    "jobs@yourdomain.com".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    /// Search responses are served from cache for this long (24h default)
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_cache_ttl(),
        }
    }
}

fn default_cache_ttl() -> u64 {
    86400
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Postings must score strictly above this to qualify
    #[serde(default = "default_score_threshold")]
    pub score_threshold: f64,
    /// Matches kept per user per run
    #[serde(default = "default_max_matches")]
    pub max_matches: usize,
    /// Upstream page size, single page per fetch
    #[serde(default = "default_results_per_page")]
    pub results_per_page: u32,
    /// Postings returned by the manual search surface
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
    /// Country used when matching registered users
    #[serde(default = "default_matching_country")]
    pub default_country: String,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            score_threshold: default_score_threshold(),
            max_matches: default_max_matches(),
            results_per_page: default_results_per_page(),
            search_limit: default_search_limit(),
            default_country: default_matching_country(),
        }
    }
}

fn default_score_threshold() -> f64 {
    60.0
}
fn default_max_matches() -> usize {
    5
}
fn default_results_per_page() -> u32 {
    20
}
fn default_search_limit() -> usize {
    10
}
fn default_matching_country() -> String {
    "gb".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_title_weight")]
    pub title: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_skill_points")]
    pub skill_points: f64,
    #[serde(default = "default_skill_cap")]
    pub skill_cap: f64,
    #[serde(default = "default_salary_bonus")]
    pub salary_bonus: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            title: default_title_weight(),
            location: default_location_weight(),
            skill_points: default_skill_points(),
            skill_cap: default_skill_cap(),
            salary_bonus: default_salary_bonus(),
        }
    }
}

fn default_title_weight() -> f64 {
    0.3
}
fn default_location_weight() -> f64 {
    0.2
}
fn default_skill_points() -> f64 {
    10.0
}
fn default_skill_cap() -> f64 {
    50.0
}
fn default_salary_bonus() -> f64 {
    10.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleSettings {
    #[serde(default = "default_schedule_enabled")]
    pub enabled: bool,
    #[serde(default = "default_schedule_hour")]
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            enabled: default_schedule_enabled(),
            hour: default_schedule_hour(),
            minute: 0,
        }
    }
}

fn default_schedule_enabled() -> bool {
    true
}
fn default_schedule_hour() -> u32 {
    9
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, then config/local.toml)
    /// 3. Environment variables (prefixed with JOBMATCH__)
    /// 4. Bare credential variables (ADZUNA_APP_ID, ADZUNA_API_KEY, RESEND_API_KEY)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with JOBMATCH)
            // e.g., JOBMATCH__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("JOBMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = substitute_credential_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("JOBMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Overlay the bare credential variables the deployment provides
/// (ADZUNA_APP_ID, ADZUNA_API_KEY, RESEND_API_KEY) onto the config tree.
fn substitute_credential_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(app_id) = env::var("ADZUNA_APP_ID") {
        builder = builder.set_override("adzuna.app_id", app_id)?;
    }
    if let Ok(app_key) = env::var("ADZUNA_API_KEY") {
        builder = builder.set_override("adzuna.app_key", app_key)?;
    }
    if let Ok(api_key) = env::var("RESEND_API_KEY") {
        builder = builder.set_override("resend.api_key", api_key)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.title, 0.3);
        assert_eq!(weights.location, 0.2);
        assert_eq!(weights.skill_points, 10.0);
        assert_eq!(weights.skill_cap, 50.0);
        assert_eq!(weights.salary_bonus, 10.0);
    }

    #[test]
    fn test_default_matching() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.score_threshold, 60.0);
        assert_eq!(matching.max_matches, 5);
        assert_eq!(matching.results_per_page, 20);
        assert_eq!(matching.search_limit, 10);
        assert_eq!(matching.default_country, "gb");
    }

    #[test]
    fn test_default_cache_ttl_is_24h() {
        let cache = CacheSettings::default();
        assert_eq!(cache.ttl_secs, 86400);
    }

    #[test]
    fn test_default_schedule() {
        let schedule = ScheduleSettings::default();
        assert!(schedule.enabled);
        assert_eq!(schedule.hour, 9);
        assert_eq!(schedule.minute, 0);
    }
}
