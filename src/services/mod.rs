// Service exports
pub mod adzuna;
pub mod cache;
pub mod mailer;
pub mod pipeline;
pub mod registry;

pub use adzuna::{AdzunaClient, AdzunaError};
pub use cache::{CacheKey, CacheStats, JobCache};
pub use mailer::{MailerError, ResendClient};
pub use pipeline::{JobSearchResult, MatchPipeline, NotifyOutcome};
pub use registry::UserRegistry;
