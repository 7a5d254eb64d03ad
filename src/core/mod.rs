// Core algorithm exports
pub mod matcher;
pub mod scoring;
pub mod similarity;

pub use matcher::Matcher;
pub use scoring::score_posting;
pub use similarity::{ratio, token_set_ratio};
