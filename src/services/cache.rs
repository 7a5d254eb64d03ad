use crate::models::JobSearchResponse;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// TTL-keyed cache for upstream search responses.
///
/// Single-tier, in-memory. Expiry is evaluated lazily on lookup; there is
/// no background eviction and entries are never invalidated early. A
/// re-fetch blindly overwrites whatever was stored under the key. This is
/// the intended staleness policy: results up to one TTL old are served
/// unchanged.
pub struct JobCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

struct CacheEntry {
    stored_at: Instant,
    payload: JobSearchResponse,
}

impl JobCache {
    /// Create a cache with the given time-to-live window.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Get the stored payload if it is younger than the TTL.
    ///
    /// Expired entries stay in place until the next `set` overwrites them.
    pub async fn get(&self, key: &str) -> Option<JobSearchResponse> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => {
                tracing::trace!("Cache hit: {}", key);
                Some(entry.payload.clone())
            }
            Some(_) => {
                tracing::trace!("Cache expired: {}", key);
                None
            }
            None => {
                tracing::trace!("Cache miss: {}", key);
                None
            }
        }
    }

    /// Store a payload under the key, overwriting any prior entry.
    pub async fn set(&self, key: &str, payload: JobSearchResponse) {
        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            CacheEntry {
                stored_at: Instant::now(),
                payload,
            },
        );
        tracing::trace!("Cache set: {}", key);
    }

    /// Get cache statistics
    pub async fn stats(&self) -> CacheStats {
        let entries = self.entries.read().await;
        let fresh = entries
            .values()
            .filter(|e| e.stored_at.elapsed() < self.ttl)
            .count();
        CacheStats {
            entries: entries.len(),
            fresh,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: usize,
    pub fresh: usize,
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for a search query
    pub fn search(query: &str, location: &str, country: &str) -> String {
        format!("search:{}:{}:{}", query, location, country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobPosting;

    fn sample_response() -> JobSearchResponse {
        JobSearchResponse {
            results: vec![JobPosting {
                title: Some("Data Analyst".to_string()),
                ..JobPosting::default()
            }],
            count: Some(1),
        }
    }

    #[tokio::test]
    async fn test_hit_within_ttl_returns_stored_payload() {
        let cache = JobCache::new(Duration::from_secs(3600));
        let key = CacheKey::search("Data Analyst", "London", "gb");

        cache.set(&key, sample_response()).await;
        let hit = cache.get(&key).await.expect("expected a cache hit");

        assert_eq!(hit.results.len(), 1);
        assert_eq!(hit.results[0].title.as_deref(), Some("Data Analyst"));
    }

    #[tokio::test]
    async fn test_expired_entry_misses() {
        let cache = JobCache::new(Duration::from_secs(0));
        let key = CacheKey::search("Data Analyst", "London", "gb");

        cache.set(&key, sample_response()).await;
        assert!(cache.get(&key).await.is_none());
    }

    #[tokio::test]
    async fn test_set_overwrites_prior_entry() {
        let cache = JobCache::new(Duration::from_secs(3600));
        let key = CacheKey::search("Data Analyst", "London", "gb");

        cache.set(&key, sample_response()).await;
        cache
            .set(
                &key,
                JobSearchResponse {
                    results: vec![],
                    count: Some(0),
                },
            )
            .await;

        let hit = cache.get(&key).await.unwrap();
        assert!(hit.results.is_empty());

        let stats = cache.stats().await;
        assert_eq!(stats.entries, 1);
    }

    #[test]
    fn test_cache_key_builder() {
        assert_eq!(
            CacheKey::search("Data Analyst", "London", "gb"),
            "search:Data Analyst:London:gb"
        );
    }
}
