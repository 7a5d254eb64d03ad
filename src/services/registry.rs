use crate::models::UserProfile;
use tokio::sync::RwLock;

/// In-memory subscriber registry.
///
/// Owned by the application state and shared behind an async RwLock;
/// profiles are only ever appended or touched to update the last-notified
/// timestamp. There is no removal operation.
#[derive(Default)]
pub struct UserRegistry {
    users: RwLock<Vec<UserProfile>>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a profile to the registry.
    pub async fn register(&self, profile: UserProfile) {
        tracing::info!("Registering user: {} <{}>", profile.name, profile.email);
        let mut users = self.users.write().await;
        users.push(profile);
    }

    /// Clone out all registered profiles, in registration order.
    pub async fn snapshot(&self) -> Vec<UserProfile> {
        self.users.read().await.clone()
    }

    /// Record when a user was last notified. Returns false for unknown ids.
    pub async fn mark_notified(
        &self,
        user_id: &str,
        at: chrono::DateTime<chrono::Utc>,
    ) -> bool {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.user_id == user_id) {
            Some(user) => {
                user.last_notified = Some(at);
                true
            }
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}
