//! Authentication provider seam
//!
//! Authentication is an external collaborator: the store only needs a
//! current-actor accessor yielding `None` (unauthenticated) or the acting
//! user. `StaticAuthProvider` is the embedding-friendly implementation used
//! by the demo binary and the tests.

use std::sync::RwLock;

use tracing::debug;

use crate::models::user::CurrentUser;

/// Current-actor accessor consumed read-only by mutating operations
pub trait AuthProvider: Send + Sync {
    fn current_user(&self) -> Option<CurrentUser>;
}

/// Holds an explicitly signed-in user in memory
#[derive(Debug, Default)]
pub struct StaticAuthProvider {
    user: RwLock<Option<CurrentUser>>,
}

impl StaticAuthProvider {
    /// Start with no actor signed in
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given actor already signed in
    pub fn signed_in(user: CurrentUser) -> Self {
        Self {
            user: RwLock::new(Some(user)),
        }
    }

    pub fn sign_in(&self, user: CurrentUser) {
        debug!(user_id = %user.id, "Actor signed in");
        if let Ok(mut current) = self.user.write() {
            *current = Some(user);
        }
    }

    pub fn sign_out(&self) {
        debug!("Actor signed out");
        if let Ok(mut current) = self.user.write() {
            *current = None;
        }
    }
}

impl AuthProvider for StaticAuthProvider {
    fn current_user(&self) -> Option<CurrentUser> {
        self.user.read().map(|guard| guard.clone()).unwrap_or(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_and_out() {
        let provider = StaticAuthProvider::new();
        assert!(provider.current_user().is_none());

        provider.sign_in(CurrentUser::new("u1", "u1@example.com"));
        assert_eq!(provider.current_user().unwrap().id, "u1");

        provider.sign_out();
        assert!(provider.current_user().is_none());
    }
}
