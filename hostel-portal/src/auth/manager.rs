//! Mocked authentication over the snapshot store
//!
//! # Snapshot keys
//!
//! | Key | Value |
//! |-----|-------|
//! | `currentUser` | [`AuthenticatedUser`] |
//! | `authToken` | token string |
//! | `registeredUsers` | `Vec<RegisteredUser>` |

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use shared::models::{AuthenticatedUser, RegisteredUser, RegistrationForm, UserType};
use std::sync::Arc;

use super::{AuthError, AuthResult, token, users};
use crate::core::{Route, SimulatedLatency};
use crate::security_log;
use crate::storage::{AUTH_TOKEN_KEY, CURRENT_USER_KEY, REGISTERED_USERS_KEY, SnapshotStore};
use crate::utils::validation::validate_registration;

/// Successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginOutcome {
    pub user: AuthenticatedUser,
    /// Dashboard matching the user's type
    pub redirect: Route,
}

pub struct AuthManager {
    store: Arc<dyn SnapshotStore>,
    latency: SimulatedLatency,
}

impl AuthManager {
    pub fn new(store: Arc<dyn SnapshotStore>, latency: SimulatedLatency) -> Self {
        Self { store, latency }
    }

    pub fn dashboard_for(user_type: UserType) -> Route {
        match user_type {
            UserType::Admin => Route::AdminDashboard,
            UserType::Student => Route::StudentDashboard,
        }
    }

    /// Check credentials against the fixed user table.
    ///
    /// Waits on the simulated latency first, success or not. On success the
    /// user and a fresh token are written to the store.
    pub async fn login(&self, username: &str, password: &str) -> AuthResult<LoginOutcome> {
        self.latency.wait().await;

        let Some(user) = users::authenticate(username, password) else {
            security_log!(WARN, "login_failed", username = %username, reason = "invalid_credentials");
            return Err(AuthError::InvalidCredentials);
        };

        self.store.save(CURRENT_USER_KEY, &user)?;
        self.store.set(AUTH_TOKEN_KEY, Value::String(token::generate()))?;

        security_log!(INFO, "login_succeeded", username = %user.username, user_type = ?user.user_type);
        let redirect = Self::dashboard_for(user.user_type);
        Ok(LoginOutcome { user, redirect })
    }

    /// Validate and record a self-registration.
    ///
    /// Validation failures return at once without waiting. The new user is
    /// appended to `registeredUsers`; it does not become a login.
    pub async fn register(&self, form: &RegistrationForm) -> AuthResult<RegisteredUser> {
        validate_registration(form)?;
        self.latency.wait().await;

        let username = form
            .email
            .split('@')
            .next()
            .unwrap_or_default()
            .to_string();
        let user = RegisteredUser {
            id: shared::util::snowflake_id(),
            username,
            email: form.email.clone(),
            full_name: form.full_name.clone(),
            contact: form.contact.clone(),
            user_type: UserType::Student,
            registered_at: Utc::now(),
        };

        let mut registered = self.registered_users()?;
        registered.push(user.clone());
        self.store.save(REGISTERED_USERS_KEY, &registered)?;

        tracing::info!(username = %user.username, total = registered.len(), "User registered");
        Ok(user)
    }

    pub fn registered_users(&self) -> AuthResult<Vec<RegisteredUser>> {
        Ok(self.store.load(REGISTERED_USERS_KEY)?.unwrap_or_default())
    }

    pub fn current_user(&self) -> AuthResult<Option<AuthenticatedUser>> {
        Ok(self.store.load(CURRENT_USER_KEY)?)
    }

    /// Both a user and a token are present
    pub fn is_authenticated(&self) -> AuthResult<bool> {
        Ok(self.current_user()?.is_some() && self.store.get(AUTH_TOKEN_KEY)?.is_some())
    }

    /// Clear the session snapshot; always redirects to the login page
    pub fn logout(&self) -> AuthResult<Route> {
        if let Some(user) = self.current_user()? {
            security_log!(INFO, "logout", username = %user.username);
        }
        self.store.remove(CURRENT_USER_KEY)?;
        self.store.remove(AUTH_TOKEN_KEY)?;
        Ok(Route::Login)
    }

    /// Route guard for the page a session is mounted on.
    ///
    /// Returns where to redirect, if anywhere: protected dashboards without
    /// authentication go to login, and an authenticated user on the login
    /// page goes to their dashboard.
    pub fn check_auth_status(&self, route: Route) -> AuthResult<Option<Route>> {
        if route.is_protected() && !self.is_authenticated()? {
            security_log!(WARN, "unauthenticated_access", page = %route);
            return Ok(Some(Route::Login));
        }

        if route == Route::Login
            && self.is_authenticated()?
            && let Some(user) = self.current_user()?
        {
            return Ok(Some(Self::dashboard_for(user.user_type)));
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn manager() -> (AuthManager, Arc<dyn SnapshotStore>) {
        let store: Arc<dyn SnapshotStore> = Arc::new(MemoryStore::new());
        (AuthManager::new(store.clone(), SimulatedLatency::Skip), store)
    }

    fn form() -> RegistrationForm {
        RegistrationForm {
            full_name: "Kiran Rao".to_string(),
            email: "kiran.rao@university.edu".to_string(),
            contact: "9876543210".to_string(),
            password: "secret1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_writes_snapshot() {
        let (auth, store) = manager();
        let outcome = auth.login("admin", "admin123").await.unwrap();
        assert_eq!(outcome.redirect, Route::AdminDashboard);
        assert_eq!(outcome.user.name, "Administrator");

        assert!(auth.is_authenticated().unwrap());
        assert_eq!(auth.current_user().unwrap(), Some(outcome.user));
        assert!(store.get(AUTH_TOKEN_KEY).unwrap().unwrap().is_string());
    }

    #[tokio::test]
    async fn test_student_login_redirects_to_student_dashboard() {
        let (auth, _) = manager();
        let outcome = auth.login("student", "student123").await.unwrap();
        assert_eq!(outcome.redirect, Route::StudentDashboard);
        assert_eq!(outcome.user.student_id.as_deref(), Some("2025-CS-101"));
    }

    #[tokio::test]
    async fn test_invalid_login_leaves_store_empty() {
        let (auth, store) = manager();
        let err = auth.login("admin", "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(!auth.is_authenticated().unwrap());
        assert_eq!(store.get(CURRENT_USER_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_user_without_token_is_not_authenticated() {
        let (auth, store) = manager();
        auth.login("rohan", "password").await.unwrap();
        store.remove(AUTH_TOKEN_KEY).unwrap();
        assert!(auth.current_user().unwrap().is_some());
        assert!(!auth.is_authenticated().unwrap());
    }

    #[tokio::test]
    async fn test_logout_clears_snapshot() {
        let (auth, store) = manager();
        auth.login("rohan", "password").await.unwrap();
        assert_eq!(auth.logout().unwrap(), Route::Login);
        assert_eq!(store.get(CURRENT_USER_KEY).unwrap(), None);
        assert_eq!(store.get(AUTH_TOKEN_KEY).unwrap(), None);
        // logging out twice is harmless
        assert_eq!(auth.logout().unwrap(), Route::Login);
    }

    #[tokio::test]
    async fn test_register_appends_user() {
        let (auth, _) = manager();
        let first = auth.register(&form()).await.unwrap();
        assert_eq!(first.username, "kiran.rao");
        assert_eq!(first.user_type, UserType::Student);

        let second = auth
            .register(&RegistrationForm {
                email: "asha@example.org".to_string(),
                ..form()
            })
            .await
            .unwrap();

        let registered = auth.registered_users().unwrap();
        assert_eq!(registered, vec![first, second]);
    }

    #[tokio::test]
    async fn test_registered_user_cannot_login() {
        let (auth, _) = manager();
        auth.register(&form()).await.unwrap();
        assert!(matches!(
            auth.login("kiran.rao", "secret1").await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_invalid_registration_skips_latency_and_store() {
        let store: Arc<dyn SnapshotStore> = Arc::new(MemoryStore::new());
        let latency = SimulatedLatency::custom(|| async {
            panic!("latency must not be awaited for invalid input");
        });
        let auth = AuthManager::new(store.clone(), latency);

        let err = auth
            .register(&RegistrationForm {
                full_name: "K".to_string(),
                ..form()
            })
            .await
            .unwrap_err();
        let AuthError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(store.get(REGISTERED_USERS_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_route_guard() {
        let (auth, _) = manager();
        assert_eq!(
            auth.check_auth_status(Route::StudentDashboard).unwrap(),
            Some(Route::Login)
        );
        assert_eq!(auth.check_auth_status(Route::Login).unwrap(), None);
        assert_eq!(auth.check_auth_status(Route::Home).unwrap(), None);

        auth.login("student", "student123").await.unwrap();
        assert_eq!(
            auth.check_auth_status(Route::Login).unwrap(),
            Some(Route::StudentDashboard)
        );
        assert_eq!(auth.check_auth_status(Route::StudentDashboard).unwrap(), None);
        // either dashboard is open to any authenticated user
        assert_eq!(auth.check_auth_status(Route::AdminDashboard).unwrap(), None);
    }
}
