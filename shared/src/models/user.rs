//! User models for the mocked authentication flow
//!
//! Serialized with camelCase keys: these are the JSON values kept in the
//! key-value snapshot store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Admin,
    Student,
}

/// Logged-in user, stored under the `currentUser` key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    pub id: i64,
    pub username: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
}

/// Registration form input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub contact: String,
    pub password: String,
}

/// Self-registered user, appended to the `registeredUsers` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub contact: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub registered_at: DateTime<Utc>,
}
