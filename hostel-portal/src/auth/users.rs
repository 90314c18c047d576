//! Fixed credential table
//!
//! Self-registered users are never added here, so they cannot log in.

use shared::models::{AuthenticatedUser, UserType};

struct MockUser {
    id: i64,
    username: &'static str,
    password: &'static str,
    user_type: UserType,
    name: &'static str,
    student_id: Option<&'static str>,
}

const USERS: [MockUser; 3] = [
    MockUser {
        id: 1,
        username: "admin",
        password: "admin123",
        user_type: UserType::Admin,
        name: "Administrator",
        student_id: None,
    },
    MockUser {
        id: 2,
        username: "student",
        password: "student123",
        user_type: UserType::Student,
        name: "Rohan Sharma",
        student_id: Some("2025-CS-101"),
    },
    MockUser {
        id: 3,
        username: "rohan",
        password: "password",
        user_type: UserType::Student,
        name: "Rohan Sharma",
        student_id: Some("2025-CS-101"),
    },
];

/// Exact, case-sensitive match on username and password
pub fn authenticate(username: &str, password: &str) -> Option<AuthenticatedUser> {
    USERS
        .iter()
        .find(|u| u.username == username && u.password == password)
        .map(|u| AuthenticatedUser {
            id: u.id,
            username: u.username.to_string(),
            user_type: u.user_type,
            name: u.name.to_string(),
            student_id: u.student_id.map(str::to_string),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_users() {
        let admin = authenticate("admin", "admin123").unwrap();
        assert_eq!(admin.user_type, UserType::Admin);
        assert_eq!(admin.student_id, None);

        let rohan = authenticate("rohan", "password").unwrap();
        assert_eq!(rohan.user_type, UserType::Student);
        assert_eq!(rohan.name, "Rohan Sharma");
        assert_eq!(rohan.student_id.as_deref(), Some("2025-CS-101"));
    }

    #[test]
    fn test_rejects_mismatch() {
        assert!(authenticate("admin", "password").is_none());
        assert!(authenticate("Admin", "admin123").is_none());
        assert!(authenticate("nobody", "").is_none());
    }
}
