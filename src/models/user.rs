use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two roles the backend knows about. Role drives which flows a session
/// may enter; see `guard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Instructor,
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Instructor => "Instructor",
            Role::Student => "Student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    // The backend stores roles as plain strings; tolerate casing drift.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("instructor") {
            Ok(Role::Instructor)
        } else if s.eq_ignore_ascii_case("student") {
            Ok(Role::Student)
        } else {
            Err(format!("Unknown role: {}", s))
        }
    }
}

/// Identity shape returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Profile record served by the Users resource. The backend uses a different
/// field set here than in the login payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    pub full_name: String,
    pub email: String,
}

/// The authenticated identity held by the client for the current user.
/// All five fields are persisted together; a session missing any of them is
/// treated as logged out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub token: String,
}

impl Session {
    pub fn from_login(token: String, user: User) -> Self {
        Self {
            user_id: user.user_id,
            name: user.name,
            email: user.email,
            role: user.role,
            token,
        }
    }
}
