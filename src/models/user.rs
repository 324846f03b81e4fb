//! User and role model

use serde::{Deserialize, Serialize};

/// Role granted to an authenticated caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Any signed-in user; may read every resource
    User,
    /// May create, update and delete
    Admin,
}

impl Role {
    /// Spring-style authority name, e.g. `ROLE_ADMIN`
    pub fn authority(&self) -> &'static str {
        match self {
            Role::User => "ROLE_USER",
            Role::Admin => "ROLE_ADMIN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    /// Accepts both the short name and the authority name, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.strip_prefix("role_").unwrap_or(&lower) {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Profile of the signed-in user as returned by `/api/currentUser`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub email: String,
    pub name: String,
}

/// A granted authority as the frontend expects it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Authority {
    pub authority: String,
}

/// Response body for `/api/currentUser`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentUserResponse {
    pub user: UserProfile,
    pub roles: Vec<Authority>,
}
