use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// What a user is allowed to see and do. Determines query scoping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Driver,
    Admin,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::Customer => "customer",
            Role::Driver => "driver",
            Role::Admin => "admin",
        };
        write!(f, "{s}")
    }
}

/// A registered account, as stored. Never handed to callers as-is; the
/// outward shape is [`UserProfile`], which omits the password.
///
/// Accounts are append-only in the core: no profile edits, no deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub name: String,
    pub role: Role,
    pub address: String,
    pub vehicle_number: Option<String>,
}

impl User {
    /// The sanitized, password-free view of this account.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            email: self.email.clone(),
            phone: self.phone.clone(),
            name: self.name.clone(),
            role: self.role,
            address: self.address.clone(),
            vehicle_number: self.vehicle_number.clone(),
        }
    }
}

/// A [`User`] minus the password field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    pub phone: String,
    pub name: String,
    pub role: Role,
    pub address: String,
    pub vehicle_number: Option<String>,
}

/// Payload for creating a new account.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub email: String,
    pub phone: String,
    pub password: String,
    pub name: String,
    pub role: Role,
    pub address: String,
    pub vehicle_number: Option<String>,
}

/// Predicates the user actor can evaluate over its store.
#[derive(Debug, Clone)]
pub enum UserFilter {
    /// Exact match on email OR phone. Login and password-reset lookups.
    Identifier(String),
    /// Any account holding either of these contact points. Uniqueness probe
    /// for signup.
    EmailOrPhone { email: String, phone: String },
}
