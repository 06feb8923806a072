//! Accumulator of accepted user names.
//!
//! A [`UserManager`] turns user submissions into one-line summaries and keeps
//! the names of every submission whose email contained an `@`, in the order
//! they were accepted.
//!
//! ```rust
//! use usermgr::{AdminCredential, UserManager};
//!
//! let mut manager = UserManager::new(AdminCredential::new("example-only").unwrap());
//! let summary = manager.process_user(Some("Alice"), "alice@x.com", 70);
//! assert_eq!(summary, "Processing user: Alice, Email: alice@x.com, Age: 70 (Senior)");
//! assert_eq!(manager.get_user_names(), vec!["Alice".to_string()]);
//! ```

use crate::config::{UsermgrConfig, DEFAULT_SENIOR_AGE};
use crate::core::{Error, Result, User};
use crate::validation::{has_at_sign, usable_name};

/// Returned by [`UserManager::process_user`] when no usable name was given.
pub const INVALID_NAME: &str = "Invalid name";

/// Suffix appended to summaries of users above the senior age threshold.
pub const SENIOR_SUFFIX: &str = " (Senior)";

/// Administrator credential supplied from configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredential(String);

impl AdminCredential {
    /// Wrap a credential. Empty credentials are rejected.
    pub fn new(secret: impl Into<String>) -> Result<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(Error::configuration("admin credential must not be empty"));
        }
        Ok(Self(secret))
    }

    /// Compare without short-circuiting on the first differing byte.
    pub fn matches(&self, candidate: &str) -> bool {
        let expected = self.0.as_bytes();
        let candidate = candidate.as_bytes();
        if expected.len() != candidate.len() {
            return false;
        }
        expected
            .iter()
            .zip(candidate)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl std::fmt::Debug for AdminCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AdminCredential(<redacted>)")
    }
}

#[derive(Debug, Clone)]
pub struct UserManager {
    users: Vec<String>,
    admin_credential: AdminCredential,
    senior_age: u32,
}

impl UserManager {
    pub fn new(admin_credential: AdminCredential) -> Self {
        Self {
            users: Vec::new(),
            admin_credential,
            senior_age: DEFAULT_SENIOR_AGE,
        }
    }

    /// Build a manager from loaded configuration.
    ///
    /// Fails when no admin credential is configured.
    pub fn from_config(config: &UsermgrConfig) -> Result<Self> {
        let credential = config.admin_credential().ok_or_else(|| {
            Error::configuration(format!(
                "no admin credential configured; set [admin] credential in {} or {}",
                crate::config::CONFIG_FILE_NAME,
                crate::config::ADMIN_CREDENTIAL_ENV
            ))
        })?;

        Ok(Self::new(AdminCredential::new(credential)?).with_senior_age(config.senior_age()))
    }

    pub fn with_senior_age(mut self, senior_age: u32) -> Self {
        self.senior_age = senior_age;
        self
    }

    pub fn senior_age(&self) -> u32 {
        self.senior_age
    }

    /// Summarize a submission and record its name when the email has an `@`.
    ///
    /// A missing or empty name yields [`INVALID_NAME`] and leaves the manager
    /// untouched. Malformed emails are never an error; they only keep the
    /// name out of the accepted list.
    pub fn process_user(&mut self, name: Option<&str>, email: &str, age: u32) -> String {
        let Some(name) = usable_name(name) else {
            tracing::debug!("Rejected submission without a name");
            return INVALID_NAME.to_string();
        };

        let mut summary = format!("Processing user: {}, Email: {}, Age: {}", name, email, age);

        if has_at_sign(email) {
            self.users.push(name.to_string());
            tracing::debug!(user = name, accepted = self.users.len(), "Accepted user");
        } else {
            tracing::debug!(user = name, "Email without '@'; user not recorded");
        }

        if age > self.senior_age {
            summary.push_str(SENIOR_SUFFIX);
        }

        summary
    }

    /// [`process_user`](Self::process_user) for an owned record.
    pub fn process(&mut self, user: &User) -> String {
        self.process_user(Some(&user.name), &user.email, user.age)
    }

    /// Copy of the accepted names in acceptance order.
    pub fn get_user_names(&self) -> Vec<String> {
        self.users.clone()
    }

    pub fn user_names(&self) -> &[String] {
        &self.users
    }

    pub fn authenticate_admin(&self, candidate: &str) -> bool {
        self.admin_credential.matches(candidate)
    }
}
