use serde::{Deserialize, Serialize};

/// Age strictly above which a user is reported as a senior.
pub const DEFAULT_SENIOR_AGE: u32 = 65;

/// Root configuration structure for usermgr
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UsermgrConfig {
    /// Administrator settings
    #[serde(default)]
    pub admin: Option<AdminConfig>,

    /// Thresholds configuration
    #[serde(default)]
    pub thresholds: Option<ThresholdsConfig>,
}

#[derive(Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AdminConfig {
    /// Administrator credential. Usually supplied through the environment.
    #[serde(default)]
    pub credential: Option<String>,
}

// Keep the credential out of logs and panic messages.
impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("credential", &self.credential.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThresholdsConfig {
    #[serde(default = "default_senior_age")]
    pub senior_age: u32,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            senior_age: default_senior_age(),
        }
    }
}

pub fn default_senior_age() -> u32 {
    DEFAULT_SENIOR_AGE
}

impl UsermgrConfig {
    pub fn admin_credential(&self) -> Option<&str> {
        self.admin.as_ref().and_then(|a| a.credential.as_deref())
    }

    pub fn senior_age(&self) -> u32 {
        self.thresholds
            .as_ref()
            .map(|t| t.senior_age)
            .unwrap_or(DEFAULT_SENIOR_AGE)
    }

    /// Replace the configured credential, creating the `[admin]` table if needed.
    pub fn with_admin_credential(mut self, credential: impl Into<String>) -> Self {
        self.admin.get_or_insert_with(AdminConfig::default).credential = Some(credential.into());
        self
    }
}
