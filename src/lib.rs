// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod counter;
pub mod manager;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{filter_adults, first_user, parse_age, Error, Result, User};

pub use crate::config::{load_config, UsermgrConfig};

pub use crate::counter::{increment_counter, AtomicCounter, Counter};

pub use crate::manager::{AdminCredential, UserManager, INVALID_NAME, SENIOR_SUFFIX};

pub use crate::utils::{divide_numbers, get_system_info};

pub use crate::validation::is_valid_email;
