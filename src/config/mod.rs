//! Configuration loading for usermgr.
//!
//! Settings come from a `.usermgr.toml` file found in the current directory
//! or one of its ancestors, with the administrator credential overridable
//! through `USERMGR_ADMIN_CREDENTIAL`.

mod core;
mod loader;

pub use self::core::{
    default_senior_age, AdminConfig, ThresholdsConfig, UsermgrConfig, DEFAULT_SENIOR_AGE,
};
pub use loader::{
    apply_env_overrides, directory_ancestors, load_config, load_config_file, load_config_from,
    parse_and_validate_config, ADMIN_CREDENTIAL_ENV, CONFIG_FILE_NAME,
};
