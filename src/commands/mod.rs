//! CLI command implementations for usermgr operations.
//!
//! Available commands:
//! - **process** / **batch**: Run submissions through a [`UserManager`](crate::UserManager)
//! - **check-email**, **system-info**, **divide**, **count**: Stateless helpers
//! - **init**: Initialize a new usermgr configuration file

pub mod info;
pub mod init;
pub mod process;

pub use info::{handle_check_email, handle_count, handle_divide, handle_system_info};
pub use init::init_config;
pub use process::{handle_batch, handle_process, ProcessReport, Submission};
