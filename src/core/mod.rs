pub mod errors;
pub mod user;

pub use errors::{Error, Result, ResultExt};
pub use user::{filter_adults, first_user, parse_age, User, ADULT_AGE};
