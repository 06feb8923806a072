use serde::{Deserialize, Serialize};

use super::errors::{Error, Result};

/// Minimum age considered adult by [`User::is_adult`].
pub const ADULT_AGE: u32 = 18;

/// A submitted user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub age: u32,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }
}

/// Keep only adult users, preserving order.
pub fn filter_adults(users: impl IntoIterator<Item = User>) -> Vec<User> {
    users.into_iter().filter(User::is_adult).collect()
}

/// First user in the slice, if any.
pub fn first_user(users: &[User]) -> Option<&User> {
    users.first()
}

/// Parse an age from user input, ignoring surrounding whitespace.
pub fn parse_age(input: &str) -> Result<u32> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|e| Error::invalid_age(input, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_adult_boundary() {
        assert!(!User::new("Kid", "kid@x.com", 17).is_adult());
        assert!(User::new("Ada", "ada@x.com", 18).is_adult());
    }

    #[test]
    fn test_filter_adults_keeps_order() {
        let users = vec![
            User::new("Zoe", "zoe@x.com", 40),
            User::new("Tim", "tim@x.com", 12),
            User::new("Ann", "ann@x.com", 18),
        ];
        let names: Vec<String> = filter_adults(users).into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["Zoe".to_string(), "Ann".to_string()]);
    }

    #[test]
    fn test_first_user_on_empty_slice() {
        assert!(first_user(&[]).is_none());
        let users = [User::new("John", "john@example.com", 30)];
        assert_eq!(first_user(&users).map(User::name), Some("John"));
    }

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age(" 42 ").unwrap(), 42);
        assert!(matches!(
            parse_age("not_a_number"),
            Err(Error::InvalidAge { .. })
        ));
        assert!(parse_age("-3").is_err());
    }
}
