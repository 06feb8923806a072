//! Stateless commands: `check-email`, `system-info`, `divide` and `count`.

use anyhow::Result;

use crate::counter::{increment_counter, Counter};
use crate::utils::{divide_numbers, get_system_info};
use crate::validation::is_valid_email;

/// Print the verdict and report whether the email is valid.
pub fn handle_check_email(email: &str) -> bool {
    let valid = is_valid_email(email);
    println!("{}", if valid { "valid" } else { "invalid" });
    valid
}

pub fn handle_system_info() {
    println!("{}", get_system_info());
}

pub fn handle_divide(dividend: f64, divisor: f64) -> Result<()> {
    let quotient = divide_numbers(dividend, divisor)?;
    println!("{}", quotient);
    Ok(())
}

/// Values produced by incrementing a fresh counter `times` times, lazily.
pub fn count_values(times: u64) -> impl Iterator<Item = u64> {
    let mut counter = Counter::new();
    (0..times).map(move |_| increment_counter(&mut counter))
}

pub fn handle_count(times: u64) {
    for value in count_values(times) {
        println!("{}", value);
    }
}
