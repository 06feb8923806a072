use crate::core::{Error, Result};

/// Identifier of the host operating system (`"linux"`, `"macos"`, `"windows"`, ...).
pub fn get_system_info() -> &'static str {
    std::env::consts::OS
}

/// Divide `a` by `b`, failing instead of producing an infinity or NaN.
pub fn divide_numbers(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(Error::DivisionByZero { dividend: a });
    }
    Ok(a / b)
}
