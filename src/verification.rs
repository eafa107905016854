//! Time-windowed display code
//!
//! NOT a one-time password. The code depends only on the wall clock, so every
//! device shows the same value in the same 30 second window, and anyone who
//! knows the formula can compute it:
//!
//! ```text
//! window = floor(epoch_ms / 30000)
//! code   = (window * 12345) mod 900000 + 100000
//! ```

use chrono::{DateTime, Utc};
use std::fmt;
use tracing::info;

/// Length of one code window in milliseconds
pub const WINDOW_MILLIS: i64 = 30_000;

const MULTIPLIER: u64 = 12_345;
const MODULUS: u64 = 900_000;
const OFFSET: u64 = 100_000;

/// A generated display code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationCode {
    value: u32,
    window: u64,
}

impl VerificationCode {
    /// Code for the current window
    pub fn generate() -> Self {
        let code = Self::at(Utc::now());
        info!(code = %code, "Verification code generated");
        code
    }

    /// Code for the window containing `now`
    pub fn at(now: DateTime<Utc>) -> Self {
        Self::from_millis(now.timestamp_millis())
    }

    /// Code for the window containing the epoch-millisecond timestamp
    pub fn from_millis(millis: i64) -> Self {
        let window = millis.max(0).div_euclid(WINDOW_MILLIS) as u64;
        Self::for_window(window)
    }

    /// Code for a window index
    pub fn for_window(window: u64) -> Self {
        let value = (window.wrapping_mul(MULTIPLIER) % MODULUS + OFFSET) as u32;
        Self { value, window }
    }

    /// Numeric value, always within 100000..=999999
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Index of the 30 second window this code belongs to
    pub fn window(&self) -> u64 {
        self.window
    }

    /// Whether `now` still falls in this code's window
    pub fn is_current_at(&self, now: DateTime<Utc>) -> bool {
        Self::at(now).window == self.window
    }

    /// Whole seconds until the window rolls over, counted from `now`
    pub fn seconds_remaining_at(&self, now: DateTime<Utc>) -> u64 {
        let window_end = (self.window as i64 + 1) * WINDOW_MILLIS;
        let remaining = window_end - now.timestamp_millis();
        if remaining <= 0 {
            0
        } else {
            // Round up so a fresh window shows 30, not 29
            ((remaining + 999) / 1000) as u64
        }
    }
}

impl fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_millis(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn test_formula() {
        // 57_266_670 * 12345 = 706_957_041_150, which is 741_150 mod 900000
        let code = VerificationCode::for_window(57_266_670);
        assert_eq!(code.value(), 841_150);
        assert_eq!(code.to_string(), "841150");
    }

    #[test]
    fn test_same_window_same_code() {
        let start = 57_266_670 * WINDOW_MILLIS;
        let first = VerificationCode::at(at_millis(start));
        let last = VerificationCode::at(at_millis(start + WINDOW_MILLIS - 1));
        assert_eq!(first, last);
    }

    #[test]
    fn test_adjacent_windows_differ() {
        let start = 57_266_670 * WINDOW_MILLIS;
        let current = VerificationCode::at(at_millis(start));
        let next = VerificationCode::at(at_millis(start + WINDOW_MILLIS));
        assert_ne!(current.value(), next.value());
        assert_eq!(next.window(), current.window() + 1);
    }

    #[test]
    fn test_always_six_digits() {
        for window in (0..2_000_000u64).step_by(997) {
            let code = VerificationCode::for_window(window);
            assert!((100_000..=999_999).contains(&code.value()));
            let text = code.to_string();
            assert_eq!(text.len(), 6);
            assert!(text.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn test_generate_is_in_range() {
        let code = VerificationCode::generate();
        assert!((100_000..=999_999).contains(&code.value()));
    }

    #[test]
    fn test_seconds_remaining() {
        let start = 57_266_670 * WINDOW_MILLIS;
        let code = VerificationCode::at(at_millis(start));

        assert_eq!(code.seconds_remaining_at(at_millis(start)), 30);
        assert_eq!(code.seconds_remaining_at(at_millis(start + 29_500)), 1);
        assert_eq!(code.seconds_remaining_at(at_millis(start + WINDOW_MILLIS)), 0);
        assert!(code.is_current_at(at_millis(start + 10_000)));
        assert!(!code.is_current_at(at_millis(start + WINDOW_MILLIS)));
    }
}
