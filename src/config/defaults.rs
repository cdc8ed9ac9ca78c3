// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Auto-hide**: How long a snackbar stays before dismissing itself
//! - **Timer tick**: How often auto-dismiss deadlines are checked

// ==========================================================================
// Auto-hide Defaults
// ==========================================================================

/// Default time a snackbar stays visible, in milliseconds.
pub const DEFAULT_AUTO_HIDE_MS: u64 = 6000;

/// Shortest accepted auto-hide duration, in milliseconds.
pub const MIN_AUTO_HIDE_MS: u64 = 500;

/// Longest accepted auto-hide duration, in milliseconds.
pub const MAX_AUTO_HIDE_MS: u64 = 120_000;

// ==========================================================================
// Timer Tick Defaults
// ==========================================================================

/// Interval between auto-dismiss checks, in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_AUTO_HIDE_MS > 0);
    assert!(MAX_AUTO_HIDE_MS >= MIN_AUTO_HIDE_MS);
    assert!(DEFAULT_AUTO_HIDE_MS >= MIN_AUTO_HIDE_MS);
    assert!(DEFAULT_AUTO_HIDE_MS <= MAX_AUTO_HIDE_MS);
    assert!(TICK_INTERVAL_MS < MIN_AUTO_HIDE_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_hide_defaults_are_valid() {
        assert_eq!(DEFAULT_AUTO_HIDE_MS, 6000);
        assert!(DEFAULT_AUTO_HIDE_MS >= MIN_AUTO_HIDE_MS);
        assert!(DEFAULT_AUTO_HIDE_MS <= MAX_AUTO_HIDE_MS);
    }
}
