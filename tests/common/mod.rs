//! Helpers for integration tests.
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};

pub const VALID_NAME: &str = "category name";
pub const VALID_DESCRIPTION: &str = "description name";

/// Routes `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Instant returned by [`fixed_clock`].
pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap()
}

pub fn fixed_clock() -> DateTime<Utc> {
    fixed_instant()
}

/// String of `len` ASCII characters.
pub fn text_of_length(len: usize) -> String {
    "a".repeat(len)
}
