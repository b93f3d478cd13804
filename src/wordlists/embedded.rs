//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

use chrono::NaiveDate;

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));

/// Day of `ANSWERS[0]`
pub const DEFAULT_START_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2021, 6, 19) {
    Some(date) => date,
    None => panic!("invalid default start date"),
};
