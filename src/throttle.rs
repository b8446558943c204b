//! Once-per-day check throttling.
//!
//! Remote checks for a module run at most once per calendar day. The gate
//! compares the persisted `last_checked` date against today's local date;
//! same-day re-checks are suppressed.

use chrono::{Local, NaiveDate};

use crate::error::{Result, UpcheckError};

/// Date format used in the registry.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Decide whether enough time has elapsed to justify a new remote check.
///
/// An absent value and the legacy literal `"None"` both mean the module
/// has never been checked. A malformed date is an error, never silently
/// treated as checkable.
pub fn should_check(last_checked: Option<&str>, today: NaiveDate) -> Result<bool> {
    let value = match last_checked {
        None | Some("None") => return Ok(true),
        Some(v) => v,
    };

    let checked =
        NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| UpcheckError::MalformedDate {
            value: value.to_string(),
        })?;

    Ok(today > checked)
}

/// [`should_check`] against today's local date.
pub fn should_check_now(last_checked: Option<&str>) -> Result<bool> {
    should_check(last_checked, Local::now().date_naive())
}

/// Today's local date formatted for the registry.
pub fn today_stamp() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}
