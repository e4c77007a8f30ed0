/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{ALLOWED_DURATIONS, DEFAULT_AUCTION_DURATION};
use chrono::TimeDelta;

/// Returns the auction duration to send for a requested one
///
/// Only exact matches are kept; anything else becomes
/// [`DEFAULT_AUCTION_DURATION`], not the nearest allowed value.
///
/// ```
/// use allegro_webapi::model::duration::best_allowed_duration;
///
/// assert_eq!(best_allowed_duration(5), 5);
/// assert_eq!(best_allowed_duration(14), 14);
/// assert_eq!(best_allowed_duration(9), 3);
/// assert_eq!(best_allowed_duration(999), 3);
/// ```
#[must_use]
pub fn best_allowed_duration(requested: i64) -> u8 {
    ALLOWED_DURATIONS
        .iter()
        .copied()
        .find(|&allowed| i64::from(allowed) == requested)
        .unwrap_or(DEFAULT_AUCTION_DURATION)
}

/// Whole days between two unix timestamps, regardless of their order
///
/// Partial days are dropped. Spans too large to represent count as zero.
#[must_use]
pub fn auction_days(start: i64, end: i64) -> i64 {
    end.checked_sub(start)
        .and_then(TimeDelta::try_seconds)
        .map(|span| span.num_days().abs())
        .unwrap_or(0)
}
