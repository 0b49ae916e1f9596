//! Auto-resolve age: the allowed-values table and its display label
//!
//! The field stores an integer number of hours. The set of legal values is
//! precomputed once: a strictly increasing sequence from 0 to 720 with a
//! widening step at fixed breakpoints. Controls bound to the field snap any
//! input to the nearest member of the table.

use once_cell::sync::Lazy;

/// Upper bound of the allowed-values sequence, in hours (30 days).
pub const RESOLVE_AGE_MAX_HOURS: u32 = 720;

/// Legal values for the auto-resolve age field, in hours.
///
/// Step widens with magnitude: 1 below 12, 3 from 12 to 23, 6 from 24 to
/// 35, 12 from 36 to 47, 24 from 48 to 720.
pub static RESOLVE_AGE_ALLOWED_VALUES: Lazy<Vec<u32>> = Lazy::new(resolve_age_allowed_values);

fn resolve_age_allowed_values() -> Vec<u32> {
    let mut values = Vec::new();
    let mut i = 0u32;
    while i <= RESOLVE_AGE_MAX_HOURS {
        values.push(i);
        i += if i < 12 {
            1
        } else if i < 24 {
            3
        } else if i < 36 {
            6
        } else if i < 48 {
            12
        } else {
            24
        };
    }
    values
}

/// Display label for an auto-resolve age.
///
/// 0 reads "Disabled"; values above 23 hours that divide evenly into days
/// are shown in days; everything else in hours.
#[must_use]
pub fn format_resolve_age(hours: i64) -> String {
    if hours == 0 {
        return "Disabled".to_string();
    }
    if hours > 23 && hours % 24 == 0 {
        let days = hours / 24;
        return if days == 1 {
            "1 day".to_string()
        } else {
            format!("{days} days")
        };
    }
    if hours == 1 {
        "1 hour".to_string()
    } else {
        format!("{hours} hours")
    }
}

/// Snap an arbitrary hour count to the nearest member of the allowed-values
/// table. Ties resolve to the smaller member.
#[must_use]
pub fn nearest_allowed_value(hours: i64) -> u32 {
    let mut best = 0u32;
    let mut best_distance = i64::MAX;
    for &value in RESOLVE_AGE_ALLOWED_VALUES.iter() {
        let distance = (i64::from(value) - hours).abs();
        if distance < best_distance {
            best = value;
            best_distance = distance;
        }
    }
    best
}
