//! Comparators shared by the bucket and query engines.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

/// Ascending, with a missing timestamp as the earliest possible time.
pub fn timestamp_asc(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    a.cmp(&b)
}

/// Descending, so missing timestamps land after every present one.
pub fn timestamp_desc(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    b.cmp(&a)
}

/// Case-insensitive text ordering.
pub fn text_ci(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Case-insensitive ordering where absent sorts before any text.
pub fn optional_text_ci(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => text_ci(a, b),
        _ => a.is_some().cmp(&b.is_some()),
    }
}
