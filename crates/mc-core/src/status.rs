//! Well-known status and priority labels.
//!
//! Status is an open string: new labels show up across revisions of the
//! task document and are routed by bucket configuration, not by this list.
//! These constants name the labels the default buckets know about.

pub const ONGOING: &str = "Ongoing";
pub const DEEP_DIVE: &str = "Deep Dive";
pub const ACTION: &str = "Action";
pub const QUEUED: &str = "Queued";
pub const PAUSED: &str = "Paused";
pub const DONE: &str = "Done";
pub const BACKLOG: &str = "Backlog";

/// The status filter value that disables status filtering.
pub const ALL: &str = "All";

/// Rank given to a missing or unrecognized priority label.
pub const UNRANKED: u8 = 4;

/// Map a priority label to its rank. Lower is more urgent.
///
/// `High` → 1, `Medium` → 2, `Low` → 3, anything else → [`UNRANKED`].
#[must_use]
pub fn priority_rank(priority: Option<&str>) -> u8 {
    match priority {
        Some("High") => 1,
        Some("Medium") => 2,
        Some("Low") => 3,
        _ => UNRANKED,
    }
}
