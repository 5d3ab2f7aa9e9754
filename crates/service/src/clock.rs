//! Timestamps for created/modified columns.
//!
//! PostgreSQL keeps microseconds, so every stamp is truncated to that
//! precision before it is stored; otherwise the value read back would differ
//! from the one returned at creation.

use chrono::{SubsecRound, TimeDelta, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;

pub fn now() -> DateTimeWithTimeZone {
    Utc::now().trunc_subsecs(6).fixed_offset()
}

/// A modification stamp strictly later than `previous`.
pub fn next_modification(previous: DateTimeWithTimeZone) -> DateTimeWithTimeZone {
    let now = now();
    if now > previous { now } else { previous + TimeDelta::microseconds(1) }
}
