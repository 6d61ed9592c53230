// Utility functions
use crate::config::ReplyDelayConfig;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::time::Duration;

/// Picks a typing delay uniformly within the configured bounds.
pub fn typing_delay(bounds: ReplyDelayConfig) -> Duration {
    if bounds.min >= bounds.max {
        return Duration::from_millis(bounds.min);
    }
    let millis = rand::rng().random_range(bounds.min..=bounds.max);
    Duration::from_millis(millis)
}

pub fn format_clock(at: &DateTime<Utc>) -> String {
    at.format("%H:%M:%S").to_string()
}
