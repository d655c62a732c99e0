//! Time source port

use chrono::{DateTime, Utc};

/// Source of "now" for usage and addition timestamps
pub trait Clock: Send {
    fn now(&self) -> DateTime<Utc>;
}
