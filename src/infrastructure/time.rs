use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

/// Wall-clock time; visibility is evaluated against this on every request.
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
