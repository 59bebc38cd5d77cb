use chrono::{DateTime, Duration, Utc};

/// Leading-edge rate limiter: the first call passes, later ones are dropped
/// until `limit` has elapsed since the last accepted call.
#[derive(Clone, Debug)]
pub struct Throttle {
    limit: Duration,
    last: Option<DateTime<Utc>>,
}

impl Throttle {
    pub fn new(limit_ms: u32) -> Self {
        Self {
            limit: Duration::milliseconds(i64::from(limit_ms)),
            last: None,
        }
    }

    pub fn ready(&mut self, now: DateTime<Utc>) -> bool {
        match self.last {
            Some(last) if now - last < self.limit => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    pub fn ready_now(&mut self) -> bool {
        self.ready(Utc::now())
    }
}

/// Optional [`Throttle`]: with no limit configured every call is admitted.
#[derive(Clone, Debug, Default)]
pub struct Gate {
    throttle: Option<Throttle>,
}

impl Gate {
    pub fn new(limit_ms: Option<u32>) -> Self {
        Self {
            throttle: limit_ms.map(Throttle::new),
        }
    }

    pub fn admit(&mut self, now: DateTime<Utc>) -> bool {
        match self.throttle.as_mut() {
            Some(throttle) => throttle.ready(now),
            None => true,
        }
    }

    pub fn admit_now(&mut self) -> bool {
        self.admit(Utc::now())
    }
}
