//! Sources of time and identity injected into entity construction.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Supplies the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Supplies fresh identifiers.
pub trait IdGenerator {
    fn next_id(&self) -> Uuid;
}

/// Wall clock backed by [`Utc::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc>,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

impl<F> IdGenerator for F
where
    F: Fn() -> Uuid,
{
    fn next_id(&self) -> Uuid {
        self()
    }
}
