//! Bounded spin polling.
//!
//! The chip signals completion through interrupt bits that the driver can
//! only observe by re-reading a register. Every wait in the crate is an
//! iteration budget, never wall-clock time, and there is no way to cancel a
//! loop once it started.

use crate::Result;

/// How a bounded poll ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The awaited signal was observed.
    Completed,
    /// The budget ran out before the signal was observed.
    Exhausted,
}

impl Completion {
    /// True for `Completed`.
    pub fn is_completed(&self) -> bool {
        *self == Self::Completed
    }
}

/// Call `ready` up to `budget` times, stopping at the first `true`.
///
/// A budget of zero never calls `ready` and reports `Exhausted`.
pub fn spin_until<F>(budget: u32, mut ready: F) -> Result<Completion>
where
    F: FnMut() -> Result<bool>,
{
    for _ in 0..budget {
        if ready()? {
            return Ok(Completion::Completed);
        }
    }
    Ok(Completion::Exhausted)
}
