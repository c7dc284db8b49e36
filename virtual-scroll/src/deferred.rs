/// A single deferred value with a due time.
///
/// This models a trailing-edge timer without owning a timer: the host drives time by passing
/// `now_ms`, and nothing fires unless the owner polls. Scheduling again supersedes the
/// previous value, and [`Deferred::cancel`] discards it, so a dropped or cancelled owner can
/// never observe a stale late delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deferred<P> {
    slot: Option<(P, u64)>,
}

impl<P> Default for Deferred<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Deferred<P> {
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Stores `payload` to be released at `due_ms`.
    ///
    /// Returns `true` when an earlier pending value was superseded.
    pub fn schedule(&mut self, payload: P, due_ms: u64) -> bool {
        self.slot.replace((payload, due_ms)).is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }

    pub fn due_ms(&self) -> Option<u64> {
        self.slot.as_ref().map(|(_, due)| *due)
    }

    /// Releases the pending value if it is due at `now_ms`.
    pub fn take_due(&mut self, now_ms: u64) -> Option<P> {
        match self.slot {
            Some((_, due)) if now_ms >= due => self.take(),
            _ => None,
        }
    }

    /// Releases the pending value regardless of its due time.
    pub fn take(&mut self) -> Option<P> {
        self.slot.take().map(|(payload, _)| payload)
    }

    /// Discards the pending value. Returns `true` if there was one.
    pub fn cancel(&mut self) -> bool {
        self.slot.take().is_some()
    }
}
