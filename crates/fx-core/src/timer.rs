//! Virtual-time timer queue.
//!
//! Hosts drive [`TimerQueue::advance`] from their frame callback with a
//! monotonic timestamp; tests drive it with synthetic time. Nothing here
//! reads a wall clock, which is what makes the flicker machinery testable
//! without sleeping.

use fnv::FnvHashMap;
use smallvec::SmallVec;

/// Minimum repeating period; degenerate requests are clamped up to this so a
/// zero or negative period cannot spin the queue forever.
pub const MIN_PERIOD_MS: f64 = 1.0;

/// Opaque handle identifying a scheduled timer. Cancellation is final: a
/// cancelled handle never appears in a later `advance`, even if its due time
/// has already passed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TimerHandle(u64);

#[derive(Clone, Copy, Debug)]
enum Repeat {
    Once,
    Every(f64),
}

#[derive(Clone, Copy, Debug)]
struct TimerEntry {
    due_ms: f64,
    repeat: Repeat,
}

/// Handles that became due during one `advance` call.
pub type Fired = SmallVec<[TimerHandle; 4]>;

#[derive(Default)]
pub struct TimerQueue {
    next_id: u64,
    entries: FnvHashMap<u64, TimerEntry>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_once(&mut self, now_ms: f64, delay_ms: f64) -> TimerHandle {
        self.insert(now_ms + delay_ms.max(0.0), Repeat::Once)
    }

    pub fn schedule_repeating(&mut self, now_ms: f64, period_ms: f64) -> TimerHandle {
        let period = period_ms.max(MIN_PERIOD_MS);
        self.insert(now_ms + period, Repeat::Every(period))
    }

    pub fn cancel(&mut self, handle: TimerHandle) {
        self.entries.remove(&handle.0);
    }

    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Collect every timer due at or before `now_ms`, in due-time order
    /// (ties broken by scheduling order). Repeating timers are re-armed one
    /// period at a time, so a queue that fell several periods behind reports
    /// one fire per elapsed period.
    pub fn advance(&mut self, now_ms: f64) -> Fired {
        let mut fired: Fired = SmallVec::new();
        loop {
            let next = self
                .entries
                .iter()
                .filter(|(_, e)| e.due_ms <= now_ms)
                .min_by(|(ia, ea), (ib, eb)| {
                    ea.due_ms.total_cmp(&eb.due_ms).then(ia.cmp(ib))
                })
                .map(|(id, e)| (*id, *e));
            let Some((id, entry)) = next else { break };
            match entry.repeat {
                Repeat::Once => {
                    self.entries.remove(&id);
                }
                Repeat::Every(period) => {
                    if let Some(e) = self.entries.get_mut(&id) {
                        e.due_ms = entry.due_ms + period;
                    }
                }
            }
            fired.push(TimerHandle(id));
        }
        fired
    }

    fn insert(&mut self, due_ms: f64, repeat: Repeat) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(id, TimerEntry { due_ms, repeat });
        TimerHandle(id)
    }
}
