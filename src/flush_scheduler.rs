//! Debounced flush timing.
//!
//! Decides when buffered draws are written out, without async/await or
//! platform timers. Two deadlines are tracked: a quiet period that is pushed
//! back by every new draw, and a ceiling fixed by the first draw after idle.
//! Whichever comes first triggers the flush.
//!
//! The caller is responsible for waking up at [`FlushScheduler::next_deadline`]
//! and calling [`FlushScheduler::poll`].

use core::cmp::min;

use embassy_time::{Duration, Instant};

/// Default settle time after the most recent draw.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(5);

/// Default upper bound between the first draw and its flush.
pub const DEFAULT_CEILING: Duration = Duration::from_millis(20);

/// Flush timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlushTimings {
    /// Quiet period, re-armed by every draw
    pub quiet: Duration,
    /// Maximum delay, armed once per batch
    pub ceiling: Duration,
}

impl Default for FlushTimings {
    fn default() -> Self {
        Self {
            quiet: DEFAULT_QUIET_PERIOD,
            ceiling: DEFAULT_CEILING,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SchedulerState {
    Idle,
    Pending {
        quiet_deadline: Instant,
        ceiling_deadline: Instant,
    },
}

/// Debounce-with-ceiling state machine.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FlushScheduler::new(FlushTimings::default());
///
/// scheduler.notify_dirty(now);
/// // ...later, at or after scheduler.next_deadline()
/// if scheduler.poll(now) {
///     flush();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FlushScheduler {
    timings: FlushTimings,
    state: SchedulerState,
}

impl FlushScheduler {
    pub const fn new(timings: FlushTimings) -> Self {
        Self {
            timings,
            state: SchedulerState::Idle,
        }
    }

    /// Record that the buffer changed at `now`.
    ///
    /// Re-arms the quiet period. The ceiling is only armed when leaving idle.
    pub fn notify_dirty(&mut self, now: Instant) {
        let quiet_deadline = now + self.timings.quiet;
        self.state = match self.state {
            SchedulerState::Idle => SchedulerState::Pending {
                quiet_deadline,
                ceiling_deadline: now + self.timings.ceiling,
            },
            SchedulerState::Pending {
                ceiling_deadline, ..
            } => SchedulerState::Pending {
                quiet_deadline,
                ceiling_deadline,
            },
        };
    }

    /// Earliest instant at which a flush is due, if one is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.state {
            SchedulerState::Idle => None,
            SchedulerState::Pending {
                quiet_deadline,
                ceiling_deadline,
            } => Some(min(quiet_deadline, ceiling_deadline)),
        }
    }

    /// Check the timers at `now`.
    ///
    /// Returns `true` exactly once per batch, when either deadline has been
    /// reached; the scheduler is then back to idle.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_deadline() {
            Some(deadline) if now >= deadline => {
                self.state = SchedulerState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Disarm both timers.
    pub fn cancel(&mut self) {
        self.state = SchedulerState::Idle;
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, SchedulerState::Pending { .. })
    }

    pub fn timings(&self) -> FlushTimings {
        self.timings
    }
}
