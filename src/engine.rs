use embassy_time::Instant;
use heapless::Vec;
use log::{debug, trace, warn};

use crate::SurfaceTransport;
use crate::color::{BLACK, Rgb};
use crate::dispatcher::{Dispatcher, WriteContext};
use crate::error::FeedbackError;
use crate::flush_scheduler::{FlushScheduler, FlushTimings};
use crate::input::{HostEvent, SurfaceEvent, translate_event};
use crate::model::SurfaceModel;
use crate::pattern::{encode_bar, encode_progress, parse_fill};
use crate::pending::{MAX_PENDING, PendingBuffer};
use crate::quantize::{ControlState, QUANTIZE_THRESHOLD, quantize_with_threshold};

/// Configuration for the feedback engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Flush debounce timings
    pub timings: FlushTimings,
    /// Channel level at which a color bit lights
    pub threshold: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timings: FlushTimings::default(),
            threshold: QUANTIZE_THRESHOLD,
        }
    }
}

/// Feedback engine for one connected surface
///
/// Draw requests are coalesced in a pending buffer and written in batches;
/// variable and lock updates are encoded and written immediately.
/// Construct one per surface at connect time and [`close`](Self::close) it
/// on disconnect.
pub struct FeedbackEngine<T: SurfaceTransport> {
    model: SurfaceModel,
    threshold: u8,

    pending: PendingBuffer,
    scheduler: FlushScheduler,

    dispatcher: Dispatcher<T>,
}

impl<T: SurfaceTransport> FeedbackEngine<T> {
    pub fn new(model: SurfaceModel, transport: T, config: &EngineConfig) -> Self {
        Self {
            model,
            threshold: config.threshold,
            pending: PendingBuffer::new(),
            scheduler: FlushScheduler::new(config.timings),
            dispatcher: Dispatcher::new(transport, model),
        }
    }

    /// Bring the surface to a known state
    pub fn init(&mut self) {
        self.blank();
    }

    pub fn model(&self) -> SurfaceModel {
        self.model
    }

    /// Request a control to show `color`
    ///
    /// `None` is drawn as black. Controls the model does not have, or that
    /// cannot be drawn, are skipped.
    pub fn request_draw(&mut self, control_id: &str, color: Option<Rgb>, now: Instant) {
        match self.stage_draw(control_id, color.unwrap_or(BLACK)) {
            Ok(()) => self.scheduler.notify_dirty(now),
            Err(FeedbackError::UnknownControl) => {
                trace!("draw for unknown control {} skipped", control_id);
            }
            Err(err) => debug!("draw skipped: {}", err),
        }
    }

    fn stage_draw(&self, control_id: &str, color: Rgb) -> Result<(), FeedbackError> {
        let control = self
            .model
            .find(control_id)
            .ok_or(FeedbackError::UnknownControl)?;
        if !control.is_drawable() {
            return Err(FeedbackError::NotDrawable { id: control.id });
        }
        self.pending.stage(control.id, color)
    }

    /// Advance the flush timers to `now`
    ///
    /// Flushes if a deadline has passed and returns the next deadline, if any.
    /// The caller should call this again at that instant.
    pub fn tick(&mut self, now: Instant) -> Option<Instant> {
        if self.scheduler.poll(now) {
            self.flush();
        }
        self.scheduler.next_deadline()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Write all pending draws now
    pub fn flush(&mut self) {
        self.scheduler.cancel();

        let pending = self.pending.drain_all();
        if pending.is_empty() {
            return;
        }

        let mut batch: Vec<ControlState, MAX_PENDING> = Vec::new();
        for (id, color) in &pending {
            let Some(control) = self.model.find(id) else {
                continue;
            };
            let value = quantize_with_threshold(Some(*color), control.feedback, self.threshold);
            // Cannot fail: the snapshot has the same capacity
            let _ = batch.push(ControlState::new(control.id, value));
        }

        self.dispatcher.dispatch_states(
            WriteContext::Flush {
                entries: batch.len(),
            },
            &batch,
        );
    }

    /// Handle a numeric variable update from the host
    ///
    /// Only output variables bound to a bar are handled. A value that is not
    /// a number leaves the bar unchanged.
    pub fn set_numeric_variable(&mut self, name: &str, value: &str) {
        match self.apply_variable(name, value) {
            Ok(()) => {}
            Err(FeedbackError::UnknownVariable) => warn!("unknown variable: {}", name),
            Err(err) => debug!("variable {} ignored: {}", name, err),
        }
    }

    fn apply_variable(&mut self, name: &str, value: &str) -> Result<(), FeedbackError> {
        let bar = self
            .model
            .output_bar(name)
            .ok_or(FeedbackError::UnknownVariable)?;
        let segments = bar
            .led_segments()
            .ok_or(FeedbackError::NotDrawable { id: bar.id })?;
        let fill = parse_fill(value)?;

        let leds = encode_bar(fill, segments);
        self.dispatcher.dispatch_bar(bar.id, &leds);
        Ok(())
    }

    /// Show lock code entry progress
    ///
    /// Lights the first `character_count` progress controls while locked.
    /// Does nothing when unlocked or on models without a progress list.
    pub fn notify_lock_status(&mut self, locked: bool, character_count: i32) {
        if !locked {
            return;
        }
        let Some(ids) = self.model.progress_indicator() else {
            return;
        };

        let count = usize::try_from(character_count).unwrap_or(0);
        let states = encode_progress(count, ids, self.model);
        self.dispatcher
            .dispatch_states(WriteContext::Progress { count }, &states);
    }

    /// Handle an event from the transport
    pub fn handle_input<'a>(&self, event: SurfaceEvent<'a>) -> Option<HostEvent<'a>> {
        translate_event(event)
    }

    /// Turn every light off
    ///
    /// Pending draws are kept and still flushed.
    pub fn blank(&mut self) {
        self.dispatcher.clear_panel();
    }

    /// Tear the engine down
    ///
    /// Cancels both flush timers and drops pending draws without writing
    /// them, clears the panel and returns the transport for closing.
    pub fn close(mut self) -> T {
        self.scheduler.cancel();
        self.pending.clear();
        self.dispatcher.clear_panel();
        self.dispatcher.into_transport()
    }

    /// Buffered draws not yet flushed
    pub fn pending(&self) -> &PendingBuffer {
        &self.pending
    }

    pub fn transport(&self) -> &T {
        self.dispatcher.transport()
    }

    pub fn transport_mut(&mut self) -> &mut T {
        self.dispatcher.transport_mut()
    }
}
