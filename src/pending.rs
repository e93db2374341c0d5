//! Pending draw buffer.
//!
//! Coalesces draw requests by control id: staging a color overwrites any
//! earlier color for the same control. Built on `critical-section` and
//! `heapless::FnvIndexMap`, so staging and draining are safe across
//! threads and interrupts.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::FnvIndexMap;

use crate::color::Rgb;
use crate::error::FeedbackError;

/// Maximum number of distinct controls a buffer can hold.
///
/// Every supported model defines fewer controls than this.
pub const MAX_PENDING: usize = 64;

/// Snapshot returned by [`PendingBuffer::drain_all`].
pub type PendingSnapshot = FnvIndexMap<&'static str, Rgb, MAX_PENDING>;

/// Last-write-wins map from control id to requested color.
pub struct PendingBuffer {
    inner: Mutex<RefCell<PendingSnapshot>>,
}

impl PendingBuffer {
    /// Create a new empty buffer.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(FnvIndexMap::new())),
        }
    }

    /// Stage a color for a control, replacing any earlier one.
    ///
    /// Fails only when the buffer already holds [`MAX_PENDING`] other controls.
    pub fn stage(&self, id: &'static str, color: Rgb) -> Result<(), FeedbackError> {
        critical_section::with(|cs| {
            let mut pending = self.inner.borrow(cs).borrow_mut();
            pending
                .insert(id, color)
                .map(|_| ())
                .map_err(|_| FeedbackError::BufferFull { id })
        })
    }

    /// Take every staged entry and leave the buffer empty.
    ///
    /// A concurrent `stage` lands either in the returned snapshot or in the
    /// buffer for the next drain, never both.
    pub fn drain_all(&self) -> PendingSnapshot {
        critical_section::with(|cs| {
            let mut pending = self.inner.borrow(cs).borrow_mut();
            core::mem::replace(&mut *pending, FnvIndexMap::new())
        })
    }

    /// Drop every staged entry without returning it.
    pub fn clear(&self) {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().clear());
    }

    pub fn is_empty(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().is_empty())
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }
}

impl Default for PendingBuffer {
    fn default() -> Self {
        Self::new()
    }
}
