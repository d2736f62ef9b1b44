//! Hook-context cell
//!
//! Hosts with C-ABI callback hooks cannot thread `&mut` state through
//! their entry points. This cell parks the keyboard in a critical-section
//! mutex so the init, key-event and tick callbacks all reach the same
//! instance. Synchronization is via critical sections, making it suitable
//! for interrupt-driven hosts as well as cooperative loops.

use core::cell::RefCell;

use critical_section::Mutex;

/// A shared slot for the one long-lived context value
pub struct SharedCell<T> {
    inner: Mutex<RefCell<Option<T>>>,
}

impl<T> SharedCell<T> {
    /// Create an empty cell
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Park a value in the cell, replacing any previous occupant
    pub fn put(&self, value: T) {
        critical_section::with(|cs| {
            *self.inner.borrow(cs).borrow_mut() = Some(value);
        });
    }

    /// Run a closure against the parked value
    ///
    /// Returns `None` while the cell is still empty (before init).
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().as_mut().map(f))
    }
}

impl<T> Default for SharedCell<T> {
    fn default() -> Self {
        Self::new()
    }
}
