//! Tick scheduling
//!
//! Portable re-arming of the animation tick without async/await or
//! platform-specific timers. Each tick runs to completion and reports when
//! the next one is due; the host is responsible for sleeping until then and
//! calling back in. Mirrors a deferred-executor callback that reschedules
//! itself with a fixed interval.

use embassy_time::{Duration, Instant};

use crate::StatusLedDriver;
use crate::engine::StatusLedEngine;

/// Result of a tick operation.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Self-re-arming tick driver
///
/// Tracks the next deadline with drift correction: if the host stalls past
/// two tick intervals, the backlog is skipped instead of replayed in a
/// burst.
pub struct TickScheduler<D: StatusLedDriver> {
    driver: D,
    next_tick: Instant,
}

impl<D: StatusLedDriver> TickScheduler<D> {
    pub const fn new(driver: D) -> Self {
        Self {
            driver,
            next_tick: Instant::from_millis(0),
        }
    }

    /// Run one animation tick and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, engine: &mut StatusLedEngine, now: Instant) -> TickResult {
        let interval = engine.tick(&mut self.driver);

        // Drift correction: reset rather than catch up after a long stall
        let max_drift_ms = interval.as_millis() * 2;
        if now.as_millis() > self.next_tick.as_millis() + max_drift_ms {
            self.next_tick = now;
        }

        self.next_tick += interval;

        let sleep_duration = if self.next_tick.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_tick.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
        }
    }

    /// Get a mutable reference to the driver.
    pub const fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}
