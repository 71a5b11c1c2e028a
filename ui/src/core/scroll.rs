//! Scroll listener helpers: the offset throttle and the back-to-top threshold.

/// Minimum spacing between admitted scroll events (~60 per second).
pub const SCROLL_THROTTLE_MS: f64 = 16.0;

/// Offset beyond which the back-to-top control is shown.
pub const BACK_TO_TOP_AFTER_PX: f64 = 300.0;

pub fn back_to_top_visible(offset: f64) -> bool {
    offset > BACK_TO_TOP_AFTER_PX
}

/// What the listener should do with one offered scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offer {
    /// Store the offset now.
    Apply(f64),
    /// Held back; call [`ScrollThrottle::flush`] after this many ms.
    ScheduleFlush(u64),
    /// Held back; an already scheduled flush will deliver it.
    Held,
}

/// Fixed-interval throttle with a trailing flush: at most one offset is
/// applied per `interval_ms`, and the newest held-back offset is always
/// delivered once the interval has passed, so the stored offset never stays
/// stale after scrolling stops.
///
/// Invariant: whenever an offset is pending, a flush is scheduled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollThrottle {
    interval_ms: f64,
    last_applied: Option<f64>,
    pending: Option<f64>,
    flush_scheduled: bool,
}

impl ScrollThrottle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_applied: None,
            pending: None,
            flush_scheduled: false,
        }
    }

    pub fn offer(&mut self, now_ms: f64, offset: f64) -> Offer {
        match self.last_applied {
            Some(last) if now_ms - last < self.interval_ms => {
                self.pending = Some(offset);
                if self.flush_scheduled {
                    Offer::Held
                } else {
                    self.flush_scheduled = true;
                    Offer::ScheduleFlush((last + self.interval_ms - now_ms).ceil() as u64)
                }
            }
            _ => {
                self.last_applied = Some(now_ms);
                self.pending = None;
                Offer::Apply(offset)
            }
        }
    }

    /// The scheduled flush fired: hand back the newest held offset, if any.
    pub fn flush(&mut self, now_ms: f64) -> Option<f64> {
        self.flush_scheduled = false;
        let offset = self.pending.take()?;
        self.last_applied = Some(now_ms);
        Some(offset)
    }
}

impl Default for ScrollThrottle {
    fn default() -> Self {
        Self::new(SCROLL_THROTTLE_MS)
    }
}
