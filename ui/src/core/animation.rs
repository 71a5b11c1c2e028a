//! Scroll animations as explicit state machines.
//!
//! Both animations write the window's scroll offset, so they share one
//! [`AnimationSlot`]: starting an animation takes a fresh token and any
//! animation still holding an older token stops on its next tick.

use std::f64::consts::PI;

/// Back-to-top animation length.
pub const BACK_TO_TOP_DURATION_MS: f64 = 800.0;
/// Back-to-top interval between steps.
pub const BACK_TO_TOP_STEP_MS: u64 = 15;
/// Smooth-scroll animation length.
pub const SMOOTH_SCROLL_DURATION_MS: f64 = 800.0;
/// Fixed header height subtracted from anchor targets.
pub const HEADER_OFFSET_PX: f64 = 80.0;
/// Frame spacing used to sample the smooth scroll.
pub const FRAME_MS: u64 = 16;

/// Ease-in-out quadratic over normalized time.
pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationToken(u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationSlot {
    generation: u64,
}

impl AnimationSlot {
    /// Supersede whatever is running and hand out the new current token.
    pub fn begin(&mut self) -> AnimationToken {
        self.generation += 1;
        AnimationToken(self.generation)
    }

    pub fn is_current(&self, token: AnimationToken) -> bool {
        self.generation == token.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Running,
    Done,
}

/// Output of one animation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    /// Write this offset and keep going.
    Continue(f64),
    /// Write this offset and stop.
    Settle(f64),
    /// Stop without writing.
    Stop,
}

/// Cosine-eased scroll back to offset 0.
///
/// The natural end condition is observing an offset of exactly 0. Scroll
/// rounding (or the user scrolling mid-animation) can keep that from ever
/// happening, and past `π` the cosine climbs again, so the step count is
/// capped at `ceil(duration / step)`; the capped step settles on 0.
#[derive(Debug, Clone, PartialEq)]
pub struct BackToTop {
    start: f64,
    amplitude: f64,
    step_angle: f64,
    step: u32,
    max_steps: u32,
    state: AnimationState,
}

impl BackToTop {
    pub fn new(start: f64) -> Self {
        Self::with_duration(start, BACK_TO_TOP_DURATION_MS)
    }

    pub fn with_duration(start: f64, duration_ms: f64) -> Self {
        let steps = duration_ms / BACK_TO_TOP_STEP_MS as f64;
        Self {
            start,
            amplitude: start / 2.0,
            step_angle: PI / steps,
            step: 0,
            max_steps: steps.ceil().max(1.0) as u32,
            state: AnimationState::Idle,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn steps_taken(&self) -> u32 {
        self.step
    }

    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    /// Offset the formula yields after `step` steps.
    pub fn position_at(&self, step: u32) -> f64 {
        let margin = self.amplitude - self.amplitude * (step as f64 * self.step_angle).cos();
        self.start - margin
    }

    /// Advance one interval given the offset currently observed.
    pub fn tick(&mut self, observed: f64) -> Frame {
        if self.state == AnimationState::Done {
            return Frame::Stop;
        }
        if observed == 0.0 {
            self.state = AnimationState::Done;
            return Frame::Stop;
        }
        self.state = AnimationState::Running;
        self.step += 1;
        if self.step >= self.max_steps {
            self.state = AnimationState::Done;
            return Frame::Settle(0.0);
        }
        Frame::Continue(self.position_at(self.step))
    }
}

/// Quadratic ease-in-out scroll from the current offset to a target.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScroll {
    start: f64,
    distance: f64,
    duration_ms: f64,
    started_at: Option<f64>,
    state: AnimationState,
}

impl SmoothScroll {
    /// Scroll so that an element at `element_top` sits under the fixed header.
    pub fn to_element(current: f64, element_top: f64) -> Self {
        Self::new(current, element_top - HEADER_OFFSET_PX, SMOOTH_SCROLL_DURATION_MS)
    }

    pub fn new(start: f64, target: f64, duration_ms: f64) -> Self {
        Self {
            start,
            distance: target - start,
            duration_ms,
            started_at: None,
            state: AnimationState::Idle,
        }
    }

    pub fn target(&self) -> f64 {
        self.start + self.distance
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        let t = if self.duration_ms <= 0.0 {
            1.0
        } else {
            elapsed_ms / self.duration_ms
        };
        self.start + self.distance * ease_in_out_quad(t)
    }

    /// Sample one frame. The first frame fixes the start time.
    pub fn tick(&mut self, now_ms: f64) -> Frame {
        if self.state == AnimationState::Done {
            return Frame::Stop;
        }
        let started = *self.started_at.get_or_insert(now_ms);
        self.state = AnimationState::Running;
        let elapsed = now_ms - started;
        if elapsed >= self.duration_ms {
            self.state = AnimationState::Done;
            return Frame::Settle(self.target());
        }
        Frame::Continue(self.position_at(elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(0.5), 0.5);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert_eq!(ease_in_out_quad(2.0), 1.0);
        assert!(ease_in_out_quad(0.25) < 0.25);
        assert!(ease_in_out_quad(0.75) > 0.75);
    }

    #[test]
    fn newer_token_supersedes_older() {
        let mut slot = AnimationSlot::default();
        let first = slot.begin();
        assert!(slot.is_current(first));
        let second = slot.begin();
        assert!(!slot.is_current(first));
        assert!(slot.is_current(second));
    }

    /// Runs the animation against a viewport that rounds offsets the way
    /// browsers do, returning the final offset and the number of ticks.
    fn run_back_to_top(start: f64, round: impl Fn(f64) -> f64) -> (f64, u32) {
        let mut anim = BackToTop::new(start);
        let mut offset = start;
        let mut ticks = 0;
        loop {
            ticks += 1;
            assert!(ticks < 1000, "back-to-top failed to terminate");
            match anim.tick(offset) {
                Frame::Continue(y) => offset = round(y),
                Frame::Settle(y) => {
                    offset = round(y);
                    break;
                }
                Frame::Stop => break,
            }
        }
        (offset, ticks)
    }

    #[test]
    fn back_to_top_terminates_at_exact_zero() {
        for start in [1.0, 301.0, 1234.5, 8000.0, 123_456.0] {
            let (offset, ticks) = run_back_to_top(start, f64::round);
            assert_eq!(offset, 0.0, "start {start}");
            assert!(ticks <= 55);
        }
    }

    #[test]
    fn back_to_top_cap_handles_offsets_that_never_land_on_zero() {
        // Fractional offsets never hit 0 exactly: only the cap ends the run.
        let (offset, _) = run_back_to_top(5000.0, |y| y);
        assert_eq!(offset, 0.0);
        let anim = BackToTop::new(5000.0);
        assert!(anim.position_at(anim.max_steps() - 1) > 0.0);
        assert!(anim.position_at(anim.max_steps() + 5) > anim.position_at(anim.max_steps()));
    }

    #[test]
    fn back_to_top_descends_monotonically() {
        let mut anim = BackToTop::new(2000.0);
        let mut last = 2000.0;
        let mut offset = 2000.0;
        while let Frame::Continue(y) = anim.tick(offset) {
            assert!(y <= last);
            last = y;
            offset = y;
        }
        assert_eq!(anim.state(), AnimationState::Done);
        assert_eq!(anim.steps_taken(), anim.max_steps());
    }

    #[test]
    fn back_to_top_stops_immediately_at_origin() {
        let mut anim = BackToTop::new(0.0);
        assert_eq!(anim.tick(0.0), Frame::Stop);
        assert_eq!(anim.tick(10.0), Frame::Stop);
    }

    #[test]
    fn smooth_scroll_lands_on_target_minus_header() {
        let mut anim = SmoothScroll::to_element(0.0, 1080.0);
        assert_eq!(anim.target(), 1000.0);
        assert_eq!(anim.tick(500.0), Frame::Continue(0.0));
        match anim.tick(900.0) {
            Frame::Continue(y) => assert!((y - 500.0).abs() < 1e-9),
            other => panic!("unexpected frame {other:?}"),
        }
        assert_eq!(anim.tick(1300.0), Frame::Settle(1000.0));
        assert_eq!(anim.state(), AnimationState::Done);
        assert_eq!(anim.tick(1316.0), Frame::Stop);
    }

    #[test]
    fn smooth_scroll_moves_upward_too() {
        let mut anim = SmoothScroll::new(900.0, 100.0, 800.0);
        anim.tick(0.0);
        match anim.tick(200.0) {
            Frame::Continue(y) => assert!(y < 900.0 && y > 500.0),
            other => panic!("unexpected frame {other:?}"),
        }
    }
}
