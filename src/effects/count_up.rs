use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::config::COUNT_UP_DURATION_MS;
use crate::content::Stat;
use crate::error::{Result, SiteError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Running,
    Finished,
    Cancelled,
}

/// One rendered step of a count-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub value: u64,
    /// No further frames will be produced after this one.
    pub done: bool,
}

/// Time-based interpolation from 0 to `target`.
///
/// Frame timestamps come from the caller, so the run itself is pure and the
/// browser driver below only has to feed it `requestAnimationFrame` times.
#[derive(Debug, Clone)]
pub struct AnimationRun {
    target: u64,
    start: f64,
    duration: f64,
    progress: f64,
    state: RunState,
}

impl AnimationRun {
    pub fn new(target: u64, start: f64) -> Self {
        Self::with_duration(target, start, COUNT_UP_DURATION_MS)
    }

    pub fn with_duration(target: u64, start: f64, duration: f64) -> Self {
        AnimationRun {
            target,
            start,
            duration,
            progress: 0.0,
            state: RunState::Running,
        }
    }

    /// Advances the run to `now`. Returns `None` once the run has finished or
    /// been cancelled.
    pub fn tick(&mut self, now: f64) -> Option<Frame> {
        if self.state != RunState::Running {
            return None;
        }

        let raw = if self.duration > 0.0 {
            (now - self.start) / self.duration
        } else {
            1.0
        };
        // Progress never moves backwards, even if a timestamp does.
        self.progress = self.progress.max(raw.clamp(0.0, 1.0));

        let value = if self.progress >= 1.0 {
            self.target
        } else {
            ((self.target as f64 * self.progress).floor() as u64).min(self.target)
        };

        let done = value >= self.target;
        if done {
            self.state = RunState::Finished;
        }
        Some(Frame { value, done })
    }

    pub fn cancel(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Cancelled;
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Drives an [`AnimationRun`] with `requestAnimationFrame` and hands every
/// frame's text to `render`.
///
/// The animator owns its pending frame. Dropping it (or calling
/// [`CountUpAnimator::cancel`]) cancels that frame, so nothing renders into
/// an unmounted card.
pub struct CountUpAnimator {
    window: Window,
    run: Rc<RefCell<AnimationRun>>,
    frame_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<FrameCallback>>>,
}

impl CountUpAnimator {
    pub fn run<F>(stat: &Stat, render: F) -> Result<Self>
    where
        F: Fn(String) + 'static,
    {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        let start = window.performance().ok_or(SiteError::NoPerformance)?.now();

        let run = Rc::new(RefCell::new(AnimationRun::new(stat.value, start)));
        let frame_id = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let render: Rc<dyn Fn(String)> = Rc::new(render);

        // The callback reschedules itself through a weak slot so the
        // animator stays the only owner of the closure.
        let slot: Weak<RefCell<Option<FrameCallback>>> = Rc::downgrade(&tick);
        let callback = Closure::<dyn FnMut(f64)>::new({
            let run = run.clone();
            let frame_id = frame_id.clone();
            let window = window.clone();
            let stat = stat.clone();
            let render = render.clone();
            move |now: f64| {
                frame_id.set(None);
                if !advance(&run, &stat, render.as_ref(), now) {
                    return;
                }
                if let Some(slot) = slot.upgrade() {
                    if let Some(callback) = slot.borrow().as_ref() {
                        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                            Ok(id) => frame_id.set(Some(id)),
                            Err(e) => warn!("Count-up for {} stopped: {:?}", stat.label, e),
                        }
                    }
                }
            }
        });
        *tick.borrow_mut() = Some(callback);

        let animator = CountUpAnimator {
            window,
            run,
            frame_id,
            tick,
        };

        debug!("Counting {} up to {}", stat.label, stat.value);
        if advance(&animator.run, stat, render.as_ref(), start) {
            animator.request_frame()?;
        }
        Ok(animator)
    }

    fn request_frame(&self) -> Result<()> {
        if let Some(callback) = self.tick.borrow().as_ref() {
            let id = self
                .window
                .request_animation_frame(callback.as_ref().unchecked_ref())?;
            self.frame_id.set(Some(id));
        }
        Ok(())
    }

    /// Stops the animation. Calling this on a finished or already cancelled
    /// animator does nothing.
    pub fn cancel(&self) {
        {
            let mut run = self.run.borrow_mut();
            if run.is_running() {
                debug!("Count-up cancelled at {:.0}%", run.progress() * 100.0);
            }
            run.cancel();
        }
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

impl Drop for CountUpAnimator {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Renders one frame; returns whether another frame is needed.
fn advance(run: &RefCell<AnimationRun>, stat: &Stat, render: &dyn Fn(String), now: f64) -> bool {
    let frame = run.borrow_mut().tick(now);
    match frame {
        Some(frame) => {
            render(stat.render(frame.value));
            !frame.done
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const FRAME_MS: f64 = 16.0;

    /// Feeds frames every 16 ms from `start` until the run stops producing them.
    fn drive(run: &mut AnimationRun, start: f64) -> Vec<(f64, Frame)> {
        let mut frames = Vec::new();
        let mut now = start;
        while let Some(frame) = run.tick(now) {
            frames.push((now, frame));
            now += FRAME_MS;
        }
        frames
    }

    fn plus(value: u64) -> Stat {
        Stat {
            value,
            prefix: None,
            suffix: Some("+".to_string()),
            label: "Happy Customers".to_string(),
        }
    }

    #[test]
    fn fifteen_plus_scenario() {
        let stat = plus(15);
        let mut run = AnimationRun::new(stat.value, 0.0);
        let frames = drive(&mut run, 0.0);

        let texts: Vec<String> = frames.iter().map(|(_, f)| stat.render(f.value)).collect();
        assert_eq!(texts.first().map(String::as_str), Some("0+"));
        assert_eq!(texts.last().map(String::as_str), Some("15+"));

        let (last_at, last) = frames.last().copied().unwrap();
        assert!(last.done);
        assert!(last_at >= COUNT_UP_DURATION_MS);
        // Every earlier frame was still in progress.
        assert!(frames[..frames.len() - 1].iter().all(|(t, f)| !f.done && *t < COUNT_UP_DURATION_MS));

        // Distinct rendered values strictly increase.
        let mut distinct: Vec<u64> = frames.iter().map(|(_, f)| f.value).collect();
        distinct.dedup();
        assert!(distinct.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(run.tick(5_000.0), None);
        assert!(!run.is_running());
    }

    #[test]
    fn zero_target_finishes_on_first_frame() {
        let mut run = AnimationRun::new(0, 250.0);
        assert_eq!(run.tick(250.0), Some(Frame { value: 0, done: true }));
        assert_eq!(run.tick(300.0), None);
    }

    #[test]
    fn late_first_frame_jumps_to_target() {
        let mut run = AnimationRun::new(30, 0.0);
        assert_eq!(run.tick(4_000.0), Some(Frame { value: 30, done: true }));
    }

    #[test]
    fn interpolates_with_floor() {
        let mut run = AnimationRun::new(30, 0.0);
        // 30 * 0.5 = 15
        assert_eq!(run.tick(550.0).unwrap().value, 15);
        // 30 * (1000 / 1100) = 27.27..
        assert_eq!(run.tick(1_000.0).unwrap().value, 27);
    }

    #[test]
    fn backwards_timestamp_does_not_reduce_progress() {
        let mut run = AnimationRun::new(100, 1_000.0);
        assert_eq!(run.tick(1_550.0).unwrap().value, 50);
        assert_eq!(run.tick(1_200.0).unwrap().value, 50);
        assert!((run.progress() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn timestamp_before_start_clamps_to_zero() {
        let mut run = AnimationRun::new(10, 1_000.0);
        assert_eq!(run.tick(990.0), Some(Frame { value: 0, done: false }));
    }

    #[test]
    fn cancel_is_idempotent_and_stops_frames() {
        let mut run = AnimationRun::new(10, 0.0);
        run.tick(100.0);
        run.cancel();
        run.cancel();
        assert!(!run.is_running());
        assert_eq!(run.tick(2_000.0), None);
    }

    #[test]
    fn cancelling_finished_run_is_noop() {
        let mut run = AnimationRun::new(3, 0.0);
        drive(&mut run, 0.0);
        run.cancel();
        assert_eq!(run.tick(9_999.0), None);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let mut run = AnimationRun::with_duration(8, 0.0, 0.0);
        assert_eq!(run.tick(0.0), Some(Frame { value: 8, done: true }));
    }

    proptest! {
        #[test]
        fn values_never_decrease_and_end_on_target(target in 0u64..5_000_000, start in 0.0f64..1e7) {
            let mut run = AnimationRun::new(target, start);
            let frames = drive(&mut run, start);
            prop_assert!(!frames.is_empty());
            prop_assert!(frames.windows(2).all(|w| w[0].1.value <= w[1].1.value));
            prop_assert!(frames.iter().all(|(_, f)| f.value <= target));
            prop_assert_eq!(frames.last().unwrap().1, Frame { value: target, done: true });
        }

        #[test]
        fn jittery_clock_stays_monotonic(target in 1u64..10_000, steps in proptest::collection::vec(-40.0f64..60.0, 1..200)) {
            let mut run = AnimationRun::new(target, 0.0);
            let mut now = 0.0;
            let mut last = 0;
            for step in steps {
                now += step;
                match run.tick(now) {
                    Some(frame) => {
                        prop_assert!(frame.value >= last);
                        prop_assert!(frame.value <= target);
                        last = frame.value;
                    }
                    None => break,
                }
            }
        }
    }
}
