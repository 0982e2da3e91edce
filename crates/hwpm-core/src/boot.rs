//! Boot sequencer: the timed startup countdown.
//!
//! The sequencer walks `Running(0) ..= Running(N)` one step per
//! `step_ms`, waits `finish_ms` at `Running(N)`, then becomes `Complete`
//! and notifies its [`BootObserver`] once. At most one timer is pending at a
//! time; every re-run of [`BootSequencer::start`] cancels the previous one
//! before scheduling the next.

use hwpm_types::config::TimingConfig;

use crate::scheduler::{Scheduler, TimerId};

/// Cadence of the boot countdown, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootTiming {
    pub step_ms: u64,
    pub finish_ms: u64,
}

impl Default for BootTiming {
    fn default() -> Self {
        Self {
            step_ms: 800,
            finish_ms: 1000,
        }
    }
}

impl From<&TimingConfig> for BootTiming {
    fn from(t: &TimingConfig) -> Self {
        Self {
            step_ms: t.boot_step_ms,
            finish_ms: t.boot_finish_ms,
        }
    }
}

/// Timer payload the sequencer schedules for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootTimer {
    Advance,
    Finish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootState {
    Running(usize),
    Complete,
}

/// How a boot message should be shown at the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStatus {
    Hidden,
    Done,
    Current,
}

/// Outcome of feeding a timer to the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootEvent {
    Ignored,
    Advanced(usize),
    Completed,
}

/// Receives boot progress notifications.
pub trait BootObserver {
    /// Called exactly once, when the sequence completes.
    fn on_boot_complete(&mut self);

    /// Called after each step advance.
    fn on_boot_step(&mut self, _step: usize) {}
}

/// The linear, time-driven startup state machine.
#[derive(Debug)]
pub struct BootSequencer {
    messages: &'static [&'static str],
    timing: BootTiming,
    state: BootState,
    pending: Option<TimerId>,
    torn_down: bool,
}

impl BootSequencer {
    pub fn new(messages: &'static [&'static str], timing: BootTiming) -> Self {
        Self {
            messages,
            timing,
            state: BootState::Running(0),
            pending: None,
            torn_down: false,
        }
    }

    /// Run the scheduling effect for the current state.
    pub fn start<E: From<BootTimer>>(&mut self, sched: &mut Scheduler<E>) {
        if self.torn_down {
            return;
        }
        if let Some(prev) = self.pending.take() {
            sched.cancel(prev);
        }
        let BootState::Running(step) = self.state else {
            return;
        };
        let (delay, timer) = if step < self.total() {
            (self.timing.step_ms, BootTimer::Advance)
        } else {
            (self.timing.finish_ms, BootTimer::Finish)
        };
        self.pending = Some(sched.schedule(delay, E::from(timer)));
    }

    /// Handle a fired boot timer.
    pub fn on_timer<E: From<BootTimer>>(
        &mut self,
        id: TimerId,
        timer: BootTimer,
        sched: &mut Scheduler<E>,
        observer: &mut dyn BootObserver,
    ) -> BootEvent {
        if self.torn_down || self.pending != Some(id) {
            return BootEvent::Ignored;
        }
        let BootState::Running(step) = self.state else {
            return BootEvent::Ignored;
        };
        self.pending = None;
        match timer {
            BootTimer::Advance if step < self.total() => {
                let next = step + 1;
                self.state = BootState::Running(next);
                log::debug!("boot step {next}/{}", self.total());
                observer.on_boot_step(next);
                self.start(sched);
                BootEvent::Advanced(next)
            },
            BootTimer::Finish if step == self.total() => {
                self.state = BootState::Complete;
                log::info!("boot sequence complete");
                observer.on_boot_complete();
                BootEvent::Completed
            },
            _ => {
                // Payload does not match the state; re-arm the right timer.
                self.start(sched);
                BootEvent::Ignored
            },
        }
    }

    /// Cancel the pending timer. No further advances or completion.
    pub fn teardown<E>(&mut self, sched: &mut Scheduler<E>) {
        if let Some(prev) = self.pending.take() {
            sched.cancel(prev);
        }
        self.torn_down = true;
    }

    pub fn state(&self) -> BootState {
        self.state
    }

    /// Current step; `total()` once complete.
    pub fn step(&self) -> usize {
        match self.state {
            BootState::Running(step) => step,
            BootState::Complete => self.total(),
        }
    }

    pub fn total(&self) -> usize {
        self.messages.len()
    }

    pub fn is_complete(&self) -> bool {
        self.state == BootState::Complete
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn pending(&self) -> Option<TimerId> {
        self.pending
    }

    pub fn messages(&self) -> &'static [&'static str] {
        self.messages
    }

    /// Fraction of steps done, `step / N`.
    pub fn progress(&self) -> f32 {
        if self.total() == 0 {
            return 1.0;
        }
        self.step() as f32 / self.total() as f32
    }

    pub fn line_status(&self, index: usize) -> LineStatus {
        let step = self.step();
        if index > step {
            LineStatus::Hidden
        } else if index == step {
            LineStatus::Current
        } else {
            LineStatus::Done
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSAGES: &[&str] = &["one", "two", "three"];

    #[derive(Default)]
    struct Counter {
        completions: usize,
        steps: Vec<usize>,
    }

    impl BootObserver for Counter {
        fn on_boot_complete(&mut self) {
            self.completions += 1;
        }

        fn on_boot_step(&mut self, step: usize) {
            self.steps.push(step);
        }
    }

    /// Fire everything due up to `until`, feeding it to the sequencer.
    fn run_until(
        boot: &mut BootSequencer,
        sched: &mut Scheduler<BootTimer>,
        obs: &mut Counter,
        until: u64,
    ) -> Vec<BootEvent> {
        let mut events = Vec::new();
        while let Some((id, timer)) = sched.pop_due(until) {
            events.push(boot.on_timer(id, timer, sched, obs));
        }
        sched.advance_to(until);
        events
    }

    fn started() -> (BootSequencer, Scheduler<BootTimer>, Counter) {
        let mut sched = Scheduler::new();
        let mut boot = BootSequencer::new(MESSAGES, BootTiming::default());
        boot.start(&mut sched);
        (boot, sched, Counter::default())
    }

    #[test]
    fn new_is_idle_at_zero() {
        let boot = BootSequencer::new(MESSAGES, BootTiming::default());
        assert_eq!(boot.state(), BootState::Running(0));
        assert_eq!(boot.pending(), None);
        assert_eq!(boot.total(), 3);
    }

    #[test]
    fn n_intervals_reach_step_n_then_complete() {
        let (mut boot, mut sched, mut obs) = started();
        let events = run_until(&mut boot, &mut sched, &mut obs, 3 * 800);
        assert_eq!(
            events,
            vec![
                BootEvent::Advanced(1),
                BootEvent::Advanced(2),
                BootEvent::Advanced(3)
            ]
        );
        assert_eq!(boot.state(), BootState::Running(3));
        assert_eq!(obs.completions, 0);

        run_until(&mut boot, &mut sched, &mut obs, 3 * 800 + 999);
        assert_eq!(obs.completions, 0);

        let events = run_until(&mut boot, &mut sched, &mut obs, 3 * 800 + 1000);
        assert_eq!(events, vec![BootEvent::Completed]);
        assert!(boot.is_complete());
        assert_eq!(obs.completions, 1);
        assert_eq!(obs.steps, vec![1, 2, 3]);
        assert_eq!(boot.pending(), None);
        assert_eq!(sched.pending_count(), 0);
    }

    #[test]
    fn completes_only_once() {
        let (mut boot, mut sched, mut obs) = started();
        run_until(&mut boot, &mut sched, &mut obs, 100_000);
        // Re-running the effect once complete schedules nothing.
        boot.start(&mut sched);
        run_until(&mut boot, &mut sched, &mut obs, 200_000);
        assert_eq!(obs.completions, 1);
        assert_eq!(sched.pending_count(), 0);
    }

    #[test]
    fn start_twice_keeps_one_timer() {
        let (mut boot, mut sched, mut obs) = started();
        let first = boot.pending();
        boot.start(&mut sched);
        assert_eq!(sched.pending_count(), 1);
        assert_ne!(boot.pending(), first);
        let events = run_until(&mut boot, &mut sched, &mut obs, 800);
        assert_eq!(events, vec![BootEvent::Advanced(1)]);
    }

    #[test]
    fn stale_timer_is_ignored() {
        let (mut boot, mut sched, mut obs) = started();
        let stale = sched.schedule(0, BootTimer::Advance);
        let (id, timer) = sched.pop_due(0).unwrap();
        assert_eq!(id, stale);
        assert_eq!(
            boot.on_timer(id, timer, &mut sched, &mut obs),
            BootEvent::Ignored
        );
        assert_eq!(boot.step(), 0);
    }

    #[test]
    fn teardown_stops_everything() {
        let (mut boot, mut sched, mut obs) = started();
        run_until(&mut boot, &mut sched, &mut obs, 800);
        boot.teardown(&mut sched);
        assert!(boot.is_torn_down());
        assert_eq!(sched.pending_count(), 0);
        boot.start(&mut sched);
        assert_eq!(sched.pending_count(), 0);
        run_until(&mut boot, &mut sched, &mut obs, 100_000);
        assert_eq!(boot.step(), 1);
        assert_eq!(obs.completions, 0);
    }

    #[test]
    fn progress_and_line_status() {
        let (mut boot, mut sched, mut obs) = started();
        assert_eq!(boot.progress(), 0.0);
        assert_eq!(boot.line_status(0), LineStatus::Current);
        assert_eq!(boot.line_status(1), LineStatus::Hidden);
        run_until(&mut boot, &mut sched, &mut obs, 1600);
        assert_eq!(boot.line_status(0), LineStatus::Done);
        assert_eq!(boot.line_status(2), LineStatus::Current);
        assert!((boot.progress() - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn custom_timing() {
        let timing = BootTiming::from(&TimingConfig {
            boot_step_ms: 10,
            boot_finish_ms: 5,
            execute_delay_ms: 0,
        });
        let mut sched = Scheduler::new();
        let mut boot = BootSequencer::new(MESSAGES, timing);
        let mut obs = Counter::default();
        boot.start(&mut sched);
        run_until(&mut boot, &mut sched, &mut obs, 34);
        assert_eq!(obs.completions, 0);
        run_until(&mut boot, &mut sched, &mut obs, 35);
        assert_eq!(obs.completions, 1);
    }

    #[test]
    fn empty_script_finishes_after_finish_delay() {
        let mut sched = Scheduler::new();
        let mut boot = BootSequencer::new(&[], BootTiming::default());
        let mut obs = Counter::default();
        boot.start(&mut sched);
        assert_eq!(boot.progress(), 1.0);
        run_until(&mut boot, &mut sched, &mut obs, 1000);
        assert_eq!(obs.completions, 1);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn teardown_before_n_never_completes(k in 0usize..3, extra in 0u64..800) {
                let (mut boot, mut sched, mut obs) = started();
                run_until(&mut boot, &mut sched, &mut obs, k as u64 * 800 + extra);
                prop_assert_eq!(boot.step(), k);
                boot.teardown(&mut sched);
                run_until(&mut boot, &mut sched, &mut obs, 1_000_000);
                prop_assert_eq!(boot.step(), k);
                prop_assert_eq!(obs.completions, 0);
            }

            #[test]
            fn step_never_decreases(checkpoints in prop::collection::vec(0u64..6_000, 1..20)) {
                let (mut boot, mut sched, mut obs) = started();
                let mut sorted = checkpoints;
                sorted.sort_unstable();
                let mut last = 0;
                for t in sorted {
                    run_until(&mut boot, &mut sched, &mut obs, t);
                    prop_assert!(boot.step() >= last);
                    prop_assert!(sched.pending_count() <= 1);
                    last = boot.step();
                }
                prop_assert!(obs.completions <= 1);
            }
        }
    }
}
