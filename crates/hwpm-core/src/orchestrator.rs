//! View orchestrator: owns the session and the clock, applies user actions,
//! and derives the current [`Screen`].
//!
//! All state changes go through `&mut self` here, from user actions or from
//! deferred tasks popped off the scheduler during [`Orchestrator::tick`].
//! There is no other writer.

use hwpm_content::chrome::{self, BOOT_MESSAGES};
use hwpm_content::{Resolved, ThemeKey};
use hwpm_types::config::TimingConfig;

use crate::boot::{BootEvent, BootObserver, BootSequencer, BootTimer, BootTiming};
use crate::scheduler::{Scheduler, TimerId};
use crate::session::SessionState;
use crate::view::{BootLine, BootView, MainView, Screen, SelectorView};

/// Discrete inputs from whatever surface drives the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Execute,
    OpenSelector,
    CloseSelector,
    SelectTheme(ThemeKey),
}

/// Tasks the orchestrator defers onto its scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    Mount,
    Boot(BootTimer),
    KernelLog(String),
}

impl From<BootTimer> for Deferred {
    fn from(t: BootTimer) -> Self {
        Deferred::Boot(t)
    }
}

pub struct Orchestrator {
    timing: TimingConfig,
    scheduler: Scheduler<Deferred>,
    session: SessionState,
    boot: Option<BootSequencer>,
    mount_timer: Option<TimerId>,
    initialized: bool,
    mounted: bool,
}

impl Orchestrator {
    pub fn new(timing: TimingConfig) -> Self {
        Self {
            timing,
            scheduler: Scheduler::new(),
            session: SessionState::new(),
            boot: None,
            mount_timer: None,
            initialized: false,
            mounted: false,
        }
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Schedule the mount for the next tick. Later calls do nothing.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.mount_timer = Some(self.scheduler.schedule(0, Deferred::Mount));
    }

    fn mount(&mut self) {
        self.mount_timer = None;
        self.mounted = true;
        let mut boot = BootSequencer::new(BOOT_MESSAGES, BootTiming::from(&self.timing));
        boot.start(&mut self.scheduler);
        self.boot = Some(boot);
        log::debug!("mounted; boot sequence started");
    }

    /// Mark the system booted and drop the boot sequencer. Reached only from
    /// the sequencer's `Finish` timer.
    fn on_boot_complete(&mut self) {
        if let Some(mut boot) = self.boot.take() {
            boot.teardown(&mut self.scheduler);
        }
        if !self.session.is_booted {
            self.session.on_boot_complete();
        }
    }

    /// Stop the boot sequence and any unfired mount. Pending kernel log
    /// lines from `execute` still arrive.
    pub fn teardown(&mut self) {
        if let Some(boot) = self.boot.as_mut() {
            boot.teardown(&mut self.scheduler);
        }
        if let Some(id) = self.mount_timer.take() {
            self.scheduler.cancel(id);
        }
    }

    // -----------------------------------------------------------------------
    // User operations
    // -----------------------------------------------------------------------

    /// Log the execution now and the kernel status after the configured
    /// delay. The status is the one of the theme active at call time.
    pub fn execute(&mut self) {
        let content = self.resolved().content;
        self.session
            .log_history
            .push(chrome::user_log(content.execute_label));
        let line = chrome::kernel_log(content.status);
        self.scheduler
            .schedule(self.timing.execute_delay_ms, Deferred::KernelLog(line));
    }

    pub fn open_selector(&mut self) {
        self.session.is_selector_open = true;
    }

    pub fn close_selector(&mut self) {
        self.session.is_selector_open = false;
    }

    pub fn select_theme(&mut self, key: ThemeKey) {
        self.session.log_history.push(chrome::switch_log(key));
        self.session.active_theme = key;
        self.session.is_selector_open = false;
        log::info!("theme switched to {key}");
    }

    pub fn apply(&mut self, action: UserAction) {
        match action {
            UserAction::Execute => self.execute(),
            UserAction::OpenSelector => self.open_selector(),
            UserAction::CloseSelector => self.close_selector(),
            UserAction::SelectTheme(key) => self.select_theme(key),
        }
    }

    // -----------------------------------------------------------------------
    // Clock
    // -----------------------------------------------------------------------

    /// Fire every deferred task due at or before `now_ms`, in order.
    pub fn tick(&mut self, now_ms: u64) {
        while let Some((id, task)) = self.scheduler.pop_due(now_ms) {
            match task {
                Deferred::Mount => self.mount(),
                Deferred::Boot(timer) => self.fire_boot(id, timer),
                Deferred::KernelLog(line) => self.session.log_history.push(line),
            }
        }
        self.scheduler.advance_to(now_ms);
    }

    /// Move the clock forward by `dt_ms`.
    pub fn advance(&mut self, dt_ms: u64) {
        self.tick(self.now_ms().saturating_add(dt_ms));
    }

    fn fire_boot(&mut self, id: TimerId, timer: BootTimer) {
        let Some(boot) = self.boot.as_mut() else {
            return;
        };
        let event = boot.on_timer(id, timer, &mut self.scheduler, &mut self.session);
        if event == BootEvent::Completed {
            self.on_boot_complete();
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn boot(&self) -> Option<&BootSequencer> {
        self.boot.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn now_ms(&self) -> u64 {
        self.scheduler.now()
    }

    pub fn resolved(&self) -> Resolved {
        hwpm_content::resolve(self.session.active_theme)
    }

    pub fn screen(&self) -> Screen<'_> {
        if !self.mounted {
            return Screen::Blank;
        }
        if !self.session.is_booted {
            return match &self.boot {
                Some(boot) => Screen::Boot(BootView {
                    title: chrome::BOOT_TITLE,
                    lines: boot
                        .messages()
                        .iter()
                        .enumerate()
                        .map(|(i, &text)| BootLine {
                            text,
                            status: boot.line_status(i),
                        })
                        .collect(),
                    progress: boot.progress(),
                    footer: chrome::BOOT_FOOTER,
                    clock_ms: self.now_ms(),
                }),
                None => Screen::Blank,
            };
        }
        let r = self.resolved();
        Screen::Main(MainView {
            key: r.key,
            content: r.content,
            files: r.files,
            logs: self.session.log_history.lines(),
            selector: self
                .session
                .is_selector_open
                .then(|| SelectorView::for_active(r.key)),
        })
    }
}
