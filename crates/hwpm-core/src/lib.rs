//! hwpm-core: Runtime for the HWPM boot screen and control panel.
//!
//! Everything time-driven runs on a virtual millisecond clock
//! ([`scheduler::Scheduler`]). The [`orchestrator::Orchestrator`] owns the
//! clock and the session state and is the only thing that mutates them;
//! callers feed it [`orchestrator::UserAction`]s and `tick` it, then draw
//! the derived [`view::Screen`] with [`render::draw_screen`].

pub mod boot;
pub mod orchestrator;
pub mod render;
pub mod scheduler;
pub mod session;
pub mod view;

// Re-export foundation modules so dependents can reach them through core.
pub use hwpm_types::backend;
pub use hwpm_types::config;
pub use hwpm_types::error;

pub use boot::{BootEvent, BootObserver, BootSequencer, BootState, BootTimer, BootTiming};
pub use orchestrator::{Orchestrator, UserAction};
pub use scheduler::{Scheduler, TimerId};
pub use session::{LogHistory, SessionState};
pub use view::Screen;
