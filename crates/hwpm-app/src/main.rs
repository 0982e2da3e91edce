//! HelloWorld Pro Max terminal entry point.
//!
//! Boots the fake enterprise console, then shows the control panel drawn as
//! a text grid on stdout. Commands are typed on stdin (`help` lists them);
//! end of input quits.

mod app_state;
mod commands;
mod input;
mod render;

use std::path::Path;
use std::sync::mpsc::TryRecvError;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use app_state::AppState;
use hwpm_backend_text::TextBackend;
use hwpm_core::backend::SdiBackend;
use hwpm_core::config::HwpmConfig;
use input::InputEvent;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Resolve config from CLI arg or HWPM_CONFIG env var, else defaults.
    let config = match std::env::args()
        .nth(1)
        .or_else(|| std::env::var("HWPM_CONFIG").ok())
    {
        Some(path) => HwpmConfig::load(Path::new(&path))
            .with_context(|| format!("loading config from {path}"))?,
        None => {
            let config = HwpmConfig::default();
            config.validate()?;
            config
        },
    };
    log::info!(
        "Starting HWPM ({}x{}, {} console rows)",
        config.screen_width,
        config.screen_height,
        config.console_lines,
    );

    let mut backend = TextBackend::from_config(std::io::stdout(), &config)?;
    backend.init(config.screen_width, config.screen_height)?;

    let frame = Duration::from_millis(config.frame_ms);
    let mut state = AppState::new(config);
    let input = input::spawn_reader(std::io::BufReader::new(std::io::stdin()));
    let start = Instant::now();

    'running: loop {
        loop {
            match input.try_recv() {
                Ok(InputEvent::Line(line)) => state.submit(&line),
                Ok(InputEvent::Eof) | Err(TryRecvError::Disconnected) => {
                    log::info!("console input closed");
                    state.quit = true;
                    break;
                },
                Err(TryRecvError::Empty) => break,
            }
        }

        let now_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        state.orchestrator.tick(now_ms);

        render::draw_frame(&state, &mut backend)?;
        backend.swap_buffers()?;

        if state.quit {
            break 'running;
        }
        std::thread::sleep(frame);
    }

    state.orchestrator.teardown();
    backend.shutdown()?;
    log::info!("HWPM shut down cleanly");
    Ok(())
}
