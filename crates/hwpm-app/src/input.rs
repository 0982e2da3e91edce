//! Console input: a reader thread turns lines into events on a channel so
//! the frame loop stays the only code that touches application state.

use std::io::BufRead;
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// One event from the console reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    /// Input closed (or failed). No more events follow.
    Eof,
}

/// Spawn a thread that forwards lines from `reader` until it is exhausted.
pub fn spawn_reader<R>(reader: R) -> Receiver<InputEvent>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in reader.lines() {
            match line {
                Ok(line) => {
                    if tx.send(InputEvent::Line(line)).is_err() {
                        return;
                    }
                },
                Err(e) => {
                    log::warn!("console read failed: {e}");
                    break;
                },
            }
        }
        let _ = tx.send(InputEvent::Eof);
    });
    rx
}
