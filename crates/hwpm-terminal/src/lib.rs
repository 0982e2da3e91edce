//! Command interpreter for the HWPM console.
//!
//! The console is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name. The interpreter parses input
//! lines, resolves the command name, and dispatches `execute()`. Commands
//! never touch the orchestrator: anything that changes the panel comes back
//! as [`CommandOutput::Action`] for the caller to apply.

mod commands;
mod interpreter;

/// Register every built-in console command into a registry.
pub use commands::register_builtins;
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (text, table, signals).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Read-only view of the session passed to every command.
pub use interpreter::Environment;
/// Split a line into tokens, honoring quotes and backslash escapes.
pub use interpreter::tokenize;
