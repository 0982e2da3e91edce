//! Mutable application state shared by the frame loop.

use hwpm_content::chrome;
use hwpm_core::Orchestrator;
use hwpm_core::config::HwpmConfig;
use hwpm_terminal::{CommandRegistry, Environment, register_builtins};
use hwpm_ui::Theme;

use crate::commands;

/// All mutable state for the running program.
pub struct AppState {
    pub config: HwpmConfig,
    pub theme: Theme,
    pub orchestrator: Orchestrator,
    pub cmd_reg: CommandRegistry,
    /// Console scrollback, oldest first.
    pub output_lines: Vec<String>,
    /// Set by `quit` or by the end of input.
    pub quit: bool,
}

impl AppState {
    /// Build the state and schedule the boot. Nothing runs until the first tick.
    pub fn new(config: HwpmConfig) -> Self {
        let mut orchestrator = Orchestrator::new(config.timing);
        orchestrator.initialize();

        let mut cmd_reg = CommandRegistry::new();
        register_builtins(&mut cmd_reg);

        Self {
            config,
            theme: Theme::console(),
            orchestrator,
            cmd_reg,
            output_lines: vec![format!(
                "{} {} -- type 'help' for commands",
                chrome::BRAND,
                chrome::VERSION
            )],
            quit: false,
        }
    }

    /// Run one console line through the registry and apply what it returns.
    pub fn submit(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        self.output_lines.push(format!("{}{line}", crate::render::PROMPT));
        let result = {
            let mut env = Environment {
                session: self.orchestrator.session(),
                clock_ms: self.orchestrator.now_ms(),
            };
            self.cmd_reg.execute(line, &mut env)
        };
        commands::process_command_output(result, self);
    }
}
