//! Built-in console commands.

use hwpm_content::chrome::BOOT_MESSAGES;
use hwpm_content::{ThemeKey, catalog, files};
use hwpm_core::UserAction;
use hwpm_core::view::clock_stamp;
use hwpm_types::error::{HwpmError, Result};

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Register every built-in command and its aliases.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(ExecuteCmd));
    reg.register(Box::new(ModeCmd));
    reg.register(Box::new(SelectCmd));
    reg.register(Box::new(AbortCmd));
    reg.register(Box::new(ThemesCmd));
    reg.register(Box::new(FilesCmd));
    reg.register(Box::new(LogsCmd));
    reg.register(Box::new(StatusCmd));
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(QuitCmd));

    reg.set_alias("run", "execute");
    reg.set_alias("exec", "execute");
    reg.set_alias("close", "abort");
    reg.set_alias("exit", "quit");
}

/// Panel actions only make sense once the main panel is up.
fn require_booted(env: &Environment<'_>, name: &str) -> Result<()> {
    if env.session.is_booted() {
        Ok(())
    } else {
        log::warn!("rejected '{name}' during boot");
        Err(HwpmError::Command(format!(
            "{name}: system is still booting"
        )))
    }
}

// ---------------------------------------------------------------------------
// Panel actions
// ---------------------------------------------------------------------------

struct ExecuteCmd;

impl Command for ExecuteCmd {
    fn name(&self) -> &str {
        "execute"
    }
    fn description(&self) -> &str {
        "Press the execute button"
    }
    fn usage(&self) -> &str {
        "execute"
    }
    fn category(&self) -> &str {
        "panel"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        require_booted(env, self.name())?;
        Ok(CommandOutput::Action(UserAction::Execute))
    }
}

struct ModeCmd;

impl Command for ModeCmd {
    fn name(&self) -> &str {
        "mode"
    }
    fn description(&self) -> &str {
        "Open the language selector"
    }
    fn usage(&self) -> &str {
        "mode"
    }
    fn category(&self) -> &str {
        "panel"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        require_booted(env, self.name())?;
        Ok(CommandOutput::Action(UserAction::OpenSelector))
    }
}

/// Works with the selector open or closed.
struct SelectCmd;

impl Command for SelectCmd {
    fn name(&self) -> &str {
        "select"
    }
    fn description(&self) -> &str {
        "Switch to a language mode"
    }
    fn usage(&self) -> &str {
        "select <STANDARD|CORPORATE|CPP|ASM|CHAOS>"
    }
    fn category(&self) -> &str {
        "panel"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let Some(raw) = args.first() else {
            return Err(HwpmError::Command(format!("usage: {}", self.usage())));
        };
        let key: ThemeKey = raw.parse()?;
        require_booted(env, self.name())?;
        Ok(CommandOutput::Action(UserAction::SelectTheme(key)))
    }
}

struct AbortCmd;

impl Command for AbortCmd {
    fn name(&self) -> &str {
        "abort"
    }
    fn description(&self) -> &str {
        "Close the language selector"
    }
    fn usage(&self) -> &str {
        "abort"
    }
    fn category(&self) -> &str {
        "panel"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        require_booted(env, self.name())?;
        Ok(CommandOutput::Action(UserAction::CloseSelector))
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

struct ThemesCmd;

impl Command for ThemesCmd {
    fn name(&self) -> &str {
        "themes"
    }
    fn description(&self) -> &str {
        "List language modes and their risk"
    }
    fn usage(&self) -> &str {
        "themes"
    }
    fn category(&self) -> &str {
        "info"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let active = env.session.active_theme();
        let rows = catalog()
            .iter()
            .map(|o| {
                vec![
                    o.key.to_string(),
                    o.label.to_string(),
                    o.risk.to_string(),
                    if o.key == active { "*" } else { "" }.to_string(),
                ]
            })
            .collect();
        Ok(CommandOutput::Table {
            headers: vec![
                "KEY".to_string(),
                "LABEL".to_string(),
                "RISK".to_string(),
                "ACTIVE".to_string(),
            ],
            rows,
        })
    }
}

struct FilesCmd;

impl Command for FilesCmd {
    fn name(&self) -> &str {
        "files"
    }
    fn description(&self) -> &str {
        "Print the file explorer of the active mode"
    }
    fn usage(&self) -> &str {
        "files"
    }
    fn category(&self) -> &str {
        "info"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let entries = files(env.session.active_theme());
        let mut out = String::new();
        for e in entries {
            let indent = "  ".repeat(e.depth as usize);
            let suffix = if e.is_folder() { "/" } else { "" };
            out.push_str(&format!("{indent}{}{suffix}\n", e.name));
        }
        out.push_str(&format!("{} OBJECTS  RO", entries.len()));
        Ok(CommandOutput::Text(out))
    }
}

struct LogsCmd;

impl Command for LogsCmd {
    fn name(&self) -> &str {
        "logs"
    }
    fn description(&self) -> &str {
        "Print the session log"
    }
    fn usage(&self) -> &str {
        "logs"
    }
    fn category(&self) -> &str {
        "info"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let history = env.session.log_history();
        if history.is_empty() {
            return Ok(CommandOutput::Text("(no log entries)".to_string()));
        }
        Ok(CommandOutput::Text(history.lines().join("\n")))
    }
}

struct StatusCmd;

impl Command for StatusCmd {
    fn name(&self) -> &str {
        "status"
    }
    fn description(&self) -> &str {
        "Show session state"
    }
    fn usage(&self) -> &str {
        "status"
    }
    fn category(&self) -> &str {
        "info"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let s = env.session;
        let boot = if s.is_booted() {
            "READY".to_string()
        } else {
            format!("{}/{}", s.boot_step(), BOOT_MESSAGES.len())
        };
        let selector = if s.is_selector_open() { "open" } else { "closed" };
        Ok(CommandOutput::Text(format!(
            "{} MODE: {}  BOOT: {boot}  SELECTOR: {selector}  LOGS: {}",
            clock_stamp(env.clock_ms),
            s.active_theme(),
            s.log_history().len()
        )))
    }
}

// ---------------------------------------------------------------------------
// Console
// ---------------------------------------------------------------------------

struct ClearCmd;

impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear console output"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn category(&self) -> &str {
        "console"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}

struct QuitCmd;

impl Command for QuitCmd {
    fn name(&self) -> &str {
        "quit"
    }
    fn description(&self) -> &str {
        "Leave HWPM"
    }
    fn usage(&self) -> &str {
        "quit"
    }
    fn category(&self) -> &str {
        "console"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hwpm_core::Orchestrator;
    use hwpm_types::config::TimingConfig;

    fn booted() -> Orchestrator {
        let mut o = Orchestrator::new(TimingConfig::default());
        o.initialize();
        o.advance(10_000);
        o
    }

    fn registry() -> CommandRegistry {
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg);
        reg
    }

    fn run(reg: &CommandRegistry, o: &Orchestrator, line: &str) -> Result<CommandOutput> {
        let mut env = Environment {
            session: o.session(),
            clock_ms: o.now_ms(),
        };
        reg.execute(line, &mut env)
    }

    fn text(out: Result<CommandOutput>) -> String {
        match out {
            Ok(CommandOutput::Text(s)) => s,
            other => panic!("expected text output, got {other:?}"),
        }
    }

    #[test]
    fn actions_and_aliases() {
        let reg = registry();
        let o = booted();
        let exec = CommandOutput::Action(UserAction::Execute);
        assert_eq!(run(&reg, &o, "execute").unwrap(), exec);
        assert_eq!(run(&reg, &o, "run").unwrap(), exec);
        assert_eq!(run(&reg, &o, "EXEC").unwrap(), exec);
        assert_eq!(
            run(&reg, &o, "mode").unwrap(),
            CommandOutput::Action(UserAction::OpenSelector)
        );
        assert_eq!(
            run(&reg, &o, "close").unwrap(),
            CommandOutput::Action(UserAction::CloseSelector)
        );
        assert_eq!(run(&reg, &o, "exit").unwrap(), CommandOutput::Quit);
        assert_eq!(run(&reg, &o, "clear").unwrap(), CommandOutput::Clear);
    }

    #[test]
    fn select_parses_key() {
        let reg = registry();
        let o = booted();
        assert_eq!(
            run(&reg, &o, "select corporate").unwrap(),
            CommandOutput::Action(UserAction::SelectTheme(ThemeKey::Corporate))
        );
        let err = run(&reg, &o, "select klingon").unwrap_err();
        assert!(matches!(err, HwpmError::UnknownTheme(_)));
        assert!(run(&reg, &o, "select").is_err());
    }

    #[test]
    fn actions_rejected_while_booting() {
        let reg = registry();
        let mut o = Orchestrator::new(TimingConfig::default());
        o.initialize();
        o.advance(800);
        for line in ["execute", "mode", "select asm", "abort"] {
            let err = run(&reg, &o, line).unwrap_err();
            assert!(err.to_string().contains("still booting"), "{line}");
        }
        // Queries still work.
        assert!(text(run(&reg, &o, "status")).contains("BOOT: 1/8"));
    }

    #[test]
    fn themes_table_marks_active() {
        let reg = registry();
        let mut o = booted();
        o.select_theme(ThemeKey::Asm);
        match run(&reg, &o, "themes").unwrap() {
            CommandOutput::Table { headers, rows } => {
                assert_eq!(headers[0], "KEY");
                assert_eq!(rows.len(), 5);
                let active: Vec<_> = rows.iter().filter(|r| r[3] == "*").collect();
                assert_eq!(active.len(), 1);
                assert_eq!(active[0][0], "ASM");
                assert_eq!(active[0][2], "Brain Damage");
            },
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn files_follow_active_theme() {
        let reg = registry();
        let mut o = booted();
        o.select_theme(ThemeKey::Corporate);
        let out = text(run(&reg, &o, "files"));
        assert!(out.starts_with("Deliverables/\n  Q4_FY2024/"));
        assert!(out.ends_with("6 OBJECTS  RO"));
    }

    #[test]
    fn logs_and_status() {
        let reg = registry();
        let mut o = booted();
        assert_eq!(text(run(&reg, &o, "logs")), "(no log entries)");
        o.execute();
        o.advance(600);
        let logs = text(run(&reg, &o, "logs"));
        assert_eq!(logs.lines().count(), 2);
        let status = text(run(&reg, &o, "status"));
        assert!(status.contains("MODE: STANDARD"));
        assert!(status.contains("BOOT: READY"));
        assert!(status.contains("SELECTOR: closed"));
        assert!(status.contains("LOGS: 2"));
    }

    #[test]
    fn help_covers_builtins() {
        let reg = registry();
        let o = booted();
        let help = text(run(&reg, &o, "help"));
        for name in ["execute", "mode", "select", "abort", "themes", "quit"] {
            assert!(help.contains(name), "{name} missing from help");
        }
        assert!(text(run(&reg, &o, "help run")).starts_with("execute (panel)"));
    }
}
