//! Command trait, registry, and dispatch logic.
//!
//! Supports quoted arguments, aliases, and command history (`!!`, `!n`).

use std::cell::RefCell;
use std::collections::HashMap;

use hwpm_core::UserAction;
use hwpm_core::session::SessionState;
use hwpm_types::error::{HwpmError, Result};

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// Plain text lines.
    Text(String),
    /// Tabular data (header row + data rows).
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Command produced no visible output.
    None,
    /// Signal to clear the console output buffer.
    Clear,
    /// Signal to apply a user action to the orchestrator.
    Action(UserAction),
    /// Signal to leave the program.
    Quit,
}

/// Environment passed to every command.
pub struct Environment<'a> {
    /// Current session state (read-only).
    pub session: &'a SessionState,
    /// Session clock in milliseconds.
    pub clock_ms: u64,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "select <KEY>").
    fn usage(&self) -> &str;

    /// Command category for grouping in `help` output.
    fn category(&self) -> &str {
        "general"
    }

    /// Execute the command with the given arguments and environment.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput>;
}

/// Maximum number of history entries to retain.
const MAX_HISTORY: usize = 100;

/// Registry of available commands with dispatch.
///
/// Also holds the console's persistent state: aliases and history.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
    aliases: RefCell<HashMap<String, String>>,
    history: RefCell<Vec<String>>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            aliases: RefCell::new(HashMap::new()),
            history: RefCell::new(Vec::new()),
        }
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands
            .insert(cmd.name().to_ascii_lowercase(), cmd);
    }

    /// Number of registered commands (intercepted built-ins excluded).
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    // -- Alias API --

    /// Set a command alias. `name` is matched case-insensitively.
    pub fn set_alias(&self, name: &str, expansion: &str) {
        self.aliases
            .borrow_mut()
            .insert(name.to_ascii_lowercase(), expansion.to_string());
    }

    /// Get all aliases.
    pub fn aliases(&self) -> HashMap<String, String> {
        self.aliases.borrow().clone()
    }

    // -- History API --

    /// Get command history.
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }

    /// Push a command to history.
    fn push_history(&self, line: &str) {
        let mut hist = self.history.borrow_mut();
        // Don't duplicate the last entry.
        if hist.last().is_none_or(|last| last != line) {
            hist.push(line.to_string());
            if hist.len() > MAX_HISTORY {
                hist.remove(0);
            }
        }
    }

    /// Parse and execute a command line.
    ///
    /// Command names are case-insensitive.
    pub fn execute(&self, line: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(CommandOutput::None);
        }

        // History expansion: !! and !n
        let line = self.expand_history(trimmed)?;

        // Push to history (after history expansion, before execution).
        self.push_history(&line);

        // Tokenize with quote handling.
        let tokens = tokenize(&line)?;
        if tokens.is_empty() {
            return Ok(CommandOutput::None);
        }

        // Expand aliases (first token only).
        let tokens = self.expand_alias(tokens);
        if tokens.is_empty() {
            return Ok(CommandOutput::None);
        }

        let name_lower = tokens[0].to_ascii_lowercase();
        let args: Vec<&str> = tokens[1..].iter().map(|s| s.as_str()).collect();
        log::debug!("dispatch {name_lower} {args:?}");

        // Intercept built-in commands that need registry access.
        match name_lower.as_str() {
            "help" => return self.execute_help(&args),
            "history" => return self.execute_history_cmd(&args),
            _ => {},
        }

        match self.commands.get(name_lower.as_str()) {
            Some(cmd) => cmd.execute(&args, env),
            None => Err(HwpmError::Command(format!(
                "unknown command: {}",
                tokens[0]
            ))),
        }
    }

    // -- History expansion --

    fn expand_history(&self, input: &str) -> Result<String> {
        if input == "!!" {
            let hist = self.history.borrow();
            return hist
                .last()
                .cloned()
                .ok_or_else(|| HwpmError::Command("!!: no previous command".to_string()));
        }
        if let Some(n_str) = input.strip_prefix('!')
            && let Ok(n) = n_str.parse::<usize>()
        {
            let hist = self.history.borrow();
            if n == 0 || n > hist.len() {
                return Err(HwpmError::Command(format!("!{n}: event not found")));
            }
            return Ok(hist[n - 1].clone());
        }
        Ok(input.to_string())
    }

    // -- Alias expansion --

    fn expand_alias(&self, mut tokens: Vec<String>) -> Vec<String> {
        if tokens.is_empty() {
            return tokens;
        }
        let aliases = self.aliases.borrow();
        if let Some(expansion) = aliases.get(&tokens[0].to_ascii_lowercase()) {
            // Replace the first token with the alias expansion.
            let expanded_tokens = match tokenize(expansion) {
                Ok(t) => t,
                Err(_) => return tokens,
            };
            tokens.splice(0..1, expanded_tokens);
        }
        tokens
    }

    // -- Intercepted commands --

    fn execute_help(&self, args: &[&str]) -> Result<CommandOutput> {
        if let Some(&name) = args.first() {
            let name_lower = name.to_ascii_lowercase();
            let resolved = self
                .aliases
                .borrow()
                .get(&name_lower)
                .and_then(|exp| exp.split_whitespace().next().map(str::to_string))
                .unwrap_or(name_lower);
            match self.commands.get(resolved.as_str()) {
                Some(cmd) => {
                    let mut out = cmd.name().to_string();
                    out.push_str(&format!(" ({})\n", cmd.category()));
                    out.push_str(&format!("  {}\n", cmd.description()));
                    out.push_str(&format!("  Usage: {}", cmd.usage()));
                    Ok(CommandOutput::Text(out))
                },
                None => Err(HwpmError::Command(format!("unknown command: {name}"))),
            }
        } else {
            // Group commands by category.
            let mut categories: HashMap<&str, Vec<(&str, &str)>> = HashMap::new();
            for builtin in &[
                ("help", "Show commands or usage of one"),
                ("history", "Show command history"),
            ] {
                categories
                    .entry("console")
                    .or_default()
                    .push((builtin.0, builtin.1));
            }
            for cmd in self.commands.values() {
                categories
                    .entry(cmd.category())
                    .or_default()
                    .push((cmd.name(), cmd.description()));
            }

            let mut cats: Vec<&str> = categories.keys().copied().collect();
            cats.sort();

            let total: usize = categories.values().map(|v| v.len()).sum();
            let mut out = format!("Commands ({total}):\n");
            for cat in &cats {
                out.push_str(&format!("[{cat}]\n"));
                let mut cmds = categories[cat].clone();
                cmds.sort();
                for (name, desc) in cmds {
                    out.push_str(&format!("  {name:<10} {desc}\n"));
                }
            }
            Ok(CommandOutput::Text(out.trim_end().to_string()))
        }
    }

    fn execute_history_cmd(&self, args: &[&str]) -> Result<CommandOutput> {
        if args.first() == Some(&"clear") {
            self.history.borrow_mut().clear();
            return Ok(CommandOutput::Text("History cleared.".to_string()));
        }
        let hist = self.history.borrow();
        if hist.is_empty() {
            return Ok(CommandOutput::Text("(no history)".to_string()));
        }
        let mut out = String::new();
        for (i, entry) in hist.iter().enumerate() {
            out.push_str(&format!("  {:4}  {entry}\n", i + 1));
        }
        Ok(CommandOutput::Text(out.trim_end().to_string()))
    }
}

/// Split a command line into tokens.
///
/// Whitespace separates tokens. Single quotes are literal; double quotes
/// allow `\"` and `\\` escapes; a bare backslash escapes the next char.
pub fn tokenize(input: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();
    let mut in_single = false;
    let mut in_double = false;
    // Distinguishes `""` (an empty token) from no token at all.
    let mut quoted = false;

    while let Some(ch) = chars.next() {
        if in_single {
            if ch == '\'' {
                in_single = false;
            } else {
                current.push(ch);
            }
        } else if in_double {
            match ch {
                '"' => in_double = false,
                '\\' => match chars.peek() {
                    Some(&next @ ('"' | '\\')) => {
                        current.push(next);
                        chars.next();
                    },
                    _ => current.push('\\'),
                },
                _ => current.push(ch),
            }
        } else {
            match ch {
                '\'' => {
                    in_single = true;
                    quoted = true;
                },
                '"' => {
                    in_double = true;
                    quoted = true;
                },
                '\\' => {
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                },
                c if c.is_whitespace() => {
                    if !current.is_empty() || quoted {
                        tokens.push(std::mem::take(&mut current));
                    }
                    quoted = false;
                },
                _ => current.push(ch),
            }
        }
    }

    if in_single {
        return Err(HwpmError::Command("unterminated single quote".to_string()));
    }
    if in_double {
        return Err(HwpmError::Command("unterminated double quote".to_string()));
    }

    if !current.is_empty() || quoted {
        tokens.push(current);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoCmd;
    impl Command for EchoCmd {
        fn name(&self) -> &str {
            "echo"
        }
        fn description(&self) -> &str {
            "Print arguments"
        }
        fn usage(&self) -> &str {
            "echo [text...]"
        }
        fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
            Ok(CommandOutput::Text(args.join(" ")))
        }
    }

    fn registry() -> CommandRegistry {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        reg
    }

    fn run(reg: &CommandRegistry, line: &str) -> Result<CommandOutput> {
        let session = SessionState::new();
        let mut env = Environment {
            session: &session,
            clock_ms: 0,
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
    fn register_and_execute() {
        assert_eq!(text(run(&registry(), "echo hello world")), "hello world");
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(text(run(&registry(), "ECHO hi")), "hi");
    }

    #[test]
    fn empty_line_is_none() {
        assert_eq!(run(&registry(), "   ").unwrap(), CommandOutput::None);
    }

    #[test]
    fn unknown_command() {
        let err = run(&registry(), "nonexistent").unwrap_err();
        assert!(err.to_string().contains("unknown command: nonexistent"));
    }

    #[test]
    fn alias_expands_first_token() {
        let reg = registry();
        reg.set_alias("say", "echo >>");
        assert_eq!(text(run(&reg, "SAY hi")), ">> hi");
        assert_eq!(reg.aliases().get("say").map(String::as_str), Some("echo >>"));
    }

    #[test]
    fn bang_bang_repeats_last() {
        let reg = registry();
        run(&reg, "echo once").unwrap();
        assert_eq!(text(run(&reg, "!!")), "once");
        // Expansion is stored, not the `!!` itself; duplicates collapse.
        assert_eq!(reg.history(), vec!["echo once"]);
    }

    #[test]
    fn bang_n_and_errors() {
        let reg = registry();
        assert!(run(&reg, "!!").is_err());
        run(&reg, "echo a").unwrap();
        run(&reg, "echo b").unwrap();
        assert_eq!(text(run(&reg, "!1")), "a");
        assert!(run(&reg, "!9").is_err());
        assert!(run(&reg, "!0").is_err());
    }

    #[test]
    fn history_listing_and_clear() {
        let reg = registry();
        run(&reg, "echo a").unwrap();
        let listing = text(run(&reg, "history"));
        assert!(listing.contains("1  echo a"));
        assert!(listing.contains("2  history"));
        assert_eq!(text(run(&reg, "history clear")), "History cleared.");
    }

    #[test]
    fn history_is_bounded() {
        let reg = registry();
        for i in 0..(MAX_HISTORY + 10) {
            run(&reg, &format!("echo {i}")).unwrap();
        }
        let hist = reg.history();
        assert_eq!(hist.len(), MAX_HISTORY);
        assert_eq!(hist[0], "echo 10");
    }

    #[test]
    fn help_lists_and_describes() {
        let reg = registry();
        let all = text(run(&reg, "help"));
        assert!(all.starts_with("Commands (3):"));
        assert!(all.contains("echo"));
        let one = text(run(&reg, "help ECHO"));
        assert!(one.contains("Usage: echo [text...]"));
        assert!(run(&reg, "help nope").is_err());
    }

    #[test]
    fn help_follows_aliases() {
        let reg = registry();
        reg.set_alias("say", "echo");
        assert!(text(run(&reg, "help say")).starts_with("echo (general)"));
    }

    #[test]
    fn tokenize_simple() {
        assert_eq!(tokenize("hello world").unwrap(), vec!["hello", "world"]);
    }

    #[test]
    fn tokenize_single_quotes() {
        assert_eq!(
            tokenize("echo 'hello world'").unwrap(),
            vec!["echo", "hello world"]
        );
    }

    #[test]
    fn tokenize_double_quotes_and_escapes() {
        assert_eq!(
            tokenize(r#"echo "say \"hi\"" a\ b"#).unwrap(),
            vec!["echo", r#"say "hi""#, "a b"]
        );
    }

    #[test]
    fn tokenize_empty_quotes_make_a_token() {
        assert_eq!(tokenize(r#"echo "" x"#).unwrap(), vec!["echo", "", "x"]);
    }

    #[test]
    fn tokenize_unterminated() {
        assert!(tokenize("echo 'oops").is_err());
        assert!(tokenize("echo \"oops").is_err());
    }
}
