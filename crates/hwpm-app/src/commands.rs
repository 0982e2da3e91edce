use hwpm_terminal::CommandOutput;

use crate::app_state::AppState;

/// Scrollback kept in memory. Only the tail is ever drawn.
pub const MAX_OUTPUT_LINES: usize = 200;

/// Apply a terminal command result to the app state.
pub fn process_command_output(
    result: hwpm_core::error::Result<CommandOutput>,
    state: &mut AppState,
) {
    match result {
        Ok(CommandOutput::Text(text)) => {
            for l in text.lines() {
                state.output_lines.push(l.to_string());
            }
        },
        Ok(CommandOutput::Table { headers, rows }) => {
            state.output_lines.extend(format_table(&headers, &rows));
        },
        Ok(CommandOutput::Clear) => state.output_lines.clear(),
        Ok(CommandOutput::None) => {},
        Ok(CommandOutput::Action(action)) => {
            log::debug!("console action {action:?}");
            state.orchestrator.apply(action);
        },
        Ok(CommandOutput::Quit) => {
            log::info!("quit requested from console");
            state.quit = true;
        },
        Err(e) => {
            state.output_lines.push(format!("error: {e}"));
        },
    }
    trim_output(&mut state.output_lines);
}

/// Drop the oldest lines beyond [`MAX_OUTPUT_LINES`].
pub fn trim_output(output_lines: &mut Vec<String>) {
    if output_lines.len() > MAX_OUTPUT_LINES {
        let excess = output_lines.len() - MAX_OUTPUT_LINES;
        output_lines.drain(..excess);
    }
}

/// Left-aligned columns separated by " | ", each padded to its widest cell.
fn format_table(headers: &[String], rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let n = cell.chars().count();
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(n),
                None => widths.push(n),
            }
        }
    }
    let line = |cells: &[String]| {
        cells
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{c:<width$}", width = widths[i]))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };
    let mut out = Vec::with_capacity(rows.len() + 1);
    out.push(line(headers));
    out.extend(rows.iter().map(|r| line(r.as_slice())));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hwpm_core::UserAction;
    use hwpm_core::config::HwpmConfig;
    use hwpm_core::error::HwpmError;

    fn state() -> AppState {
        let mut s = AppState::new(HwpmConfig::default());
        s.output_lines.clear();
        s
    }

    #[test]
    fn text_is_split_into_lines() {
        let mut s = state();
        process_command_output(Ok(CommandOutput::Text("a\nb".into())), &mut s);
        assert_eq!(s.output_lines, vec!["a", "b"]);
    }

    #[test]
    fn table_columns_are_padded() {
        let mut s = state();
        let out = CommandOutput::Table {
            headers: vec!["KEY".into(), "RISK".into()],
            rows: vec![
                vec!["STANDARD".into(), "Low".into()],
                vec!["ASM".into(), "Brain Damage".into()],
            ],
        };
        process_command_output(Ok(out), &mut s);
        assert_eq!(
            s.output_lines,
            vec![
                "KEY      | RISK",
                "STANDARD | Low",
                "ASM      | Brain Damage",
            ]
        );
    }

    #[test]
    fn clear_and_none() {
        let mut s = state();
        s.output_lines.push("x".into());
        process_command_output(Ok(CommandOutput::None), &mut s);
        assert_eq!(s.output_lines.len(), 1);
        process_command_output(Ok(CommandOutput::Clear), &mut s);
        assert!(s.output_lines.is_empty());
    }

    #[test]
    fn errors_are_prefixed() {
        let mut s = state();
        process_command_output(Err(HwpmError::Command("nope".into())), &mut s);
        assert_eq!(s.output_lines, vec!["error: command error: nope"]);
    }

    #[test]
    fn action_is_applied() {
        let mut s = state();
        s.orchestrator.advance(10_000);
        process_command_output(Ok(CommandOutput::Action(UserAction::OpenSelector)), &mut s);
        assert!(s.orchestrator.session().is_selector_open());
    }

    #[test]
    fn quit_sets_flag() {
        let mut s = state();
        process_command_output(Ok(CommandOutput::Quit), &mut s);
        assert!(s.quit);
    }

    #[test]
    fn scrollback_is_bounded() {
        let mut lines: Vec<String> = (0..MAX_OUTPUT_LINES + 5).map(|i| i.to_string()).collect();
        trim_output(&mut lines);
        assert_eq!(lines.len(), MAX_OUTPUT_LINES);
        assert_eq!(lines[0], "5");
    }
}
