// Copyright 2026 SWOT Lens Contributors
// SPDX-License-Identifier: MIT

//! Tab completion and hints for the SWOT Lens shell.

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::Helper;

/// All available slash commands.
pub const COMMANDS: &[(&str, &str)] = &[
    ("/analyze", "Run a SWOT analysis on a website URL"),
    ("/table", "Show the last result as word/count tables"),
    ("/top", "Show the ranked words behind the last result"),
    ("/whoami", "Show the logged-in user"),
    ("/settings", "View current configuration"),
    ("/clear", "Clear the screen"),
    ("/help", "Show available commands"),
    ("/exit", "Quit the shell"),
];

/// Suggest the closest command for a typo (shared prefix or single edit).
pub fn suggest_command(input: &str) -> Option<&'static str> {
    let input = input.trim_start_matches('/');
    if input.is_empty() {
        return None;
    }

    COMMANDS
        .iter()
        .map(|(cmd, _)| *cmd)
        .find(|cmd| {
            let name = &cmd[1..];
            name.starts_with(input) || input.starts_with(name) || edit_distance(name, input) <= 1
        })
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut cur = vec![i + 1; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            cur[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(cur[j] + 1);
        }
        prev = cur;
    }
    prev[b.len()]
}

/// Shell helper providing command completion and ghost-text hints.
#[derive(Debug, Default)]
pub struct SwotHelper;

impl SwotHelper {
    pub fn new() -> Self {
        Self
    }
}

impl Completer for SwotHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = &line[..pos];

        // Only command names complete; URLs are free text.
        if !input.starts_with('/') || input.contains(' ') {
            return Ok((pos, Vec::new()));
        }

        let matches: Vec<Pair> = COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| Pair {
                display: format!("{cmd:<12} {desc}"),
                replacement: format!("{cmd} "),
            })
            .collect();
        Ok((0, matches))
    }
}

impl Hinter for SwotHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos < line.len() || line.is_empty() {
            return None;
        }
        if line.starts_with('/') && !line.contains(' ') {
            for (cmd, _) in COMMANDS {
                if cmd.starts_with(line) && *cmd != line {
                    return Some(cmd[line.len()..].to_string());
                }
            }
        }
        None
    }
}

impl Highlighter for SwotHelper {}
impl Validator for SwotHelper {}
impl Helper for SwotHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_prefix() {
        assert_eq!(suggest_command("ana"), Some("/analyze"));
        assert_eq!(suggest_command("/tab"), Some("/table"));
    }

    #[test]
    fn test_suggest_typo() {
        assert_eq!(suggest_command("exti"), None);
        assert_eq!(suggest_command("hlp"), Some("/help"));
        assert_eq!(suggest_command("whoam"), Some("/whoami"));
    }

    #[test]
    fn test_suggest_nothing() {
        assert_eq!(suggest_command(""), None);
        assert_eq!(suggest_command("zzzzzz"), None);
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("help", "help"), 0);
        assert_eq!(edit_distance("help", "hlp"), 1);
        assert_eq!(edit_distance("exit", "exti"), 2);
    }
}
