//! Blocking confirm/alert dialogs used by page mutations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Destructive actions ask for confirmation before any request is sent, and
//! failed mutations surface a plain alert. Pages only see the trait, so the
//! terminal front-end and tests can answer differently.

use std::io::{self, BufRead, Write};

/// Confirmation and alert surface for page actions.
pub trait Prompt: Send + Sync {
    /// Ask a yes/no question. `false` cancels the action.
    fn confirm(&self, message: &str) -> bool;

    /// Show a message the user must acknowledge.
    fn alert(&self, message: &str);
}

/// Terminal prompt reading answers from stdin.
///
/// With `assume_yes` every confirmation is accepted without reading input.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt {
    pub assume_yes: bool,
}

impl Prompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{message} [y/N] ");
        let _ = io::stderr().flush();
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        is_yes(&line)
    }

    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_yes_accepts_short_and_long_forms() {
        assert!(is_yes("y\n"));
        assert!(is_yes("  YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("no"));
    }

    #[test]
    fn assume_yes_skips_input() {
        let prompt = TerminalPrompt { assume_yes: true };
        assert!(prompt.confirm("delete?"));
    }
}
