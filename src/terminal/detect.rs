//! Terminal environment detection

use tracing::debug;

use crate::error::{MotdError, Result};
use crate::vars::EnvVars;

pub const STANDARD_START: &str = "\x1b]";
pub const STANDARD_END: &str = "\x07";
pub const TMUX_START: &str = "\x1bPtmux;\x1b\x1b]";
pub const TMUX_END: &str = "\x07\x1b\\";

/// Terminal traits detected once per run, and the escape sequences they select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// iTerm2 or VSCode integrated terminal
    pub is_iterm2: bool,
    pub is_ssh: bool,
    /// Bare tmux/screen session needing the passthrough wrapper
    pub is_tmux: bool,
    pub start_sequence: &'static str,
    pub end_sequence: &'static str,
}

impl Environment {
    /// Standard sequences with no traits detected
    pub fn standard() -> Self {
        Self {
            is_iterm2: false,
            is_ssh: false,
            is_tmux: false,
            start_sequence: STANDARD_START,
            end_sequence: STANDARD_END,
        }
    }

    /// Classify the terminal from `TERM`, `TERM_PROGRAM` and `SSH_CLIENT`.
    ///
    /// `TERM` must exist; an empty value is accepted. iTerm2/VSCode and SSH
    /// sessions take the standard sequences even under tmux.
    pub fn detect(vars: &impl EnvVars) -> Result<Self> {
        let term = vars.var("TERM").ok_or(MotdError::TerminalNotSet)?;

        let mut env = Self::standard();

        if let Some(program) = vars.var("TERM_PROGRAM") {
            if program.starts_with("iTerm") || program.starts_with("vscode") {
                env.is_iterm2 = true;
                debug!(term_program = %program, "Detected iTerm2/VSCode terminal");
            }
        }

        if vars.contains("SSH_CLIENT") {
            env.is_ssh = true;
            debug!("Detected SSH client");
        }

        if !env.is_iterm2 && !env.is_ssh && term.starts_with("screen") {
            env.is_tmux = true;
            env.start_sequence = TMUX_START;
            env.end_sequence = TMUX_END;
        }

        debug!(
            %term,
            iterm2 = env.is_iterm2,
            ssh = env.is_ssh,
            tmux = env.is_tmux,
            "Terminal environment detected"
        );

        Ok(env)
    }
}
