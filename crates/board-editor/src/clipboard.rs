//! Copying FEN text through an external clipboard program.

use std::io::Write;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

/// Errors that can occur while copying to the clipboard.
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// No `clipboard_command` is configured.
    #[error("No clipboard command configured (set clipboard_command in board-editor.toml)")]
    NotConfigured,
    /// The clipboard program could not be started.
    #[error("Failed to run clipboard command '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// Writing to the clipboard program failed.
    #[error("Failed to write to clipboard command: {0}")]
    Io(#[from] std::io::Error),
    /// The clipboard program exited unsuccessfully.
    #[error("Clipboard command '{program}' failed with {status}")]
    Failed { program: String, status: ExitStatus },
}

/// A clipboard program that reads the text to copy from stdin,
/// such as `xclip -selection clipboard`, `wl-copy` or `pbcopy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clipboard {
    program: String,
    args: Vec<String>,
}

impl Clipboard {
    /// Builds a clipboard from an argv list. Returns `None` for an empty list.
    pub fn from_command(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    /// Pipes `text` to the clipboard program and waits for it to exit.
    pub fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // The child is always reaped, even when the write fails.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        let status = child.wait()?;
        written?;
        if !status.success() {
            return Err(ClipboardError::Failed {
                program: self.program.clone(),
                status,
            });
        }

        tracing::debug!(program = %self.program, "copied {} bytes", text.len());
        Ok(())
    }
}
