use crate::domain::model::CopyMethod;
use crate::domain::ports::ClipboardSink;
use crate::utils::error::{EtlError, Result};
use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use std::io::{IsTerminal, Write};
use std::process::{Command, Stdio};
use std::sync::Mutex;

/// Pipes text into a platform clipboard tool (`pbcopy`, `wl-copy`, `xclip`, `clip`).
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    /// Picks the usual clipboard tool for the current platform.
    pub fn detect() -> Self {
        let command: &[&str] = if cfg!(target_os = "macos") {
            &["pbcopy"]
        } else if cfg!(target_os = "windows") {
            &["clip"]
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            &["wl-copy"]
        } else {
            &["xclip", "-selection", "clipboard"]
        };

        Self {
            program: command[0].to_string(),
            args: command[1..].iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl ClipboardSink for CommandClipboard {
    fn name(&self) -> &str {
        &self.program
    }

    fn copy_text(&self, text: &str) -> Result<()> {
        tracing::debug!("Copying {} bytes via '{}'", text.len(), self.command_line());

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(EtlError::ProcessingError {
                message: format!(
                    "'{}' exited with {}: {}",
                    self.command_line(),
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }
        Ok(())
    }
}

/// Asks the terminal emulator to set the clipboard through an OSC 52 escape sequence.
pub struct Osc52Clipboard {
    writer: Mutex<Box<dyn Write + Send>>,
    require_terminal: bool,
}

impl Osc52Clipboard {
    /// Writes to stderr, and refuses when stderr is not a terminal.
    pub fn stderr() -> Self {
        Self {
            writer: Mutex::new(Box::new(std::io::stderr())),
            require_terminal: true,
        }
    }

    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
            require_terminal: false,
        }
    }

    pub fn escape_sequence(text: &str) -> String {
        format!("\x1b]52;c;{}\x07", B64.encode(text))
    }
}

impl ClipboardSink for Osc52Clipboard {
    fn name(&self) -> &str {
        "osc52"
    }

    fn copy_text(&self, text: &str) -> Result<()> {
        if self.require_terminal && !std::io::stderr().is_terminal() {
            return Err(EtlError::ProcessingError {
                message: "stderr is not a terminal".to_string(),
            });
        }

        let mut writer = self.writer.lock().map_err(|_| EtlError::ProcessingError {
            message: "clipboard writer lock poisoned".to_string(),
        })?;
        writer.write_all(Self::escape_sequence(text).as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// Tries `primary`, then `fallback`. Neither is retried.
pub fn copy_with_fallback(
    primary: &dyn ClipboardSink,
    fallback: &dyn ClipboardSink,
    text: &str,
) -> Result<CopyMethod> {
    let primary_err = match primary.copy_text(text) {
        Ok(()) => return Ok(CopyMethod::Primary),
        Err(e) => e,
    };
    tracing::warn!(
        "⚠️ Clipboard '{}' failed ({}), trying '{}'",
        primary.name(),
        primary_err,
        fallback.name()
    );

    match fallback.copy_text(text) {
        Ok(()) => Ok(CopyMethod::Fallback),
        Err(fallback_err) => Err(EtlError::CopyFailure {
            primary: primary_err.to_string(),
            fallback: fallback_err.to_string(),
        }),
    }
}
