// src/clipboard/mod.rs
use std::io::Write;
use std::process::{Command, Stdio};

use clipboard::{ClipboardContext, ClipboardProvider};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard init error: {0}")]
    Init(String),

    #[error("clipboard set error: {0}")]
    Set(String),

    #[error("no clipboard utility available (tried {0})")]
    NoUtility(String),

    #[error("{program} exited with {status}")]
    UtilityFailed { program: &'static str, status: std::process::ExitStatus },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Place `text` on the system clipboard, falling back to an external copy
/// utility when the primary provider is unavailable (e.g. headless X11).
/// Returns whether any mechanism succeeded; failures are logged, never
/// propagated.
pub fn copy(text: &str) -> bool {
    match copy_primary(text) {
        Ok(()) => {
            log::debug!("Copied via clipboard provider");
            true
        }
        Err(primary_err) => {
            log::warn!("Clipboard provider failed: {}, trying fallback", primary_err);
            match copy_fallback(text) {
                Ok(program) => {
                    log::debug!("Copied via {}", program);
                    true
                }
                Err(fallback_err) => {
                    log::warn!("Clipboard fallback failed: {}", fallback_err);
                    false
                }
            }
        }
    }
}

fn copy_primary(text: &str) -> Result<()> {
    let mut ctx: ClipboardContext =
        ClipboardProvider::new().map_err(|e| ClipboardError::Init(e.to_string()))?;
    ctx.set_contents(text.to_string())
        .map_err(|e| ClipboardError::Set(e.to_string()))
}

/// Platform copy utilities to try, in order.
fn fallback_programs() -> &'static [(&'static str, &'static [&'static str])] {
    if cfg!(target_os = "macos") {
        &[("pbcopy", &[])]
    } else if cfg!(target_os = "windows") {
        &[("clip", &[])]
    } else {
        &[
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
            ("xsel", &["--clipboard", "--input"]),
        ]
    }
}

fn copy_fallback(text: &str) -> Result<&'static str> {
    for &(program, args) in fallback_programs() {
        let spawned = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            // Not installed; try the next one.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(e.into()),
        };

        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(text.as_bytes())?;
        }
        let status = child.wait()?;
        if status.success() {
            return Ok(program);
        }
        return Err(ClipboardError::UtilityFailed { program, status });
    }

    let tried = fallback_programs()
        .iter()
        .map(|(program, _)| *program)
        .collect::<Vec<_>>()
        .join(", ");
    Err(ClipboardError::NoUtility(tried))
}
