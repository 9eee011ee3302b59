//! Clipboard access through the platform's command-line utilities.
//!
//! The text is piped into the first utility that can be started: `pbcopy`
//! on macOS, `clip` on Windows, and `wl-copy`, `xclip` or `xsel` elsewhere.

use std::env;
use std::io::{self, Write};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::ClipboardError;

/// Destination for copied text.
pub trait Clipboard {
    /// Put `text` on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns `ClipboardError` when the text could not be handed over.
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tool {
    program: &'static str,
    args: &'static [&'static str],
}

const PBCOPY: Tool = Tool { program: "pbcopy", args: &[] };
const CLIP: Tool = Tool { program: "clip", args: &[] };
const WL_COPY: Tool = Tool { program: "wl-copy", args: &[] };
const XCLIP: Tool = Tool { program: "xclip", args: &["-selection", "clipboard"] };
const XSEL: Tool = Tool { program: "xsel", args: &["--clipboard", "--input"] };

fn candidates(wayland: bool) -> Vec<Tool> {
    if cfg!(target_os = "macos") {
        vec![PBCOPY]
    } else if cfg!(windows) {
        vec![CLIP]
    } else if wayland {
        vec![WL_COPY, XCLIP, XSEL]
    } else {
        vec![XCLIP, XSEL, WL_COPY]
    }
}

/// The system clipboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// `Ok(false)` when the program is not installed.
    fn run(tool: Tool, text: &str) -> Result<bool, ClipboardError> {
        let spawned = Command::new(tool.program)
            .args(tool.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(source) => {
                return Err(ClipboardError::Spawn {
                    program: tool.program,
                    source,
                })
            }
        };

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|source| ClipboardError::Spawn {
                    program: tool.program,
                    source,
                })?;
        }

        let status = child.wait().map_err(|source| ClipboardError::Spawn {
            program: tool.program,
            source,
        })?;
        if status.success() {
            Ok(true)
        } else {
            Err(ClipboardError::Failed {
                program: tool.program,
                status,
            })
        }
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let tools = candidates(env::var_os("WAYLAND_DISPLAY").is_some());
        for tool in &tools {
            if Self::run(*tool, text)? {
                debug!(program = tool.program, chars = text.chars().count(), "copied to clipboard");
                return Ok(());
            }
            debug!(program = tool.program, "clipboard utility not installed");
        }
        Err(ClipboardError::Unavailable {
            tried: tools.iter().map(|t| t.program).collect::<Vec<_>>().join(", "),
        })
    }
}
