//! Clipboard writes with a manual-copy fallback.
//!
//! When the system clipboard cannot be opened or written, the password is
//! written to a fallback sink inside a frame so the user can select it by
//! hand. Only when that also fails is the copy reported as failed.

use std::io::Write;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::terminal::framed;

/// How long copy notifications stay on screen.
pub const TOAST_MILLIS: u64 = 1800;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Copied,
    /// Written to the fallback sink for manual copying.
    Manual,
    Failed(String),
    NothingToCopy,
}

impl Outcome {
    /// Short notification text for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Copied => "Password copied to clipboard",
            Outcome::Manual => "Clipboard unavailable - select the password to copy it",
            Outcome::Failed(_) => "Copy failed",
            Outcome::NothingToCopy => "No password to copy",
        }
    }
}

pub struct Clipboard {
    ctx: Option<ClipboardContext>,
}

impl Clipboard {
    /// Open the system clipboard. A missing clipboard is not an error here;
    /// copies go straight to the fallback.
    pub fn new() -> Self {
        match ClipboardContext::new() {
            Ok(ctx) => Self { ctx: Some(ctx) },
            Err(e) => {
                log::debug!("system clipboard unavailable: {e}");
                Self { ctx: None }
            }
        }
    }

    /// A clipboard that always uses the fallback.
    #[cfg(test)]
    pub fn unavailable() -> Self {
        Self { ctx: None }
    }

    /// Copy `text`, falling back to writing it framed into `fallback`.
    pub fn copy<W: Write>(&mut self, text: Option<&str>, fallback: &mut W) -> Outcome {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return Outcome::NothingToCopy;
        };

        if let Some(ctx) = self.ctx.as_mut() {
            match ctx.set_contents(text.to_owned()) {
                Ok(()) => {
                    // Some providers hand back a copy; wipe it.
                    if let Ok(mut readback) = ctx.get_contents() {
                        readback.zeroize();
                    }
                    return Outcome::Copied;
                }
                Err(e) => log::warn!("clipboard write failed, using manual copy: {e}"),
            }
        }

        match write_manual(text, fallback) {
            Ok(()) => Outcome::Manual,
            Err(e) => {
                log::warn!("manual copy fallback failed: {e}");
                Outcome::Failed(e.to_string())
            }
        }
    }
}

fn write_manual<W: Write>(text: &str, out: &mut W) -> std::io::Result<()> {
    let lines: Vec<&str> = text.lines().collect();
    for line in framed("Copy manually", &lines) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
