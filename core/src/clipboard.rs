//! Copy the hovered item's stat names or raw mod names to the clipboard.
//!
//! Text is built on the calling thread from the cached records; the
//! clipboard write happens on a detached worker so the frame never waits.

use std::thread::{self, JoinHandle};

use arboard::Clipboard;

use crate::error::ClipboardError;
use crate::mod_value::ModValue;

/// User-triggered export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardAction {
    StatNames,
    ModNames,
}

impl ClipboardAction {
    pub fn label(&self) -> &'static str {
        match self {
            ClipboardAction::StatNames => "stat names",
            ClipboardAction::ModNames => "mod names",
        }
    }

    /// Text to copy, `None` when there is nothing to copy
    pub fn text(&self, mods: &[ModValue]) -> Option<String> {
        match self {
            ClipboardAction::StatNames => stat_names_text(mods),
            ClipboardAction::ModNames => mod_names_text(mods),
        }
    }
}

fn join_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Option<String> {
    let text = lines.collect::<Vec<_>>().join("\n");
    (!text.is_empty()).then_some(text)
}

/// First stat name of each mod, one per line; mods without one are skipped
pub fn stat_names_text(mods: &[ModValue]) -> Option<String> {
    join_lines(mods.iter().filter_map(ModValue::first_stat_name))
}

/// Raw mod names, one per line
pub fn mod_names_text(mods: &[ModValue]) -> Option<String> {
    join_lines(
        mods.iter()
            .map(|mv| mv.raw_name.as_str())
            .filter(|name| !name.is_empty()),
    )
}

fn write_clipboard(text: String) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(ClipboardError::Unavailable)?;
    clipboard.set_text(text).map_err(ClipboardError::Write)
}

/// Run `action` against `mods` on a worker thread.
///
/// Returns `None` without spawning when there is no text to copy.
pub fn spawn_copy(action: ClipboardAction, mods: &[ModValue]) -> Option<JoinHandle<()>> {
    let Some(text) = action.text(mods) else {
        tracing::debug!(action = action.label(), "Nothing to copy");
        return None;
    };

    let lines = text.lines().count();
    let spawned = thread::Builder::new()
        .name("tiertip-clipboard".to_string())
        .spawn(move || match write_clipboard(text) {
            Ok(()) => tracing::info!(action = action.label(), lines, "Copied to clipboard"),
            Err(err) => tracing::warn!(action = action.label(), error = %err, "Clipboard copy failed"),
        });

    match spawned {
        Ok(handle) => Some(handle),
        Err(err) => {
            tracing::warn!(error = %err, "Failed to spawn clipboard thread");
            None
        }
    }
}
