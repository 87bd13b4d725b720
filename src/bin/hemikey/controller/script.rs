use anyhow::{bail, Context, Result};
use hemikey::{log_debug, ControllerFrame, StickAxes};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use super::ControllerSource;

/// One line of a controller script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ScriptEntry {
    Frame {
        at_ms: u64,
        #[serde(default)]
        left: [f32; 2],
        #[serde(default)]
        right: [f32; 2],
        #[serde(default)]
        buttons: Vec<bool>,
    },
    Connected {
        at_ms: u64,
    },
    Disconnected {
        at_ms: u64,
    },
}

impl ScriptEntry {
    fn at_ms(&self) -> u64 {
        match self {
            ScriptEntry::Frame { at_ms, .. }
            | ScriptEntry::Connected { at_ms }
            | ScriptEntry::Disconnected { at_ms } => *at_ms,
        }
    }
}

/// Replays timed controller entries. The last state holds once the script ends.
#[derive(Debug)]
pub(crate) struct ScriptedController {
    entries: Vec<ScriptEntry>,
    next: usize,
    current: ControllerFrame,
    pending_notifications: Vec<bool>,
}

impl ScriptedController {
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read controller script {}", path.display()))?;
        let controller = Self::parse(&source)
            .with_context(|| format!("invalid controller script {}", path.display()))?;
        log_debug(&format!(
            "controller script loaded: {} entries",
            controller.entries.len()
        ));
        Ok(controller)
    }

    /// One JSON object per line; blank lines are skipped. Timestamps must not go backwards.
    pub(crate) fn parse(source: &str) -> Result<Self> {
        let mut entries: Vec<ScriptEntry> = Vec::new();
        for (index, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let entry: ScriptEntry = serde_json::from_str(line)
                .with_context(|| format!("line {}: malformed entry", index + 1))?;
            if let Some(previous) = entries.last() {
                if entry.at_ms() < previous.at_ms() {
                    bail!(
                        "line {}: at_ms {} is earlier than the previous entry ({})",
                        index + 1,
                        entry.at_ms(),
                        previous.at_ms()
                    );
                }
            }
            entries.push(entry);
        }
        Ok(Self {
            entries,
            next: 0,
            current: ControllerFrame::disconnected(),
            pending_notifications: Vec::new(),
        })
    }

    fn advance(&mut self, elapsed: Duration) {
        let elapsed_ms = elapsed.as_millis();
        while let Some(entry) = self.entries.get(self.next) {
            if u128::from(entry.at_ms()) > elapsed_ms {
                break;
            }
            match entry {
                ScriptEntry::Frame {
                    left,
                    right,
                    buttons,
                    ..
                } => {
                    self.current = ControllerFrame {
                        connected: true,
                        left: StickAxes::new(left[0], left[1]),
                        right: StickAxes::new(right[0], right[1]),
                        buttons: buttons.clone(),
                    };
                }
                ScriptEntry::Connected { .. } => {
                    self.current.connected = true;
                    self.pending_notifications.push(true);
                }
                ScriptEntry::Disconnected { .. } => {
                    self.current = ControllerFrame::disconnected();
                    self.pending_notifications.push(false);
                }
            }
            self.next += 1;
        }
    }
}

impl ControllerSource for ScriptedController {
    fn take_notifications(&mut self, elapsed: Duration) -> Vec<bool> {
        self.advance(elapsed);
        std::mem::take(&mut self.pending_notifications)
    }

    fn snapshot(&mut self, elapsed: Duration) -> ControllerFrame {
        self.advance(elapsed);
        self.current.clone()
    }

    fn label(&self) -> &'static str {
        "script"
    }
}
