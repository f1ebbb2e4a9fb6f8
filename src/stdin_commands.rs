//! Drive a finder session with JSONL commands on stdin.
//!
//! This stands in for the host page: each line is one UI event, and every
//! resulting host event is written back as one JSON line.
//!
//! # Protocol
//!
//! ```json
//! {"type": "toggle", "role": "start"}
//! {"type": "input", "role": "start", "text": "libr"}
//! {"type": "select", "role": "start", "index": 0}
//! {"type": "select", "role": "end", "id": "r2"}
//! {"type": "setFloor", "floor": "G"}
//! {"type": "snapshot"}
//! ```
//!
//! ```bash
//! printf '%s\n' '{"type":"input","role":"end","text":"library"}' \
//!   '{"type":"toggle","role":"end"}' | floor-finder --records nodes.json session
//! ```

use std::io::{BufRead, Write};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{FloorFinderError, Result};
use crate::finder::{
    CrossFloorLocator, FinderSessions, FloorDisplay, HostEvent, InputBinding, MemoryHost, Role,
    SessionState,
};
use crate::locations::LocationRecord;

/// UI events the session driver accepts
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ExternalCommand {
    /// Click the all-floors button for a role
    Toggle { role: Role },
    /// Replace the role's input text (one keystroke)
    Input { role: Role, text: String },
    /// Click a result row, by its position in the panel or by record id
    Select {
        role: Role,
        #[serde(default)]
        index: Option<usize>,
        #[serde(default)]
        id: Option<String>,
    },
    /// Host switched floors on its own
    SetFloor { floor: String },
    /// Emit the current state of both roles
    Snapshot,
}

/// State of the session as reported by `snapshot`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub current_floor: Option<String>,
    pub roles: Vec<RoleSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSnapshot {
    pub role: Role,
    pub state: SessionState,
    pub text: String,
    pub node_id: Option<String>,
}

/// One line of driver output
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum OutputLine<'a> {
    Event(&'a HostEvent),
    Snapshot {
        #[serde(rename = "type")]
        kind: &'static str,
        snapshot: &'a SessionSnapshot,
    },
}

/// Sessions plus the in-memory host they drive
pub struct SessionDriver {
    locator: CrossFloorLocator,
    sessions: FinderSessions,
    host: MemoryHost,
}

impl SessionDriver {
    pub fn new(locator: CrossFloorLocator, current_floor: Option<&str>) -> Self {
        Self {
            locator,
            sessions: FinderSessions::new(),
            host: MemoryHost::new(current_floor),
        }
    }

    pub fn sessions(&self) -> &FinderSessions {
        &self.sessions
    }

    pub fn host(&self) -> &MemoryHost {
        &self.host
    }

    /// Apply one command. Returns the host events it produced.
    pub fn apply(&mut self, command: ExternalCommand) -> Result<Vec<HostEvent>> {
        match command {
            ExternalCommand::Toggle { role } => {
                self.locator
                    .toggle(&mut self.sessions, role, &mut self.host);
            }
            ExternalCommand::Input { role, text } => {
                self.host.type_text(role, &text);
                self.locator
                    .on_input_changed(&self.sessions, role, &text, &mut self.host);
            }
            ExternalCommand::Select { role, index, id } => {
                let record = self.resolve_selection(role, index, id.as_deref())?;
                self.locator
                    .select_result(&mut self.sessions, role, &record, &mut self.host);
            }
            ExternalCommand::SetFloor { floor } => {
                self.host.set_floor(&floor);
            }
            ExternalCommand::Snapshot => {}
        }
        Ok(self.host.drain_events())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_floor: self.host.current_floor(),
            roles: Role::ALL
                .iter()
                .map(|&role| RoleSnapshot {
                    role,
                    state: self.sessions.get(role).state,
                    text: self.host.input_text(role),
                    node_id: self.host.selected_id(role).map(str::to_string),
                })
                .collect(),
        }
    }

    fn resolve_selection(
        &self,
        role: Role,
        index: Option<usize>,
        id: Option<&str>,
    ) -> Result<Arc<LocationRecord>> {
        let id = match (index, id) {
            (_, Some(id)) => id.to_string(),
            (Some(index), None) => self
                .host
                .panel(role)
                .and_then(|view| view.rows().get(index))
                .map(|row| row.id.clone())
                .ok_or_else(|| {
                    FloorFinderError::Command(format!("no result #{} for {}", index, role))
                })?,
            (None, None) => {
                return Err(FloorFinderError::Command(
                    "select needs an index or an id".to_string(),
                ))
            }
        };

        self.locator
            .registry()
            .and_then(|registry| registry.find(&id))
            .cloned()
            .ok_or_else(|| FloorFinderError::Command(format!("unknown location '{}'", id)))
    }

    /// Read commands until EOF, writing events as JSON lines.
    ///
    /// Unparseable or invalid commands are logged and skipped.
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> anyhow::Result<()> {
        info!("Session driver started");
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match serde_json::from_str::<ExternalCommand>(&line) {
                Ok(command) => command,
                Err(e) => {
                    warn!(error = %e, line = %line, "Failed to parse command");
                    continue;
                }
            };

            let is_snapshot = command == ExternalCommand::Snapshot;
            match self.apply(command) {
                Ok(events) => {
                    for event in &events {
                        serde_json::to_writer(&mut writer, &OutputLine::Event(event))?;
                        writeln!(writer)?;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Command rejected");
                }
            }

            if is_snapshot {
                let snapshot = self.snapshot();
                serde_json::to_writer(
                    &mut writer,
                    &OutputLine::Snapshot {
                        kind: "snapshot",
                        snapshot: &snapshot,
                    },
                )?;
                writeln!(writer)?;
            }
            writer.flush()?;
        }
        info!("Session driver exiting");
        Ok(())
    }
}
