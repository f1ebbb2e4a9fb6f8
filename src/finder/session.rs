//! Per-role search session state
//!
//! Each end of a route query ("start" and "end") has its own all-floors toggle.
//! The two sessions are independent and start out inactive.

use serde::{Deserialize, Serialize};

/// Which end of a route query an input represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Start,
    End,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Start, Role::End];

    /// Lowercase key used on the wire and in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Start => "start",
            Role::End => "end",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    #[default]
    Inactive,
    Active,
}

impl SessionState {
    pub fn is_active(self) -> bool {
        self == SessionState::Active
    }

    fn flipped(self) -> Self {
        match self {
            SessionState::Inactive => SessionState::Active,
            SessionState::Active => SessionState::Inactive,
        }
    }
}

/// All-floors search mode for one role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSession {
    pub role: Role,
    pub state: SessionState,
}

impl SearchSession {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            state: SessionState::Inactive,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Flip the state and return the new one
    pub(crate) fn toggle(&mut self) -> SessionState {
        self.state = self.state.flipped();
        self.state
    }

    pub(crate) fn deactivate(&mut self) {
        self.state = SessionState::Inactive;
    }
}

/// Both role sessions, owned by the caller and passed into every locator operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderSessions {
    start: SearchSession,
    end: SearchSession,
}

impl Default for FinderSessions {
    fn default() -> Self {
        Self {
            start: SearchSession::new(Role::Start),
            end: SearchSession::new(Role::End),
        }
    }
}

impl FinderSessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, role: Role) -> &SearchSession {
        match role {
            Role::Start => &self.start,
            Role::End => &self.end,
        }
    }

    pub(crate) fn get_mut(&mut self, role: Role) -> &mut SearchSession {
        match role {
            Role::Start => &mut self.start,
            Role::End => &mut self.end,
        }
    }

    pub fn is_active(&self, role: Role) -> bool {
        self.get(role).is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessions_start_inactive() {
        let sessions = FinderSessions::new();
        for role in Role::ALL {
            assert_eq!(sessions.get(role).state, SessionState::Inactive);
            assert_eq!(sessions.get(role).role, role);
        }
    }

    #[test]
    fn test_toggle_alternates() {
        let mut session = SearchSession::new(Role::Start);
        assert_eq!(session.toggle(), SessionState::Active);
        assert_eq!(session.toggle(), SessionState::Inactive);
        assert_eq!(session.toggle(), SessionState::Active);
    }

    #[test]
    fn test_roles_are_independent() {
        let mut sessions = FinderSessions::new();
        sessions.get_mut(Role::End).toggle();
        assert!(sessions.is_active(Role::End));
        assert!(!sessions.is_active(Role::Start));
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Start).unwrap(), r#""start""#);
        let role: Role = serde_json::from_str(r#""end""#).unwrap();
        assert_eq!(role, Role::End);
        assert_eq!(Role::End.to_string(), "end");
    }
}
