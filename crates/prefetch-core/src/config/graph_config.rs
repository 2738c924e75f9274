use serde::{Deserialize, Serialize};

use crate::models::SessionWindow;

/// Graph construction configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Only aggregate transitions from the newest N sessions. `None` = all.
    pub last_n_sessions: Option<u64>,
}

impl GraphConfig {
    pub fn session_window(&self) -> SessionWindow {
        match self.last_n_sessions {
            Some(n) => SessionWindow::LastSessions(n),
            None => SessionWindow::AllSessions,
        }
    }
}
