//! Session State
//!
//! The value held by the session store and observed by views and the
//! route guard.

use crate::domain::entity::user::SessionUser;

/// Coarse session phase derived from [`SessionState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No usable session
    Anonymous,
    /// Rehydration, login or register in progress
    Loading,
    /// Token and user both present
    Authenticated,
}

/// Session state
///
/// Invariant: `user.is_some()` implies `token.is_some()`. A token without a
/// user is tolerated and reads as anonymous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
    pub loading: bool,
    /// Last user-facing failure message
    pub error: Option<String>,
}

impl SessionState {
    /// State before rehydration has run
    pub fn bootstrapping() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// State right after a successful login or rehydration
    pub fn authenticated(token: String, user: SessionUser) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
            loading: false,
            error: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::Loading
        } else if self.token.is_some() && self.user.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase() == SessionPhase::Authenticated
    }

    /// Drop everything, including a pending error and the loading flag
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Enter loading and forget the previous error
    pub(crate) fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Leave loading with a failure message; token and user are kept
    pub(crate) fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}
