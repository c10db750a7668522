//! Session Store
//!
//! Owns the session state, its persisted copy and the auth endpoints.
//! State lives in a `watch` channel: mutations are serialized by the
//! channel and views subscribe to changes. A state change and the storage
//! write that mirrors it happen under one store-level lock, so the session
//! file never lags a racing login or logout.
//!
//! The store is also the [`AuthProvider`] handed to the HTTP client adapter,
//! which is how a 401 anywhere in the app ends the session.

use std::sync::{Arc, Mutex, MutexGuard};

use platform::{ApiClient, AuthProvider, HttpTransport, SessionStorage};
use serde_json::Value;
use tokio::sync::watch;

use crate::application::config::SessionConfig;
use crate::domain::entity::session::{SessionPhase, SessionState};
use crate::domain::entity::user::SessionUser;
use crate::infra::auth_api::AuthApi;
use crate::infra::persisted::PersistedSession;
use crate::presentation::dto::{LoginRequest, RegisterRequest};

const LOGIN_FAILED: &str = "Login failed";
const REGISTRATION_FAILED: &str = "Registration failed";

/// Session store
///
/// Starts in the loading phase; call [`SessionStore::initialize`] once at
/// startup so that guards never redirect before rehydration.
pub struct SessionStore<T> {
    state: watch::Sender<SessionState>,
    persisted: PersistedSession,
    /// Held across a state change and its storage write, never across an await
    persist: Mutex<()>,
    api: AuthApi<T>,
}

impl<T> SessionStore<T>
where
    T: HttpTransport + Sync,
{
    /// `transport` carries the auth endpoints only
    pub fn new(transport: T, storage: Arc<dyn SessionStorage>, config: SessionConfig) -> Self {
        Self {
            state: watch::Sender::new(SessionState::bootstrapping()),
            persisted: PersistedSession::new(storage, config),
            persist: Mutex::new(()),
            api: AuthApi::new(transport),
        }
    }

    fn persist_lock(&self) -> MutexGuard<'_, ()> {
        self.persist
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Rehydrate from the persisted copy; never touches the network
    pub fn initialize(&self) {
        let _persist = self.persist_lock();
        self.state.send_modify(SessionState::begin);

        let restored = match self.persisted.load() {
            Ok(restored) => restored,
            Err(e) => {
                e.log("initialize");
                if let Err(e) = self.persisted.clear() {
                    e.log("initialize");
                }
                None
            }
        };

        match restored {
            Some((token, user)) => {
                tracing::info!(user_id = %user.id, role = %user.role, "Session restored");
                self.state
                    .send_replace(SessionState::authenticated(token, user));
            }
            None => {
                tracing::info!("No persisted session");
                self.state.send_replace(SessionState::default());
            }
        }
    }

    /// Sign in
    ///
    /// Failures are recorded in `error` (server message or "Login failed")
    /// and reported as `None`; token and user are left as they were.
    pub async fn login(&self, credentials: &LoginRequest) -> Option<SessionUser> {
        self.state.send_modify(SessionState::begin);

        match self.api.login(credentials).await {
            Ok(resp) => {
                let _persist = self.persist_lock();
                if let Err(e) = self.persisted.save(&resp.token, &resp.user) {
                    e.log("login");
                }
                tracing::info!(user_id = %resp.user.id, role = %resp.user.role, "Logged in");
                let user = resp.user.clone();
                self.state
                    .send_replace(SessionState::authenticated(resp.token, resp.user));
                Some(user)
            }
            Err(e) => {
                e.log("login");
                let message = e.user_message(LOGIN_FAILED);
                self.state.send_modify(|s| s.fail(message));
                None
            }
        }
    }

    /// Create a student account
    ///
    /// Returns the server's record of the new account. No session is
    /// established; the caller logs in separately.
    pub async fn register(&self, data: &RegisterRequest) -> Option<Value> {
        if let Err(message) = data.validate() {
            tracing::debug!(message, "Registration form rejected");
            self.state.send_modify(|s| s.fail(message.to_string()));
            return None;
        }

        self.state.send_modify(SessionState::begin);

        match self.api.register(data).await {
            Ok(created) => {
                tracing::info!(email = %data.email, "Account registered");
                self.state.send_modify(|s| s.loading = false);
                Some(created)
            }
            Err(e) => {
                e.log("register");
                let message = e.user_message(REGISTRATION_FAILED);
                self.state.send_modify(|s| s.fail(message));
                None
            }
        }
    }

    /// Drop the session and its persisted copy (idempotent)
    pub fn logout(&self) {
        let _persist = self.persist_lock();
        self.state.send_modify(SessionState::clear);
        if let Err(e) = self.persisted.clear() {
            e.log("logout");
        }
        tracing::info!("Logged out");
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.borrow().phase()
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.state.borrow().user.clone()
    }

    pub fn auth_api(&self) -> &AuthApi<T> {
        &self.api
    }
}

impl<T> SessionStore<T>
where
    T: HttpTransport + Sync + 'static,
{
    /// API client whose requests carry this session's token
    pub fn authorized_client<U>(self: &Arc<Self>, transport: U) -> ApiClient<U>
    where
        U: HttpTransport + Sync,
    {
        let auth: Arc<dyn AuthProvider> = self.clone();
        ApiClient::new(transport, auth)
    }
}

impl<T> AuthProvider for SessionStore<T>
where
    T: HttpTransport + Sync,
{
    fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    fn on_unauthorized(&self, rejected_token: Option<&str>) -> bool {
        let Some(rejected) = rejected_token else {
            return false;
        };

        let _persist = self.persist_lock();
        let cleared = self.state.send_if_modified(|s| {
            if s.token.as_deref() == Some(rejected) {
                s.clear();
                true
            } else {
                false
            }
        });

        if cleared {
            if let Err(e) = self.persisted.clear() {
                e.log("unauthorized");
            }
            tracing::warn!("Session cleared after 401");
        }
        cleared
    }
}
