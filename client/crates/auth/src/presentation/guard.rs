//! Route Guard
//!
//! Gates a portal area on the session: wait while the session is loading,
//! send anonymous visitors to the login page and visitors with the wrong
//! role to the landing page.

use derive_more::Display;
use tokio::sync::watch;

use crate::domain::entity::session::SessionState;
use crate::domain::value_object::user_role::Role;

/// Portal locations the guard knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Route {
    #[display("/login")]
    Login,
    #[display("/")]
    Landing,
    #[display("/admin/dashboard")]
    AdminDashboard,
    #[display("/student/dashboard")]
    StudentDashboard,
}

impl Route {
    pub const fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Landing => "/",
            Route::AdminDashboard => "/admin/dashboard",
            Route::StudentDashboard => "/student/dashboard",
        }
    }

    /// Where a freshly signed-in user of `role` lands
    pub const fn home_for(role: Role) -> Route {
        match role {
            Role::Admin => Route::AdminDashboard,
            Role::Student => Route::StudentDashboard,
            Role::Institute | Role::Member => Route::Landing,
        }
    }
}

/// Outcome of a guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GuardDecision {
    /// Session still loading; show a spinner
    #[display("wait")]
    Wait,
    /// Render the protected area
    #[display("render")]
    Render,
    /// Navigate elsewhere
    #[display("redirect to {_0}")]
    Redirect(Route),
}

/// Role-gated route guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteGuard {
    required: Role,
}

impl RouteGuard {
    pub const fn new(required: Role) -> Self {
        Self { required }
    }

    /// Guard for `/admin/dashboard`
    pub const fn admin() -> Self {
        Self::new(Role::Admin)
    }

    /// Guard for `/student/dashboard`
    pub const fn student() -> Self {
        Self::new(Role::Student)
    }

    pub const fn required(&self) -> Role {
        self.required
    }

    /// Pure decision for `state` against `required`
    pub fn decide(state: &SessionState, required: Role) -> GuardDecision {
        if state.loading {
            return GuardDecision::Wait;
        }
        if state.token.is_none() {
            return GuardDecision::Redirect(Route::Login);
        }
        match &state.user {
            Some(user) if user.has_role(required) => GuardDecision::Render,
            _ => GuardDecision::Redirect(Route::Landing),
        }
    }

    pub fn check(&self, state: &SessionState) -> GuardDecision {
        Self::decide(state, self.required)
    }

    /// Wait until the session settles and return the first non-`Wait`
    /// decision. If the store goes away mid-load the last state decides.
    pub async fn settle(&self, receiver: &mut watch::Receiver<SessionState>) -> GuardDecision {
        let settled = receiver
            .wait_for(|state| self.check(state) != GuardDecision::Wait)
            .await
            .map(|state| self.check(&state));
        settled.unwrap_or_else(|_| self.check(&receiver.borrow()))
    }
}
