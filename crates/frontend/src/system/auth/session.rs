//! Admin session lifecycle
//!
//! ```text
//! Anonymous --LoginSucceeded--> Authenticated --Unauthorized--> Expired
//!     ^                              |                             |
//!     +----------LoggedOut-----------+                             |
//!     +-----------------------------Cleared------------------------+
//! ```

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Anonymous,
    Authenticated,
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    LoginSucceeded,
    /// A backend call answered 401.
    Unauthorized,
    /// Stored session removed after expiry.
    Cleared,
    LoggedOut,
}

impl SessionPhase {
    /// Next phase; events that are not valid in the current phase leave it unchanged.
    pub fn apply(self, event: SessionEvent) -> SessionPhase {
        use SessionEvent::*;
        use SessionPhase::*;

        match (self, event) {
            (Anonymous, LoginSucceeded) => Authenticated,
            (Authenticated, Unauthorized) => Expired,
            (Authenticated, LoggedOut) => Anonymous,
            (Expired, Cleared) => Anonymous,
            // includes concurrent 401s after the first one
            _ => self,
        }
    }

    pub fn is_authenticated(self) -> bool {
        self == SessionPhase::Authenticated
    }
}
