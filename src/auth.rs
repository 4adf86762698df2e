//! Credential gate in front of the shift commands.
//!
//! This is a convenience lock for a shared machine, not a security boundary:
//! the expected credentials live in the plain-text config file.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub identifier: String,
    pub secret: String,
}

/// Explicit login state, created per run and handed to whatever needs it.
#[derive(Debug, Clone)]
pub struct Session {
    expected: Option<Credentials>,
    authenticated: bool,
}

impl Session {
    /// A session guarded by `expected`; `None` means no gate is configured
    /// and the session starts authenticated.
    pub fn new(expected: Option<Credentials>) -> Self {
        let authenticated = expected.is_none();
        Self {
            expected,
            authenticated,
        }
    }

    pub fn is_gated(&self) -> bool {
        self.expected.is_some()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn login(&mut self, identifier: &str, secret: &str) -> bool {
        let ok = match &self.expected {
            Some(c) => c.identifier == identifier && c.secret == secret,
            None => true,
        };
        if ok {
            debug!("login succeeded");
        } else {
            warn!("login rejected");
        }
        self.authenticated = ok;
        ok
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }
}
