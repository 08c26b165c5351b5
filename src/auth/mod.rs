//! Publish password checks with attempt counting and lockout.
//!
//! [`AuthState`] is a plain value: each call to [`AuthState::attempt`]
//! consumes the old state and returns the next one together with an
//! [`AuthOutcome`]. Persisting the state between calls is the job of an
//! [`AuthStore`].
//!
//! ```text
//! attempts: 0 ──fail──▶ 1 ──fail──▶ ... ──fail (max)──▶ locked until now + lockout
//!     ▲                                                      │
//!     └────────────── success / lockout expired ─────────────┘
//! ```

mod store;

pub use store::{AuthStore, FileStore, MemoryStore};

use crate::config::PublishConfig;
use crate::utils::hash;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Attempt limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthPolicy {
    pub max_attempts: u32,
    pub lockout_secs: u64,
}

impl Default for AuthPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            lockout_secs: 15 * 60,
        }
    }
}

impl From<&PublishConfig> for AuthPolicy {
    fn from(config: &PublishConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            lockout_secs: config.lockout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthState {
    /// Failed attempts since the last success or lockout.
    pub attempts: u32,
    /// Unix seconds.
    pub lockout_until: Option<u64>,
    pub session_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Granted { token: String },
    Denied { remaining: u32 },
    LockedOut { minutes_left: u64 },
}

impl AuthOutcome {
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::Granted { .. })
    }

    /// User-facing message for a refused attempt.
    pub fn message(&self) -> String {
        match self {
            Self::Granted { .. } => "Access granted".to_string(),
            Self::Denied { remaining } => {
                format!("Incorrect password. {remaining} attempts remaining.")
            }
            Self::LockedOut { minutes_left } => {
                format!("Too many attempts. Try again in {minutes_left} minutes.")
            }
        }
    }
}

impl AuthState {
    /// Check `password` against `secret` at time `now` (Unix seconds).
    ///
    /// Attempts made while locked out are refused without being counted.
    pub fn attempt(
        mut self,
        password: &str,
        secret: &str,
        policy: AuthPolicy,
        now: u64,
    ) -> (Self, AuthOutcome) {
        if let Some(until) = self.lockout_until {
            if now < until {
                let minutes_left = minutes_until(now, until);
                return (self, AuthOutcome::LockedOut { minutes_left });
            }
            self.lockout_until = None;
        }

        if password == secret {
            let token = hash::session_token(secret.as_bytes());
            self.attempts = 0;
            self.session_token = Some(token.clone());
            return (self, AuthOutcome::Granted { token });
        }

        self.attempts += 1;
        if self.attempts >= policy.max_attempts {
            let until = now.saturating_add(policy.lockout_secs);
            self.attempts = 0;
            self.lockout_until = Some(until);
            let minutes_left = minutes_until(now, until);
            return (self, AuthOutcome::LockedOut { minutes_left });
        }

        let remaining = policy.max_attempts - self.attempts;
        (self, AuthOutcome::Denied { remaining })
    }

    pub fn is_locked(&self, now: u64) -> bool {
        self.lockout_until.is_some_and(|until| now < until)
    }
}

/// Whole minutes until `until`, rounded up.
const fn minutes_until(now: u64, until: u64) -> u64 {
    until.saturating_sub(now).div_ceil(60)
}

/// Current Unix time in seconds.
pub fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}
