//! Player identity: 3-character arcade-style IDs and the active session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Required identifier length.
pub const ID_LENGTH: usize = 3;

/// A validated player identifier: exactly three uppercase ASCII letters or
/// digits. Construction goes through [`IdentitySession::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why an entered identifier was rejected. Recoverable: the entry screen
/// shows the message and asks again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityError {
    WrongLength,
    InvalidCharacters,
}

impl IdentityError {
    /// User-facing message for the identity entry screen.
    pub fn message(&self) -> &'static str {
        match self {
            IdentityError::WrongLength => "ID must be exactly 3 characters.",
            IdentityError::InvalidCharacters => "ID must contain only letters and numbers.",
        }
    }
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for IdentityError {}

/// Holds the currently signed-in identifier, if any.
///
/// Purely in-memory; never reads or writes the ranking store.
#[derive(Debug, Default)]
pub struct IdentitySession {
    current: Option<UserId>,
}

impl IdentitySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize raw input (trim, uppercase) and, if it is a well-formed
    /// identifier, make it the active one.
    pub fn validate(&mut self, raw: &str) -> Result<UserId, IdentityError> {
        let normalized = raw.trim().to_uppercase();
        if normalized.chars().count() != ID_LENGTH {
            return Err(IdentityError::WrongLength);
        }
        if !normalized
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(IdentityError::InvalidCharacters);
        }
        let id = UserId(normalized);
        self.current = Some(id.clone());
        Ok(id)
    }

    /// Sign out. Only called on explicit exit to the identity screen.
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&UserId> {
        self.current.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.current.is_some()
    }
}
