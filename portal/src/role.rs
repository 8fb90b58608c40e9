//! Role identifiers carried in token claims.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;

/// Spelling of the read-only role used by one historical login flow. The
/// backend policy table uses `end_user_read_only`; both are accepted here
/// until the backend contract settles on one.
pub const LEGACY_READ_ONLY: &str = "end_user_readonly";

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Admin,
    EndUserManager,
    EndUserReadOnly,
    /// Any role this client does not recognize, kept verbatim.
    Other(String),
}

impl Role {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "admin" => Self::Admin,
            "end_user_manager" => Self::EndUserManager,
            "end_user_read_only" => Self::EndUserReadOnly,
            LEGACY_READ_ONLY => {
                tracing::debug!(role = raw, "legacy read-only role spelling accepted");
                Self::EndUserReadOnly
            }
            other => Self::Other(other.to_owned()),
        }
    }

    /// Canonical spelling.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::EndUserManager => "end_user_manager",
            Self::EndUserReadOnly => "end_user_read_only",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this role opens the end-user area.
    #[must_use]
    pub fn is_end_user(&self) -> bool {
        matches!(self, Self::EndUserManager | Self::EndUserReadOnly)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
