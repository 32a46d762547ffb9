//! TTL policy applied at the request boundary.

use super::{error::ValueObjectError, value_object::Ttl};

/// Default presence TTL in seconds (5 minutes).
pub const DEFAULT_TTL_SECS: i64 = 300;

/// Decides which TTL a check-in or refresh uses.
///
/// - check-in: always the configured default
/// - refresh: the requested seconds when positive, otherwise the default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtlPolicy {
    default_ttl: Ttl,
}

impl TtlPolicy {
    pub fn new(default_ttl: Ttl) -> Self {
        Self { default_ttl }
    }

    pub fn from_default_secs(secs: i64) -> Result<Self, ValueObjectError> {
        Ok(Self::new(Ttl::from_secs(secs)?))
    }

    pub fn default_ttl(&self) -> Ttl {
        self.default_ttl
    }

    pub fn check_in_ttl(&self) -> Ttl {
        self.default_ttl
    }

    pub fn refresh_ttl(&self, requested_secs: Option<i64>) -> Result<Ttl, ValueObjectError> {
        match requested_secs {
            Some(secs) if secs > 0 => Ttl::from_secs(secs),
            _ => Ok(self.default_ttl),
        }
    }
}

impl Default for TtlPolicy {
    fn default() -> Self {
        Self::new(Ttl::default())
    }
}
