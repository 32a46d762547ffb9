//! Value objects
//!
//! 識別子と TTL をプリミティブ型のまま扱わず、生成時に検証する。

use std::fmt;

use chrono::TimeDelta;

use super::{error::ValueObjectError, policy::DEFAULT_TTL_SECS};

/// Room identifier (non-empty opaque string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::EmptyRoomId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// User identifier (non-empty opaque string, unique within a room)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::EmptyUserId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Time-to-live of a presence entry. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ttl(TimeDelta);

impl Ttl {
    pub fn new(value: TimeDelta) -> Result<Self, ValueObjectError> {
        if value <= TimeDelta::zero() {
            return Err(ValueObjectError::NonPositiveTtl(value.num_seconds()));
        }
        Ok(Self(value))
    }

    pub fn from_secs(secs: i64) -> Result<Self, ValueObjectError> {
        let delta = TimeDelta::try_seconds(secs).ok_or(ValueObjectError::TtlOutOfRange(secs))?;
        Self::new(delta)
    }

    pub fn as_delta(&self) -> TimeDelta {
        self.0
    }

    pub fn as_secs(&self) -> i64 {
        self.0.num_seconds()
    }
}

impl Default for Ttl {
    fn default() -> Self {
        Self(TimeDelta::seconds(DEFAULT_TTL_SECS))
    }
}
