//! Identifiers placed into endpoint paths.
//!
//! The backend addresses most records by integer id, but the application
//! delete route also accepts an opaque key (the applicant's e-mail). The two
//! are kept as separate types so a call-site has to say which one it means.

use std::{borrow::Cow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;

/// Integer primary key of a backend record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for RecordId {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|e| ApiError::InvalidIdentifier(format!("{s:?} is not an integer id: {e}")))
    }
}

/// Reference to a job application in a delete path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationRef {
    Id(RecordId),
    /// Free-form key, percent-encoded before it is placed in the path.
    Key(String),
}

impl ApplicationRef {
    pub fn path_segment(&self) -> Cow<'_, str> {
        match self {
            Self::Id(id) => Cow::Owned(id.to_string()),
            Self::Key(key) => urlencoding::encode(key),
        }
    }
}

impl From<RecordId> for ApplicationRef {
    fn from(id: RecordId) -> Self {
        Self::Id(id)
    }
}

impl From<i64> for ApplicationRef {
    fn from(id: i64) -> Self {
        Self::Id(RecordId(id))
    }
}

impl From<&str> for ApplicationRef {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for ApplicationRef {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}
