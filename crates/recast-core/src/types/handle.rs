use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    str::FromStr,
};
use thiserror::Error as ThisError;

///
/// ParseTypePathError
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[error("invalid type path; expected `::`-separated identifiers")]
pub struct ParseTypePathError;

///
/// TypeHandle
///
/// Reflective type handle carried as an opaque, syntactically validated
/// path (`module::Type`). Resolution against a real type system is an
/// external collaborator's concern; the engine only converts handle ↔ text.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct TypeHandle(String);

impl TypeHandle {
    /// Validate and wrap a `::`-separated identifier path.
    #[must_use]
    pub fn new(path: &str) -> Option<Self> {
        if path.split("::").all(is_identifier) && !path.is_empty() {
            Some(Self(path.to_string()))
        } else {
            None
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.0
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut bytes = segment.bytes();
    bytes
        .next()
        .is_some_and(|b| b.is_ascii_alphabetic() || b == b'_')
        && bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

impl Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TypeHandle {
    type Err = ParseTypePathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or(ParseTypePathError)
    }
}
