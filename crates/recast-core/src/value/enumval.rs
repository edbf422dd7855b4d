use serde::{Deserialize, Serialize};

///
/// EnumValue
///
/// Enumerated value; `path` is optional to allow strict (typed) or loose
/// matching, and `repr` carries the underlying discriminant when known.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EnumValue {
    pub path: Option<String>,
    pub variant: String,
    pub repr: Option<i64>,
}

impl EnumValue {
    #[must_use]
    pub fn new(variant: &str, path: Option<&str>) -> Self {
        Self {
            path: path.map(ToString::to_string),
            variant: variant.to_string(),
            repr: None,
        }
    }

    /// Build a strict enum value bound to a type path.
    #[must_use]
    pub fn strict(path: &str, variant: &str) -> Self {
        Self::new(variant, Some(path))
    }

    /// Build an enum value that ignores the path for loose matching.
    #[must_use]
    pub fn loose(variant: &str) -> Self {
        Self::new(variant, None)
    }

    /// Attach the underlying discriminant.
    #[must_use]
    pub const fn with_repr(mut self, repr: i64) -> Self {
        self.repr = Some(repr);
        self
    }
}
