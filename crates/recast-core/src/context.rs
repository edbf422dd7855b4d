use serde::{Deserialize, Serialize};

///
/// CultureHandle
///
/// Opaque identifier for a caller-supplied format/culture provider
/// (e.g. "en-US"). The engine threads it through the codec but owns no
/// locale tables; rendering stays invariant unless a codec consumes it.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct CultureHandle(String);

impl CultureHandle {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

///
/// ConvertContext
///
/// Immutable per-call context: an optional format specifier and an optional
/// culture handle. Kinds that do not consume a supplied field ignore it;
/// supplying one is never an error by itself.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ConvertContext {
    pub format: Option<String>,
    pub culture: Option<CultureHandle>,
}

impl ConvertContext {
    /// The default context: invariant textual representations.
    #[must_use]
    pub const fn invariant() -> Self {
        Self {
            format: None,
            culture: None,
        }
    }

    #[must_use]
    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: Some(format.into()),
            culture: None,
        }
    }

    #[must_use]
    pub fn with_culture(culture: CultureHandle) -> Self {
        Self {
            format: None,
            culture: Some(culture),
        }
    }

    /// Attach a format specifier to an existing context.
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}
