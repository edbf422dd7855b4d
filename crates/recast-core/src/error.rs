use crate::kind::Kind;
use std::fmt;
use thiserror::Error as ThisError;

///
/// Refusal
///
/// Diagnostic classification of a failed conversion. At the non-strict
/// boundary every refusal collapses to the same failed outcome; the tag only
/// surfaces on the error raised by the strict entry point.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Refusal {
    /// No rule exists for the kind pairing, regardless of value.
    Incompatible,
    /// The textual form did not match the target kind's grammar.
    Parse,
    /// The target is a strictly more specific object class than the
    /// source's declared class.
    Downcast,
    /// The binary codec was handed a byte sequence of the wrong length.
    Shape,
}

impl fmt::Display for Refusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Incompatible => "kind-incompatible",
            Self::Parse => "parse-failure",
            Self::Downcast => "downcast-rejected",
            Self::Shape => "shape-mismatch",
        };
        f.write_str(label)
    }
}

///
/// ConvertError
///
/// The single error type raised by the strict entry point. Carries the
/// attempted pairing, the refusal tag, and the rendered source value for
/// top-level logging. The non-strict entry points never construct it.
///

#[derive(Clone, Debug, ThisError, Eq, PartialEq)]
#[error("cannot convert {source_kind} to {target_kind} ({refusal}): {rendered}")]
pub struct ConvertError {
    pub source_kind: Kind,
    pub target_kind: Kind,
    pub refusal: Refusal,
    /// Debug rendering of the literal source value ("null" when absent).
    pub rendered: String,
}
