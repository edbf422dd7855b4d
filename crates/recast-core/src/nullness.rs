//! Nullability layer: unwraps optional shapes before the resolver runs and
//! applies the null-propagation rules.

use crate::{
    context::ConvertContext,
    convert::{self, Outcome},
    error::Refusal,
    kind::KindSpec,
    value::Value,
};

/// Resolve a possibly-absent source against a possibly-optional target.
///
/// - Absent source, optional target: absent, unconditionally.
/// - Absent source, required target: the target kind's default, but only
///   when the kind pairing is statically compatible; an absent value of a
///   kind that could never convert still refuses.
/// - Present source: delegate to the resolver on the unwrapped kinds.
pub(crate) fn resolve_optional(
    source: KindSpec,
    value: Option<&Value>,
    target: KindSpec,
    ctx: &ConvertContext,
) -> Outcome {
    let Some(value) = value else {
        if target.optional {
            return Outcome::Converted(None);
        }
        return if source.kind.can_convert(target.kind) {
            Outcome::Converted(target.kind.default_value())
        } else {
            Outcome::Refused(Refusal::Incompatible)
        };
    };

    match convert::resolve(source.kind, value, target.kind, ctx) {
        Ok(converted) => Outcome::Converted(Some(converted)),
        Err(refusal) => Outcome::Refused(refusal),
    }
}
