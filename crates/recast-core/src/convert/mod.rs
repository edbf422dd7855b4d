//! Conversion resolver and public entry points.
//!
//! The resolver is a priority-ordered rule list over kind pairs. The order
//! is load-bearing: identity first, then the numeric family, then textual
//! formatting/parsing, then the binary and temporal adapters, and the
//! object-hierarchy check deliberately last so a kind that also satisfies
//! an earlier rule never accidentally reaches the assignability table.

#[cfg(test)]
mod tests;

use crate::{
    codec,
    coerce,
    context::ConvertContext,
    error::{ConvertError, Refusal},
    kind::{Kind, KindSpec},
    nullness,
    traits::FieldValue,
    types::DateTimeOffset,
    value::Value,
};

///
/// Outcome
///
/// Result of one conversion attempt. `Converted(None)` is a successful
/// absent result (optional target, or a reference kind's default); callers
/// must not inspect any payload on `Refused`.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Converted(Option<Value>),
    Refused(Refusal),
}

impl Outcome {
    #[must_use]
    pub const fn is_converted(&self) -> bool {
        matches!(self, Self::Converted(_))
    }

    /// The converted payload, or `None` when the conversion refused.
    #[must_use]
    pub fn into_converted(self) -> Option<Option<Value>> {
        match self {
            Self::Converted(value) => Some(value),
            Self::Refused(_) => None,
        }
    }
}

/// Non-strict entry point: never errors, never panics.
#[must_use]
pub fn try_convert_value(
    source: KindSpec,
    value: Option<&Value>,
    target: KindSpec,
    ctx: &ConvertContext,
) -> Outcome {
    nullness::resolve_optional(source, value, target, ctx)
}

/// Strict entry point: a refused conversion becomes a typed error carrying
/// the pairing, the refusal tag, and the rendered source value.
pub fn convert_value(
    source: KindSpec,
    value: Option<&Value>,
    target: KindSpec,
    ctx: &ConvertContext,
) -> Result<Option<Value>, ConvertError> {
    match try_convert_value(source, value, target, ctx) {
        Outcome::Converted(converted) => Ok(converted),
        Outcome::Refused(refusal) => Err(ConvertError {
            source_kind: source.kind,
            target_kind: target.kind,
            refusal,
            rendered: value.map_or_else(|| "null".to_string(), |v| format!("{v:?}")),
        }),
    }
}

/// Generic non-strict entry point over statically-kinded Rust types.
/// `None` is a refused conversion; optional targets are `Option<T>`.
#[must_use]
pub fn try_convert<S: FieldValue, T: FieldValue>(source: &S, ctx: &ConvertContext) -> Option<T> {
    let value = source.to_value();
    try_convert_value(S::SPEC, value.as_ref(), T::SPEC, ctx)
        .into_converted()
        .and_then(T::from_value)
}

/// Generic strict entry point over statically-kinded Rust types.
pub fn convert<S: FieldValue, T: FieldValue>(
    source: &S,
    ctx: &ConvertContext,
) -> Result<T, ConvertError> {
    let value = source.to_value();
    let converted = convert_value(S::SPEC, value.as_ref(), T::SPEC, ctx)?;

    // A shape drift between a kind and its Rust carrier is an engine bug,
    // not a caller failure; surface it as an incompatible pairing.
    T::from_value(converted).ok_or(ConvertError {
        source_kind: S::SPEC.kind,
        target_kind: T::SPEC.kind,
        refusal: Refusal::Incompatible,
        rendered: value.map_or_else(|| "null".to_string(), |v| format!("{v:?}")),
    })
}

/// Resolve one present value against the unwrapped kind pair.
pub(crate) fn resolve(
    source: Kind,
    value: &Value,
    target: Kind,
    ctx: &ConvertContext,
) -> Result<Value, Refusal> {
    // 1. Identity.
    if source == target {
        return Ok(value.clone());
    }

    // 2. Numeric family, Bool and Char included.
    if source.is_numeric_family() && target.is_numeric_family() {
        return Ok(coerce::coerce(value, target));
    }

    // 3. Render to text. Object kinds have no rendering and refuse here.
    if target == Kind::Text {
        return if source.is_formatable() {
            codec::format_value(value, ctx).map(Value::Text)
        } else {
            Err(Refusal::Incompatible)
        };
    }

    // 4. Parse from text.
    if source == Kind::Text && target.is_parseable() {
        let text = value.as_text().ok_or(Refusal::Incompatible)?;
        return codec::parse_text(text, target, ctx);
    }

    // 5. The single binary pairing, both directions.
    // 6. The naive/offset temporal adapters.
    match (source, target, value) {
        (Kind::Uuid, Kind::Bytes, Value::Uuid(id)) => {
            return Ok(Value::Bytes(codec::uuid_to_bytes(*id)));
        }
        (Kind::Bytes, Kind::Uuid, Value::Bytes(bytes)) => {
            return codec::bytes_to_uuid(bytes).map(Value::Uuid);
        }
        (Kind::DateTime, Kind::DateTimeOffset, Value::DateTime(dt)) => {
            return Ok(Value::DateTimeOffset(DateTimeOffset::from_naive(*dt)));
        }
        (Kind::DateTimeOffset, Kind::DateTime, Value::DateTimeOffset(dto)) => {
            return Ok(Value::DateTime(dto.to_naive()));
        }
        _ => {}
    }

    // 7. Object hierarchy, decided on declared kind tags only.
    if let Some(target_class) = target.object_class() {
        return match source.object_class() {
            Some(source_class) if source_class.assignable_to(target_class) => Ok(value.clone()),
            Some(_) => Err(Refusal::Downcast),
            None => Err(Refusal::Incompatible),
        };
    }

    Err(Refusal::Incompatible)
}
