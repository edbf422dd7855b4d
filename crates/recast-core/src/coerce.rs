//! Numeric coercion: total over every numeric-family pairing.
//!
//! Bool and Char are degenerate numeric kinds (0/1, code point). Narrowing
//! integer conversions wrap with two's-complement semantics: a raw bit
//! truncation, never a saturating clamp and never a failure.

use crate::{kind::Kind, types::Decimal, value::Value};

///
/// Num
///
/// Canonical bridge representation for one numeric-family value.
///

enum Num {
    Int(i128),
    Float(f64),
    Dec(Decimal),
}

fn bridge(value: &Value) -> Num {
    match value {
        Value::Bool(b) => Num::Int(i128::from(*b)),
        Value::Char(c) => Num::Int(i128::from(u32::from(*c))),
        Value::Int8(v) => Num::Int(i128::from(*v)),
        Value::Int16(v) => Num::Int(i128::from(*v)),
        Value::Int32(v) => Num::Int(i128::from(*v)),
        Value::Int64(v) => Num::Int(i128::from(*v)),
        Value::Uint8(v) => Num::Int(i128::from(*v)),
        Value::Uint16(v) => Num::Int(i128::from(*v)),
        Value::Uint32(v) => Num::Int(i128::from(*v)),
        Value::Uint64(v) => Num::Int(i128::from(*v)),
        Value::Float32(v) => Num::Float(f64::from(*v)),
        Value::Float64(v) => Num::Float(*v),
        Value::Decimal(d) => Num::Dec(*d),
        // Non-numeric variants never reach the coercer; the resolver routes
        // on the numeric-family predicate first.
        _ => Num::Int(0),
    }
}

fn is_nonzero(num: &Num) -> bool {
    match num {
        Num::Int(i) => *i != 0,
        Num::Float(f) => *f != 0.0,
        Num::Dec(d) => !d.is_zero(),
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn code_point(num: &Num) -> u32 {
    match num {
        Num::Int(i) => *i as u32,
        Num::Float(f) => *f as u32,
        Num::Dec(d) => d.to_i128_trunc().unwrap_or(0) as u32,
    }
}

// Integer targets truncate from the bridge exactly as `as` casts do:
// wraparound from integers, saturation-at-bounds from floats, and
// truncation toward zero from decimals.
macro_rules! to_int {
    ($num:expr, $t:ty) => {
        match $num {
            Num::Int(i) => i as $t,
            Num::Float(f) => f as $t,
            Num::Dec(d) => d.to_i128_trunc().unwrap_or(0) as $t,
        }
    };
}

/// Coerce one numeric-family value into another numeric-family kind.
/// Total: every pairing yields a value.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub(crate) fn coerce(value: &Value, target: Kind) -> Value {
    let num = bridge(value);

    match target {
        Kind::Bool => Value::Bool(is_nonzero(&num)),
        Kind::Char => {
            // A truncated code point may land outside the scalar-value
            // range; Rust chars cannot carry surrogates, so those collapse
            // to U+FFFD.
            let code = code_point(&num);
            Value::Char(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
        }
        Kind::Int8 => Value::Int8(to_int!(num, i8)),
        Kind::Int16 => Value::Int16(to_int!(num, i16)),
        Kind::Int32 => Value::Int32(to_int!(num, i32)),
        Kind::Int64 => Value::Int64(to_int!(num, i64)),
        Kind::Uint8 => Value::Uint8(to_int!(num, u8)),
        Kind::Uint16 => Value::Uint16(to_int!(num, u16)),
        Kind::Uint32 => Value::Uint32(to_int!(num, u32)),
        Kind::Uint64 => Value::Uint64(to_int!(num, u64)),
        Kind::Float32 => Value::Float32(match num {
            Num::Int(i) => i as f32,
            Num::Float(f) => f as f32,
            Num::Dec(d) => d.to_f64().unwrap_or(0.0) as f32,
        }),
        Kind::Float64 => Value::Float64(match num {
            Num::Int(i) => i as f64,
            Num::Float(f) => f,
            Num::Dec(d) => d.to_f64().unwrap_or(0.0),
        }),
        Kind::Decimal => Value::Decimal(match num {
            Num::Int(i) => Decimal::from_i128_trunc(i),
            Num::Float(f) => Decimal::from_f64(f).unwrap_or(Decimal::ZERO),
            Num::Dec(d) => d,
        }),
        // Non-numeric targets never reach the coercer.
        _ => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrowing_wraps_with_twos_complement() {
        assert_eq!(coerce(&Value::Int16(256), Kind::Uint8), Value::Uint8(0));
        assert_eq!(coerce(&Value::Int16(257), Kind::Uint8), Value::Uint8(1));
        assert_eq!(coerce(&Value::Int32(-1), Kind::Uint8), Value::Uint8(255));
        assert_eq!(
            coerce(&Value::Uint64(u64::MAX), Kind::Int8),
            Value::Int8(-1)
        );
    }

    #[test]
    fn widening_preserves_value_and_sign() {
        assert_eq!(
            coerce(&Value::Int8(-7), Kind::Int64),
            Value::Int64(-7)
        );
        assert_eq!(
            coerce(&Value::Uint8(200), Kind::Int16),
            Value::Int16(200)
        );
    }

    #[test]
    fn bool_maps_to_zero_and_one() {
        assert_eq!(coerce(&Value::Bool(false), Kind::Int32), Value::Int32(0));
        assert_eq!(coerce(&Value::Bool(true), Kind::Uint64), Value::Uint64(1));
        assert_eq!(
            coerce(&Value::Bool(true), Kind::Decimal),
            Value::Decimal(Decimal::ONE)
        );
    }

    #[test]
    fn nonzero_maps_to_true() {
        assert_eq!(coerce(&Value::Int8(0), Kind::Bool), Value::Bool(false));
        assert_eq!(coerce(&Value::Int8(-3), Kind::Bool), Value::Bool(true));
        assert_eq!(coerce(&Value::Float64(0.0), Kind::Bool), Value::Bool(false));
        assert_eq!(
            coerce(&Value::Decimal(Decimal::new(5, 1)), Kind::Bool),
            Value::Bool(true)
        );
    }

    #[test]
    fn char_is_its_code_point() {
        assert_eq!(coerce(&Value::Uint8(42), Kind::Char), Value::Char('*'));
        assert_eq!(coerce(&Value::Char('A'), Kind::Int64), Value::Int64(65));
        assert_eq!(coerce(&Value::Char('€'), Kind::Uint32), Value::Uint32(8364));
    }

    #[test]
    fn non_scalar_code_points_collapse_to_replacement() {
        // 0xD800 is a surrogate and not a valid char.
        assert_eq!(
            coerce(&Value::Uint32(0xD800), Kind::Char),
            Value::Char(char::REPLACEMENT_CHARACTER)
        );
    }

    #[test]
    fn float_to_int_truncates() {
        assert_eq!(coerce(&Value::Float64(2.9), Kind::Int32), Value::Int32(2));
        assert_eq!(
            coerce(&Value::Float64(-2.9), Kind::Int32),
            Value::Int32(-2)
        );
    }

    #[test]
    fn decimal_cross_conversions() {
        assert_eq!(
            coerce(&Value::Decimal(Decimal::new(-195, 1)), Kind::Int8),
            Value::Int8(-19)
        );
        assert_eq!(
            coerce(&Value::Int64(42), Kind::Decimal),
            Value::Decimal(Decimal::new(42, 0))
        );
        assert_eq!(
            coerce(&Value::Decimal(Decimal::new(25, 1)), Kind::Float64),
            Value::Float64(2.5)
        );
    }

    #[test]
    fn non_finite_floats_reach_decimal_as_zero() {
        assert_eq!(
            coerce(&Value::Float64(f64::NAN), Kind::Decimal),
            Value::Decimal(Decimal::ZERO)
        );
    }
}
