use derive_more::{Display, FromStr};
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal as WrappedDecimal;
use serde::{Deserialize, Serialize};

///
/// Decimal
///
/// High-precision decimal kind. Thin wrapper so the engine owns its
/// conversion surface; arithmetic beyond what conversion needs is not
/// exposed.
///

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    FromStr,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Decimal(WrappedDecimal);

impl Decimal {
    pub const ZERO: Self = Self(WrappedDecimal::ZERO);
    pub const ONE: Self = Self(WrappedDecimal::ONE);

    /// Construct from mantissa and scale (value = num * 10^-scale).
    #[must_use]
    pub fn new(num: i64, scale: u32) -> Self {
        Self(WrappedDecimal::new(num, scale))
    }

    /// Lossless conversion from any integer the engine carries.
    /// Returns `ZERO` when the magnitude exceeds the 96-bit mantissa.
    #[must_use]
    pub fn from_i128_trunc(value: i128) -> Self {
        WrappedDecimal::from_i128(value).map_or(Self::ZERO, Self)
    }

    /// Conversion from a float; `None` for non-finite inputs.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        WrappedDecimal::from_f64(value).map(Self)
    }

    /// Conversion from a float; `None` for non-finite inputs.
    #[must_use]
    pub fn from_f32(value: f32) -> Option<Self> {
        WrappedDecimal::from_f32(value).map(Self)
    }

    /// Nearest-f64 rendering of the decimal value.
    #[must_use]
    pub fn to_f64(self) -> Option<f64> {
        self.0.to_f64()
    }

    /// Integer part, truncated toward zero.
    #[must_use]
    pub fn to_i128_trunc(self) -> Option<i128> {
        self.0.trunc().to_i128()
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}
