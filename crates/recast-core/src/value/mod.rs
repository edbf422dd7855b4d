mod enumval;
mod object;


use crate::{
    kind::Kind,
    types::{DateTime, DateTimeOffset, Decimal, Duration, TypeHandle},
};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

// re-exports
pub use enumval::EnumValue;
pub use object::{ObjectClass, ObjectValue};

///
/// Value
///
/// Closed runtime value union: one variant per convertible kind. The three
/// object-hierarchy kinds share the `Object` variant; their declared kind
/// travels separately in the `KindSpec` handed to the resolver.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Value {
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
    Decimal(Decimal),
    Char(char),
    Bytes(Vec<u8>),
    Text(String),
    DateTime(DateTime),
    DateTimeOffset(DateTimeOffset),
    Duration(Duration),
    Uuid(Uuid),
    Url(Url),
    Enum(EnumValue),
    TypeName(TypeHandle),
    Object(ObjectValue),
}

impl Value {
    /// The kind tag of this value. For `Object` this is the runtime class's
    /// kind, which may be more specific than the declared kind.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Bool(_) => Kind::Bool,
            Self::Int8(_) => Kind::Int8,
            Self::Int16(_) => Kind::Int16,
            Self::Int32(_) => Kind::Int32,
            Self::Int64(_) => Kind::Int64,
            Self::Uint8(_) => Kind::Uint8,
            Self::Uint16(_) => Kind::Uint16,
            Self::Uint32(_) => Kind::Uint32,
            Self::Uint64(_) => Kind::Uint64,
            Self::Float32(_) => Kind::Float32,
            Self::Float64(_) => Kind::Float64,
            Self::Decimal(_) => Kind::Decimal,
            Self::Char(_) => Kind::Char,
            Self::Bytes(_) => Kind::Bytes,
            Self::Text(_) => Kind::Text,
            Self::DateTime(_) => Kind::DateTime,
            Self::DateTimeOffset(_) => Kind::DateTimeOffset,
            Self::Duration(_) => Kind::Duration,
            Self::Uuid(_) => Kind::Uuid,
            Self::Url(_) => Kind::Url,
            Self::Enum(_) => Kind::Enum,
            Self::TypeName(_) => Kind::TypeName,
            Self::Object(v) => v.class.as_kind(),
        }
    }

    /// Returns true if the value is one of the numeric-family variants.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.kind().is_numeric_family()
    }

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_bytes(&self) -> Option<&[u8]> {
        if let Self::Bytes(b) = self {
            Some(b.as_slice())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_object(&self) -> Option<&ObjectValue> {
        if let Self::Object(o) = self {
            Some(o)
        } else {
            None
        }
    }
}

impl Kind {
    /// The kind's default payload for absent-source conversions.
    ///
    /// Value kinds yield their zero value; reference kinds yield `None`
    /// (the absent representation). Mirrors `has_zero_default`.
    #[must_use]
    pub fn default_value(self) -> Option<Value> {
        match self {
            Self::Bool => Some(Value::Bool(false)),
            Self::Int8 => Some(Value::Int8(0)),
            Self::Int16 => Some(Value::Int16(0)),
            Self::Int32 => Some(Value::Int32(0)),
            Self::Int64 => Some(Value::Int64(0)),
            Self::Uint8 => Some(Value::Uint8(0)),
            Self::Uint16 => Some(Value::Uint16(0)),
            Self::Uint32 => Some(Value::Uint32(0)),
            Self::Uint64 => Some(Value::Uint64(0)),
            Self::Float32 => Some(Value::Float32(0.0)),
            Self::Float64 => Some(Value::Float64(0.0)),
            Self::Decimal => Some(Value::Decimal(Decimal::ZERO)),
            Self::Char => Some(Value::Char('\0')),
            Self::DateTime => Some(Value::DateTime(DateTime::EPOCH)),
            Self::DateTimeOffset => Some(Value::DateTimeOffset(DateTimeOffset::EPOCH)),
            Self::Duration => Some(Value::Duration(Duration::ZERO)),
            Self::Uuid => Some(Value::Uuid(Uuid::nil())),
            Self::Bytes
            | Self::Text
            | Self::Url
            | Self::Enum
            | Self::TypeName
            | Self::Capability
            | Self::Base
            | Self::Derived => None,
        }
    }
}

/// Implements `From<T> for Value` for simple conversions.
macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    bool           => Bool,
    i8             => Int8,
    i16            => Int16,
    i32            => Int32,
    i64            => Int64,
    u8             => Uint8,
    u16            => Uint16,
    u32            => Uint32,
    u64            => Uint64,
    f32            => Float32,
    f64            => Float64,
    Decimal        => Decimal,
    char           => Char,
    Vec<u8>        => Bytes,
    &[u8]          => Bytes,
    String         => Text,
    &str           => Text,
    DateTime       => DateTime,
    DateTimeOffset => DateTimeOffset,
    Duration       => Duration,
    Uuid           => Uuid,
    Url            => Url,
    EnumValue      => Enum,
    TypeHandle     => TypeName,
    ObjectValue    => Object,
}
