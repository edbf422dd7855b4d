use crate::{
    kind::{Kind, KindSpec},
    types::{DateTime, DateTimeOffset, Decimal, Duration, TypeHandle},
    value::{EnumValue, Value},
};
use url::Url;
use uuid::Uuid;

///
/// FieldValue
///
/// Bridge between statically-typed Rust carriers and the engine's runtime
/// `Value` union. `SPEC` is the declared shape the carrier converts as;
/// `Option<T>` layers optionality on top of `T`'s spec.
///

pub trait FieldValue: Sized {
    const SPEC: KindSpec;

    fn to_value(&self) -> Option<Value>;

    /// Rebuild the carrier from an engine payload. `None` means the payload
    /// did not match this carrier's shape.
    fn from_value(value: Option<Value>) -> Option<Self>;
}

/// Implements `FieldValue` for carriers mapping onto a single variant.
macro_rules! impl_field_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl FieldValue for $type {
                const SPEC: KindSpec = KindSpec::required(Kind::$variant);

                #[allow(clippy::clone_on_copy)]
                fn to_value(&self) -> Option<Value> {
                    Some(Value::$variant(self.clone()))
                }

                fn from_value(value: Option<Value>) -> Option<Self> {
                    match value {
                        Some(Value::$variant(v)) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_field_value! {
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
    String         => Text,
    DateTime       => DateTime,
    DateTimeOffset => DateTimeOffset,
    Duration       => Duration,
    Uuid           => Uuid,
    Url            => Url,
    EnumValue      => Enum,
    TypeHandle     => TypeName,
}

impl<T: FieldValue> FieldValue for Option<T> {
    const SPEC: KindSpec = KindSpec::optional(T::SPEC.kind);

    fn to_value(&self) -> Option<Value> {
        self.as_ref().and_then(FieldValue::to_value)
    }

    fn from_value(value: Option<Value>) -> Option<Self> {
        match value {
            None => Some(None),
            some => T::from_value(some).map(Some),
        }
    }
}
