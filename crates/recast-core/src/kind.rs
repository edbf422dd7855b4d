use crate::value::ObjectClass;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// KindFamily
///
/// Coarse classification used only for rule routing and diagnostics.
/// Capability flags (parseable, formatable, defaults) are registry-driven;
/// do not infer them from the family.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KindFamily {
    Numeric,    // Bool, Char, ints, floats, Decimal
    Textual,    // Text
    Binary,     // Bytes
    Temporal,   // DateTime, DateTimeOffset, Duration
    Identifier, // Uuid
    Locator,    // Url
    Enumerated, // Enum(variant, repr)
    Reflective, // TypeName
    Object,     // Capability, Base, Derived
}

///
/// Kind
///
/// Closed tag identifying every shape the engine can convert between.
/// The rule set over these tags is fixed at compile time; there is no
/// runtime registration surface.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Kind {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    Decimal,
    Char,
    Bytes,
    Text,
    DateTime,
    DateTimeOffset,
    Duration,
    Uuid,
    Url,
    Enum,
    TypeName,
    Capability,
    Base,
    Derived,
}

// Local helpers to expand the kind registry into match arms.
macro_rules! kind_label_from_registry {
    ( @args $kind:expr; @entries $( ($name:ident, $label:literal, $family:expr, parseable = $parseable:expr, formatable = $formatable:expr, zero_default = $zero:expr) ),* $(,)? ) => {
        match $kind {
            $( Kind::$name => $label, )*
        }
    };
}

macro_rules! kind_family_from_registry {
    ( @args $kind:expr; @entries $( ($name:ident, $label:literal, $family:expr, parseable = $parseable:expr, formatable = $formatable:expr, zero_default = $zero:expr) ),* $(,)? ) => {
        match $kind {
            $( Kind::$name => $family, )*
        }
    };
}

macro_rules! kind_parseable_from_registry {
    ( @args $kind:expr; @entries $( ($name:ident, $label:literal, $family:expr, parseable = $parseable:expr, formatable = $formatable:expr, zero_default = $zero:expr) ),* $(,)? ) => {
        match $kind {
            $( Kind::$name => $parseable, )*
        }
    };
}

macro_rules! kind_formatable_from_registry {
    ( @args $kind:expr; @entries $( ($name:ident, $label:literal, $family:expr, parseable = $parseable:expr, formatable = $formatable:expr, zero_default = $zero:expr) ),* $(,)? ) => {
        match $kind {
            $( Kind::$name => $formatable, )*
        }
    };
}

macro_rules! kind_zero_default_from_registry {
    ( @args $kind:expr; @entries $( ($name:ident, $label:literal, $family:expr, parseable = $parseable:expr, formatable = $formatable:expr, zero_default = $zero:expr) ),* $(,)? ) => {
        match $kind {
            $( Kind::$name => $zero, )*
        }
    };
}

impl Kind {
    /// Every kind, in declaration order. Handy for exhaustive enumeration
    /// in rule tables and tests.
    pub const ALL: [Self; 25] = [
        Self::Bool,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Uint8,
        Self::Uint16,
        Self::Uint32,
        Self::Uint64,
        Self::Float32,
        Self::Float64,
        Self::Decimal,
        Self::Char,
        Self::Bytes,
        Self::Text,
        Self::DateTime,
        Self::DateTimeOffset,
        Self::Duration,
        Self::Uuid,
        Self::Url,
        Self::Enum,
        Self::TypeName,
        Self::Capability,
        Self::Base,
        Self::Derived,
    ];

    /// Stable human-readable kind label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        kind_registry!(kind_label_from_registry, self)
    }

    /// Returns the routing family for this kind.
    #[must_use]
    pub const fn family(self) -> KindFamily {
        kind_registry!(kind_family_from_registry, self)
    }

    /// Returns true for the numeric coercion family (Bool and Char included
    /// as degenerate numeric kinds).
    #[must_use]
    pub const fn is_numeric_family(self) -> bool {
        matches!(self.family(), KindFamily::Numeric)
    }

    /// Returns true when a textual source can parse into this kind.
    #[must_use]
    pub const fn is_parseable(self) -> bool {
        kind_registry!(kind_parseable_from_registry, self)
    }

    /// Returns true when a value of this kind has a textual rendering.
    #[must_use]
    pub const fn is_formatable(self) -> bool {
        kind_registry!(kind_formatable_from_registry, self)
    }

    /// Returns true when the kind has a zero value (value kinds).
    /// Reference kinds default to absent instead.
    #[must_use]
    pub const fn has_zero_default(self) -> bool {
        kind_registry!(kind_zero_default_from_registry, self)
    }

    /// Maps the three object-hierarchy kinds to their class tag.
    #[must_use]
    pub const fn object_class(self) -> Option<ObjectClass> {
        match self {
            Self::Capability => Some(ObjectClass::Capability),
            Self::Base => Some(ObjectClass::Base),
            Self::Derived => Some(ObjectClass::Derived),
            _ => None,
        }
    }

    /// Static compatibility predicate: true when the (source, target)
    /// pairing can succeed for at least one value.
    ///
    /// The nullability layer consults this to decide whether an absent
    /// source converts to a non-optional target; it must stay aligned with
    /// the resolver's rule order.
    #[must_use]
    pub const fn can_convert(self, target: Self) -> bool {
        if self as u8 == target as u8 {
            return true;
        }
        if self.is_numeric_family() && target.is_numeric_family() {
            return true;
        }
        if matches!(target, Self::Text) {
            return self.is_formatable();
        }
        if matches!(self, Self::Text) {
            return target.is_parseable();
        }
        if matches!(
            (self, target),
            (Self::Uuid, Self::Bytes) | (Self::Bytes, Self::Uuid)
        ) {
            return true;
        }
        if matches!(
            (self, target),
            (Self::DateTime, Self::DateTimeOffset) | (Self::DateTimeOffset, Self::DateTime)
        ) {
            return true;
        }
        match (self.object_class(), target.object_class()) {
            (Some(source), Some(target)) => source.assignable_to(target),
            _ => false,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

///
/// KindSpec
///
/// A kind plus its declared optionality. Optionality never changes the
/// kind's identity; it only changes null handling.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct KindSpec {
    pub kind: Kind,
    pub optional: bool,
}

impl KindSpec {
    #[must_use]
    pub const fn required(kind: Kind) -> Self {
        Self {
            kind,
            optional: false,
        }
    }

    #[must_use]
    pub const fn optional(kind: Kind) -> Self {
        Self {
            kind,
            optional: true,
        }
    }
}

impl fmt::Display for KindSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.optional {
            write!(f, "{}?", self.kind)
        } else {
            self.kind.fmt(f)
        }
    }
}
