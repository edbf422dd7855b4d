use crate::kind::Kind;
use serde::{Deserialize, Serialize};

///
/// ObjectClass
///
/// The three object-hierarchy classes the engine knows: the shared
/// capability interface, the base class, and the derived class.
/// Compatibility is a hand-written table over these tags, not a host-type
/// subtype relation, so "no automatic downcast" is a data fact.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ObjectClass {
    Capability,
    Base,
    Derived,
}

impl ObjectClass {
    #[must_use]
    pub const fn as_kind(self) -> Kind {
        match self {
            Self::Capability => Kind::Capability,
            Self::Base => Kind::Base,
            Self::Derived => Kind::Derived,
        }
    }

    /// Assignability table. Decisions are made on declared class tags;
    /// upward and same-class assignments only.
    #[must_use]
    pub const fn assignable_to(self, target: Self) -> bool {
        match (self, target) {
            // Both concrete classes implement the capability.
            (Self::Capability | Self::Base | Self::Derived, Self::Capability)
            | (Self::Base | Self::Derived, Self::Base)
            | (Self::Derived, Self::Derived) => true,
            // Every remaining pair is a downcast.
            (Self::Capability, Self::Base | Self::Derived) | (Self::Base, Self::Derived) => false,
        }
    }
}

///
/// ObjectValue
///
/// An object-hierarchy value. `class` is the value's runtime class; the
/// conversion engine never consults it for eligibility. Eligibility is
/// decided on the declared source kind, which is what makes a base-declared
/// value boxing a derived instance non-downcastable.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ObjectValue {
    pub class: ObjectClass,
    pub ident: String,
}

impl ObjectValue {
    #[must_use]
    pub fn new(class: ObjectClass, ident: impl Into<String>) -> Self {
        Self {
            class,
            ident: ident.into(),
        }
    }
}
