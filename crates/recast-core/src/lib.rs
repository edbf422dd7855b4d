//! Core engine for recast: the closed kind/value model, the conversion
//! resolver, the primitive codec, and the numeric coercion rules.
//!
//! Every operation is a pure function over immutable inputs; the rule set
//! is compiled pattern matching, so there is nothing to initialize and
//! nothing to guard across threads.

#[macro_use]
pub(crate) mod kind_registry;

mod codec;
mod coerce;
mod nullness;

pub mod context;
pub mod convert;
pub mod error;
pub mod kind;
pub mod traits;
pub mod types;
pub mod value;

///
/// Prelude
///
/// Domain vocabulary only; no codec or coercion internals.
///

pub mod prelude {
    pub use crate::{
        context::{ConvertContext, CultureHandle},
        convert::{Outcome, convert, convert_value, try_convert, try_convert_value},
        error::{ConvertError, Refusal},
        kind::{Kind, KindSpec},
        traits::FieldValue,
        value::{EnumValue, ObjectClass, ObjectValue, Value},
    };
}
