//! Facade over the recast engine.
//!
//! ## Crate layout
//! - `core`: the closed kind/value model, the conversion resolver, the
//!   primitive codec, and the numeric coercion rules.
//!
//! The `prelude` module mirrors the runtime surface callers use directly.

pub use recast_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use core::error::ConvertError;

///
/// Prelude
/// using _ would bring traits into scope, but the single trait here is
/// usually named at the call site
///

pub mod prelude {
    pub use crate::core::{
        context::{ConvertContext, CultureHandle},
        convert::{Outcome, convert, convert_value, try_convert, try_convert_value},
        error::{ConvertError, Refusal},
        kind::{Kind, KindFamily, KindSpec},
        traits::FieldValue,
        types::{DateTime, DateTimeOffset, Decimal, Duration, TypeHandle},
        value::{EnumValue, ObjectClass, ObjectValue, Value},
    };
}
