mod decimal;
mod handle;
mod temporal;

pub use decimal::Decimal;
pub use handle::{ParseTypePathError, TypeHandle};
pub(crate) use temporal::datetime_format;
pub use temporal::{DateTime, DateTimeOffset, Duration, ParseDurationError};
