use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    str::FromStr,
    sync::OnceLock,
};
use thiserror::Error as ThisError;
use time::{
    OffsetDateTime, PrimitiveDateTime, UtcOffset,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
};

const NANOS_PER_SEC: i64 = 1_000_000_000;

static DATETIME_FORMAT: OnceLock<Vec<BorrowedFormatItem<'static>>> = OnceLock::new();

/// Invariant naive date-time format: `YYYY-MM-DDTHH:MM:SS.NNNNNNNNN`.
pub(crate) fn datetime_format() -> &'static [BorrowedFormatItem<'static>] {
    DATETIME_FORMAT.get_or_init(|| {
        time::format_description::parse_borrowed::<2>(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:9]",
        )
        .unwrap()
    })
}

fn clamp_nanos(nanos: i128) -> i64 {
    nanos.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

///
/// DateTime
///
/// Naive (offset-unaware) wall-clock instant, stored as nanoseconds since
/// the Unix epoch. The `time` crate is used only at the formatting boundary.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[repr(transparent)]
pub struct DateTime(i64);

impl DateTime {
    pub const EPOCH: Self = Self(0);

    #[must_use]
    pub const fn from_unix_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    #[must_use]
    pub const fn unix_nanos(self) -> i64 {
        self.0
    }

    pub(crate) fn to_primitive(self) -> PrimitiveDateTime {
        let odt = OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.0))
            .unwrap_or(OffsetDateTime::UNIX_EPOCH);
        PrimitiveDateTime::new(odt.date(), odt.time())
    }

    pub(crate) fn from_primitive(value: PrimitiveDateTime) -> Self {
        Self(clamp_nanos(value.assume_utc().unix_timestamp_nanos()))
    }
}

impl Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .to_primitive()
            .format(datetime_format())
            .map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl FromStr for DateTime {
    type Err = time::error::Parse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveDateTime::parse(s, datetime_format()).map(Self::from_primitive)
    }
}

///
/// DateTimeOffset
///
/// Offset-aware instant: a UTC instant plus the offset it was observed in.
/// Two values with equal instants but different offsets are distinct.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct DateTimeOffset {
    utc_nanos: i64,
    offset_secs: i32,
}

impl DateTimeOffset {
    pub const EPOCH: Self = Self {
        utc_nanos: 0,
        offset_secs: 0,
    };

    #[must_use]
    pub const fn new(utc_nanos: i64, offset_secs: i32) -> Self {
        Self {
            utc_nanos,
            offset_secs,
        }
    }

    #[must_use]
    pub const fn utc_nanos(self) -> i64 {
        self.utc_nanos
    }

    #[must_use]
    pub const fn offset_secs(self) -> i32 {
        self.offset_secs
    }

    /// Upcast from a naive value; the offset defaults to zero.
    #[must_use]
    pub const fn from_naive(naive: DateTime) -> Self {
        Self {
            utc_nanos: naive.unix_nanos(),
            offset_secs: 0,
        }
    }

    /// Narrow to the naive wall clock observed in this value's offset.
    #[must_use]
    pub const fn to_naive(self) -> DateTime {
        let offset_nanos = (self.offset_secs as i64).saturating_mul(NANOS_PER_SEC);
        DateTime::from_unix_nanos(self.utc_nanos.saturating_add(offset_nanos))
    }

    pub(crate) fn to_offset_date_time(self) -> OffsetDateTime {
        let odt = OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.utc_nanos))
            .unwrap_or(OffsetDateTime::UNIX_EPOCH);
        let offset = UtcOffset::from_whole_seconds(self.offset_secs).unwrap_or(UtcOffset::UTC);
        odt.to_offset(offset)
    }

    pub(crate) fn from_offset_date_time(value: OffsetDateTime) -> Self {
        Self {
            utc_nanos: clamp_nanos(value.unix_timestamp_nanos()),
            offset_secs: value.offset().whole_seconds(),
        }
    }
}

impl Display for DateTimeOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .to_offset_date_time()
            .format(&Rfc3339)
            .map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl FromStr for DateTimeOffset {
    type Err = time::error::Parse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OffsetDateTime::parse(s, &Rfc3339).map(Self::from_offset_date_time)
    }
}

///
/// ParseDurationError
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[error("invalid duration literal; expected decimal seconds with an `s` suffix")]
pub struct ParseDurationError;

///
/// Duration
///
/// Signed span stored as nanoseconds. Canonical text form is decimal
/// seconds with a nine-digit fraction and an `s` suffix, e.g. `1.500000000s`.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[repr(transparent)]
pub struct Duration(i64);

impl Duration {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    #[must_use]
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(NANOS_PER_SEC))
    }

    #[must_use]
    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = i128::from(self.0).unsigned_abs();
        let secs = magnitude / NANOS_PER_SEC.unsigned_abs() as u128;
        let nanos = magnitude % NANOS_PER_SEC.unsigned_abs() as u128;
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{sign}{secs}.{nanos:09}s")
    }
}

impl FromStr for Duration {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.strip_suffix('s').ok_or(ParseDurationError)?;
        let (negative, body) = match body.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, body),
        };

        let (secs_str, frac_str) = match body.split_once('.') {
            Some((secs, frac)) => (secs, Some(frac)),
            None => (body, None),
        };

        if secs_str.is_empty() || !secs_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseDurationError);
        }
        let secs: i64 = secs_str.parse().map_err(|_| ParseDurationError)?;

        let nanos: i64 = match frac_str {
            None => 0,
            Some(frac) => {
                if frac.is_empty() || frac.len() > 9 || !frac.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ParseDurationError);
                }
                let scale = 10_i64.pow(9 - frac.len() as u32);
                let digits: i64 = frac.parse().map_err(|_| ParseDurationError)?;
                digits * scale
            }
        };

        // Accumulate in i128 so the most negative span parses back; the
        // magnitude of i64::MIN does not fit in i64.
        let magnitude = i128::from(secs) * i128::from(NANOS_PER_SEC) + i128::from(nanos);
        let total = if negative { -magnitude } else { magnitude };

        i64::try_from(total).map(Self).map_err(|_| ParseDurationError)
    }
}
