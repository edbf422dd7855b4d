use crate::{
    codec::binary,
    context::ConvertContext,
    error::Refusal,
    kind::Kind,
    types::{DateTime, DateTimeOffset, Decimal, Duration, TypeHandle, datetime_format},
    value::{EnumValue, Value},
};
use std::str::FromStr;
use time::{OffsetDateTime, PrimitiveDateTime, format_description::well_known::Rfc3339};
use url::Url;
use uuid::Uuid;

/// Render one value in its textual form. Defined for every non-object
/// kind; the object hierarchy has no textual rendering.
pub(crate) fn format_value(value: &Value, ctx: &ConvertContext) -> Result<String, Refusal> {
    match value {
        Value::Bool(b) => Ok(if *b { "True" } else { "False" }.to_string()),
        Value::Int8(v) => Ok(v.to_string()),
        Value::Int16(v) => Ok(v.to_string()),
        Value::Int32(v) => Ok(v.to_string()),
        Value::Int64(v) => Ok(v.to_string()),
        Value::Uint8(v) => Ok(v.to_string()),
        Value::Uint16(v) => Ok(v.to_string()),
        Value::Uint32(v) => Ok(v.to_string()),
        Value::Uint64(v) => Ok(v.to_string()),
        Value::Float32(v) => Ok(v.to_string()),
        Value::Float64(v) => Ok(v.to_string()),
        Value::Decimal(d) => Ok(d.to_string()),
        Value::Char(c) => Ok(c.to_string()),
        Value::Bytes(b) => Ok(binary::hex_encode(b)),
        Value::Text(s) => Ok(s.clone()),
        Value::DateTime(dt) => format_datetime(*dt, ctx),
        Value::DateTimeOffset(dto) => format_datetime_offset(*dto, ctx),
        Value::Duration(d) => Ok(d.to_string()),
        Value::Uuid(id) => Ok(id.hyphenated().to_string()),
        Value::Url(u) => Ok(u.as_str().to_string()),
        Value::Enum(e) => Ok(format_enum(e, ctx)),
        Value::TypeName(t) => Ok(t.path().to_string()),
        Value::Object(_) => Err(Refusal::Incompatible),
    }
}

/// Parse text into the target kind. Absent text never reaches the codec;
/// the nullability layer short-circuits it to the target default.
pub(crate) fn parse_text(text: &str, target: Kind, ctx: &ConvertContext) -> Result<Value, Refusal> {
    match target {
        Kind::Bool => parse_bool(text).map(Value::Bool),
        Kind::Int8 => parse_num(text).map(Value::Int8),
        Kind::Int16 => parse_num(text).map(Value::Int16),
        Kind::Int32 => parse_num(text).map(Value::Int32),
        Kind::Int64 => parse_num(text).map(Value::Int64),
        Kind::Uint8 => parse_num(text).map(Value::Uint8),
        Kind::Uint16 => parse_num(text).map(Value::Uint16),
        Kind::Uint32 => parse_num(text).map(Value::Uint32),
        Kind::Uint64 => parse_num(text).map(Value::Uint64),
        Kind::Float32 => parse_num(text).map(Value::Float32),
        Kind::Float64 => parse_num(text).map(Value::Float64),
        Kind::Decimal => parse_num(text).map(Value::Decimal),
        Kind::Char => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Value::Char(c)),
                _ => Err(Refusal::Parse),
            }
        }
        Kind::Bytes => binary::hex_decode(text).map(Value::Bytes),
        Kind::Text => Ok(Value::Text(text.to_string())),
        Kind::DateTime => parse_datetime(text, ctx).map(Value::DateTime),
        Kind::DateTimeOffset => parse_datetime_offset(text, ctx).map(Value::DateTimeOffset),
        Kind::Duration => parse_num(text).map(Value::Duration),
        Kind::Uuid => Uuid::try_parse(text)
            .map(Value::Uuid)
            .map_err(|_| Refusal::Parse),
        Kind::Url => Url::parse(text).map(Value::Url).map_err(|_| Refusal::Parse),
        Kind::Enum => parse_enum(text).map(Value::Enum),
        Kind::TypeName => TypeHandle::new(text)
            .map(Value::TypeName)
            .ok_or(Refusal::Parse),
        // Object kinds are not parseable; the resolver never routes here.
        Kind::Capability | Kind::Base | Kind::Derived => Err(Refusal::Incompatible),
    }
}

fn parse_num<T: FromStr>(text: &str) -> Result<T, Refusal> {
    text.parse().map_err(|_| Refusal::Parse)
}

fn parse_bool(text: &str) -> Result<bool, Refusal> {
    if text.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if text.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(Refusal::Parse)
    }
}

// Loose enum literals: bare variant identifiers, matched pathless.
fn parse_enum(text: &str) -> Result<EnumValue, Refusal> {
    let mut bytes = text.bytes();
    let leads = bytes
        .next()
        .is_some_and(|b| b.is_ascii_alphabetic() || b == b'_');

    if leads && bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        Ok(EnumValue::loose(text))
    } else {
        Err(Refusal::Parse)
    }
}

fn format_enum(value: &EnumValue, ctx: &ConvertContext) -> String {
    // "D" selects the underlying discriminant, as with .NET-style enum
    // format strings; anything else renders the variant name.
    match (ctx.format.as_deref(), value.repr) {
        (Some("D"), Some(repr)) => repr.to_string(),
        _ => value.variant.clone(),
    }
}

fn format_datetime(value: DateTime, ctx: &ConvertContext) -> Result<String, Refusal> {
    match ctx.format.as_deref() {
        Some(spec) => {
            let items =
                time::format_description::parse_borrowed::<2>(spec).map_err(|_| Refusal::Parse)?;
            value.to_primitive().format(&items).map_err(|_| Refusal::Parse)
        }
        None => value
            .to_primitive()
            .format(datetime_format())
            .map_err(|_| Refusal::Parse),
    }
}

fn parse_datetime(text: &str, ctx: &ConvertContext) -> Result<DateTime, Refusal> {
    match ctx.format.as_deref() {
        Some(spec) => {
            let items =
                time::format_description::parse_borrowed::<2>(spec).map_err(|_| Refusal::Parse)?;
            PrimitiveDateTime::parse(text, &items)
                .map(DateTime::from_primitive)
                .map_err(|_| Refusal::Parse)
        }
        None => DateTime::from_str(text).map_err(|_| Refusal::Parse),
    }
}

fn format_datetime_offset(value: DateTimeOffset, ctx: &ConvertContext) -> Result<String, Refusal> {
    match ctx.format.as_deref() {
        Some(spec) => {
            let items =
                time::format_description::parse_borrowed::<2>(spec).map_err(|_| Refusal::Parse)?;
            value
                .to_offset_date_time()
                .format(&items)
                .map_err(|_| Refusal::Parse)
        }
        None => value
            .to_offset_date_time()
            .format(&Rfc3339)
            .map_err(|_| Refusal::Parse),
    }
}

fn parse_datetime_offset(text: &str, ctx: &ConvertContext) -> Result<DateTimeOffset, Refusal> {
    match ctx.format.as_deref() {
        Some(spec) => {
            let items =
                time::format_description::parse_borrowed::<2>(spec).map_err(|_| Refusal::Parse)?;
            OffsetDateTime::parse(text, &items)
                .map(DateTimeOffset::from_offset_date_time)
                .map_err(|_| Refusal::Parse)
        }
        None => DateTimeOffset::from_str(text).map_err(|_| Refusal::Parse),
    }
}
