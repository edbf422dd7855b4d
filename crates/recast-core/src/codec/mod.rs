//! Primitive codec: textual parse/format for every non-object kind, plus
//! the one binary pairing (16-byte sequence ↔ unique identifier).

mod binary;
mod text;


pub(crate) use binary::{UUID_BYTE_LEN, bytes_to_uuid, uuid_to_bytes};
pub(crate) use text::{format_value, parse_text};
