use crate::error::Refusal;
use uuid::Uuid;

pub(crate) const UUID_BYTE_LEN: usize = 16;

/// Big-endian byte rendering of a unique identifier.
pub(crate) fn uuid_to_bytes(id: Uuid) -> Vec<u8> {
    id.as_bytes().to_vec()
}

/// Decode a unique identifier from exactly sixteen bytes.
/// Any other length is a shape mismatch.
pub(crate) fn bytes_to_uuid(bytes: &[u8]) -> Result<Uuid, Refusal> {
    <[u8; UUID_BYTE_LEN]>::try_from(bytes)
        .map(Uuid::from_bytes)
        .map_err(|_| Refusal::Shape)
}

/// Lowercase hex rendering of a byte sequence.
pub(crate) fn hex_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push(char::from_digit(u32::from(b >> 4), 16).unwrap_or('0'));
        out.push(char::from_digit(u32::from(b & 0x0f), 16).unwrap_or('0'));
    }
    out
}

/// Decode an even-length hex string into bytes.
pub(crate) fn hex_decode(text: &str) -> Result<Vec<u8>, Refusal> {
    if text.len() % 2 != 0 {
        return Err(Refusal::Parse);
    }

    let digits = text.as_bytes();
    let mut out = Vec::with_capacity(digits.len() / 2);
    for pair in digits.chunks_exact(2) {
        let hi = (pair[0] as char).to_digit(16).ok_or(Refusal::Parse)?;
        let lo = (pair[1] as char).to_digit(16).ok_or(Refusal::Parse)?;
        out.push(((hi << 4) | lo) as u8);
    }

    Ok(out)
}
