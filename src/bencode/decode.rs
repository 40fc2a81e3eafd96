use super::error::BencodeError;
use super::value::{Dict, Value};
use bytes::Bytes;

const MAX_DEPTH: usize = 64;

/// Decodes one bencode value from the front of `data`.
///
/// Returns the value together with the number of bytes consumed. Bytes after
/// the first complete value are ignored, which matches torrent files in the
/// wild that carry padding or junk after the root dictionary.
pub fn decode_prefix(data: &[u8]) -> Result<(Value, usize), BencodeError> {
    let mut pos = 0;
    let value = decode_value(data, &mut pos, 0)?;
    Ok((value, pos))
}

/// Decodes one bencode value from the front of `data`, discarding any
/// trailing bytes.
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    decode_prefix(data).map(|(value, _)| value)
}

fn decode_value(data: &[u8], pos: &mut usize, depth: usize) -> Result<Value, BencodeError> {
    if depth > MAX_DEPTH {
        return Err(BencodeError::NestingTooDeep(*pos));
    }

    if *pos >= data.len() {
        return Err(BencodeError::UnexpectedEof(data.len()));
    }

    match data[*pos] {
        b'i' => decode_integer(data, pos),
        b'l' => decode_list(data, pos, depth),
        b'd' => decode_dict(data, pos, depth),
        b'0'..=b'9' => decode_bytes(data, pos),
        marker => Err(BencodeError::InvalidTypeMarker {
            marker,
            offset: *pos,
        }),
    }
}

fn decode_integer(data: &[u8], pos: &mut usize) -> Result<Value, BencodeError> {
    *pos += 1;

    let start = *pos;
    while *pos < data.len() && data[*pos] != b'e' {
        *pos += 1;
    }

    if *pos >= data.len() {
        return Err(BencodeError::UnexpectedEof(data.len()));
    }

    let int_str = std::str::from_utf8(&data[start..*pos])
        .map_err(|_| BencodeError::InvalidInteger(start))?;

    if int_str.is_empty() {
        return Err(BencodeError::InvalidInteger(start));
    }

    // i64::from_str accepts a leading '+', bencode does not.
    if int_str.starts_with('+') {
        return Err(BencodeError::InvalidInteger(start));
    }

    if int_str.starts_with("-0") || (int_str.starts_with('0') && int_str.len() > 1) {
        return Err(BencodeError::InvalidInteger(start));
    }

    let value: i64 = int_str
        .parse()
        .map_err(|_| BencodeError::InvalidInteger(start))?;

    *pos += 1;
    Ok(Value::Integer(value))
}

fn decode_bytes(data: &[u8], pos: &mut usize) -> Result<Value, BencodeError> {
    let start = *pos;
    while *pos < data.len() && data[*pos] != b':' {
        *pos += 1;
    }

    if *pos >= data.len() {
        return Err(BencodeError::UnexpectedEof(data.len()));
    }

    let len_str = std::str::from_utf8(&data[start..*pos])
        .map_err(|_| BencodeError::InvalidStringLength(start))?;

    let len: usize = len_str
        .parse()
        .map_err(|_| BencodeError::InvalidStringLength(start))?;

    *pos += 1;

    // Subtracting avoids overflow on absurd declared lengths.
    if data.len() - *pos < len {
        return Err(BencodeError::UnexpectedEof(data.len()));
    }

    let bytes = Bytes::copy_from_slice(&data[*pos..*pos + len]);
    *pos += len;

    Ok(Value::Bytes(bytes))
}

fn decode_list(data: &[u8], pos: &mut usize, depth: usize) -> Result<Value, BencodeError> {
    *pos += 1;
    let mut list = Vec::new();

    while *pos < data.len() && data[*pos] != b'e' {
        list.push(decode_value(data, pos, depth + 1)?);
    }

    if *pos >= data.len() {
        return Err(BencodeError::UnexpectedEof(data.len()));
    }

    *pos += 1;
    Ok(Value::List(list))
}

fn decode_dict(data: &[u8], pos: &mut usize, depth: usize) -> Result<Value, BencodeError> {
    *pos += 1;
    let mut dict = Dict::new();

    while *pos < data.len() && data[*pos] != b'e' {
        let key_start = *pos;
        let key = match decode_value(data, pos, depth + 1)? {
            Value::Bytes(b) => b,
            _ => return Err(BencodeError::InvalidDictKey(key_start)),
        };

        let value = decode_value(data, pos, depth + 1)?;
        insert(&mut dict, key, value);
    }

    if *pos >= data.len() {
        return Err(BencodeError::UnexpectedEof(data.len()));
    }

    *pos += 1;
    Ok(Value::Dict(dict))
}

// Duplicate keys keep the first occurrence's position but take the last
// occurrence's value.
fn insert(dict: &mut Dict, key: Bytes, value: Value) {
    match dict.iter_mut().find(|(k, _)| *k == key) {
        Some((_, slot)) => *slot = value,
        None => dict.push((key, value)),
    }
}
