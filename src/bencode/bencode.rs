use std::collections::BTreeMap;
use crate::bencode::enums::decode_error::DecodeError;
use crate::bencode::enums::decoded_value::DecodedValue;

pub const MAX_NESTING_DEPTH: usize = 64;

/// Decodes the first value in `data`. Bytes after that value are ignored.
pub fn decode(data: &[u8]) -> Result<DecodedValue, DecodeError> {
    decode_at(data, 0).map(|(value, _)| value)
}

/// Decodes one value starting at `offset`, returning it together with the
/// offset of the first byte after it.
pub fn decode_at(data: &[u8], offset: usize) -> Result<(DecodedValue, usize), DecodeError> {
    decode_next(data, offset, 0)
}

fn decode_next(data: &[u8], index: usize, depth: usize) -> Result<(DecodedValue, usize), DecodeError> {
    if depth > MAX_NESTING_DEPTH {
        return Err(DecodeError::TooDeep(MAX_NESTING_DEPTH));
    }
    match data.get(index) {
        None => Err(DecodeError::UnexpectedEnd(index)),
        Some(b'i') => decode_integer(data, index),
        Some(b'0'..=b'9') => decode_byte_string(data, index),
        Some(b'l') => decode_list(data, index, depth),
        Some(b'd') => decode_map(data, index, depth),
        Some(&byte) => Err(DecodeError::UnexpectedByte { byte, offset: index }),
    }
}

fn decode_integer(data: &[u8], index: usize) -> Result<(DecodedValue, usize), DecodeError> {
    let end = find_byte(data, index + 1, b'e').ok_or(DecodeError::MissingTerminator(index))?;
    let number = parse_number::<i64>(&data[index + 1..end], index)?;
    Ok((DecodedValue::Integer(number), end + 1))
}

fn decode_byte_string(data: &[u8], index: usize) -> Result<(DecodedValue, usize), DecodeError> {
    let colon = find_byte(data, index, b':').ok_or(DecodeError::MissingTerminator(index))?;
    let length = parse_number::<usize>(&data[index..colon], index)?;
    let start = colon + 1;
    let available = data.len() - start;
    if length > available {
        return Err(DecodeError::StringOverrun { offset: index, length, available });
    }
    Ok((DecodedValue::ByteString(data[start..start + length].to_vec()), start + length))
}

fn decode_list(data: &[u8], index: usize, depth: usize) -> Result<(DecodedValue, usize), DecodeError> {
    let mut items = Vec::new();
    let mut cursor = index + 1;
    loop {
        match data.get(cursor) {
            None => return Err(DecodeError::MissingTerminator(index)),
            Some(b'e') => return Ok((DecodedValue::List(items), cursor + 1)),
            Some(_) => {
                let (item, next) = decode_next(data, cursor, depth + 1)?;
                items.push(item);
                cursor = next;
            }
        }
    }
}

fn decode_map(data: &[u8], index: usize, depth: usize) -> Result<(DecodedValue, usize), DecodeError> {
    let mut map = BTreeMap::new();
    let mut cursor = index + 1;
    loop {
        match data.get(cursor) {
            None => return Err(DecodeError::MissingTerminator(index)),
            Some(b'e') => return Ok((DecodedValue::Map(map), cursor + 1)),
            Some(_) => {
                let (key, next) = decode_next(data, cursor, depth + 1)?;
                let key = match key {
                    DecodedValue::ByteString(key) => key,
                    _ => return Err(DecodeError::NonStringKey(cursor)),
                };
                if next >= data.len() {
                    return Err(DecodeError::MissingTerminator(index));
                }
                let (value, next) = decode_next(data, next, depth + 1)?;
                // later duplicates replace earlier ones
                map.insert(key, value);
                cursor = next;
            }
        }
    }
}

fn find_byte(data: &[u8], from: usize, needle: u8) -> Option<usize> {
    data.get(from..)?.iter().position(|byte| *byte == needle).map(|position| position + from)
}

fn parse_number<T: std::str::FromStr>(digits: &[u8], offset: usize) -> Result<T, DecodeError> {
    std::str::from_utf8(digits)
        .ok()
        .and_then(|text| text.parse::<T>().ok())
        .ok_or(DecodeError::InvalidNumber(offset))
}
