use std::collections::BTreeMap;
use crate::bencode::enums::decoded_value::DecodedValue;

impl DecodedValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            DecodedValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            DecodedValue::ByteString(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[DecodedValue]> {
        match self {
            DecodedValue::List(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<Vec<u8>, DecodedValue>> {
        match self {
            DecodedValue::Map(value) => Some(value),
            _ => None,
        }
    }

    /// Looks up `key` when this value is a dictionary.
    pub fn get(&self, key: &[u8]) -> Option<&DecodedValue> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Reads a counter that trackers send either as an integer or, less
    /// commonly, as a byte string of ASCII digits.
    pub fn as_count(&self) -> Option<i64> {
        match self {
            DecodedValue::Integer(value) => Some(*value),
            DecodedValue::ByteString(value) => std::str::from_utf8(value).ok()?.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            DecodedValue::Integer(_) => "integer",
            DecodedValue::ByteString(_) => "byte string",
            DecodedValue::List(_) => "list",
            DecodedValue::Map(_) => "map",
        }
    }
}
