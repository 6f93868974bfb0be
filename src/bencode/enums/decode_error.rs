use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unexpected end of input at offset {0}")]
    UnexpectedEnd(usize),

    #[error("value starting at offset {0} is not terminated")]
    MissingTerminator(usize),

    #[error("invalid number at offset {0}")]
    InvalidNumber(usize),

    #[error("byte string at offset {offset} declares {length} bytes but only {available} remain")]
    StringOverrun { offset: usize, length: usize, available: usize },

    #[error("unrecognized byte 0x{byte:02x} at offset {offset}")]
    UnexpectedByte { byte: u8, offset: usize },

    #[error("dictionary key at offset {0} is not a byte string")]
    NonStringKey(usize),

    #[error("nesting exceeds {0} levels")]
    TooDeep(usize),
}
