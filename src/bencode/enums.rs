pub mod decode_error;
pub mod decoded_value;
