pub mod decoded_value;
