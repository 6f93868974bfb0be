//! Read-only bencode decoder.
//!
//! Trackers answer announces with a bencoded dictionary. The proxy only needs
//! to read a handful of fields out of it (`complete`, `incomplete`,
//! `interval`), so this module implements decoding only; replies are always
//! relayed to the client as the original bytes.
//!
//! # Format
//!
//! - `i<digits>e` - signed integer
//! - `<length>:<bytes>` - byte string
//! - `l<values>e` - list
//! - `d<key><value>...e` - dictionary with byte string keys
//!
//! # Example
//!
//! ```rust,ignore
//! use ratio_ghost::bencode::bencode::decode;
//!
//! let value = decode(b"d8:completei5ee")?;
//! assert_eq!(value.get(b"complete").and_then(|v| v.as_integer()), Some(5));
//! ```

/// Decoded value and decode error enumerations.
pub mod enums;

/// Accessors on decoded values.
pub mod impls;

/// The recursive decoder.
#[allow(clippy::module_inception)]
pub mod bencode;
