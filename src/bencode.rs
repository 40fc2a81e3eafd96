//! Bencode encoding and decoding ([BEP-3]).
//!
//! Bencode is the serialization format used throughout BitTorrent for storing
//! and transmitting structured data, most notably `.torrent` files.
//!
//! # Data Types
//!
//! Bencode supports four data types:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! Dictionaries are kept in parse order rather than re-sorted on the way in,
//! since `.torrent` files in the wild do not always follow the sorted-key
//! rule. The encoder always emits keys in sorted order, so round-tripping a
//! nonconforming file produces its canonical form.
//!
//! # Examples
//!
//! ## Decoding bencode data
//!
//! ```
//! use magnetize::bencode::{decode, Value};
//!
//! // Decode an integer
//! let value = decode(b"i42e").unwrap();
//! assert_eq!(value.as_integer(), Some(42));
//!
//! // Decode a string
//! let value = decode(b"4:spam").unwrap();
//! assert_eq!(value.as_str(), Some("spam"));
//!
//! // Decode a list
//! let value = decode(b"l4:spami42ee").unwrap();
//! let list = value.as_list().unwrap();
//! assert_eq!(list.len(), 2);
//!
//! // Decode a dictionary
//! let value = decode(b"d3:foo3:bare").unwrap();
//! let foo = value.get(b"foo").unwrap();
//! assert_eq!(foo.as_str(), Some("bar"));
//! ```
//!
//! ## Encoding bencode data
//!
//! ```
//! use magnetize::bencode::{encode, Value};
//! use bytes::Bytes;
//!
//! // Encode an integer
//! assert_eq!(encode(&Value::Integer(42)), b"i42e");
//!
//! // Encode a string
//! assert_eq!(encode(&Value::string("hello")), b"5:hello");
//!
//! // Encode a list
//! let list = Value::List(vec![
//!     Value::Integer(1),
//!     Value::Integer(2),
//! ]);
//! assert_eq!(encode(&list), b"li1ei2ee");
//!
//! // Encode a dictionary
//! let dict = Value::Dict(vec![
//!     (Bytes::from_static(b"key"), Value::string("value")),
//! ]);
//! assert_eq!(encode(&dict), b"d3:key5:valuee");
//! ```
//!
//! ## Building complex structures
//!
//! ```
//! use magnetize::bencode::Value;
//! use bytes::Bytes;
//!
//! // Using From implementations for convenience
//! let int: Value = 42i64.into();
//! let string: Value = "hello".into();
//!
//! // Building a torrent-like structure
//! let info = Value::Dict(vec![
//!     (Bytes::from_static(b"name"), Value::string("example.txt")),
//!     (Bytes::from_static(b"length"), Value::Integer(1024)),
//!     (Bytes::from_static(b"piece length"), Value::Integer(16384)),
//! ]);
//!
//! let torrent = Value::Dict(vec![
//!     (
//!         Bytes::from_static(b"announce"),
//!         Value::string("http://tracker.example.com/announce"),
//!     ),
//!     (Bytes::from_static(b"info"), info),
//! ]);
//! # let _ = torrent;
//! ```
//!
//! # Error Handling
//!
//! Decoding can fail for various reasons:
//!
//! - [`BencodeError::UnexpectedEof`] - Input ended unexpectedly
//! - [`BencodeError::InvalidTypeMarker`] - Byte that starts no bencode type
//! - [`BencodeError::InvalidInteger`] - Malformed integer (e.g., leading zeros)
//! - [`BencodeError::InvalidStringLength`] - Malformed byte string length prefix
//! - [`BencodeError::InvalidDictKey`] - Dictionary key that is not a byte string
//! - [`BencodeError::NestingTooDeep`] - Recursion limit exceeded (max 64 levels)
//!
//! Every error carries the byte offset where it was detected. Decoding stops
//! after the first complete value; trailing bytes are not an error. Use
//! [`decode_prefix`] when the caller needs to know how many bytes the value
//! occupied.
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod encode;
mod error;
mod value;

pub use decode::{decode, decode_prefix};
pub use encode::{encode, encode_into};
pub use error::BencodeError;
pub use value::{Dict, Value};
