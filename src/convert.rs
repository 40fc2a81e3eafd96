//! One-shot conversion of `.torrent` bytes into a magnet URI.
//!
//! [`convert`] is the whole pipeline in one call: decode the bencode
//! document, hash its `info` dictionary, collect the display name and
//! trackers, and render the URI. It takes bytes rather than a path so
//! callers decide how files are read and how failures are reported.
//!
//! # Examples
//!
//! ```
//! use magnetize::convert;
//!
//! let uri = convert(b"d4:infod4:name4:test12:piece lengthi16384eee").unwrap();
//! assert_eq!(
//!     uri,
//!     "magnet:?xt=urn:btih:18f630e31806cc7055fdc88f6bb7301051eee4c2&dn=test"
//! );
//! ```

use thiserror::Error;

use crate::bencode::{self, BencodeError};
use crate::metainfo::{compute_info_hash, MagnetLink, MetainfoError};

/// Errors from converting one torrent's bytes into a magnet URI.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The data is not valid bencode.
    #[error("bencode error: {0}")]
    Bencode(#[from] BencodeError),

    /// The decoded document has no hashable `info` dictionary.
    #[error("metainfo error: {0}")]
    Metainfo(#[from] MetainfoError),
}

/// Converts the raw bytes of a `.torrent` file into a magnet URI.
pub fn convert(data: &[u8]) -> Result<String, ConvertError> {
    let document = bencode::decode(data)?;
    let info_hash = compute_info_hash(&document)?;
    let magnet = MagnetLink::new(info_hash, &document);
    Ok(magnet.to_uri())
}
